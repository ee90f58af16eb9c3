use anyhow::Result;
use boardblocks_config::Config;
use boardblocks_engine::editing::ArrowKey;
use boardblocks_engine::{io, BlocksEditor, BoardFile, Cursor, FileStore, Registry};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::{env, io::stdout, path::PathBuf, process};
use tracing::warn;

/// Which panel receives key events.
#[derive(PartialEq)]
enum Pane {
    Boards,
    Blocks,
}

struct App {
    board_files: Vec<BoardFile>,
    file_list_state: ListState,
    editor: Option<BlocksEditor<FileStore>>,
    pane: Pane,
    /// Text currently typed into the compose/edit line.
    input: String,
    status: Option<String>,
    runtime: tokio::runtime::Runtime,
}

impl App {
    fn new(boards_path: PathBuf) -> Result<Self> {
        let board_files = io::scan_board_files(&boards_path)?;

        let mut app = Self {
            board_files,
            file_list_state: ListState::default(),
            editor: None,
            pane: Pane::Boards,
            input: String::new(),
            status: None,
            runtime: tokio::runtime::Runtime::new()?,
        };

        if !app.board_files.is_empty() {
            app.file_list_state.select(Some(0));
        }

        Ok(app)
    }

    fn next_board(&mut self) {
        if self.board_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.board_files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
    }

    fn previous_board(&mut self) {
        if self.board_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.board_files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
    }

    fn open_selected_board(&mut self) {
        let Some(index) = self.file_list_state.selected() else {
            return;
        };
        let Some(file) = self.board_files.get(index) else {
            return;
        };

        match FileStore::open(file.path()) {
            Ok(store) => {
                let sequence = store.board().sequence();
                self.editor = Some(BlocksEditor::with_sequence(
                    Registry::with_builtin_types(),
                    store,
                    sequence,
                ));
                self.pane = Pane::Blocks;
                self.input.clear();
                self.status = None;
            }
            Err(e) => {
                warn!("failed to open board: {e}");
                self.status = Some(format!("Error opening board: {e}"));
            }
        }
    }

    fn handle_arrow(&mut self, key: ArrowKey) {
        if let Some(editor) = &mut self.editor {
            editor.handle_arrow(key);
            // Pre-fill the input line with the payload of the block now
            // open for edit, so Enter round-trips it
            self.input = match editor.cursor() {
                Cursor::Editing(id) => editor
                    .sequence()
                    .get(id)
                    .map(|b| b.value.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            };
        }
    }

    /// Commit the input line: modify the block under the cursor, or create
    /// a new one at the compose position. Slash-command input switches the
    /// compose type first; any text after the command becomes the payload.
    fn commit_input(&mut self) {
        let Some(editor) = &mut self.editor else {
            return;
        };

        let mut value = self.input.trim().to_string();
        if value.starts_with('/') {
            let (command, rest) = match value.split_once(' ') {
                Some((command, rest)) => (command.to_string(), rest.to_string()),
                None => (value.clone(), String::new()),
            };
            if editor.select_slash_command(&command).is_none() {
                self.status = Some(format!("No content type matches {command}"));
                return;
            }
            value = rest;
        }

        let result = match editor.cursor() {
            Cursor::Editing(id) => self
                .runtime
                .block_on(editor.modify(id, value))
                .map(|()| id),
            _ => self.runtime.block_on(editor.create(value)),
        };

        match result {
            Ok(_) => {
                self.input.clear();
                self.status = None;
            }
            // Cursor and sequence did not advance; leave the input for retry
            Err(e) => self.status = Some(format!("Save failed: {e}")),
        }
    }

    fn close_board(&mut self) {
        if let Some(editor) = &mut self.editor {
            editor.blur();
        }
        self.pane = Pane::Boards;
        self.input.clear();
    }
}

fn main() -> Result<()> {
    // Optional file logging, gated on RUST_LOG so the TUI stays clean
    let _log_guard = if env::var("RUST_LOG").is_ok() {
        let appender = tracing_appender::rolling::never(".", "boardblocks.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    } else {
        None
    };

    // Determine boards path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let boards_path;
    let from_config;

    if args.len() == 2 {
        boards_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                boards_path = config.boards_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No boards path provided and no config file found");
                eprintln!("Usage: {} <boards-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <boards-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [boards-folder-path]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_boards_dir(&boards_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Boards path '{}'{} is invalid: {e}",
            boards_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(boards_path)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match app.pane {
                Pane::Boards => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.next_board(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_board(),
                    KeyCode::Enter => app.open_selected_board(),
                    _ => {}
                },
                Pane::Blocks => match key.code {
                    KeyCode::Esc => app.close_board(),
                    KeyCode::Up => app.handle_arrow(ArrowKey::Up),
                    KeyCode::Down => app.handle_arrow(ArrowKey::Down),
                    KeyCode::Enter => app.commit_input(),
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    KeyCode::Char(c) => app.input.push(c),
                    _ => {}
                },
            }
        }
    }
}

fn block_line(content_type: &str, value: &str) -> String {
    match content_type {
        "h1" => format!("# {value}"),
        "h2" => format!("## {value}"),
        "h3" => format!("### {value}"),
        "list-item" => format!("• {value}"),
        "checkbox" => format!("[ ] {value}"),
        "quote" => format!("> {value}"),
        "divider" => "────────".to_string(),
        "image" => format!("[image] {value}"),
        "video" => format!("[video] {value}"),
        _ => value.to_string(),
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(outer[0]);

    // Boards panel
    let board_items: Vec<ListItem> = app
        .board_files
        .iter()
        .map(|file| ListItem::new(Line::from(Span::raw(file.display_name().to_string()))))
        .collect();

    let boards_list = List::new(board_items)
        .block(Block::default().borders(Borders::ALL).title("Boards"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(boards_list, chunks[0], &mut app.file_list_state);

    // Blocks panel
    let block_lines: Vec<Line> = match &app.editor {
        Some(editor) => {
            let mut lines: Vec<Line> = editor
                .sequence()
                .blocks()
                .iter()
                .map(|b| {
                    let text = block_line(&b.content_type, &b.value);
                    if editor.cursor().is_editing(b.id) {
                        Line::from(Span::styled(
                            text,
                            Style::default().add_modifier(Modifier::REVERSED),
                        ))
                    } else {
                        Line::from(Span::raw(text))
                    }
                })
                .collect();
            let compose_marker = format!("+ [{}] {}", editor.compose_type(), app.input);
            lines.push(Line::from(Span::styled(
                compose_marker,
                Style::default().fg(Color::DarkGray),
            )));
            lines
        }
        None => vec![Line::from("Select a board and press Enter")],
    };

    let blocks = Paragraph::new(block_lines)
        .block(Block::default().borders(Borders::ALL).title("Blocks"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(blocks, chunks[1]);

    // Status / help line
    let help = match (&app.pane, &app.status) {
        (_, Some(status)) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )),
        (Pane::Boards, None) => Line::from(
            "q: Quit | ↑/k ↓/j: Select board | Enter: Open",
        ),
        (Pane::Blocks, None) => Line::from(
            "Esc: Back | ↑/↓: Navigate blocks | type then Enter: Save | /command: Set type",
        ),
    };
    f.render_widget(Paragraph::new(vec![help]).block(Block::default()), outer[1]);
}
