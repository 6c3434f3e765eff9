//! Traceline TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use traceline_tui::config::TuiConfig;
use traceline_tui::error::TuiError;
use traceline_tui::events::TuiEvent;
use traceline_tui::keys::{map_key, Action};
use traceline_tui::nav::View;
use traceline_tui::state::App;
use traceline_tui::views::render_view;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config)?;

    let mut app = App::new(config)?;
    app.ensure_view_loaded();

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                handle_tick(&mut app);
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event).await? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &TuiConfig) -> Result<(), TuiError> {
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_tick(app: &mut App) {
    app.sync_queries();
    if app.nav.take_redirect() {
        app.enter_login("Session expired. Sign in again.");
    }
}

async fn handle_event(app: &mut App, event: TuiEvent) -> Result<bool, TuiError> {
    match event {
        TuiEvent::Input(key) => {
            if key.kind != KeyEventKind::Press {
                return Ok(false);
            }
            return handle_key(app, key).await;
        }
        TuiEvent::Resize { .. } | TuiEvent::Tick => {}
    }
    Ok(false)
}

async fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool, TuiError> {
    // Ctrl-C always exits, whatever is focused.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    if app.modal.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.modal = None;
        }
        return Ok(false);
    }

    if app.confirm.is_some() {
        match key.code {
            KeyCode::Enter => app.execute_confirmed().await,
            KeyCode::Esc => app.confirm = None,
            _ => {}
        }
        return Ok(false);
    }

    if app.form.is_some() || app.active_view == View::Login {
        handle_form_key(app, key).await;
        return Ok(false);
    }

    if let Some(action) = map_key(key) {
        return handle_action(app, action).await;
    }
    Ok(false)
}

/// Keys while a form (or the login screen) has focus: characters edit the
/// focused field, everything else is form navigation.
async fn handle_form_key(app: &mut App, key: KeyEvent) {
    let login = app.active_view == View::Login && app.form.is_none();
    match key.code {
        KeyCode::Esc => {
            if !login {
                app.form = None;
            }
        }
        KeyCode::Enter => {
            if login {
                app.submit_login().await;
            } else {
                app.submit_form().await;
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            if login {
                app.login_form.focus_next();
            } else if let Some(form) = app.form.as_mut() {
                form.state.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if login {
                app.login_form.focus_previous();
            } else if let Some(form) = app.form.as_mut() {
                form.state.focus_previous();
            }
        }
        KeyCode::Backspace => {
            if login {
                app.login_form.backspace();
            } else if let Some(form) = app.form.as_mut() {
                form.state.backspace();
            }
        }
        KeyCode::Char(c) => {
            if login {
                app.login_form.insert_char(c);
            } else if let Some(form) = app.form.as_mut() {
                form.state.insert_char(c);
            }
        }
        _ => {}
    }
}

async fn handle_action(app: &mut App, action: Action) -> Result<bool, TuiError> {
    match action {
        Action::Quit => return Ok(true),
        Action::NextView => app.set_view(app.active_view.next()),
        Action::PrevView => app.set_view(app.active_view.previous()),
        Action::SwitchView(index) => {
            if let Some(view) = View::from_index(index) {
                app.set_view(view);
            }
        }
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::MoveLeft => app.cycle_status_filter(false),
        Action::MoveRight => app.cycle_status_filter(true),
        Action::NewItem => app.open_create_form(),
        Action::EditItem => app.open_edit_form(),
        Action::DeleteItem => app.request_delete(),
        Action::PrimaryAction => app.primary_action().await,
        Action::SecondaryAction => app.secondary_action().await,
        Action::Refresh => app.refresh_active_view(),
        Action::Logout => app.logout().await,
        Action::OpenHelp => app.open_help(),
        Action::Confirm | Action::Cancel => {}
    }
    Ok(false)
}
