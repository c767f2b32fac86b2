use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use client_logging::{client_info, client_warn};
use docquery_api::ApiHandle;
use docquery_core::{update, AppState, Msg};

use super::command::{self, InputCommand};
use super::config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

/// Cadence of the Tick message that ages transient banners.
const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// How long to block on terminal events before servicing the message queue.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    let config = config::load();
    logging::initialize(LogDestination::File);
    client_info!("docquery starting against {}", config.api.base_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let api = ApiHandle::new(config.api)?;
    let runner = EffectRunner::new(api, msg_tx.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &runner, msg_tx, msg_rx);

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runner: &EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    let mut state = AppState::new();
    let mut input = String::new();
    let mut scroll: u16 = 0;
    let mut running = true;
    let mut needs_render = true;
    let mut last_tick = Instant::now();

    // Mirror the page-load stats refresh: a document may already be loaded
    // server-side from a previous session.
    let _ = msg_tx.send(Msg::StatsRefreshRequested);

    while running {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(
                        key,
                        &state,
                        &msg_tx,
                        &mut input,
                        &mut scroll,
                        &mut running,
                        &mut needs_render,
                    );
                }
                Event::Resize(_, _) => needs_render = true,
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            last_tick = Instant::now();
            let _ = msg_tx.send(Msg::Tick);
        }

        while let Ok(msg) = msg_rx.try_recv() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.run(effects);
        }

        if state.consume_dirty() {
            needs_render = true;
        }
        if needs_render {
            needs_render = false;
            let view = state.view();
            terminal.draw(|frame| ui::render(frame, &view, &input, scroll))?;
        }
    }

    client_info!("docquery shutting down");
    Ok(())
}

fn handle_key(
    key: event::KeyEvent,
    state: &AppState,
    msg_tx: &mpsc::Sender<Msg>,
    input: &mut String,
    scroll: &mut u16,
    running: &mut bool,
    needs_render: &mut bool,
) {
    // While the clear prompt is armed it captures all input.
    if state.confirm_clear() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let _ = msg_tx.send(Msg::ClearConfirmed);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                let _ = msg_tx.send(Msg::ClearCancelled);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => *running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            *running = false;
        }
        KeyCode::Enter => {
            let line = std::mem::take(input);
            *scroll = 0;
            *needs_render = true;
            match command::parse(&line) {
                InputCommand::Ask(question) => {
                    let _ = msg_tx.send(Msg::AskSubmitted { question });
                }
                InputCommand::Upload(path) => {
                    let _ = msg_tx.send(Msg::UploadPicked { path });
                }
                InputCommand::Clear => {
                    let _ = msg_tx.send(Msg::ClearRequested);
                }
                InputCommand::Quit => *running = false,
                InputCommand::Unknown(name) => {
                    client_warn!("unknown command: {name}");
                    let _ = msg_tx.send(Msg::UnknownCommand { name });
                }
                InputCommand::Empty => {}
            }
        }
        KeyCode::Backspace => {
            input.pop();
            *needs_render = true;
        }
        KeyCode::PageUp => {
            *scroll = scroll.saturating_add(5);
            *needs_render = true;
        }
        KeyCode::PageDown => {
            *scroll = scroll.saturating_sub(5);
            *needs_render = true;
        }
        KeyCode::Char(c) => {
            input.push(c);
            *needs_render = true;
        }
        _ => {}
    }
}
