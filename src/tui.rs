// src/tui.rs

use crate::config::Config;
use crate::constants::INPUT_POLL_MS;
use crate::controller::{ControllerAction, ScreenController};
use crate::errors::BubbleChatResult;
use crate::reply::ReplySource;
use crate::ui;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io::{self, Stdout, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};
use tokio::{sync::mpsc, task::JoinHandle};

/// Enum for different types of events.
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the chat screen until the user quits.
pub async fn run(config: &Config) -> BubbleChatResult<()> {
    let mut terminal = setup_terminal()?;

    log::info!("chat screen started");
    let controller = ScreenController::with_prefix(config.reply_prefix.clone());
    let res = run_app(
        &mut terminal,
        controller,
        Duration::from_millis(config.tick_rate_ms),
    )
    .await;

    let restored = restore_terminal(&mut terminal);
    log::info!("chat screen stopped");

    res.and(restored)
}

fn setup_terminal() -> BubbleChatResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;

    let setup = (|| {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Terminal::new(CrosstermBackend::new(stdout))
    })();

    setup.map_err(|e| {
        if let Err(reset) = reset_terminal(&mut io::stdout()) {
            log::error!("failed to reset terminal after setup error: {}", reset);
        }
        e.into()
    })
}

/// Runs every reset step even if an earlier one fails, returning the first
/// error.
fn reset_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let mouse = execute!(out, DisableMouseCapture);
    let screen = execute!(out, LeaveAlternateScreen);
    raw.and(mouse).and(screen)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> BubbleChatResult<()> {
    let reset = reset_terminal(terminal.backend_mut());
    let cursor = terminal.show_cursor();
    let restored = reset.and(cursor);
    if let Err(e) = &restored {
        log::error!("failed to restore terminal: {}", e);
    }
    Ok(restored?)
}

fn poll_terminal(timeout: Duration) -> io::Result<Option<CEvent>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forwards events from `next_event` until `stop` is set or the receiver is
/// gone. `stop` is checked on every poll, so the thread exits within one
/// poll timeout.
fn spawn_reader<F>(
    mut next_event: F,
    tx: mpsc::Sender<Event>,
    stop: Arc<AtomicBool>,
    tick_rate: Duration,
) -> JoinHandle<()>
where
    F: FnMut(Duration) -> io::Result<Option<CEvent>> + Send + 'static,
{
    // crossterm's poll blocks, so the reader lives on a blocking thread.
    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        while !stop.load(Ordering::Relaxed) {
            match next_event(Duration::from_millis(INPUT_POLL_MS)) {
                Ok(Some(event)) => {
                    if stop.load(Ordering::Relaxed) || tx.blocking_send(Event::Input(event)).is_err()
                    {
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("failed to read terminal event: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    })
}

/// Main loop of the application. The input reader is stopped and joined
/// before this returns, so no keystrokes are taken once the terminal is
/// handed back.
async fn run_app<B: Backend, R: ReplySource>(
    terminal: &mut Terminal<B>,
    mut controller: ScreenController<R>,
    tick_rate: Duration,
) -> BubbleChatResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    let stop = Arc::new(AtomicBool::new(false));
    let reader = spawn_reader(poll_terminal, tx, Arc::clone(&stop), tick_rate);

    let res = event_loop(terminal, &mut controller, &mut rx).await;

    stop.store(true, Ordering::Relaxed);
    drop(rx);
    if let Err(e) = reader.await {
        log::error!("terminal event reader panicked: {}", e);
    }

    log::info!(
        "leaving with {} messages in the conversation",
        controller.conversation().len()
    );
    res
}

/// Events are handled one at a time, so each send finishes before the next
/// key is looked at.
async fn event_loop<B: Backend, R: ReplySource>(
    terminal: &mut Terminal<B>,
    controller: &mut ScreenController<R>,
    rx: &mut mpsc::Receiver<Event>,
) -> BubbleChatResult<()> {
    loop {
        terminal.draw(|f| ui::draw(f, controller))?;

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                if controller.handle_key(key) == ControllerAction::Quit {
                    return Ok(());
                }
            }
            Some(Event::Input(CEvent::Mouse(mouse))) => controller.handle_mouse(mouse),
            Some(Event::Input(CEvent::Resize(width, height))) => {
                log::info!("terminal resized to {}x{}", width, height);
            }
            Some(Event::Input(_)) | Some(Event::Tick) => {}
            None => {
                log::warn!("terminal event reader stopped");
                return Ok(());
            }
        }
    }
}
