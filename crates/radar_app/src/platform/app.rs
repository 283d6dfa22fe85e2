use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use radar_client::ClientSettings;
use radar_core::{update, DashboardState, Msg};
use radar_logging::radar_info;

use super::effects::EffectRunner;
use super::logging;
use super::ui;
use super::ui::constants::{INPUT_POLL, RELOAD_INTERVAL, STATUS_POLL_INTERVAL};
use super::ui::layout::CardRects;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run_app() -> Result<()> {
    logging::initialize();

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn client_settings() -> ClientSettings {
    let mut settings = ClientSettings::default();
    if let Ok(base_url) = std::env::var("RADAR_API_URL") {
        settings.base_url = base_url;
    }
    settings
}

fn run_loop(terminal: &mut Term) -> Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(client_settings());

    // Both timers fire once immediately, which doubles as the initial load
    // and the first status poll.
    spawn_interval(msg_tx.clone(), RELOAD_INTERVAL, Msg::ReloadRequested);
    spawn_interval(msg_tx.clone(), STATUS_POLL_INTERVAL, Msg::PollTick);

    radar_info!("Topic Radar starting");

    let mut state = DashboardState::new();
    let mut rects = CardRects::default();
    let mut drag = DragInput::default();
    let mut scroll: usize = 0;
    let mut needs_redraw = true;
    let mut tick: u64 = 0;

    loop {
        tick = tick.wrapping_add(1);
        radar_logging::set_loop_tick(tick);

        if event::poll(INPUT_POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match key_action(key, &mut scroll, &mut needs_redraw) {
                        KeyAction::Quit => break,
                        KeyAction::Send(msg) => dispatch(&mut state, &runner, msg),
                        KeyAction::None => {}
                    }
                }
                Event::Mouse(mouse) => {
                    for msg in drag.handle(mouse, &rects) {
                        dispatch(&mut state, &runner, msg);
                    }
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        while let Some(msg) = runner.try_recv() {
            dispatch(&mut state, &runner, msg);
        }
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, &runner, msg);
        }

        if state.consume_dirty() || needs_redraw {
            needs_redraw = false;
            let view = state.view();
            scroll = scroll.min(view.cards.len().saturating_sub(1));
            terminal.draw(|frame| {
                rects = ui::render::render(frame, &view, scroll);
            })?;
        }
    }

    Ok(())
}

fn dispatch(state: &mut DashboardState, runner: &EffectRunner, msg: Msg) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
}

fn spawn_interval(msg_tx: mpsc::Sender<Msg>, interval: Duration, msg: Msg) {
    thread::spawn(move || {
        while msg_tx.send(msg.clone()).is_ok() {
            thread::sleep(interval);
        }
    });
}

enum KeyAction {
    None,
    Quit,
    Send(Msg),
}

fn key_action(key: KeyEvent, scroll: &mut usize, needs_redraw: &mut bool) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('r') => KeyAction::Send(Msg::RefreshNewsRequested),
        KeyCode::Char('s') => KeyAction::Send(Msg::RefreshSummaryRequested),
        KeyCode::Char('R') => KeyAction::Send(Msg::ReloadRequested),
        KeyCode::Up => {
            *scroll = scroll.saturating_sub(1);
            *needs_redraw = true;
            KeyAction::None
        }
        KeyCode::Down => {
            *scroll += 1;
            *needs_redraw = true;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Translates raw mouse events into drag-gesture messages. A drag only
/// starts on a card's handle region; moving across cards produces
/// leave/enter pairs; releasing outside any card cancels.
#[derive(Default)]
struct DragInput {
    active: bool,
    hovered: Option<String>,
}

impl DragInput {
    fn handle(&mut self, mouse: MouseEvent, rects: &CardRects) -> Vec<Msg> {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(card) = rects.handle_at(x, y) else {
                    return Vec::new();
                };
                self.active = true;
                self.hovered = None;
                vec![Msg::DragStarted {
                    id: card.id.clone(),
                }]
            }
            MouseEventKind::Drag(MouseButton::Left) if self.active => {
                let over = rects.card_at(x, y).map(|card| card.id.clone());
                if over == self.hovered {
                    return Vec::new();
                }
                let mut msgs = Vec::new();
                if let Some(left) = self.hovered.take() {
                    msgs.push(Msg::DragLeft { id: left });
                }
                if let Some(entered) = over.clone() {
                    msgs.push(Msg::DragEntered { id: entered });
                }
                self.hovered = over;
                msgs
            }
            MouseEventKind::Up(MouseButton::Left) if self.active => {
                self.active = false;
                self.hovered = None;
                match rects.card_at(x, y) {
                    Some(card) => vec![Msg::DragDropped {
                        target: card.id.clone(),
                    }],
                    None => vec![Msg::DragCancelled],
                }
            }
            _ => Vec::new(),
        }
    }
}
