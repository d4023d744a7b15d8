//! TUI application state and event loop

use crate::game::{Event, Game, Outcome, RoundStatus, Snapshot};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Length of one animation tick
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Seconds the answer stays visible (and hidden) while blinking after a loss
pub const BLINK_SECS: u64 = 3;

const TICKS_PER_SEC: u64 = 1000 / TICK_RATE.as_millis() as u64;
const BLINK_PERIOD_TICKS: u64 = 2 * BLINK_SECS * TICKS_PER_SEC;

/// Application state
pub struct App<S: WordSource> {
    pub game: Game<S>,
    pub ticks: u64,
    pub should_quit: bool,
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub const fn new(game: Game<S>) -> Self {
        Self {
            game,
            ticks: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    /// Feed a terminal key event into the game
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(event) = map_key(key, self.game.status()) else {
            return;
        };

        if self.game.apply(event) == Outcome::Quit {
            self.should_quit = true;
        }
        if event == Event::Reset {
            self.ticks = 0;
        }
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Whether the lost row should currently show the answer
    ///
    /// The answer is shown for the first half of each blink period.
    #[must_use]
    pub fn show_answer(&self) -> bool {
        self.game.status() == RoundStatus::Lost
            && self.ticks % BLINK_PERIOD_TICKS < BLINK_PERIOD_TICKS / 2
    }
}

/// Map a raw key press to a game event
///
/// - letters (either case, no Ctrl/Alt) type a letter
/// - Backspace deletes
/// - Enter submits while playing and starts a new round once it is over
/// - Esc quits once the round is over
/// - Ctrl+C always quits
#[must_use]
pub fn map_key(key: KeyEvent, status: RoundStatus) -> Option<Event> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Event::Quit),
        KeyCode::Char(c)
            if c.is_ascii_alphabetic()
                && status == RoundStatus::Playing
                && KeyModifiers::SHIFT.contains(key.modifiers) =>
        {
            Some(Event::Letter(c.to_ascii_uppercase()))
        }
        KeyCode::Backspace if status == RoundStatus::Playing => Some(Event::Backspace),
        KeyCode::Enter if status == RoundStatus::Playing => Some(Event::Submit),
        KeyCode::Enter => Some(Event::Reset),
        KeyCode::Esc if status.is_over() => Some(Event::Quit),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI stopped: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let event::Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
