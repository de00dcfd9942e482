use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use focusclock::{
    app::{App, Flow, Settings},
    app_dirs::AppDirs,
    config::{is_positive_finite, Config, ConfigStore, FileConfigStore},
    logging::init_file_logging,
    pager::Page,
    runtime::{CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    time_source::{SystemTimeSource, TimeSource},
    ui,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use tracing::info;

/// terminal clock face with a swipeable focus-session stopwatch
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A digital clock face and a manual focus-session stopwatch on two pages. Swipe between them with the arrow keys or a mouse drag, and start or stop a focus session with space."
)]
pub struct Cli {
    /// milliseconds between display refreshes
    #[clap(short = 't', long)]
    tick_ms: Option<u64>,

    /// horizontal distance a swipe must exceed to change page
    #[clap(long, value_parser = parse_swipe_threshold)]
    swipe_threshold: Option<f64>,

    /// page shown at startup
    #[clap(short = 'p', long, value_enum, default_value_t = Page::Clock)]
    page: Page,

    /// write logs to a file (defaults to the state directory when no path is given)
    #[clap(long, num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,

    /// save the effective settings to the config file and exit
    #[clap(long)]
    save_config: bool,
}

fn parse_swipe_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if is_positive_finite(value) {
        Ok(value)
    } else {
        Err(format!("{s} is not a positive finite number"))
    }
}

impl Cli {
    /// Overlay CLI flags on top of the stored config
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(ms) = self.tick_ms {
            cfg.tick_interval_ms = ms;
        }
        if let Some(threshold) = self.swipe_threshold {
            cfg.swipe_threshold = threshold;
        }
        cfg.sanitized()
    }

    fn log_path(&self) -> Option<PathBuf> {
        match &self.log_file {
            Some(Some(path)) => Some(path.clone()),
            Some(None) => AppDirs::log_path(),
            None => None,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let _log_guard = match cli.log_path() {
        Some(path) => Some(init_file_logging(&path)?),
        None => None,
    };

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());

    if cli.save_config {
        store.save(&config)?;
        println!("saved config to {}", store.path().display());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let settings = Settings::from_config(&config, cli.page);
    info!(?settings, "starting");

    install_panic_hook();
    let guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&settings, SystemTimeSource);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(settings.tick_interval),
    );
    let result = start_tui(&mut terminal, &mut app, &runner);

    drop(guard);
    info!("exiting");
    result
}

/// Raw mode, alternate screen and mouse capture for as long as it lives.
/// Dropping it restores the terminal, on error returns as well.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // from here on any early return drops the guard and undoes the setup
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best effort: every step runs even if an earlier one fails.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture);
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = execute!(io::stdout(), Show);
}

/// Put the terminal back before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

fn start_tui<B, S, E, T>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>>
where
    B: Backend,
    S: TimeSource,
    E: EventSource,
    T: Ticker,
{
    loop {
        if app.take_dirty() {
            let snapshot = app.snapshot();
            terminal.draw(|f| ui::draw(&snapshot, app.theme(), f))?;
        }

        if app.handle(runner.step()) == Flow::Quit {
            break;
        }
    }

    Ok(())
}
