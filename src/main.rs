pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, Instant},
};
use tugmath::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    error::ConfigError,
    logging,
    runtime::{ChannelEventSource, DuelEvent, FixedTicker, Runner},
    Duel, KeyOutcome, Keymap, Phase,
};

/// two-player arithmetic tug of war
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Two players share one keyboard and race to solve addition problems. Every correct answer pulls the rope toward your side; the first team to lead by the win margin takes the match."
)]
pub struct Cli {
    /// score lead needed to win
    #[clap(short = 'm', long)]
    win_margin: Option<u32>,

    /// smallest operand in a problem
    #[clap(long)]
    min_operand: Option<u32>,

    /// largest operand in a problem
    #[clap(long)]
    max_operand: Option<u32>,

    /// feedback pause after each answer, in milliseconds
    #[clap(long)]
    cooldown_ms: Option<u64>,

    /// seed for a reproducible sequence of problems
    #[clap(long)]
    seed: Option<u64>,

    /// config file to use instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// log file to use instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// save the effective settings to the config file before starting
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Command line flags win over the config file
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(m) = self.win_margin {
            cfg.win_margin = m;
        }
        if let Some(min) = self.min_operand {
            cfg.min_operand = min;
        }
        if let Some(max) = self.max_operand {
            cfg.max_operand = max;
        }
        if let Some(ms) = self.cooldown_ms {
            cfg.cooldown_ms = ms;
        }
        cfg
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Redraw,
    Nothing,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub duel: Duel,
    pub keymap: Keymap,
}

impl App {
    pub fn new(config: &Config, seed: Option<u64>) -> Result<Self, ConfigError> {
        let settings = config.duel_settings()?;
        let keymap = config.keymap()?;
        let duel = match seed {
            Some(seed) => Duel::with_seed(settings, seed),
            None => Duel::new(settings),
        };
        Ok(Self { duel, keymap })
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppAction::Quit
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.duel.phase() == Phase::Playing {
                    AppAction::Nothing
                } else {
                    self.duel.start();
                    AppAction::Redraw
                }
            }
            // caps lock should not take a team's letter keys away
            KeyCode::Char(c) => match self
                .keymap
                .resolve(c)
                .or_else(|| self.keymap.resolve(c.to_ascii_lowercase()))
            {
                Some((player, token)) => {
                    let outcome = self.duel.on_key(player, token);
                    if let KeyOutcome::Won(winner) = outcome {
                        log::info!("{winner} pulled the rope home");
                    }
                    if outcome.changed_state() {
                        AppAction::Redraw
                    } else {
                        AppAction::Nothing
                    }
                }
                None => AppAction::Nothing,
            },
            _ => AppAction::Nothing,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = cli.log_file.clone().or_else(AppDirs::log_path) {
        if let Err(e) = logging::init(&path) {
            eprintln!("logging disabled ({}): {e}", path.display());
        }
    }

    let store = cli.config_store();
    let config = cli.apply(store.load());
    if cli.save_config {
        store.save(&config)?;
        log::info!("saved config to {}", store.path().display());
    }

    let mut app = match App::new(&config, cli.seed) {
        Ok(app) => app,
        Err(e) => Cli::command().error(ErrorKind::InvalidValue, e).exit(),
    };
    let settings = app.duel.settings();
    log::info!(
        "win margin {}, operands {}..={}, cool-down {:?}",
        settings.win_margin,
        settings.operands.min,
        settings.operands.max,
        settings.cooldown
    );

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app, config.tick_rate());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(ChannelEventSource::crossterm(), FixedTicker::new(tick_rate));
    let mut last = Instant::now();

    terminal.draw(|f| ui(app, f))?;

    loop {
        let event = runner.step();

        // settle cool-downs and the clock before the event is applied
        let now = Instant::now();
        let mut redraw = app.duel.advance(now - last);
        last = now;

        match event {
            DuelEvent::Tick => {}
            DuelEvent::Resize => redraw = true,
            DuelEvent::Closed => {
                log::warn!("input closed, leaving");
                break;
            }
            DuelEvent::Key(key) => match app.handle_key(key) {
                AppAction::Quit => break,
                AppAction::Redraw => redraw = true,
                AppAction::Nothing => {}
            },
        }

        if redraw {
            terminal.draw(|f| ui(app, f))?;
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
