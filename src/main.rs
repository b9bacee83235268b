use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use loksewa_prep::{
    app::{App, Page},
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{AppEvent, CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    texts::Language,
    ui,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

/// study dashboard for the Loksewa computer operator exam
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Typing drills in English and Nepali, topic-wise MCQ practice, a syllabus checklist and subjective notes, with a daily progress snapshot."
)]
pub struct Cli {
    /// typing language, overrides the saved configuration
    #[clap(short = 'l', long, value_enum)]
    language: Option<Language>,

    /// seconds per typing test, overrides the saved configuration
    #[clap(short = 'd', long, value_parser = clap::value_parser!(u32).range(1..))]
    duration: Option<u32>,

    /// page to open on
    #[clap(short = 'p', long, value_enum, default_value_t = Page::Dashboard)]
    page: Page,

    /// MCQ topic to filter on, e.g. "Networking"
    #[clap(short = 't', long)]
    topic: Option<String>,

    /// write the effective language and duration back to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line values layered over the stored configuration
    fn merge_into(&self, mut config: Config) -> Config {
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(duration) = self.duration {
            config.duration_secs = duration;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    logging::init_tracing();

    let store = FileConfigStore::new();
    let config = cli.merge_into(store.load());
    if cli.save_config {
        store.save(&config)?;
        tracing::info!(path = %store.path().display(), "configuration saved");
    }

    let mut app = App::new(&config)?;
    app.page = cli.page;
    if let Some(topic) = &cli.topic {
        if !app.select_topic(topic) {
            let mut cmd = Cli::command();
            cmd.error(
                ErrorKind::InvalidValue,
                format!("unknown topic '{topic}'"),
            )
            .exit();
        }
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(app, f))?;

        match runner.step() {
            AppEvent::Key(key) => {
                let was_running = app.typing.is_running();
                app.on_key(key);
                // a fresh countdown gets a full first second
                if !was_running && app.typing.is_running() {
                    runner.realign();
                }
            }
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
        }
    }
    Ok(())
}
