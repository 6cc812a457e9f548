use chrono::Local;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use kavlo::{
    app::App,
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    report::HistoryReport,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    HistoryFilter, HistoryViewModel, InMemoryRepository, ViewOptions,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    error::Error,
    fs::OpenOptions,
    io::{self, stdin},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

const TICK_RATE_MS: u64 = 250;

/// exercise history with weekly stats and filter chips
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Browse recent exercise sessions with a weekly summary, \
                  intensity badges, and date filters."
)]
pub struct Cli {
    /// filter chip selected at start (defaults to the saved one)
    #[clap(short = 'f', long, value_enum)]
    filter: Option<HistoryFilter>,

    /// record the filter selection without narrowing the list
    #[clap(long)]
    show_all: bool,

    /// print the list as a plain-text table instead of starting the tui
    #[clap(long, conflicts_with = "json")]
    print: bool,

    /// print the list and weekly totals as JSON
    #[clap(long)]
    json: bool,

    /// config file to use instead of the platform default
    #[clap(long)]
    config: Option<PathBuf>,

    /// increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Tui,
    Text,
    Json,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.print {
            OutputMode::Text
        } else {
            OutputMode::Tui
        }
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// CLI flags win over the saved config
    fn view_options(&self, config: &Config) -> ViewOptions {
        let mut options = ViewOptions::from(config);
        if let Some(filter) = self.filter {
            options.initial_filter = filter;
        }
        if self.show_all {
            options.apply_filter = false;
        }
        options
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level for this crate.
fn build_env_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(format!("kavlo={}", log_level(verbose))),
    }
}

/// The tui owns the screen, so it logs to a file; the other modes log to stderr.
fn init_logging(verbose: u8, mode: OutputMode) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_env_filter(verbose, rust_log.as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if mode != OutputMode::Tui {
        builder.with_writer(io::stderr).init();
        return;
    }

    let log_file = AppDirs::log_path().and_then(|path| {
        std::fs::create_dir_all(path.parent()?).ok()?;
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match log_file {
        Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
        None => builder.with_writer(io::sink).init(),
    }
}

/// Run a terminal setup step, calling `restore` if it fails so the shell is
/// not left in raw mode.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|_| restore())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mode = cli.output_mode();
    init_logging(cli.verbose, mode);

    let store = cli.config_store();
    let mut config = store.load();
    let view =
        HistoryViewModel::initialize(&InMemoryRepository::seed(), cli.view_options(&config))?;

    match mode {
        OutputMode::Text => {
            print!("{}", HistoryReport::new(&view, Local::now().date_naive()).to_text());
            return Ok(());
        }
        OutputMode::Json => {
            println!("{}", HistoryReport::new(&view, Local::now().date_naive()).to_json()?);
            return Ok(());
        }
        OutputMode::Tui => {}
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty (use --print or --json)")
            .exit();
    }

    enable_raw_mode()?;

    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;

    let mut app = App::new(view);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let result = app.run(&mut terminal, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    config.default_filter = app.view.selected_filter();
    match store.save(&config) {
        Ok(()) => info!(
            filter = %config.default_filter,
            path = %store.path().display(),
            "filter saved"
        ),
        Err(e) => warn!(error = %e, path = %store.path().display(), "could not save config"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["kavlo"]);

        assert_eq!(cli.filter, None);
        assert!(!cli.show_all);
        assert!(!cli.print);
        assert!(!cli.json);
        assert_eq!(cli.config, None);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.output_mode(), OutputMode::Tui);
    }

    #[test]
    fn test_cli_filter() {
        let cli = Cli::parse_from(["kavlo", "-f", "today"]);
        assert_eq!(cli.filter, Some(HistoryFilter::Today));

        let cli = Cli::parse_from(["kavlo", "--filter", "this-month"]);
        assert_eq!(cli.filter, Some(HistoryFilter::ThisMonth));
    }

    #[test]
    fn test_cli_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["kavlo", "--filter", "yesterday"]).is_err());
    }

    #[test]
    fn test_cli_print_and_json_conflict() {
        assert!(Cli::try_parse_from(["kavlo", "--print", "--json"]).is_err());
    }

    #[test]
    fn test_cli_output_modes() {
        assert_eq!(
            Cli::parse_from(["kavlo", "--print"]).output_mode(),
            OutputMode::Text
        );
        assert_eq!(
            Cli::parse_from(["kavlo", "--json"]).output_mode(),
            OutputMode::Json
        );
    }

    #[test]
    fn test_cli_verbosity_count() {
        let cli = Cli::parse_from(["kavlo", "-vvv"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(log_level(cli.verbose), Level::TRACE);
        assert_eq!(log_level(0), Level::WARN);
    }

    #[test]
    fn test_env_filter_from_verbosity() {
        let filter = build_env_filter(1, None).to_string().to_lowercase();
        assert!(filter.contains("kavlo=info"), "{filter}");
    }

    #[test]
    fn test_rust_log_overrides_verbosity() {
        let filter = build_env_filter(3, Some("kavlo=debug"))
            .to_string()
            .to_lowercase();
        assert!(filter.contains("kavlo=debug"), "{filter}");
        assert!(!filter.contains("trace"), "{filter}");
    }

    #[test]
    fn test_setup_failure_restores_terminal() {
        let restored = std::cell::Cell::new(false);
        let result: io::Result<()> = setup_or_restore(
            || Err(io::Error::new(io::ErrorKind::Other, "no alternate screen")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_setup_success_leaves_terminal_alone() {
        let restored = std::cell::Cell::new(false);
        let value = setup_or_restore(|| Ok(7), || restored.set(true)).unwrap();
        assert_eq!(value, 7);
        assert!(!restored.get());
    }

    #[test]
    fn test_view_options_prefer_cli() {
        let config = Config {
            default_filter: HistoryFilter::ThisWeek,
            apply_filter: true,
        };

        let cli = Cli::parse_from(["kavlo"]);
        assert_eq!(
            cli.view_options(&config),
            ViewOptions {
                initial_filter: HistoryFilter::ThisWeek,
                apply_filter: true,
            }
        );

        let cli = Cli::parse_from(["kavlo", "-f", "today", "--show-all"]);
        assert_eq!(
            cli.view_options(&config),
            ViewOptions {
                initial_filter: HistoryFilter::Today,
                apply_filter: false,
            }
        );
    }
}
