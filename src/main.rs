use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use onboard::cli::{handle_theme_command, show_config, ThemeCommands};
use onboard::config::{paths::DATA_DIR_ENV, OnboardPaths, Settings};
use onboard::host::{format_summary, SummaryFormat};
use onboard::{logging, theme, tui};

#[derive(Parser)]
#[command(
    name = "onboard",
    version,
    about = "Multi-step onboarding wizard for the terminal",
    long_about = "Onboard walks a new user through a three-step account setup \
                  (personal info, account credentials, preferences) in an \
                  interactive terminal wizard and remembers their dark-mode choice."
)]
struct Cli {
    /// Directory holding settings, preferences and logs
    #[arg(long, env = DATA_DIR_ENV, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the onboarding wizard (default)
    #[command(alias = "tui")]
    Run {
        /// Output format for the completion summary
        #[arg(short, long, value_enum, default_value_t)]
        format: SummaryFormat,
    },

    /// Dark-mode preference commands
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => OnboardPaths::with_base_dir(dir),
        None => OnboardPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let _log_guard = logging::init(&paths, &settings)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "starting");

    // Preference store backed by the data directory
    theme::install(theme::open(&paths));
    let theme = theme::global();

    match cli.command {
        None => run(theme, &settings, SummaryFormat::default())?,
        Some(Commands::Run { format }) => run(theme, &settings, format)?,
        Some(Commands::Theme(cmd)) => handle_theme_command(&theme, cmd)?,
        Some(Commands::Config) => show_config(&paths, &settings, &theme),
    }

    Ok(())
}

fn run(theme: theme::ThemeHandle, settings: &Settings, format: SummaryFormat) -> Result<()> {
    if let Some(record) = tui::run_tui(theme, settings)? {
        print!("{}", format_summary(&record, format)?);
    }
    Ok(())
}
