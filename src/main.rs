use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use hoops::api::{Client, SeasonType, StatsProvider};
use hoops::{commands, config, tui};

/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "hoops")]
#[command(
    about = "Basketball player, team and live game stats",
    long_about = "Basketball player, team and live game stats\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Base URL of the stats backend (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Serve fixture data instead of calling the backend
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SeasonTypeArg {
    /// Regular season
    #[value(name = "regular")]
    Regular,
    /// Playoffs
    #[value(name = "playoffs")]
    Playoffs,
    /// Pre season
    #[value(name = "pre")]
    Pre,
    /// Play-in tournament
    #[value(name = "playin")]
    PlayIn,
}

impl SeasonTypeArg {
    fn to_season_type(self) -> SeasonType {
        match self {
            SeasonTypeArg::Regular => SeasonType::RegularSeason,
            SeasonTypeArg::Playoffs => SeasonType::Playoffs,
            SeasonTypeArg::Pre => SeasonType::PreSeason,
            SeasonTypeArg::PlayIn => SeasonType::PlayIn,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display career, season and game-log stats for a player
    Player {
        /// Player's full name, e.g. "LeBron James"
        name: String,

        /// Season for the game logs, e.g. 2022-23 (defaults to the config value)
        #[arg(short, long)]
        season: Option<String>,
    },
    /// Display a team's games, grouped by season type
    Team {
        /// Team name or official abbreviation, e.g. "Raptors" or TOR
        name: String,

        /// Only show one season type
        #[arg(short = 't', long)]
        season_type: Option<SeasonTypeArg>,
    },
    /// List today's live games
    Live,
    /// Display the box score of a live game
    Boxscore {
        /// Game ID (e.g., 0022000207)
        game_id: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_url: {}", cfg.api_url);
    println!("game_log_season: {}", cfg.game_log_season);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn create_provider(cli: &Cli, config: &config::Config) -> Arc<dyn StatsProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Arc::new(hoops::dev::mock_client::MockClient::new());
    }

    let api_url = cli.api_url.as_deref().unwrap_or(&config.api_url);
    match Client::new(api_url) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create stats API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    provider: &dyn StatsProvider,
    command: Commands,
    config: &config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command(config);
            Ok(())
        }
        Commands::Player { name, season } => {
            commands::player::run(provider, &name, season, config).await
        }
        Commands::Team { name, season_type } => {
            let season_type = season_type.map(SeasonTypeArg::to_season_type);
            commands::team::run(provider, &name, season_type, config).await
        }
        Commands::Live => commands::live::run(provider, config).await,
        Commands::Boxscore { game_id } => commands::boxscore::run(provider, &game_id, config).await,
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.clone();
    }
    let provider = create_provider(&cli, &config);

    let Some(command) = cli.command else {
        if let Err(e) = tui::run(provider, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(provider.as_ref(), command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
