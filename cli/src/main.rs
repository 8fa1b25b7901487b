mod app;
mod command;
mod config;

use std::io;
use std::path::Path;

use clap::{Parser, ValueEnum};
use gomoku_common::games::gomoku::StrategyKind;
use gomoku_common::persistence::{SavedGameStore, StatsStore};
use gomoku_common::storage::FileContentProvider;
use gomoku_common::version::VERSION;
use gomoku_common::{log, logger};

use app::{App, GameSettings};

const STATS_FILE_NAME: &str = "stats.yaml";
const SAVED_GAMES_FILE_NAME: &str = "saved_games.yaml";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BotArg {
    Random,
    Heuristic,
}

impl From<BotArg> for StrategyKind {
    fn from(bot: BotArg) -> Self {
        match bot {
            BotArg::Random => StrategyKind::Random,
            BotArg::Heuristic => StrategyKind::Heuristic,
        }
    }
}

#[derive(Parser)]
#[command(name = "gomoku", version = VERSION)]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let cfg = config::get_config_manager(args.config.as_deref()).get()?;

    let prefix = if args.use_log_prefix {
        Some("Gomoku".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, cfg.log.target, &cfg.log.file_path)?;

    let settings = GameSettings {
        rows: args.rows.unwrap_or(cfg.rows),
        cols: args.cols.unwrap_or(cfg.cols),
        bot: args.bot.map(StrategyKind::from).unwrap_or(cfg.bot),
        seed: args.seed,
    };
    config::validate_dimensions(settings.rows, settings.cols)?;

    let data_dir = Path::new(&cfg.data_dir);
    let stats_store = StatsStore::new(FileContentProvider::new(data_dir.join(STATS_FILE_NAME)));
    let saved_games =
        SavedGameStore::new(FileContentProvider::new(data_dir.join(SAVED_GAMES_FILE_NAME)));

    log!("Gomoku {} starting with {:?}", VERSION, settings);

    let mut app = App::new(settings, stats_store, saved_games)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app.run(stdin.lock(), &mut stdout)?;

    log!("Gomoku shut down, {}", app.stats());
    Ok(())
}
