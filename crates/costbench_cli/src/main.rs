//! costbench CLI: log household cost/benefit items and list them ranked.

use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use costbench_core::{default_log_level, init_logging, score, ItemId, NewItem};
use log::info;

mod api;
mod render;

use api::ApiError;

const DB_FILE_NAME: &str = "costbench.sqlite3";

#[derive(Parser)]
#[command(name = "costbench", version, about = "Rank household annoyances by cost vs. benefit")]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "COSTBENCH_DB_PATH")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "COSTBENCH_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "COSTBENCH_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items, best net score first
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Log a new item
    Add {
        /// What the problem or expense is
        #[arg(long)]
        description: String,

        /// Cost to fix, in any consistent unit
        #[arg(long, allow_negative_numbers = true)]
        cost: f64,

        /// How bad the problem is
        #[arg(long, allow_negative_numbers = true)]
        severity: i32,

        /// How often the problem occurs
        #[arg(long, allow_negative_numbers = true)]
        frequency: i32,
    },

    /// Delete an item by id
    Delete {
        /// Item id
        id: ItemId,
    },

    /// Preview scores without storing anything
    Score {
        #[arg(long, allow_negative_numbers = true)]
        cost: f64,

        #[arg(long, allow_negative_numbers = true)]
        severity: i32,

        #[arg(long, allow_negative_numbers = true)]
        frequency: i32,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Add { .. } => "add",
            Self::Delete { .. } => "delete",
            Self::Score { .. } => "score",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Table,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)
            .map_err(|message| anyhow!(message))
            .context("failed to initialize logging")?;
    }
    info!(
        "event=cli_run module=cli status=start command={}",
        cli.command.name()
    );

    let output = match cli.command {
        Commands::List { format } => {
            let items = api::list_items(&resolve_db_path(cli.db)?)?;
            match format {
                Format::Json => render::to_json(&items)?,
                Format::Table => render::items_table(&items),
            }
        }
        Commands::Add {
            description,
            cost,
            severity,
            frequency,
        } => {
            let input = NewItem::new(description, cost, severity, frequency);
            let item = api::create_item(&resolve_db_path(cli.db)?, input)?;
            render::to_json(&item)?
        }
        Commands::Delete { id } => {
            let confirmation = api::delete_item(&resolve_db_path(cli.db)?, id)?;
            render::to_json(&confirmation)?
        }
        Commands::Score {
            cost,
            severity,
            frequency,
        } => render::to_json(&score(cost, severity, frequency))?,
    };

    println!("{output}");
    Ok(())
}

fn resolve_db_path(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(path);
    }
    let data_dir = dirs::data_dir().context("could not determine a data directory; pass --db")?;
    Ok(data_dir.join("costbench").join(DB_FILE_NAME))
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ApiError>() {
        Some(ApiError::NotFound(_) | ApiError::InvalidInput(_)) => 2,
        _ => 1,
    }
}
