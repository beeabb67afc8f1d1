//! player-store CLI
//!
//! Command-line interface over a file-backed player store.

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};
use player_store::{
    Config, DuplicatePolicy, DurableStore, FileStore, PlayerRecord, PlayerStore, Result,
    SnapshotFormat,
};
use tracing_subscriber::{fmt, EnvFilter};

/// player-store CLI
#[derive(Parser, Debug)]
#[command(name = "player-store-cli")]
#[command(about = "CLI for the persisted player store")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./player_store_data")]
    data_dir: String,

    /// Durable store key holding the collection
    #[arg(short, long, default_value = "players")]
    namespace: String,

    /// Reject duplicate creates and missing ids on update/delete
    #[arg(long)]
    strict: bool,

    /// Snapshot encoding
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Json,
    Binary,
}

impl From<Format> for SnapshotFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => SnapshotFormat::Json,
            Format::Binary => SnapshotFormat::Binary,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a player
    Create {
        id: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        points: i64,
    },

    /// Replace a player (moves it to the end)
    Update {
        id: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        points: i64,
    },

    /// Remove a player
    Delete {
        id: String,
    },

    /// Show one player
    Get {
        id: String,
    },

    /// List players, optionally only those with an exact name
    List {
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,player_store=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = store_config(&args);
    let durable = FileStore::open(&args.data_dir)?;
    let store = PlayerStore::open(durable, config)?;

    let stdout = std::io::stdout();
    execute(&store, args.command, &mut stdout.lock())?;

    store.close()
}

/// Store configuration selected by the global flags
fn store_config(args: &Args) -> Config {
    let duplicate_policy = if args.strict {
        DuplicatePolicy::Strict
    } else {
        DuplicatePolicy::Permissive
    };

    Config::builder()
        .namespace(&args.namespace)
        .duplicate_policy(duplicate_policy)
        .snapshot_format(args.format.into())
        .build()
}

/// Run one subcommand against `store`, writing query output to `out`
fn execute<S: DurableStore, W: Write>(
    store: &PlayerStore<S>,
    command: Commands,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Create { id, name, points } => {
            store.create(PlayerRecord::new(id, name, points))?;
        }
        Commands::Update { id, name, points } => {
            store.update(PlayerRecord::new(id, name, points))?;
        }
        Commands::Delete { id } => {
            store.delete(&id)?;
        }
        Commands::Get { id } => match store.find_by_id(&id) {
            Some(record) => write_record(out, &record)?,
            None => writeln!(out, "(not found)")?,
        },
        Commands::List { name } => {
            for record in store.find_all(name.as_deref()) {
                write_record(out, &record)?;
            }
        }
    }

    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &PlayerRecord) -> Result<()> {
    writeln!(out, "{}\t{}\t{}", record.id, record.name, record.points)?;
    Ok(())
}
