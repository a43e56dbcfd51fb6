use clap::{Parser, Subcommand};

use nepali_cli::commands::{convert_ops, table_ops};

#[derive(Parser)]
#[command(name = "nptool", about = "Romanized Nepali transliteration tool")]
struct Cli {
    /// Custom mapping table TOML (default: embedded table)
    #[arg(long, global = true)]
    table: Option<String>,
    /// Log engine activity to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a buffer in one call
    Convert {
        /// Romanized input
        text: String,
        /// Cursor offset in characters (default: end of input)
        #[arg(long)]
        cursor: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Type the input one character at a time and show each step
    Simulate {
        /// Keystrokes to replay
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List keys in conversion order
    Keys {
        /// Show at most this many keys
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Export the default mapping table as TOML
    TableExport,
    /// Validate a custom mapping table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("nepali_core=debug,nepali_session=debug")
            }),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }
    if let Some(ref file) = cli.table {
        table_ops::load_table(file);
        tracing::debug!(file = %file, "custom table loaded");
    }

    match cli.command {
        Command::Convert { text, cursor, json } => convert_ops::convert_cmd(&text, cursor, json),
        Command::Simulate { text, json } => convert_ops::simulate_cmd(&text, json),
        Command::Keys { limit } => table_ops::keys_cmd(limit),
        Command::TableExport => table_ops::table_export(),
        Command::TableValidate { file } => table_ops::table_validate(&file),
    }
}
