mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rusty-forms", about = "Validate form values against a form definition")]
struct Cli {
    /// Log engine activity (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one validation and print the result
    Check {
        /// TOML form definition
        #[arg(long)]
        schema: PathBuf,
        /// JSON object mapping field names to a value or list of values
        #[arg(long)]
        values: PathBuf,
        /// Event name for the run
        #[arg(long, default_value = "submit")]
        event: String,
        /// Only run tests registered on this field
        #[arg(long)]
        field: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Give up on `ajax` requests after this many milliseconds
        #[arg(long, default_value_t = 5000)]
        timeout_ms: u64,
    },
    /// List the available test types
    ListTests,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "rusty_forms=debug,rusty_forms_validation=debug",
        _ => "rusty_forms=trace,rusty_forms_validation=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            schema,
            values,
            event,
            field,
            format,
            timeout_ms,
        } => {
            commands::check::run(commands::check::Args {
                schema,
                values,
                event,
                field,
                format,
                timeout_ms,
            })
            .await
        }
        Commands::ListTests => commands::list_tests::run(),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    }
}
