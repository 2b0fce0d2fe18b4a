//! CLI for the weft kernel

use clap::Parser;
use std::path::PathBuf;
use weft_cli::{commands, config::load_config, core_kernel, error::CliError, logging::init_tracing};

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "Dispatch model function calls to weft plugins", long_about = None)]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, env = "WEFT_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Split a function name into plugin and function
    Split {
        /// Qualified name such as `math-Add`
        #[arg(long, short)]
        name: String,
    },
    /// List the functions registered on the kernel
    Functions,
    /// Invoke a single function call record
    Invoke {
        /// Function call as inline JSON
        #[arg(long)]
        call: Option<String>,
        /// Read the function call from a file
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
    /// Answer every function call in a chat message
    Process {
        /// Chat message JSON file
        #[arg(long, short)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    init_tracing(&level);

    let kernel = core_kernel(config.function_calling)?;

    match &cli.command {
        Some(Commands::Split { name }) => {
            println!("{}", commands::run_split(name)?);
        }
        Some(Commands::Functions) => {
            println!("{}", commands::run_functions(&kernel));
        }
        Some(Commands::Invoke { call, file }) => {
            let output = commands::run_invoke(&kernel, call.as_deref(), file.as_deref()).await?;
            println!("{}", output);
        }
        Some(Commands::Process { file }) => {
            println!("{}", commands::run_process(&kernel, file).await?);
        }
        None => {
            println!("weft function-calling kernel");
            println!("Use --help for more information");
        }
    }

    Ok(())
}
