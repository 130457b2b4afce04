mod commands;
mod config;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use crate::commands::{cmd_foods, cmd_log, cmd_summary, cmd_target_set, cmd_target_show};
use crate::config::Config;
use nosh_core::service::NoshService;

#[derive(Parser)]
#[command(
    name = "nosh",
    version,
    about = "A simple daily macro tracker",
    long_about = "\n\n  ███╗   ██╗ ██████╗ ███████╗██╗  ██╗
  ████╗  ██║██╔═══██╗██╔════╝██║  ██║
  ██╔██╗ ██║██║   ██║███████╗███████║
  ██║╚██╗██║██║   ██║╚════██║██╔══██║
  ██║ ╚████║╚██████╔╝███████║██║  ██║
  ╚═╝  ╚═══╝ ╚═════╝ ╚══════╝╚═╝  ╚═╝
      every macro, accounted for.
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the food catalog
    Foods {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Log a meal from the catalog
    Log {
        /// Food name (exact, as shown by `nosh foods`)
        food: String,
        /// Amount in the food's standard unit (e.g. 2 for two units, 150 for 150g)
        amount: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a daily summary (defaults to today)
    Summary {
        /// Date to show (YYYY-MM-DD or today/yesterday, default: today)
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage daily macro targets
    Target {
        #[command(subcommand)]
        command: TargetCommands,
    },
    /// Start the REST API server
    Serve {
        /// Port to listen on (default: $NOSH_PORT or 8080)
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind to (default: $NOSH_BIND or 127.0.0.1)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[derive(Subcommand)]
enum TargetCommands {
    /// Show the current targets
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update one or more targets, leaving the rest unchanged
    Set {
        /// Daily calorie target (kcal)
        #[arg(long)]
        calories: Option<f64>,
        /// Daily protein target (g)
        #[arg(long)]
        protein: Option<f64>,
        /// Daily fat target (g)
        #[arg(long)]
        fat: Option<f64>,
        /// Daily carbs target (g)
        #[arg(long)]
        carbs: Option<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let service = NoshService::builtin();

    match cli.command {
        Commands::Foods { json } => cmd_foods(&service, json),
        Commands::Log { food, amount, json } => cmd_log(&service, &food, amount, json),
        Commands::Summary { date, json } => cmd_summary(&service, date, json),
        Commands::Target { command } => match command {
            TargetCommands::Show { json } => cmd_target_show(&service, json),
            TargetCommands::Set {
                calories,
                protein,
                fat,
                carbs,
                json,
            } => cmd_target_set(&service, calories, protein, fat, carbs, json),
        },
        Commands::Serve { port, bind } => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .init();
            let config = Config::load();
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or(config.bind);
            server::start_server(service, port, &bind).await
        }
    }
}
