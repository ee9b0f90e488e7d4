mod commands;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meetups_core::{ClientConfig, HttpEventApi};

use crate::commands::create::CreateArgs;

#[derive(Parser)]
#[command(name = "meetups")]
#[command(about = "Browse, create and delete board game meetup events")]
struct Cli {
    /// Events API base URL (overrides MEETUPS_API_BASE_URL and the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log requests and other details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events
    List {
        /// Pick an event to preview after listing
        #[arg(short, long)]
        select: bool,
    },
    /// Show one event
    Show { slug: String },
    /// Create an event
    Create(CreateArgs),
    /// Delete an event
    Delete {
        slug: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Open a page by path, e.g. "/events/catan-night"
    Open { path: String },
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "warn,meetups=debug,meetups_core=debug"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = ClientConfig::from_environment(cli.api_url.as_deref())
        .context("Could not resolve the events API address")?;
    log::debug!("Using events API at {}", config.base_url());
    let api = HttpEventApi::new(config).context("Could not set up the HTTP client")?;

    match cli.command {
        Commands::List { select } => commands::list::run(&api, select).await,
        Commands::Show { slug } => commands::show::run(&api, &slug).await,
        Commands::Create(args) => commands::create::run(&api, args).await,
        Commands::Delete { slug, yes } => commands::delete::run(&api, &slug, yes).await,
        Commands::Open { path } => commands::open::run(&api, &path).await,
    }
}
