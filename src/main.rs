//! CLI entry point for microcms-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use microcms_blog::cms::{CmsClient, CmsConfig, Queries, QueryPair};
use microcms_blog::{commands, Site};

#[derive(Parser)]
#[command(name = "microcms-blog")]
#[command(version)]
#[command(about = "Read blog content from microCMS and check the local post collection", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List blogs from the CMS
    Blogs {
        /// Query modifier forwarded to the API, e.g. -q limit=5 -q orders=-publishedAt
        #[arg(short, long = "query", value_name = "KEY=VALUE")]
        queries: Vec<QueryPair>,
    },

    /// Show one blog from the CMS as JSON
    Blog {
        /// Content id
        id: String,

        /// Query modifier forwarded to the API
        #[arg(short, long = "query", value_name = "KEY=VALUE")]
        queries: Vec<QueryPair>,
    },

    /// List local posts
    Posts,

    /// Validate local posts against the blog schema
    Check,

    /// Print the resolved site configuration
    Config,
}

fn to_queries(pairs: Vec<QueryPair>) -> Queries {
    pairs.into_iter().map(|QueryPair(k, v)| (k, v)).collect()
}

fn cms_client() -> Result<CmsClient> {
    Ok(CmsClient::new(CmsConfig::from_env()?)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    // Pick up MICROCMS_* and SITE_URL from the site's .env
    let dotenv = microcms_blog::load_env_file(&base_dir);

    // Initialize logging
    let filter = if cli.debug {
        "microcms_blog=debug,info"
    } else {
        "microcms_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(Some(path)) => tracing::debug!("Loaded environment from {:?}", path),
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    match cli.command {
        Commands::Blogs { queries } => {
            let client = cms_client()?;
            commands::blogs::list(&client, &to_queries(queries)).await?;
        }

        Commands::Blog { id, queries } => {
            let client = cms_client()?;
            commands::blogs::show(&client, &id, &to_queries(queries)).await?;
        }

        Commands::Posts => {
            let site = Site::from_env(&base_dir)?;
            commands::posts::run(&site)?;
        }

        Commands::Check => {
            let site = Site::from_env(&base_dir)?;
            tracing::info!("Checking local posts in {:?}", base_dir);
            commands::check::run(&site)?;
        }

        Commands::Config => {
            let site = Site::from_env(&base_dir)?;
            commands::config::run(&site)?;
        }
    }

    Ok(())
}
