//! CLI entry point for postgrid

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postgrid")]
#[command(version)]
#[command(about = "Render a content collection into a static page of post cards", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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
    /// Render the post list page
    #[command(alias = "b")]
    Build {
        /// Print the page instead of writing the output directory
        #[arg(long)]
        stdout: bool,
    },

    /// List the posts of the collection
    List,

    /// Remove the output directory
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postgrid=debug,info"
    } else {
        "postgrid=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Build { stdout } => {
            let site = postgrid::Site::new(&base_dir)?;
            if stdout {
                print!("{}", postgrid::commands::build::render(&site)?);
            } else {
                tracing::info!("Building {:?}", site.out_dir);
                site.build()?;
                println!("Built successfully!");
            }
        }

        Commands::List => {
            let site = postgrid::Site::new(&base_dir)?;
            postgrid::commands::list::run(&site)?;
        }

        Commands::Clean => {
            let site = postgrid::Site::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("postgrid version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
