//! Tech Blog CLI
//!
//! Renders the blog's page shell and author bio to static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Home page with the bio and a Markdown body
//! techblog -c site.toml page --path / --bio --content index.md
//!
//! # A post page written to a file, with a pinned footer year
//! techblog page --path /posts/hello/ --content hello.md --year 2019 -o hello.html
//!
//! # Just the bio block
//! techblog bio
//! techblog bio --static
//!
//! # Show the effective configuration
//! techblog config
//! ```

mod markdown;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use techblog_core::{Clock, SiteConfig};
use techblog_ui::{render_bio, render_page, BioMode, PageRequest, SiteContext};

/// handeyeco tech blog renderer
#[derive(Parser)]
#[command(name = "techblog")]
#[command(version = "0.1.0")]
#[command(about = "Render blog pages and the author bio to HTML")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Site configuration file (default: built-in configuration)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a full page
    Page {
        /// Path of the page, e.g. "/" or "/posts/hello/"
        #[arg(long)]
        path: String,

        /// Header title (default: metadata.title)
        #[arg(long)]
        title: Option<String>,

        /// Markdown file for the page body
        #[arg(long)]
        content: Option<PathBuf>,

        /// Show the author bio above the content
        #[arg(long)]
        bio: bool,

        /// Use the fixed bio text instead of configured metadata
        #[arg(long = "static-bio")]
        static_bio: bool,

        /// Pin the footer year instead of reading the system clock
        #[arg(long)]
        year: Option<i32>,

        /// Write HTML to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the author bio block
    Bio {
        /// Use the fixed bio text instead of configured metadata
        #[arg(long = "static")]
        fixed: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            tracing::info!("No config file given, using built-in configuration");
            Ok(SiteConfig::default())
        }
    }
}

fn clock_for(year: Option<i32>) -> Result<Clock> {
    match year {
        Some(year) => Clock::fixed_year(year)
            .ok_or_else(|| anyhow::anyhow!("Invalid year: {}", year)),
        None => Ok(Clock::System),
    }
}

fn bio_mode(config: &SiteConfig, show: bool, fixed: bool) -> BioMode {
    match (show || fixed, fixed) {
        (false, _) => BioMode::Hidden,
        (true, true) => BioMode::Static,
        (true, false) => BioMode::Metadata(config.metadata.clone()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Page {
            path,
            title,
            content,
            bio,
            static_bio,
            year,
            output,
        } => {
            let site = SiteContext::from_config(&config, clock_for(year)?);

            let body_html = match content {
                Some(file) => {
                    let source = std::fs::read_to_string(&file)
                        .with_context(|| format!("Failed to read {}", file.display()))?;
                    markdown::to_html(&source)
                }
                None => String::new(),
            };

            let title = title.unwrap_or_else(|| config.metadata.title.clone());
            if title.is_empty() {
                tracing::warn!("Rendering page {} with an empty title", path);
            }

            let request = PageRequest::new(path, title)
                .with_bio(bio_mode(&config, bio, static_bio))
                .with_body_html(body_html);
            let html = render_page(&site, request);

            match output {
                Some(out) => {
                    std::fs::write(&out, &html)
                        .with_context(|| format!("Failed to write {}", out.display()))?;
                    tracing::info!("Wrote {} bytes to {}", html.len(), out.display());
                    println!("Wrote page to {}", out.display());
                }
                None => println!("{}", html),
            }
        }

        Commands::Bio { fixed } => {
            let site = SiteContext::from_config(&config, Clock::System);
            let metadata = if fixed {
                None
            } else {
                Some(config.metadata.clone())
            };
            println!("{}", render_bio(&site, metadata));
        }

        Commands::Config => {
            let rendered =
                toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
            print!("{}", rendered);
        }
    }

    Ok(())
}
