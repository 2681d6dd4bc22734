//! gdt-site: Growth Diagnosis report site
//!
//! Serves the brand growth diagnoses over HTTP, or exports them as static
//! HTML. See DESIGN.md for details.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use growth_diagnosis::config::Config;
use growth_diagnosis::registry::Registry;
use growth_diagnosis::score::format_score;
use growth_diagnosis::site::{create_router, export::export_site, SiteState};

#[derive(Parser)]
#[command(name = "gdt-site")]
#[command(about = "Growth Diagnosis report site")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "gdt-site.toml")]
    config: String,

    /// HTTP port (overrides config file)
    #[arg(short, long, env = "GDT_PORT")]
    port: Option<u16>,

    /// Directory holding cover and illustration images (overrides config file)
    #[arg(long, env = "GDT_ASSET_DIR")]
    asset_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site over HTTP (default)
    Serve,
    /// Write every page as static HTML
    Export {
        /// Output directory
        #[arg(short, long, default_value = "out")]
        out: PathBuf,
    },
    /// Print the registered reports
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("growth_diagnosis=info".parse()?)
                .add_directive("gdt_site=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    info!("Config file: {}", cli.config);
    let mut config = Config::load(Path::new(&cli.config))?;

    // Apply CLI overrides
    if let Some(port) = cli.port {
        config.server.http_port = port;
    }
    if let Some(asset_dir) = cli.asset_dir {
        config.site.asset_dir = PathBuf::from(asset_dir);
    }

    let registry = Registry::builtin().context("Built-in report data is invalid")?;
    let state = SiteState::new(registry, config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state).await,
        Command::Export { out } => {
            let summary = export_site(&state, &out)?;
            println!(
                "Exported {} pages and {} assets to {}",
                summary.pages,
                summary.assets,
                out.display()
            );
            Ok(())
        }
        Command::List => {
            for summary in state.registry.summaries() {
                println!(
                    "{:<24} {:<28} {:>5}/10  {}{}",
                    summary.id,
                    summary.name,
                    format_score(summary.average_score),
                    summary.profile_label,
                    if summary.gated { "  [gated]" } else { "" }
                );
            }
            Ok(())
        }
    }
}

async fn serve(state: SiteState) -> anyhow::Result<()> {
    let server = &state.config.server;
    let addr: SocketAddr = format!("{}:{}", server.bind_address, server.http_port)
        .parse()
        .with_context(|| format!("Invalid bind address {}", server.bind_address))?;

    info!(reports = state.registry.len(), "Registry ready");
    info!(asset_dir = %state.config.site.asset_dir.display(), "Serving assets");
    if !state.config.gate.enabled {
        info!("Display gates are disabled");
    }

    let app = create_router(state);

    info!("Site listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
