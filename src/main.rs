//! zxbridge - legacy-protocol bridge for the ZX-Art software archive
//!
//! Accepts pipe-delimited search requests and file downloads from a legacy
//! client, translates them against the archive's JSON API and answers in
//! the client's original wire format.

mod api;
mod config;
mod core;
mod models;
mod upstream;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::config::{OutputMode, Settings, DEFAULT_UPSTREAM};
use crate::upstream::ZxArt;

/// zxbridge - ZX-Art legacy protocol bridge
#[derive(Parser, Debug)]
#[command(name = "zxbridge")]
#[command(version = "1.0.0")]
#[command(about = "Bridge between a legacy pipe-delimited client and the ZX-Art archive API")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Output mode for listing titles and download names
    #[arg(long, value_enum, default_value = "friendly")]
    mode: OutputMode,

    /// Upstream archive base URL
    #[arg(long, default_value = DEFAULT_UPSTREAM)]
    upstream: String,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(log_level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("zxbridge v1.0.0 starting...");
    info!("Upstream archive: {}", args.upstream);

    let gateway = ZxArt::new(args.upstream)?;
    let settings = Settings { mode: args.mode };

    let addr = format!("{}:{}", args.host, args.port);
    info!("Server listening on http://{}", addr);

    use actix_web::{middleware, web, App, HttpServer};

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(gateway.clone()))
            .app_data(web::Data::new(settings.clone()))
            .wrap(middleware::Logger::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
