//! Shortcut RPC Server - JSON-RPC backend for the shortcut builder form.
//!
//! Hosts a single editing session and exposes it to the form UI over
//! JSON-RPC 2.0. The UI owns the widgets and dialogs; this process owns the
//! shortcut entry, validation and the file write.

mod handlers;
mod server;
mod wrapper;

use anyhow::Result;
use clap::Parser;
use shortcut_core::{ExportTarget, RpcConfig, ShortcutSession};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "shortcut-rpc")]
#[command(about = "JSON-RPC backend for the desktop shortcut builder")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value_t = RpcConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = RpcConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Initial export directory (defaults to ~/.local/share/applications)
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_filter = if args.debug { "debug" } else { "info" };
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(log_filter))
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Shortcut RPC Server");

    let session = match args.export_dir {
        Some(dir) => ShortcutSession::with_target(ExportTarget::new(dir)),
        None => ShortcutSession::new()?,
    };

    info!(
        "Export directory: {}",
        session.target().directory().display()
    );

    let mut server = server::start_server(session, &args.host, args.port).await?;

    // Print port for the UI process to read (intentional stdout for IPC)
    println!("{}{}", RpcConfig::PORT_ANNOUNCE_PREFIX, server.addr.port());

    info!("RPC server running on {}", server.addr);

    // Run until ctrl-c or a `shutdown` RPC call
    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received, exiting");
        }
        _ = &mut server.task => {
            info!("Shutdown requested, exiting");
        }
    }

    Ok(())
}
