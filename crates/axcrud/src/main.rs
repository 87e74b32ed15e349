use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axcrud::{app::create_app, config::Config, handlers, state::AppState, storage::InMemoryStore};
use axcrud_core::storage::RecordStore;

/// axcrud - CRUD handler for records in a DynamoDB table
#[derive(Parser, Debug)]
#[command(name = "axcrud")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Use the in-memory store instead of DynamoDB
    #[arg(long, global = true, env = "IN_MEMORY")]
    in_memory: bool,

    #[command(flatten)]
    serve: ServeArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the record API over HTTP (default)
    Serve,
    /// Handle a single proxy event and print the response envelope
    Invoke {
        /// Path to the event JSON, or `-` for stdin
        #[arg(long, short, default_value = "-")]
        event: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Host address to bind the server to
    #[arg(long, short = 'H', global = true, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, global = true, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `invoke` output stays clean on stdout
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "axcrud=debug,axcrud_core=debug,tower_http=debug".into()),
        )
        .with(json_logs.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    let config = Config::from_env();
    let store = init_store(&config, cli.in_memory).await?;
    let state = AppState::new(store, &config);

    match cli.command {
        Some(Command::Invoke { event }) => {
            let event = handlers::read_event(&event)?;
            let response = handlers::invoke(&state, event).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Some(Command::Serve) | None => serve(state, &config, cli.serve).await,
    }
}

/// Build the record store once for the whole process.
async fn init_store(config: &Config, in_memory: bool) -> Result<Arc<dyn RecordStore>> {
    if in_memory {
        tracing::info!("Using in-memory store");
        return Ok(Arc::new(InMemoryStore::new()));
    }

    dynamodb_store(config).await
}

#[cfg(feature = "dynamodb")]
async fn dynamodb_store(config: &Config) -> Result<Arc<dyn RecordStore>> {
    use axcrud::storage::{DynamoDbSettings, DynamoDbStore};

    let table_name = config
        .table_name
        .clone()
        .ok_or_else(|| anyhow::anyhow!("TABLE_NAME must be set to use the DynamoDB store"))?;

    let store = DynamoDbStore::connect(DynamoDbSettings {
        table_name,
        region: config.region.clone(),
        endpoint_url: config.dynamodb_endpoint.clone(),
        page_size: config.scan_page_size,
    })
    .await;

    Ok(Arc::new(store))
}

#[cfg(not(feature = "dynamodb"))]
async fn dynamodb_store(_config: &Config) -> Result<Arc<dyn RecordStore>> {
    anyhow::bail!("Built without the `dynamodb` feature; run with --in-memory")
}

async fn serve(state: AppState, config: &Config, args: ServeArgs) -> Result<()> {
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", args.host, args.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!(
        single = %config.user_path,
        collection = %config.users_path,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
