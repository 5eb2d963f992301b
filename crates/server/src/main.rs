use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use stock_core::config;
use stock_core::store::{load_seed, InMemoryStore, ProductStore};
use stock_server::api::create_router;
use stock_server::api::handlers::AppState;
use stock_server::api::metrics;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stock-server", about = "Product catalogue REST service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// JSON file with product types and products to load at startup
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Seconds to wait for in-flight requests after a shutdown signal
    #[arg(long, default_value_t = config::DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    shutdown_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("stock_server=info".parse()?)
                .add_directive("stock_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    let store = InMemoryStore::new();

    if let Some(ref seed_file) = args.seed_file {
        if let Err(e) = load_seed(seed_file, &store) {
            eprintln!(
                "Error: failed to load seed file '{}': {}",
                seed_file.display(),
                e
            );
            std::process::exit(1);
        }
    }

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let store: Arc<dyn ProductStore> = Arc::new(store);
    let state = AppState {
        store: store.clone(),
        prometheus_handle,
        start_time: Instant::now(),
    };

    let app = create_router(state);
    let addr = format!("{}:{}", args.host, args.port);

    let product_count = store.product_count().unwrap_or(0);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %addr,
        seeded = args.seed_file.is_some(),
        products = product_count,
        "stock-server ready"
    );

    // Spawn store metrics background task
    let metrics_store = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(15));
        loop {
            interval.tick().await;
            metrics::update_store_metrics(metrics_store.as_ref());
        }
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let shutdown_timeout = Duration::from_secs(args.shutdown_timeout);
    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_signal())
            .await
    };
    tokio::pin!(server);

    // The drain deadline starts once a shutdown signal arrives.
    tokio::select! {
        result = &mut server => result?,
        _ = async {
            wait_for_signal().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            tracing::error!(
                "Shutdown timeout ({}s) exceeded, dropping in-flight requests",
                args.shutdown_timeout
            );
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
