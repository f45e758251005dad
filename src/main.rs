use clap::Parser;
use std::sync::Arc;
use tradelens::config::Config;
use tradelens::TradeLens;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tradelens", about = "Personal trading journal assistant")]
struct Cli {
    /// Address to listen on (overrides BIND_ADDR)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let cfg = Config::from_env();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = match TradeLens::new(&cfg) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            eprintln!("Error initializing tradelens: {e}");
            std::process::exit(1);
        }
    };

    let bind = cli.bind.unwrap_or(cfg.bind_addr);
    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error binding {bind}: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("listening on {bind}");
    if let Err(e) = axum::serve(listener, tradelens::http::router(app)).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
