use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotseat::{api, bank::QuestionBank, config::ServerConfig, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Config first: the fallback log filter depends on DEBUG
    let config = ServerConfig::from_env();

    // Initialize tracing
    let default_filter = if config.debug {
        "hotseat=debug,tower_http=debug"
    } else {
        "hotseat=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting hotseat...");
    tracing::info!(
        host = %config.host,
        port = config.port,
        debug = config.debug,
        "Server config loaded"
    );

    // Load the question bank (fatal if missing or malformed)
    let bank = match QuestionBank::load(&config.questions_file) {
        Ok(bank) => {
            tracing::info!(
                path = %config.questions_file.display(),
                difficulties = ?bank.difficulties(),
                "Question bank loaded"
            );
            bank
        }
        Err(e) => {
            tracing::error!(
                path = %config.questions_file.display(),
                "Failed to load question bank: {}",
                e
            );
            std::process::exit(1);
        }
    };

    // The home page must exist before the listener comes up
    let index = config.static_dir.join("index.html");
    if !index.is_file() {
        tracing::error!(path = %index.display(), "Home page not found");
        std::process::exit(1);
    }

    let state = AppState::new(bank);

    let app = Router::new()
        .merge(api::api_routes())
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.addr();
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
