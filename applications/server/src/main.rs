/// Cadence Server - annotation and scrobble endpoints for a music server
use cadence_core::{
    AnnotationCoordinator, ConfiguredFolderRegistry, FolderRegistry, ItemKind, LibraryItem,
};
use cadence_server::{api, config::ServerConfig, state::AppState};
use cadence_storage::LocalAnnotationStore;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence-server")]
#[command(about = "Ratings, stars and scrobbles for a Subsonic-compatible music server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Register a track, album or artist so it can be annotated
    AddItem {
        /// Item ID
        #[arg(long)]
        id: String,
        /// Item kind: track, album or artist
        #[arg(long)]
        kind: ItemKind,
        /// Album the track belongs to
        #[arg(long)]
        album_id: Option<String>,
    },
    /// List the configured media folders
    Folders,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence_server=info,cadence_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddItem { id, kind, album_id } => {
            add_item(&config, LibraryItem { id, kind, album_id }).await?;
        }
        Commands::Folders => {
            list_folders(&config)?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Cadence Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let pool = cadence_storage::create_pool(&config.storage.database_url).await?;
    cadence_storage::run_migrations(&pool).await?;
    let store = Arc::new(LocalAnnotationStore::new(pool));
    tracing::info!("Database connected");

    let folders = Arc::new(ConfiguredFolderRegistry::new(&config.library));
    tracing::info!("Music folder: {}", config.library.music_folder.display());

    let coordinator = AnnotationCoordinator::new(store.clone(), store, folders);
    let app_state = AppState::new(Arc::new(coordinator));

    let app = api::router(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_item(config: &ServerConfig, item: LibraryItem) -> anyhow::Result<()> {
    let pool = cadence_storage::create_pool(&config.storage.database_url).await?;
    cadence_storage::run_migrations(&pool).await?;

    cadence_storage::library_items::insert(&pool, &item).await?;
    println!("Registered {} {}", item.kind, item.id);

    Ok(())
}

fn list_folders(config: &ServerConfig) -> anyhow::Result<()> {
    let registry = ConfiguredFolderRegistry::new(&config.library);

    println!("Media folders:");
    for folder in registry.get_all()? {
        println!("  {} - {} ({})", folder.id, folder.name, folder.path.display());
    }

    Ok(())
}
