use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use devotion_dashboard::{router, AppState, Config, SnapshotCache};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let snapshots = SnapshotCache::new(config.source.build(), config.refresh);
    info!(
        "serving reports from {} (refresh every {:?})",
        snapshots.describe_source(),
        snapshots.ttl()
    );

    let app = router(AppState::new(snapshots));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
