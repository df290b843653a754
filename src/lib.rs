pub mod aggregate;
pub mod app;
pub mod config;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod snapshot;
pub mod source;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use snapshot::SnapshotCache;
pub use state::AppState;
