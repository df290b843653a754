use std::sync::Arc;

use crate::snapshot::SnapshotCache;

#[derive(Clone)]
pub struct AppState {
    pub snapshots: Arc<SnapshotCache>,
}

impl AppState {
    pub fn new(snapshots: SnapshotCache) -> Self {
        Self {
            snapshots: Arc::new(snapshots),
        }
    }
}
