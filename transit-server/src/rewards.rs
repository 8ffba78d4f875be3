//! Eco-points rewards store.
//!
//! Riders earn points for sustainable trips and spend them on rewards.
//! The balance is a single small JSON file on disk: read once at startup,
//! rewritten on every mutation. A missing or corrupt file is not an error;
//! the balance starts from zero and the next mutation rewrites the file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;

/// Errors from persisting the rewards balance.
#[derive(Debug, thiserror::Error)]
pub enum RewardsError {
    /// Failed to write the balance file
    #[error("failed to persist rewards: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode the balance file
    #[error("failed to encode rewards: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of the balance file.
#[derive(Debug, Serialize, Deserialize)]
struct RewardsFile {
    points: u32,
}

/// Thread-safe handle to the rider's points balance.
///
/// Clones share the same balance and file.
#[derive(Clone)]
pub struct RewardsStore {
    path: Arc<PathBuf>,
    points: Arc<RwLock<u32>>,
}

impl RewardsStore {
    /// Open the store at `path`, reading the current balance.
    ///
    /// A missing file means a fresh balance of zero. An unreadable or
    /// corrupt file also starts from zero, with a warning: losing a
    /// balance beats refusing to start.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let points = read_points(&path);

        Self {
            path: Arc::new(path),
            points: Arc::new(RwLock::new(points)),
        }
    }

    /// Current balance.
    pub async fn points(&self) -> u32 {
        *self.points.read().await
    }

    /// Add points to the balance (saturating) and persist.
    ///
    /// Returns the new balance.
    pub async fn award(&self, amount: u32) -> Result<u32, RewardsError> {
        let mut guard = self.points.write().await;
        let updated = guard.saturating_add(amount);

        persist(&self.path, updated)?;
        *guard = updated;

        Ok(updated)
    }

    /// Spend points if the balance covers them.
    ///
    /// Returns the new balance, or `None` (without mutating) when the
    /// balance is insufficient.
    pub async fn try_spend(&self, amount: u32) -> Result<Option<u32>, RewardsError> {
        let mut guard = self.points.write().await;

        let Some(updated) = guard.checked_sub(amount) else {
            return Ok(None);
        };

        persist(&self.path, updated)?;
        *guard = updated;

        Ok(Some(updated))
    }
}

/// Read the persisted balance, defaulting to zero on any failure.
fn read_points(path: &Path) -> u32 {
    if !path.exists() {
        return 0;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<RewardsFile>(&content) {
            Ok(file) => file.points,
            Err(e) => {
                warn!("corrupt rewards file {}: {e}; starting from zero", path.display());
                0
            }
        },
        Err(e) => {
            warn!("unreadable rewards file {}: {e}; starting from zero", path.display());
            0
        }
    }
}

/// Write the balance to disk, creating parent directories as needed.
fn persist(path: &Path, points: u32) -> Result<(), RewardsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string(&RewardsFile { points })?;
    std::fs::write(path, content)?;

    Ok(())
}
