//! Veröffentlichte Punktliste für Leser außerhalb der Session.

use crate::core::PlacementPoint;
use std::sync::{Arc, PoisonError, RwLock};

/// Unveränderliche Punktliste, die per Pointer-Tausch ersetzt wird.
///
/// Leser klonen den `Arc` und iterieren ohne weitere Sperre; eine neue
/// Berechnung ersetzt nur den Zeiger. Außerhalb des Crates ist nur `load`
/// erreichbar.
///
/// ```compile_fail
/// let session = placement_curve_engine::PlacementSession::default();
/// session.snapshot_handle().clear();
/// ```
#[derive(Debug)]
pub struct PointSnapshot {
    current: RwLock<Arc<[PlacementPoint]>>,
}

impl Default for PointSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSnapshot {
    /// Erstellt einen leeren Snapshot.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Aktuelle Punktliste.
    pub fn load(&self) -> Arc<[PlacementPoint]> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Ersetzt die Punktliste. Nur die Session schreibt.
    pub(crate) fn publish(&self, points: Arc<[PlacementPoint]>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = points;
    }

    /// Veröffentlicht eine leere Liste.
    pub(crate) fn clear(&self) {
        self.publish(Arc::from(Vec::new()));
    }
}
