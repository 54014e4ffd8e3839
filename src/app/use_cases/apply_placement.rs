//! Use-Case: wartende Platzierung in der Welt ausführen.

use crate::app::pending::PendingPlacement;
use crate::core::{PlacementPoint, Prefab};
use glam::Vec3;

/// Welt-Seite, die Prefabs tatsächlich erzeugt.
pub trait PlacementSink {
    /// Platziert `prefab` an `position`. `rotation` ist `None` für Bäume.
    fn place(&mut self, prefab: &Prefab, position: Vec3, rotation: Option<f32>);
}

/// Zusammenfassung einer ausgeführten Platzierung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementReport {
    /// Anzahl erzeugter Prefabs
    pub placed: usize,
    /// Wegen Kollision übersprungene Punkte
    pub skipped: usize,
}

/// Führt die wartende Aktion aus, falls vorhanden.
///
/// Kollidierende Punkte werden übersprungen. Bäume werden ohne Rotation
/// platziert. Gibt `None` zurück wenn nichts wartete.
pub fn apply_pending(
    queue: &PendingPlacement,
    sink: &mut dyn PlacementSink,
) -> Option<PlacementReport> {
    let action = queue.take()?;
    let prefab = action.prefab();
    let report = place_points(prefab, action.points(), sink);
    log::info!(
        "'{}' platziert: {} erzeugt, {} wegen Kollision übersprungen",
        prefab.name,
        report.placed,
        report.skipped
    );
    Some(report)
}

fn place_points(
    prefab: &Prefab,
    points: &[PlacementPoint],
    sink: &mut dyn PlacementSink,
) -> PlacementReport {
    let mut report = PlacementReport::default();
    for point in points {
        if point.colliding {
            report.skipped += 1;
            continue;
        }
        let rotation = prefab.kind.uses_rotation().then_some(point.rotation);
        sink.place(prefab, point.position, rotation);
        report.placed += 1;
    }
    report
}
