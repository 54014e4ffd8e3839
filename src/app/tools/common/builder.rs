//! Gemeinsamer Punktlisten-Aufbau aus Positions-Sequenzen.

use crate::core::{CollisionProbe, PlacementPoint, Prefab, TerrainSampler};
use glam::Vec3;

/// Obergrenze für Punkte pro Pfad.
pub const MAX_POINTS_PER_PATH: usize = 10_000;

/// Host-Anbindung für die Punkt-Generierung.
///
/// Die Tools berechnen nur XZ-Positionen und Rotationen; Höhe und
/// Kollisions-Flag kommen über diese Schnittstellen.
#[derive(Clone, Copy)]
pub struct PlacementContext<'a> {
    /// Gelände-Höhenabfrage
    pub terrain: &'a dyn TerrainSampler,
    /// Kollisionsprüfung für das gewählte Prefab
    pub collisions: &'a dyn CollisionProbe,
    /// Gewähltes Prefab (ohne Prefab wird keine Kollision geprüft)
    pub prefab: Option<&'a Prefab>,
}

impl<'a> PlacementContext<'a> {
    /// Erstellt einen Kontext aus Host-Schnittstellen.
    pub fn new(
        terrain: &'a dyn TerrainSampler,
        collisions: &'a dyn CollisionProbe,
        prefab: Option<&'a Prefab>,
    ) -> Self {
        Self {
            terrain,
            collisions,
            prefab,
        }
    }
}

/// Sammelt Punkte, setzt die Geländehöhe und markiert Kollisionen.
pub(crate) struct PointListBuilder<'a> {
    context: &'a PlacementContext<'a>,
    points: Vec<PlacementPoint>,
}

impl<'a> PointListBuilder<'a> {
    pub(crate) fn new(context: &'a PlacementContext<'a>) -> Self {
        Self {
            context,
            points: Vec::new(),
        }
    }

    /// Hängt einen Punkt an. Die Y-Koordinate von `position` wird ignoriert.
    ///
    /// Gibt `false` zurück wenn die Obergrenze erreicht ist; der Aufrufer
    /// beendet dann seine Schleife.
    pub(crate) fn push(&mut self, position: Vec3, rotation: f32) -> bool {
        if self.points.len() >= MAX_POINTS_PER_PATH {
            log::warn!(
                "Punktliste bei {} Punkten abgeschnitten",
                MAX_POINTS_PER_PATH
            );
            return false;
        }
        let height = self.context.terrain.sample_height(position.x, position.z);
        let grounded = Vec3::new(position.x, height, position.z);
        let colliding = self
            .context
            .prefab
            .is_some_and(|prefab| self.context.collisions.is_colliding(prefab, grounded));
        self.points.push(PlacementPoint {
            position: grounded,
            rotation,
            colliding,
        });
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn finish(self) -> Vec<PlacementPoint> {
        self.points
    }
}
