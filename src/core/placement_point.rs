//! Ein einzelner, berechneter Platzierungsort.

use glam::Vec3;

/// Platzierungsort entlang des aktuellen Pfads.
///
/// Punkte werden in Pfad-Reihenfolge erzeugt (vom Start Richtung Ende bzw.
/// einmal um den Kreis) und danach nie umsortiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPoint {
    /// Weltposition, Y bereits aus dem Terrain gesampelt
    pub position: Vec3,
    /// Rotation in Radiant (Bedeutung hängt vom `RotationMode` ab)
    pub rotation: f32,
    /// Kollisionsprüfung hat diesen Ort abgelehnt (wird nicht platziert)
    pub colliding: bool,
}

impl PlacementPoint {
    /// Erstellt einen kollisionsfreien Punkt.
    pub fn new(position: Vec3, rotation: f32) -> Self {
        Self {
            position,
            rotation,
            colliding: false,
        }
    }
}
