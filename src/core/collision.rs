//! Kollisions-Schnittstelle zur Host-Welt.

use super::prefab::Prefab;
use glam::Vec3;

/// Prüft, ob ein Prefab an einer Position mit bestehenden Objekten kollidiert.
///
/// Die eigentliche Überlappungsprüfung liegt beim Host; die Punkt-Generierung
/// speichert nur das Ergebnis am jeweiligen Punkt.
pub trait CollisionProbe {
    /// `true` wenn der Ort belegt ist.
    fn is_colliding(&self, prefab: &Prefab, position: Vec3) -> bool;
}

/// Kollisionsprüfung, die nie anschlägt.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollisions;

impl CollisionProbe for NoCollisions {
    fn is_colliding(&self, _prefab: &Prefab, _position: Vec3) -> bool {
        false
    }
}

impl<F> CollisionProbe for F
where
    F: Fn(&Prefab, Vec3) -> bool,
{
    fn is_colliding(&self, prefab: &Prefab, position: Vec3) -> bool {
        self(prefab, position)
    }
}
