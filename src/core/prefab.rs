//! Zu platzierendes Objekt (Prop, Baum, Gebäude) und seine Grundfläche.

use glam::Vec3;

/// Art des Prefabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefabKind {
    /// Dekorations-Objekt (Zaun, Laterne, …)
    #[default]
    Prop,
    /// Baum, wird ohne Rotation platziert
    Tree,
    /// Gebäude
    Building,
}

impl PrefabKind {
    /// Nur Props und Gebäude haben eine ausrichtbare Grundfläche für den Zaun-Modus.
    pub fn supports_fence_mode(self) -> bool {
        matches!(self, PrefabKind::Prop | PrefabKind::Building)
    }

    /// Bäume ignorieren die berechnete Rotation.
    pub fn uses_rotation(self) -> bool {
        !matches!(self, PrefabKind::Tree)
    }
}

/// Abmessungen der Bounding-Box in der XZ-Ebene (volle Größe, nicht Halbachsen).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Footprint {
    /// Ausdehnung entlang der lokalen X-Achse
    pub size_x: f32,
    /// Ausdehnung entlang der lokalen Z-Achse
    pub size_z: f32,
}

impl Footprint {
    /// Erstellt eine Grundfläche aus vollen Kantenlängen.
    pub fn new(size_x: f32, size_z: f32) -> Self {
        Self { size_x, size_z }
    }

    /// Erstellt eine Grundfläche aus Mesh-Halbachsen (`extents × 2`).
    pub fn from_extents(extents: Vec3) -> Self {
        Self {
            size_x: extents.x * 2.0,
            size_z: extents.z * 2.0,
        }
    }
}

/// Ausgewähltes Prefab
#[derive(Debug, Clone, PartialEq)]
pub struct Prefab {
    /// Anzeigename (nur für Logging)
    pub name: String,
    /// Art des Prefabs
    pub kind: PrefabKind,
    /// XZ-Grundfläche
    pub footprint: Footprint,
}

impl Prefab {
    /// Erstellt ein neues Prefab.
    pub fn new(name: impl Into<String>, kind: PrefabKind, footprint: Footprint) -> Self {
        Self {
            name: name.into(),
            kind,
            footprint,
        }
    }
}
