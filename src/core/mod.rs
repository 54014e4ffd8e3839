//! Core-Domänentypen: Platzierungspunkte, Prefabs, Terrain- und Kollisions-Schnittstellen.

pub mod collision;
/// Core-Datenmodelle für die Punkt-Generierung
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - PlacementPoint: Ein erzeugter Platzierungsort mit Rotation und Kollisions-Flag
/// - Prefab: Das zu platzierende Objekt inkl. XZ-Grundfläche
pub mod placement_point;
pub mod prefab;
pub mod terrain;

pub use collision::{CollisionProbe, NoCollisions};
pub use placement_point::PlacementPoint;
pub use prefab::{Footprint, Prefab, PrefabKind};
pub use terrain::{FlatTerrain, HeightGrid, TerrainSampler, WorldBounds};
