//! Placement Curve Engine Library.
//! Erzeugt Platzierungspunkte entlang von Linien, Bézier-Kurven und Kreisen.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    apply_pending, PathShape, PathTool, PendingPlacement, PlacementAction, PlacementConfig,
    PlacementMode, PlacementOutcome, PlacementReport, PlacementSession, PlacementSink,
    PointSnapshot, RotationMode,
};
pub use core::{
    CollisionProbe, FlatTerrain, Footprint, HeightGrid, NoCollisions, PlacementPoint, Prefab,
    PrefabKind, TerrainSampler, WorldBounds,
};
pub use shared::{Bezier3, PlacementOptions};
