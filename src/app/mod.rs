//! Application-Layer: Session, Pfad-Tools, Snapshot, Warteschlange und Use-Cases.

pub mod pending;
/// Platzierungs-Session
///
/// Dieses Modul verwaltet den Zustand einer Platzierung (Optionen, aktives
/// Tool, Schritt-Modus) und veröffentlicht die berechneten Punkte.
pub mod session;
pub mod snapshot;
pub mod tools;
pub mod use_cases;

pub use pending::{PendingPlacement, PlacementAction};
pub use session::{PlacementOutcome, PlacementSession};
pub use snapshot::PointSnapshot;
pub use tools::{PathPhase, PathShape, PathTool, PlacementConfig, PlacementMode, RotationMode};
pub use use_cases::{apply_pending, PlacementReport, PlacementSink};
