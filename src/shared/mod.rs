//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Kurven-Geometrie, die von `app` und den
//! Tool-Modulen gemeinsam genutzt werden.

pub mod bezier;
pub mod options;

pub use bezier::Bezier3;
pub use options::PlacementOptions;
pub use options::{DEFAULT_SPACING, MAX_SPACING, MIN_SPACING};
