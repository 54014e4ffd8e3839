//! Use-Cases der Application-Layer-Orchestrierung.

pub mod apply_placement;

pub use apply_placement::{apply_pending, PlacementReport, PlacementSink};
