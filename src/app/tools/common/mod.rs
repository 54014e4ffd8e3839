//! Gemeinsame Hilfsfunktionen für Pfad-Tools.
//!
//! Aufgeteilt in:
//! - `rotation`: RotationMode und Gier-Winkel
//! - `config`:   PlacementConfig, Zaun-Auflösung
//! - `builder`:  PlacementContext, Punktlisten-Aufbau

mod builder;
mod config;
mod rotation;

pub(crate) use builder::PointListBuilder;
pub use builder::{PlacementContext, MAX_POINTS_PER_PATH};
pub use config::{fence_alignment, PlacementConfig};
pub use rotation::{path_angle, RotationMode};
