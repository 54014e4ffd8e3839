//! Kreis-Tool: verteilt Prefabs auf einem Kreis um ein geklicktes Zentrum.
//!
//! Der Radius folgt dem Cursor, der erste Punkt liegt in Cursor-Richtung.
//!
//! Aufgeteilt in:
//! - `state`:     Struct und Konstruktor
//! - `lifecycle`: PathTool-Implementierung
//! - `geometry`:  Punktverteilung auf dem Umfang

pub(crate) mod geometry;
mod lifecycle;
mod state;

pub use state::CircleTool;
