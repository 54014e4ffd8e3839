//! Linien-Tool: verteilt Prefabs im festen Abstand zwischen Startpunkt und Cursor.
//!
//! Aufgeteilt in:
//! - `state`:     Struct und Konstruktor
//! - `lifecycle`: PathTool-Implementierung (handle_click, reset, items_placed, …)
//! - `geometry`:  Punktverteilung inkl. Zaun-Modus

pub(crate) mod geometry;
mod lifecycle;
mod state;

pub use state::LineTool;

#[cfg(test)]
mod tests;
