//! Kurven-Tool: kubische Bézier-Kurve über Start, Knickpunkt und Cursor.
//!
//! Die Kurve verläuft tangential zu den Strahlen Start→Knick und
//! Ende→Knick. Punkte werden in fester Bogenlänge (XZ) verteilt.
//!
//! **Freihand:** Nach dem Platzieren wird der Knick am Endpunkt gespiegelt,
//! so dass die nächste Kurve tangentenstetig anschließt.
//!
//! Aufgeteilt in:
//! - `state`:     Structs, Enums, Konstruktor
//! - `lifecycle`: PathTool-Implementierung (handle_click, reset, items_placed, …)
//! - `geometry`:  Punktverteilung, Zaun-Felder, Richtungs-Bestimmung
//! - `stepper`:   Arc-Length-Stepper (Gauß-Legendre + Newton)

pub(crate) mod geometry;
mod lifecycle;
mod state;
pub mod stepper;

pub use state::{CurveChaining, CurveTool};
