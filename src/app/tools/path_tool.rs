//! PathTool-Trait: Schnittstelle für alle Pfad-Tools.

use glam::Vec3;

use super::common::{PlacementConfig, PlacementContext};
use super::{PathPhase, ToolAction};
use crate::core::PlacementPoint;

/// Schnittstelle für alle Pfad-Tools (Punkt, Linie, Kurve, Kreis).
///
/// Tools sind zustandsbehaftet (Klick-Phasen) und erzeugen aus ihrem Zustand
/// und der aktuellen Cursor-Position eine Punktliste.
pub trait PathTool {
    /// Statustext für die Hilfezeile (z.B. "Startpunkt klicken")
    fn status_text(&self) -> &str;

    /// Aktuelle Eingabe-Phase.
    fn phase(&self) -> PathPhase;

    /// Klick verarbeiten. Gibt die nächste Aktion zurück.
    fn handle_click(&mut self, location: Vec3) -> ToolAction;

    /// Punktliste für die aktuelle Cursor-Position berechnen.
    ///
    /// Leer solange noch nicht genug Punkte gesetzt sind.
    fn compute_points(
        &self,
        current: Vec3,
        config: &PlacementConfig,
        context: &PlacementContext,
    ) -> Vec<PlacementPoint>;

    /// Einen Eingabeschritt zurücknehmen (Rechtsklick).
    fn reset(&mut self);

    /// Nach erfolgreicher Platzierung für die Verkettung neu ausrichten.
    ///
    /// `location` ist die Cursor-Position zum Zeitpunkt der Bestätigung.
    fn items_placed(&mut self, location: Vec3);

    /// Hat das Tool angefangene Eingaben?
    fn has_pending_input(&self) -> bool {
        self.phase() != PathPhase::Idle
    }
}
