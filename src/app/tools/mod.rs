//! Pfad-Tools für die Platzierung entlang von Punkt, Linie, Kurve und Kreis.
//!
//! Jedes Tool implementiert den `PathTool`-Trait. `PathShape` ist die
//! geschlossene Auswahl der Tools; die Session hält genau eine davon.
//! Tools erzeugen reine Daten (`PlacementPoint`), die eigentliche
//! Platzierung erfolgt zentral in `apply_placement`.

/// Kreis-Tool mit festem Zentrum.
pub mod circle;
/// Gemeinsame Hilfsfunktionen für Pfad-Tools.
pub mod common;
/// Kubisches Bézier-Kurven-Tool (mit Freihand-Verkettung).
pub mod curve;
/// PathTool-Trait: Schnittstelle für alle Pfad-Tools.
mod path_tool;
/// Einzelpunkt-Tool.
pub mod point;
/// Linien-Tool mit festem Abstand.
pub mod straight_line;

pub use circle::CircleTool;
pub use common::{PlacementConfig, PlacementContext, RotationMode};
pub use curve::{CurveChaining, CurveTool};
pub use path_tool::PathTool;
pub use point::PointTool;
pub use straight_line::LineTool;

use crate::core::PlacementPoint;
use crate::shared::Bezier3;
use glam::Vec3;
use serde::{Deserialize, Serialize};

// ── Typen ────────────────────────────────────────────────────────

/// Vom Nutzer gewählter Pfad-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementMode {
    /// Einzelnes Prefab am Cursor
    Point,
    /// Gerade Linie
    #[default]
    Line,
    /// Bézier-Kurve, nach jeder Platzierung neuer Knick
    Curve,
    /// Bézier-Kurve mit tangentenstetiger Verkettung
    Freeform,
    /// Kreis um ein Zentrum
    Circle,
}

impl PlacementMode {
    /// Alle Modi in Anzeige-Reihenfolge.
    pub const ALL: [PlacementMode; 5] = [
        PlacementMode::Point,
        PlacementMode::Line,
        PlacementMode::Curve,
        PlacementMode::Freeform,
        PlacementMode::Circle,
    ];

    /// Anzeigename
    pub fn label(self) -> &'static str {
        match self {
            PlacementMode::Point => "Punkt",
            PlacementMode::Line => "Linie",
            PlacementMode::Curve => "Kurve",
            PlacementMode::Freeform => "Freihand",
            PlacementMode::Circle => "Kreis",
        }
    }
}

/// Rückgabe von `handle_click`, steuert den Tool-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Punkt registriert, weitere Eingabe nötig
    Continue,
    /// Alle nötigen Punkte gesetzt, Klick bestätigt die Platzierung
    ReadyToExecute,
}

/// Eingabe-Phase eines Tools (für Statusanzeige und stufenweises Zurücksetzen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPhase {
    /// Noch nichts gesetzt
    Idle,
    /// Start bzw. Zentrum gesetzt
    HasStart,
    /// Start und Knickpunkt gesetzt
    HasElbow,
}

// ── Pfad-Auswahl ─────────────────────────────────────────────────

/// Geschlossene Auswahl des aktiven Pfad-Tools samt Zustand.
#[derive(Debug, Clone, PartialEq)]
pub enum PathShape {
    /// Einzelpunkt
    Point(PointTool),
    /// Linie
    Line(LineTool),
    /// Kurve oder Freihand
    Curve(CurveTool),
    /// Kreis
    Circle(CircleTool),
}

impl Default for PathShape {
    fn default() -> Self {
        Self::new(PlacementMode::default())
    }
}

impl PathShape {
    /// Erstellt ein leeres Tool für den Modus.
    pub fn new(mode: PlacementMode) -> Self {
        match mode {
            PlacementMode::Point => Self::Point(PointTool),
            PlacementMode::Line => Self::Line(LineTool::new()),
            PlacementMode::Curve => Self::Curve(CurveTool::new()),
            PlacementMode::Freeform => Self::Curve(CurveTool::freeform()),
            PlacementMode::Circle => Self::Circle(CircleTool::new()),
        }
    }

    /// Modus des aktiven Tools.
    pub fn mode(&self) -> PlacementMode {
        match self {
            Self::Point(_) => PlacementMode::Point,
            Self::Line(_) => PlacementMode::Line,
            Self::Curve(tool) => match tool.chaining() {
                CurveChaining::Restart => PlacementMode::Curve,
                CurveChaining::Freeform => PlacementMode::Freeform,
            },
            Self::Circle(_) => PlacementMode::Circle,
        }
    }

    /// Bézier-Kurve zum Cursor (nur Kurven-Modi mit gesetztem Knick).
    pub fn curve_to(&self, current: Vec3) -> Option<Bezier3> {
        match self {
            Self::Curve(tool) => tool.curve_to(current),
            _ => None,
        }
    }

    fn tool(&self) -> &dyn PathTool {
        match self {
            Self::Point(tool) => tool,
            Self::Line(tool) => tool,
            Self::Curve(tool) => tool,
            Self::Circle(tool) => tool,
        }
    }

    fn tool_mut(&mut self) -> &mut dyn PathTool {
        match self {
            Self::Point(tool) => tool,
            Self::Line(tool) => tool,
            Self::Curve(tool) => tool,
            Self::Circle(tool) => tool,
        }
    }
}

impl PathTool for PathShape {
    fn status_text(&self) -> &str {
        self.tool().status_text()
    }

    fn phase(&self) -> PathPhase {
        self.tool().phase()
    }

    fn handle_click(&mut self, location: Vec3) -> ToolAction {
        self.tool_mut().handle_click(location)
    }

    fn compute_points(
        &self,
        current: Vec3,
        config: &PlacementConfig,
        context: &PlacementContext,
    ) -> Vec<PlacementPoint> {
        self.tool().compute_points(current, config, context)
    }

    fn reset(&mut self) {
        self.tool_mut().reset();
    }

    fn items_placed(&mut self, location: Vec3) {
        self.tool_mut().items_placed(location);
    }
}
