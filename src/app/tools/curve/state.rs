//! State-Definitionen und Konstruktor für das Kurven-Tool.

use crate::shared::Bezier3;
use glam::Vec3;

/// Wie die nächste Kurve nach einer Platzierung ansetzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveChaining {
    /// Neuer Start am letzten Endpunkt, Knick muss neu gesetzt werden
    #[default]
    Restart,
    /// Freihand: Knick wird am Endpunkt gespiegelt, die Tangente läuft stetig weiter
    Freeform,
}

/// Kurven-Tool: Start → Knickpunkt → Ende folgt dem Cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveTool {
    pub(crate) start: Option<Vec3>,
    pub(crate) elbow: Option<Vec3>,
    pub(crate) chaining: CurveChaining,
}

impl CurveTool {
    /// Erstellt ein Kurven-Tool mit neuem Start nach jeder Platzierung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein Freihand-Kurven-Tool.
    pub fn freeform() -> Self {
        Self {
            chaining: CurveChaining::Freeform,
            ..Self::default()
        }
    }

    /// Gesetzter Startpunkt.
    pub fn start(&self) -> Option<Vec3> {
        self.start
    }

    /// Gesetzter Knickpunkt.
    pub fn elbow(&self) -> Option<Vec3> {
        self.elbow
    }

    /// Verkettungs-Verhalten.
    pub fn chaining(&self) -> CurveChaining {
        self.chaining
    }

    /// Kurve vom Start über den Knick zum Cursor, sofern konstruierbar.
    pub fn curve_to(&self, current: Vec3) -> Option<Bezier3> {
        Bezier3::from_elbow(self.start?, self.elbow?, current)
    }
}
