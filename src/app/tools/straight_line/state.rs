//! State-Definition für das Linien-Tool.

use glam::Vec3;

/// Linien-Tool: Startpunkt per Klick, Ende folgt dem Cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineTool {
    pub(crate) start: Option<Vec3>,
}

impl LineTool {
    /// Erstellt ein Linien-Tool ohne Startpunkt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gesetzter Startpunkt.
    pub fn start(&self) -> Option<Vec3> {
        self.start
    }
}
