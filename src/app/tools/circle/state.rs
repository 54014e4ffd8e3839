//! State-Definition für das Kreis-Tool.

use glam::Vec3;

/// Kreis-Tool: Zentrum per Klick, Radius bis zum Cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleTool {
    pub(crate) centre: Option<Vec3>,
}

impl CircleTool {
    /// Erstellt ein Kreis-Tool ohne Zentrum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gesetztes Zentrum.
    pub fn centre(&self) -> Option<Vec3> {
        self.centre
    }
}
