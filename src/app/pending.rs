//! Übergabe bestätigter Platzierungen an die Welt-Seite.

use crate::core::{PlacementPoint, Prefab};
use std::sync::{Arc, Mutex, PoisonError};

/// Eine bestätigte Platzierung, bereit zur Ausführung.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementAction {
    /// Alle Punkte einer Bestätigung
    All {
        prefab: Prefab,
        points: Arc<[PlacementPoint]>,
    },
    /// Ein einzelner Punkt im Schritt-Modus
    Single {
        prefab: Prefab,
        point: PlacementPoint,
    },
}

impl PlacementAction {
    /// Zu platzierendes Prefab.
    pub fn prefab(&self) -> &Prefab {
        match self {
            Self::All { prefab, .. } | Self::Single { prefab, .. } => prefab,
        }
    }

    /// Punkte in Pfad-Reihenfolge.
    pub fn points(&self) -> &[PlacementPoint] {
        match self {
            Self::All { points, .. } => points,
            Self::Single { point, .. } => std::slice::from_ref(point),
        }
    }
}

/// Warteschlange mit genau einem Platz.
///
/// Solange eine Aktion wartet, wird jede weitere abgelehnt und unverändert
/// an den Aufrufer zurückgegeben.
#[derive(Debug, Default)]
pub struct PendingPlacement {
    slot: Mutex<Option<PlacementAction>>,
}

impl PendingPlacement {
    /// Erstellt eine leere Warteschlange.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stellt eine Aktion ein; `Err` mit der Aktion wenn der Platz belegt ist.
    pub fn submit(&self, action: PlacementAction) -> Result<(), PlacementAction> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            log::warn!(
                "Platzierung von '{}' abgelehnt: vorherige Aktion noch nicht ausgeführt",
                action.prefab().name
            );
            return Err(action);
        }
        *slot = Some(action);
        Ok(())
    }

    /// Entnimmt die wartende Aktion.
    pub fn take(&self) -> Option<PlacementAction> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// `true` solange eine Aktion wartet.
    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
