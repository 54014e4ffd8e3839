//! Platzierungs-Session: verbindet Optionen, aktives Pfad-Tool, Snapshot und Warteschlange.
//!
//! Pro Tick ruft der Host `recompute` mit der Cursor-Position auf, Klicks
//! gehen an `on_click` bzw. `on_right_click`. Bestätigte Punktlisten landen
//! als `PlacementAction` in der `PendingPlacement`-Warteschlange.

use super::pending::{PendingPlacement, PlacementAction};
use super::snapshot::PointSnapshot;
use super::tools::{
    PathPhase, PathShape, PathTool, PlacementConfig, PlacementContext, PlacementMode, ToolAction,
};
use crate::core::{CollisionProbe, PlacementPoint, Prefab, TerrainSampler};
use crate::shared::{Bezier3, PlacementOptions};
use glam::Vec3;
use std::sync::Arc;

/// Ergebnis eines Klicks oder Schritts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Klick hatte keine Wirkung (kein Prefab, leere Liste, kein Schritt-Modus)
    Ignored,
    /// Punkt registriert, weitere Eingabe nötig
    Continue,
    /// Punktliste als eine Aktion eingestellt
    Queued { count: usize },
    /// Schritt-Modus aktiv; `remaining` Punkte stehen noch aus
    Stepping { remaining: usize },
    /// Vorherige Aktion wurde noch nicht ausgeführt
    QueueBusy,
}

/// Eingefrorene Punktliste im Schritt-Modus.
#[derive(Debug, Clone)]
struct StepState {
    points: Arc<[PlacementPoint]>,
    next: usize,
    location: Vec3,
}

/// Zustand einer laufenden Platzierungs-Session.
pub struct PlacementSession {
    options: PlacementOptions,
    shape: PathShape,
    prefab: Option<Prefab>,
    snapshot: Arc<PointSnapshot>,
    pending: Arc<PendingPlacement>,
    /// Zuletzt berechnete Kurve (nur Kurven-Modi)
    preview_curve: Option<Bezier3>,
    stepping: Option<StepState>,
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new(PlacementOptions::default())
    }
}

impl PlacementSession {
    /// Erstellt eine Session mit dem in den Optionen gespeicherten Modus.
    pub fn new(options: PlacementOptions) -> Self {
        let options = options.sanitized();
        Self {
            shape: PathShape::new(options.mode),
            options,
            prefab: None,
            snapshot: Arc::new(PointSnapshot::new()),
            pending: Arc::new(PendingPlacement::new()),
            preview_curve: None,
            stepping: None,
        }
    }

    // ── Zugriff ──────────────────────────────────────────────────

    /// Aktuelle Optionen.
    pub fn options(&self) -> &PlacementOptions {
        &self.options
    }

    /// Übernimmt neue Optionen (geklemmt). Ein geänderter Modus setzt das Tool zurück.
    ///
    /// Jede Änderung verwirft die veröffentlichte Liste und eine eingefrorene
    /// Schritt-Liste, bis `recompute` mit den neuen Werten läuft.
    pub fn set_options(&mut self, options: PlacementOptions) {
        let options = options.sanitized();
        if options == self.options {
            return;
        }
        let mode_changed = options.mode != self.options.mode;
        self.options = options;
        if mode_changed {
            self.activate(self.options.mode);
        } else {
            self.invalidate();
        }
    }

    /// Aktiver Modus.
    pub fn mode(&self) -> PlacementMode {
        self.shape.mode()
    }

    /// Wechselt den Modus; angefangene Eingaben gehen verloren.
    pub fn set_mode(&mut self, mode: PlacementMode) {
        self.options.mode = mode;
        self.activate(mode);
    }

    /// Schaltet den Schritt-Modus. Ausschalten verwirft eine eingefrorene Liste.
    pub fn set_step_mode(&mut self, enabled: bool) {
        self.options.step_mode = enabled;
        if !enabled {
            self.stop_stepping();
        }
    }

    /// Wählt das zu platzierende Prefab (oder keins).
    ///
    /// Ein Wechsel verwirft die veröffentlichte Liste, da Zaun-Abstand und
    /// Kollisionen vom Prefab abhängen.
    pub fn select_prefab(&mut self, prefab: Option<Prefab>) {
        if prefab == self.prefab {
            return;
        }
        self.prefab = prefab;
        self.invalidate();
    }

    /// Gewähltes Prefab.
    pub fn prefab(&self) -> Option<&Prefab> {
        self.prefab.as_ref()
    }

    /// Aktives Pfad-Tool.
    pub fn shape(&self) -> &PathShape {
        &self.shape
    }

    /// Eingabe-Phase des aktiven Tools.
    pub fn phase(&self) -> PathPhase {
        self.shape.phase()
    }

    /// Statustext des aktiven Tools.
    pub fn status_text(&self) -> &str {
        if self.stepping.is_some() {
            "Schritt-Modus: nächsten Punkt platzieren, Rechtsklick bricht ab"
        } else {
            self.shape.status_text()
        }
    }

    /// Zuletzt berechnete Kurve, für Overlays.
    pub fn preview_curve(&self) -> Option<&Bezier3> {
        self.preview_curve.as_ref()
    }

    /// `true` solange eine eingefrorene Liste schrittweise platziert wird.
    pub fn is_stepping(&self) -> bool {
        self.stepping.is_some()
    }

    /// Aktuell veröffentlichte Punktliste.
    pub fn points(&self) -> Arc<[PlacementPoint]> {
        self.snapshot.load()
    }

    /// Geteilter Snapshot für Leser (Rendering, Overlays).
    pub fn snapshot_handle(&self) -> Arc<PointSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Geteilte Warteschlange für die ausführende Seite.
    pub fn pending_handle(&self) -> Arc<PendingPlacement> {
        Arc::clone(&self.pending)
    }

    // ── Ablauf ───────────────────────────────────────────────────

    /// Berechnet die Punktliste für die Cursor-Position neu und veröffentlicht sie.
    ///
    /// Im Schritt-Modus bleibt die eingefrorene Liste unverändert.
    pub fn recompute(
        &mut self,
        cursor: Vec3,
        terrain: &dyn TerrainSampler,
        collisions: &dyn CollisionProbe,
    ) -> Arc<[PlacementPoint]> {
        if self.stepping.is_some() {
            return self.snapshot.load();
        }
        let config = PlacementConfig::resolve(&self.options, self.prefab.as_ref());
        let context = PlacementContext::new(terrain, collisions, self.prefab.as_ref());
        let points: Arc<[PlacementPoint]> =
            Arc::from(self.shape.compute_points(cursor, &config, &context));
        self.preview_curve = self.shape.curve_to(cursor);

        log::debug!(
            "{:?}: {} Punkte (Abstand {:.2}, {:?}, {} kollidierend)",
            self.shape.mode(),
            points.len(),
            config.spacing,
            config.rotation_mode,
            points.iter().filter(|p| p.colliding).count()
        );
        self.snapshot.publish(Arc::clone(&points));
        points
    }

    /// Linksklick an `location`.
    ///
    /// Ist das Tool bereit, wird die zuletzt veröffentlichte Liste bestätigt.
    pub fn on_click(&mut self, location: Vec3) -> PlacementOutcome {
        let Some(prefab) = self.prefab.clone() else {
            log::debug!("Klick ignoriert: kein Prefab gewählt");
            return PlacementOutcome::Ignored;
        };
        if self.stepping.is_some() {
            return self.step();
        }
        match self.shape.handle_click(location) {
            ToolAction::Continue => PlacementOutcome::Continue,
            ToolAction::ReadyToExecute => self.commit(prefab, location),
        }
    }

    /// Rechtsklick: bricht einen laufenden Schritt-Modus ab und nimmt einen
    /// Eingabeschritt zurück (Linie/Kreis → Idle, Kurve mit Knick → nur Knick).
    pub fn on_right_click(&mut self) {
        self.stop_stepping();
        self.shape.reset();
        self.preview_curve = None;
        self.snapshot.clear();
    }

    /// Stellt den nächsten Punkt der eingefrorenen Liste ein.
    pub fn step(&mut self) -> PlacementOutcome {
        let (Some(state), Some(prefab)) = (self.stepping.as_mut(), self.prefab.clone()) else {
            return PlacementOutcome::Ignored;
        };
        let Some(&point) = state.points.get(state.next) else {
            self.finish_stepping();
            return PlacementOutcome::Stepping { remaining: 0 };
        };
        if self
            .pending
            .submit(PlacementAction::Single { prefab, point })
            .is_err()
        {
            return PlacementOutcome::QueueBusy;
        }
        state.next += 1;
        let remaining = state.points.len() - state.next;
        log::debug!("Schritt {} eingestellt, {} verbleibend", state.next, remaining);
        if remaining == 0 {
            self.finish_stepping();
        }
        PlacementOutcome::Stepping { remaining }
    }

    fn commit(&mut self, prefab: Prefab, location: Vec3) -> PlacementOutcome {
        let points = self.snapshot.load();
        if points.is_empty() {
            log::debug!("Bestätigung ohne Punkte ignoriert");
            return PlacementOutcome::Ignored;
        }
        if self.options.step_mode {
            let remaining = points.len();
            log::info!("Schritt-Modus: {} Punkte eingefroren", remaining);
            self.stepping = Some(StepState {
                points,
                next: 0,
                location,
            });
            return PlacementOutcome::Stepping { remaining };
        }

        let count = points.len();
        let name = prefab.name.clone();
        if self
            .pending
            .submit(PlacementAction::All { prefab, points })
            .is_err()
        {
            return PlacementOutcome::QueueBusy;
        }
        log::info!("{} × '{}' zur Platzierung eingestellt", count, name);
        self.shape.items_placed(location);
        self.preview_curve = None;
        PlacementOutcome::Queued { count }
    }

    fn finish_stepping(&mut self) {
        if let Some(state) = self.stepping.take() {
            log::info!("Schritt-Modus abgeschlossen ({} Punkte)", state.points.len());
            self.shape.items_placed(state.location);
            self.preview_curve = None;
        }
    }

    fn stop_stepping(&mut self) {
        if self.stepping.take().is_some() {
            log::debug!("Schritt-Modus abgebrochen");
        }
    }

    fn invalidate(&mut self) {
        self.stop_stepping();
        self.preview_curve = None;
        self.snapshot.clear();
    }

    fn activate(&mut self, mode: PlacementMode) {
        self.shape = PathShape::new(mode);
        self.stepping = None;
        self.preview_curve = None;
        self.snapshot.clear();
    }
}
