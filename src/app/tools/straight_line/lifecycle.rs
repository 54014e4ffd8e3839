//! PathTool-Implementierung für das Linien-Tool.

use super::super::common::{PlacementConfig, PlacementContext, PointListBuilder};
use super::super::{PathPhase, PathTool, ToolAction};
use super::geometry::compute_line_points;
use super::state::LineTool;
use crate::core::PlacementPoint;
use glam::Vec3;

impl PathTool for LineTool {
    fn status_text(&self) -> &str {
        match self.start {
            None => "Startpunkt klicken",
            Some(_) => "Endpunkt klicken (Rechtsklick verwirft den Start)",
        }
    }

    fn phase(&self) -> PathPhase {
        match self.start {
            None => PathPhase::Idle,
            Some(_) => PathPhase::HasStart,
        }
    }

    fn handle_click(&mut self, location: Vec3) -> ToolAction {
        if self.start.is_none() {
            self.start = Some(location);
            ToolAction::Continue
        } else {
            ToolAction::ReadyToExecute
        }
    }

    fn compute_points(
        &self,
        current: Vec3,
        config: &PlacementConfig,
        context: &PlacementContext,
    ) -> Vec<PlacementPoint> {
        let Some(start) = self.start else {
            return Vec::new();
        };
        let mut builder = PointListBuilder::new(context);
        compute_line_points(start, current, config, &mut builder);
        builder.finish()
    }

    fn reset(&mut self) {
        self.start = None;
    }

    fn items_placed(&mut self, location: Vec3) {
        // Verkettung: nächste Linie beginnt am letzten Endpunkt
        self.start = Some(location);
    }
}
