//! PathTool-Implementierung für das Kreis-Tool.

use super::super::common::{PlacementConfig, PlacementContext, PointListBuilder};
use super::super::{PathPhase, PathTool, ToolAction};
use super::geometry::compute_circle_points;
use super::state::CircleTool;
use crate::core::PlacementPoint;
use glam::Vec3;

impl PathTool for CircleTool {
    fn status_text(&self) -> &str {
        match self.centre {
            None => "Kreismittelpunkt klicken",
            Some(_) => "Radius wählen und klicken (Rechtsklick verwirft das Zentrum)",
        }
    }

    fn phase(&self) -> PathPhase {
        match self.centre {
            None => PathPhase::Idle,
            Some(_) => PathPhase::HasStart,
        }
    }

    fn handle_click(&mut self, location: Vec3) -> ToolAction {
        if self.centre.is_none() {
            self.centre = Some(location);
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
        let Some(centre) = self.centre else {
            return Vec::new();
        };
        let mut builder = PointListBuilder::new(context);
        compute_circle_points(centre, current, config, &mut builder);
        builder.finish()
    }

    fn reset(&mut self) {
        self.centre = None;
    }

    fn items_placed(&mut self, _location: Vec3) {
        // Zentrum bleibt für weitere Ringe erhalten
    }
}
