//! PathTool-Implementierung für das Kurven-Tool.

use super::super::common::{PlacementConfig, PlacementContext, PointListBuilder};
use super::super::{PathPhase, PathTool, ToolAction};
use super::geometry::compute_curve_points;
use super::state::{CurveChaining, CurveTool};
use crate::core::PlacementPoint;
use glam::Vec3;

impl PathTool for CurveTool {
    fn status_text(&self) -> &str {
        match (self.start, self.elbow) {
            (None, _) => "Startpunkt klicken",
            (Some(_), None) => "Knickpunkt klicken",
            (Some(_), Some(_)) => "Endpunkt klicken (Rechtsklick verwirft den Knick)",
        }
    }

    fn phase(&self) -> PathPhase {
        match (self.start, self.elbow) {
            (None, _) => PathPhase::Idle,
            (Some(_), None) => PathPhase::HasStart,
            (Some(_), Some(_)) => PathPhase::HasElbow,
        }
    }

    fn handle_click(&mut self, location: Vec3) -> ToolAction {
        if self.start.is_none() {
            self.start = Some(location);
            ToolAction::Continue
        } else if self.elbow.is_none() {
            self.elbow = Some(location);
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
        let Some(curve) = self.curve_to(current) else {
            return Vec::new();
        };
        let mut builder = PointListBuilder::new(context);
        compute_curve_points(&curve, config, &mut builder);
        builder.finish()
    }

    fn reset(&mut self) {
        // Stufenweise: erst den Knick, dann den Start verwerfen
        if self.elbow.take().is_none() {
            self.start = None;
        }
    }

    fn items_placed(&mut self, location: Vec3) {
        match self.chaining {
            CurveChaining::Restart => {
                self.elbow = None;
            }
            CurveChaining::Freeform => {
                if let Some(elbow) = self.elbow {
                    self.elbow = Some(location + (location - elbow));
                }
            }
        }
        self.start = Some(location);
    }
}
