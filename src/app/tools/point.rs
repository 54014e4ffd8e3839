//! Einzelpunkt-Tool: ein Prefab direkt am Cursor.

use super::common::{PlacementConfig, PlacementContext, PointListBuilder};
use super::{PathPhase, PathTool, ToolAction};
use crate::core::PlacementPoint;
use glam::Vec3;

/// Einzelpunkt-Tool ohne eigenen Zustand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointTool;

impl PathTool for PointTool {
    fn status_text(&self) -> &str {
        "Klicken zum Platzieren"
    }

    fn phase(&self) -> PathPhase {
        PathPhase::Idle
    }

    fn handle_click(&mut self, _location: Vec3) -> ToolAction {
        ToolAction::ReadyToExecute
    }

    fn compute_points(
        &self,
        current: Vec3,
        config: &PlacementConfig,
        context: &PlacementContext,
    ) -> Vec<PlacementPoint> {
        let mut builder = PointListBuilder::new(context);
        builder.push(current, config.base_rotation);
        builder.finish()
    }

    fn reset(&mut self) {}

    fn items_placed(&mut self, _location: Vec3) {}
}
