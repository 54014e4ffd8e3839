use super::super::common::{PlacementConfig, PlacementContext, PointListBuilder, RotationMode};
use super::super::{PathPhase, PathTool, ToolAction};
use super::geometry::compute_line_points;
use super::state::LineTool;
use crate::core::{FlatTerrain, NoCollisions, PlacementPoint};
use approx::assert_relative_eq;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

fn line(start: Vec3, end: Vec3, config: PlacementConfig) -> Vec<PlacementPoint> {
    let terrain = FlatTerrain::new(0.0);
    let context = PlacementContext::new(&terrain, &NoCollisions, None);
    let mut builder = PointListBuilder::new(&context);
    compute_line_points(start, end, &config, &mut builder);
    builder.finish()
}

#[test]
fn test_compute_line_points_basic() {
    let config = PlacementConfig::new(10.0, 0.0, RotationMode::Relative);
    let points = line(Vec3::ZERO, Vec3::new(30.0, 0.0, 0.0), config);
    assert_eq!(points.len(), 3);
    for (i, point) in points.iter().enumerate() {
        assert_relative_eq!(point.position.x, i as f32 * 10.0);
        assert_relative_eq!(point.rotation, 0.0);
    }
}

#[test]
fn test_compute_line_points_partial_last_segment() {
    // 25m bei 10m Abstand: Punkte bei 0, 10, 20
    let config = PlacementConfig::new(10.0, 0.0, RotationMode::Relative);
    let points = line(Vec3::ZERO, Vec3::new(0.0, 0.0, 25.0), config);
    assert_eq!(points.len(), 3);
    assert_relative_eq!(points[2].position.z, 20.0);
    assert_relative_eq!(points[0].rotation, FRAC_PI_2);
}

#[test]
fn test_compute_line_points_ignores_height_difference() {
    let config = PlacementConfig::new(10.0, 0.0, RotationMode::Fixed);
    let points = line(Vec3::ZERO, Vec3::new(20.0, 500.0, 0.0), config);
    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|p| p.position.y == 0.0));
}

#[test]
fn test_compute_line_points_degenerate_inputs() {
    let config = PlacementConfig::new(10.0, 0.0, RotationMode::Relative);
    assert!(line(Vec3::ONE, Vec3::new(1.0, 9.0, 1.0), config).is_empty());

    let zero = PlacementConfig::new(0.0, 0.0, RotationMode::Relative);
    assert!(line(Vec3::ZERO, Vec3::X * 30.0, zero).is_empty());

    let nan = PlacementConfig::new(f32::NAN, 0.0, RotationMode::Relative);
    assert!(line(Vec3::ZERO, Vec3::X * 30.0, nan).is_empty());
}

#[test]
fn test_fence_line_panels_end_flush() {
    let config = PlacementConfig::new(10.0, 0.0, RotationMode::FenceAlignedZ);
    let points = line(Vec3::ZERO, Vec3::new(32.0, 0.0, 0.0), config);
    let xs: Vec<f32> = points.iter().map(|p| p.position.x).collect();
    assert_eq!(xs.len(), 4);
    assert_relative_eq!(xs[0], 5.0);
    assert_relative_eq!(xs[1], 15.0);
    assert_relative_eq!(xs[2], 25.0);
    assert_relative_eq!(xs[3], 27.0);
    assert_relative_eq!(points[0].rotation, -FRAC_PI_2);
}

#[test]
fn test_fence_line_shorter_than_panel_is_empty() {
    let config = PlacementConfig::new(10.0, 0.0, RotationMode::FenceAlignedX);
    assert!(line(Vec3::ZERO, Vec3::new(8.0, 0.0, 0.0), config).is_empty());
}

#[test]
fn test_tool_click_flow() {
    let mut tool = LineTool::new();
    assert_eq!(tool.phase(), PathPhase::Idle);

    let action = tool.handle_click(Vec3::ZERO);
    assert_eq!(action, ToolAction::Continue);
    assert_eq!(tool.phase(), PathPhase::HasStart);

    let action = tool.handle_click(Vec3::new(12.0, 0.0, 0.0));
    assert_eq!(action, ToolAction::ReadyToExecute);
    assert_eq!(tool.start(), Some(Vec3::ZERO));
}

#[test]
fn test_chaining_uses_last_end_as_start() {
    let mut tool = LineTool::new();
    tool.handle_click(Vec3::ZERO);
    tool.items_placed(Vec3::new(40.0, 0.0, 0.0));
    assert_eq!(tool.start(), Some(Vec3::new(40.0, 0.0, 0.0)));
    assert!(tool.has_pending_input());

    tool.reset();
    assert_eq!(tool.start(), None);
    assert!(!tool.has_pending_input());
}
