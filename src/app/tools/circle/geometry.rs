//! Punktverteilung auf einem Kreisumfang.

use super::super::common::{PlacementConfig, PointListBuilder};
use crate::shared::bezier::normalize_xz;
use glam::Vec3;
use std::f32::consts::TAU;

/// Verteilt `floor(2πr / spacing)` Punkte gleichmäßig auf dem Kreis.
///
/// Der Radius ist der XZ-Abstand Zentrum → `current`, der erste Punkt liegt
/// in Richtung `current`. Ist der Umfang kürzer als ein Abstand, bleibt die
/// Liste leer.
pub(crate) fn compute_circle_points(
    centre: Vec3,
    current: Vec3,
    config: &PlacementConfig,
    builder: &mut PointListBuilder,
) {
    if !config.has_valid_spacing() {
        return;
    }
    let offset = current - centre;
    let Some((_, radius)) = normalize_xz(offset) else {
        return;
    };
    let count = (TAU * radius / config.spacing).floor();
    if count < 1.0 {
        return;
    }
    let count = count as usize;
    let increment = TAU / count as f32;
    let start_angle = offset.z.atan2(offset.x);

    for i in 0..count {
        let (sin, cos) = (start_angle + i as f32 * increment).sin_cos();
        let position = Vec3::new(centre.x + radius * cos, centre.y, centre.z + radius * sin);
        let rotation = config
            .rotation_mode
            .around_circle(config.base_rotation, sin.atan2(cos));
        if !builder.push(position, rotation) {
            break;
        }
    }
    log::debug!(
        "Kreis r = {:.2} bei Abstand {:.2}: {} Punkte",
        radius,
        config.spacing,
        builder.len()
    );
}
