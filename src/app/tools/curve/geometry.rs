//! Punktverteilung entlang einer kubischen Bézier-Kurve.

use super::super::common::{PlacementConfig, PointListBuilder, RotationMode};
use super::stepper::step;
use crate::shared::bezier::normalize_xz;
use crate::shared::Bezier3;
use glam::Vec3;

/// Verteilt Punkte in fester Bogenlänge (XZ) entlang der Kurve.
///
/// Normal liegt der erste Punkt auf B(0), danach wird um `spacing`
/// weitergeschritten solange der Parameter ≤ 1 bleibt. Im Zaun-Modus wird
/// die Kurve in Sehnen-Felder der Länge `spacing` zerlegt, das letzte Feld
/// endet bündig auf B(1).
pub(crate) fn compute_curve_points(
    curve: &Bezier3,
    config: &PlacementConfig,
    builder: &mut PointListBuilder,
) {
    if !config.has_valid_spacing() {
        return;
    }
    if config.is_fence() {
        place_fence_panels(curve, config, builder);
    } else {
        place_along(curve, config, builder);
    }
    log::debug!(
        "Kurve bei Abstand {:.2}: {} Punkte",
        config.spacing,
        builder.len()
    );
}

fn place_along(curve: &Bezier3, config: &PlacementConfig, builder: &mut PointListBuilder) {
    let spacing = config.spacing;
    let mut t = 0.0f32;
    while t <= 1.0 {
        let rotation = match config.rotation_mode {
            RotationMode::Fixed => config.base_rotation,
            mode => match direction_at(curve, t, spacing) {
                Some(direction) => mode.along_direction(config.base_rotation, direction),
                None => config.base_rotation,
            },
        };
        if !builder.push(curve.position(t), rotation) {
            return;
        }
        let next = step(curve, t, spacing);
        if next.is_nan() || next <= t {
            log::debug!("Arc-Length-Schritt stagniert bei t = {:.4}", t);
            return;
        }
        t = next;
    }
}

fn place_fence_panels(curve: &Bezier3, config: &PlacementConfig, builder: &mut PointListBuilder) {
    let spacing = config.spacing;
    let mut t = 0.0f32;
    loop {
        let next = step(curve, t, spacing);
        let last = next.is_nan() || next >= 1.0 || next <= t;
        let (panel_start, panel_end) = if last {
            let tail = step(curve, 1.0, -spacing).max(0.0);
            (curve.position(tail), curve.position(1.0))
        } else {
            (curve.position(t), curve.position(next))
        };
        let chord = panel_end - panel_start;
        let rotation = config
            .rotation_mode
            .along_direction(config.base_rotation, chord);
        if !builder.push(panel_start + chord * 0.5, rotation) || last {
            return;
        }
        t = next;
    }
}

/// Pfadrichtung (XZ) bei `t`.
///
/// Primär aus der Ableitung; fällt diese in XZ weg, aus der Sehne zwischen
/// den Nachbarpunkten im Abstand `spacing` davor und danach.
pub(crate) fn direction_at(curve: &Bezier3, t: f32, spacing: f32) -> Option<Vec3> {
    if let Some((direction, _)) = normalize_xz(curve.tangent(t)) {
        return Some(direction);
    }
    let before = curve.position(step(curve, t, -spacing));
    let after = curve.position(step(curve, t, spacing));
    normalize_xz(after - before).map(|(direction, _)| direction)
}
