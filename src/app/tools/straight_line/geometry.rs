//! Geometrie-Berechnungen für das Linien-Tool.

use super::super::common::{PlacementConfig, PointListBuilder};
use crate::shared::bezier::normalize_xz;
use glam::Vec3;

/// Verteilt Punkte im festen Abstand auf der Strecke `start → end`.
///
/// Abstände werden horizontal (XZ) gemessen. Normal liegt der erste Punkt
/// auf `start` und es folgen Punkte bei `i · spacing` solange dieser Wert
/// unter der Länge bleibt. Im Zaun-Modus sitzen die Punkte auf den Mitten
/// der Zaunfelder, das letzte Feld endet bündig auf `end`.
pub(crate) fn compute_line_points(
    start: Vec3,
    end: Vec3,
    config: &PlacementConfig,
    builder: &mut PointListBuilder,
) {
    if !config.has_valid_spacing() {
        return;
    }
    let Some((direction, length)) = normalize_xz(end - start) else {
        return;
    };
    let rotation = config
        .rotation_mode
        .along_direction(config.base_rotation, direction);
    let spacing = config.spacing;
    let at = |distance: f32| start + direction * distance;

    if config.is_fence() {
        let half = spacing * 0.5;
        let last = length - half;
        let mut index = 0usize;
        loop {
            let distance = half + index as f32 * spacing;
            if distance >= last {
                break;
            }
            if !builder.push(at(distance), rotation) {
                return;
            }
            index += 1;
        }
        if index > 0 {
            builder.push(at(last), rotation);
        }
    } else {
        let mut index = 0usize;
        loop {
            let distance = index as f32 * spacing;
            if distance >= length || !builder.push(at(distance), rotation) {
                break;
            }
            index += 1;
        }
    }
    log::debug!(
        "Linie {:.2}m bei Abstand {:.2}: {} Punkte",
        length,
        spacing,
        builder.len()
    );
}
