//! Rotations-Regeln für Platzierungspunkte.
//!
//! Alle Winkel sind Gier-Winkel um die Y-Achse in Radiant, gemessen mit
//! `atan2(dz, dx)` in der XZ-Ebene.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Wie die Rotation eines Punkts aus der Pfadrichtung abgeleitet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationMode {
    /// Jeder Punkt erhält die Basisrotation
    Fixed,
    /// Basisrotation plus Pfadrichtung
    #[default]
    Relative,
    /// Zaun: lokale X-Achse des Prefabs liegt entlang des Pfads
    FenceAlignedX,
    /// Zaun: lokale Z-Achse des Prefabs liegt entlang des Pfads
    FenceAlignedZ,
}

impl RotationMode {
    /// `true` für beide Zaun-Ausrichtungen.
    pub fn is_fence(self) -> bool {
        matches!(self, Self::FenceAlignedX | Self::FenceAlignedZ)
    }

    /// Rotation für einen Punkt, dessen Pfad in Richtung `direction` läuft.
    ///
    /// Nur die XZ-Komponenten von `direction` werden ausgewertet.
    pub fn along_direction(self, base_rotation: f32, direction: Vec3) -> f32 {
        let angle = path_angle(direction);
        match self {
            Self::Fixed => base_rotation,
            Self::Relative => base_rotation + angle,
            Self::FenceAlignedX => angle,
            Self::FenceAlignedZ => angle - FRAC_PI_2,
        }
    }

    /// Rotation für einen Punkt auf einem Kreis beim Winkel `angle` um das Zentrum.
    ///
    /// Die Pfadrichtung am Kreis steht senkrecht zum Radius, deshalb sind
    /// die Versätze gegenüber `along_direction` um 90° verschoben.
    pub fn around_circle(self, base_rotation: f32, angle: f32) -> f32 {
        match self {
            Self::Fixed => base_rotation,
            Self::Relative => angle - FRAC_PI_2 + base_rotation,
            Self::FenceAlignedX => angle - FRAC_PI_2,
            Self::FenceAlignedZ => angle,
        }
    }
}

/// Gier-Winkel einer Richtung in der XZ-Ebene.
pub fn path_angle(direction: Vec3) -> f32 {
    direction.z.atan2(direction.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_path_angle_ignores_height() {
        assert_relative_eq!(path_angle(Vec3::new(1.0, 50.0, 1.0)), FRAC_PI_4);
        assert_relative_eq!(path_angle(Vec3::new(-1.0, 0.0, 0.0)), PI);
    }

    #[test]
    fn test_along_direction_per_mode() {
        let dir = Vec3::new(0.0, 0.0, 1.0);
        assert_relative_eq!(RotationMode::Fixed.along_direction(0.3, dir), 0.3);
        assert_relative_eq!(
            RotationMode::Relative.along_direction(0.3, dir),
            0.3 + FRAC_PI_2
        );
        assert_relative_eq!(RotationMode::FenceAlignedX.along_direction(0.3, dir), FRAC_PI_2);
        assert_relative_eq!(RotationMode::FenceAlignedZ.along_direction(0.3, dir), 0.0);
    }

    #[test]
    fn test_around_circle_per_mode() {
        assert_relative_eq!(RotationMode::Fixed.around_circle(1.0, PI), 1.0);
        assert_relative_eq!(RotationMode::Relative.around_circle(0.5, PI), PI - FRAC_PI_2 + 0.5);
        assert_relative_eq!(RotationMode::FenceAlignedX.around_circle(0.5, PI), FRAC_PI_2);
        assert_relative_eq!(RotationMode::FenceAlignedZ.around_circle(0.5, PI), PI);
    }
}
