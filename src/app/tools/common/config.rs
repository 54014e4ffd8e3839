//! Aufgelöste Platzierungs-Konfiguration (Abstand + Rotationsregel).

use super::rotation::RotationMode;
use crate::core::{Footprint, Prefab};
use crate::shared::PlacementOptions;

/// Effektive Werte, mit denen ein Pfad in Punkte zerlegt wird.
///
/// Entsteht aus `PlacementOptions` und dem gewählten Prefab; im Zaun-Modus
/// ersetzen Prefab-Länge und Achse den eingestellten Abstand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Abstand zwischen zwei Punkten entlang des Pfads
    pub spacing: f32,
    /// Basisrotation in Radiant
    pub base_rotation: f32,
    /// Rotationsregel
    pub rotation_mode: RotationMode,
}

impl PlacementConfig {
    /// Erstellt eine Konfiguration aus Einzelwerten.
    pub fn new(spacing: f32, base_rotation: f32, rotation_mode: RotationMode) -> Self {
        Self {
            spacing,
            base_rotation,
            rotation_mode,
        }
    }

    /// Leitet die effektive Konfiguration aus Optionen und Prefab ab.
    ///
    /// Zaun-Modus greift nur für Props und Gebäude mit gültiger Grundfläche,
    /// sonst bleiben Abstand und Rotationsregel der Optionen aktiv.
    pub fn resolve(options: &PlacementOptions, prefab: Option<&Prefab>) -> Self {
        let rotation_mode = if options.relative_rotation {
            RotationMode::Relative
        } else {
            RotationMode::Fixed
        };
        let mut config = Self::new(options.spacing, options.rotation_radians(), rotation_mode);

        if options.fence_mode {
            if let Some(prefab) = prefab.filter(|p| p.kind.supports_fence_mode()) {
                match fence_alignment(prefab.footprint) {
                    Some((spacing, mode)) => {
                        config.spacing = spacing;
                        config.rotation_mode = mode;
                    }
                    None => log::warn!(
                        "Zaun-Modus ignoriert: Prefab '{}' hat keine gültige Grundfläche",
                        prefab.name
                    ),
                }
            }
        }
        config
    }

    /// `true` wenn eine Zaun-Ausrichtung aktiv ist.
    pub fn is_fence(&self) -> bool {
        self.rotation_mode.is_fence()
    }

    /// Abstand ist endlich und positiv.
    pub fn has_valid_spacing(&self) -> bool {
        self.spacing.is_finite() && self.spacing > 0.0
    }
}

/// Zaun-Abstand und -Achse aus der Grundfläche.
///
/// Die längere Seite bestimmt den Abstand; bei Gleichstand gewinnt Z.
pub fn fence_alignment(footprint: Footprint) -> Option<(f32, RotationMode)> {
    let (spacing, mode) = if footprint.size_x > footprint.size_z {
        (footprint.size_x, RotationMode::FenceAlignedX)
    } else {
        (footprint.size_z, RotationMode::FenceAlignedZ)
    };
    (spacing.is_finite() && spacing > 0.0).then_some((spacing, mode))
}
