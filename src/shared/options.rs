//! Zentrale Konfiguration für die Linien-Platzierung.
//!
//! `PlacementOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::app::tools::PlacementMode;
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Abstand ─────────────────────────────────────────────────────────

/// Standard-Abstand zwischen zwei Platzierungen (Welteinheiten).
pub const DEFAULT_SPACING: f32 = 10.0;
/// Kleinster einstellbarer Abstand (Slider-Minimum).
pub const MIN_SPACING: f32 = 1.0;
/// Größter einstellbarer Abstand (Slider-Maximum).
pub const MAX_SPACING: f32 = 100.0;

// ── Rotation ────────────────────────────────────────────────────────

/// Standard-Basisrotation in Grad.
pub const DEFAULT_ROTATION_DEGREES: f32 = 0.0;
/// Größte einstellbare Basisrotation in Grad (Slider-Maximum).
pub const MAX_ROTATION_DEGREES: f32 = 360.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Platzierungs-Optionen.
/// Wird als `placement_curve_engine.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementOptions {
    /// Abstand zwischen zwei Platzierungen (Welteinheiten)
    pub spacing: f32,
    /// Basisrotation in Grad (Slider 0–360)
    pub rotation_degrees: f32,
    /// Rotation relativ zur Pfadrichtung statt absolut
    #[serde(default = "default_relative_rotation")]
    pub relative_rotation: bool,
    /// Zaun-Modus: Abstand = Prefab-Länge, Achse entlang des Pfads
    #[serde(default)]
    pub fence_mode: bool,
    /// Schritt-Modus: nach dem Bestätigen einzeln platzieren
    #[serde(default)]
    pub step_mode: bool,
    /// Zuletzt aktiver Pfad-Modus
    #[serde(default)]
    pub mode: PlacementMode,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            rotation_degrees: DEFAULT_ROTATION_DEGREES,
            relative_rotation: true,
            fence_mode: false,
            step_mode: false,
            mode: PlacementMode::default(),
        }
    }
}

/// Serde-Default für `relative_rotation` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_relative_rotation() -> bool {
    true
}

impl PlacementOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match Self::try_load_from_file(path) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) if path.exists() => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                Self::default()
            }
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Lädt Optionen aus einer TOML-Datei und meldet Fehler an den Aufrufer.
    ///
    /// Werte außerhalb der Slider-Bereiche werden geklemmt.
    pub fn try_load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen-Datei nicht lesbar: {}", path.display()))?;
        let opts: Self = toml::from_str(&content)
            .with_context(|| format!("Optionen-Datei ungültig: {}", path.display()))?;
        Ok(opts.sanitized())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("placement_curve_engine"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("placement_curve_engine.toml")
    }

    /// Klemmt Abstand und Rotation auf die Slider-Bereiche.
    ///
    /// Nicht-endliche Werte fallen auf die Standardwerte zurück.
    pub fn sanitized(mut self) -> Self {
        self.spacing = if self.spacing.is_finite() {
            self.spacing.clamp(MIN_SPACING, MAX_SPACING)
        } else {
            DEFAULT_SPACING
        };
        self.rotation_degrees = if self.rotation_degrees.is_finite() {
            self.rotation_degrees.clamp(0.0, MAX_ROTATION_DEGREES)
        } else {
            DEFAULT_ROTATION_DEGREES
        };
        self
    }

    /// Basisrotation in Radiant.
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }
}
