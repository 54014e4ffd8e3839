//! Kubische Bézier-Kurven in der Welt (XYZ) mit Auswertung in der XZ-Ebene.
//!
//! Layer-neutral: wird vom Kurven-Tool, dem Arc-Length-Stepper und der
//! Vorschau genutzt, ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// Handle-Länge (Anteil der Sehne) bei gerader Konfiguration.
const STRAIGHT_HANDLE_FACTOR: f32 = 0.15;
/// Handle-Länge (Anteil der Sehne bzw. der Tangenten-Summe) bei gekrümmter Konfiguration.
const CURVE_HANDLE_FACTOR: f32 = 0.276;
/// Untergrenze der Tangenten-Schnittabstände (Anteil der Sehne).
const MIN_INTERSECTION_FACTOR: f32 = 0.1;
/// Skalarprodukt-Schwelle für (anti)parallele Richtungen.
const PARALLEL_DOT: f32 = 0.999;
/// Bisektions-Schritte für die Start-Schätzung in `travel`.
const TRAVEL_BISECTION_STEPS: usize = 12;

/// Kubische Bézier-Kurve mit den Kontrollpunkten `a`, `b`, `c`, `d`.
///
/// B(t) = (1-t)³·a + 3(1-t)²t·b + 3(1-t)t²·c + t³·d
///
/// Die Auswertung ist auch außerhalb von [0, 1] definiert (Extrapolation);
/// Aufrufer entscheiden selbst, wann sie abbrechen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier3 {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub d: Vec3,
}

impl Bezier3 {
    /// Erstellt eine Kurve aus vier Kontrollpunkten.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self { a, b, c, d }
    }

    /// Baut die Kurve von `start` nach `end`, deren Tangenten sich am `elbow` treffen.
    ///
    /// Die mittleren Kontrollpunkte liegen auf den Strahlen Start→Knick und
    /// Ende→Knick; die Kurve läuft daher nahe am Knickpunkt vorbei, nicht durch ihn.
    /// Gibt `None` zurück, wenn Start, Knick oder Ende (in XZ) zusammenfallen.
    pub fn from_elbow(start: Vec3, elbow: Vec3, end: Vec3) -> Option<Self> {
        let (start_dir, _) = normalize_xz(elbow - start)?;
        let (end_dir, _) = normalize_xz(elbow - end)?;
        normalize_xz(end - start)?;
        let (middle1, middle2) = middle_points(start, start_dir, end, end_dir);
        Some(Self::new(start, middle1, middle2, end))
    }

    /// Position bei Parameter `t`.
    pub fn position(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.a + 3.0 * inv2 * t * self.b + 3.0 * inv * t2 * self.c + t2 * t * self.d
    }

    /// Erste Ableitung B'(t) (nicht normiert).
    pub fn tangent(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        3.0 * inv * inv * (self.b - self.a)
            + 6.0 * inv * t * (self.c - self.b)
            + 3.0 * t * t * (self.d - self.c)
    }

    /// Geschwindigkeit in der XZ-Ebene: `sqrt(dx² + dz²)` der Ableitung.
    ///
    /// Die Höhe wird ignoriert, damit Steigungen den Abstand nicht verzerren.
    pub fn speed_xz(&self, t: f32) -> f32 {
        let tangent = self.tangent(t);
        (tangent.x * tangent.x + tangent.z * tangent.z).sqrt()
    }

    /// Grobe Schätzung des Parameters, der `distance` (XZ-Sehne) von `start` entfernt liegt.
    ///
    /// Bisektion über den Sehnenabstand innerhalb von [start, 1] bzw. [0, start]
    /// bei negativer Distanz. Reicht die Kurve nicht so weit, wird der
    /// Rand (1 bzw. 0) zurückgegeben. Dient als Startwert für den Arc-Length-Stepper.
    pub fn travel(&self, start: f32, distance: f32) -> f32 {
        if distance == 0.0 {
            return start;
        }
        let origin = self.position(start);
        let target_sq = distance * distance;
        let mut near = start;
        let mut far = if distance > 0.0 { 1.0 } else { 0.0 };

        if horizontal_distance_sq(origin, self.position(far)) <= target_sq {
            return far;
        }

        for _ in 0..TRAVEL_BISECTION_STEPS {
            let mid = 0.5 * (near + far);
            if horizontal_distance_sq(origin, self.position(mid)) < target_sq {
                near = mid;
            } else {
                far = mid;
            }
        }
        0.5 * (near + far)
    }
}

/// Berechnet die mittleren Kontrollpunkte einer tangentenstetigen Kurve.
///
/// - `start_dir`: Richtung vom Start in die Kurve hinein (XZ, normiert)
/// - `end_dir`: Richtung vom Ende in die Kurve hinein (XZ, normiert)
///
/// Gerade Konfiguration (Richtungen entgegengesetzt und auf der Sehne):
/// Handles mit 0.15 × Sehnenlänge. Schneiden sich die Tangenten, werden die
/// Schnittabstände auf [0.1·d, d] begrenzt und auf 0.276 × Summe gekappt.
/// Sonst (parallel ohne Schnitt): Handles mit 0.276 × Sehnenlänge.
pub fn middle_points(start: Vec3, start_dir: Vec3, end: Vec3, end_dir: Vec3) -> (Vec3, Vec3) {
    let Some((chord_dir, distance)) = normalize_xz(end - start) else {
        return (start, end);
    };

    let dirs_dot = start_dir.x * end_dir.x + start_dir.z * end_dir.z;
    let chord_dot = start_dir.x * chord_dir.x + start_dir.z * chord_dir.z;

    if dirs_dot < -PARALLEL_DOT && chord_dot > PARALLEL_DOT {
        let handle = distance * STRAIGHT_HANDLE_FACTOR;
        return (start + start_dir * handle, end + end_dir * handle);
    }

    if dirs_dot >= -PARALLEL_DOT {
        if let Some((u, v)) = intersect_xz(start, start_dir, end, end_dir) {
            let u = u.clamp(distance * MIN_INTERSECTION_FACTOR, distance);
            let v = v.clamp(distance * MIN_INTERSECTION_FACTOR, distance);
            let sum = u + v;
            return (
                start + start_dir * u.min(sum * CURVE_HANDLE_FACTOR),
                end + end_dir * v.min(sum * CURVE_HANDLE_FACTOR),
            );
        }
    }

    let handle = distance * CURVE_HANDLE_FACTOR;
    (start + start_dir * handle, end + end_dir * handle)
}

/// Normiert einen Vektor in der XZ-Ebene (Y = 0). Gibt Richtung und Länge zurück.
pub fn normalize_xz(v: Vec3) -> Option<(Vec3, f32)> {
    let flat = Vec3::new(v.x, 0.0, v.z);
    let length = flat.length();
    if length < f32::EPSILON || !length.is_finite() {
        return None;
    }
    Some((flat / length, length))
}

/// Horizontaler Abstand zweier Punkte (Y ignoriert).
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    horizontal_distance_sq(a, b).sqrt()
}

fn horizontal_distance_sq(a: Vec3, b: Vec3) -> f32 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    dx * dx + dz * dz
}

/// Schnitt zweier Strahlen `p + u·dir_p` und `q + v·dir_q` in der XZ-Ebene.
///
/// Gibt `(u, v)` zurück oder `None` bei parallelen Richtungen.
fn intersect_xz(p: Vec3, dir_p: Vec3, q: Vec3, dir_q: Vec3) -> Option<(f32, f32)> {
    let cross = |a: Vec3, b: Vec3| a.x * b.z - a.z * b.x;
    let det = cross(dir_p, dir_q);
    if det.abs() < 1e-6 {
        return None;
    }
    let r = q - p;
    Some((cross(r, dir_q) / det, cross(r, dir_p) / det))
}
