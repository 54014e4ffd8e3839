//! Arc-Length-Stepper: findet den Kurvenparameter in fester Bogenlänge.
//!
//! Bogenlänge wird in der XZ-Ebene per Gauß-Legendre (4 Stützstellen)
//! integriert, der Parameter per Newton-Iteration nachgeführt.

use crate::shared::Bezier3;

/// Maximale Newton-Iterationen pro Schritt.
pub const MAX_ITERATIONS: usize = 12;
/// Akzeptierte Abweichung der Bogenlänge.
pub const TOLERANCE: f32 = 1e-3;

/// Gauß-Legendre n=4: (Stützstelle, Gewicht)
#[allow(clippy::excessive_precision)]
const GAUSS_LEGENDRE_4: [(f32, f32); 4] = [
    (-0.861_136_311_594_052_6, 0.347_854_845_137_453_8),
    (-0.339_981_043_584_856_3, 0.652_145_154_862_546_1),
    (0.339_981_043_584_856_3, 0.652_145_154_862_546_1),
    (0.861_136_311_594_052_6, 0.347_854_845_137_453_8),
];

/// Bogenlänge (XZ) zwischen `t1` und `t2`; negativ wenn `t2 < t1`.
pub fn arc_length_xz(curve: &Bezier3, t1: f32, t2: f32) -> f32 {
    let half = 0.5 * (t2 - t1);
    let mid = 0.5 * (t1 + t2);
    half * GAUSS_LEGENDRE_4
        .iter()
        .map(|&(x, w)| w * curve.speed_xz(mid + half * x))
        .sum::<f32>()
}

/// Parameter, der `distance` Bogenlänge (XZ) von `t0` entfernt liegt.
///
/// Negative Distanz schreitet rückwärts. Das Ergebnis kann außerhalb von
/// [0, 1] liegen, wenn die Kurve nicht so weit reicht; der Aufrufer entscheidet.
/// Bei verschwindender Geschwindigkeit endet die Iteration mit dem letzten Wert.
pub fn step(curve: &Bezier3, t0: f32, distance: f32) -> f32 {
    let mut t1 = curve.travel(t0, distance);
    let mut iterations = 0;
    while iterations < MAX_ITERATIONS {
        let residual = distance - arc_length_xz(curve, t0, t1);
        if residual * residual < TOLERANCE * TOLERANCE {
            break;
        }
        let speed = curve.speed_xz(t1);
        if speed < f32::EPSILON {
            break;
        }
        t1 += residual / speed;
        iterations += 1;
    }
    log::trace!(
        "Arc-Length-Schritt {:.4} + {:.3}m -> {:.4} ({} Iterationen)",
        t0,
        distance,
        t1,
        iterations
    );
    t1
}
