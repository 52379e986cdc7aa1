//! Glättung einer geklickten Punktfolge zu einer dichten Kurve.
//!
//! Pro Koordinaten-Achse wird ein eigener Interpolant über den uniformen
//! Parameter `0..n-1` gefittet und mit Schrittweite `1 / SAMPLES_PER_SEGMENT`
//! ausgewertet. Die schließende Wiederholung des Startpunkts ist dabei ein
//! ganz normaler Stützpunkt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{ClosedPointSequence, Curve};

/// Samples pro Original-Segment (Parameter-Schritt 0.1).
pub const SAMPLES_PER_SEGMENT: usize = 10;

/// Art des Interpolanten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingKind {
    /// Kubischer Interpolations-Spline mit Not-a-Knot-Randbedingung
    #[default]
    Cubic,
    /// Catmull-Rom-Kette mit gespiegelten Phantom-Punkten an den Rändern
    CatmullRom,
}

/// Glättet eine geschlossene Punktfolge. Das Ergebnis ist ebenfalls geschlossen.
pub fn smooth_closed(sequence: &ClosedPointSequence, kind: SmoothingKind) -> Curve {
    let dense = smooth_points(sequence.points(), kind);
    log::debug!(
        "Kurve geglättet ({:?}): {} Stützpunkte -> {} Kurvenpunkte",
        kind,
        sequence.len(),
        dense.len()
    );
    Curve::from_points(dense)
}

/// Glättet eine beliebige Punktfolge (offen oder geschlossen).
///
/// Bei höchstens 2 Punkten wird die Eingabe unverändert zurückgegeben.
/// Sonst enthält das Ergebnis `SAMPLES_PER_SEGMENT * (n - 1) + 1` Punkte;
/// Samples bei ganzzahligem Parameter sind exakt die Stützpunkte.
pub fn smooth_points(points: &[Vec2], kind: SmoothingKind) -> Vec<Vec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    match kind {
        SmoothingKind::Cubic => cubic_spline_chain(points, SAMPLES_PER_SEGMENT),
        SmoothingKind::CatmullRom => catmull_rom_chain(points, SAMPLES_PER_SEGMENT),
    }
}

// ── Kubischer Spline (Not-a-Knot) ────────────────────────────────

/// Koeffizienten eines kubischen Segments `a + b·u + c·u² + d·u³`, u ∈ [0, 1].
#[derive(Debug, Clone, Copy)]
struct CubicSegment {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl CubicSegment {
    fn eval(&self, u: f64) -> f64 {
        ((self.d * u + self.c) * u + self.b) * u + self.a
    }
}

/// Zweite Ableitungen des Not-a-Knot-Splines an den Knoten (Knotenabstand 1).
///
/// Not-a-Knot: dritte Ableitung stetig an Knoten 1 und n-2, also
/// `M0 - 2·M1 + M2 = 0` und symmetrisch am Ende. Eingesetzt in die erste und
/// letzte Innengleichung bleibt ein tridiagonales System für `M1..M(n-2)`.
fn not_a_knot_second_derivatives(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 3 {
        // Ein einzelnes Polynom durch drei Punkte: Parabel mit konstanter Krümmung
        let curvature = values[0] - 2.0 * values[1] + values[2];
        return vec![curvature; 3];
    }

    let unknowns = n - 2;
    let mut lower = vec![0.0f64; unknowns];
    let mut diag = vec![0.0f64; unknowns];
    let mut upper = vec![0.0f64; unknowns];
    let mut rhs = vec![0.0f64; unknowns];

    for k in 0..unknowns {
        let i = k + 1;
        rhs[k] = 6.0 * (values[i + 1] - 2.0 * values[i] + values[i - 1]);
        if k == 0 || k == unknowns - 1 {
            diag[k] = 6.0;
        } else {
            lower[k] = 1.0;
            diag[k] = 4.0;
            upper[k] = 1.0;
        }
    }

    let inner = solve_tridiagonal(&lower, &diag, &upper, &rhs);

    let mut m = vec![0.0f64; n];
    m[1..n - 1].copy_from_slice(&inner);
    m[0] = 2.0 * m[1] - m[2];
    m[n - 1] = 2.0 * m[n - 2] - m[n - 3];
    m
}

/// Thomas-Algorithmus. Das System ist diagonal-dominant, daher ohne Pivotisierung stabil.
fn solve_tridiagonal(lower: &[f64], diag: &[f64], upper: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    let mut c_prime = vec![0.0f64; n];
    let mut d_prime = vec![0.0f64; n];

    c_prime[0] = upper[0] / diag[0];
    d_prime[0] = rhs[0] / diag[0];
    for i in 1..n {
        let denom = diag[i] - lower[i] * c_prime[i - 1];
        c_prime[i] = upper[i] / denom;
        d_prime[i] = (rhs[i] - lower[i] * d_prime[i - 1]) / denom;
    }

    let mut x = vec![0.0f64; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }
    x
}

/// Segment-Koeffizienten eines Achsen-Splines.
fn cubic_segments(values: &[f64]) -> Vec<CubicSegment> {
    let m = not_a_knot_second_derivatives(values);
    values
        .windows(2)
        .enumerate()
        .map(|(i, w)| CubicSegment {
            a: w[0],
            b: (w[1] - w[0]) - (2.0 * m[i] + m[i + 1]) / 6.0,
            c: m[i] / 2.0,
            d: (m[i + 1] - m[i]) / 6.0,
        })
        .collect()
}

/// Dichte Punktliste entlang je eines kubischen Splines für X und Y.
fn cubic_spline_chain(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let xs: Vec<f64> = points.iter().map(|p| p.x as f64).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y as f64).collect();
    let seg_x = cubic_segments(&xs);
    let seg_y = cubic_segments(&ys);

    let mut result = Vec::with_capacity(seg_x.len() * samples_per_segment + 1);
    for (seg, (sx, sy)) in seg_x.iter().zip(&seg_y).enumerate() {
        // Stützpunkt exakt übernehmen, danach Zwischen-Samples
        result.push(points[seg]);
        for i in 1..samples_per_segment {
            let u = i as f64 / samples_per_segment as f64;
            result.push(Vec2::new(sx.eval(u) as f32, sy.eval(u) as f32));
        }
    }
    // Endpunkt immer exakt übernehmen
    result.push(points[points.len() - 1]);
    result
}

// ── Catmull-Rom ──────────────────────────────────────────────────

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Dichte Punktliste entlang einer Catmull-Rom-Kette durch `points` (mind. 3 Punkte).
///
/// Für Rand-Segmente werden Phantom-Punkte gespiegelt, damit die Kurve
/// natürlich durch den ersten und letzten Punkt läuft.
fn catmull_rom_chain(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let n = points.len();
    let mut result = Vec::with_capacity((n - 1) * samples_per_segment + 1);

    for seg in 0..(n - 1) {
        let p0 = if seg == 0 {
            2.0 * points[0] - points[1]
        } else {
            points[seg - 1]
        };
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p3 = if seg + 2 < n {
            points[seg + 2]
        } else {
            2.0 * points[n - 1] - points[n - 2]
        };

        result.push(p1);
        for i in 1..samples_per_segment {
            let t = i as f32 / samples_per_segment as f32;
            result.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }

    result.push(points[n - 1]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> ClosedPointSequence {
        ClosedPointSequence::close(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_two_points_returned_verbatim() {
        let points = vec![Vec2::ZERO, Vec2::new(3.0, 4.0)];
        assert_eq!(smooth_points(&points, SmoothingKind::Cubic), points);
        assert_eq!(smooth_points(&points[..1], SmoothingKind::CatmullRom), &points[..1]);
        assert!(smooth_points(&[], SmoothingKind::Cubic).is_empty());
    }

    #[test]
    fn test_sample_count_ten_per_segment() {
        let curve = smooth_closed(&square(), SmoothingKind::Cubic);
        // 5 Stützpunkte -> 4 Segmente à 10 Samples + Endpunkt
        assert_eq!(curve.len(), 41);

        let curve = smooth_closed(&square(), SmoothingKind::CatmullRom);
        assert_eq!(curve.len(), 41);
    }

    #[test]
    fn test_smoothing_preserves_closure() {
        for kind in [SmoothingKind::Cubic, SmoothingKind::CatmullRom] {
            let curve = smooth_closed(&square(), kind);
            assert!(curve.is_closed(), "{kind:?} muss geschlossen bleiben");
        }
    }

    #[test]
    fn test_curve_passes_through_vertices() {
        let seq = square();
        let curve = smooth_closed(&seq, SmoothingKind::Cubic);
        for (i, vertex) in seq.points().iter().enumerate() {
            assert_eq!(curve.points()[i * SAMPLES_PER_SEGMENT], *vertex);
        }
    }

    #[test]
    fn test_cubic_reproduces_cubic_polynomial() {
        // Not-a-Knot reproduziert kubische Polynome exakt
        let f = |t: f64| 0.5 * t * t * t - 2.0 * t * t + t + 3.0;
        let values: Vec<f64> = (0..6).map(|t| f(t as f64)).collect();
        let segments = cubic_segments(&values);
        for (i, seg) in segments.iter().enumerate() {
            for step in 0..=10 {
                let u = step as f64 / 10.0;
                assert_relative_eq!(seg.eval(u), f(i as f64 + u), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_cubic_three_points_is_parabola() {
        let values = [0.0, 1.0, 4.0];
        let segments = cubic_segments(&values);
        // t² durch (0,0), (1,1), (2,4)
        assert_relative_eq!(segments[0].eval(0.5), 0.25, epsilon = 1e-12);
        assert_relative_eq!(segments[1].eval(0.5), 2.25, epsilon = 1e-12);
    }

    #[test]
    fn test_square_spline_values() {
        let curve = smooth_closed(&square(), SmoothingKind::Cubic);
        // Erstes Zwischen-Sample: x(0.1) = -1.1625, y(0.1) = 1.3075
        let p = curve.points()[1];
        assert_relative_eq!(p.x, -1.1625, epsilon = 1e-4);
        assert_relative_eq!(p.y, 1.3075, epsilon = 1e-4);
        // Maximale Ausbuchtung bei t = 0.5: x = -2.8125
        assert_relative_eq!(curve.points()[5].x, -2.8125, epsilon = 1e-4);
    }

    #[test]
    fn test_catmull_rom_point_endpoints() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(3.0, 5.0);
        let p2 = Vec2::new(7.0, 5.0);
        let p3 = Vec2::new(10.0, 0.0);
        assert!((catmull_rom_point(p0, p1, p2, p3, 0.0) - p1).length() < 1e-5);
        assert!((catmull_rom_point(p0, p1, p2, p3, 1.0) - p2).length() < 1e-5);
    }
}
