//! Scalar keyframe curves.
//!
//! Keys are expected in ascending time order (not verified). Sampling clamps
//! outside the key range, uses cubic Hermite interpolation between two keys
//! when the left key has an out-tangent and the right key an in-tangent, and
//! falls back to linear otherwise. An infinite tangent on either side holds
//! the left value until the next key (stepped key).

use serde::{Deserialize, Serialize};

/// One curve sample. Tangents are slopes in value units per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    #[serde(rename = "t")]
    pub time: f32,
    #[serde(rename = "v")]
    pub value: f32,
    #[serde(rename = "i", default, skip_serializing_if = "Option::is_none")]
    pub in_tangent: Option<f32>,
    #[serde(rename = "o", default, skip_serializing_if = "Option::is_none")]
    pub out_tangent: Option<f32>,
}

impl Keyframe {
    #[must_use]
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: None,
            out_tangent: None,
        }
    }

    #[must_use]
    pub fn with_tangents(mut self, in_tangent: f32, out_tangent: f32) -> Self {
        self.in_tangent = Some(in_tangent);
        self.out_tangent = Some(out_tangent);
        self
    }
}

/// Samples the curve defined by `keyframes` at `local_time`.
///
/// Returns `0.0` for an empty curve and the first key's value for a NaN
/// time. Never panics.
#[must_use]
pub fn evaluate(local_time: f32, keyframes: &[Keyframe]) -> f32 {
    let (Some(first), Some(last)) = (keyframes.first(), keyframes.last()) else {
        return 0.0;
    };

    if local_time.is_nan() || local_time <= first.time {
        return first.value;
    }
    if local_time >= last.time {
        return last.value;
    }

    // First key strictly after `local_time`; in 1..len because of the clamps above.
    let next_idx = keyframes.partition_point(|k| k.time <= local_time);
    let k0 = &keyframes[next_idx - 1];
    let k1 = &keyframes[next_idx];

    let dt = k1.time - k0.time;
    if dt <= 1e-6 {
        return k1.value;
    }
    let t = ((local_time - k0.time) / dt).clamp(0.0, 1.0);

    match (k0.out_tangent, k1.in_tangent) {
        (Some(out0), Some(in1)) if out0.is_infinite() || in1.is_infinite() => k0.value,
        (Some(out0), Some(in1)) => hermite(k0.value, out0, in1, k1.value, t, dt),
        _ => k0.value + (k1.value - k0.value) * t,
    }
}

fn hermite(v0: f32, out_tangent0: f32, in_tangent1: f32, v1: f32, t: f32, dt: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;

    let s2 = -2.0 * t3 + 3.0 * t2;
    let s3 = t3 - t2;
    let s0 = 1.0 - s2;
    let s1 = s3 - t2 + t;

    let m0 = out_tangent0 * dt;
    let m1 = in_tangent1 * dt;

    s0 * v0 + s1 * m0 + s2 * v1 + s3 * m1
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn empty_curve_is_zero() {
        assert_eq!(evaluate(1.0, &[]), 0.0);
    }

    #[test]
    fn nan_time_samples_first_key() {
        let keys = [Keyframe::new(0.0, 3.0), Keyframe::new(2.0, 10.0)];
        assert_eq!(evaluate(f32::NAN, &keys), 3.0);
    }

    #[test]
    fn single_key_is_constant() {
        let keys = [Keyframe::new(1.0, 7.0)];
        assert_eq!(evaluate(0.0, &keys), 7.0);
        assert_eq!(evaluate(5.0, &keys), 7.0);
    }

    #[test]
    fn linear_midpoint_and_clamping() {
        let keys = [Keyframe::new(0.0, 0.0), Keyframe::new(2.0, 10.0)];
        assert!(approx(evaluate(1.0, &keys), 5.0));
        assert!(approx(evaluate(-1.0, &keys), 0.0));
        assert!(approx(evaluate(3.0, &keys), 10.0));
    }

    #[test]
    fn multi_segment_selects_correct_segment() {
        let keys = [
            Keyframe::new(0.0, 0.0),
            Keyframe::new(1.0, 10.0),
            Keyframe::new(2.0, 0.0),
        ];
        assert!(approx(evaluate(1.0, &keys), 10.0));
        assert!(approx(evaluate(1.5, &keys), 5.0));
    }

    #[test]
    fn flat_tangents_ease_in_and_out() {
        let keys = [
            Keyframe::new(0.0, 0.0).with_tangents(0.0, 0.0),
            Keyframe::new(1.0, 1.0).with_tangents(0.0, 0.0),
        ];
        // Smoothstep: symmetric around the midpoint, slower than linear near the ends.
        assert!(approx(evaluate(0.5, &keys), 0.5));
        assert!(evaluate(0.25, &keys) < 0.25);
        assert!(evaluate(0.75, &keys) > 0.75);
    }

    #[test]
    fn linear_tangents_match_linear_interpolation() {
        let keys = [
            Keyframe::new(0.0, 0.0).with_tangents(10.0, 10.0),
            Keyframe::new(1.0, 10.0).with_tangents(10.0, 10.0),
        ];
        assert!(approx(evaluate(0.3, &keys), 3.0));
    }

    #[test]
    fn infinite_tangent_steps() {
        let keys = [
            Keyframe::new(0.0, 1.0).with_tangents(0.0, f32::INFINITY),
            Keyframe::new(1.0, 5.0).with_tangents(0.0, 0.0),
        ];
        assert_eq!(evaluate(0.99, &keys), 1.0);
        assert_eq!(evaluate(1.0, &keys), 5.0);
    }
}
