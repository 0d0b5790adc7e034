//! Scalar easing helpers and slice smoothing filters.

/// Hermite smoothstep of `x` between `edge0` and `edge1`.
///
/// Returns 0 below `edge0`, 1 above `edge1`, and `t²(3 − 2t)` in between.
#[inline]
pub fn smooth_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    debug_assert!(edge1 > edge0);
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear blend: `a` when `t == 0`, `b` when `t == 1`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Centered moving average of width `2 * half_window + 1`.
///
/// Near the ends the window is truncated and the average is taken over the
/// samples that exist. `output` must be as long as `input`.
pub fn windowed_average(input: &[f32], output: &mut [f32], half_window: usize) {
    debug_assert_eq!(input.len(), output.len());

    let n = input.len();
    if n == 0 {
        return;
    }

    // Running sum over [lo, hi)
    let mut lo = 0usize;
    let mut hi = 0usize;
    let mut sum = 0.0f32;

    for (i, out) in output.iter_mut().enumerate() {
        let want_lo = i.saturating_sub(half_window);
        let want_hi = (i + half_window + 1).min(n);

        while hi < want_hi {
            sum += input[hi];
            hi += 1;
        }
        while lo < want_lo {
            sum -= input[lo];
            lo += 1;
        }

        *out = sum / (hi - lo) as f32;
    }
}

/// Two consecutive passes of [`windowed_average`], in place.
///
/// Two box filters compose into a triangular kernel, which spreads a
/// single-sample impulse smoothly without the hard edges of one box.
/// `scratch` must be as long as `buffer`.
pub fn smooth_two_pass(buffer: &mut [f32], scratch: &mut [f32], half_window: usize) {
    windowed_average(buffer, scratch, half_window);
    windowed_average(scratch, buffer, half_window);
}
