//! AVX square root kernels for x86_64
//!
//! All kernels use 256-bit registers of four `f64` lanes. The scalar entry
//! points broadcast their input and read back lane 0 only; the `_lanes`
//! variants carry four independent inputs.

use super::NEWTON_ITERATIONS;
use crate::error::{BenchError, Result};
use std::arch::x86_64::*;
use tracing::debug;

/// Proof that the running CPU supports AVX
///
/// Zero-sized; the only constructor is [`Avx::detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avx {
    _private: (),
}

impl Avx {
    /// Runtime CPU feature check
    pub fn detect() -> Result<Self> {
        if is_x86_feature_detected!("avx") {
            debug!("AVX support detected");
            Ok(Self { _private: () })
        } else {
            Err(BenchError::UnsupportedCpu { feature: "avx" })
        }
    }

    /// Single-instruction vector square root, lane 0
    #[inline(always)]
    pub fn sqrt(self, value: f64) -> f64 {
        // SAFETY: `self` exists only if `detect` found AVX
        unsafe { sqrt_broadcast(value) }
    }

    /// Newton-Raphson refinement seeded by the scalar SSE2 root, lane 0
    #[inline(always)]
    pub fn sqrt_newton(self, value: f64) -> f64 {
        // SAFETY: as above
        unsafe { sqrt_newton_broadcast(value) }
    }

    /// Four independent square roots in one instruction
    #[inline(always)]
    pub fn sqrt_lanes(self, values: [f64; 4]) -> [f64; 4] {
        // SAFETY: as above
        unsafe { sqrt_packed(values) }
    }

    /// Four independent Newton-Raphson refinements
    #[inline(always)]
    pub fn sqrt_newton_lanes(self, values: [f64; 4]) -> [f64; 4] {
        // SAFETY: as above
        unsafe { sqrt_newton_packed(values) }
    }
}

#[target_feature(enable = "avx")]
unsafe fn sqrt_broadcast(value: f64) -> f64 {
    let input = _mm256_set1_pd(value);
    let result = _mm256_sqrt_pd(input);
    _mm_cvtsd_f64(_mm256_castpd256_pd128(result))
}

#[target_feature(enable = "avx")]
unsafe fn sqrt_newton_broadcast(value: f64) -> f64 {
    let x = _mm256_set1_pd(value);
    let half = _mm256_set1_pd(0.5);

    // Seed from the scalar unit, then widen
    let seed = _mm_cvtsd_f64(_mm_sqrt_sd(_mm_setzero_pd(), _mm_set_sd(value)));
    let y = newton_steps(x, _mm256_set1_pd(seed), half);

    _mm_cvtsd_f64(_mm256_castpd256_pd128(y))
}

#[target_feature(enable = "avx")]
unsafe fn sqrt_packed(values: [f64; 4]) -> [f64; 4] {
    let input = _mm256_loadu_pd(values.as_ptr());
    let mut out = [0.0f64; 4];
    _mm256_storeu_pd(out.as_mut_ptr(), _mm256_sqrt_pd(input));
    out
}

#[target_feature(enable = "avx")]
unsafe fn sqrt_newton_packed(values: [f64; 4]) -> [f64; 4] {
    let x = _mm256_loadu_pd(values.as_ptr());
    let half = _mm256_set1_pd(0.5);
    let y = newton_steps(x, _mm256_sqrt_pd(x), half);

    let mut out = [0.0f64; 4];
    _mm256_storeu_pd(out.as_mut_ptr(), y);
    out
}

/// `y = 0.5 * (y + x / y)`, a fixed number of times, no convergence check
#[target_feature(enable = "avx")]
#[inline]
unsafe fn newton_steps(x: __m256d, mut y: __m256d, half: __m256d) -> __m256d {
    for _ in 0..NEWTON_ITERATIONS {
        y = _mm256_mul_pd(half, _mm256_add_pd(y, _mm256_div_pd(x, y)));
    }
    y
}
