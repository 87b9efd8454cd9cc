//! SSE path for the 4x4 `f32` matrix product.

use std::arch::x86_64::{_mm_add_ps, _mm_loadu_ps, _mm_mul_ps, _mm_set1_ps, _mm_storeu_ps};

/// Row-major 4x4 product: each output row is the rows of `rhs` scaled by the
/// broadcast elements of the matching `lhs` row, summed pairwise.
pub(crate) fn mul4_f32(lhs: &[[f32; 4]; 4], rhs: &[[f32; 4]; 4]) -> [[f32; 4]; 4] {
    let mut out = [[0.0_f32; 4]; 4];
    // SAFETY: this module only compiles for targets with SSE enabled, and every
    // load and store covers exactly one `[f32; 4]` row.
    unsafe {
        let b0 = _mm_loadu_ps(rhs[0].as_ptr());
        let b1 = _mm_loadu_ps(rhs[1].as_ptr());
        let b2 = _mm_loadu_ps(rhs[2].as_ptr());
        let b3 = _mm_loadu_ps(rhs[3].as_ptr());
        for (row, dst) in lhs.iter().zip(out.iter_mut()) {
            let p0 = _mm_mul_ps(_mm_set1_ps(row[0]), b0);
            let p1 = _mm_mul_ps(_mm_set1_ps(row[1]), b1);
            let p2 = _mm_mul_ps(_mm_set1_ps(row[2]), b2);
            let p3 = _mm_mul_ps(_mm_set1_ps(row[3]), b3);
            let sum = _mm_add_ps(_mm_add_ps(p0, p1), _mm_add_ps(p2, p3));
            _mm_storeu_ps(dst.as_mut_ptr(), sum);
        }
    }
    out
}
