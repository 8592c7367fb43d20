//! Scalar reference kernel.

/// Computes `dst[i] = src[i].sin()` for every index.
///
/// This is the ground truth the vector kernels are tested against, the
/// fallback when no vector capability is compiled in or detected, and the
/// exact code path every vector kernel takes for its trailing
/// `len mod LANES` elements. NaN and infinity follow the platform sine:
/// both map to NaN.
///
/// # Panics
///
/// Panics if `dst` and `src` have different lengths. Zero-length buffers
/// are a no-op.
pub fn sin_f32(dst: &mut [f32], src: &[f32]) {
    assert_eq!(dst.len(), src.len(), "input and output lengths differ");

    for (out, x) in dst.iter_mut().zip(src) {
        *out = x.sin();
    }
}
