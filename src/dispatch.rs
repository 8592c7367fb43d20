//! Runtime kernel selection.
//!
//! Every kernel tier computes the same function with the same buffer
//! contract, so selection is a data problem: a table, keyed by the
//! capability the running CPU reports, populated once on first use. The
//! table holds the aligned and unaligned entry points of the richest
//! available tier plus its alignment requirement; each call then only has
//! to test the two buffer addresses to pick between them.
//!
//! Capability probing is delegated to `std::arch`'s feature-detection
//! macros. A tier is wired in only when it was both compiled (its build-
//! time cfg flag) and reported by the executing CPU, so the `unsafe`
//! kernel calls below are sound by construction.

use std::sync::OnceLock;

use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::{ParallelSlice, ParallelSliceMut};

use crate::scalar;

/// Common shape of every sine kernel entry point.
///
/// # Safety
///
/// Callers must uphold the specific entry point's CPU and alignment
/// preconditions; both slices must have equal lengths.
pub type SinKernel = unsafe fn(&mut [f32], &[f32]);

/// Kernel tiers, richest first. [`Capability::detect`] returns the best
/// tier that is both compiled into this build and supported by the
/// executing CPU.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    /// AVX2 with fused multiply-add, 8 lanes.
    Avx2Fma,
    /// AVX2 without FMA, 8 lanes.
    Avx2,
    /// SSE4.1, 4 lanes.
    Sse41,
    /// AArch64 NEON, 4 lanes.
    Neon,
    /// Per-element `f32::sin`.
    Scalar,
}

impl Capability {
    /// Probes the executing CPU for the richest usable tier.
    pub fn detect() -> Self {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            #[cfg(all(avx2, fma))]
            if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
                return Capability::Avx2Fma;
            }

            #[cfg(avx2)]
            if is_x86_feature_detected!("avx2") {
                return Capability::Avx2;
            }

            #[cfg(sse)]
            if is_x86_feature_detected!("sse4.1") {
                return Capability::Sse41;
            }
        }

        #[cfg(all(target_arch = "aarch64", neon))]
        if std::arch::is_aarch64_feature_detected!("neon") {
            return Capability::Neon;
        }

        Capability::Scalar
    }
}

struct KernelTable {
    capability: Capability,
    aligned: SinKernel,
    unaligned: SinKernel,
    /// Alignment, in bytes, both buffers must satisfy for the aligned
    /// entry to be eligible.
    alignment: usize,
}

/// Adapter giving the scalar kernel the entry-point shape.
unsafe fn scalar_kernel(dst: &mut [f32], src: &[f32]) {
    scalar::sin_f32(dst, src)
}

fn table_for(capability: Capability) -> KernelTable {
    match capability {
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx2, fma))]
        Capability::Avx2Fma => KernelTable {
            capability,
            aligned: crate::simd::avx2::sin::sin_f32_fma_aligned,
            unaligned: crate::simd::avx2::sin::sin_f32_fma_unaligned,
            alignment: 32,
        },
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx2))]
        Capability::Avx2 => KernelTable {
            capability,
            aligned: crate::simd::avx2::sin::sin_f32_aligned,
            unaligned: crate::simd::avx2::sin::sin_f32_unaligned,
            alignment: 32,
        },
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), sse))]
        Capability::Sse41 => KernelTable {
            capability,
            aligned: crate::simd::sse::sin::sin_f32_aligned,
            unaligned: crate::simd::sse::sin::sin_f32_unaligned,
            alignment: 16,
        },
        #[cfg(all(target_arch = "aarch64", neon))]
        Capability::Neon => KernelTable {
            capability,
            aligned: crate::simd::neon::sin::sin_f32_aligned,
            unaligned: crate::simd::neon::sin::sin_f32_unaligned,
            alignment: 16,
        },
        _ => KernelTable {
            capability: Capability::Scalar,
            aligned: scalar_kernel,
            unaligned: scalar_kernel,
            alignment: std::mem::align_of::<f32>(),
        },
    }
}

fn kernel_table() -> &'static KernelTable {
    static TABLE: OnceLock<KernelTable> = OnceLock::new();

    TABLE.get_or_init(|| {
        let capability = Capability::detect();
        log::debug!("sine dispatch: selected {capability:?} kernels");
        table_for(capability)
    })
}

/// The tier the dispatcher has selected for this process.
pub fn capability() -> Capability {
    kernel_table().capability
}

#[inline(always)]
fn is_aligned(ptr: *const f32, alignment: usize) -> bool {
    ptr as usize % alignment == 0
}

/// Computes `dst[i] = sin(src[i])` for every index, using the richest
/// kernel the CPU supports. The aligned kernel variant is used when both
/// buffers sit on the selected tier's natural boundary, the unaligned
/// variant otherwise; results are identical either way.
///
/// Accuracy: within `≈ 5e-8·|x|` absolute of the true sine; see the
/// crate-level documentation for the measured envelope. NaN and infinity
/// produce NaN on every tier.
///
/// # Panics
///
/// Panics if `dst` and `src` have different lengths. Zero-length buffers
/// are a no-op.
///
/// # Examples
///
/// ```
/// use std::f32::consts::FRAC_PI_2;
///
/// let src = [0.0f32, FRAC_PI_2, -FRAC_PI_2];
/// let mut dst = [0.0f32; 3];
/// vectrig::sin(&mut dst, &src);
///
/// assert!(dst[0].abs() < 1e-6);
/// assert!((dst[1] - 1.0).abs() < 1e-6);
/// assert!((dst[2] + 1.0).abs() < 1e-6);
/// ```
pub fn sin(dst: &mut [f32], src: &[f32]) {
    assert_eq!(dst.len(), src.len(), "input and output lengths differ");

    let table = kernel_table();
    let kernel = if is_aligned(src.as_ptr(), table.alignment)
        && is_aligned(dst.as_ptr(), table.alignment)
    {
        table.aligned
    } else {
        table.unaligned
    };

    // Sound: the table only holds kernels for capabilities the executing
    // CPU reported, alignment was checked above, and lengths are equal.
    unsafe { kernel(dst, src) }
}

/// Block size for [`par_sin`], in elements. A multiple of every lane
/// width and of the widest alignment requirement, so blocks of an aligned
/// buffer stay aligned.
const PAR_BLOCK: usize = 8_192;

/// [`sin`] over disjoint blocks on the rayon thread pool.
///
/// Worth it for buffers of hundreds of thousands of elements and up; small
/// buffers fall through to the sequential path.
///
/// # Panics
///
/// Panics if `dst` and `src` have different lengths.
pub fn par_sin(dst: &mut [f32], src: &[f32]) {
    assert_eq!(dst.len(), src.len(), "input and output lengths differ");

    if dst.len() <= PAR_BLOCK {
        return sin(dst, src);
    }

    dst.par_chunks_mut(PAR_BLOCK)
        .zip(src.par_chunks(PAR_BLOCK))
        .for_each(|(d, s)| sin(d, s));
}
