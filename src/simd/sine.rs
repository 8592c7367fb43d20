//! The sine reduction, written once and instantiated per lane type.
//!
//! Every vector kernel in this crate is this module's [`sin_lanes`]
//! specialized for a concrete [`SimdVec`] implementation, plus [`sin_slice`]
//! as the block driver. The FMA/non-FMA and 4/8-lane variants therefore
//! cannot drift apart: they share one algorithm and differ only in which
//! intrinsics back the lane primitives.
//!
//! # Algorithm
//!
//! For each lane, with `x` the input angle:
//!
//! 1. **Sign fold.** `s = x − ((2x) & (x < 0))` replaces `x` by `|x|`
//!    without a branch; the sign re-enters in step 5 via
//!    `sin(−x) = −sin(x)`.
//! 2. **Range reduction.** `q = ⌊s·4/π⌋` counts π/4 steps;
//!    `r = q + (q & 1)` rounds the count up to even, re-centering the
//!    reduction on the nearest multiple of π/2. `r·π/4` is subtracted in
//!    two steps with a hi/lo split of π/4, which keeps reduction bits that
//!    a single-constant subtraction would lose for large `|s|`.
//! 3. **Half-angle polynomial.** The reduced angle is divided by 8 and
//!    squared, a degree-5 series evaluates the scaled versine
//!    `t ≈ 1 − cos(s/8)` in Horner form, and three applications of
//!    `t ← t·(4 − t)` (the doubled versine identity) undo the ÷8.
//! 4. **Recovery.** `sin_r = √((2 − t)·t)` and `cos_r = 1 − t` via the
//!    Pythagorean identity; `t ∈ [0, 2]` over the reduction interval, so
//!    the root argument is non-negative.
//! 5. **Quadrant fix-up.** Mask blends select `cos_r` when
//!    `(q + 1) & 2 ≠ 0` and negate when `(q & 4 ≠ 0) ⊕ (x < 0)`.
//!
//! # Accuracy
//!
//! The hi/lo split of π/4 carries roughly 36 bits, so the absolute error
//! grows with the magnitude of the reduced count: measured against a
//! float64 reference it stays within `≈ 5e-8·|x|`: below 2.5e-7 for
//! |x| ≤ 4, below 5e-6 for |x| ≤ 100, around 2.4e-5 at |x| = 500. Callers
//! needing accuracy at large magnitudes must pre-reduce their arguments.
//!
//! # A note on the negation predicate
//!
//! The reference formulation combines the two negation conditions with a
//! second lane compare-not-equal on the mask vectors themselves. An
//! all-ones mask has a NaN bit pattern, and an unordered not-equal compare
//! of two NaNs is *true*, so that formulation computes OR rather than the
//! intended XOR and flips the sign for `x ∈ (−2π, −π) mod 2π`. The blend
//! here uses a bitwise xor of the masks, which preserves odd symmetry for
//! all inputs.

use crate::simd::traits::SimdVec;

// Reduction constants. π/4 is split into a coarse part exactly
// representable in 8 mantissa bits and the remainder, so the two-step
// subtraction retains bits beyond single precision.
const FOUR_OVER_PI: f32 = 1.273_239_545;
const PI_OVER_4_HI: f32 = 0.785_156_25;
const PI_OVER_4_LO: f32 = 0.241_876e-3;

// Series for the scaled versine 1 − cos, in powers of the squared
// eighth-angle. Five terms reach single-precision tolerance on the
// reduction interval.
const CP1: f32 = 1.0;
const CP2: f32 = 0.833_333_33e-1;
const CP3: f32 = 0.277_777_8e-2;
const CP4: f32 = 0.496_03e-4;
const CP5: f32 = 0.551e-6;

/// Computes the sine of every lane of `x`.
///
/// # Safety
///
/// The caller must hold the target feature required by `V` (the dispatcher
/// guarantees this by construction; direct callers must check the CPU).
#[inline(always)]
pub unsafe fn sin_lanes<V: SimdVec>(x: V) -> V {
    let zeros = V::zero();
    let ones = V::splat(1.0);
    let twos = V::splat(2.0);
    let fours = V::splat(4.0);
    let ones_i = V::int_splat(1);
    let twos_i = V::int_splat(2);
    let fours_i = V::int_splat(4);

    let negative = x.cmp_lt(zeros);

    // Fold negative lanes onto |x|; the sign re-enters in the fix-up.
    let s = x.sub(x.mul(twos).bitand(negative));

    // Count π/4 steps, then round the count up to even.
    let q = s.mul(V::splat(FOUR_OVER_PI)).floor().to_int();
    let r = V::int_add(q, V::int_and(q, ones_i));
    let rf = V::from_int(r);

    // Two-step subtraction with the split π/4.
    let s = rf.neg_mul_add(V::splat(PI_OVER_4_HI), s);
    let mut s = rf.neg_mul_add(V::splat(PI_OVER_4_LO), s);

    // Eighth-angle, squared; three doublings below restore the range.
    s = s.div(V::splat(8.0));
    s = s.mul(s);

    // Versine series, Horner form.
    let mut p = s.mul_sub(V::splat(CP5), V::splat(CP4));
    p = p.mul_add(s, V::splat(CP3));
    p = p.mul_sub(s, V::splat(CP2));
    p = p.mul_add(s, V::splat(CP1));
    s = p.mul(s);

    // t ← t·(4 − t), applied three times, then halved.
    for _ in 0..3 {
        s = s.mul(fours.sub(s));
    }
    s = s.div(twos);

    let sine = twos.sub(s).mul(s).sqrt();
    let cosine = ones.sub(s);

    // Octants where the reduced angle sits nearer a cosine axis swap in
    // the cosine branch; quadrants 4..8 of the folded angle, xor a
    // negative input, negate.
    let swap = V::from_int(V::int_and(V::int_add(q, ones_i), twos_i)).cmp_neq(zeros);
    let negate = V::from_int(V::int_and(q, fours_i))
        .cmp_neq(zeros)
        .bitxor(negative);

    let sine = sine.add(cosine.sub(sine).bitand(swap));
    sine.sub(sine.mul(twos).bitand(negate))
}

/// Runs [`sin_lanes`] over `⌊len/W⌋` full lane groups of `src` into `dst`,
/// then finishes the trailing `len mod W` elements with the platform
/// scalar sine, the same path as [`crate::scalar::sin_f32`], so remainder
/// elements match the reference kernel exactly.
///
/// # Safety
///
/// The caller must hold the target feature required by `V`, the slices
/// must have equal lengths, and when `ALIGNED` is true both slices must be
/// [`SimdVec::ALIGNMENT`]-aligned.
#[inline(always)]
pub unsafe fn sin_slice<V: SimdVec, const ALIGNED: bool>(dst: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len(), "buffer lengths differ");

    let size = src.len();
    let step = V::LANES;
    let full_lanes = size - (size % step);

    for i in (0..full_lanes).step_by(step) {
        let x = if ALIGNED {
            V::load_aligned(src.as_ptr().add(i))
        } else {
            V::load_unaligned(src.as_ptr().add(i))
        };

        let y = sin_lanes(x);

        if ALIGNED {
            y.store_aligned(dst.as_mut_ptr().add(i));
        } else {
            y.store_unaligned(dst.as_mut_ptr().add(i));
        }
    }

    for i in full_lanes..size {
        *dst.get_unchecked_mut(i) = src.get_unchecked(i).sin();
    }
}
