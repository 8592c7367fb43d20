//! AArch64 NEON 4-lane f32 vector.
//!
//! AArch64 guarantees fused multiply-add, so this tier always rounds the
//! fused shapes once, like the AVX2+FMA tier. Comparison results come back
//! as `uint32x4_t` masks and are reinterpreted into the float domain so the
//! blend arithmetic is shared with the x86 tiers.

use std::arch::aarch64::*;

use crate::simd::traits::SimdVec;

/// NEON memory alignment requirement in bytes.
///
/// `vld1q_f32`/`vst1q_f32` accept element-aligned addresses; 16 bytes is
/// the natural boundary the dispatcher checks for the aligned variants.
pub(crate) const NEON_ALIGNMENT: usize = 16;

/// Number of f32 elements in a 128-bit NEON vector.
pub(crate) const LANE_COUNT: usize = 4;

/// NEON vector of 4 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x4(pub(crate) float32x4_t);

impl SimdVec for F32x4 {
    type Int = int32x4_t;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = NEON_ALIGNMENT;

    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        Self(vdupq_n_f32(value))
    }

    #[inline(always)]
    unsafe fn zero() -> Self {
        Self(vdupq_n_f32(0.0))
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        Self(vld1q_f32(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self(vld1q_f32(ptr))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.0)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.0)
    }

    #[inline(always)]
    unsafe fn add(self, rhs: Self) -> Self {
        Self(vaddq_f32(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn sub(self, rhs: Self) -> Self {
        Self(vsubq_f32(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        Self(vmulq_f32(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn div(self, rhs: Self) -> Self {
        Self(vdivq_f32(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn sqrt(self) -> Self {
        Self(vsqrtq_f32(self.0))
    }

    #[inline(always)]
    unsafe fn floor(self) -> Self {
        Self(vrndmq_f32(self.0))
    }

    #[inline(always)]
    unsafe fn mul_add(self, a: Self, b: Self) -> Self {
        Self(vfmaq_f32(b.0, self.0, a.0))
    }

    #[inline(always)]
    unsafe fn mul_sub(self, a: Self, b: Self) -> Self {
        Self(vnegq_f32(vfmsq_f32(b.0, self.0, a.0)))
    }

    #[inline(always)]
    unsafe fn neg_mul_add(self, a: Self, b: Self) -> Self {
        Self(vfmsq_f32(b.0, self.0, a.0))
    }

    #[inline(always)]
    unsafe fn cmp_lt(self, rhs: Self) -> Self {
        Self(vreinterpretq_f32_u32(vcltq_f32(self.0, rhs.0)))
    }

    #[inline(always)]
    unsafe fn cmp_neq(self, rhs: Self) -> Self {
        Self(vreinterpretq_f32_u32(vmvnq_u32(vceqq_f32(self.0, rhs.0))))
    }

    #[inline(always)]
    unsafe fn bitand(self, rhs: Self) -> Self {
        Self(vreinterpretq_f32_u32(vandq_u32(
            vreinterpretq_u32_f32(self.0),
            vreinterpretq_u32_f32(rhs.0),
        )))
    }

    #[inline(always)]
    unsafe fn bitxor(self, rhs: Self) -> Self {
        Self(vreinterpretq_f32_u32(veorq_u32(
            vreinterpretq_u32_f32(self.0),
            vreinterpretq_u32_f32(rhs.0),
        )))
    }

    #[inline(always)]
    unsafe fn to_int(self) -> Self::Int {
        vcvtq_s32_f32(self.0)
    }

    #[inline(always)]
    unsafe fn from_int(q: Self::Int) -> Self {
        Self(vcvtq_f32_s32(q))
    }

    #[inline(always)]
    unsafe fn int_splat(value: i32) -> Self::Int {
        vdupq_n_s32(value)
    }

    #[inline(always)]
    unsafe fn int_add(a: Self::Int, b: Self::Int) -> Self::Int {
        vaddq_s32(a, b)
    }

    #[inline(always)]
    unsafe fn int_and(a: Self::Int, b: Self::Int) -> Self::Int {
        vandq_s32(a, b)
    }
}
