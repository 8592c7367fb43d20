//! SSE4.1 4-lane f32 vector.
//!
//! The narrow x86 tier. SSE4.1 is the floor because the reduction needs
//! `_mm_floor_ps`. There is no fused flavor at this width: CPUs with FMA
//! also have AVX2 and take the wide tier instead, so all multiply-add
//! shapes here round twice.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::traits::SimdVec;

/// SSE memory alignment requirement in bytes.
pub(crate) const SSE_ALIGNMENT: usize = 16;

/// Number of f32 elements in a 128-bit SSE vector.
pub(crate) const LANE_COUNT: usize = 4;

/// SSE vector of 4 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x4(pub(crate) __m128);

impl SimdVec for F32x4 {
    type Int = __m128i;

    const LANES: usize = LANE_COUNT;
    const ALIGNMENT: usize = SSE_ALIGNMENT;

    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        Self(_mm_set1_ps(value))
    }

    #[inline(always)]
    unsafe fn zero() -> Self {
        Self(_mm_setzero_ps())
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        Self(_mm_load_ps(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self(_mm_loadu_ps(ptr))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        _mm_store_ps(ptr, self.0)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.0)
    }

    #[inline(always)]
    unsafe fn add(self, rhs: Self) -> Self {
        Self(_mm_add_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn sub(self, rhs: Self) -> Self {
        Self(_mm_sub_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn mul(self, rhs: Self) -> Self {
        Self(_mm_mul_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn div(self, rhs: Self) -> Self {
        Self(_mm_div_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn sqrt(self) -> Self {
        Self(_mm_sqrt_ps(self.0))
    }

    #[inline(always)]
    unsafe fn floor(self) -> Self {
        Self(_mm_floor_ps(self.0))
    }

    #[inline(always)]
    unsafe fn mul_add(self, a: Self, b: Self) -> Self {
        Self(_mm_add_ps(_mm_mul_ps(self.0, a.0), b.0))
    }

    #[inline(always)]
    unsafe fn mul_sub(self, a: Self, b: Self) -> Self {
        Self(_mm_sub_ps(_mm_mul_ps(self.0, a.0), b.0))
    }

    #[inline(always)]
    unsafe fn neg_mul_add(self, a: Self, b: Self) -> Self {
        Self(_mm_sub_ps(b.0, _mm_mul_ps(self.0, a.0)))
    }

    #[inline(always)]
    unsafe fn cmp_lt(self, rhs: Self) -> Self {
        Self(_mm_cmplt_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn cmp_neq(self, rhs: Self) -> Self {
        Self(_mm_cmpneq_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn bitand(self, rhs: Self) -> Self {
        Self(_mm_and_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn bitxor(self, rhs: Self) -> Self {
        Self(_mm_xor_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn to_int(self) -> Self::Int {
        _mm_cvtps_epi32(self.0)
    }

    #[inline(always)]
    unsafe fn from_int(q: Self::Int) -> Self {
        Self(_mm_cvtepi32_ps(q))
    }

    #[inline(always)]
    unsafe fn int_splat(value: i32) -> Self::Int {
        _mm_set1_epi32(value)
    }

    #[inline(always)]
    unsafe fn int_add(a: Self::Int, b: Self::Int) -> Self::Int {
        _mm_add_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn int_and(a: Self::Int, b: Self::Int) -> Self::Int {
        _mm_and_si128(a, b)
    }
}
