//! NEON kernel tier: 4 f32 lanes per operation, AArch64 only.

pub mod f32x4;
pub mod sin;
