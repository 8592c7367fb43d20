//! Runtime-dispatched SIMD sine kernels for `f32` buffers.
//!
//! vectrig computes `dst[i] = sin(src[i])` over a buffer with one call,
//! selecting at runtime among functionally-equivalent kernels: AVX2 with
//! FMA (8 lanes), AVX2 (8 lanes), SSE4.1 (4 lanes), NEON (4 lanes), and a
//! scalar reference path. Each vector tier additionally has an aligned and
//! an unaligned variant; the dispatcher picks the aligned one when both
//! buffers sit on the tier's natural boundary.
//!
//! The kernels share a single algorithm (range reduction to ±π/4, a
//! half-angle versine series, branchless quadrant fix-up; see
//! [`simd::sine`]) instantiated per lane type, so every tier agrees with
//! every other to within single-precision approximation tolerance, and the
//! trailing `len mod W` elements of any call go through the exact scalar
//! path.
//!
//! ```
//! let src: Vec<f32> = (0..1000).map(|i| i as f32 * 0.01).collect();
//! let mut dst = vec![0.0f32; src.len()];
//!
//! vectrig::sin(&mut dst, &src);
//!
//! assert!((dst[157] - (1.57f32).sin()).abs() < 1e-5);
//! ```
//!
//! # Accuracy
//!
//! The reduction carries π/4 as a two-constant split with ~36 significant
//! bits, so absolute error grows with magnitude: measured against a
//! float64 reference it stays within `≈ 5e-8·|x|`: below 2.5e-7 for
//! |x| ≤ 4, below 5e-6 for |x| ≤ 100, around 2.4e-5 at |x| = 500.
//! Arguments far outside that range should be pre-reduced by the caller.
//! NaN and infinity produce NaN on every tier. No tier validates inputs;
//! the contract is total over all representable floats.
//!
//! # Kernel selection
//!
//! The build script probes the build host and compiles every kernel tier
//! the host CPU reports; [`dispatch`] re-probes at runtime (via
//! `std::arch` feature detection) and wires the richest usable tier into a
//! once-initialized table. [`capability`] reports the selected tier.

pub mod dispatch;
pub mod scalar;
pub mod simd;

pub use dispatch::{capability, par_sin, sin, Capability, SinKernel};
