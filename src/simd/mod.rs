//! SIMD kernel tiers and the shared sine algorithm.
//!
//! Architecture modules are gated twice: on `target_arch`, and on the cfg
//! flag the build script emits when the build host's CPU reports the
//! feature. A module that is compiled may still be skipped at runtime if
//! the executing CPU disagrees; the dispatcher re-checks before wiring a
//! tier into its table.

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx2))]
pub mod avx2;

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), sse))]
pub mod sse;

#[cfg(all(target_arch = "aarch64", neon))]
pub mod neon;

pub mod sine;
pub mod traits;
