//! Precision and contract tests for the dispatched sine entry point.
//!
//! Everything here runs against whatever kernel tier the executing CPU
//! selects, scalar included, so the suite is meaningful on any machine.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

fn scalar_reference(src: &[f32]) -> Vec<f32> {
    let mut out = vec![0.0f32; src.len()];
    vectrig::scalar::sin_f32(&mut out, src);
    out
}

fn dispatched(src: &[f32]) -> Vec<f32> {
    let mut out = vec![0.0f32; src.len()];
    vectrig::sin(&mut out, src);
    out
}

/// Curated ranges around every quadrant boundary, compared to the scalar
/// reference kernel.
#[test]
fn precision_against_scalar() {
    let test_cases: Vec<Vec<f32>> = vec![
        // Small angles near zero
        vec![0.0f32, 0.1, 0.2, 0.3, -0.1, -0.2, -0.3, 0.01],
        // First quadrant
        vec![0.5f32, 0.7, 1.0, 1.2, 1.4, 1.5, 1.55, 1.57],
        // Around π/2 and π
        vec![1.6f32, 2.0, 2.5, 3.0, 3.1, PI, 3.2, 3.5],
        // Around 3π/2 and 2π
        vec![4.5f32, 4.7, 4.71, 4.8, 6.0, 6.2, TAU, 6.3],
        // Negative angles across all quadrants
        vec![-0.5f32, -1.57, -PI, -3.5, -4.71, -5.0, -6.2, -TAU],
        // Larger magnitudes
        vec![10.0f32, 15.0, 20.0, 25.0, -10.0, -15.0, -20.0, -25.0],
    ];

    for (i, case) in test_cases.iter().enumerate() {
        let expected = scalar_reference(case);
        let got = dispatched(case);

        for (j, (&want, &have)) in expected.iter().zip(got.iter()).enumerate() {
            let x = case[j];
            let err = (want - have).abs();
            println!("case {i} input {x:.6}: scalar {want:.8}, simd {have:.8}, err {err:.2e}");
            assert!(
                err < 1e-5,
                "case {i}: sin({x}) = {have}, scalar gives {want}, err {err:.2e}"
            );
        }
    }
}

/// Seeded random sweep over several periods, with an error summary.
#[test]
fn precision_random_inputs() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(12345);
    let test_size = 10_000;

    let inputs: Vec<f32> = (0..test_size)
        .map(|_| rng.random_range(-4.0 * PI..=4.0 * PI))
        .collect();

    let expected = scalar_reference(&inputs);
    let got = dispatched(&inputs);

    let mut max_abs_error = 0.0f32;
    for (i, (&want, &have)) in expected.iter().zip(got.iter()).enumerate() {
        let err = (want - have).abs();
        max_abs_error = max_abs_error.max(err);
        assert!(
            err < 1e-5,
            "index {i}: input {}, scalar {want}, simd {have}, err {err:.2e}",
            inputs[i]
        );
    }

    println!("random sweep over ±4π: max abs error {max_abs_error:.2e}");
    assert!(max_abs_error < 1e-5);
}

/// Wider magnitudes: the reduction error grows roughly as 5e-8·|x|.
#[test]
fn precision_degrades_gracefully_with_magnitude() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(99);

    // (magnitude bound, tolerated absolute error)
    let envelopes = [(100.0f32, 1e-5f32), (500.0, 5e-5), (2000.0, 2e-4)];

    for &(bound, tolerance) in &envelopes {
        let inputs: Vec<f32> = (0..4_000).map(|_| rng.random_range(-bound..=bound)).collect();
        let expected = scalar_reference(&inputs);
        let got = dispatched(&inputs);

        let mut max_err = 0.0f32;
        for (i, (&want, &have)) in expected.iter().zip(got.iter()).enumerate() {
            let err = (want - have).abs();
            max_err = max_err.max(err);
            assert!(
                err < tolerance,
                "|x| ≤ {bound}: input {}, err {err:.2e} exceeds {tolerance:.0e}",
                inputs[i]
            );
        }
        println!("|x| ≤ {bound}: max abs error {max_err:.2e} (tolerance {tolerance:.0e})");
    }
}

/// The boundary vector exercises every quadrant fix-up branch.
#[test]
fn boundary_vector() {
    let src = [
        0.0f32,
        PI / 6.0,
        PI / 4.0,
        PI / 3.0,
        FRAC_PI_2,
        PI,
        3.0 * FRAC_PI_2,
        TAU,
    ];
    let expected = [
        0.0f32,
        0.5,
        std::f32::consts::FRAC_1_SQRT_2,
        0.866_025_4,
        1.0,
        0.0,
        -1.0,
        0.0,
    ];

    let got = dispatched(&src);

    for (i, (&want, &have)) in expected.iter().zip(got.iter()).enumerate() {
        let err = (want - have).abs();
        println!("sin({:.7}) = {have:.8}, expected {want:.8}, err {err:.2e}", src[i]);
        assert!(
            err < 1e-6,
            "boundary input {}: got {have}, expected {want}",
            src[i]
        );
    }
}

/// sin(−x) = −sin(x); the sign fold makes this hold lane-for-lane.
#[test]
fn odd_symmetry() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(7);
    let xs: Vec<f32> = (0..4_096).map(|_| rng.random_range(-50.0..=50.0f32)).collect();
    let negated: Vec<f32> = xs.iter().map(|x| -x).collect();

    let pos = dispatched(&xs);
    let neg = dispatched(&negated);

    for (i, (&p, &n)) in pos.iter().zip(neg.iter()).enumerate() {
        assert!(
            (p + n).abs() < 1e-6,
            "odd symmetry broken at x = {}: sin(x) = {p}, sin(-x) = {n}",
            xs[i]
        );
    }
}

/// sin(x) ≈ sin(x + 2πk), with the tolerance widening as the shifted
/// argument grows (reduction error plus the f32 spacing of x + 2πk).
#[test]
fn periodicity() {
    let base: Vec<f32> = (0..628).map(|i| (i as f32) * 0.01 - PI).collect();

    // (periods shifted, tolerated absolute error)
    for &(periods, tolerance) in &[(1i32, 1e-5f32), (10, 1e-4), (100, 1e-3)] {
        let shifted: Vec<f32> = base.iter().map(|x| x + TAU * periods as f32).collect();

        let a = dispatched(&base);
        let b = dispatched(&shifted);

        let mut max_err = 0.0f32;
        for (i, (&u, &v)) in a.iter().zip(b.iter()).enumerate() {
            let err = (u - v).abs();
            max_err = max_err.max(err);
            assert!(
                err < tolerance,
                "{periods} periods: x = {}, err {err:.2e}",
                base[i]
            );
        }
        println!("shift by {periods} periods: max abs error {max_err:.2e}");
    }
}

/// Lengths that do not fill a lane group: the tail takes the scalar path,
/// so trailing elements must match the reference kernel bit for bit.
#[test]
fn remainder_elements_match_scalar_exactly() {
    // 9 and 11 leave a tail for both the 4- and 8-lane tiers. The window
    // checked below is the tail of the narrowest vector tier, which is
    // contained in the tail of every wider one.
    for len in [9usize, 11, 17, 23] {
        let src: Vec<f32> = (0..len).map(|i| i as f32 * 0.7 - 4.0).collect();

        let expected = scalar_reference(&src);
        let got = dispatched(&src);

        for i in (len - (len % 4))..len {
            assert_eq!(
                got[i].to_bits(),
                expected[i].to_bits(),
                "len {len}, tail index {i}: {} != {}",
                got[i],
                expected[i]
            );
        }
    }
}

/// Zero-length buffers return without touching anything.
#[test]
fn zero_length_is_noop() {
    let src: [f32; 0] = [];
    let mut dst: [f32; 0] = [];
    vectrig::sin(&mut dst, &src);
    vectrig::par_sin(&mut dst, &src);
}

/// For very small angles sin(x) ≈ x; the kernel must not lose the value
/// to underflow in the half-angle squaring.
#[test]
fn near_zero_inputs() {
    let small = [
        1e-8f32, 1e-7, 1e-6, 1e-5, 1e-4, 1e-3, 1e-2, 1e-1, -1e-8, -1e-7, -1e-6, -1e-5, -1e-4,
        -1e-3, -1e-2, -1e-1,
    ];

    let expected = scalar_reference(&small);
    let got = dispatched(&small);

    for (i, (&want, &have)) in expected.iter().zip(got.iter()).enumerate() {
        let x = small[i];
        assert!(
            (have - x).abs() <= x.abs() * 1e-2,
            "sin({x:e}) = {have:e} strays from x"
        );
        assert!(
            (have - want).abs() < 1e-7,
            "sin({x:e}) = {have:e}, scalar gives {want:e}"
        );
    }
}

/// NaN and infinity degrade to NaN on every tier; finite lanes in the
/// same group are unaffected.
#[test]
fn non_finite_inputs_propagate() {
    let src = [
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        0.0,
        1.0,
        -1.0,
        FRAC_PI_2,
        PI,
    ];

    let got = dispatched(&src);

    assert!(got[0].is_nan());
    assert!(got[1].is_nan());
    assert!(got[2].is_nan());
    assert!(got[3].abs() < 1e-6);
    assert!((got[4] - 1.0f32.sin()).abs() < 1e-6);
    assert!((got[5] + 1.0f32.sin()).abs() < 1e-6);
    assert!((got[6] - 1.0).abs() < 1e-6);
    assert!(got[7].abs() < 1e-6);
}

/// Length mismatch is a caller bug and panics up front.
#[test]
#[should_panic(expected = "lengths differ")]
fn length_mismatch_panics() {
    let src = [0.0f32; 8];
    let mut dst = [0.0f32; 7];
    vectrig::sin(&mut dst, &src);
}
