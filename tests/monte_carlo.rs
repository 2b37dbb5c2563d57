use std::cell::Cell;

use hex_literal::hex;
use x25519_kat::harness::vectors::MONTE_CARLO_CHECKPOINTS;
use x25519_kat::harness::{
    Checkpoint, HarnessError, MonteCarloParamError, MonteCarloParams, Progress, Silent,
    run_monte_carlo,
};
use x25519_kat::keys::x25519::{BASEPOINT, X25519, x25519};

const AFTER_ONE: [u8; 32] =
    hex!("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079");
const AFTER_THOUSAND: [u8; 32] =
    hex!("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51");

#[derive(Default)]
struct Ticks(u32);

impl Progress for Ticks {
    fn begin(&mut self, _name: &str) {}
    fn tick(&mut self) {
        self.0 += 1;
    }
    fn pause(&mut self) {}
    fn finish(&mut self) {}
}

#[test]
fn default_params() {
    let params = MonteCarloParams::default();

    assert_eq!(params.iterations, 1000);
    assert_eq!(params.progress_interval, 50);
    assert_eq!(params.checkpoints, MONTE_CARLO_CHECKPOINTS);
}

#[test]
fn thousand_iterations_reach_published_value() {
    let mut ticks = Ticks::default();

    let last = run_monte_carlo(&X25519, &MonteCarloParams::default(), &mut ticks).unwrap();

    assert_eq!(last, AFTER_THOUSAND);
    assert_eq!(ticks.0, 20);
}

#[test]
fn single_iteration_is_basepoint_times_nine() {
    let params = MonteCarloParams {
        iterations: 1,
        checkpoints: vec![MONTE_CARLO_CHECKPOINTS[0]],
        progress_interval: 50,
    };

    assert_eq!(run_monte_carlo(&X25519, &params, &mut Silent), Ok(AFTER_ONE));

    let mut out = [0u8; 32];
    x25519(&mut out, &BASEPOINT, &BASEPOINT);
    assert_eq!(out, AFTER_ONE);
}

#[test]
fn state_rotates_scalar_into_point() {
    let seen = Cell::new(0u32);
    let checking = |out: &mut [u8; 32], point: &[u8; 32], scalar: &[u8; 32]| {
        let call = seen.get() + 1;
        seen.set(call);
        match call {
            1 => {
                assert_eq!(point, &BASEPOINT);
                assert_eq!(scalar, &BASEPOINT);
            }
            2 => {
                assert_eq!(point, &BASEPOINT);
                assert_eq!(scalar, &AFTER_ONE);
            }
            _ => {}
        }
        x25519(out, point, scalar);
    };
    let params = MonteCarloParams {
        iterations: 3,
        checkpoints: vec![],
        progress_interval: 1,
    };
    let mut ticks = Ticks::default();

    run_monte_carlo(&checking, &params, &mut ticks).unwrap();

    assert_eq!(seen.get(), 3);
    assert_eq!(ticks.0, 3);
}

#[test]
fn checkpoint_order_does_not_matter() {
    let params = MonteCarloParams {
        checkpoints: vec![MONTE_CARLO_CHECKPOINTS[1], MONTE_CARLO_CHECKPOINTS[0]],
        ..MonteCarloParams::default()
    };

    assert_eq!(
        run_monte_carlo(&X25519, &params, &mut Silent),
        Ok(AFTER_THOUSAND)
    );
}

#[test]
fn wrong_first_checkpoint_stops_immediately() {
    let params = MonteCarloParams {
        checkpoints: vec![Checkpoint {
            iteration: 1,
            expected: "432c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079",
        }],
        ..MonteCarloParams::default()
    };

    let calls = Cell::new(0u32);
    let counting = |out: &mut [u8; 32], point: &[u8; 32], scalar: &[u8; 32]| {
        calls.set(calls.get() + 1);
        x25519(out, point, scalar);
    };

    let err = run_monte_carlo(&counting, &params, &mut Silent).unwrap_err();

    match err {
        HarnessError::Mismatch(m) => {
            assert_eq!(m.label, "KAT MC");
            assert_eq!(
                m.actual,
                "422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079"
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn single_fault_propagates_to_final_checkpoint() {
    let calls = Cell::new(0u32);
    let faulty = |out: &mut [u8; 32], point: &[u8; 32], scalar: &[u8; 32]| {
        let call = calls.get() + 1;
        calls.set(call);
        x25519(out, point, scalar);
        if call == 500 {
            out[0] ^= 1;
        }
    };
    let mut ticks = Ticks::default();

    let err = run_monte_carlo(&faulty, &MonteCarloParams::default(), &mut ticks).unwrap_err();

    assert!(matches!(err, HarnessError::Mismatch(ref m) if m.label == "KAT MC"));
    assert_eq!(calls.get(), 1000);
    // the tick for iteration 1000 is never emitted
    assert_eq!(ticks.0, 19);
}

#[test]
fn checkpoints_are_decoded_before_running() {
    let params = MonteCarloParams {
        checkpoints: vec![Checkpoint {
            iteration: 1000,
            expected: "684cf59b",
        }],
        ..MonteCarloParams::default()
    };

    let calls = Cell::new(0u32);
    let counting = |out: &mut [u8; 32], _: &[u8; 32], _: &[u8; 32]| {
        calls.set(calls.get() + 1);
        *out = [0; 32];
    };

    assert!(matches!(
        run_monte_carlo(&counting, &params, &mut Silent),
        Err(HarnessError::Decode(_))
    ));
    assert_eq!(calls.get(), 0);
}

#[test]
fn invalid_params_are_rejected() {
    let zero_iterations = MonteCarloParams {
        iterations: 0,
        checkpoints: vec![],
        progress_interval: 50,
    };
    assert_eq!(
        run_monte_carlo(&X25519, &zero_iterations, &mut Silent),
        Err(HarnessError::InvalidParams(
            MonteCarloParamError::ZeroIterations
        ))
    );

    let zero_interval = MonteCarloParams {
        progress_interval: 0,
        ..MonteCarloParams::default()
    };
    assert_eq!(
        run_monte_carlo(&X25519, &zero_interval, &mut Silent),
        Err(HarnessError::InvalidParams(
            MonteCarloParamError::ZeroProgressInterval
        ))
    );

    let beyond_end = MonteCarloParams {
        iterations: 10,
        ..MonteCarloParams::default()
    };
    assert_eq!(
        run_monte_carlo(&X25519, &beyond_end, &mut Silent),
        Err(HarnessError::InvalidParams(
            MonteCarloParamError::CheckpointOutOfRange { iteration: 1000 }
        ))
    );

    let at_zero = MonteCarloParams {
        checkpoints: vec![Checkpoint {
            iteration: 0,
            expected: "",
        }],
        ..MonteCarloParams::default()
    };
    assert_eq!(
        run_monte_carlo(&X25519, &at_zero, &mut Silent),
        Err(HarnessError::InvalidParams(
            MonteCarloParamError::CheckpointOutOfRange { iteration: 0 }
        ))
    );
}

#[test]
#[ignore = "one million ladder evaluations"]
fn million_iterations_reach_published_value() {
    let last = run_monte_carlo(&X25519, &MonteCarloParams::extended(), &mut Silent).unwrap();

    assert_eq!(
        last,
        hex!("7c3911e0ab2586fd864497297e575e6f3bc601c0883c30df5f4dd2d24f665424")
    );
}
