use x25519_kat::harness::{ConsoleProgress, HarnessError, Silent, run_all};
use x25519_kat::keys::x25519::{X25519, x25519};

#[test]
fn run_all_passes_with_shipped_primitive() {
    assert_eq!(run_all(&X25519, &mut Silent), Ok(()));
}

#[test]
fn run_all_prints_classic_transcript() {
    let mut progress = ConsoleProgress::new(Vec::new());

    run_all(&X25519, &mut progress).unwrap();

    let transcript = String::from_utf8(progress.into_inner()).unwrap();
    assert_eq!(
        transcript,
        format!("Test x25519: .. {} done.\n", ".".repeat(20))
    );
}

#[test]
fn run_all_stops_before_monte_carlo_on_kat_failure() {
    let faulty = |out: &mut [u8; 32], point: &[u8; 32], scalar: &[u8; 32]| {
        x25519(out, point, scalar);
        out[31] ^= 0x01;
    };
    let mut progress = ConsoleProgress::new(Vec::new());

    let err = run_all(&faulty, &mut progress).unwrap_err();

    assert!(matches!(err, HarnessError::Mismatch(ref m) if m.label == "KAT"));
    assert!(err.to_string().starts_with("ERR: KAT\na1 = "));

    let transcript = String::from_utf8(progress.into_inner()).unwrap();
    assert_eq!(transcript, "Test x25519: ");
}
