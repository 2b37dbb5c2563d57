//! Embedded X25519 test vectors (RFC 7748, sections 5.2 and 6.1).

use super::kat::KatVector;
use super::monte_carlo::Checkpoint;

/// Known-answer vectors: input scalar, input u-coordinate, output
/// u-coordinate.
pub const KAT_X25519: &[KatVector] = &[
    KatVector {
        scalar: "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
        point: "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
        expected: "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
    },
    KatVector {
        scalar: "4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d",
        point: "e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493",
        expected: "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957",
    },
];

/// Scalar after the first and the 1000th Monte-Carlo iteration.
pub const MONTE_CARLO_CHECKPOINTS: &[Checkpoint] = &[
    Checkpoint {
        iteration: 1,
        expected: "422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079",
    },
    Checkpoint {
        iteration: 1000,
        expected: "684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51",
    },
];

/// Scalar after 1,000,000 Monte-Carlo iterations.
pub const MONTE_CARLO_MILLION: Checkpoint = Checkpoint {
    iteration: 1_000_000,
    expected: "7c3911e0ab2586fd864497297e575e6f3bc601c0883c30df5f4dd2d24f665424",
};
