//! Property-based tests for the assignment codec, generating random
//! universes, assignment streams, window widths and read sizes.

use assignpack::config::UNASSIGNED;
use assignpack::{Assignment, AssignmentCompressor, CodecConfig, Universe};
use proptest::prelude::*;
use tempfile::tempdir;

/// Generate a universe of zero-padded identifiers together with a
/// stream of non-empty partial assignments over it.
fn universe_and_assignments(
) -> impl Strategy<Value = (Vec<String>, Vec<Assignment>)> {
    (1usize..24).prop_flat_map(|size| {
        let ids: Vec<String> =
            (0..size).map(|i| format!("{:03}", i)).collect();
        let one = proptest::collection::btree_map(
            0..size,
            "[0-9]{1,2}",
            1..=size,
        );
        proptest::collection::vec(one, 0..12).prop_map(move |samples| {
            let assignments = samples
                .into_iter()
                .map(|sample| {
                    sample
                        .into_iter()
                        .map(|(at, label)| (ids[at].clone(), label))
                        .collect::<Assignment>()
                })
                .collect();
            (ids.clone(), assignments)
        })
    })
}

/// Completes an assignment with the sentinel, the way decoding does.
fn complete(ids: &[String], assignment: &Assignment) -> Assignment {
    ids.iter()
        .map(|id| {
            let label = assignment
                .get(id)
                .cloned()
                .unwrap_or_else(|| UNASSIGNED.to_string());
            (id.clone(), label)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_trip_preserves_order_and_completion(
        (ids, assignments) in universe_and_assignments(),
        window in 1usize..6,
        read_size in 1usize..64,
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plans.ac");
        let universe = Universe::new(ids.clone());

        let config = CodecConfig { read_size, ..CodecConfig::default() };
        let mut ac = AssignmentCompressor::with_config(
            universe, window, &path, config,
        ).unwrap();
        for assignment in &assignments {
            ac.compress(assignment).unwrap();
        }
        ac.close().unwrap();

        // An all-skipped (here: empty) stream leaves no file behind.
        if assignments.is_empty() {
            prop_assert!(!path.exists());
            return Ok(());
        }

        let decoded = ac
            .decompress()
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        prop_assert_eq!(decoded.len(), assignments.len());
        for (original, full) in assignments.iter().zip(&decoded) {
            prop_assert_eq!(&complete(&ids, original), full);
        }
    }

    #[test]
    fn read_size_never_changes_the_decoded_sequence(
        (ids, assignments) in universe_and_assignments(),
        window in 1usize..4,
        read_sizes in proptest::collection::vec(1usize..512, 2..4),
    ) {
        prop_assume!(!assignments.is_empty());

        let dir = tempdir().unwrap();
        let path = dir.path().join("plans.ac");
        let universe = Universe::new(ids);

        let mut ac = AssignmentCompressor::new(
            universe.clone(), window, &path,
        ).unwrap();
        for assignment in &assignments {
            ac.compress(assignment).unwrap();
        }
        ac.close().unwrap();
        let expected = ac
            .decompress()
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        for read_size in read_sizes {
            let config =
                CodecConfig { read_size, ..CodecConfig::default() };
            let reader = AssignmentCompressor::with_config(
                universe.clone(), window, &path, config,
            ).unwrap();
            let decoded = reader
                .decompress()
                .unwrap()
                .collect::<Result<Vec<_>, _>>()
                .unwrap();
            prop_assert_eq!(&decoded, &expected);
        }
    }
}
