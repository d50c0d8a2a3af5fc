use bolero::check;
use smchash::{hash, hash_seeded, hash_with_secret, Secret, SECRET};

#[test]
fn fuzz_entry_point_agreement() {
    check!()
        .with_type::<(Vec<u8>, u64)>()
        .for_each(|(data, seed)| {
            // =============================================================================
            // DEFAULT SEED
            // =============================================================================

            assert_eq!(hash(data), hash_seeded(data, SECRET[0]));
            assert_eq!(Secret::DEFAULT.hash(data, *seed), hash_seeded(data, *seed));

            // =============================================================================
            // SHORT PATH
            // =============================================================================

            // Entry folds only differ past 16 bytes.
            if data.len() <= 16 {
                assert_eq!(
                    hash_with_secret(data, *seed, &SECRET),
                    hash_seeded(data, *seed),
                    "short-path mismatch at len {}",
                    data.len()
                );
            }
        });
}

#[test]
fn fuzz_offset_independence() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let expected = hash(data);
        for offset in [1, 3, 7] {
            let mut shifted = vec![0xEEu8; offset];
            shifted.extend_from_slice(data);
            assert_eq!(hash(&shifted[offset..]), expected, "offset {offset}");
        }
    });
}
