//! Property-based tests over arbitrary seeds.

use isaac_csprng::{Backend, IsaacError, IsaacRng, RAND_SIZE};
use proptest::prelude::*;

fn seed_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 0..=RAND_SIZE)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn same_seed_same_stream(seed in seed_strategy()) {
        let mut a = IsaacRng::new(&seed).unwrap();
        let mut b = IsaacRng::new(&seed).unwrap();
        for _ in 0..(2 * RAND_SIZE + 3) {
            prop_assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn backends_agree(seed in seed_strategy()) {
        let mut unr = IsaacRng::with_backend(&seed, Backend::Unrolled).unwrap();
        let mut rf = IsaacRng::with_backend(&seed, Backend::Reference).unwrap();
        for _ in 0..(3 * RAND_SIZE) {
            prop_assert_eq!(unr.next_word(), rf.next_word());
        }
    }

    #[test]
    fn unit_interval_closed(seed in seed_strategy()) {
        let mut rng = IsaacRng::new(&seed).unwrap();
        for _ in 0..RAND_SIZE {
            let v = rng.next_unit_interval();
            prop_assert!((0.0..=1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn trailing_zeros_do_not_change_stream(seed in prop::collection::vec(any::<u32>(), 0..128)) {
        let mut padded = seed.clone();
        padded.resize(RAND_SIZE, 0);
        let mut a = IsaacRng::new(&seed).unwrap();
        let mut b = IsaacRng::new(&padded).unwrap();
        for _ in 0..RAND_SIZE {
            prop_assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn oversized_seed_rejected(extra in 1usize..64) {
        let seed = vec![1u32; RAND_SIZE + extra];
        prop_assert_eq!(
            IsaacRng::new(&seed).unwrap_err(),
            IsaacError::SeedTooLong { len: RAND_SIZE + extra, max: RAND_SIZE }
        );
    }
}
