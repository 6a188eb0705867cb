//! Rejection-sampling allocators and the lane index shuffle.
//!
//! Uniqueness is tracked with an [`IndexSet`], which keeps values in
//! first-acceptance order. Each allocator draws at most
//! `attempts_per_value * count` times before failing with
//! [`AllocError::AttemptsExhausted`].

use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::Rng;
use vecgen_core::{AllocError, GenConfig, RegisterName, Vector, LANES};

/// Smallest value handed out for scalars and vector lanes. Zero is
/// excluded so generated operands are never trivially zero.
const MIN_VALUE: u32 = 1;

/// Number of distinct values in `MIN_VALUE..=u32::MAX`.
const VALUE_SPACE: u64 = u32::MAX as u64;

/// Upper bound on the set capacity reserved before drawing. Larger
/// requests grow the set as values are accepted.
const MAX_RESERVE: usize = 4096;

/// Draw unique values from `draw` until `count` have been collected.
fn collect_unique<T, R, F>(
    rng: &mut R,
    config: &GenConfig,
    count: usize,
    available: u64,
    mut draw: F,
) -> Result<IndexSet<T>, AllocError>
where
    T: std::hash::Hash + Eq,
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> T,
{
    config.validate().map_err(|err| {
        tracing::warn!(%err, "rejecting allocation with invalid config");
        AllocError::from(err)
    })?;

    let requested = count as u64;
    if requested > available {
        tracing::warn!(requested, available, "unique allocation pool exhausted");
        return Err(AllocError::PoolExhausted {
            requested,
            available,
        });
    }

    let budget = requested.saturating_mul(u64::from(config.attempts_per_value));
    let mut seen = IndexSet::with_capacity(count.min(MAX_RESERVE));
    let mut attempts = 0u64;
    while seen.len() < count {
        if attempts == budget {
            tracing::warn!(
                requested,
                allocated = seen.len(),
                attempts,
                "unique allocation ran out of draws"
            );
            return Err(AllocError::AttemptsExhausted {
                requested,
                allocated: seen.len() as u64,
                attempts,
            });
        }
        attempts += 1;
        seen.insert(draw(&mut *rng));
    }

    tracing::debug!(requested, attempts, "unique allocation complete");
    Ok(seen)
}

/// Allocate `count` distinct register names with the given prefix.
///
/// Indices are drawn uniformly from
/// `config.first_register..=config.last_register` (`1..=27` by default,
/// leaving register 0 untouched). Names are returned in the order they
/// were first drawn.
///
/// # Errors
///
/// [`AllocError::InvalidConfig`] if `config` fails
/// [`validate`](GenConfig::validate),
/// [`AllocError::PoolExhausted`] if `count` exceeds the register range,
/// [`AllocError::AttemptsExhausted`] if the draw budget runs out.
pub fn allocate_unique_registers<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenConfig,
    prefix: &str,
    count: usize,
) -> Result<Vec<RegisterName>, AllocError> {
    let (first, last) = (config.first_register, config.last_register);
    let indices = collect_unique(rng, config, count, config.register_pool_size(), |rng| {
        rng.random_range(first..=last)
    })?;
    Ok(indices
        .into_iter()
        .map(|index| RegisterName::new(prefix, index))
        .collect())
}

/// Allocate `count` distinct values in `1..=0xFFFF_FFFF`.
///
/// # Errors
///
/// [`AllocError::InvalidConfig`] if `config` fails
/// [`validate`](GenConfig::validate),
/// [`AllocError::PoolExhausted`] if `count` exceeds the number of
/// non-zero `u32` values, [`AllocError::AttemptsExhausted`] if the draw
/// budget runs out.
pub fn allocate_unique_scalar_values<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenConfig,
    count: usize,
) -> Result<Vec<u32>, AllocError> {
    let values = collect_unique(rng, config, count, VALUE_SPACE, |rng| {
        rng.random_range(MIN_VALUE..=u32::MAX)
    })?;
    Ok(values.into_iter().collect())
}

/// Allocate one vector with every lane independently drawn from
/// `1..=0xFFFF_FFFF`. Lanes may repeat.
pub fn allocate_random_vector_value<R: Rng + ?Sized>(rng: &mut R) -> Vector {
    std::array::from_fn(|_| rng.random_range(MIN_VALUE..=u32::MAX))
}

/// Return the lane indices `0..16` in uniformly random order.
pub fn shuffle_indices<R: Rng + ?Sized>(rng: &mut R) -> [usize; LANES] {
    let mut indices: [usize; LANES] = std::array::from_fn(|i| i);
    indices.shuffle(rng);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use vecgen_core::ConfigError;
    use vecgen_test_utils::{seeded_rng, ConstRng};

    // ── Registers ───────────────────────────────────────────────

    #[test]
    fn registers_are_distinct_and_in_range() {
        let mut rng = seeded_rng(1);
        let cfg = GenConfig::default();
        let regs = allocate_unique_registers(&mut rng, &cfg, "s", 10).unwrap();
        assert_eq!(regs.len(), 10);
        let unique: HashSet<_> = regs.iter().collect();
        assert_eq!(unique.len(), 10);
        for reg in &regs {
            assert_eq!(reg.prefix, "s");
            assert!((1..=27).contains(&reg.index), "{reg} out of range");
        }
    }

    #[test]
    fn whole_register_file_can_be_allocated() {
        let mut rng = seeded_rng(2);
        let cfg = GenConfig::default();
        let regs = allocate_unique_registers(&mut rng, &cfg, "v", 27).unwrap();
        let mut indices: Vec<u8> = regs.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (1..=27).collect::<Vec<u8>>());
    }

    #[test]
    fn too_many_registers_is_pool_exhausted() {
        let mut rng = seeded_rng(3);
        let cfg = GenConfig::default();
        let err = allocate_unique_registers(&mut rng, &cfg, "s", 28).unwrap_err();
        assert_eq!(
            err,
            AllocError::PoolExhausted {
                requested: 28,
                available: 27
            }
        );
    }

    #[test]
    fn reserved_register_zero_is_never_handed_out() {
        let mut rng = seeded_rng(1);
        let cfg = GenConfig {
            first_register: 0,
            ..GenConfig::default()
        };
        let err = allocate_unique_registers(&mut rng, &cfg, "s", 28).unwrap_err();
        assert_eq!(err, AllocError::InvalidConfig(ConfigError::ReservedRegister));
    }

    #[test]
    fn registers_past_file_end_are_rejected() {
        let mut rng = seeded_rng(1);
        let cfg = GenConfig {
            last_register: 200,
            ..GenConfig::default()
        };
        let err = allocate_unique_registers(&mut rng, &cfg, "s", 100).unwrap_err();
        assert_eq!(
            err,
            AllocError::InvalidConfig(ConfigError::RegisterOutOfRange { last: 200 })
        );
    }

    #[test]
    fn zero_registers_is_empty() {
        let mut rng = seeded_rng(4);
        let regs = allocate_unique_registers(&mut rng, &GenConfig::default(), "s", 0).unwrap();
        assert!(regs.is_empty());
    }

    #[test]
    fn tight_budget_reports_attempts_exhausted() {
        let mut rng = seeded_rng(5);
        let cfg = GenConfig {
            attempts_per_value: 1,
            ..GenConfig::default()
        };
        // 27 draws for 27 distinct values only succeeds on a perfect run.
        let mut saw_exhaustion = false;
        for _ in 0..8 {
            match allocate_unique_registers(&mut rng, &cfg, "s", 27) {
                Err(AllocError::AttemptsExhausted {
                    requested,
                    allocated,
                    attempts,
                }) => {
                    assert_eq!(requested, 27);
                    assert_eq!(attempts, 27);
                    assert!(allocated < 27);
                    saw_exhaustion = true;
                }
                Err(other) => panic!("unexpected error: {other}"),
                Ok(_) => {}
            }
        }
        assert!(saw_exhaustion);
    }

    #[test]
    fn same_seed_same_registers() {
        let cfg = GenConfig::default();
        let a = allocate_unique_registers(&mut seeded_rng(42), &cfg, "s", 12).unwrap();
        let b = allocate_unique_registers(&mut seeded_rng(42), &cfg, "s", 12).unwrap();
        assert_eq!(a, b);
    }

    // ── Scalars and vectors ─────────────────────────────────────

    #[test]
    fn scalars_are_distinct_and_nonzero() {
        let mut rng = seeded_rng(6);
        let values = allocate_unique_scalar_values(&mut rng, &GenConfig::default(), 1000).unwrap();
        assert_eq!(values.len(), 1000);
        let unique: HashSet<_> = values.iter().collect();
        assert_eq!(unique.len(), 1000);
        assert!(values.iter().all(|&v| v >= 1));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn scalar_request_beyond_value_space_fails_fast() {
        let mut rng = seeded_rng(7);
        let count = (VALUE_SPACE + 1) as usize;
        let err = allocate_unique_scalar_values(&mut rng, &GenConfig::default(), count);
        assert!(matches!(err, Err(AllocError::PoolExhausted { .. })));
    }

    #[test]
    fn huge_request_with_stuck_rng_runs_out_of_draws() {
        // Far more values than could ever be reserved up front; a stuck
        // RNG yields one value and the draw budget ends the loop.
        let count = 1usize << 22;
        let cfg = GenConfig {
            attempts_per_value: 1,
            ..GenConfig::default()
        };
        let err = allocate_unique_scalar_values(&mut ConstRng::new(0), &cfg, count).unwrap_err();
        assert_eq!(
            err,
            AllocError::AttemptsExhausted {
                requested: count as u64,
                allocated: 1,
                attempts: count as u64,
            }
        );
    }

    #[test]
    fn scalars_reject_invalid_config() {
        let cfg = GenConfig {
            attempts_per_value: 0,
            ..GenConfig::default()
        };
        let err = allocate_unique_scalar_values(&mut seeded_rng(1), &cfg, 4).unwrap_err();
        assert_eq!(err, AllocError::InvalidConfig(ConfigError::ZeroAttempts));
    }

    #[test]
    fn vector_lanes_are_nonzero() {
        let mut rng = seeded_rng(8);
        for _ in 0..64 {
            let v = allocate_random_vector_value(&mut rng);
            assert_eq!(v.len(), LANES);
            assert!(v.iter().all(|&lane| lane >= 1));
        }
    }

    // ── Shuffle ─────────────────────────────────────────────────

    #[test]
    fn shuffle_eventually_reorders() {
        let mut rng = seeded_rng(9);
        let identity: [usize; LANES] = std::array::from_fn(|i| i);
        let moved = (0..16).any(|_| shuffle_indices(&mut rng) != identity);
        assert!(moved, "16 shuffles should not all be the identity");
    }

    proptest! {
        #[test]
        fn shuffle_is_permutation(seed in any::<u64>()) {
            let mut rng = seeded_rng(seed);
            let mut indices = shuffle_indices(&mut rng).to_vec();
            indices.sort_unstable();
            prop_assert_eq!(indices, (0..LANES).collect::<Vec<_>>());
        }

        #[test]
        fn registers_unique_for_any_count(seed in any::<u64>(), count in 0usize..=27) {
            let cfg = GenConfig::default();
            let regs = allocate_unique_registers(&mut seeded_rng(seed), &cfg, "v", count).unwrap();
            prop_assert_eq!(regs.len(), count);
            let unique: HashSet<_> = regs.iter().map(|r| r.index).collect();
            prop_assert_eq!(unique.len(), count);
            prop_assert!(regs.iter().all(|r| (1..=27).contains(&r.index)));
        }
    }
}
