use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io;

use crate::types::{SamplePair, SplitData};

// Allowed deviation of the ratio sum from 1.0
pub const RATIO_TOLERANCE: f64 = 1e-6;

/// Check that the three split ratios sum to 1.0 within tolerance.
pub fn validate_ratios(r_train: f64, r_val: f64, r_test: f64) -> io::Result<()> {
    let sum = r_train + r_val + r_test;
    if (sum - 1.0).abs() > RATIO_TOLERANCE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("split ratios must sum to 1.0, got {}", sum),
        ));
    }
    Ok(())
}

/// Split sizes for one class subgroup of `n` samples.
///
/// `n_train` and `n_val` round half away from zero and are clamped so they
/// never exceed what is left; `n_test` takes the remainder. The three sizes
/// always sum to exactly `n`, which can make the realized test fraction
/// differ slightly from its ratio for small subgroups.
pub fn split_sizes(n: usize, r_train: f64, r_val: f64) -> (usize, usize, usize) {
    let n_train = ((n as f64 * r_train).round() as usize).min(n);
    let n_val = ((n as f64 * r_val).round() as usize).min(n - n_train);
    (n_train, n_val, n - n_train - n_val)
}

// Slice one shuffled subgroup into contiguous train/val/test runs
fn split_one(
    mut items: Vec<SamplePair>,
    r_train: f64,
    r_val: f64,
) -> (Vec<SamplePair>, Vec<SamplePair>, Vec<SamplePair>) {
    let (n_train, n_val, _) = split_sizes(items.len(), r_train, r_val);
    let mut val = items.split_off(n_train);
    let test = val.split_off(n_val);
    (items, val, test)
}

/// Stratified split on the negativity flag.
///
/// Negatives and positives are shuffled and sliced independently so each
/// split keeps the dataset's class balance, then each combined split is
/// shuffled once more so negatives and positives interleave.
///
/// Three seeded streams are used: `seed` for the negatives, `seed + 1` for
/// the positives, and a fresh generator seeded with `seed` again for each
/// combined split. For a fixed seed and input order the assignment and the
/// ordering inside every split are reproducible bit for bit; collapsing the
/// streams into one would silently reassign samples for existing seeds.
pub fn stratified_split(
    pairs: Vec<SamplePair>,
    r_train: f64,
    r_val: f64,
    r_test: f64,
    seed: u64,
) -> io::Result<SplitData> {
    validate_ratios(r_train, r_val, r_test)?;

    let (mut neg, mut pos): (Vec<_>, Vec<_>) = pairs.into_iter().partition(|p| p.is_negative);

    let mut neg_rng = StdRng::seed_from_u64(seed);
    neg.shuffle(&mut neg_rng);
    let mut pos_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    pos.shuffle(&mut pos_rng);

    let (neg_train, neg_val, neg_test) = split_one(neg, r_train, r_val);
    let (pos_train, pos_val, pos_test) = split_one(pos, r_train, r_val);

    let mut train = neg_train;
    train.extend(pos_train);
    let mut val = neg_val;
    val.extend(pos_val);
    let mut test = neg_test;
    test.extend(pos_test);

    for split in [&mut train, &mut val, &mut test] {
        let mut rng = StdRng::seed_from_u64(seed);
        split.shuffle(&mut rng);
    }

    Ok(SplitData { train, val, test })
}
