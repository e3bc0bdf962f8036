/// In-place permutation passes used by `Testlet::randomize_with`.
///
/// Both passes work on a caller-owned slice and only ever swap elements, so
/// the multiset of items is preserved by construction.
use rand::Rng;

use crate::types::Item;

/// Uniform in-place shuffle (Fisher–Yates, high index to low).
///
/// For `i` from `len - 1` down to `1`, draws `j` uniformly from `0..=i` and
/// swaps positions `i` and `j`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Move the first `leading` pretest items (in scan order) to the front.
///
/// Scans left to right. Each pretest item found at `idx` is swapped with the
/// item at `placed`, then `placed` is incremented; scanning stops once
/// `placed == leading`. The displaced item lands at `idx`, which has already
/// been scanned, so nothing is visited twice.
///
/// Returns the number of items placed, which is less than `leading` only if
/// the slice holds fewer pretest items than requested.
pub fn front_load_pretest(items: &mut [Item], leading: usize) -> usize {
    let mut placed = 0;
    if leading == 0 {
        return placed;
    }

    for idx in 0..items.len() {
        if !items[idx].is_pretest() {
            continue;
        }
        items.swap(placed, idx);
        placed += 1;
        if placed == leading {
            break;
        }
    }

    placed
}
