use crate::models::transition::InterferenceMask;
use std::collections::HashSet;

/// For every order `k` in `1..=max_uis`, count the distinct k-transition
/// subsets that at least one interferer can fully reproduce.
///
/// The counting is over the set of subset masks, so interferers with
/// identical masks (isotope variants of the same peptide, typically) cannot
/// inflate the counts. Cost is `O(|masks| * C(popcount, k))` per order,
/// which stays small in practice because real interferers rarely match many
/// transitions.
pub fn count_non_uis(masks: &[InterferenceMask], max_uis: usize) -> Vec<usize> {
    (1..=max_uis)
        .map(|order| {
            let mut subsets: HashSet<InterferenceMask> = HashSet::new();
            for &mask in masks {
                collect_subsets_of_order(mask, order, &mut subsets);
            }
            subsets.len()
        })
        .collect()
}

/// Insert every `order`-bit subset of `mask` into `out`.
fn collect_subsets_of_order(
    mask: InterferenceMask,
    order: usize,
    out: &mut HashSet<InterferenceMask>,
) {
    let bits: Vec<u32> = (0..InterferenceMask::BITS)
        .filter(|b| mask & (1 << b) != 0)
        .collect();
    combine(&bits, order, 0, out);
}

fn combine(
    bits: &[u32],
    remaining: usize,
    acc: InterferenceMask,
    out: &mut HashSet<InterferenceMask>,
) {
    if remaining == 0 {
        out.insert(acc);
        return;
    }
    if bits.len() < remaining {
        return;
    }
    for (i, &bit) in bits.iter().enumerate() {
        combine(&bits[i + 1..], remaining - 1, acc | (1 << bit), out);
    }
}
