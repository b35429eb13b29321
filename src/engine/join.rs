use std::cmp::Ordering;

use itertools::Itertools;
use rayon::prelude::*;

use crate::types::{FrequentLevel, ItemId, Itemset, Tid, TidList};

/// Produce frequent level k from frequent level k-1.
///
/// Parents are sorted into canonical order and grouped into runs sharing a
/// (k-2)-prefix; two parents join only within a run, so each qualifying pair
/// yields exactly one canonical candidate. A candidate's tidlist is the
/// intersection of its parents' tidlists, never a database rescan.
pub(super) fn next_level(prev: &FrequentLevel, min_support_count: usize) -> FrequentLevel {
    let mut parents: Vec<&Itemset> = prev.keys().collect();
    if parents.len() < 2 {
        return FrequentLevel::new();
    }
    parents.sort_unstable();

    let mut pairs: Vec<(&Itemset, &Itemset)> = Vec::new();
    let mut i = 0;
    while i < parents.len() {
        let prefix = &parents[i][..parents[i].len() - 1];
        let mut j = i + 1;
        while j < parents.len() && &parents[j][..parents[j].len() - 1] == prefix {
            j += 1;
        }
        for (&a, &b) in parents[i..j].iter().tuple_combinations() {
            pairs.push((a, b));
        }
        i = j;
    }

    pairs
        .into_par_iter()
        .filter_map(|(first, second)| {
            let &joined_item = second.last()?;
            let mut candidate = first.clone();
            candidate.push(joined_item);

            if has_infrequent_subset(&candidate, prev) {
                return None;
            }

            let tidlist = intersect(&prev[first], &prev[second]);
            if tidlist.len() >= min_support_count {
                Some((candidate, tidlist))
            } else {
                None
            }
        })
        .collect()
}

/// Antimonotonicity prune. The two joining parents are known frequent, so
/// only the subsets dropping one of the shared prefix items need checking.
fn has_infrequent_subset(candidate: &[ItemId], prev: &FrequentLevel) -> bool {
    let mut subset: Itemset = Vec::with_capacity(candidate.len() - 1);
    for skip in 0..candidate.len().saturating_sub(2) {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(position, _)| position != skip)
                .map(|(_, &item)| item),
        );
        if !prev.contains_key(&subset) {
            return true;
        }
    }
    false
}

/// Merge walk over two ascending tidlists.
fn intersect(left: &[Tid], right: &[Tid]) -> TidList {
    let mut out = TidList::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn test_intersect() {
        assert_eq!(intersect(&[0, 2, 4, 7], &[1, 2, 3, 7, 9]), vec![2, 7]);
        assert_eq!(intersect(&[0, 1], &[2, 3]), Vec::<Tid>::new());
        assert_eq!(intersect(&[], &[1]), Vec::<Tid>::new());
    }

    #[test]
    fn joins_1_itemsets_over_empty_prefix() {
        let prev: FrequentLevel = hashmap! {
            vec![1] => vec![0, 1],
            vec![2] => vec![0],
            vec![3] => vec![1],
        };

        let next = next_level(&prev, 1);

        let expected: FrequentLevel = hashmap! {
            vec![1, 2] => vec![0],
            vec![1, 3] => vec![1],
        };
        assert_eq!(next, expected);
    }

    #[test]
    fn prunes_candidate_with_infrequent_subset() {
        // {1,3,4,5} joins from {1,3,4} and {1,3,5} but {3,4,5} is absent.
        let prev: FrequentLevel = hashmap! {
            vec![1, 2, 3] => vec![0, 1],
            vec![1, 2, 4] => vec![0, 1],
            vec![1, 3, 4] => vec![0, 1],
            vec![1, 3, 5] => vec![0, 1],
            vec![2, 3, 4] => vec![0, 1],
        };

        let next = next_level(&prev, 1);

        let expected: FrequentLevel = hashmap! {
            vec![1, 2, 3, 4] => vec![0, 1],
        };
        assert_eq!(next, expected);
    }

    #[test]
    fn candidate_tidlist_is_parent_intersection() {
        let prev: FrequentLevel = hashmap! {
            vec![1, 2] => vec![0, 2, 3],
            vec![1, 3] => vec![0, 1, 3],
            vec![2, 3] => vec![0, 3, 4],
        };

        let next = next_level(&prev, 2);

        let expected: FrequentLevel = hashmap! {
            vec![1, 2, 3] => vec![0, 3],
        };
        assert_eq!(next, expected);
    }

    #[test]
    fn filters_below_min_support_count() {
        let prev: FrequentLevel = hashmap! {
            vec![1] => vec![0, 1],
            vec![2] => vec![1],
        };

        assert!(next_level(&prev, 2).is_empty());
    }

    #[test]
    fn fewer_than_two_parents_terminates() {
        let prev: FrequentLevel = hashmap! { vec![1, 2] => vec![0, 1] };
        assert!(next_level(&prev, 1).is_empty());
    }

    #[test]
    fn test_has_infrequent_subset() {
        let prev: FrequentLevel = hashmap! {
            vec![1, 2] => vec![0],
            vec![1, 3] => vec![0],
            vec![2, 3] => vec![0],
            vec![2, 4] => vec![0],
        };

        assert!(!has_infrequent_subset(&[1, 2, 3], &prev));
        // dropping prefix item 2 from [2,3,4] leaves [3,4], which is absent
        assert!(has_infrequent_subset(&[2, 3, 4], &prev));
    }
}
