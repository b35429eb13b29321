use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;

pub type ItemId = usize;
pub type ItemName<'l> = &'l str;
pub type Tid = usize;

/// Canonical itemset: item ids in strictly ascending order.
pub type Itemset = Vec<ItemId>;

/// Ascending list of ids of the transactions containing an itemset.
pub type TidList = Vec<Tid>;

pub type ReverseLookup<'l> = HashMap<ItemName<'l>, ItemId>;

pub type RawTransaction<'l> = HashSet<ItemName<'l>>;
pub type Transaction = Vec<ItemId>;

/// One mined level: canonical k-itemset mapped to its tidlist.
pub type FrequentLevel = HashMap<Itemset, TidList>;

pub type SupportCount = u32;

/// Flat collection of frequent itemsets across all levels, plus the wall
/// time the mining computation took (data preparation excluded).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MiningResult {
    pub itemsets: Vec<(Itemset, SupportCount)>,
    pub elapsed: Duration,
}

impl MiningResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn time_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Count of mined itemsets grouped by cardinality.
    pub fn size_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for (itemset, _) in &self.itemsets {
            *histogram.entry(itemset.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// Support count of a canonical itemset, if it was mined.
    pub fn support_of(&self, itemset: &[ItemId]) -> Option<SupportCount> {
        self.itemsets
            .iter()
            .find(|(mined, _)| mined == itemset)
            .map(|&(_, count)| count)
    }
}
