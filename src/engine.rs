mod join;

use std::collections::HashMap;
use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::database::TransactionDatabase;
use crate::error::MiningError;
use crate::types::{FrequentLevel, ItemId, MiningResult, TidList};

/// How the fractional `min_support` turns into an absolute support count
/// over `n` transactions.
///
/// `Floor` can yield a threshold of zero at small `n` or very low
/// `min_support`, which makes every occurring itemset frequent;
/// `FloorAtLeastOne` clamps the threshold to one. Which derivation is wanted
/// depends on the study being run, so it is a configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportRounding {
    /// `floor(min_support * n)`
    Floor,
    /// `max(1, floor(min_support * n))`
    FloorAtLeastOne,
}

impl Default for SupportRounding {
    fn default() -> Self {
        SupportRounding::FloorAtLeastOne
    }
}

impl SupportRounding {
    pub fn min_support_count(self, min_support: f64, num_transactions: usize) -> usize {
        let floored = (min_support * num_transactions as f64).floor() as usize;
        match self {
            SupportRounding::Floor => floored,
            SupportRounding::FloorAtLeastOne => floored.max(1),
        }
    }
}

pub(crate) fn validate_min_support(min_support: f64) -> Result<(), MiningError> {
    if min_support > 0.0 && min_support <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::bad_min_support(min_support))
    }
}

/// Mine every frequent itemset of `db` with the vertical tidlist Apriori.
///
/// The database is scanned exactly once, to build the inverted item->tidlist
/// index; all later support counts come from tidlist intersections. Levels
/// are mined in sequence until one comes up empty. The engine is a pure
/// function of its arguments and keeps no state across calls.
///
/// An empty database is not an error: it yields an empty result with zero
/// elapsed time. `min_support` outside `(0, 1]` fails before any scanning.
pub fn mine_frequent_itemsets(
    db: &TransactionDatabase,
    min_support: f64,
    rounding: SupportRounding,
) -> Result<MiningResult, MiningError> {
    validate_min_support(min_support)?;
    if db.is_empty() {
        return Ok(MiningResult::empty());
    }

    let started = Instant::now();
    let min_support_count = rounding.min_support_count(min_support, db.len());

    let mut itemsets = Vec::new();
    let mut size = 1;
    let mut level = frequent_1_itemsets(db, min_support_count);
    while !level.is_empty() {
        debug!("level {}: {} frequent itemsets", size, level.len());
        itemsets.extend(
            level
                .iter()
                .map(|(itemset, tidlist)| (itemset.clone(), tidlist.len() as u32)),
        );
        level = join::next_level(&level, min_support_count);
        size += 1;
    }

    Ok(MiningResult {
        itemsets,
        elapsed: started.elapsed(),
    })
}

/// Single pass over the database: record each transaction's tid against
/// every item it contains, then keep the items whose tidlists meet the
/// threshold as frequent level 1.
fn frequent_1_itemsets(db: &TransactionDatabase, min_support_count: usize) -> FrequentLevel {
    let mut index: HashMap<ItemId, TidList> = HashMap::with_capacity(db.num_items());
    for (tid, transaction) in db.iter().enumerate() {
        for &item in transaction {
            index.entry(item).or_insert_with(TidList::new).push(tid);
        }
    }

    index
        .into_iter()
        .filter(|(_, tidlist)| tidlist.len() >= min_support_count)
        .map(|(item, tidlist)| (vec![item], tidlist))
        .collect()
}
