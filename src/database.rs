use std::collections::HashMap;

use crate::encode::OneHotMatrix;
use crate::types::{ItemId, RawTransaction, ReverseLookup, Tid, Transaction};

/// An ordered, immutable transaction store with items interned to dense ids.
///
/// Transaction ids are positions: tid `i` is the `i`-th transaction handed to
/// [`from_raw`](TransactionDatabase::from_raw). Item ids are assigned in
/// first-appearance order and are dense in `[0, num_items)`. Each stored
/// transaction is a canonical itemset (ascending ids, no duplicates).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDatabase {
    transactions: Vec<Transaction>,
    labels: Vec<String>,
}

impl TransactionDatabase {
    /// Intern a sequence of raw transactions (sets of item labels).
    ///
    /// Set semantics come from the input type; repeated labels inside one
    /// raw transaction have already collapsed.
    pub fn from_raw(raw_transactions: &[RawTransaction]) -> Self {
        let mut reverse_lookup: ReverseLookup = HashMap::new();
        let mut labels: Vec<String> = Vec::new();

        let transactions = raw_transactions
            .iter()
            .map(|raw_transaction| {
                let mut transaction: Transaction = raw_transaction
                    .iter()
                    .map(|&name| {
                        *reverse_lookup.entry(name).or_insert_with(|| {
                            labels.push(name.to_string());
                            labels.len() - 1
                        })
                    })
                    .collect();
                transaction.sort_unstable();
                transaction
            })
            .collect();

        Self {
            transactions,
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of distinct items across the whole database.
    pub fn num_items(&self) -> usize {
        self.labels.len()
    }

    pub fn transaction(&self, tid: Tid) -> Option<&Transaction> {
        self.transactions.get(tid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn label(&self, item: ItemId) -> Option<&str> {
        self.labels.get(item).map(String::as_str)
    }

    /// Map a canonical itemset back to its item labels.
    pub fn decode(&self, itemset: &[ItemId]) -> Vec<&str> {
        itemset
            .iter()
            .filter_map(|&item| self.label(item))
            .collect()
    }

    /// One-hot presence matrix with the same content: rows follow tid order,
    /// columns are the dense item ids.
    pub fn one_hot(&self) -> OneHotMatrix {
        OneHotMatrix::from_database(self)
    }

    /// Brute-force support count of an itemset, by scanning every
    /// transaction. The mining engine never does this; it exists as the
    /// ground truth for verification.
    pub fn scan_support(&self, itemset: &[ItemId]) -> u32 {
        self.transactions
            .iter()
            .filter(|transaction| {
                itemset
                    .iter()
                    .all(|item| transaction.binary_search(item).is_ok())
            })
            .count() as u32
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashset;

    #[test]
    fn interns_items_densely_in_first_appearance_order() {
        let raw = vec![hashset!["bread"], hashset!["bread"], hashset!["milk"]];
        let db = TransactionDatabase::from_raw(&raw);

        assert_eq!(db.len(), 3);
        assert_eq!(db.num_items(), 2);
        assert_eq!(db.label(0), Some("bread"));
        assert_eq!(db.label(1), Some("milk"));
        assert_eq!(db.label(2), None);
    }

    #[test]
    fn transactions_are_canonical() {
        let raw = vec![hashset!["milk", "bread", "eggs"]];
        let db = TransactionDatabase::from_raw(&raw);

        let transaction = db.transaction(0).unwrap();
        assert_eq!(transaction.len(), 3);
        assert!(transaction.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn decode_round_trips_labels() {
        let raw = vec![hashset!["bread", "milk"], hashset!["milk", "diaper"]];
        let db = TransactionDatabase::from_raw(&raw);

        let itemset = db.transaction(1).unwrap().clone();
        let mut names = db.decode(&itemset);
        names.sort_unstable();
        assert_eq!(names, vec!["diaper", "milk"]);
    }

    #[test]
    fn scan_support_counts_superset_transactions() {
        let raw = vec![
            hashset!["bread", "milk"],
            hashset!["bread"],
            hashset!["milk"],
            hashset!["bread", "milk", "eggs"],
        ];
        let db = TransactionDatabase::from_raw(&raw);
        let milk = (0..db.num_items())
            .find(|&item| db.label(item) == Some("milk"))
            .unwrap();

        let both = db.transaction(0).unwrap().clone();
        assert_eq!(db.scan_support(&both), 2);
        assert_eq!(db.scan_support(&[milk]), 3);
        assert_eq!(db.scan_support(&[]), 4);
    }

    #[test]
    fn empty_database() {
        let db = TransactionDatabase::from_raw(&[]);
        assert!(db.is_empty());
        assert_eq!(db.num_items(), 0);
    }
}
