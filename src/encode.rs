use bitvec::prelude::*;

use crate::database::TransactionDatabase;
use crate::types::{ItemId, Itemset, Tid};

/// One-hot presence matrix over a transaction database.
///
/// Rows follow tid order, columns are the dense item ids, a set bit means the
/// item occurs in the transaction. Library-backed strategies consume this
/// shape; it carries exactly the same content as the database it was built
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotMatrix {
    rows: Vec<BitVec<usize, Lsb0>>,
    num_items: usize,
}

impl OneHotMatrix {
    pub fn from_database(db: &TransactionDatabase) -> Self {
        let num_items = db.num_items();
        let rows = db
            .iter()
            .map(|transaction| {
                let mut row = bitvec![usize, Lsb0; 0; num_items];
                for &item in transaction {
                    row.set(item, true);
                }
                row
            })
            .collect();

        Self { rows, num_items }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, tid: Tid, item: ItemId) -> bool {
        self.rows
            .get(tid)
            .map(|row| item < self.num_items && row[item])
            .unwrap_or(false)
    }

    /// Canonical itemset of one row.
    pub fn row_items(&self, tid: Tid) -> Option<Itemset> {
        self.rows
            .get(tid)
            .map(|row| (0..self.num_items).filter(|&item| row[item]).collect())
    }
}
