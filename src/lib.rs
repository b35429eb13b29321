//! Frequent-itemset mining with swappable strategies.
//!
//! The core is a vertical (tidlist) Apriori: the database is scanned once
//! into an inverted item -> tidlist index, and every later support count is
//! a tidlist intersection instead of a rescan. Candidate k-itemsets come
//! from a canonical prefix-join over the frequent (k-1)-itemsets, pruned by
//! antimonotonicity.
//!
//! Algorithms sit behind the [`MiningStrategy`] trait and are dispatched
//! through a [`MiningContext`]; [`run_comparison`] drives a set of
//! strategies across a descending sequence of support thresholds and
//! tabulates times, itemset counts and size histograms.

pub mod compare;
pub mod database;
pub mod encode;
pub mod engine;
pub mod error;
pub mod strategy;
pub mod types;

pub use compare::{run_comparison, ComparisonReport, StrategyReport, ThresholdRun};
pub use database::TransactionDatabase;
pub use encode::OneHotMatrix;
pub use engine::{mine_frequent_itemsets, SupportRounding};
pub use error::MiningError;
pub use strategy::{MiningContext, MiningInput, MiningStrategy, TidlistApriori};
pub use types::{ItemId, Itemset, MiningResult, SupportCount, Tid, TidList};
