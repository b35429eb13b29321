use std::time::Instant;

use log::debug;

use crate::database::TransactionDatabase;
use crate::encode::OneHotMatrix;
use crate::engine::{self, SupportRounding};
use crate::error::MiningError;
use crate::types::MiningResult;

/// Input handed to a mining strategy. The shape is strategy-specific:
/// the tidlist engine mines the transaction shape, library-backed peers
/// typically want the one-hot shape. Both carry the same content.
#[derive(Debug, Clone, Copy)]
pub enum MiningInput<'a> {
    Transactions(&'a TransactionDatabase),
    Encoded(&'a OneHotMatrix),
}

impl<'a> MiningInput<'a> {
    pub fn num_transactions(&self) -> usize {
        match self {
            MiningInput::Transactions(db) => db.len(),
            MiningInput::Encoded(matrix) => matrix.num_rows(),
        }
    }
}

/// One frequent-itemset mining algorithm behind a common contract.
///
/// `mine` takes the input and the minimum-support fraction as explicit
/// parameters and returns a [`MiningResult`] whose `elapsed` field covers
/// only the mining computation, not any data preparation done by the
/// caller. Implementations hold no mutable state, so one instance may be
/// reused across calls; library-backed implementations wrapping a
/// non-reentrant backend are the exception and must be serialized by the
/// caller.
pub trait MiningStrategy {
    fn mine(&self, input: &MiningInput, min_support: f64) -> Result<MiningResult, MiningError>;

    fn name(&self) -> &'static str;
}

/// The vertical tidlist Apriori (see [`crate::engine`]). Requires
/// transaction-shaped input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TidlistApriori {
    pub rounding: SupportRounding,
}

impl TidlistApriori {
    pub fn new(rounding: SupportRounding) -> Self {
        Self { rounding }
    }
}

impl MiningStrategy for TidlistApriori {
    fn mine(&self, input: &MiningInput, min_support: f64) -> Result<MiningResult, MiningError> {
        engine::validate_min_support(min_support)?;
        match input {
            MiningInput::Transactions(db) => {
                engine::mine_frequent_itemsets(db, min_support, self.rounding)
            }
            MiningInput::Encoded(_) => Err(MiningError::InvalidInput(
                "tidlist apriori mines transaction-shaped input, not a one-hot matrix".into(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "tidlist_apriori"
    }
}

/// Holds the active strategy and dispatches mining calls to it.
///
/// The strategy can be swapped between calls; the context is not meant to
/// be invoked concurrently. Timing lives inside the strategies, so the
/// context adds nothing to the measured interval beyond the dispatch
/// itself.
pub struct MiningContext {
    strategy: Box<dyn MiningStrategy>,
}

impl MiningContext {
    pub fn new(strategy: Box<dyn MiningStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn MiningStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn execute_mining(
        &self,
        input: &MiningInput,
        min_support: f64,
    ) -> Result<MiningResult, MiningError> {
        let dispatched = Instant::now();
        let result = self.strategy.mine(input, min_support)?;
        debug!(
            "{}: min_support={} -> {} itemsets in {:.4}s (dispatch overhead {:.4}s)",
            self.strategy.name(),
            min_support,
            result.len(),
            result.time_seconds(),
            dispatched.elapsed().as_secs_f64() - result.time_seconds(),
        );
        Ok(result)
    }
}
