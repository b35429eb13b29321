use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::MiningError;
use crate::strategy::{MiningContext, MiningInput, MiningStrategy};

/// One mining run: a strategy at one support threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdRun {
    pub min_support: f64,
    pub time_seconds: f64,
    pub itemset_count: usize,
    /// Count of mined itemsets grouped by cardinality.
    pub size_histogram: BTreeMap<usize, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    pub strategy: String,
    /// One run per threshold, in threshold order.
    pub runs: Vec<ThresholdRun>,
}

/// Tabular comparison artifact: one row per support threshold and, per
/// strategy, a time column and an itemset-count column. Only raw per-run
/// numbers are recorded; speedup ratios are for downstream to derive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub min_supports: Vec<f64>,
    pub strategies: Vec<StrategyReport>,
}

/// Run every strategy over every threshold of a descending sequence.
///
/// Each strategy is installed into one [`MiningContext`] in turn and driven
/// across the whole threshold sequence before the next strategy is swapped
/// in, so library-backed strategies are never invoked concurrently. All runs
/// of one comparison see the same input content, which is what makes the
/// recorded numbers comparable.
pub fn run_comparison(
    entries: Vec<(Box<dyn MiningStrategy>, MiningInput)>,
    min_supports: &[f64],
) -> Result<ComparisonReport, MiningError> {
    if !min_supports.windows(2).all(|pair| pair[0] > pair[1]) {
        return Err(MiningError::InvalidInput(
            "min_support thresholds must be strictly descending".into(),
        ));
    }

    let mut strategies = Vec::with_capacity(entries.len());
    let mut entries = entries.into_iter();

    if let Some((first_strategy, first_input)) = entries.next() {
        let mut context = MiningContext::new(first_strategy);
        let mut input = first_input;
        loop {
            debug!("comparing {} over {:?}", context.strategy_name(), min_supports);
            let mut runs = Vec::with_capacity(min_supports.len());
            for &min_support in min_supports {
                let result = context.execute_mining(&input, min_support)?;
                runs.push(ThresholdRun {
                    min_support,
                    time_seconds: result.time_seconds(),
                    itemset_count: result.len(),
                    size_histogram: result.size_histogram(),
                });
            }
            strategies.push(StrategyReport {
                strategy: context.strategy_name().to_string(),
                runs,
            });

            match entries.next() {
                Some((next_strategy, next_input)) => {
                    context.set_strategy(next_strategy);
                    input = next_input;
                }
                None => break,
            }
        }
    }

    Ok(ComparisonReport {
        min_supports: min_supports.to_vec(),
        strategies,
    })
}

impl ComparisonReport {
    /// Column names of the tabular form.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec!["min_support".to_string()];
        for report in &self.strategies {
            columns.push(format!("{}_time_seconds", report.strategy));
            columns.push(format!("{}_itemset_count", report.strategy));
        }
        columns
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.min_supports
            .iter()
            .enumerate()
            .map(|(row, &min_support)| {
                let mut cells = vec![format!("{}", min_support)];
                for report in &self.strategies {
                    let run = &report.runs[row];
                    cells.push(format!("{:.6}", run.time_seconds));
                    cells.push(format!("{}", run.itemset_count));
                }
                cells
            })
            .collect()
    }

    pub fn to_csv(&self) -> String {
        let mut out = self.columns().join(",");
        out.push('\n');
        for row in self.rows() {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let columns = self.columns();
        let rows = self.rows();
        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                rows.iter()
                    .map(|row| row[i].len())
                    .chain(std::iter::once(column.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (i, column) in columns.iter().enumerate() {
            write!(f, "{:>width$}  ", column, width = widths[i])?;
        }
        writeln!(f)?;
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                write!(f, "{:>width$}  ", cell, width = widths[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
