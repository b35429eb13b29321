use thiserror::Error;

/// Errors surfaced by mining strategies and the comparison harness.
///
/// Empty databases and empty result sets are not errors; they produce an
/// empty [`MiningResult`](crate::MiningResult). Mining is deterministic, so
/// nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum MiningError {
    /// `min_support` outside `(0, 1]`, input data of the wrong shape for the
    /// selected strategy, or a malformed threshold sequence.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A library-backed strategy's backing implementation is absent. The
    /// tidlist engine has no external backing and never raises this.
    #[error("mining backend `{0}` is not available")]
    DependencyUnavailable(&'static str),
}

impl MiningError {
    pub(crate) fn bad_min_support(min_support: f64) -> Self {
        MiningError::InvalidInput(format!(
            "min_support must be in (0, 1], got {}",
            min_support
        ))
    }
}
