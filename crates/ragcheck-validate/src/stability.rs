//! Pipeline determinism checks via repeated execution.

use tracing::{debug, info};

use ragcheck_core::error::{Error, Result};

use crate::executor::QueryExecutor;
use crate::report::StabilityReport;
use crate::stats;

/// Repeats one query and checks result-set determinism plus timing
/// variance. Each run is a full embed+search on purpose: caching would
/// hide exactly the non-determinism this is meant to surface.
pub struct StabilityChecker<'a> {
    executor: &'a QueryExecutor,
}

impl<'a> StabilityChecker<'a> {
    pub fn new(executor: &'a QueryExecutor) -> Self {
        Self { executor }
    }

    pub fn run_stability_check(
        &self,
        query_text: &str,
        runs: usize,
        top_k: Option<usize>,
    ) -> Result<StabilityReport> {
        if runs == 0 {
            return Err(Error::InvalidInput("at least one run is required".to_string()));
        }

        let mut results = Vec::with_capacity(runs);
        let mut retrieval_times = Vec::with_capacity(runs);
        for run in 0..runs {
            debug!(run = run + 1, runs, "stability run");
            let result = self.executor.execute(query_text, top_k)?;
            retrieval_times.push(result.retrieval_time_ms);
            results.push(result);
        }

        // Order-sensitive equality against the first run, not set equality:
        // a reshuffled ranking counts as inconsistent.
        let first_ids = results[0].chunk_ids();
        let consistent_results = results[1..].iter().all(|r| r.chunk_ids() == first_ids);

        let avg_retrieval_time_ms = stats::mean(&retrieval_times);
        let time_std_dev = stats::std_dev(&retrieval_times);
        let time_coefficient_of_variation = if avg_retrieval_time_ms > 0.0 {
            time_std_dev / avg_retrieval_time_ms
        } else {
            0.0
        };

        info!(
            consistent = consistent_results,
            avg_ms = avg_retrieval_time_ms,
            cv = time_coefficient_of_variation,
            "stability check complete"
        );

        Ok(StabilityReport {
            query: query_text.to_string(),
            runs,
            consistent_results,
            avg_retrieval_time_ms,
            time_std_dev,
            time_coefficient_of_variation,
            retrieval_times,
        })
    }
}
