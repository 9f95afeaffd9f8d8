use crate::search::FailureReason;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Number of budget checks between two memory samples.
const MEMORY_SAMPLE_INTERVAL: usize = 1024;

/// A budget wrapped around a search loop. The engines call
/// [`TerminationCondition::should_terminate`] once per expansion.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    node_limit: Option<usize>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    checks: usize,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl TerminationCondition {
    pub fn new(
        time_limit: Option<Duration>,
        node_limit: Option<usize>,
        memory_limit_mb: Option<usize>,
    ) -> Self {
        if time_limit.is_some() || node_limit.is_some() || memory_limit_mb.is_some() {
            info!(
                time_limit = time_limit.map(|d| d.as_secs_f64()),
                node_limit = node_limit,
                memory_limit_mb = memory_limit_mb,
                "search budget"
            );
        } else {
            debug!("unbounded search");
        }
        Self {
            time_limit,
            node_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            checks: 0,
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None, None, None)
    }

    pub fn with_node_limit(node_limit: usize) -> Self {
        Self::new(None, Some(node_limit), None)
    }

    pub fn with_time_limit(time_limit: Duration) -> Self {
        Self::new(Some(time_limit), None, None)
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn sample_memory(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    pub fn log(&mut self) {
        let memory_usage = self.sample_memory();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
            "resource usage"
        );
    }

    pub fn finalise(&mut self) {
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
            "search budget released"
        );
    }

    /// Check the budget after `expanded_nodes` expansions.
    pub fn should_terminate(&mut self, expanded_nodes: usize) -> Option<FailureReason> {
        self.checks += 1;
        self.log_if_needed();

        if let Some(node_limit) = self.node_limit {
            if expanded_nodes >= node_limit {
                return Some(FailureReason::NodeLimitExceeded);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(FailureReason::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            if self.checks % MEMORY_SAMPLE_INTERVAL == 1 {
                self.sample_memory();
            }
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(FailureReason::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}
