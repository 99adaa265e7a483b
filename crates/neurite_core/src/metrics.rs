//! Run counters and logging setup.
//!
//! Tracks how much propagation work the population does per tick and how the
//! population fares per generation.

use crate::agent::PropagationStats;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters for a running host.
pub struct Metrics {
    tick_count: AtomicU64,
    generation_count: AtomicU64,
    neurons_walked: AtomicU64,
    connections_refreshed: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            generation_count: AtomicU64::new(0),
            neurons_walked: AtomicU64::new(0),
            connections_refreshed: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records one tick's summed propagation work across the population.
    pub fn record_tick(&self, stats: PropagationStats, agents: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.neurons_walked
            .fetch_add(stats.roots as u64, Ordering::Relaxed);
        self.connections_refreshed
            .fetch_add(stats.refreshed as u64, Ordering::Relaxed);

        tracing::trace!(
            tick,
            agents,
            roots = stats.roots,
            refreshed = stats.refreshed,
            "Tick propagated"
        );
    }

    /// Records a generation boundary.
    pub fn record_generation(&self, survivors: usize, population: usize, duration: Duration) {
        let generation = self.generation_count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(
            generation,
            survivors,
            population,
            duration_ms = duration.as_millis() as u64,
            "Generation complete"
        );
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn generation_count(&self) -> u64 {
        self.generation_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn neurons_walked(&self) -> u64 {
        self.neurons_walked.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn connections_refreshed(&self) -> u64 {
        self.connections_refreshed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG`; falls back to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.generation_count(), 0);
    }

    #[test]
    fn test_record_tick_accumulates() {
        let metrics = Metrics::new();
        metrics.record_tick(
            PropagationStats {
                roots: 19,
                refreshed: 4,
            },
            1,
        );
        metrics.record_tick(
            PropagationStats {
                roots: 19,
                refreshed: 1,
            },
            1,
        );
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.neurons_walked(), 38);
        assert_eq!(metrics.connections_refreshed(), 5);
    }

    #[test]
    fn test_record_generation() {
        let metrics = Metrics::new();
        metrics.record_generation(3, 10, Duration::from_millis(5));
        assert_eq!(metrics.generation_count(), 1);
    }
}
