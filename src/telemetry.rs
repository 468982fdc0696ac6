//! Telemetry sampling and the bounded usage window
//!
//! A background sampler polls an injected usage probe once per period and
//! feeds a fixed-capacity FIFO window of the most recent samples. Readers
//! (the `netstat` command) take a consistent snapshot of the latest sample
//! and the window in one lock. The sampler owns its timer task and aborts
//! it when stopped or dropped, so no timer outlives the session.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Default trailing-window capacity in samples
pub const DEFAULT_WINDOW_CAPACITY: usize = 10;

/// Zero-argument usage measurement source.
///
/// Readings are raw text and may be non-numeric; the window validates each
/// reading before recording it.
pub trait UsageProbe: Send {
    /// Take one raw usage reading
    fn sample(&mut self) -> String;
}

/// Probe yielding a fixed sequence of readings.
///
/// Once the sequence is exhausted every further reading is empty (and thus
/// discarded by validation), which makes the probe deterministic in tests.
#[derive(Debug, Clone)]
pub struct SequenceProbe {
    readings: Vec<String>,
    next: usize,
}

impl SequenceProbe {
    /// Create a probe from a sequence of raw readings
    pub fn new<I, S>(readings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            readings: readings.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl UsageProbe for SequenceProbe {
    fn sample(&mut self) -> String {
        let reading = self.readings.get(self.next).cloned().unwrap_or_default();
        if self.next < self.readings.len() {
            self.next += 1;
        }
        reading
    }
}

/// Simulated network-usage feed in whole kilobytes
pub struct SimulatedUsageProbe {
    rng: StdRng,
    ceiling: u32,
}

impl SimulatedUsageProbe {
    /// Create a probe with the default usage ceiling
    pub fn new() -> Self {
        Self::with_ceiling(512)
    }

    /// Create a probe reporting readings in `0..=ceiling` KB
    pub fn with_ceiling(ceiling: u32) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            ceiling,
        }
    }
}

impl Default for SimulatedUsageProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageProbe for SimulatedUsageProbe {
    fn sample(&mut self) -> String {
        self.rng.random_range(0..=self.ceiling).to_string()
    }
}

/// Fixed-capacity FIFO of the most recent usage samples
#[derive(Debug)]
pub struct TelemetryWindow {
    samples: VecDeque<f64>,
    latest: f64,
    capacity: usize,
}

impl TelemetryWindow {
    /// Create an empty window with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            latest: 0.0,
            capacity,
        }
    }

    /// Validate and record one raw reading.
    ///
    /// Non-numeric, non-finite, and negative readings are dropped without
    /// advancing the window. Returns whether the reading was recorded.
    pub fn record(&mut self, raw: &str) -> bool {
        let Some(value) = parse_usage(raw) else {
            return false;
        };
        self.push(value);
        true
    }

    /// Push a validated sample, evicting the oldest at capacity
    pub fn push(&mut self, sample: f64) {
        self.latest = sample;
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Most recently recorded sample (0 before the first reading)
    pub fn latest(&self) -> f64 {
        self.latest
    }

    /// Oldest-first snapshot of the window
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no sample has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples held
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Parse a raw probe reading into a usable sample
fn parse_usage(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Shared handle to the window; the sampler task writes, readers snapshot
pub type SharedTelemetry = Arc<Mutex<TelemetryWindow>>;

/// Create a shared window with the given capacity
pub fn shared_window(capacity: usize) -> SharedTelemetry {
    Arc::new(Mutex::new(TelemetryWindow::new(capacity)))
}

/// Lock a shared window, recovering the guard if a panic poisoned it
pub fn lock_window(window: &SharedTelemetry) -> MutexGuard<'_, TelemetryWindow> {
    window.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Periodic sampler driving a probe into a shared window
#[derive(Debug)]
pub struct TelemetrySampler {
    handle: JoinHandle<()>,
}

impl TelemetrySampler {
    /// Spawn the sampling task on the current tokio runtime.
    ///
    /// The first reading is taken one full period after spawn, then one per
    /// period. Invalid readings are discarded without advancing the window.
    pub fn spawn(
        mut probe: Box<dyn UsageProbe>,
        window: SharedTelemetry,
        period: Duration,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let raw = probe.sample();
                let recorded = lock_window(&window).record(&raw);
                if !recorded {
                    debug!("discarding invalid usage reading: {:?}", raw);
                }
            }
        });
        debug!("telemetry sampler started (period {:?})", period);
        Self { handle }
    }

    /// Check whether the sampling task is still alive
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancel the timer task. Idempotent.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for TelemetrySampler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
