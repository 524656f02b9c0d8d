//! Engine-agnostic metrics collection for mesh extraction.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when
//! disabled.
//!
//! # Usage
//!
//! ```ignore
//! use voxel_dualmc::metrics::{ExtractionMetrics, Stopwatch, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! let mut metrics = ExtractionMetrics::new();
//!
//! let watch = Stopwatch::start();
//! let output = voxel_dualmc::extract(&volume, &config);
//! metrics.record_extraction(&output, watch.elapsed_us());
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

use web_time::Instant;

use crate::types::MeshOutput;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and
/// runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Monotonic timer for measuring extraction durations.
/// Uses `web_time::Instant`, which also works on WASM targets.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
  start: Instant,
}

impl Stopwatch {
  /// Start timing now.
  pub fn start() -> Self {
    Self {
      start: Instant::now(),
    }
  }

  /// Microseconds elapsed since [`Stopwatch::start`].
  pub fn elapsed_us(&self) -> u64 {
    self.start.elapsed().as_micros() as u64
  }
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow {
  buffer: VecDeque<u64>,
  capacity: usize,
}

impl RollingWindow {
  /// Create a new rolling window with the given capacity.
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: u64) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  /// Get the number of values in the window.
  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  /// Check if the window is empty.
  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  /// Clear all values.
  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Compute the average of all values.
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.buffer.iter().sum::<u64>() as f64 / self.buffer.len() as f64
    }
  }

  /// Get min and max values.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    if self.buffer.is_empty() {
      None
    } else {
      let min = *self.buffer.iter().min().unwrap();
      let max = *self.buffer.iter().max().unwrap();
      Some((min, max))
    }
  }
}

impl Default for RollingWindow {
  fn default() -> Self {
    Self::new(128)
  }
}

/// Statistics accumulated across extraction calls.
#[derive(Debug, Clone)]
pub struct ExtractionMetrics {
  /// Rolling window of extraction times in microseconds.
  pub extract_timings: RollingWindow,
  /// Last extraction time in microseconds.
  pub last_extract_us: u64,
  /// Vertices emitted by the last extraction.
  pub last_vertices: u64,
  /// Quads emitted by the last extraction.
  pub last_quads: u64,
  /// Total vertices emitted this session.
  pub total_vertices: u64,
  /// Total quads emitted this session.
  pub total_quads: u64,
  /// Total extractions this session.
  pub total_extractions: u64,
}

impl Default for ExtractionMetrics {
  fn default() -> Self {
    Self {
      extract_timings: RollingWindow::new(128),
      last_extract_us: 0,
      last_vertices: 0,
      last_quads: 0,
      total_vertices: 0,
      total_quads: 0,
      total_extractions: 0,
    }
  }
}

impl ExtractionMetrics {
  /// Create new metrics with default values.
  pub fn new() -> Self {
    Self::default()
  }

  /// Reset all metrics to zero.
  pub fn reset(&mut self) {
    *self = Self::default();
  }

  /// Record one extraction result and its timing.
  pub fn record_extraction(&mut self, output: &MeshOutput, timing_us: u64) {
    if !is_enabled() {
      return;
    }

    self.extract_timings.push(timing_us);
    self.last_extract_us = timing_us;
    self.last_vertices = output.vertices.len() as u64;
    self.last_quads = output.quads.len() as u64;
    self.total_vertices += self.last_vertices;
    self.total_quads += self.last_quads;
    self.total_extractions += 1;
  }

  /// Get average extraction timing in microseconds.
  pub fn avg_extract_timing_us(&self) -> f64 {
    self.extract_timings.average()
  }
}
