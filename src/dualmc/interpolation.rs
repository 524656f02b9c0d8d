//! Dual vertex positioning.
//!
//! A dual point sits at the centroid of the iso crossings of the edges
//! named by its code: each flagged edge contributes the linearly
//! interpolated crossing point between its two corner samples, and the
//! accumulated offsets are averaged over the contributing edges (1 to
//! 4). This is the plain centroid rule, not a least-squares fit.

use glam::Vec3A;

use super::cell_code::corner_samples;
use crate::tables::{DualPointCode, CORNER_POSITIONS, EDGE_ENDPOINTS};
use crate::types::{Density, Vertex};
use crate::volume::VolumeView;

/// Compute the dual vertex of the cell at `(x, y, z)` for `point_code`.
///
/// The crossing fraction along an edge is
/// `(iso - lo) / (hi - lo)` in f32. When both straddling samples equal
/// the iso value the division produces an infinity or NaN, which is
/// propagated unguarded (inherited numeric contract).
pub fn dual_vertex(
  volume: &VolumeView,
  x: usize,
  y: usize,
  z: usize,
  iso: Density,
  point_code: DualPointCode,
) -> Vertex {
  let samples = corner_samples(volume, x, y, z);

  let mut sum = Vec3A::ZERO;
  let mut count = 0u32;

  for (edge, &[lo, hi]) in EDGE_ENDPOINTS.iter().enumerate() {
    if point_code & (1 << edge) == 0 {
      continue;
    }

    let s_lo = samples[lo] as f32;
    let s_hi = samples[hi] as f32;
    let t = (iso as f32 - s_lo) / (s_hi - s_lo);

    sum += CORNER_POSITIONS[lo].lerp(CORNER_POSITIONS[hi], t);
    count += 1;
  }

  let offset = sum / count as f32;
  let base = Vec3A::new(x as f32, y as f32, z as f32);
  let position = base + offset;

  Vertex {
    position: position.to_array(),
  }
}

#[cfg(test)]
#[path = "interpolation_test.rs"]
mod interpolation_test;
