//! Cell corner classification.
//!
//! The cell code is an 8-bit value where bit i indicates that corner i
//! of the 2×2×2 cell is inside the surface (`sample >= iso`).

use crate::tables::CORNER_OFFSETS;
use crate::types::Density;
use crate::volume::VolumeView;

/// Gather the 8 corner samples of the cell at `(x, y, z)`.
///
/// The cell coordinates must be in `[0, dim - 2]` per axis so that all
/// corners are in bounds.
#[inline]
pub fn corner_samples(volume: &VolumeView, x: usize, y: usize, z: usize) -> [Density; 8] {
  std::array::from_fn(|i| {
    let [dx, dy, dz] = CORNER_OFFSETS[i];
    volume.sample(x + dx, y + dy, z + dz)
  })
}

/// Build the cell code from 8 corner samples.
///
/// A bit is set when the corresponding sample is greater than or equal
/// to the iso value. The comparison is non-strict: of two adjacent
/// cells whose shared samples equal the iso value, both classify those
/// corners as inside.
#[cfg(not(feature = "simd"))]
#[inline]
pub fn cell_code_from_samples(samples: &[Density; 8], iso: Density) -> u8 {
  let mut code = 0u8;
  for (i, &sample) in samples.iter().enumerate() {
    if sample >= iso {
      code |= 1 << i;
    }
  }
  code
}

/// Build the cell code from 8 corner samples using portable SIMD.
///
/// Compares all 8 samples against the iso value simultaneously and
/// collapses the lane mask into the 8-bit cell code.
#[cfg(feature = "simd")]
#[inline]
pub fn cell_code_from_samples(samples: &[Density; 8], iso: Density) -> u8 {
  use std::simd::{cmp::SimdPartialOrd, u8x8};

  let simd_samples = u8x8::from_array(*samples);
  let iso = u8x8::splat(iso);

  let mask = simd_samples.simd_ge(iso);

  mask.to_bitmask() as u8
}

/// Classify the cell at `(x, y, z)` against the iso value.
#[inline]
pub fn cell_code(volume: &VolumeView, x: usize, y: usize, z: usize, iso: Density) -> u8 {
  cell_code_from_samples(&corner_samples(volume, x, y, z), iso)
}

#[cfg(test)]
#[path = "cell_code_test.rs"]
mod cell_code_test;
