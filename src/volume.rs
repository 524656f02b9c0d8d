//! Borrowed view over a caller-owned density volume.
//!
//! The algorithm never owns or mutates the grid; it reads through a
//! [`VolumeView`] that validates dimensions and buffer size once at
//! construction so that the extraction code itself stays infallible.
//!
//! # Memory Layout
//!
//! Samples are linearized as `index = x + dx * (y + dy * z)`: X is the
//! minor axis, Z the major one.

use core::fmt;

use crate::types::Density;

/// Errors detected when wrapping a density buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeError {
  /// A dimension is below the 2-sample minimum needed to form a cell.
  DimensionTooSmall {
    /// Axis index (0 = x, 1 = y, 2 = z).
    axis: usize,
    /// The offending dimension.
    dim: usize,
  },
  /// The buffer length does not match `dims[0] * dims[1] * dims[2]`.
  BufferSizeMismatch {
    /// Expected sample count.
    expected: usize,
    /// Provided sample count.
    provided: usize,
  },
}

impl fmt::Display for VolumeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VolumeError::DimensionTooSmall { axis, dim } => {
        write!(f, "dimension {} on axis {} is below the minimum of 2", dim, axis)
      }
      VolumeError::BufferSizeMismatch { expected, provided } => {
        write!(
          f,
          "buffer holds {} samples but dimensions require {}",
          provided, expected
        )
      }
    }
  }
}

impl std::error::Error for VolumeError {}

/// Immutable view over a density grid.
#[derive(Clone, Copy, Debug)]
pub struct VolumeView<'a> {
  data: &'a [Density],
  dims: [usize; 3],
}

impl<'a> VolumeView<'a> {
  /// Wrap a density buffer of `dims[0] * dims[1] * dims[2]` samples.
  pub fn new(data: &'a [Density], dims: [usize; 3]) -> Result<Self, VolumeError> {
    for (axis, &dim) in dims.iter().enumerate() {
      if dim < 2 {
        return Err(VolumeError::DimensionTooSmall { axis, dim });
      }
    }

    let expected = dims[0] * dims[1] * dims[2];
    if data.len() != expected {
      return Err(VolumeError::BufferSizeMismatch {
        expected,
        provided: data.len(),
      });
    }

    Ok(Self { data, dims })
  }

  /// Grid dimensions in samples per axis.
  #[inline]
  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  /// Linearized sample index for `(x, y, z)`.
  #[inline]
  pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
    x + self.dims[0] * (y + self.dims[1] * z)
  }

  /// Sample at `(x, y, z)`. Coordinates must be in bounds.
  #[inline]
  pub fn sample(&self, x: usize, y: usize, z: usize) -> Density {
    self.data[self.index(x, y, z)]
  }

  /// Number of cells per axis that the quad-emission loop visits.
  /// Cells in the outermost layer never own a crossing because one of
  /// the 4 cells around their edges would fall outside the grid.
  #[inline]
  pub fn reduced_dims(&self) -> [usize; 3] {
    [
      self.dims[0].saturating_sub(2),
      self.dims[1].saturating_sub(2),
      self.dims[2].saturating_sub(2),
    ]
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
