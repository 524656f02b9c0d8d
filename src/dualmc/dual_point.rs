//! Dual point code resolution.
//!
//! Every cell configuration owns up to 4 dual points, each identified
//! by the mask of cube edges its surface patch crosses. Resolution maps
//! a (cell, edge) request to the one dual point whose patch contains
//! that edge.
//!
//! This is also where the manifold correction lives. The problematic
//! C16/C19 configurations carry exactly one ambiguous face, and their
//! single patch owns all 4 crossed edges of it; two such cells meeting
//! at that face would put 4 quads on one mesh edge. When the neighbor
//! cube across the ambiguous face is problematic as well, the cell code
//! is inverted before the table lookup, splitting the patch into the
//! complement configuration's separated caps. Inverting both halves of
//! such a pair keeps the mesh 2-manifold, at the cost of exact dualism
//! to marching cubes.

use super::cell_code::cell_code;
use crate::tables::{AMBIGUOUS_FACES, DUAL_POINTS_LIST, NO_AMBIGUOUS_FACE};
use crate::types::Density;
use crate::volume::VolumeView;

/// Re-exported code type; see [`crate::tables`].
pub use crate::tables::DualPointCode;

/// Apply the manifold correction to a cell code if needed.
///
/// Returns the (possibly inverted) cell code to use for the dual point
/// lookup. When the neighbor across the ambiguous face falls outside
/// the valid cell range the correction is skipped, which can leave a
/// non-manifold seam at the volume boundary (known limitation inherited
/// from the algorithm).
fn manifold_cell_code(
  volume: &VolumeView,
  x: usize,
  y: usize,
  z: usize,
  iso: Density,
  code: u8,
) -> u8 {
  let direction = AMBIGUOUS_FACES[code as usize];
  if direction == NO_AMBIGUOUS_FACE {
    return code;
  }

  let axis = (direction >> 1) as usize;
  let delta: isize = if direction & 1 == 1 { 1 } else { -1 };

  let mut neighbor = [x as isize, y as isize, z as isize];
  neighbor[axis] += delta;

  // The neighbor must itself be a classifiable cell.
  if neighbor[axis] < 0 || neighbor[axis] >= volume.dims()[axis] as isize - 1 {
    return code;
  }

  let neighbor_code = cell_code(
    volume,
    neighbor[0] as usize,
    neighbor[1] as usize,
    neighbor[2] as usize,
    iso,
  );

  // C16 and C19 have exactly one ambiguous face, so a problematic
  // neighbor is guaranteed to share it with us.
  if AMBIGUOUS_FACES[neighbor_code as usize] != NO_AMBIGUOUS_FACE {
    code ^ 0xFF
  } else {
    code
  }
}

/// Resolve the dual point of the cell at `(x, y, z)` that owns `edge`.
///
/// Returns the 12-bit dual point code, or 0 when the requested edge is
/// not crossed in this cell's configuration (an out-of-topology request
/// degenerates silently).
pub fn dual_point_code(
  volume: &VolumeView,
  x: usize,
  y: usize,
  z: usize,
  iso: Density,
  edge: DualPointCode,
  manifold: bool,
) -> DualPointCode {
  let mut code = cell_code(volume, x, y, z, iso);

  if manifold {
    code = manifold_cell_code(volume, x, y, z, iso, code);
  }

  for &point_code in &DUAL_POINTS_LIST[code as usize] {
    if point_code & edge != 0 {
      return point_code;
    }
  }

  0
}

#[cfg(test)]
#[path = "dual_point_test.rs"]
mod dual_point_test;
