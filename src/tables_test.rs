use super::*;

/// Corner coordinates from the corner index.
fn corner_pos(i: usize) -> [usize; 3] {
  [i & 1, (i >> 1) & 1, (i >> 2) & 1]
}

/// Edge mask a configuration crosses, from first principles: an edge
/// crosses the surface when its endpoints classify differently.
fn crossed_edges(config: usize) -> DualPointCode {
  let mut mask = 0;
  for (edge, &[a, b]) in EDGE_ENDPOINTS.iter().enumerate() {
    if (config >> a) & 1 != (config >> b) & 1 {
      mask |= 1 << edge;
    }
  }
  mask
}

/// The 4 edges lying on the face perpendicular to `axis` at `side`.
fn face_edges(axis: usize, side: usize) -> DualPointCode {
  let mut mask: DualPointCode = 0;
  for (edge, &[a, b]) in EDGE_ENDPOINTS.iter().enumerate() {
    if corner_pos(a)[axis] == side && corner_pos(b)[axis] == side {
      mask |= 1 << edge;
    }
  }
  assert_eq!(mask.count_ones(), 4);
  mask
}

/// A face is ambiguous when exactly its two diagonal corners are inside.
fn is_ambiguous_face(config: usize, axis: usize, side: usize) -> bool {
  let inside: Vec<[usize; 3]> = (0..8)
    .filter(|&i| corner_pos(i)[axis] == side && (config >> i) & 1 == 1)
    .map(corner_pos)
    .collect();
  inside.len() == 2
    && inside[0]
      .iter()
      .zip(inside[1].iter())
      .filter(|(a, b)| a != b)
      .count()
      == 2
}

#[test]
fn test_corner_constants_consistent() {
  for i in 0..8 {
    assert_eq!(CORNER_OFFSETS[i], corner_pos(i));
    let p = CORNER_POSITIONS[i].to_array();
    for axis in 0..3 {
      assert_eq!(p[axis], CORNER_OFFSETS[i][axis] as f32);
    }
  }
}

#[test]
fn test_edge_endpoints_are_cube_edges() {
  for &[lo, hi] in &EDGE_ENDPOINTS {
    assert!(lo < hi, "endpoints must be ordered low to high");
    let differing = corner_pos(lo)
      .iter()
      .zip(corner_pos(hi).iter())
      .filter(|(a, b)| a != b)
      .count();
    assert_eq!(differing, 1, "edge [{}, {}] is not axis-aligned", lo, hi);
  }
}

#[test]
fn test_dual_points_partition_crossed_edges() {
  for config in 0..256usize {
    let expected = crossed_edges(config);

    let mut union = 0;
    let mut terminated = false;
    for &code in &DUAL_POINTS_LIST[config] {
      if code == 0 {
        terminated = true;
        continue;
      }
      assert!(!terminated, "config {}: non-zero code after padding", config);
      assert_eq!(union & code, 0, "config {}: codes overlap", config);
      union |= code;
    }

    assert_eq!(
      union, expected,
      "config {}: dual points do not cover the crossed edges",
      config
    );
  }
}

#[test]
fn test_every_crossed_edge_has_one_owner() {
  // The resolver contract: scanning for any crossed edge finds exactly
  // one dual point.
  for config in 0..256usize {
    for edge in 0..12 {
      let bit = 1 << edge;
      let owners = DUAL_POINTS_LIST[config]
        .iter()
        .filter(|&&code| code & bit != 0)
        .count();
      let expected = usize::from(crossed_edges(config) & bit != 0);
      assert_eq!(owners, expected, "config {} edge {}", config, edge);
    }
  }
}

#[test]
fn test_complement_configs_cross_same_edges() {
  for config in 0..256usize {
    assert_eq!(crossed_edges(config), crossed_edges(config ^ 0xFF));
    let union = |c: usize| DUAL_POINTS_LIST[c].iter().fold(0, |acc, &m| acc | m);
    assert_eq!(union(config), union(config ^ 0xFF), "config {}", config);
  }
}

#[test]
fn test_homogeneous_configs_have_no_dual_points() {
  assert_eq!(DUAL_POINTS_LIST[0], [0; 4]);
  assert_eq!(DUAL_POINTS_LIST[255], [0; 4]);
}

#[test]
fn test_single_corner_configs() {
  // A lone inside corner produces one dual point crossing its 3 edges.
  for corner in 0..8usize {
    let config = 1 << corner;
    let row = DUAL_POINTS_LIST[config];
    assert_eq!(row[0].count_ones(), 3, "corner {}", corner);
    assert_eq!(row[1], 0);
    assert_eq!(row[0], crossed_edges(config));
  }

  assert_eq!(DUAL_POINTS_LIST[1][0], EDGE0 | EDGE3 | EDGE8);
  assert_eq!(DUAL_POINTS_LIST[2][0], EDGE0 | EDGE1 | EDGE9);
  assert_eq!(DUAL_POINTS_LIST[4][0], EDGE4 | EDGE7 | EDGE8);
  assert_eq!(DUAL_POINTS_LIST[128][0], EDGE5 | EDGE6 | EDGE10);
}

#[test]
fn test_face_diagonal_configs_are_separated() {
  // Two inside corners diagonal on the Z=0 face stay two caps.
  let config = 0b0000_1001;
  let mut codes: Vec<DualPointCode> = DUAL_POINTS_LIST[config]
    .iter()
    .copied()
    .filter(|&c| c != 0)
    .collect();
  codes.sort_unstable();
  assert_eq!(
    codes,
    vec![EDGE0 | EDGE3 | EDGE8, EDGE4 | EDGE5 | EDGE9]
  );
}

#[test]
fn test_ambiguous_face_table_flags() {
  let mut flagged = 0;
  for config in 0..256usize {
    let direction = AMBIGUOUS_FACES[config];
    if direction == NO_AMBIGUOUS_FACE {
      continue;
    }
    flagged += 1;

    assert!(direction < 6, "config {}: bad direction {}", config, direction);
    let axis = (direction >> 1) as usize;
    let side = (direction & 1) as usize;

    // The flagged face is the configuration's single ambiguous face.
    assert!(is_ambiguous_face(config, axis, side), "config {}", config);
    let ambiguous_count: usize = (0..3)
      .map(|a| (0..2).filter(|&s| is_ambiguous_face(config, a, s)).count())
      .sum();
    assert_eq!(ambiguous_count, 1, "config {}", config);

    // One patch owns all 4 crossed edges of that face; inverting
    // splits it, so the inverted configuration must be unflagged.
    let face = face_edges(axis, side);
    let owners = DUAL_POINTS_LIST[config]
      .iter()
      .filter(|&&code| code & face == face)
      .count();
    assert_eq!(owners, 1, "config {}", config);
    assert_eq!(AMBIGUOUS_FACES[config ^ 0xFF], NO_AMBIGUOUS_FACE);

    let inverted_owners = DUAL_POINTS_LIST[config ^ 0xFF]
      .iter()
      .filter(|&&code| code & face == face)
      .count();
    assert_eq!(inverted_owners, 0, "config {}: inversion must split", config);

    // C16 has 5 inside corners, C19 has 6.
    let bits = (config as u8).count_ones();
    assert!(bits == 5 || bits == 6, "config {}", config);
  }

  assert_eq!(flagged, 36, "24 C16 + 12 C19 configurations");
}

#[test]
fn test_unflagged_configs_never_own_a_whole_ambiguous_face() {
  // The flag criterion is exact: no unflagged configuration has a
  // patch covering all 4 crossed edges of an ambiguous face.
  for config in 0..256usize {
    if AMBIGUOUS_FACES[config] != NO_AMBIGUOUS_FACE {
      continue;
    }
    for axis in 0..3 {
      for side in 0..2 {
        if !is_ambiguous_face(config, axis, side) {
          continue;
        }
        let face = face_edges(axis, side);
        let owners = DUAL_POINTS_LIST[config]
          .iter()
          .filter(|&&code| code & face == face)
          .count();
        assert_eq!(owners, 0, "config {} face {}/{}", config, axis, side);
      }
    }
  }
}

#[test]
fn test_edge_quad_cells_geometry() {
  // Each gather entry must name the cube edge that coincides with the
  // shared grid edge as seen from the offset cell.
  for axis in 0..3usize {
    let u = (axis + 1) % 3;
    let v = (axis + 2) % 3;

    for &(offset, code) in &EDGE_QUAD_CELLS[axis] {
      assert_eq!(code.count_ones(), 1);
      let edge = code.trailing_zeros() as usize;
      let [lo, hi] = EDGE_ENDPOINTS[edge];

      // The edge runs along `axis`.
      assert_eq!(corner_pos(lo)[axis], 0);
      assert_eq!(corner_pos(hi)[axis], 1);

      // Offsets stay within the 4 cells behind the edge.
      assert_eq!(offset[axis], 0);
      assert!(offset[u] == 0 || offset[u] == -1);
      assert!(offset[v] == 0 || offset[v] == -1);

      // Stepping back by the offset lands the edge at the matching
      // transverse position inside that cell.
      assert_eq!(corner_pos(lo)[u] as isize, -offset[u]);
      assert_eq!(corner_pos(lo)[v] as isize, -offset[v]);
    }
  }
}
