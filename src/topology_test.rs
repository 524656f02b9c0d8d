use super::*;
use crate::types::{MeshOutput, Quad, Vertex};

fn mesh_with_quads(vertex_count: usize, quads: &[[u32; 4]]) -> MeshOutput {
  let mut output = MeshOutput::new();
  output.vertices = vec![Vertex::default(); vertex_count];
  output.quads = quads.iter().map(|&[a, b, c, d]| Quad::new(a, b, c, d)).collect();
  output
}

#[test]
fn test_empty_mesh_is_not_closed() {
  let report = analyze(&MeshOutput::new());
  assert_eq!(report, TopologyReport::default());
  assert!(!report.is_closed_manifold());
}

#[test]
fn test_single_quad_is_all_boundary() {
  let report = analyze(&mesh_with_quads(4, &[[0, 1, 2, 3]]));

  assert_eq!(report.edge_count, 4);
  assert_eq!(report.boundary_edges, 4);
  assert_eq!(report.manifold_edges, 0);
  assert_eq!(report.non_manifold_edges, 0);
  assert!(!report.is_closed_manifold());
}

#[test]
fn test_cube_is_closed_manifold() {
  // The 6 faces of a cube over 8 vertices.
  let quads = [
    [0, 1, 3, 2], // z = 0
    [4, 6, 7, 5], // z = 1
    [0, 4, 5, 1], // y = 0
    [2, 3, 7, 6], // y = 1
    [0, 2, 6, 4], // x = 0
    [1, 5, 7, 3], // x = 1
  ];
  let report = analyze(&mesh_with_quads(8, &quads));

  assert_eq!(report.edge_count, 12);
  assert_eq!(report.manifold_edges, 12);
  assert_eq!(report.boundary_edges, 0);
  assert_eq!(report.non_manifold_edges, 0);
  assert!(report.is_closed_manifold());
}

#[test]
fn test_shared_edge_between_three_quads_is_non_manifold() {
  // Three quads fanned around the edge (0, 1).
  let quads = [[0, 1, 2, 3], [0, 1, 4, 5], [0, 1, 6, 7]];
  let report = analyze(&mesh_with_quads(8, &quads));

  assert_eq!(report.non_manifold_edges, 1);
  assert!(!report.is_closed_manifold());
}

#[test]
fn test_edge_direction_does_not_matter() {
  // The shared edge appears as (1, 2) in one quad and (2, 1) in the
  // other; both count toward the same undirected edge.
  let quads = [[0, 1, 2, 3], [1, 4, 5, 2]];
  let report = analyze(&mesh_with_quads(6, &quads));

  assert_eq!(report.edge_count, 7);
  assert_eq!(report.manifold_edges, 1);
  assert_eq!(report.boundary_edges, 6);
}

#[test]
fn test_degenerate_edges_are_counted_separately() {
  let quads = [[0, 0, 1, 2]];
  let report = analyze(&mesh_with_quads(3, &quads));

  assert_eq!(report.degenerate_edges, 1);
  assert_eq!(report.edge_count, 3);
  assert!(!report.is_closed_manifold());
}
