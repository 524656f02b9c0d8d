use super::*;
use crate::tables::{EDGE0, EDGE3, EDGE8};
use crate::volume::VolumeView;

const ISO: Density = 128;

fn assert_close(actual: f32, expected: f32) {
  assert!(
    (actual - expected).abs() < 1e-6,
    "expected {}, got {}",
    expected,
    actual
  );
}

#[test]
fn test_single_edge_crossing() {
  // Corner 0 = 0, corner 1 = 255: the crossing sits at 128/255 along
  // the X edge.
  let mut data = vec![0; 8];
  data[1] = 255;
  let volume = VolumeView::new(&data, [2, 2, 2]).unwrap();

  let vertex = dual_vertex(&volume, 0, 0, 0, ISO, EDGE0);
  assert_close(vertex.position[0], 128.0 / 255.0);
  assert_close(vertex.position[1], 0.0);
  assert_close(vertex.position[2], 0.0);
}

#[test]
fn test_crossing_direction_matches_sample_order() {
  // Inverting the samples mirrors the crossing around the midpoint:
  // the fraction becomes (128 - 255) / (0 - 255) = 127/255.
  let mut data = vec![255; 8];
  data[1] = 0;
  let volume = VolumeView::new(&data, [2, 2, 2]).unwrap();

  let vertex = dual_vertex(&volume, 0, 0, 0, ISO, EDGE0);
  assert_close(vertex.position[0], 127.0 / 255.0);
}

#[test]
fn test_centroid_of_three_crossings() {
  // Corner 0 inside, everything else outside: the cap crosses edges
  // 0, 3 and 8, and the dual point averages the three crossings.
  let mut data = vec![0; 8];
  data[0] = 255;
  let volume = VolumeView::new(&data, [2, 2, 2]).unwrap();

  let vertex = dual_vertex(&volume, 0, 0, 0, ISO, EDGE0 | EDGE3 | EDGE8);

  let t = 127.0 / 255.0;
  assert_close(vertex.position[0], t / 3.0);
  assert_close(vertex.position[1], t / 3.0);
  assert_close(vertex.position[2], t / 3.0);
}

#[test]
fn test_base_offset_applied() {
  // Same cap geometry in the cell at (1, 1, 1) of a 3x3x3 grid.
  let dims = [3, 3, 3];
  let mut data = vec![0; 27];
  data[1 + 3 * (1 + 3 * 1)] = 255; // sample (1,1,1)
  let volume = VolumeView::new(&data, dims).unwrap();

  let vertex = dual_vertex(&volume, 1, 1, 1, ISO, EDGE0 | EDGE3 | EDGE8);

  let t = 127.0 / 255.0;
  assert_close(vertex.position[0], 1.0 + t / 3.0);
  assert_close(vertex.position[1], 1.0 + t / 3.0);
  assert_close(vertex.position[2], 1.0 + t / 3.0);
}

#[test]
fn test_exact_midpoint() {
  // Samples 0 and 256 would put the crossing exactly at 0.5; with u8
  // samples 1 and 255 at iso 128 the fraction is 127/254 = 0.5.
  let mut data = vec![1; 8];
  data[1] = 255;
  let volume = VolumeView::new(&data, [2, 2, 2]).unwrap();

  let vertex = dual_vertex(&volume, 0, 0, 0, ISO, EDGE0);
  assert_close(vertex.position[0], 0.5);
}

#[test]
fn test_equal_samples_propagate_nan() {
  // Both endpoints equal to the iso value divide zero by zero; the
  // result propagates as NaN rather than being trapped.
  let data = vec![ISO; 8];
  let volume = VolumeView::new(&data, [2, 2, 2]).unwrap();

  let vertex = dual_vertex(&volume, 0, 0, 0, ISO, EDGE0);
  assert!(vertex.position[0].is_nan());
}
