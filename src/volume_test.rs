use super::*;

#[test]
fn test_accepts_minimal_volume() {
  let data = vec![0; 8];
  let volume = VolumeView::new(&data, [2, 2, 2]).unwrap();
  assert_eq!(volume.dims(), [2, 2, 2]);
  assert_eq!(volume.reduced_dims(), [0, 0, 0]);
}

#[test]
fn test_rejects_flat_volume() {
  let data = vec![0; 12];
  let err = VolumeView::new(&data, [4, 3, 1]).unwrap_err();
  assert_eq!(err, VolumeError::DimensionTooSmall { axis: 2, dim: 1 });
}

#[test]
fn test_rejects_zero_dimension() {
  let err = VolumeView::new(&[], [0, 2, 2]).unwrap_err();
  assert_eq!(err, VolumeError::DimensionTooSmall { axis: 0, dim: 0 });
}

#[test]
fn test_rejects_short_buffer() {
  let data = vec![0; 7];
  let err = VolumeView::new(&data, [2, 2, 2]).unwrap_err();
  assert_eq!(
    err,
    VolumeError::BufferSizeMismatch {
      expected: 8,
      provided: 7
    }
  );
}

#[test]
fn test_rejects_oversized_buffer() {
  let data = vec![0; 9];
  assert!(VolumeView::new(&data, [2, 2, 2]).is_err());
}

#[test]
fn test_linearization_is_x_minor() {
  let data = vec![0; 2 * 3 * 4];
  let volume = VolumeView::new(&data, [2, 3, 4]).unwrap();

  assert_eq!(volume.index(0, 0, 0), 0);
  assert_eq!(volume.index(1, 0, 0), 1);
  assert_eq!(volume.index(0, 1, 0), 2);
  assert_eq!(volume.index(0, 0, 1), 6);
  assert_eq!(volume.index(1, 2, 3), 1 + 2 * (2 + 3 * 3));
}

#[test]
fn test_sample_reads_through_layout() {
  let data: Vec<Density> = (0..24).map(|i| i as Density).collect();
  let volume = VolumeView::new(&data, [2, 3, 4]).unwrap();

  for z in 0..4 {
    for y in 0..3 {
      for x in 0..2 {
        assert_eq!(
          volume.sample(x, y, z) as usize,
          volume.index(x, y, z)
        );
      }
    }
  }
}

#[test]
fn test_error_display() {
  let err = VolumeError::DimensionTooSmall { axis: 1, dim: 0 };
  assert_eq!(
    err.to_string(),
    "dimension 0 on axis 1 is below the minimum of 2"
  );

  let err = VolumeError::BufferSizeMismatch {
    expected: 8,
    provided: 7,
  };
  assert_eq!(err.to_string(), "buffer holds 7 samples but dimensions require 8");
}
