//! Static lookup tables for dual marching cubes.
//!
//! These tables encode the marching-cubes cell topology and are data,
//! not logic: the 256-entry dual point table maps every corner
//! configuration to the edge masks of its surface patches, and the
//! ambiguous-face table flags the configurations that need the manifold
//! correction. A transcription error here silently produces cracked or
//! self-intersecting meshes, so the whole file is validated
//! exhaustively in `tables_test.rs`.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (bit i = x + 2y + 4z):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     2─┼────3 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 4────┼─5
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Edge Layout
//!
//! ```text
//! Edge  Axis  Corners  Location
//! ────  ────  ───────  ────────
//!   0    X    [0, 1]   Y=0, Z=0
//!   1    Z    [1, 5]   X=1, Y=0
//!   2    X    [4, 5]   Y=0, Z=1
//!   3    Z    [0, 4]   X=0, Y=0
//!   4    X    [2, 3]   Y=1, Z=0
//!   5    Z    [3, 7]   X=1, Y=1
//!   6    X    [6, 7]   Y=1, Z=1
//!   7    Z    [2, 6]   X=0, Y=1
//!   8    Y    [0, 2]   X=0, Z=0
//!   9    Y    [1, 3]   X=1, Z=0
//!  10    Y    [5, 7]   X=1, Z=1
//!  11    Y    [4, 6]   X=0, Z=1
//! ```

use glam::Vec3A;

/// 12-bit mask over the cube edges above. Identifies one dual point:
/// the set of edges whose iso crossings the point averages.
pub type DualPointCode = u16;

pub const EDGE0: DualPointCode = 1;
pub const EDGE1: DualPointCode = 1 << 1;
pub const EDGE2: DualPointCode = 1 << 2;
pub const EDGE3: DualPointCode = 1 << 3;
pub const EDGE4: DualPointCode = 1 << 4;
pub const EDGE5: DualPointCode = 1 << 5;
pub const EDGE6: DualPointCode = 1 << 6;
pub const EDGE7: DualPointCode = 1 << 7;
pub const EDGE8: DualPointCode = 1 << 8;
pub const EDGE9: DualPointCode = 1 << 9;
pub const EDGE10: DualPointCode = 1 << 10;
pub const EDGE11: DualPointCode = 1 << 11;

/// Sentinel in [`AMBIGUOUS_FACES`] for configurations with no
/// manifold-relevant ambiguous face.
pub const NO_AMBIGUOUS_FACE: u8 = 255;

/// Corner sample offsets relative to the cell's lower voxel.
/// Corner i = (i & 1, (i >> 1) & 1, (i >> 2) & 1).
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
  [0, 0, 0],
  [1, 0, 0],
  [0, 1, 0],
  [1, 1, 0],
  [0, 0, 1],
  [1, 0, 1],
  [0, 1, 1],
  [1, 1, 1],
];

/// Corner positions within the unit cube, matching [`CORNER_OFFSETS`].
pub const CORNER_POSITIONS: [Vec3A; 8] = [
  Vec3A::new(0.0, 0.0, 0.0),
  Vec3A::new(1.0, 0.0, 0.0),
  Vec3A::new(0.0, 1.0, 0.0),
  Vec3A::new(1.0, 1.0, 0.0),
  Vec3A::new(0.0, 0.0, 1.0),
  Vec3A::new(1.0, 0.0, 1.0),
  Vec3A::new(0.0, 1.0, 1.0),
  Vec3A::new(1.0, 1.0, 1.0),
];

/// Edge endpoint corner indices, low corner first. The order fixes the
/// direction of the crossing interpolation and must not be swapped:
/// reversing an edge changes the rounding (and the sign of the infinity
/// produced when both samples sit exactly on the iso value).
pub const EDGE_ENDPOINTS: [[usize; 2]; 12] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [1, 5], // Edge 1:  Z axis at X=1, Y=0
  [4, 5], // Edge 2:  X axis at Y=0, Z=1
  [0, 4], // Edge 3:  Z axis at X=0, Y=0
  [2, 3], // Edge 4:  X axis at Y=1, Z=0
  [3, 7], // Edge 5:  Z axis at X=1, Y=1
  [6, 7], // Edge 6:  X axis at Y=1, Z=1
  [2, 6], // Edge 7:  Z axis at X=0, Y=1
  [0, 2], // Edge 8:  Y axis at X=0, Z=0
  [1, 3], // Edge 9:  Y axis at X=1, Z=0
  [5, 7], // Edge 10: Y axis at X=1, Z=1
  [4, 6], // Edge 11: Y axis at X=0, Z=1
];

/// Sample offset of the far endpoint of each axis-aligned cell edge
/// used for the crossing test.
pub const AXIS_OFFSETS: [[usize; 3]; 3] = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

/// For each principal axis: the 4 cells sharing a grid edge of that
/// orientation (as offsets from the edge's origin cell) and the cube
/// edge each cell contributes to the quad. Listed in quad winding
/// order; see [`FORWARD_ON_ENTERING`].
pub const EDGE_QUAD_CELLS: [[([isize; 3], DualPointCode); 4]; 3] = [
  // X edge
  [
    ([0, 0, 0], EDGE0),
    ([0, 0, -1], EDGE2),
    ([0, -1, -1], EDGE6),
    ([0, -1, 0], EDGE4),
  ],
  // Y edge
  [
    ([0, 0, 0], EDGE8),
    ([0, 0, -1], EDGE11),
    ([-1, 0, -1], EDGE10),
    ([-1, 0, 0], EDGE9),
  ],
  // Z edge
  [
    ([0, 0, 0], EDGE3),
    ([-1, 0, 0], EDGE1),
    ([-1, -1, 0], EDGE5),
    ([0, -1, 0], EDGE7),
  ],
];

/// Whether the gather order above yields an outward-facing quad on an
/// entering (outside→inside) crossing; on the opposite transition the
/// winding is reversed. The X axis is the odd one out because its
/// gather order circles the edge in the opposite sense.
pub const FORWARD_ON_ENTERING: [bool; 3] = [true, false, false];

/// Dual points of every cell configuration: up to 4 edge masks, one per
/// surface patch, zero-padded. Each crossed edge of a configuration
/// appears in exactly one mask.
pub const DUAL_POINTS_LIST: [[DualPointCode; 4]; 256] = [
  [0, 0, 0, 0], // 0
  [EDGE0 | EDGE3 | EDGE8, 0, 0, 0], // 1
  [EDGE0 | EDGE1 | EDGE9, 0, 0, 0], // 2
  [EDGE1 | EDGE3 | EDGE8 | EDGE9, 0, 0, 0], // 3
  [EDGE4 | EDGE7 | EDGE8, 0, 0, 0], // 4
  [EDGE0 | EDGE3 | EDGE4 | EDGE7, 0, 0, 0], // 5
  [EDGE0 | EDGE1 | EDGE9, EDGE4 | EDGE7 | EDGE8, 0, 0], // 6
  [EDGE1 | EDGE3 | EDGE4 | EDGE7 | EDGE9, 0, 0, 0], // 7
  [EDGE4 | EDGE5 | EDGE9, 0, 0, 0], // 8
  [EDGE0 | EDGE3 | EDGE8, EDGE4 | EDGE5 | EDGE9, 0, 0], // 9
  [EDGE0 | EDGE1 | EDGE4 | EDGE5, 0, 0, 0], // 10
  [EDGE1 | EDGE3 | EDGE4 | EDGE5 | EDGE8, 0, 0, 0], // 11
  [EDGE5 | EDGE7 | EDGE8 | EDGE9, 0, 0, 0], // 12
  [EDGE0 | EDGE3 | EDGE5 | EDGE7 | EDGE9, 0, 0, 0], // 13
  [EDGE0 | EDGE1 | EDGE5 | EDGE7 | EDGE8, 0, 0, 0], // 14
  [EDGE1 | EDGE3 | EDGE5 | EDGE7, 0, 0, 0], // 15
  [EDGE2 | EDGE3 | EDGE11, 0, 0, 0], // 16
  [EDGE0 | EDGE2 | EDGE8 | EDGE11, 0, 0, 0], // 17
  [EDGE0 | EDGE1 | EDGE9, EDGE2 | EDGE3 | EDGE11, 0, 0], // 18
  [EDGE1 | EDGE2 | EDGE8 | EDGE9 | EDGE11, 0, 0, 0], // 19
  [EDGE2 | EDGE3 | EDGE11, EDGE4 | EDGE7 | EDGE8, 0, 0], // 20
  [EDGE0 | EDGE2 | EDGE4 | EDGE7 | EDGE11, 0, 0, 0], // 21
  [EDGE0 | EDGE1 | EDGE9, EDGE2 | EDGE3 | EDGE11, EDGE4 | EDGE7 | EDGE8, 0], // 22
  [EDGE1 | EDGE2 | EDGE4 | EDGE7 | EDGE9 | EDGE11, 0, 0, 0], // 23
  [EDGE2 | EDGE3 | EDGE11, EDGE4 | EDGE5 | EDGE9, 0, 0], // 24
  [EDGE0 | EDGE2 | EDGE8 | EDGE11, EDGE4 | EDGE5 | EDGE9, 0, 0], // 25
  [EDGE0 | EDGE1 | EDGE4 | EDGE5, EDGE2 | EDGE3 | EDGE11, 0, 0], // 26
  [EDGE1 | EDGE2 | EDGE4 | EDGE5 | EDGE8 | EDGE11, 0, 0, 0], // 27
  [EDGE2 | EDGE3 | EDGE11, EDGE5 | EDGE7 | EDGE8 | EDGE9, 0, 0], // 28
  [EDGE0 | EDGE2 | EDGE5 | EDGE7 | EDGE9 | EDGE11, 0, 0, 0], // 29
  [EDGE0 | EDGE1 | EDGE5 | EDGE7 | EDGE8, EDGE2 | EDGE3 | EDGE11, 0, 0], // 30
  [EDGE1 | EDGE2 | EDGE5 | EDGE7 | EDGE11, 0, 0, 0], // 31
  [EDGE1 | EDGE2 | EDGE10, 0, 0, 0], // 32
  [EDGE0 | EDGE3 | EDGE8, EDGE1 | EDGE2 | EDGE10, 0, 0], // 33
  [EDGE0 | EDGE2 | EDGE9 | EDGE10, 0, 0, 0], // 34
  [EDGE2 | EDGE3 | EDGE8 | EDGE9 | EDGE10, 0, 0, 0], // 35
  [EDGE1 | EDGE2 | EDGE10, EDGE4 | EDGE7 | EDGE8, 0, 0], // 36
  [EDGE0 | EDGE3 | EDGE4 | EDGE7, EDGE1 | EDGE2 | EDGE10, 0, 0], // 37
  [EDGE0 | EDGE2 | EDGE9 | EDGE10, EDGE4 | EDGE7 | EDGE8, 0, 0], // 38
  [EDGE2 | EDGE3 | EDGE4 | EDGE7 | EDGE9 | EDGE10, 0, 0, 0], // 39
  [EDGE1 | EDGE2 | EDGE10, EDGE4 | EDGE5 | EDGE9, 0, 0], // 40
  [EDGE0 | EDGE3 | EDGE8, EDGE1 | EDGE2 | EDGE10, EDGE4 | EDGE5 | EDGE9, 0], // 41
  [EDGE0 | EDGE2 | EDGE4 | EDGE5 | EDGE10, 0, 0, 0], // 42
  [EDGE2 | EDGE3 | EDGE4 | EDGE5 | EDGE8 | EDGE10, 0, 0, 0], // 43
  [EDGE1 | EDGE2 | EDGE10, EDGE5 | EDGE7 | EDGE8 | EDGE9, 0, 0], // 44
  [EDGE0 | EDGE3 | EDGE5 | EDGE7 | EDGE9, EDGE1 | EDGE2 | EDGE10, 0, 0], // 45
  [EDGE0 | EDGE2 | EDGE5 | EDGE7 | EDGE8 | EDGE10, 0, 0, 0], // 46
  [EDGE2 | EDGE3 | EDGE5 | EDGE7 | EDGE10, 0, 0, 0], // 47
  [EDGE1 | EDGE3 | EDGE10 | EDGE11, 0, 0, 0], // 48
  [EDGE0 | EDGE1 | EDGE8 | EDGE10 | EDGE11, 0, 0, 0], // 49
  [EDGE0 | EDGE3 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 50
  [EDGE8 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 51
  [EDGE1 | EDGE3 | EDGE10 | EDGE11, EDGE4 | EDGE7 | EDGE8, 0, 0], // 52
  [EDGE0 | EDGE1 | EDGE4 | EDGE7 | EDGE10 | EDGE11, 0, 0, 0], // 53
  [EDGE0 | EDGE3 | EDGE9 | EDGE10 | EDGE11, EDGE4 | EDGE7 | EDGE8, 0, 0], // 54
  [EDGE4 | EDGE7 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 55
  [EDGE1 | EDGE3 | EDGE10 | EDGE11, EDGE4 | EDGE5 | EDGE9, 0, 0], // 56
  [EDGE0 | EDGE1 | EDGE8 | EDGE10 | EDGE11, EDGE4 | EDGE5 | EDGE9, 0, 0], // 57
  [EDGE0 | EDGE3 | EDGE4 | EDGE5 | EDGE10 | EDGE11, 0, 0, 0], // 58
  [EDGE4 | EDGE5 | EDGE8 | EDGE10 | EDGE11, 0, 0, 0], // 59
  [EDGE1 | EDGE3 | EDGE10 | EDGE11, EDGE5 | EDGE7 | EDGE8 | EDGE9, 0, 0], // 60
  [EDGE0 | EDGE1 | EDGE5 | EDGE7 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 61
  [EDGE0 | EDGE3 | EDGE5 | EDGE7 | EDGE8 | EDGE10 | EDGE11, 0, 0, 0], // 62
  [EDGE5 | EDGE7 | EDGE10 | EDGE11, 0, 0, 0], // 63
  [EDGE6 | EDGE7 | EDGE11, 0, 0, 0], // 64
  [EDGE0 | EDGE3 | EDGE8, EDGE6 | EDGE7 | EDGE11, 0, 0], // 65
  [EDGE0 | EDGE1 | EDGE9, EDGE6 | EDGE7 | EDGE11, 0, 0], // 66
  [EDGE1 | EDGE3 | EDGE8 | EDGE9, EDGE6 | EDGE7 | EDGE11, 0, 0], // 67
  [EDGE4 | EDGE6 | EDGE8 | EDGE11, 0, 0, 0], // 68
  [EDGE0 | EDGE3 | EDGE4 | EDGE6 | EDGE11, 0, 0, 0], // 69
  [EDGE0 | EDGE1 | EDGE9, EDGE4 | EDGE6 | EDGE8 | EDGE11, 0, 0], // 70
  [EDGE1 | EDGE3 | EDGE4 | EDGE6 | EDGE9 | EDGE11, 0, 0, 0], // 71
  [EDGE4 | EDGE5 | EDGE9, EDGE6 | EDGE7 | EDGE11, 0, 0], // 72
  [EDGE0 | EDGE3 | EDGE8, EDGE4 | EDGE5 | EDGE9, EDGE6 | EDGE7 | EDGE11, 0], // 73
  [EDGE0 | EDGE1 | EDGE4 | EDGE5, EDGE6 | EDGE7 | EDGE11, 0, 0], // 74
  [EDGE1 | EDGE3 | EDGE4 | EDGE5 | EDGE8, EDGE6 | EDGE7 | EDGE11, 0, 0], // 75
  [EDGE5 | EDGE6 | EDGE8 | EDGE9 | EDGE11, 0, 0, 0], // 76
  [EDGE0 | EDGE3 | EDGE5 | EDGE6 | EDGE9 | EDGE11, 0, 0, 0], // 77
  [EDGE0 | EDGE1 | EDGE5 | EDGE6 | EDGE8 | EDGE11, 0, 0, 0], // 78
  [EDGE1 | EDGE3 | EDGE5 | EDGE6 | EDGE11, 0, 0, 0], // 79
  [EDGE2 | EDGE3 | EDGE6 | EDGE7, 0, 0, 0], // 80
  [EDGE0 | EDGE2 | EDGE6 | EDGE7 | EDGE8, 0, 0, 0], // 81
  [EDGE0 | EDGE1 | EDGE9, EDGE2 | EDGE3 | EDGE6 | EDGE7, 0, 0], // 82
  [EDGE1 | EDGE2 | EDGE6 | EDGE7 | EDGE8 | EDGE9, 0, 0, 0], // 83
  [EDGE2 | EDGE3 | EDGE4 | EDGE6 | EDGE8, 0, 0, 0], // 84
  [EDGE0 | EDGE2 | EDGE4 | EDGE6, 0, 0, 0], // 85
  [EDGE0 | EDGE1 | EDGE9, EDGE2 | EDGE3 | EDGE4 | EDGE6 | EDGE8, 0, 0], // 86
  [EDGE1 | EDGE2 | EDGE4 | EDGE6 | EDGE9, 0, 0, 0], // 87
  [EDGE2 | EDGE3 | EDGE6 | EDGE7, EDGE4 | EDGE5 | EDGE9, 0, 0], // 88
  [EDGE0 | EDGE2 | EDGE6 | EDGE7 | EDGE8, EDGE4 | EDGE5 | EDGE9, 0, 0], // 89
  [EDGE0 | EDGE1 | EDGE4 | EDGE5, EDGE2 | EDGE3 | EDGE6 | EDGE7, 0, 0], // 90
  [EDGE1 | EDGE2 | EDGE4 | EDGE5 | EDGE6 | EDGE7 | EDGE8, 0, 0, 0], // 91
  [EDGE2 | EDGE3 | EDGE5 | EDGE6 | EDGE8 | EDGE9, 0, 0, 0], // 92
  [EDGE0 | EDGE2 | EDGE5 | EDGE6 | EDGE9, 0, 0, 0], // 93
  [EDGE0 | EDGE1 | EDGE2 | EDGE3 | EDGE5 | EDGE6 | EDGE8, 0, 0, 0], // 94
  [EDGE1 | EDGE2 | EDGE5 | EDGE6, 0, 0, 0], // 95
  [EDGE1 | EDGE2 | EDGE10, EDGE6 | EDGE7 | EDGE11, 0, 0], // 96
  [EDGE0 | EDGE3 | EDGE8, EDGE1 | EDGE2 | EDGE10, EDGE6 | EDGE7 | EDGE11, 0], // 97
  [EDGE0 | EDGE2 | EDGE9 | EDGE10, EDGE6 | EDGE7 | EDGE11, 0, 0], // 98
  [EDGE2 | EDGE3 | EDGE8 | EDGE9 | EDGE10, EDGE6 | EDGE7 | EDGE11, 0, 0], // 99
  [EDGE1 | EDGE2 | EDGE10, EDGE4 | EDGE6 | EDGE8 | EDGE11, 0, 0], // 100
  [EDGE0 | EDGE3 | EDGE4 | EDGE6 | EDGE11, EDGE1 | EDGE2 | EDGE10, 0, 0], // 101
  [EDGE0 | EDGE2 | EDGE9 | EDGE10, EDGE4 | EDGE6 | EDGE8 | EDGE11, 0, 0], // 102
  [EDGE2 | EDGE3 | EDGE4 | EDGE6 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 103
  [EDGE1 | EDGE2 | EDGE10, EDGE4 | EDGE5 | EDGE9, EDGE6 | EDGE7 | EDGE11, 0], // 104
  [EDGE0 | EDGE3 | EDGE8, EDGE1 | EDGE2 | EDGE10, EDGE4 | EDGE5 | EDGE9, EDGE6 | EDGE7 | EDGE11], // 105
  [EDGE0 | EDGE2 | EDGE4 | EDGE5 | EDGE10, EDGE6 | EDGE7 | EDGE11, 0, 0], // 106
  [EDGE2 | EDGE3 | EDGE4 | EDGE5 | EDGE8 | EDGE10, EDGE6 | EDGE7 | EDGE11, 0, 0], // 107
  [EDGE1 | EDGE2 | EDGE10, EDGE5 | EDGE6 | EDGE8 | EDGE9 | EDGE11, 0, 0], // 108
  [EDGE0 | EDGE3 | EDGE5 | EDGE6 | EDGE9 | EDGE11, EDGE1 | EDGE2 | EDGE10, 0, 0], // 109
  [EDGE0 | EDGE2 | EDGE5 | EDGE6 | EDGE8 | EDGE10 | EDGE11, 0, 0, 0], // 110
  [EDGE2 | EDGE3 | EDGE5 | EDGE6 | EDGE10 | EDGE11, 0, 0, 0], // 111
  [EDGE1 | EDGE3 | EDGE6 | EDGE7 | EDGE10, 0, 0, 0], // 112
  [EDGE0 | EDGE1 | EDGE6 | EDGE7 | EDGE8 | EDGE10, 0, 0, 0], // 113
  [EDGE0 | EDGE3 | EDGE6 | EDGE7 | EDGE9 | EDGE10, 0, 0, 0], // 114
  [EDGE6 | EDGE7 | EDGE8 | EDGE9 | EDGE10, 0, 0, 0], // 115
  [EDGE1 | EDGE3 | EDGE4 | EDGE6 | EDGE8 | EDGE10, 0, 0, 0], // 116
  [EDGE0 | EDGE1 | EDGE4 | EDGE6 | EDGE10, 0, 0, 0], // 117
  [EDGE0 | EDGE3 | EDGE4 | EDGE6 | EDGE8 | EDGE9 | EDGE10, 0, 0, 0], // 118
  [EDGE4 | EDGE6 | EDGE9 | EDGE10, 0, 0, 0], // 119
  [EDGE1 | EDGE3 | EDGE6 | EDGE7 | EDGE10, EDGE4 | EDGE5 | EDGE9, 0, 0], // 120
  [EDGE0 | EDGE1 | EDGE6 | EDGE7 | EDGE8 | EDGE10, EDGE4 | EDGE5 | EDGE9, 0, 0], // 121
  [EDGE0 | EDGE3 | EDGE4 | EDGE5 | EDGE6 | EDGE7 | EDGE10, 0, 0, 0], // 122
  [EDGE4 | EDGE5 | EDGE6 | EDGE7 | EDGE8 | EDGE10, 0, 0, 0], // 123
  [EDGE1 | EDGE3 | EDGE5 | EDGE6 | EDGE8 | EDGE9 | EDGE10, 0, 0, 0], // 124
  [EDGE0 | EDGE1 | EDGE5 | EDGE6 | EDGE9 | EDGE10, 0, 0, 0], // 125
  [EDGE0 | EDGE3 | EDGE8, EDGE5 | EDGE6 | EDGE10, 0, 0], // 126
  [EDGE5 | EDGE6 | EDGE10, 0, 0, 0], // 127
  [EDGE5 | EDGE6 | EDGE10, 0, 0, 0], // 128
  [EDGE0 | EDGE3 | EDGE8, EDGE5 | EDGE6 | EDGE10, 0, 0], // 129
  [EDGE0 | EDGE1 | EDGE9, EDGE5 | EDGE6 | EDGE10, 0, 0], // 130
  [EDGE1 | EDGE3 | EDGE8 | EDGE9, EDGE5 | EDGE6 | EDGE10, 0, 0], // 131
  [EDGE4 | EDGE7 | EDGE8, EDGE5 | EDGE6 | EDGE10, 0, 0], // 132
  [EDGE0 | EDGE3 | EDGE4 | EDGE7, EDGE5 | EDGE6 | EDGE10, 0, 0], // 133
  [EDGE0 | EDGE1 | EDGE9, EDGE4 | EDGE7 | EDGE8, EDGE5 | EDGE6 | EDGE10, 0], // 134
  [EDGE1 | EDGE3 | EDGE4 | EDGE7 | EDGE9, EDGE5 | EDGE6 | EDGE10, 0, 0], // 135
  [EDGE4 | EDGE6 | EDGE9 | EDGE10, 0, 0, 0], // 136
  [EDGE0 | EDGE3 | EDGE8, EDGE4 | EDGE6 | EDGE9 | EDGE10, 0, 0], // 137
  [EDGE0 | EDGE1 | EDGE4 | EDGE6 | EDGE10, 0, 0, 0], // 138
  [EDGE1 | EDGE3 | EDGE4 | EDGE6 | EDGE8 | EDGE10, 0, 0, 0], // 139
  [EDGE6 | EDGE7 | EDGE8 | EDGE9 | EDGE10, 0, 0, 0], // 140
  [EDGE0 | EDGE3 | EDGE6 | EDGE7 | EDGE9 | EDGE10, 0, 0, 0], // 141
  [EDGE0 | EDGE1 | EDGE6 | EDGE7 | EDGE8 | EDGE10, 0, 0, 0], // 142
  [EDGE1 | EDGE3 | EDGE6 | EDGE7 | EDGE10, 0, 0, 0], // 143
  [EDGE2 | EDGE3 | EDGE11, EDGE5 | EDGE6 | EDGE10, 0, 0], // 144
  [EDGE0 | EDGE2 | EDGE8 | EDGE11, EDGE5 | EDGE6 | EDGE10, 0, 0], // 145
  [EDGE0 | EDGE1 | EDGE9, EDGE2 | EDGE3 | EDGE11, EDGE5 | EDGE6 | EDGE10, 0], // 146
  [EDGE1 | EDGE2 | EDGE8 | EDGE9 | EDGE11, EDGE5 | EDGE6 | EDGE10, 0, 0], // 147
  [EDGE2 | EDGE3 | EDGE11, EDGE4 | EDGE7 | EDGE8, EDGE5 | EDGE6 | EDGE10, 0], // 148
  [EDGE0 | EDGE2 | EDGE4 | EDGE7 | EDGE11, EDGE5 | EDGE6 | EDGE10, 0, 0], // 149
  [EDGE0 | EDGE1 | EDGE9, EDGE2 | EDGE3 | EDGE11, EDGE4 | EDGE7 | EDGE8, EDGE5 | EDGE6 | EDGE10], // 150
  [EDGE1 | EDGE2 | EDGE4 | EDGE7 | EDGE9 | EDGE11, EDGE5 | EDGE6 | EDGE10, 0, 0], // 151
  [EDGE2 | EDGE3 | EDGE11, EDGE4 | EDGE6 | EDGE9 | EDGE10, 0, 0], // 152
  [EDGE0 | EDGE2 | EDGE8 | EDGE11, EDGE4 | EDGE6 | EDGE9 | EDGE10, 0, 0], // 153
  [EDGE0 | EDGE1 | EDGE4 | EDGE6 | EDGE10, EDGE2 | EDGE3 | EDGE11, 0, 0], // 154
  [EDGE1 | EDGE2 | EDGE4 | EDGE6 | EDGE8 | EDGE10 | EDGE11, 0, 0, 0], // 155
  [EDGE2 | EDGE3 | EDGE11, EDGE6 | EDGE7 | EDGE8 | EDGE9 | EDGE10, 0, 0], // 156
  [EDGE0 | EDGE2 | EDGE6 | EDGE7 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 157
  [EDGE0 | EDGE1 | EDGE6 | EDGE7 | EDGE8 | EDGE10, EDGE2 | EDGE3 | EDGE11, 0, 0], // 158
  [EDGE1 | EDGE2 | EDGE6 | EDGE7 | EDGE10 | EDGE11, 0, 0, 0], // 159
  [EDGE1 | EDGE2 | EDGE5 | EDGE6, 0, 0, 0], // 160
  [EDGE0 | EDGE3 | EDGE8, EDGE1 | EDGE2 | EDGE5 | EDGE6, 0, 0], // 161
  [EDGE0 | EDGE2 | EDGE5 | EDGE6 | EDGE9, 0, 0, 0], // 162
  [EDGE2 | EDGE3 | EDGE5 | EDGE6 | EDGE8 | EDGE9, 0, 0, 0], // 163
  [EDGE1 | EDGE2 | EDGE5 | EDGE6, EDGE4 | EDGE7 | EDGE8, 0, 0], // 164
  [EDGE0 | EDGE3 | EDGE4 | EDGE7, EDGE1 | EDGE2 | EDGE5 | EDGE6, 0, 0], // 165
  [EDGE0 | EDGE2 | EDGE5 | EDGE6 | EDGE9, EDGE4 | EDGE7 | EDGE8, 0, 0], // 166
  [EDGE2 | EDGE3 | EDGE4 | EDGE5 | EDGE6 | EDGE7 | EDGE9, 0, 0, 0], // 167
  [EDGE1 | EDGE2 | EDGE4 | EDGE6 | EDGE9, 0, 0, 0], // 168
  [EDGE0 | EDGE3 | EDGE8, EDGE1 | EDGE2 | EDGE4 | EDGE6 | EDGE9, 0, 0], // 169
  [EDGE0 | EDGE2 | EDGE4 | EDGE6, 0, 0, 0], // 170
  [EDGE2 | EDGE3 | EDGE4 | EDGE6 | EDGE8, 0, 0, 0], // 171
  [EDGE1 | EDGE2 | EDGE6 | EDGE7 | EDGE8 | EDGE9, 0, 0, 0], // 172
  [EDGE0 | EDGE1 | EDGE2 | EDGE3 | EDGE6 | EDGE7 | EDGE9, 0, 0, 0], // 173
  [EDGE0 | EDGE2 | EDGE6 | EDGE7 | EDGE8, 0, 0, 0], // 174
  [EDGE2 | EDGE3 | EDGE6 | EDGE7, 0, 0, 0], // 175
  [EDGE1 | EDGE3 | EDGE5 | EDGE6 | EDGE11, 0, 0, 0], // 176
  [EDGE0 | EDGE1 | EDGE5 | EDGE6 | EDGE8 | EDGE11, 0, 0, 0], // 177
  [EDGE0 | EDGE3 | EDGE5 | EDGE6 | EDGE9 | EDGE11, 0, 0, 0], // 178
  [EDGE5 | EDGE6 | EDGE8 | EDGE9 | EDGE11, 0, 0, 0], // 179
  [EDGE1 | EDGE3 | EDGE5 | EDGE6 | EDGE11, EDGE4 | EDGE7 | EDGE8, 0, 0], // 180
  [EDGE0 | EDGE1 | EDGE4 | EDGE5 | EDGE6 | EDGE7 | EDGE11, 0, 0, 0], // 181
  [EDGE0 | EDGE3 | EDGE5 | EDGE6 | EDGE9 | EDGE11, EDGE4 | EDGE7 | EDGE8, 0, 0], // 182
  [EDGE4 | EDGE5 | EDGE6 | EDGE7 | EDGE9 | EDGE11, 0, 0, 0], // 183
  [EDGE1 | EDGE3 | EDGE4 | EDGE6 | EDGE9 | EDGE11, 0, 0, 0], // 184
  [EDGE0 | EDGE1 | EDGE4 | EDGE6 | EDGE8 | EDGE9 | EDGE11, 0, 0, 0], // 185
  [EDGE0 | EDGE3 | EDGE4 | EDGE6 | EDGE11, 0, 0, 0], // 186
  [EDGE4 | EDGE6 | EDGE8 | EDGE11, 0, 0, 0], // 187
  [EDGE1 | EDGE3 | EDGE6 | EDGE7 | EDGE8 | EDGE9 | EDGE11, 0, 0, 0], // 188
  [EDGE0 | EDGE1 | EDGE9, EDGE6 | EDGE7 | EDGE11, 0, 0], // 189
  [EDGE0 | EDGE3 | EDGE6 | EDGE7 | EDGE8 | EDGE11, 0, 0, 0], // 190
  [EDGE6 | EDGE7 | EDGE11, 0, 0, 0], // 191
  [EDGE5 | EDGE7 | EDGE10 | EDGE11, 0, 0, 0], // 192
  [EDGE0 | EDGE3 | EDGE8, EDGE5 | EDGE7 | EDGE10 | EDGE11, 0, 0], // 193
  [EDGE0 | EDGE1 | EDGE9, EDGE5 | EDGE7 | EDGE10 | EDGE11, 0, 0], // 194
  [EDGE1 | EDGE3 | EDGE8 | EDGE9, EDGE5 | EDGE7 | EDGE10 | EDGE11, 0, 0], // 195
  [EDGE4 | EDGE5 | EDGE8 | EDGE10 | EDGE11, 0, 0, 0], // 196
  [EDGE0 | EDGE3 | EDGE4 | EDGE5 | EDGE10 | EDGE11, 0, 0, 0], // 197
  [EDGE0 | EDGE1 | EDGE9, EDGE4 | EDGE5 | EDGE8 | EDGE10 | EDGE11, 0, 0], // 198
  [EDGE1 | EDGE3 | EDGE4 | EDGE5 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 199
  [EDGE4 | EDGE7 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 200
  [EDGE0 | EDGE3 | EDGE8, EDGE4 | EDGE7 | EDGE9 | EDGE10 | EDGE11, 0, 0], // 201
  [EDGE0 | EDGE1 | EDGE4 | EDGE7 | EDGE10 | EDGE11, 0, 0, 0], // 202
  [EDGE1 | EDGE3 | EDGE4 | EDGE7 | EDGE8 | EDGE10 | EDGE11, 0, 0, 0], // 203
  [EDGE8 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 204
  [EDGE0 | EDGE3 | EDGE9 | EDGE10 | EDGE11, 0, 0, 0], // 205
  [EDGE0 | EDGE1 | EDGE8 | EDGE10 | EDGE11, 0, 0, 0], // 206
  [EDGE1 | EDGE3 | EDGE10 | EDGE11, 0, 0, 0], // 207
  [EDGE2 | EDGE3 | EDGE5 | EDGE7 | EDGE10, 0, 0, 0], // 208
  [EDGE0 | EDGE2 | EDGE5 | EDGE7 | EDGE8 | EDGE10, 0, 0, 0], // 209
  [EDGE0 | EDGE1 | EDGE9, EDGE2 | EDGE3 | EDGE5 | EDGE7 | EDGE10, 0, 0], // 210
  [EDGE1 | EDGE2 | EDGE5 | EDGE7 | EDGE8 | EDGE9 | EDGE10, 0, 0, 0], // 211
  [EDGE2 | EDGE3 | EDGE4 | EDGE5 | EDGE8 | EDGE10, 0, 0, 0], // 212
  [EDGE0 | EDGE2 | EDGE4 | EDGE5 | EDGE10, 0, 0, 0], // 213
  [EDGE0 | EDGE1 | EDGE9, EDGE2 | EDGE3 | EDGE4 | EDGE5 | EDGE8 | EDGE10, 0, 0], // 214
  [EDGE1 | EDGE2 | EDGE4 | EDGE5 | EDGE9 | EDGE10, 0, 0, 0], // 215
  [EDGE2 | EDGE3 | EDGE4 | EDGE7 | EDGE9 | EDGE10, 0, 0, 0], // 216
  [EDGE0 | EDGE2 | EDGE4 | EDGE7 | EDGE8 | EDGE9 | EDGE10, 0, 0, 0], // 217
  [EDGE0 | EDGE1 | EDGE2 | EDGE3 | EDGE4 | EDGE7 | EDGE10, 0, 0, 0], // 218
  [EDGE1 | EDGE2 | EDGE10, EDGE4 | EDGE7 | EDGE8, 0, 0], // 219
  [EDGE2 | EDGE3 | EDGE8 | EDGE9 | EDGE10, 0, 0, 0], // 220
  [EDGE0 | EDGE2 | EDGE9 | EDGE10, 0, 0, 0], // 221
  [EDGE0 | EDGE1 | EDGE2 | EDGE3 | EDGE8 | EDGE10, 0, 0, 0], // 222
  [EDGE1 | EDGE2 | EDGE10, 0, 0, 0], // 223
  [EDGE1 | EDGE2 | EDGE5 | EDGE7 | EDGE11, 0, 0, 0], // 224
  [EDGE0 | EDGE3 | EDGE8, EDGE1 | EDGE2 | EDGE5 | EDGE7 | EDGE11, 0, 0], // 225
  [EDGE0 | EDGE2 | EDGE5 | EDGE7 | EDGE9 | EDGE11, 0, 0, 0], // 226
  [EDGE2 | EDGE3 | EDGE5 | EDGE7 | EDGE8 | EDGE9 | EDGE11, 0, 0, 0], // 227
  [EDGE1 | EDGE2 | EDGE4 | EDGE5 | EDGE8 | EDGE11, 0, 0, 0], // 228
  [EDGE0 | EDGE1 | EDGE2 | EDGE3 | EDGE4 | EDGE5 | EDGE11, 0, 0, 0], // 229
  [EDGE0 | EDGE2 | EDGE4 | EDGE5 | EDGE8 | EDGE9 | EDGE11, 0, 0, 0], // 230
  [EDGE2 | EDGE3 | EDGE11, EDGE4 | EDGE5 | EDGE9, 0, 0], // 231
  [EDGE1 | EDGE2 | EDGE4 | EDGE7 | EDGE9 | EDGE11, 0, 0, 0], // 232
  [EDGE0 | EDGE3 | EDGE8, EDGE1 | EDGE2 | EDGE4 | EDGE7 | EDGE9 | EDGE11, 0, 0], // 233
  [EDGE0 | EDGE2 | EDGE4 | EDGE7 | EDGE11, 0, 0, 0], // 234
  [EDGE2 | EDGE3 | EDGE4 | EDGE7 | EDGE8 | EDGE11, 0, 0, 0], // 235
  [EDGE1 | EDGE2 | EDGE8 | EDGE9 | EDGE11, 0, 0, 0], // 236
  [EDGE0 | EDGE1 | EDGE2 | EDGE3 | EDGE9 | EDGE11, 0, 0, 0], // 237
  [EDGE0 | EDGE2 | EDGE8 | EDGE11, 0, 0, 0], // 238
  [EDGE2 | EDGE3 | EDGE11, 0, 0, 0], // 239
  [EDGE1 | EDGE3 | EDGE5 | EDGE7, 0, 0, 0], // 240
  [EDGE0 | EDGE1 | EDGE5 | EDGE7 | EDGE8, 0, 0, 0], // 241
  [EDGE0 | EDGE3 | EDGE5 | EDGE7 | EDGE9, 0, 0, 0], // 242
  [EDGE5 | EDGE7 | EDGE8 | EDGE9, 0, 0, 0], // 243
  [EDGE1 | EDGE3 | EDGE4 | EDGE5 | EDGE8, 0, 0, 0], // 244
  [EDGE0 | EDGE1 | EDGE4 | EDGE5, 0, 0, 0], // 245
  [EDGE0 | EDGE3 | EDGE4 | EDGE5 | EDGE8 | EDGE9, 0, 0, 0], // 246
  [EDGE4 | EDGE5 | EDGE9, 0, 0, 0], // 247
  [EDGE1 | EDGE3 | EDGE4 | EDGE7 | EDGE9, 0, 0, 0], // 248
  [EDGE0 | EDGE1 | EDGE4 | EDGE7 | EDGE8 | EDGE9, 0, 0, 0], // 249
  [EDGE0 | EDGE3 | EDGE4 | EDGE7, 0, 0, 0], // 250
  [EDGE4 | EDGE7 | EDGE8, 0, 0, 0], // 251
  [EDGE1 | EDGE3 | EDGE8 | EDGE9, 0, 0, 0], // 252
  [EDGE0 | EDGE1 | EDGE9, 0, 0, 0], // 253
  [EDGE0 | EDGE3 | EDGE8, 0, 0, 0], // 254
  [0, 0, 0, 0], // 255
];

/// Shorthand for [`NO_AMBIGUOUS_FACE`] in the table below.
const NAF: u8 = NO_AMBIGUOUS_FACE;

/// Ambiguous-face directions for the manifold correction.
///
/// [`NO_AMBIGUOUS_FACE`] everywhere except the 36 problematic
/// configurations (Wenger's C16 and C19 classes): cells whose single
/// surface patch owns all 4 crossed edges of an ambiguous face. C16 has
/// five inside corners (the three outside ones form an edge pair plus a
/// face-diagonal corner); C19 has six (the two outside corners lie
/// diagonal on one face). Flagged entries hold `(axis << 1) | sign`:
/// the axis perpendicular to the single ambiguous face and the
/// direction of the neighbor cube that shares it (sign 1 = positive).
pub const AMBIGUOUS_FACES: [u8; 256] = [
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, // 0..=15
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, // 16..=31
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, // 32..=47
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, 1, 0, NAF, // 48..=63
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, // 64..=79
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, 3, NAF, NAF, 2, NAF, // 80..=95
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, 5, NAF, NAF, NAF, NAF, NAF, NAF, 5, 5, // 96..=111
  NAF, NAF, NAF, NAF, NAF, NAF, 4, NAF, NAF, NAF, 3, 3, 1, 1, NAF, NAF, // 112..=127
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, // 128..=143
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, NAF, 5, NAF, 5, NAF, 5, // 144..=159
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, 3, NAF, NAF, NAF, NAF, NAF, 2, NAF, NAF, // 160..=175
  NAF, NAF, NAF, NAF, NAF, 3, NAF, 3, NAF, 4, NAF, NAF, 0, NAF, 0, NAF, // 176..=191
  NAF, NAF, NAF, NAF, NAF, NAF, NAF, 1, NAF, NAF, NAF, 0, NAF, NAF, NAF, NAF, // 192..=207
  NAF, NAF, NAF, 1, NAF, NAF, NAF, 1, NAF, 4, 2, NAF, NAF, NAF, 2, NAF, // 208..=223
  NAF, NAF, NAF, 0, NAF, 2, 4, NAF, NAF, NAF, NAF, 0, NAF, 2, NAF, NAF, // 224..=239
  NAF, NAF, NAF, NAF, NAF, NAF, 4, NAF, NAF, 4, NAF, NAF, NAF, NAF, NAF, NAF, // 240..=255
];

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
