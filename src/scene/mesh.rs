use std::mem::size_of;

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    /// Number of `f32` components.
    pub components: u32,
}

/// Interleaved `f32` vertex layout, attributes in buffer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: &'static [VertexAttribute],
}

impl VertexLayout {
    pub const fn new(attributes: &'static [VertexAttribute]) -> Self {
        Self { attributes }
    }

    pub fn floats_per_vertex(&self) -> usize {
        self.attributes.iter().map(|a| a.components as usize).sum()
    }

    pub fn stride(&self) -> usize {
        self.floats_per_vertex() * size_of::<f32>()
    }

    /// Attributes paired with their byte offset into a vertex.
    pub fn attributes(&self) -> impl Iterator<Item = (VertexAttribute, usize)> + '_ {
        self.attributes.iter().scan(0, |offset, attribute| {
            let current = *offset;
            *offset += attribute.components as usize * size_of::<f32>();
            Some((*attribute, current))
        })
    }
}

pub const POSITION: VertexLayout = VertexLayout::new(&[VertexAttribute {
    location: 0,
    components: 3,
}]);

pub const POSITION_UV: VertexLayout = VertexLayout::new(&[
    VertexAttribute {
        location: 0,
        components: 3,
    },
    VertexAttribute {
        location: 1,
        components: 2,
    },
]);

pub const POSITION_NORMAL_UV: VertexLayout = VertexLayout::new(&[
    VertexAttribute {
        location: 0,
        components: 3,
    },
    VertexAttribute {
        location: 1,
        components: 3,
    },
    VertexAttribute {
        location: 2,
        components: 2,
    },
]);

/// Static geometry with its layout and optional index list.
#[derive(Debug, Clone, Copy)]
pub struct MeshData {
    pub vertices: &'static [f32],
    pub indices: Option<&'static [u32]>,
    pub layout: VertexLayout,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.floats_per_vertex()
    }

    /// Elements to draw: the index count when indexed, else the vertex count.
    pub fn draw_count(&self) -> usize {
        self.indices.map_or_else(|| self.vertex_count(), <[u32]>::len)
    }
}

#[rustfmt::skip]
const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.5,  0.5, 0.0,
];

// The other half of the unit square, sharing the TRIANGLE diagonal.
#[rustfmt::skip]
const UPPER_TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
    -0.5,  0.5, 0.0,
     0.5,  0.5, 0.0,
];

#[rustfmt::skip]
const QUAD_VERTICES: [f32; 20] = [
     0.5,  0.5, 0.0,   1.0, 1.0,
     0.5, -0.5, 0.0,   1.0, 0.0,
    -0.5, -0.5, 0.0,   0.0, 0.0,
    -0.5,  0.5, 0.0,   0.0, 1.0,
];

const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

// Corners 8..11 repeat the top face with texture coordinates that are
// not shared with the side faces.
#[rustfmt::skip]
const CUBE_VERTICES: [f32; 60] = [
     0.5,  0.5,  0.5,   1.0, 1.0,
     0.5, -0.5,  0.5,   1.0, 0.0,
    -0.5, -0.5,  0.5,   0.0, 0.0,
    -0.5,  0.5,  0.5,   0.0, 1.0,
    -0.5,  0.5, -0.5,   0.0, 0.0,
    -0.5, -0.5, -0.5,   0.0, 1.0,
     0.5, -0.5, -0.5,   1.0, 1.0,
     0.5,  0.5, -0.5,   1.0, 0.0,
     0.5,  0.5,  0.5,   0.0, 0.0,
    -0.5,  0.5,  0.5,   1.0, 0.0,
    -0.5,  0.5, -0.5,   1.0, 1.0,
     0.5,  0.5, -0.5,   0.0, 1.0,
];

#[rustfmt::skip]
const CUBE_INDICES: [u32; 36] = [
    0, 1, 3, 1, 2, 3,
    6, 7, 5, 7, 4, 5,
    7, 0, 4, 0, 3, 4,
    1, 6, 2, 6, 5, 2,
    2, 5, 9, 5, 10, 9,
    8, 11, 1, 11, 6, 1,
];

#[rustfmt::skip]
const LIT_CUBE_VERTICES: [f32; 192] = [
    // front
     0.5,  0.5,  0.5,    0.0,  0.0,  1.0,   1.0, 1.0,
     0.5, -0.5,  0.5,    0.0,  0.0,  1.0,   1.0, 0.0,
    -0.5, -0.5,  0.5,    0.0,  0.0,  1.0,   0.0, 0.0,
    -0.5,  0.5,  0.5,    0.0,  0.0,  1.0,   0.0, 1.0,
    // back
    -0.5,  0.5, -0.5,    0.0,  0.0, -1.0,   1.0, 1.0,
    -0.5, -0.5, -0.5,    0.0,  0.0, -1.0,   1.0, 0.0,
     0.5, -0.5, -0.5,    0.0,  0.0, -1.0,   0.0, 0.0,
     0.5,  0.5, -0.5,    0.0,  0.0, -1.0,   0.0, 1.0,
    // top
     0.5,  0.5, -0.5,    0.0,  1.0,  0.0,   1.0, 1.0,
     0.5,  0.5,  0.5,    0.0,  1.0,  0.0,   1.0, 0.0,
    -0.5,  0.5,  0.5,    0.0,  1.0,  0.0,   0.0, 0.0,
    -0.5,  0.5, -0.5,    0.0,  1.0,  0.0,   0.0, 1.0,
    // bottom
     0.5, -0.5,  0.5,    0.0, -1.0,  0.0,   1.0, 1.0,
     0.5, -0.5, -0.5,    0.0, -1.0,  0.0,   1.0, 0.0,
    -0.5, -0.5, -0.5,    0.0, -1.0,  0.0,   0.0, 0.0,
    -0.5, -0.5,  0.5,    0.0, -1.0,  0.0,   0.0, 1.0,
    // left
    -0.5,  0.5,  0.5,   -1.0,  0.0,  0.0,   1.0, 1.0,
    -0.5, -0.5,  0.5,   -1.0,  0.0,  0.0,   1.0, 0.0,
    -0.5, -0.5, -0.5,   -1.0,  0.0,  0.0,   0.0, 0.0,
    -0.5,  0.5, -0.5,   -1.0,  0.0,  0.0,   0.0, 1.0,
    // right
     0.5,  0.5, -0.5,    1.0,  0.0,  0.0,   1.0, 1.0,
     0.5, -0.5, -0.5,    1.0,  0.0,  0.0,   1.0, 0.0,
     0.5, -0.5,  0.5,    1.0,  0.0,  0.0,   0.0, 0.0,
     0.5,  0.5,  0.5,    1.0,  0.0,  0.0,   0.0, 1.0,
];

#[rustfmt::skip]
const LIT_CUBE_INDICES: [u32; 36] = [
     0,  1,  2,  2,  3,  0,
     4,  5,  6,  6,  7,  4,
     8,  9, 10, 10, 11,  8,
    12, 13, 14, 14, 15, 12,
    16, 17, 18, 18, 19, 16,
    20, 21, 22, 22, 23, 20,
];

pub const TRIANGLE: MeshData = MeshData {
    vertices: &TRIANGLE_VERTICES,
    indices: None,
    layout: POSITION,
};

pub const UPPER_TRIANGLE: MeshData = MeshData {
    vertices: &UPPER_TRIANGLE_VERTICES,
    indices: None,
    layout: POSITION,
};

pub const QUAD: MeshData = MeshData {
    vertices: &QUAD_VERTICES,
    indices: Some(&QUAD_INDICES),
    layout: POSITION_UV,
};

pub const CUBE: MeshData = MeshData {
    vertices: &CUBE_VERTICES,
    indices: Some(&CUBE_INDICES),
    layout: POSITION_UV,
};

pub const LIT_CUBE: MeshData = MeshData {
    vertices: &LIT_CUBE_VERTICES,
    indices: Some(&LIT_CUBE_INDICES),
    layout: POSITION_NORMAL_UV,
};

/// Where the instancing and lighting demos place their cubes.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];
