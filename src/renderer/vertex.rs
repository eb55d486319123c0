//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex slice, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Orange (255, 160, 0)
    pub const BALL: [f32; 4] = [1.0, 160.0 / 255.0, 0.0, 1.0];
    /// Translucent light gray (200, 200, 200, 50)
    pub const CENTER_LINE: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 50.0 / 255.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Translucent light gray (200, 200, 200, 200)
    pub const HINT: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0];
    /// Dims the board while paused
    pub const PAUSE_VEIL: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        // position (2 x f32) followed by color (4 x f32), no padding
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let v = [Vertex::new(1.0, 2.0, [0.5; 4])];
        let bytes = as_bytes(&v);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &0.5f32.to_ne_bytes());
    }
}
