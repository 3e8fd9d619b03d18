use glam::Vec3;

use crate::math::Color;

/// Generated particle positions with optional per-point colors
///
/// Buffers are fixed at construction; scene objects only read them.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    colors: Option<Vec<Color>>,
}

impl PointCloud {
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            positions,
            colors: None,
        }
    }

    /// Returns `None` when the buffers disagree in length
    pub fn with_colors(positions: Vec<Vec3>, colors: Vec<Color>) -> Option<Self> {
        if positions.len() != colors.len() {
            return None;
        }
        Some(Self {
            positions,
            colors: Some(colors),
        })
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> Option<&[Color]> {
        self.colors.as_deref()
    }

    /// Interleaved `x, y, z` floats (`3 × len`)
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Per-point colors as flat `r, g, b` floats, empty for uncolored clouds
    pub fn color_buffer(&self) -> &[f32] {
        self.colors.as_deref().map(bytemuck::cast_slice).unwrap_or(&[])
    }

    /// Iterate `(position, color)` pairs, falling back to `default` for uncolored clouds
    pub fn points(&self, default: Color) -> impl Iterator<Item = (Vec3, Color)> + '_ {
        self.positions.iter().enumerate().map(move |(i, p)| {
            let color = self
                .colors
                .as_ref()
                .map(|colors| colors[i])
                .unwrap_or(default);
            (*p, color)
        })
    }
}
