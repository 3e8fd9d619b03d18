use crate::math::Color;

/// 2D drawing operations for the software canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Fill the whole canvas
    Clear(Color),

    /// Blend a single pixel
    Pixel { x: i32, y: i32, color: Color, alpha: f32 },

    /// Round sprite centered at (x, y), `size` pixels across
    Point { x: f32, y: f32, size: f32, color: Color, alpha: f32 },
}

/// Opaque color buffer with source-over blending
#[derive(Clone)]
pub struct Canvas {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Color::BLACK; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Resize, keeping the allocation when dimensions match
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            *self = Self::new(width, height);
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn execute(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.clear(color),
            DrawOp::Pixel { x, y, color, alpha } => self.blend(x, y, color, alpha),
            DrawOp::Point { x, y, size, color, alpha } => self.draw_point(x, y, size, color, alpha),
        }
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn blend(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }

        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = self.pixels[idx].lerp(color, alpha);
    }

    /// Sub-pixel points collapse to one pixel with alpha scaled by coverage
    fn draw_point(&mut self, x: f32, y: f32, size: f32, color: Color, alpha: f32) {
        if !(size > 0.0) || !x.is_finite() || !y.is_finite() {
            return;
        }

        if size <= 1.0 {
            self.blend(x.floor() as i32, y.floor() as i32, color, alpha * size);
            return;
        }

        let radius = size * 0.5;
        let min_x = (x - radius).floor() as i32;
        let max_x = (x + radius).ceil() as i32;
        let min_y = (y - radius).floor() as i32;
        let max_y = (y + radius).ceil() as i32;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f32 + 0.5 - x;
                let dy = py as f32 + 0.5 - y;
                let d = (dx * dx + dy * dy).sqrt();
                // One pixel of soft edge
                let edge = (radius - d + 0.5).clamp(0.0, 1.0);
                if edge > 0.0 {
                    self.blend(px, py, color, alpha * edge);
                }
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// RGBA8 bytes, fully opaque
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8(1.0)).collect()
    }
}
