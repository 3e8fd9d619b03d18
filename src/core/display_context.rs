/// Physical pixel size of the frame being rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayContext {
    pub width: u32,
    pub height: u32,
}

impl DisplayContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes in an RGBA8 frame
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Width over height; 1.0 for a degenerate viewport
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Minimized windows report a zero-sized surface
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_rgba() {
        let ctx = DisplayContext::new(100, 100);
        assert_eq!(ctx.pixel_count(), 10_000);
        assert_eq!(ctx.buffer_size(), 40_000);
    }

    #[test]
    fn test_aspect() {
        assert!((DisplayContext::new(1920, 1080).aspect() - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(DisplayContext::new(800, 0).aspect(), 1.0);
    }

    #[test]
    fn test_minimized_is_empty() {
        assert!(DisplayContext::new(0, 600).is_empty());
        assert!(!DisplayContext::new(1, 1).is_empty());
    }
}
