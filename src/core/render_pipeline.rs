use super::display_context::DisplayContext;

/// Output from a render call - just pixels
#[derive(Debug, Clone)]
pub struct LayerOutput {
    /// RGBA pixel data
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl LayerOutput {
    pub fn new(pixels: Vec<u8>, context: &DisplayContext) -> Self {
        Self {
            pixels,
            width: context.width,
            height: context.height,
        }
    }

    /// Nothing to present (minimized window)
    pub fn empty() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Produces pixels for a scene description `S`
///
/// The scene only exposes state; everything that touches pixels lives behind
/// this trait so scene updates stay testable without a window.
pub trait RenderPipeline<S: ?Sized> {
    fn render(&mut self, scene: &S, context: &DisplayContext) -> LayerOutput;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_carries_dimensions() {
        let ctx = DisplayContext::new(2, 2);
        let output = LayerOutput::new(vec![0; ctx.buffer_size()], &ctx);
        assert_eq!((output.width, output.height), (2, 2));
        assert_eq!(output.pixels.len(), 16);
    }

    #[test]
    fn test_empty_output() {
        assert!(LayerOutput::empty().is_empty());
    }
}
