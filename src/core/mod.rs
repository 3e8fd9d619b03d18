//! Frame timing, CPU frame buffers and the GPU host that presents them

mod clock;
mod display_context;
mod frame;
mod gpu_context;
mod render_pipeline;
mod surface_renderer;
mod timer;
mod ui_overlay;

pub use clock::{Clock, FrameClock, ManualClock};
pub use display_context::DisplayContext;
pub use frame::{FrameCounter, FrameInfo};
pub use gpu_context::GpuContext;
pub use render_pipeline::{LayerOutput, RenderPipeline};
pub use surface_renderer::SurfaceRenderer;
pub use timer::{Throttled, TimerHandle, TimerQueue};
pub use ui_overlay::UiOverlay;
