//! Timed UI sequencing: preloader stages, typed text and entrance effects

mod code_rain;
mod reveal;
mod stage;
mod text_stream;

pub use code_rain::{CodeDrop, CodeRain, DropFrame};
pub use reveal::{staggered, RevealOnce};
pub use stage::{StagedTimeline, TimelineStage};
pub use text_stream::DecorativeTextStream;
