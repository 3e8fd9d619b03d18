//! Procedural point clouds for the decorative background

mod point_cloud;
mod random;
mod spiral;
mod uniform;

pub use point_cloud::PointCloud;
pub use random::{random_source, RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use spiral::{generate_spiral_field, SpiralParams};
pub use uniform::generate_uniform_field;
