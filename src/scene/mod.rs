//! The animated 3D backdrop and its software renderer

mod camera;
mod composer;
mod lights;
mod objects;
mod raster;
mod rasterizer;

pub use camera::{PerspectiveCamera, Projector, ScreenPoint};
pub use composer::{SceneComposer, GALAXY, MOON, STARS};
pub use lights::{AmbientLight, Lighting, PointLight};
pub use objects::{Geometry, PointMaterial, SceneObject, SurfaceMaterial};
pub use raster::{Canvas, DrawOp};
pub use rasterizer::PointRasterizer;
