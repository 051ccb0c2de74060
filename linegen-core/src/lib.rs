/// LineGen Core Library - wireframe geometry and collision logic
///
/// This library provides the stateless core for wireframe rendering:
/// fixed-order Euler rotation, perspective-divide projection, the shape
/// generators, axis-aligned bounding volumes and the falling-box physics
/// scene. Renderer surfaces plug in through the `LineSink` trait.

pub mod aabb;
pub mod collision;
pub mod projection;
pub mod render;
pub mod rotation;
pub mod scene;
pub mod shapes;
pub mod timer;

// Re-export commonly used types
pub use aabb::Aabb;
pub use collision::{BoxSpec, DropScene, PhysicsParams, PlatformSpec};
pub use projection::{Perspective, PinholeCamera};
pub use render::{LineSink, LineStyle};
pub use rotation::Orientation;
pub use scene::{ShapeKind, ShapeScene};
pub use shapes::DrawError;
pub use timer::OneShot;
