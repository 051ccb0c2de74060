/// Collision bodies and the falling-box scene
pub mod box_shape;
pub mod platform;
pub mod scene;

pub use box_shape::BoxSpec;
pub use platform::PlatformSpec;
pub use scene::{DropScene, PhysicsParams};
