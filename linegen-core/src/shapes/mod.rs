/// Wireframe shape generators.
///
/// Each generator is a stateless function of its spec: it validates the
/// spec, builds the shape's local-space vertices, rotates them about the
/// shape center, translates to world space, projects through the
/// `Perspective` seam and emits one vertex pair per edge.
pub mod column;
pub mod cube;
pub mod cylinder;
pub mod pyramid;
pub mod sphere;

use nalgebra::Point2;
use thiserror::Error;

use crate::render::LineSink;

/// Non-fatal reasons a draw call was skipped
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("{shape}: no line style assigned")]
    MissingStyle { shape: &'static str },
    #[error("{shape}: degenerate dimensions, nothing to draw")]
    Degenerate { shape: &'static str },
}

/// Emit the four perimeter edges of a quad face
pub(crate) fn emit_face(
    points: &[Point2<f32>],
    indices: [usize; 4],
    sink: &mut dyn LineSink,
) {
    for i in 0..4 {
        sink.vertex2(points[indices[i]]);
        sink.vertex2(points[indices[(i + 1) % 4]]);
    }
}
