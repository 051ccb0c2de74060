/// Renderer surface contract for wireframe output
use nalgebra::{Point2, Point3};

/// Line color handed to the renderer, standing in for a material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub color: (u8, u8, u8),
}

impl LineStyle {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { color: (r, g, b) }
    }
}

/// Sink for batched line segments.
///
/// Consecutive vertex calls pair up: the first and second vertex form one
/// segment, the third and fourth the next, and so on. Every `begin_lines`
/// is balanced by exactly one `end_lines`; generators that skip a draw
/// never open a batch.
pub trait LineSink {
    fn begin_lines(&mut self, style: LineStyle);
    fn vertex3(&mut self, p: Point3<f32>);
    fn vertex2(&mut self, p: Point2<f32>);
    fn end_lines(&mut self);
}
