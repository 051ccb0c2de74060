/// ASCII line rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use linegen_core::{LineSink, LineStyle};
use nalgebra::{Point2, Point3};
use std::io::Write;

const LINE_CHAR: char = '#';

/// Rasterizes batched line segments into a colored character grid.
///
/// Projected coordinates arrive in world units centered on the origin;
/// `zoom` converts them to cells, with X doubled to compensate for the
/// roughly 1:2 aspect of a terminal cell.
pub struct LineRasterizer {
    width: usize,
    height: usize,
    zoom: f32,
    cells: Vec<Option<(u8, u8, u8)>>,
    style: LineStyle,
    pending: Option<Point2<f32>>,
}

impl LineRasterizer {
    pub fn new(width: usize, height: usize, zoom: f32) -> Self {
        Self {
            width,
            height,
            zoom,
            cells: vec![None; width * height],
            style: LineStyle::new(255, 255, 255),
            pending: None,
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    fn to_cell(&self, p: Point2<f32>) -> (i32, i32) {
        let x = (self.width as f32 / 2.0 + p.x * self.zoom * 2.0).round() as i32;
        let y = (self.height as f32 / 2.0 - p.y * self.zoom).round() as i32;
        (x, y)
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Some(self.style.color);
    }

    /// Bresenham line between the two cell positions
    fn draw_segment(&mut self, a: Point2<f32>, b: Point2<f32>) {
        let (x0, y0) = self.to_cell(a);
        let (x1, y1) = self.to_cell(b);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                match self.cells[y * self.width + x] {
                    Some((r, g, b)) => {
                        writer.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                        writer.queue(Print(LINE_CHAR))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineSink for LineRasterizer {
    fn begin_lines(&mut self, style: LineStyle) {
        self.style = style;
        self.pending = None;
    }

    fn vertex3(&mut self, p: Point3<f32>) {
        self.vertex2(Point2::new(p.x, p.y));
    }

    fn vertex2(&mut self, p: Point2<f32>) {
        match self.pending.take() {
            Some(start) => self.draw_segment(start, p),
            None => self.pending = Some(p),
        }
    }

    fn end_lines(&mut self) {
        self.pending = None;
    }
}
