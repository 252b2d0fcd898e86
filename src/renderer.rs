// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};
use rand::Rng;

use crate::shape::Shape;

#[derive(Debug)]
pub struct Renderer {
    /// Screen pixels per shape unit
    scale: f32,
    outline: Stroke,
    // One fill per drawn shape, kept stable between frames
    fill_colors: Vec<Color32>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            outline: Stroke::new(1.0, Color32::DARK_GRAY),
            fill_colors: Vec::new(),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(0.1);
    }

    /// Forget the fill colours so the next draw picks new ones
    pub fn reset_colors(&mut self) {
        self.fill_colors.clear();
    }

    /// Screen rectangle covered by `shape`.
    ///
    /// The shape is anchored at (x, y) relative to `origin`, extending
    /// `width` to the right and `height` upward.
    pub fn layout(&self, shape: &impl Shape, origin: Pos2) -> Rect {
        let scale = self.scale;
        let min = Pos2::new(
            origin.x + shape.x() as f32 * scale,
            origin.y - (shape.y() as f32 + shape.height() as f32) * scale,
        );
        Rect::from_min_size(
            min,
            Vec2::new(shape.width() as f32 * scale, shape.height() as f32 * scale),
        )
    }

    /// Paint rectangles then squares, each filled with its own random colour,
    /// around the centre of the painter's clip rect
    pub fn draw<S: Shape>(&mut self, painter: &Painter, rectangles: &[S], squares: &[S]) {
        let origin = painter.clip_rect().center();
        let count = rectangles.len() + squares.len();

        let mut rng = rand::rng();
        while self.fill_colors.len() < count {
            self.fill_colors
                .push(Color32::from_rgb(rng.random(), rng.random(), rng.random()));
        }

        for (shape, color) in rectangles.iter().chain(squares).zip(&self.fill_colors) {
            let rect = self.layout(shape, origin);
            painter.rect_filled(rect, 0.0, *color);
            painter.rect_stroke(rect, 0.0, self.outline);
        }
    }
}
