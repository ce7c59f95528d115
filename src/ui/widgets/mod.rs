use femtovg::{Canvas, renderer::Renderer};

pub mod uv_dial;

/// Defines the position and size of a widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WidgetGeometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Largest square centered in this rectangle, shrunk by `margin` on every side.
    pub fn centered_square(&self, margin: f32) -> Self {
        let side = (self.width.min(self.height) - 2.0 * margin).max(0.0);
        Self::new(self.center_x() - side / 2.0, self.center_y() - side / 2.0, side, side)
    }
}

/// Base trait for all dashboard widgets
pub trait Widget {
    /// Render the widget inside the given rectangle.
    fn render<R: Renderer>(&self, canvas: &mut Canvas<R>, rect: WidgetGeometry);

    /// Size the widget is designed for, anchored at the origin.
    fn preferred_size(&self) -> WidgetGeometry;
}
