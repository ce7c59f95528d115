use chrono::Local;
use femtovg::{Canvas, renderer::Renderer, Color, Paint};
use crate::ui::widgets::{Widget, WidgetGeometry};
use crate::ui::widgets::uv_dial::UvDial;

const WINDOW_MARGIN: f32 = 24.0;
const TITLE_HEIGHT: f32 = 48.0;

pub fn render_ui<R: Renderer>(canvas: &mut Canvas<R>, dial: &mut UvDial) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    canvas.clear_rect(0, 0, canvas.width() as u32, canvas.height() as u32, Color::rgb(10, 10, 14));

    let mut title_paint = Paint::color(Color::rgb(255, 255, 255));
    title_paint.set_font_size(24.0);
    let _ = canvas.fill_text(WINDOW_MARGIN, WINDOW_MARGIN + 16.0, "UV Index", &title_paint);

    let area = WidgetGeometry::new(0.0, TITLE_HEIGHT, width, (height - TITLE_HEIGHT).max(0.0));
    let rect = area.centered_square(WINDOW_MARGIN);

    dial.set_time(Local::now().time());
    dial.render(canvas, rect);

    canvas.flush();
}
