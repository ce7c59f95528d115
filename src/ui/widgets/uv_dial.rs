use chrono::{NaiveTime, Timelike};
use femtovg::{Align, Baseline, Canvas, LineCap, Paint, Path, Solidity, renderer::Renderer};
use log::Level::{Debug, Info, Warn};
use crate::config::DialConfig;
use crate::dial::{build_gradient_stops, color_at, GradientStop, TimeLabel};
use crate::forecast::{DayForecast, ForecastSource, UvReading};
use crate::ui::theme::Theme;
use crate::ui::widgets::{Widget, WidgetGeometry};
use crate::ui_log;

// Font sizes in the theme are meant for a dial of this width and scale with it.
const DIAL_DESIGN_REFERENCE_WIDTH: f32 = 300.0;

// Number of solid-color pieces the gradient arc is drawn with.
const ARC_SEGMENTS: usize = 180;

/// A piece of the colored arc, in screen radians (clockwise from 3 o'clock).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub start_angle: f32,
    pub end_angle: f32,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Screen-space geometry of the dial for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DialLayout {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub arc_width: f32,
    pub font_scale: f32,
    /// Whole arc, drawn in the neutral track color underneath the gradient.
    pub track: (f32, f32),
    pub segments: Vec<ArcSegment>,
    pub labels: Vec<PlacedLabel>,
    pub marker: (f32, f32),
    pub reading: Option<UvReading>,
    pub peak: Option<UvReading>,
}

/// UV-index dial: the day's forecast painted along an arc, with hour labels, a marker
/// for the current time and the current reading in the middle.
pub struct UvDial {
    config: DialConfig,
    forecast: DayForecast,
    stops: Vec<GradientStop>,
    labels: Vec<TimeLabel>,
    time: NaiveTime,
}

impl UvDial {
    pub fn new(source: &dyn ForecastSource, config: DialConfig) -> Self {
        let forecast = DayForecast::from_source(source);
        if forecast.is_empty() {
            ui_log!(Warn, "{} supplied no usable samples; the dial will show an empty track", source.name());
        }
        let (arc_start, arc_end) = config.span.arc_bounds();
        let stops = build_gradient_stops(forecast.samples(), arc_start, arc_end);
        ui_log!(Info, "UV dial built from {}: {} samples, {} gradient stops", source.name(), forecast.samples().len(), stops.len());
        for stop in &stops {
            ui_log!(Debug, "  stop {:.4} {:?}", stop.position, stop.color);
        }
        let labels = config.labels.labels();
        Self {
            config,
            forecast,
            stops,
            labels,
            time: NaiveTime::MIN,
        }
    }

    /// Time of day used for the marker and the reading.
    pub fn set_time(&mut self, time: NaiveTime) {
        self.time = time;
    }

    pub fn layout(&self, rect: WidgetGeometry) -> DialLayout {
        let span = self.config.span;
        let theme = &self.config.theme;
        let center_x = rect.center_x();
        let center_y = rect.center_y();
        let radius = rect.width.min(rect.height) * 0.5 * (1.0 - theme.arc_width / 2.0);
        let (arc_start, arc_end) = span.arc_bounds();
        let screen_angle = |fraction: f32| (-span.angle_for_fraction(fraction)).to_radians();

        let segments = if self.stops.is_empty() {
            Vec::new()
        } else {
            let step = (arc_end - arc_start) / ARC_SEGMENTS as f32;
            (0..ARC_SEGMENTS)
                .filter_map(|i| {
                    let f0 = arc_start + step * i as f32;
                    let f1 = f0 + step;
                    let color = color_at(&self.stops, (f0 + f1) / 2.0)?;
                    Some(ArcSegment { start_angle: screen_angle(f0), end_angle: screen_angle(f1), color })
                })
                .collect()
        };

        let label_radius = radius * self.config.label_radius_ratio;
        let labels = self
            .labels
            .iter()
            .map(|label| {
                let (dx, dy) = span.position_for_hour(label.hour, label_radius);
                PlacedLabel { x: center_x + dx, y: center_y + dy, text: label.text.clone() }
            })
            .collect();

        let hour = self.time.hour() as f32 + self.time.minute() as f32 / 60.0;
        let (mx, my) = span.position_for_hour(hour, radius);

        DialLayout {
            center_x,
            center_y,
            radius,
            arc_width: radius * theme.arc_width,
            font_scale: rect.width / DIAL_DESIGN_REFERENCE_WIDTH,
            track: (screen_angle(arc_start), screen_angle(arc_end)),
            segments,
            labels,
            marker: (center_x + mx, center_y + my),
            reading: self.forecast.reading_at(self.time),
            peak: self.forecast.peak(),
        }
    }
}

impl Widget for UvDial {
    fn render<R: Renderer>(&self, canvas: &mut Canvas<R>, rect: WidgetGeometry) {
        let layout = self.layout(rect);
        let theme = &self.config.theme;

        // --- BACKGROUND ---
        let mut bg_path = Path::new();
        bg_path.circle(layout.center_x, layout.center_y, layout.radius + layout.arc_width / 2.0);
        canvas.fill_path(&bg_path, &Paint::color(Theme::color4(theme.background_color)));

        // --- TRACK ---
        let mut track_path = Path::new();
        track_path.arc(layout.center_x, layout.center_y, layout.radius, layout.track.0, layout.track.1, Solidity::Hole);
        let mut track_paint = Paint::color(Theme::color4(theme.track_color));
        track_paint.set_line_width(layout.arc_width);
        track_paint.set_line_cap(LineCap::Round);
        track_paint.set_anti_alias(true);
        canvas.stroke_path(&track_path, &track_paint);

        // --- GRADIENT ARC ---
        // Drawn piecewise; femtovg has no angular gradient paint.
        for segment in &layout.segments {
            let mut path = Path::new();
            // Tiny overlap hides seams between neighbours
            path.arc(layout.center_x, layout.center_y, layout.radius, segment.start_angle, segment.end_angle + 0.002, Solidity::Hole);
            let mut paint = Paint::color(Theme::color3(segment.color));
            paint.set_line_width(layout.arc_width);
            paint.set_line_cap(LineCap::Butt);
            paint.set_anti_alias(true);
            canvas.stroke_path(&path, &paint);
        }

        // --- HOUR LABELS ---
        let mut label_paint = Paint::color(Theme::color3(theme.secondary_text_color));
        label_paint.set_font_size(theme.font_size * layout.font_scale);
        label_paint.set_text_align(Align::Center);
        label_paint.set_text_baseline(Baseline::Middle);
        label_paint.set_anti_alias(true);
        for label in &layout.labels {
            let _ = canvas.fill_text(label.x, label.y, &label.text, &label_paint);
        }

        // --- CURRENT TIME MARKER ---
        let marker_radius = layout.arc_width * 0.45;
        let mut marker_path = Path::new();
        marker_path.circle(layout.marker.0, layout.marker.1, marker_radius);
        canvas.fill_path(&marker_path, &Paint::color(Theme::color3(theme.marker_color)));
        let mut marker_border = Paint::color(Theme::color3(theme.marker_border_color));
        marker_border.set_line_width(2.0);
        canvas.stroke_path(&marker_path, &marker_border);

        // --- READING ---
        let Some(reading) = layout.reading else {
            let mut paint = Paint::color(Theme::color3(theme.secondary_text_color));
            paint.set_font_size(theme.font_size * 1.5 * layout.font_scale);
            paint.set_text_align(Align::Center);
            paint.set_text_baseline(Baseline::Middle);
            let _ = canvas.fill_text(layout.center_x, layout.center_y, "No forecast", &paint);
            return;
        };

        let mut value_paint = Paint::color(Theme::color3(theme.text_color));
        value_paint.set_font_size(theme.font_size * 4.0 * layout.font_scale);
        value_paint.set_text_align(Align::Center);
        value_paint.set_text_baseline(Baseline::Middle);
        value_paint.set_anti_alias(true);
        let _ = canvas.fill_text(layout.center_x, layout.center_y - layout.radius * 0.08, &format!("{:.1}", reading.uv_index), &value_paint);

        let mut severity_paint = Paint::color(Theme::color3(reading.bucket.color().rgb()));
        severity_paint.set_font_size(theme.font_size * 1.6 * layout.font_scale);
        severity_paint.set_text_align(Align::Center);
        severity_paint.set_text_baseline(Baseline::Middle);
        severity_paint.set_anti_alias(true);
        let _ = canvas.fill_text(layout.center_x, layout.center_y + layout.radius * 0.25, reading.bucket.label(), &severity_paint);

        if let Some(peak) = layout.peak {
            let mut peak_paint = Paint::color(Theme::color3(theme.secondary_text_color));
            peak_paint.set_font_size(theme.font_size * layout.font_scale);
            peak_paint.set_text_align(Align::Center);
            peak_paint.set_text_baseline(Baseline::Middle);
            peak_paint.set_anti_alias(true);
            let text = format!("Peak today {:.1} ({})", peak.uv_index, peak.bucket);
            let _ = canvas.fill_text(layout.center_x, layout.center_y + layout.radius * 0.45, &text, &peak_paint);
        }
    }

    fn preferred_size(&self) -> WidgetGeometry {
        WidgetGeometry::new(0.0, 0.0, DIAL_DESIGN_REFERENCE_WIDTH, DIAL_DESIGN_REFERENCE_WIDTH)
    }
}
