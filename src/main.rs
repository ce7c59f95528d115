mod config;
mod dial;
mod forecast;
mod logging;
mod ui;

use winit::event_loop::EventLoop;
use crate::config::DialConfig;
use crate::forecast::ForecastSource;
use crate::ui::widgets::uv_dial::UvDial;

#[cfg(feature = "mock_forecast")]
fn forecast_source() -> Box<dyn ForecastSource> {
    Box::new(forecast::mock::SyntheticForecast::new(chrono::Local::now().date_naive(), 9.5))
}

#[cfg(not(feature = "mock_forecast"))]
fn forecast_source() -> Box<dyn ForecastSource> {
    Box::new(forecast::sample_data::StaticForecast)
}

fn main() {
    logging::init_logging();

    let config = DialConfig::load();
    let source = forecast_source();
    let dial = UvDial::new(source.as_ref(), config);

    let event_loop = EventLoop::new();
    ui::run_ui(event_loop, dial);
}
