mod window;
mod render;
pub mod widgets;
pub mod theme;

use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use glutin::surface::GlSurface;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use crate::logging::UI_NAMESPACE;
use crate::ui::widgets::Widget;
use crate::ui::widgets::uv_dial::UvDial;
use log::{debug, info, warn};

pub fn run_ui(event_loop: EventLoop<()>, mut dial: UvDial) {
    info!(target: UI_NAMESPACE, "Creating application window...");
    let app_window = window::AppWindow::new(&event_loop, dial.preferred_size());
    info!(target: UI_NAMESPACE, "Creating femtovg context...");
    let mut femto_ctx = window::create_femtovg_context(&app_window);
    let mut last_frame = Instant::now();
    // Only the time marker moves; a frame per second is plenty.
    let frame_interval = Duration::from_secs(1);

    info!(target: UI_NAMESPACE, "Starting event loop...");
    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!(target: UI_NAMESPACE, "Window close requested");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    debug!(target: UI_NAMESPACE, "Window resized: {}x{}", size.width, size.height);
                    let (Some(width), Some(height)) = (NonZeroU32::new(size.width.max(1)), NonZeroU32::new(size.height.max(1))) else {
                        return;
                    };
                    femto_ctx.surface.resize(&femto_ctx.gl_context, width, height);
                    femto_ctx.canvas.set_size(width.get(), height.get(), app_window.window.scale_factor() as f32);
                    app_window.window.request_redraw();
                }
                _ => (),
            },
            Event::RedrawRequested(_) => {
                render::render_ui(&mut femto_ctx.canvas, &mut dial);

                if let Err(e) = femto_ctx.surface.swap_buffers(&femto_ctx.gl_context) {
                    warn!(target: UI_NAMESPACE, "Failed to swap buffers: {:?}", e);
                }
                last_frame = Instant::now();
                *control_flow = ControlFlow::WaitUntil(last_frame + frame_interval);
            }
            Event::MainEventsCleared => {
                if Instant::now().duration_since(last_frame) >= frame_interval {
                    app_window.window.request_redraw();
                } else {
                    *control_flow = ControlFlow::WaitUntil(last_frame + frame_interval);
                }
            }
            _ => (),
        }
    });
}
