use std::sync::Arc;
use winit::{
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder},
    dpi::PhysicalSize,
};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasRawWindowHandle;
use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextAttributesBuilder, PossiblyCurrentContext},
    display::GetGlDisplay,
    prelude::*,
    surface::{SurfaceAttributesBuilder, WindowSurface},
};
use femtovg::{renderer::OpenGl, Canvas};
use std::num::NonZeroU32;
use std::ffi::CString;
use crate::logging::UI_NAMESPACE;
use crate::ui::widgets::WidgetGeometry;
use log::{debug, info, warn};

const WINDOW_TITLE: &str = "UV Index";
const WINDOW_SIZE: (u32, u32) = (480, 560);

// First one that loads wins
const FONT_PATHS: [&str; 7] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub struct AppWindow {
    pub window: Arc<Window>,
    pub gl_config: glutin::config::Config,
}

impl AppWindow {
    /// `min_size` is the smallest area the window may shrink to.
    pub fn new(event_loop: &EventLoopWindowTarget<()>, min_size: WidgetGeometry) -> Self {
        let window_builder = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1))
            .with_min_inner_size(PhysicalSize::new(min_size.width.ceil() as u32, min_size.height.ceil() as u32))
            .with_resizable(true);

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_stencil_size(8)
            .with_transparency(false);

        info!(target: UI_NAMESPACE, "Building display...");
        // Prefer the config with the most MSAA samples; the arc edges need it.
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_builder(Some(window_builder))
            .build(event_loop, template, |configs| {
                configs
                    .max_by_key(|config| config.num_samples())
                    .expect("No GL config available")
            })
            .expect("Failed to create display");

        let window = window.expect("Failed to create window");
        debug!(
            target: UI_NAMESPACE,
            "Window created: {}x{}, {} MSAA samples",
            window.inner_size().width,
            window.inner_size().height,
            gl_config.num_samples()
        );

        Self {
            window: Arc::new(window),
            gl_config,
        }
    }
}

pub struct FemtovgContext {
    pub canvas: Canvas<OpenGl>,
    pub surface: glutin::surface::Surface<WindowSurface>,
    pub gl_context: PossiblyCurrentContext,
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value.max(1)).unwrap_or(NonZeroU32::MIN)
}

fn load_first_font(canvas: &mut Canvas<OpenGl>) -> Option<&'static str> {
    FONT_PATHS.iter().copied().find(|path| {
        std::fs::read(path)
            .ok()
            .is_some_and(|data| canvas.add_font_mem(&data).is_ok())
    })
}

pub fn create_femtovg_context(app_window: &AppWindow) -> FemtovgContext {
    info!(target: UI_NAMESPACE, "Creating OpenGL context...");
    let display = app_window.gl_config.display();
    let raw_window_handle = app_window.window.raw_window_handle();

    let context_attributes = ContextAttributesBuilder::new()
        .with_profile(glutin::context::GlProfile::Core)
        .with_context_api(glutin::context::ContextApi::OpenGl(Some(glutin::context::Version::new(3, 3))))
        .with_debug(cfg!(debug_assertions))
        .build(Some(raw_window_handle));

    let not_current_context = unsafe {
        display
            .create_context(&app_window.gl_config, &context_attributes)
            .expect("Failed to create GL context")
    };

    let size = app_window.window.inner_size();
    let attrs = SurfaceAttributesBuilder::<WindowSurface>::new()
        .with_srgb(Some(true))
        .build(raw_window_handle, non_zero(size.width), non_zero(size.height));

    let surface = unsafe {
        display
            .create_window_surface(&app_window.gl_config, &attrs)
            .expect("Failed to create surface")
    };

    let gl_context = not_current_context
        .make_current(&surface)
        .expect("Failed to make context current");

    unsafe {
        gl::load_with(|s| match CString::new(s) {
            Ok(name) => display.get_proc_address(&name).cast(),
            Err(_) => std::ptr::null(),
        });
        gl::ClearColor(0.04, 0.04, 0.055, 1.0);
        gl::Clear(gl::COLOR_BUFFER_BIT);
        gl::Viewport(0, 0, size.width as i32, size.height as i32);
    }

    let renderer = unsafe {
        OpenGl::new_from_function_cstr(|s| display.get_proc_address(s).cast())
            .expect("Cannot create renderer")
    };

    let mut canvas = Canvas::new(renderer).expect("Cannot create canvas");
    canvas.set_size(size.width, size.height, app_window.window.scale_factor() as f32);

    match load_first_font(&mut canvas) {
        Some(path) => info!(target: UI_NAMESPACE, "Loaded font from: {}", path),
        None => warn!(target: UI_NAMESPACE, "No system fonts could be loaded. Labels and the reading will not show."),
    }

    surface.swap_buffers(&gl_context).expect("Failed to swap buffers");
    info!(target: UI_NAMESPACE, "Femtovg context ready");

    FemtovgContext {
        canvas,
        surface,
        gl_context,
    }
}
