use glow::HasContext;
use glutin::{ContextBuilder, PossiblyCurrent, WindowedContext};
use log::info;
use snafu::{ensure, ResultExt, Snafu};
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum Error {
    #[snafu(display("Failed to create the windowed OpenGL context: {}", source))]
    CreateWindowedContext { source: glutin::CreationError },

    #[snafu(display("Failed to make the OpenGL context current: {}", source))]
    MakeContextCurrent { source: glutin::ContextError },

    #[snafu(display("Failed to load the OpenGL function table"))]
    LoadFunctionTable,

    #[snafu(display("Failed to swap the window buffers: {}", source))]
    SwapBuffers { source: glutin::ContextError },
}

/// A native window together with its current OpenGL context and the
/// function table loaded from it.
pub struct OpenGlContext {
    gl: glow::Context,
    windowed_context: WindowedContext<PossiblyCurrent>,
}

impl OpenGlContext {
    pub fn new(window_builder: WindowBuilder, event_loop: &EventLoop<()>) -> Result<Self> {
        let windowed_context = ContextBuilder::new()
            .with_vsync(true)
            .build_windowed(window_builder, event_loop)
            .context(CreateWindowedContext)?;

        let windowed_context = unsafe {
            windowed_context
                .make_current()
                .map_err(|(_, error)| error)
                .context(MakeContextCurrent)?
        };

        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| {
                windowed_context.get_proc_address(symbol) as *const _
            })
        };

        // An empty version string means the loader resolved nothing.
        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        ensure!(!version.is_empty(), LoadFunctionTable);
        info!("Loaded OpenGL {}", version);

        Ok(Self {
            gl,
            windowed_context,
        })
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        self.windowed_context.window()
    }

    /// Resizes the platform surface and the drawable area to match the window.
    pub fn resize(&self, dimensions: PhysicalSize<u32>) {
        self.windowed_context.resize(dimensions);
        unsafe {
            self.gl
                .viewport(0, 0, dimensions.width as i32, dimensions.height as i32);
        }
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.windowed_context.swap_buffers().context(SwapBuffers)
    }
}
