use crate::opengl::{context, OpenGlContext};
use glow::HasContext;
use std::{sync::Arc, time::Instant};
use winit::dpi::PhysicalSize;

pub struct Renderer {
    pub context: Arc<OpenGlContext>,
    start_time: Instant,
}

impl Renderer {
    pub fn new(context: Arc<OpenGlContext>) -> Self {
        Self {
            context,
            start_time: Instant::now(),
        }
    }

    /// Seconds since the renderer was created, used to drive animated values.
    pub fn elapsed_seconds(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }

    pub fn clear(&self, color: [f32; 4]) {
        let gl = self.context.gl();
        unsafe {
            gl.clear_color(color[0], color[1], color[2], color[3]);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    pub fn handle_resize(&self, width: u32, height: u32) {
        self.context.resize(PhysicalSize::new(width, height));
    }

    pub fn present(&self) -> Result<(), context::Error> {
        self.context.swap_buffers()
    }
}
