use crate::opengl::OpenGlContext;
use glow::HasContext;
use log::error;
use snafu::Snafu;
use std::sync::Arc;

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum Error {
    #[snafu(display("Failed to create a {} shader object: {}", stage, reason))]
    CreateShaderObject { stage: &'static str, reason: String },

    #[snafu(display("Failed to create a shader program object: {}", reason))]
    CreateProgramObject { reason: String },
}

/// Two shader stages compiled from source and linked into one program.
///
/// Compile and link diagnostics are logged rather than returned, so a
/// broken shader leaves the demo running with an unusable program instead
/// of aborting it.
pub struct ShaderProgram {
    context: Arc<OpenGlContext>,
    program: glow::Program,
}

impl ShaderProgram {
    pub fn new(
        context: Arc<OpenGlContext>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self> {
        let gl = context.gl();

        let vertex_shader = Self::compile_stage(gl, glow::VERTEX_SHADER, "vertex", vertex_source)?;
        let fragment_shader =
            Self::compile_stage(gl, glow::FRAGMENT_SHADER, "fragment", fragment_source)?;

        let program = unsafe {
            let program = gl
                .create_program()
                .map_err(|reason| Error::CreateProgramObject { reason })?;
            gl.attach_shader(program, vertex_shader);
            gl.attach_shader(program, fragment_shader);
            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                error!(
                    "Failed to link shader program: {}",
                    gl.get_program_info_log(program)
                );
            }

            // The stage objects are no longer needed once linked.
            gl.detach_shader(program, vertex_shader);
            gl.detach_shader(program, fragment_shader);
            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);

            program
        };

        Ok(Self { context, program })
    }

    fn compile_stage(
        gl: &glow::Context,
        stage: u32,
        stage_name: &'static str,
        source: &str,
    ) -> Result<glow::Shader> {
        unsafe {
            let shader = gl.create_shader(stage).map_err(|reason| {
                Error::CreateShaderObject {
                    stage: stage_name,
                    reason,
                }
            })?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                error!(
                    "Failed to compile {} shader: {}",
                    stage_name,
                    gl.get_shader_info_log(shader)
                );
            }

            Ok(shader)
        }
    }

    pub fn activate(&self) {
        let gl = self.context.gl();
        unsafe {
            gl.use_program(Some(self.program));
        }
    }

    pub fn set_uniform_vec4(&self, name: &str, value: [f32; 4]) {
        let gl = self.context.gl();
        unsafe {
            let location = gl.get_uniform_location(self.program, name);
            gl.uniform_4_f32(location.as_ref(), value[0], value[1], value[2], value[3]);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.context.gl().delete_program(self.program);
        }
    }
}
