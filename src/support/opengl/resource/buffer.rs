use crate::opengl::OpenGlContext;
use glow::HasContext;
use snafu::Snafu;
use std::{mem, sync::Arc};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum Error {
    #[snafu(display("Failed to create a vertex array object: {}", reason))]
    CreateVertexArray { reason: String },

    #[snafu(display("Failed to create a buffer object: {}", reason))]
    CreateBuffer { reason: String },
}

pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
}

/// Describes how the interleaved float buffer maps to per-vertex inputs.
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    pub fn new(attributes: Vec<VertexAttribute>) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    pub fn components_per_vertex(&self) -> i32 {
        self.attributes
            .iter()
            .map(|attribute| attribute.components)
            .sum()
    }

    /// Byte distance between two consecutive vertices in the buffer.
    pub fn stride(&self) -> i32 {
        self.components_per_vertex() * mem::size_of::<f32>() as i32
    }

    /// Byte offset of the attribute at `index` within one vertex.
    pub fn offset(&self, index: usize) -> i32 {
        self.attributes[..index]
            .iter()
            .map(|attribute| attribute.components)
            .sum::<i32>()
            * mem::size_of::<f32>() as i32
    }
}

/// A vertex buffer with an optional index buffer, uploaded once and
/// captured by a vertex array object configured from a [`VertexLayout`].
pub struct GeometryBuffer {
    context: Arc<OpenGlContext>,
    vertex_array: glow::VertexArray,
    vertex_buffer: glow::Buffer,
    index_buffer: Option<glow::Buffer>,
    index_count: i32,
}

impl GeometryBuffer {
    pub fn new(
        context: Arc<OpenGlContext>,
        vertices: &[f32],
        indices: Option<&[u32]>,
        layout: &VertexLayout,
    ) -> Result<Self> {
        let gl = context.gl();

        unsafe {
            let vertex_array = gl
                .create_vertex_array()
                .map_err(|reason| Error::CreateVertexArray { reason })?;
            gl.bind_vertex_array(Some(vertex_array));

            let vertex_buffer = gl
                .create_buffer()
                .map_err(|reason| Error::CreateBuffer { reason })?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            for (index, attribute) in layout.attributes().iter().enumerate() {
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    layout.stride(),
                    layout.offset(index),
                );
                gl.enable_vertex_attrib_array(attribute.location);
            }

            let index_buffer = match indices {
                Some(indices) => {
                    let index_buffer = gl
                        .create_buffer()
                        .map_err(|reason| Error::CreateBuffer { reason })?;
                    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer));
                    gl.buffer_data_u8_slice(
                        glow::ELEMENT_ARRAY_BUFFER,
                        bytemuck::cast_slice(indices),
                        glow::STATIC_DRAW,
                    );
                    Some(index_buffer)
                }
                None => None,
            };

            // The element binding lives in the vertex array state, so only
            // the vertex array and the array buffer are unbound here.
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            let index_count = indices.map(|indices| indices.len() as i32).unwrap_or_default();

            Ok(Self {
                context,
                vertex_array,
                vertex_buffer,
                index_buffer,
                index_count,
            })
        }
    }

    pub fn index_count(&self) -> i32 {
        self.index_count
    }

    /// Issues one indexed draw of the whole mesh, leaving nothing bound after.
    pub fn draw(&self) {
        let gl = self.context.gl();
        unsafe {
            gl.bind_vertex_array(Some(self.vertex_array));
            gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
            gl.bind_vertex_array(None);
        }
    }
}

impl Drop for GeometryBuffer {
    fn drop(&mut self) {
        let gl = self.context.gl();
        unsafe {
            gl.delete_buffer(self.vertex_buffer);
            if let Some(index_buffer) = self.index_buffer {
                gl.delete_buffer(index_buffer);
            }
            gl.delete_vertex_array(self.vertex_array);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interleaved_layout() -> VertexLayout {
        VertexLayout::new(vec![
            VertexAttribute {
                location: 0,
                components: 3,
            },
            VertexAttribute {
                location: 1,
                components: 3,
            },
        ])
    }

    #[test]
    fn interleaved_layout_stride_and_offsets() {
        let layout = interleaved_layout();
        assert_eq!(layout.components_per_vertex(), 6);
        assert_eq!(layout.stride(), 24);
        assert_eq!(layout.offset(0), 0);
        assert_eq!(layout.offset(1), 12);
    }

    #[test]
    fn empty_layout_has_zero_stride() {
        let layout = VertexLayout::new(Vec::new());
        assert_eq!(layout.stride(), 0);
    }
}
