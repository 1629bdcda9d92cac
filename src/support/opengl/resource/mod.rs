pub use self::{
    buffer::{GeometryBuffer, VertexAttribute, VertexLayout},
    shader::ShaderProgram,
};

pub mod buffer;
pub mod shader;
