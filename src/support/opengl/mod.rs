pub use self::{context::*, renderer::*, resource::*};

pub mod context;
pub mod renderer;
pub mod resource;
