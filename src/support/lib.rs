pub mod app;
pub mod logger;
pub mod opengl;
