pub mod messages;
pub mod render;

pub use render::Renderer;
