pub mod commands;
pub mod context;

pub use commands::DrawCommand;
pub use context::PaintContext;
