//! Territory-share betting

mod color;
mod engine;


pub use color::*;
pub use engine::*;
