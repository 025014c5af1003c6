pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod uniforms;

pub use error::{FlexitileError, Result};
