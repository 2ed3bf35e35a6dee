pub(crate) mod image;
pub(crate) mod json;

pub use image::*;
pub use json::*;
