mod add;
mod image;

pub use add::*;
pub use image::*;
