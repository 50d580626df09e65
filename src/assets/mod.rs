//! Local asset loading.

pub mod image;

pub use self::image::{ImageData, ImageLoader};
