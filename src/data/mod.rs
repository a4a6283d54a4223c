pub mod encode;

pub use encode::{argmax, normalize_pixels, one_hot};
