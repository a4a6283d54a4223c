pub mod math;
pub mod activation;
pub mod network;
pub mod data;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::{Activation, Sigmoid};
pub use network::network::{ForwardPass, Network};
pub use network::config::NetworkConfig;
pub use data::encode::{argmax, normalize_pixels, one_hot};
pub use train::trainer::{evaluate_accuracy, train_network};
pub use error::{NetworkError, Result};
