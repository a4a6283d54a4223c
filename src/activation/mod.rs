pub mod activation;

pub use activation::{Activation, Sigmoid, SIGMOID_CEILING, SIGMOID_FLOOR};
