pub mod trainer;

pub use trainer::{evaluate_accuracy, train_network};
