use tracing::{debug, trace};

use crate::activation::activation::Activation;
use crate::data::encode::argmax;
use crate::error::{check_len, Result};
use crate::network::network::Network;

/// Runs one training step per sample, in the given order, and returns the
/// mean pre-update error norm.
///
/// Samples are never shuffled: each step sees the weights left by the
/// previous one, so order is part of the result. Stops at the first sample
/// that fails; earlier samples stay applied.
pub fn train_network<A: Activation>(
    network: &mut Network<A>,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<f64> {
    check_len("targets", inputs.len(), targets.len())?;
    if inputs.is_empty() {
        return Ok(0.0);
    }

    let mut total_error = 0.0;
    for (index, (input, target)) in inputs.iter().zip(targets.iter()).enumerate() {
        let error = network.train(input, target)?;
        trace!(index, error, "trained sample");
        total_error += error;
    }

    let mean_error = total_error / inputs.len() as f64;
    debug!(samples = inputs.len(), mean_error, "training pass finished");
    Ok(mean_error)
}

/// Fraction of samples whose highest-confidence output matches the label.
pub fn evaluate_accuracy<A: Activation>(
    network: &Network<A>,
    inputs: &[Vec<f64>],
    labels: &[usize],
) -> Result<f64> {
    check_len("labels", inputs.len(), labels.len())?;
    if inputs.is_empty() {
        return Ok(0.0);
    }

    let mut correct = 0usize;
    for (input, &label) in inputs.iter().zip(labels.iter()) {
        let output = network.query(input)?;
        if argmax(&output) == Some(label) {
            correct += 1;
        }
    }

    let accuracy = correct as f64 / inputs.len() as f64;
    debug!(samples = inputs.len(), correct, accuracy, "evaluation finished");
    Ok(accuracy)
}
