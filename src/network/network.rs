use std::fmt;

use rand::Rng;
use tracing::{debug, warn};

use crate::activation::activation::{Activation, Sigmoid};
use crate::error::{check_finite, check_len, NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::config::validate_topology;

/// Activations produced by one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    pub hidden: Vec<f64>,
    pub output: Vec<f64>,
}

/// A fixed input → hidden → output network without biases.
///
/// `weights_input_hidden` is (hidden_size × input_size) and
/// `weights_hidden_output` is (output_size × hidden_size); both shapes are
/// fixed at construction. Only [`Network::train`] mutates the weights.
#[derive(Debug, Clone)]
pub struct Network<A = Sigmoid> {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    weights_input_hidden: Matrix,
    weights_hidden_output: Matrix,
    learning_rate: f64,
    activation: A,
}

impl Network<Sigmoid> {
    /// Builds a sigmoid network with fan-in scaled Gaussian weights drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Network<Sigmoid>> {
        Network::with_activation(input_size, hidden_size, output_size, learning_rate, Sigmoid, rng)
    }
}

impl<A: Activation> Network<A> {
    /// Builds a network using a custom activation strategy.
    ///
    /// The input → hidden matrix is drawn first, then hidden → output, so a
    /// seeded `rng` reproduces the weights exactly.
    pub fn with_activation<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        activation: A,
        rng: &mut R,
    ) -> Result<Network<A>> {
        validate_topology(input_size, hidden_size, output_size, learning_rate)?;

        let weights_input_hidden = Matrix::fan_in(hidden_size, input_size, rng);
        let weights_hidden_output = Matrix::fan_in(output_size, hidden_size, rng);

        debug!(input_size, hidden_size, output_size, learning_rate, "network initialized");

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            weights_input_hidden,
            weights_hidden_output,
            learning_rate,
            activation,
        })
    }

    /// Forward pass; returns both hidden and output activations.
    pub fn forward(&self, input: &[f64]) -> Result<ForwardPass> {
        check_len("input", self.input_size, input.len())?;
        check_finite("input", input)?;

        let hidden = self.activation.apply_vec(&self.weights_input_hidden.mul_vec(input));
        let output = self.activation.apply_vec(&self.weights_hidden_output.mul_vec(&hidden));

        check_finite("hidden layer", &hidden).map_err(log_instability)?;
        check_finite("output layer", &output).map_err(log_instability)?;

        Ok(ForwardPass { hidden, output })
    }

    /// Inference: the output activations for `input`, one confidence per class.
    pub fn query(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.forward(input).map(|pass| pass.output)
    }

    /// One online gradient-descent step on a single (input, target) pair.
    ///
    /// Returns `‖target − output‖` measured before the update. The weights are
    /// untouched when an error is returned.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<f64> {
        check_len("target", self.output_size, target.len())?;
        check_finite("target", target)?;
        let ForwardPass { hidden, output } = self.forward(input)?;

        let output_error: Vec<f64> = target.iter().zip(output.iter())
            .map(|(t, o)| t - o)
            .collect();

        // Back-projected through the pre-update weights. No activation
        // derivative is applied to the output error at this stage.
        let hidden_error = self.weights_hidden_output.transpose_mul_vec(&output_error);

        let output_delta = self.local_gradient(&output_error, &output);
        let hidden_delta = self.local_gradient(&hidden_error, &hidden);

        self.weights_hidden_output.add_scaled_outer(self.learning_rate, &output_delta, &hidden);
        self.weights_input_hidden.add_scaled_outer(self.learning_rate, &hidden_delta, input);

        Ok(output_error.iter().map(|e| e * e).sum::<f64>().sqrt())
    }

    /// error ⊙ act'(activation)
    fn local_gradient(&self, error: &[f64], activations: &[f64]) -> Vec<f64> {
        error.iter().zip(activations.iter())
            .map(|(e, &y)| e * self.activation.derivative_from_output(y))
            .collect()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn weights_input_hidden(&self) -> &Matrix {
        &self.weights_input_hidden
    }

    pub fn weights_hidden_output(&self) -> &Matrix {
        &self.weights_hidden_output
    }

    pub fn activation(&self) -> &A {
        &self.activation
    }
}

fn log_instability(err: NetworkError) -> NetworkError {
    warn!(%err, "forward pass produced non-finite activations");
    err
}

impl<A> fmt::Display for Network<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Neural network:")?;
        writeln!(f, "  input nodes:  {}", self.input_size)?;
        writeln!(f, "  hidden nodes: {}", self.hidden_size)?;
        writeln!(f, "  output nodes: {}", self.output_size)?;
        writeln!(f, "  learning rate: {}", self.learning_rate)?;
        let (r, c) = self.weights_input_hidden.shape();
        writeln!(f, "  input → hidden weights: {r} x {c}")?;
        let (r, c) = self.weights_hidden_output.shape();
        write!(f, "  hidden → output weights: {r} x {c}")
    }
}
