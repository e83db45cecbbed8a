//! Plain multilayer perceptron over posterior vectors.

use burn::{
    nn::{Linear, Relu, Sigmoid},
    prelude::*,
};

use super::{Architecture, ModelParams};
use crate::init;

/// Three linear stages, the last gated by a sigmoid. Consumes flat feature
/// vectors (e.g. top-k posteriors from a target model); `params.size` is
/// unused and kept only for signature parity with the convolutional
/// variants.
#[derive(Module, Debug)]
pub struct Mlp<B: Backend> {
    dense1: Linear<B>,
    dense2: Linear<B>,
    dense3: Linear<B>,
    activation: Relu,
    gate: Sigmoid,
}

impl<B: Backend> Architecture<B> for Mlp<B> {
    type Input = Tensor<B, 2>;

    fn init(params: &ModelParams, device: &B::Device) -> Self {
        let width = 2 * params.n_filters;
        Self {
            dense1: init::linear(params.n_in, width, device),
            dense2: init::linear(width, width, device),
            dense3: init::linear(width, params.n_classes, device),
            activation: Relu::new(),
            gate: Sigmoid::new(),
        }
    }

    /// # Shapes
    ///   - Features [batch_size, n_in]
    ///   - Output [batch_size, n_classes], sigmoid-activated
    fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.activation.forward(self.dense1.forward(features));
        let x = self.activation.forward(self.dense2.forward(x));
        self.gate.forward(self.dense3.forward(x))
    }

    fn name(&self) -> &'static str {
        "mlp"
    }
}
