//! Shadow-model CNN and attack perceptron from the ML-Leaks setup.

use burn::{
    nn::{
        BatchNorm, Linear, Relu, Sigmoid,
        conv::Conv2d,
        pool::{MaxPool2d, MaxPool2dConfig},
    },
    prelude::*,
};
use log::debug;

use super::{Architecture, ModelParams};
use crate::init;

/// Two conv+norm+pool blocks feeding two linear layers, with the flattened
/// width hard-coded to an 8x8 residual map (32x32 inputs).
///
/// `params.size` is the width of the first dense layer, not the input side
/// length; with the default parameters it coincides with the `2 * n_filters`
/// width the output layer consumes. That coincidence is inherited as-is, so
/// non-default parameter sets can produce a dense-width mismatch that only
/// surfaces on the first forward call.
#[derive(Module, Debug)]
pub struct MlleaksCnn<B: Backend> {
    conv1: Conv2d<B>,
    norm1: BatchNorm<B, 2>,
    pool1: MaxPool2d,
    conv2: Conv2d<B>,
    norm2: BatchNorm<B, 2>,
    pool2: MaxPool2d,
    fc: Linear<B>,
    output: Linear<B>,
    activation: Relu,
    flat_features: usize,
}

impl<B: Backend> Architecture<B> for MlleaksCnn<B> {
    type Input = Tensor<B, 4>;

    fn init(params: &ModelParams, device: &B::Device) -> Self {
        let n_filters = params.n_filters;
        let flat_features = 2 * n_filters * 8 * 8;
        debug!("mlleaks_cnn: 8x8 feature map, {flat_features} flat features");

        Self {
            conv1: init::conv2d([params.n_in, n_filters], 5, 1, 2, device),
            norm1: init::batch_norm(n_filters, device),
            pool1: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            conv2: init::conv2d([n_filters, 2 * n_filters], 5, 1, 2, device),
            norm2: init::batch_norm(2 * n_filters, device),
            pool2: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            fc: init::linear(flat_features, params.size, device),
            output: init::linear(2 * n_filters, params.n_classes, device),
            activation: Relu::new(),
            flat_features,
        }
    }

    /// # Shapes
    ///   - Images [batch_size, n_in, 32, 32]
    ///   - Output [batch_size, n_classes]
    fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let x = self.conv1.forward(images);
        let x = self.pool1.forward(self.activation.forward(self.norm1.forward(x)));
        let x = self.conv2.forward(x);
        let x = self.pool2.forward(self.activation.forward(self.norm2.forward(x)));

        let [batch_size, _, _, _] = x.dims();
        let x = x.reshape([batch_size, self.flat_features]);

        let x = self.fc.forward(x);
        self.output.forward(x)
    }

    fn name(&self) -> &'static str {
        "mlleaks_cnn"
    }
}

/// Single-hidden-layer perceptron for binary membership classification.
///
/// The sigmoid gates the hidden unit; the output score stays un-squashed.
#[derive(Module, Debug)]
pub struct MlleaksMlp<B: Backend> {
    hidden: Linear<B>,
    output: Linear<B>,
    activation: Sigmoid,
}

impl<B: Backend> Architecture<B> for MlleaksMlp<B> {
    type Input = Tensor<B, 2>;

    fn init(params: &ModelParams, device: &B::Device) -> Self {
        Self {
            hidden: init::linear(params.n_in, params.n_filters, device),
            output: init::linear(params.n_filters, params.n_classes, device),
            activation: Sigmoid::new(),
        }
    }

    /// # Shapes
    ///   - Features [batch_size, n_in]
    ///   - Output [batch_size, n_classes] (n_classes defaults to 1)
    fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.activation.forward(self.hidden.forward(features));
        self.output.forward(x)
    }

    fn name(&self) -> &'static str {
        "mlleaks_mlp"
    }
}
