//! Two-block CNN whose dense width follows from the input size.

use burn::{
    nn::{
        BatchNorm, Linear, Relu,
        conv::Conv2d,
        pool::{MaxPool2d, MaxPool2dConfig},
    },
    prelude::*,
};
use log::debug;

use super::{Architecture, ModelParams};
use crate::init;

/// Two conv+norm+pool blocks feeding two linear layers. The flattened width
/// is derived from `params.size`: each block halves the side length, so the
/// residual map is `(size / 4)` squared.
#[derive(Module, Debug)]
pub struct TinyCnn<B: Backend> {
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

impl<B: Backend> Architecture<B> for TinyCnn<B> {
    type Input = Tensor<B, 4>;

    fn init(params: &ModelParams, device: &B::Device) -> Self {
        let n_filters = params.n_filters;
        let residual_side = params.size / 4;
        let flat_features = 2 * n_filters * residual_side * residual_side;
        debug!(
            "tiny_cnn: {0}x{0} input -> {residual_side}x{residual_side} feature map, {flat_features} flat features",
            params.size
        );

        Self {
            conv1: init::conv2d([params.n_in, n_filters], 5, 1, 2, device),
            norm1: init::batch_norm(n_filters, device),
            pool1: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            conv2: init::conv2d([n_filters, 2 * n_filters], 5, 1, 2, device),
            norm2: init::batch_norm(2 * n_filters, device),
            pool2: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            fc: init::linear(flat_features, 2 * n_filters, device),
            output: init::linear(2 * n_filters, params.n_classes, device),
            activation: Relu::new(),
            flat_features,
        }
    }

    /// # Shapes
    ///   - Images [batch_size, n_in, size, size]
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
        "tiny_cnn"
    }
}
