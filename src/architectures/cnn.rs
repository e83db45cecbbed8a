//! Deeper convolutional classifier with normalized dense stages.

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

/// Two conv+norm+pool blocks feeding three dense stages, the last two batch
/// normalized. The flattened width is hard-coded to an 8x8 residual map, so
/// the architecture assumes 32x32 inputs regardless of `params.size`.
///
/// The first dense stage outputs 64 features, the width the second stage
/// consumes. The upstream definition declared 128 here and could never run;
/// see DESIGN.md.
#[derive(Module, Debug)]
pub struct Cnn<B: Backend> {
    conv1: Conv2d<B>,
    norm1: BatchNorm<B, 2>,
    pool1: MaxPool2d,
    conv2: Conv2d<B>,
    norm2: BatchNorm<B, 2>,
    pool2: MaxPool2d,
    dense1: Linear<B>,
    dense2: Linear<B>,
    dense2_norm: BatchNorm<B, 0>,
    dense3: Linear<B>,
    dense3_norm: BatchNorm<B, 0>,
    activation: Relu,
    flat_features: usize,
}

impl<B: Backend> Architecture<B> for Cnn<B> {
    type Input = Tensor<B, 4>;

    fn init(params: &ModelParams, device: &B::Device) -> Self {
        let n_filters = params.n_filters;
        let flat_features = 2 * n_filters * 8 * 8;
        debug!("cnn: 8x8 feature map, {flat_features} flat features");

        Self {
            conv1: init::conv2d([params.n_in, n_filters], 3, 1, 1, device),
            norm1: init::batch_norm(n_filters, device),
            pool1: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            conv2: init::conv2d([n_filters, 2 * n_filters], 3, 1, 1, device),
            norm2: init::batch_norm(2 * n_filters, device),
            pool2: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            dense1: init::linear(flat_features, 64, device),
            dense2: init::linear(64, 32, device),
            dense2_norm: init::batch_norm(32, device),
            dense3: init::linear(32, params.n_classes, device),
            dense3_norm: init::batch_norm(params.n_classes, device),
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

        let x = self.dense1.forward(x);
        let x = self.activation.forward(self.dense2_norm.forward(self.dense2.forward(x)));
        self.dense3_norm.forward(self.dense3.forward(x))
    }

    fn name(&self) -> &'static str {
        "cnn"
    }
}
