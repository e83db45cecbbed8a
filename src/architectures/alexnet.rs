//! AlexNet-style convolutional classifier sized for small inputs.

use burn::{
    nn::{
        Dropout, DropoutConfig, Linear, Relu,
        conv::Conv2d,
        pool::{MaxPool2d, MaxPool2dConfig},
    },
    prelude::*,
};
use log::debug;

use super::{Architecture, ModelParams};
use crate::{init, shape};

/// Five convolution stages and three pools feeding a three-layer classifier
/// head. The stride-3 stem makes it usable on 32x32 inputs, unlike the
/// ImageNet original.
#[derive(Module, Debug)]
pub struct AlexNet<B: Backend> {
    conv1: Conv2d<B>,
    pool1: MaxPool2d,
    conv2: Conv2d<B>,
    pool2: MaxPool2d,
    conv3: Conv2d<B>,
    conv4: Conv2d<B>,
    conv5: Conv2d<B>,
    pool3: MaxPool2d,
    dropout: Dropout,
    activation: Relu,
    fc1: Linear<B>,
    fc2: Linear<B>,
    fc3: Linear<B>,
    /// Flattened feature width, derived from `params.size` at construction.
    /// Must equal `fc1`'s input width or the first forward pass fails.
    flat_features: usize,
}

impl<B: Backend> Architecture<B> for AlexNet<B> {
    type Input = Tensor<B, 4>;

    fn init(params: &ModelParams, device: &B::Device) -> Self {
        let n_h1 = 3 * params.n_filters;
        let n_h2 = 2 * n_h1;
        let side = shape::alexnet_feature_size(params.size);
        let flat_features = 256 * side * side;
        debug!(
            "alexnet: {0}x{0} input -> {side}x{side} feature map, {flat_features} flat features",
            params.size
        );

        Self {
            conv1: init::conv2d([params.n_in, params.n_filters], 6, 3, 2, device),
            pool1: MaxPool2dConfig::new([3, 3]).with_strides([2, 2]).init(),
            conv2: init::conv2d([params.n_filters, n_h1], 5, 1, 2, device),
            pool2: MaxPool2dConfig::new([3, 3]).with_strides([2, 2]).init(),
            conv3: init::conv2d([n_h1, n_h2], 3, 1, 1, device),
            conv4: init::conv2d([n_h2, 256], 3, 1, 1, device),
            conv5: init::conv2d([256, 256], 3, 1, 1, device),
            pool3: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            dropout: DropoutConfig::new(0.5).init(),
            activation: Relu::new(),
            fc1: init::linear(flat_features, 4096, device),
            fc2: init::linear(4096, 4096, device),
            fc3: init::linear(4096, params.n_classes, device),
            flat_features,
        }
    }

    /// # Shapes
    ///   - Images [batch_size, n_in, size, size]
    ///   - Output [batch_size, n_classes]
    fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let x = self.pool1.forward(self.activation.forward(self.conv1.forward(images)));
        let x = self.pool2.forward(self.activation.forward(self.conv2.forward(x)));
        let x = self.activation.forward(self.conv3.forward(x));
        let x = self.activation.forward(self.conv4.forward(x));
        let x = self.pool3.forward(self.activation.forward(self.conv5.forward(x)));

        let [batch_size, _, _, _] = x.dims();
        let x = x.reshape([batch_size, self.flat_features]);

        let x = self.dropout.forward(x);
        let x = self.activation.forward(self.fc1.forward(x));
        let x = self.dropout.forward(x);
        let x = self.activation.forward(self.fc2.forward(x));
        self.fc3.forward(x)
    }

    fn name(&self) -> &'static str {
        "alexnet"
    }
}

impl<B: Backend> AlexNet<B> {
    /// Flattened feature width feeding the classifier head.
    pub fn flat_features(&self) -> usize {
        self.flat_features
    }
}
