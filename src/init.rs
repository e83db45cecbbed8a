//! Weight-initialization policy shared by every architecture.
//!
//! One policy, keyed by the layer's role: convolutions get a fan-out Kaiming
//! normal suited to relu, normalization layers start at identity (scale one,
//! shift zero), linear layers get a Xavier normal. Biases are always zeroed.
//! The policy is applied at construction time through the layer configs
//! rather than as a post-hoc pass over an already-built module.

use burn::module::Param;
use burn::nn::conv::{Conv2d, Conv2dConfig};
use burn::nn::{BatchNorm, BatchNormConfig, Initializer, Linear, LinearConfig, PaddingConfig2d};
use burn::prelude::*;

/// Role a learnable layer plays in an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    /// Convolution weights, followed by a rectified-linear activation.
    Conv,
    /// Normalization scale parameters.
    Norm,
    /// Fully-connected weights.
    Linear,
}

/// Weight initializer for the given layer role.
pub fn initializer(role: LayerRole) -> Initializer {
    match role {
        LayerRole::Conv => Initializer::KaimingNormal {
            // relu gain, scaled by fan-out
            gain: std::f64::consts::SQRT_2,
            fan_out_only: true,
        },
        LayerRole::Norm => Initializer::Ones,
        LayerRole::Linear => Initializer::XavierNormal { gain: 1.0 },
    }
}

/// Square convolution with the policy initializer and a zeroed bias.
pub fn conv2d<B: Backend>(
    channels: [usize; 2],
    kernel: usize,
    stride: usize,
    padding: usize,
    device: &B::Device,
) -> Conv2d<B> {
    let mut conv = Conv2dConfig::new(channels, [kernel, kernel])
        .with_stride([stride, stride])
        .with_padding(PaddingConfig2d::Explicit(padding, padding))
        .with_initializer(initializer(LayerRole::Conv))
        .init(device);
    // The config reuses the weight initializer for the bias; the policy
    // wants biases at zero.
    conv.bias = conv
        .bias
        .map(|_| Param::from_tensor(Tensor::zeros([channels[1]], device)));
    conv
}

/// Linear layer with the policy initializer and a zeroed bias.
pub fn linear<B: Backend>(d_input: usize, d_output: usize, device: &B::Device) -> Linear<B> {
    let mut linear = LinearConfig::new(d_input, d_output)
        .with_initializer(initializer(LayerRole::Linear))
        .init(device);
    linear.bias = linear
        .bias
        .map(|_| Param::from_tensor(Tensor::zeros([d_output], device)));
    linear
}

/// Batch normalization over `num_features` channels.
///
/// Burn already starts gamma at one and beta at zero, which is exactly the
/// [`LayerRole::Norm`] policy.
pub fn batch_norm<B: Backend, const D: usize>(
    num_features: usize,
    device: &B::Device,
) -> BatchNorm<B, D> {
    BatchNormConfig::new(num_features).init(device)
}
