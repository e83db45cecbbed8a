//! Predefined architectures for membership-inference experiments.
//!
//! Each architecture is an independent feed-forward module implementing the
//! [`Architecture`] trait. Constructors share one parameter set,
//! [`ModelParams`], mirroring the common `(n_in, n_classes, n_filters,
//! size)` signature the experiment drivers pass around; per-architecture
//! defaults live on [`ModelKind::default_params`].
//!
//! [`ModelKind::default_params`]: crate::registry::ModelKind::default_params

use burn::prelude::*;

mod alexnet;
mod cnn;
mod mlleaks;
mod mlp;
mod tiny_cnn;

pub use alexnet::AlexNet;
pub use cnn::Cnn;
pub use mlleaks::{MlleaksCnn, MlleaksMlp};
pub use mlp::Mlp;
pub use tiny_cnn::TinyCnn;

/// Constructor parameters shared by every architecture.
///
/// `size` is the assumed square input side length for the convolutional
/// variants; [`MlleaksCnn`] reuses it as the width of its first dense layer
/// and [`Mlp`]/[`MlleaksMlp`] ignore it, keeping the signature uniform.
#[derive(Config, Debug)]
pub struct ModelParams {
    /// Input channel count (convnets) or input feature width (perceptrons).
    #[config(default = "3")]
    pub n_in: usize,
    /// Number of output classes.
    #[config(default = "10")]
    pub n_classes: usize,
    /// Base filter-width multiplier.
    #[config(default = "64")]
    pub n_filters: usize,
    /// Assumed square input side length.
    #[config(default = "32")]
    pub size: usize,
}

/// Capability set every architecture exposes: construct from shared
/// parameters, run a batch forward, report its registry name.
pub trait Architecture<B: Backend>: Sized {
    /// Batch type consumed by the forward pass.
    type Input;

    /// Build the architecture on the given device.
    fn init(params: &ModelParams, device: &B::Device) -> Self;

    /// Produce un-normalized per-class scores of shape `[batch, n_classes]`.
    fn forward(&self, input: Self::Input) -> Tensor<B, 2>;

    /// Lowercase registry key for this architecture.
    fn name(&self) -> &'static str;
}
