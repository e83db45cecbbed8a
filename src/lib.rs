//! Predefined model architectures for membership-inference experiments.
//!
//! A small catalog of classifiers (an AlexNet-style CNN, smaller CNNs, and
//! multilayer perceptrons) built on burn, plus the shape arithmetic that
//! sizes their flattened feature widths and a name-to-architecture registry
//! for experiment drivers.

// Spatial-size arithmetic for convolution and pooling stages
pub mod shape;

// Weight-initialization policy, keyed by layer role
pub mod init;

// Architecture definitions and the shared Architecture trait
pub mod architectures;

// Name-to-architecture lookup
pub mod registry;

// Core modules
pub mod device;
pub mod error;

// Re-exports for convenience
pub use architectures::{
    AlexNet, Architecture, Cnn, MlleaksCnn, MlleaksMlp, Mlp, ModelParams, TinyCnn,
};
pub use error::ModelError;
pub use registry::{Model, ModelInput, ModelKind, get};
