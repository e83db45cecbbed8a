//! Name-to-architecture registry.
//!
//! An immutable enumeration stands in for a global name map: [`get`] resolves
//! a case-insensitive name to a [`ModelKind`], and the kind acts as the
//! constructor, instantiating the architecture on demand with explicit
//! parameters. Unknown names fail loudly with the full key list.

use std::fmt;
use std::str::FromStr;

use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::architectures::{
    AlexNet, Architecture, Cnn, MlleaksCnn, MlleaksMlp, Mlp, ModelParams, TinyCnn,
};
use crate::error::ModelError;

/// Registered architecture kinds. Serializes under the lowercase registry
/// keys, so experiment configs can name a model directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Alexnet,
    Cnn,
    TinyCnn,
    MlleaksCnn,
    Mlp,
    MlleaksMlp,
}

impl ModelKind {
    /// Every registered kind, in registry order.
    pub const ALL: [ModelKind; 6] = [
        ModelKind::Alexnet,
        ModelKind::Cnn,
        ModelKind::TinyCnn,
        ModelKind::MlleaksCnn,
        ModelKind::Mlp,
        ModelKind::MlleaksMlp,
    ];

    /// Lowercase registry key.
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Alexnet => "alexnet",
            ModelKind::Cnn => "cnn",
            ModelKind::TinyCnn => "tiny_cnn",
            ModelKind::MlleaksCnn => "mlleaks_cnn",
            ModelKind::Mlp => "mlp",
            ModelKind::MlleaksMlp => "mlleaks_mlp",
        }
    }

    /// Default constructor parameters for this kind, matching the published
    /// architecture definitions.
    pub fn default_params(&self) -> ModelParams {
        match self {
            ModelKind::Alexnet => ModelParams::new(),
            ModelKind::Cnn => ModelParams::new(),
            ModelKind::TinyCnn => ModelParams::new().with_size(64),
            ModelKind::MlleaksCnn => ModelParams::new().with_size(128),
            ModelKind::Mlp => ModelParams::new(),
            ModelKind::MlleaksMlp => ModelParams::new().with_n_classes(1).with_size(64),
        }
    }

    /// Instantiate this architecture on the given device.
    pub fn init<B: Backend>(&self, params: &ModelParams, device: &B::Device) -> Model<B> {
        match self {
            ModelKind::Alexnet => Model::Alexnet(AlexNet::init(params, device)),
            ModelKind::Cnn => Model::Cnn(Cnn::init(params, device)),
            ModelKind::TinyCnn => Model::TinyCnn(TinyCnn::init(params, device)),
            ModelKind::MlleaksCnn => Model::MlleaksCnn(MlleaksCnn::init(params, device)),
            ModelKind::Mlp => Model::Mlp(Mlp::init(params, device)),
            ModelKind::MlleaksMlp => Model::MlleaksMlp(MlleaksMlp::init(params, device)),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get(s)
    }
}

/// Resolve a case-insensitive name to its architecture kind.
///
/// Returns [`ModelError::UnknownModel`] for anything outside the six
/// registered keys; the error message names the bad input and lists every
/// valid key.
pub fn get(name: &str) -> Result<ModelKind, ModelError> {
    let lowered = name.to_lowercase();
    ModelKind::ALL
        .into_iter()
        .find(|kind| kind.name() == lowered)
        .ok_or_else(|| ModelError::UnknownModel {
            requested: name.to_string(),
        })
}

/// Input batch for [`Model::forward`].
pub enum ModelInput<B: Backend> {
    /// `[batch, channels, height, width]`
    Images(Tensor<B, 4>),
    /// `[batch, features]`
    Features(Tensor<B, 2>),
}

impl<B: Backend> ModelInput<B> {
    fn family(&self) -> &'static str {
        match self {
            ModelInput::Images(_) => "image batches",
            ModelInput::Features(_) => "feature vectors",
        }
    }
}

/// An instantiated architecture behind a single dispatchable type.
#[derive(Debug)]
pub enum Model<B: Backend> {
    Alexnet(AlexNet<B>),
    Cnn(Cnn<B>),
    TinyCnn(TinyCnn<B>),
    MlleaksCnn(MlleaksCnn<B>),
    Mlp(Mlp<B>),
    MlleaksMlp(MlleaksMlp<B>),
}

impl<B: Backend> Model<B> {
    /// The registry kind this instance was built from.
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Alexnet(_) => ModelKind::Alexnet,
            Model::Cnn(_) => ModelKind::Cnn,
            Model::TinyCnn(_) => ModelKind::TinyCnn,
            Model::MlleaksCnn(_) => ModelKind::MlleaksCnn,
            Model::Mlp(_) => ModelKind::Mlp,
            Model::MlleaksMlp(_) => ModelKind::MlleaksMlp,
        }
    }

    /// Run a batch through the underlying architecture.
    ///
    /// Panics when the input family does not match the architecture: input
    /// shape defects are construction-time bugs, mirrored from the tensor
    /// layer's own dimension checks, not recoverable conditions.
    pub fn forward(&self, input: ModelInput<B>) -> Tensor<B, 2> {
        match (self, input) {
            (Model::Alexnet(model), ModelInput::Images(images)) => model.forward(images),
            (Model::Cnn(model), ModelInput::Images(images)) => model.forward(images),
            (Model::TinyCnn(model), ModelInput::Images(images)) => model.forward(images),
            (Model::MlleaksCnn(model), ModelInput::Images(images)) => model.forward(images),
            (Model::Mlp(model), ModelInput::Features(features)) => model.forward(features),
            (Model::MlleaksMlp(model), ModelInput::Features(features)) => model.forward(features),
            (model, input) => panic!(
                "{} does not accept {}",
                model.kind().name(),
                input.family()
            ),
        }
    }
}
