//! Default CPU backend for experiments and tests.
//!
//! The architectures are generic over any burn backend; this module pins the
//! ndarray backend as the crate-wide default so experiment drivers and tests
//! agree on one concrete type without repeating it everywhere.

use burn::backend::NdArray;
use burn::backend::ndarray::NdArrayDevice;

/// Type alias for the CPU backend used throughout the crate.
pub type Backend = NdArray<f32>;

/// Default device for the [`Backend`] alias.
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::default()
}
