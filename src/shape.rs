//! Spatial-size arithmetic for sliding-window layers.
//!
//! These helpers compute the output side length of a convolution or pooling
//! stage so the flattened feature width feeding the first linear layer can be
//! derived before any tensor exists. Integer division floors naturally for
//! the non-negative sizes the architectures supply.

/// Output side length of a convolution over a square input.
///
/// Implements `floor((size + 2*padding - (kernel - 1) - 1) / stride + 1)`.
pub fn conv_output_size(size: usize, kernel: usize, stride: usize, padding: usize) -> usize {
    (size + 2 * padding - (kernel - 1) - 1) / stride + 1
}

/// Output side length of a max-pooling stage.
///
/// A `None` stride defaults to the kernel size (non-overlapping pooling).
pub fn pool_output_size(size: usize, kernel: usize, stride: Option<usize>, padding: usize) -> usize {
    let stride = stride.unwrap_or(kernel);
    conv_output_size(size, kernel, stride, padding)
}

/// Side length of the feature map produced by the AlexNet-style extractor
/// for a square input of the given side length.
///
/// Chains the five convolutions and three pools of [`AlexNet`], in order.
///
/// [`AlexNet`]: crate::architectures::AlexNet
pub fn alexnet_feature_size(size: usize) -> usize {
    let x = conv_output_size(size, 6, 3, 2);
    let x = pool_output_size(x, 3, Some(2), 0);
    let x = conv_output_size(x, 5, 1, 2);
    let x = pool_output_size(x, 3, Some(2), 0);
    let x = conv_output_size(x, 3, 1, 1);
    let x = conv_output_size(x, 3, 1, 1);
    let x = conv_output_size(x, 3, 1, 1);
    pool_output_size(x, 2, Some(2), 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conv_formula_matches_reference_case() {
        assert_eq!(conv_output_size(32, 6, 3, 2), 11);
        // Identity: 3x3 kernel, stride 1, padding 1 keeps the side length.
        assert_eq!(conv_output_size(28, 3, 1, 1), 28);
        assert_eq!(conv_output_size(5, 5, 1, 2), 5);
    }

    #[test]
    fn pool_stride_defaults_to_kernel() {
        assert_eq!(pool_output_size(32, 2, None, 0), 16);
        assert_eq!(
            pool_output_size(32, 2, None, 0),
            pool_output_size(32, 2, Some(2), 0)
        );
        // Overlapping pooling with an explicit stride.
        assert_eq!(pool_output_size(11, 3, Some(2), 0), 5);
    }

    #[test]
    fn alexnet_chain_reduces_32_to_1() {
        assert_eq!(alexnet_feature_size(32), 1);
    }

    #[test]
    fn alexnet_chain_on_larger_inputs() {
        assert_eq!(alexnet_feature_size(64), 2);
        assert_eq!(alexnet_feature_size(128), 5);
    }
}
