extern crate nalgebra as na;

use na::DMatrix;
use crate::{Float, GradientDirection};
use crate::image::Image;
use super::{kernel::Kernel, Gradient, filter_1d_convolution};


pub struct PrewittKernel {
    kernel: DMatrix<Float>
}

impl PrewittKernel {
    pub fn new() -> PrewittKernel {
        PrewittKernel {
            kernel: DMatrix::from_vec(1,3,vec![-1.0,0.0,1.0])
        }
    }
}

impl Kernel for PrewittKernel {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }

    fn step(&self) -> usize {
        1
    }

    fn normalizing_constant(&self) -> Float {
        2.0
    }
}

/// `(I[x+1] - I[x-1])/2` per axis, edges clamped.
#[derive(Debug,Copy,Clone,Default)]
pub struct CentralDifference;

impl Gradient for CentralDifference {
    fn gradient(&self, source: &Image) -> (Image, Image) {
        let kernel = PrewittKernel::new();
        let x_gradient = filter_1d_convolution(source, GradientDirection::HORIZINTAL, &kernel);
        let y_gradient = filter_1d_convolution(source, GradientDirection::VERTICAL, &kernel);
        (x_gradient, y_gradient)
    }
}
