extern crate nalgebra as na;

use na::DMatrix;
use crate::{Float,float};
use crate::image::Image;
use float::consts::PI;
use super::{kernel::Kernel, Blur, gaussian_2_d_convolution};


pub struct GaussKernel1D {
    kernel: DMatrix<Float>,
    step: usize,
    weight_sum: Float
}

impl GaussKernel1D {
    fn sample(mean: Float, std: Float, x: Float) -> Float {
        let exponent = (-0.5*((x-mean)/std).powi(2)).exp();
        let factor = 1.0/(std*(2.0*PI).sqrt());
        factor*exponent
    }

    pub fn new(mean: Float, std: Float, step: usize, radius: usize) -> GaussKernel1D {
        assert_eq!(radius%step,0);

        let cols = 2*radius+1;
        let start = -(radius as isize);
        let end_exclusive = (radius as isize) + 1;
        let range = (start..end_exclusive).step_by(step);
        let kernel = DMatrix::from_vec(1,cols,range.map(|x| GaussKernel1D::sample(mean,std,x as Float)).collect());
        let weight_sum = kernel.sum();
        GaussKernel1D { kernel, step, weight_sum }
    }
}

impl Kernel for GaussKernel1D {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }

    fn step(&self) -> usize {
        self.step
    }

    // Truncated tails would otherwise darken the image
    fn normalizing_constant(&self) -> Float {
        self.weight_sum
    }
}

/// Separable Gaussian blur with a kernel radius of `ceil(blur_half_factor*sigma)`.
#[derive(Debug,Copy,Clone)]
pub struct GaussianBlur {
    pub blur_half_factor: Float
}

impl GaussianBlur {
    pub fn new(blur_half_factor: Float) -> GaussianBlur {
        GaussianBlur { blur_half_factor }
    }

    pub fn blur_radius(&self, sigma: Float) -> usize {
        (self.blur_half_factor*sigma).ceil() as usize
    }
}

impl Default for GaussianBlur {
    fn default() -> GaussianBlur {
        GaussianBlur::new(3.0)
    }
}

impl Blur for GaussianBlur {
    fn blur(&self, source: &Image, sigma: Float) -> Image {
        let kernel = GaussKernel1D::new(0.0, sigma, 1, self.blur_radius(sigma));
        gaussian_2_d_convolution(source, &kernel)
    }
}
