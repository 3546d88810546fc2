use crate::image::Image;
use crate::{Float, GradientDirection};
use self::kernel::Kernel;

pub mod kernel;
pub mod gauss_kernel;
pub mod prewitt_kernel;

/// Separable blur collaborator. Produces a same-size blurred copy of `source`.
pub trait Blur: Send + Sync {
    fn blur(&self, source: &Image, sigma: Float) -> Image;
}

/// Gradient collaborator. Returns the (x,y) per-pixel gradients of `source`, x along columns.
pub trait Gradient: Send + Sync {
    fn gradient(&self, source: &Image) -> (Image, Image);
}

/// Convolves along one axis. Samples outside the image are clamped to the nearest edge pixel.
pub fn filter_1d_convolution(source: &Image, filter_direction: GradientDirection, filter_kernel: &dyn Kernel) -> Image {
    let kernel = filter_kernel.kernel();
    let step = filter_kernel.step();
    let kernel_radius_signed = filter_kernel.radius() as isize;
    let normalizing_constant = filter_kernel.normalizing_constant();

    let buffer = &source.buffer;
    let width = buffer.ncols();
    let height = buffer.nrows();
    let mut target = Image::empty(height, width);

    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for kernel_idx in (-kernel_radius_signed..kernel_radius_signed+1).step_by(step) {

                let sample_value = match filter_direction {
                    GradientDirection::HORIZINTAL => {
                        let sample_idx = (x as isize)+kernel_idx;
                        match sample_idx {
                            sample_idx if sample_idx < 0 => buffer[(y,0)],
                            sample_idx if sample_idx >= width as isize => buffer[(y,width-1)],
                            _ => buffer[(y,sample_idx as usize)]
                        }
                    },
                    GradientDirection::VERTICAL => {
                        let sample_idx = (y as isize)+kernel_idx;
                        match sample_idx {
                            sample_idx if sample_idx < 0 => buffer[(0,x)],
                            sample_idx if sample_idx >= height as isize => buffer[(height-1,x)],
                            _ => buffer[(sample_idx as usize,x)]
                        }
                    }
                };

                let kernel_value = kernel[(0,(kernel_idx + kernel_radius_signed) as usize)];
                acc += sample_value*kernel_value;
            }

            target.buffer[(y,x)] = acc/normalizing_constant;
        }
    }

    target
}

pub fn gaussian_2_d_convolution(image: &Image, filter_kernel: &dyn Kernel) -> Image {
    let blur_hor = filter_1d_convolution(image, GradientDirection::HORIZINTAL, filter_kernel);
    filter_1d_convolution(&blur_hor, GradientDirection::VERTICAL, filter_kernel)
}
