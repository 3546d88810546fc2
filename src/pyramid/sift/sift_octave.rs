use rayon::prelude::*;

use crate::Float;
use crate::image::{Image, filter::Blur};

#[derive(Debug,Clone)]
pub struct SiftOctave {
    pub octave_level: usize,
    pub images: Vec<Image>,
    pub difference_of_gaussians: Vec<Image>,
    pub sigmas: Vec<Float>
}

impl SiftOctave {

    /// Blurs `base_image` once per sigma. Every blur starts from the same base, never from the previous level.
    pub fn build_octave(base_image: &Image, octave_level: usize, sigmas: &[Float], blur: &dyn Blur) -> SiftOctave {

        let images: Vec<Image> = sigmas.par_iter().map(|&sigma| blur.blur(base_image, sigma)).collect();

        let mut difference_of_gaussians: Vec<Image> = Vec::with_capacity(images.len().saturating_sub(1));
        for i in 1..images.len() {
            let difference_buffer = &images[i].buffer - &images[i-1].buffer;
            difference_of_gaussians.push(Image::from_matrix(&difference_buffer));
        }

        SiftOctave {octave_level, images, difference_of_gaussians, sigmas: sigmas.to_vec()}
    }

    /// Decimated middle image, `ceil(rows/2) x ceil(cols/2)`.
    pub fn base_image_for_next_octave(&self) -> Image {
        let size = self.images.len();
        Image::downsample_half(&self.images[size/2])
    }

    pub fn rows(&self) -> usize {
        self.images[0].rows()
    }

    pub fn cols(&self) -> usize {
        self.images[0].cols()
    }

    pub fn dog_level_count(&self) -> usize {
        self.difference_of_gaussians.len()
    }

    /// Maps octave pixel units to full-image units.
    pub fn scale_factor(&self) -> usize {
        1usize << self.octave_level
    }

    /// Blur radius a DoG level responds to, in full-image units.
    pub fn dog_sigma(&self, dog_level: usize) -> Float {
        (self.sigmas[dog_level] + self.sigmas[dog_level+1])/2.0*(self.scale_factor() as Float)
    }
}
