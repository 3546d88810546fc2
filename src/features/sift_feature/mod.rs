extern crate nalgebra as na;

use log::trace;
use na::DMatrix;

use crate::Float;
use crate::pyramid::{Pyramid, sift::sift_octave::SiftOctave};
use crate::matching::sift_descriptor::keypoint::KeyPoint;

pub mod processing;

/// Finds strict local maxima over the 3x3x3 window of every DoG sample in the octave.
///
/// Neighbours outside the level range or the image are skipped, not padded, so border samples
/// compete against a smaller window.
pub fn detect_sift_feature(source_octave: &SiftOctave) -> Vec<KeyPoint> {
    let mut keypoints: Vec<KeyPoint> = Vec::new();

    let scale_factor = source_octave.scale_factor();
    let dogs = source_octave.difference_of_gaussians.iter().map(|image| &image.buffer).collect::<Vec<&DMatrix<Float>>>();

    for dog_level in 0..dogs.len() {
        let image_buffer = dogs[dog_level];
        let sigma = source_octave.dog_sigma(dog_level);

        for y in 0..image_buffer.nrows() {
            for x in 0..image_buffer.ncols() {
                let sample_value = image_buffer[(y,x)];
                if is_window_maximum(sample_value, dog_level, x, y, &dogs) {
                    keypoints.push(KeyPoint::new(
                        y*scale_factor,
                        x*scale_factor,
                        sample_value*(scale_factor as Float),
                        sigma));
                }
            }
        }
        trace!("octave {} dog level {}: {} extrema so far", source_octave.octave_level, dog_level, keypoints.len());
    }

    keypoints
}

// At most one window sample, the center itself, may be >= `sample`.
fn is_window_maximum(sample: Float, dog_level: usize, x_sample: usize, y_sample: usize, neighbourhood_buffers: &[&DMatrix<Float>]) -> bool {
    let level_count = neighbourhood_buffers.len() as isize;
    let mut count = 0;

    for level in dog_level as isize - 1..dog_level as isize + 2 {
        if level < 0 || level >= level_count {
            continue;
        }
        let buffer = neighbourhood_buffers[level as usize];
        let rows = buffer.nrows() as isize;
        let cols = buffer.ncols() as isize;

        for y in y_sample as isize - 1..y_sample as isize + 2 {
            if y < 0 || y >= rows {
                continue;
            }
            for x in x_sample as isize - 1..x_sample as isize + 2 {
                if x < 0 || x >= cols {
                    continue;
                }
                if buffer[(y as usize, x as usize)] >= sample {
                    count += 1;
                    if count > 1 {
                        return false;
                    }
                }
            }
        }
    }

    true
}

/// Raw detections of every octave, before magnitude normalisation.
pub fn keypoints_from_pyramid(pyramid: &Pyramid<SiftOctave>) -> Vec<KeyPoint> {
    pyramid.octaves.iter().map(detect_sift_feature).flatten().collect()
}
