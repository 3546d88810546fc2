use log::debug;
use rayon::prelude::*;

use crate::{float, Float, Result};
use crate::image::{Image, filter::{Blur, Gradient}};
use crate::pyramid::{Pyramid, sift::{sift_octave::SiftOctave, sift_runtime_params::SiftRuntimeParams}};
use crate::features::sift_feature::{keypoints_from_pyramid, processing::{normalize_magnitudes, filter_weak_keypoints}};
use crate::matching::{match_keypoints, sift_descriptor::{
    ArctangentMode,
    keypoint::KeyPoint,
    orientation_histogram,
    local_image_descriptor,
    feature_vector::{Descriptor, MatchableKeypoint},
    affine_transformation::AffineTransformation
}};

pub mod sift_runtime_params;
pub mod sift_octave;

pub type SiftPyramid = Pyramid<SiftOctave>;

pub const SIGMA_INITIAL: Float = 1.4;
pub const SIGMA_RATIO: Float = float::consts::SQRT_2;
/// Octave `o` scales by `2^o`, which must fit in a `usize`.
pub const MAX_OCTAVE_COUNT: usize = usize::BITS as usize;

/// `1.4 * √2^i` for every scale of an octave.
pub fn blur_radii(scale_count: usize) -> Vec<Float> {
    (0..scale_count).map(|i| SIGMA_INITIAL*SIGMA_RATIO.powi(i as i32)).collect()
}

pub fn build_sift_pyramid(base_image: &Image, scale_count: usize, octave_count: usize, blur: &dyn Blur) -> SiftPyramid {
    let sigmas = blur_radii(scale_count);
    let octave_count = match octave_count {
        count if count > MAX_OCTAVE_COUNT => {
            debug!("capping {} requested octaves at {}", count, MAX_OCTAVE_COUNT);
            MAX_OCTAVE_COUNT
        },
        count => count
    };
    let mut octaves: Vec<SiftOctave> = Vec::with_capacity(octave_count);

    if scale_count == 0 {
        debug!("no blur scales requested, pyramid is empty");
        return Pyramid{octaves};
    }

    let mut octave_image = base_image.clone();
    for octave_level in 0..octave_count {
        if octave_level > 0 {
            octave_image = octaves[octave_level-1].base_image_for_next_octave();
        }
        debug!("octave {}: {}x{}", octave_level, octave_image.rows(), octave_image.cols());
        octaves.push(SiftOctave::build_octave(&octave_image, octave_level, &sigmas, blur));
    }

    Pyramid{octaves}
}

/// Raw extrema, normalised and thresholded.
pub fn keypoints_from_image(image: &Image, scale_count: usize, octave_count: usize, blur: &dyn Blur) -> Vec<KeyPoint> {
    let pyramid = build_sift_pyramid(image, scale_count, octave_count, blur);
    let mut keypoints = keypoints_from_pyramid(&pyramid);
    debug!("{} raw extrema over {} octaves", keypoints.len(), pyramid.octaves.len());
    normalize_magnitudes(&mut keypoints);
    filter_weak_keypoints(keypoints)
}

pub fn detect_keypoints(pixels: &[Float], rows: usize, cols: usize, scale_count: usize, octave_count: usize, blur: &dyn Blur) -> Vec<KeyPoint> {
    keypoints_from_image(&Image::from_row_slice(pixels, rows, cols), scale_count, octave_count, blur)
}

/// Row-major gradient buffers. May grow the set through orientation ties or shrink it through voteless keypoints.
pub fn assign_orientations(keypoints: Vec<KeyPoint>, x_gradient: &[Float], y_gradient: &[Float], rows: usize, cols: usize, arctangent: ArctangentMode) -> Vec<KeyPoint> {
    let x_gradient = Image::from_row_slice(x_gradient, rows, cols);
    let y_gradient = Image::from_row_slice(y_gradient, rows, cols);
    orientation_histogram::assign_orientations(keypoints, &x_gradient, &y_gradient, arctangent)
}

pub fn build_descriptor(keypoint: &KeyPoint, blur: &dyn Blur, arctangent: ArctangentMode) -> Result<Descriptor> {
    local_image_descriptor::build_descriptor(keypoint, blur, arctangent)
}

/// Full chain on one image: detection, gradients of the unblurred image, orientations and descriptors.
/// Keypoints with a degenerate descriptor are dropped.
pub fn sift_image(image: &Image, runtime_params: &SiftRuntimeParams, blur: &dyn Blur, gradient: &dyn Gradient) -> Vec<MatchableKeypoint> {
    let keypoints = keypoints_from_image(image, runtime_params.scale_count, runtime_params.octave_count, blur);
    let (x_gradient, y_gradient) = gradient.gradient(image);
    let oriented = orientation_histogram::assign_orientations(keypoints, &x_gradient, &y_gradient, runtime_params.arctangent);

    let oriented_count = oriented.len();
    let matchable = oriented.into_par_iter()
        .filter_map(|keypoint| match local_image_descriptor::build_descriptor(&keypoint, blur, runtime_params.arctangent) {
            Ok(descriptor) => Some(MatchableKeypoint::new(keypoint, descriptor)),
            Err(err) => {
                debug!("dropping keypoint at ({},{}): {}", keypoint.row, keypoint.column, err);
                None
            }
        })
        .collect::<Vec<MatchableKeypoint>>();

    debug!("{} of {} oriented keypoints carry a descriptor", matchable.len(), oriented_count);
    matchable
}

pub fn sift_image_from_pixels(pixels: &[Float], rows: usize, cols: usize, runtime_params: &SiftRuntimeParams, blur: &dyn Blur, gradient: &dyn Gradient) -> Vec<MatchableKeypoint> {
    sift_image(&Image::from_row_slice(pixels, rows, cols), runtime_params, blur, gradient)
}

pub fn match_sift_images(feature_list_a: &[MatchableKeypoint], feature_list_b: &[MatchableKeypoint], runtime_params: &SiftRuntimeParams) -> Result<AffineTransformation> {
    match_keypoints(feature_list_a, feature_list_b, runtime_params.acceptance_threshold)
}
