use crate::{Float, Result};
use crate::image::filter::Blur;
use crate::matching::sift_descriptor::{DESCRIPTOR_LENGTH, DESCRIPTOR_ORIENTATION_BINS, ArctangentMode, gradient_orientation, orientation_bin};
use crate::matching::sift_descriptor::keypoint::{KeyPoint, NEIGHBOURHOOD_SIDE};
use crate::matching::sift_descriptor::feature_vector::Descriptor;

pub const DESCRIPTOR_BLUR_SIGMA: Float = 2.0;
pub const QUADRANT_SIDE: usize = NEIGHBOURHOOD_SIDE/2;
pub const QUADRANT_STRIDE: usize = DESCRIPTOR_LENGTH/4;

// (row, column) origin of quadrants 0..4: top-left, bottom-left, top-right, bottom-right
const QUADRANT_ORIGINS: [(usize, usize); 4] = [(0, 0), (QUADRANT_SIDE, 0), (0, QUADRANT_SIDE), (QUADRANT_SIDE, QUADRANT_SIDE)];

/// Unnormalised 128 bin histogram of the keypoint's blurred gradient neighbourhood.
///
/// Each voting cell of quadrant `q` adds one to bucket `q*32 + bin` and one to the bucket after it,
/// wrapping from the last bucket to the first.
pub fn descriptor_histogram(keypoint: &KeyPoint, blur: &dyn Blur, arctangent: ArctangentMode) -> [Float; DESCRIPTOR_LENGTH] {
    let x_blurred = blur.blur(&keypoint.neighbourhood.x_gradient_image(), DESCRIPTOR_BLUR_SIGMA);
    let y_blurred = blur.blur(&keypoint.neighbourhood.y_gradient_image(), DESCRIPTOR_BLUR_SIGMA);

    let mut histogram = [0.0; DESCRIPTOR_LENGTH];
    for (quadrant, &(row_origin, column_origin)) in QUADRANT_ORIGINS.iter().enumerate() {
        for r in row_origin..row_origin + QUADRANT_SIDE {
            for c in column_origin..column_origin + QUADRANT_SIDE {
                let x_grad = x_blurred.buffer[(r, c)];
                let y_grad = y_blurred.buffer[(r, c)];
                if let Some(orientation) = gradient_orientation(x_grad, y_grad, arctangent) {
                    let bucket = quadrant*QUADRANT_STRIDE + orientation_bin(orientation, DESCRIPTOR_ORIENTATION_BINS);
                    histogram[bucket] += 1.0;
                    histogram[(bucket + 1) % DESCRIPTOR_LENGTH] += 1.0;
                }
            }
        }
    }

    histogram
}

/// Unit-length descriptor of an oriented keypoint. Fails with `DegenerateDescriptor` when no cell voted.
pub fn build_descriptor(keypoint: &KeyPoint, blur: &dyn Blur, arctangent: ArctangentMode) -> Result<Descriptor> {
    Descriptor::from_histogram(descriptor_histogram(keypoint, blur, arctangent))
}
