use log::debug;
use rayon::prelude::*;

use crate::{float,Float};
use crate::image::Image;
use crate::matching::sift_descriptor::{ORIENTATION_BINS, ArctangentMode, gradient_orientation, orientation_bin};
use crate::matching::sift_descriptor::keypoint::{KeyPoint, GradientNeighbourhood, NEIGHBOURHOOD_SIDE};


#[derive(Debug,Clone)]
pub struct OrientationHistogram {
    pub bin_range: Float,
    pub bins: Vec<usize>
}

impl OrientationHistogram {

    pub fn new(bin_len: usize) -> OrientationHistogram {
        OrientationHistogram {
            bin_range: 2.0*float::consts::PI/(bin_len as Float),
            bins: vec![0;bin_len]
        }
    }

    pub fn add_measurement(&mut self, orientation: Float) -> () {
        let index = orientation_bin(orientation, self.bins.len());
        self.bins[index] += 1;
    }

    /// Every bin sharing the highest non-zero count, in ascending bin order. Empty if nothing voted.
    pub fn max_bins(&self) -> Vec<usize> {
        let max_value = self.bins.iter().cloned().max().unwrap_or(0);
        match max_value {
            0 => Vec::new(),
            max_value => self.bins.iter().enumerate().filter(|&(_, &count)| count == max_value).map(|(idx, _)| idx).collect()
        }
    }

    pub fn index_to_radian(&self, index: usize) -> Float {
        index as Float*self.bin_range
    }
}

/// Averages the image gradients over an 8x8 grid of windows, each `sigma` pixels wide, centered on the keypoint.
///
/// Window `(r,c)` spans rows `trunc(row + (r-4)σ) ..= trunc(row + (r-3)σ)` and the analogous columns.
/// Pixels outside the image are skipped, but the x sum is still divided by the full window width
/// and the y sum by the full window height.
pub fn sample_neighbourhood(keypoint: &KeyPoint, x_gradient: &Image, y_gradient: &Image) -> GradientNeighbourhood {
    let rows = x_gradient.rows() as isize;
    let cols = x_gradient.cols() as isize;
    let half_side = (NEIGHBOURHOOD_SIDE/2) as Float;
    let mut neighbourhood = GradientNeighbourhood::zeros();

    for r in 0..NEIGHBOURHOOD_SIDE {
        for c in 0..NEIGHBOURHOOD_SIDE {
            let (r_start, r_end) = window_bounds(keypoint.row, r as Float - half_side, keypoint.sigma);
            let (c_start, c_end) = window_bounds(keypoint.column, c as Float - half_side, keypoint.sigma);
            let r_width = (r_end - r_start + 1) as Float;
            let c_width = (c_end - c_start + 1) as Float;

            let mut x_sum = 0.0;
            let mut y_sum = 0.0;
            for r_scaled in r_start.max(0)..(r_end+1).min(rows) {
                for c_scaled in c_start.max(0)..(c_end+1).min(cols) {
                    x_sum += x_gradient.buffer[(r_scaled as usize, c_scaled as usize)];
                    y_sum += y_gradient.buffer[(r_scaled as usize, c_scaled as usize)];
                }
            }

            neighbourhood.set_gradient(r, c, (x_sum/c_width, y_sum/r_width));
        }
    }

    neighbourhood
}

fn window_bounds(center: usize, cell_offset: Float, sigma: Float) -> (isize, isize) {
    let start = (center as Float + cell_offset*sigma).trunc() as isize;
    let end = (center as Float + (cell_offset + 1.0)*sigma).trunc() as isize;
    (start, end)
}

pub fn build_histogram(neighbourhood: &GradientNeighbourhood, arctangent: ArctangentMode) -> OrientationHistogram {
    let mut histogram = OrientationHistogram::new(ORIENTATION_BINS);
    for r in 0..NEIGHBOURHOOD_SIDE {
        for c in 0..NEIGHBOURHOOD_SIDE {
            let (x_grad, y_grad) = neighbourhood.gradient(r, c);
            if let Some(orientation) = gradient_orientation(x_grad, y_grad, arctangent) {
                histogram.add_measurement(orientation);
            }
        }
    }
    histogram
}

/// Samples the neighbourhood and picks the dominant orientation of one keypoint.
///
/// Returns `None` when no cell voted. Otherwise the first element carries the lowest tied bin
/// and the rest are clones for the remaining tied bins.
pub fn generate_keypoints_from_extrema(keypoint: &KeyPoint, x_gradient: &Image, y_gradient: &Image, arctangent: ArctangentMode) -> Option<(KeyPoint, Vec<KeyPoint>)> {
    let neighbourhood = sample_neighbourhood(keypoint, x_gradient, y_gradient);
    let histogram = build_histogram(&neighbourhood, arctangent);
    let max_bins = histogram.max_bins();
    let (&first_bin, tied_bins) = max_bins.split_first()?;

    let oriented = KeyPoint {
        principal_orientation: histogram.index_to_radian(first_bin),
        neighbourhood,
        ..keypoint.clone()
    };
    let clones = tied_bins.iter().map(|&bin| oriented.with_orientation(histogram.index_to_radian(bin))).collect();

    Some((oriented, clones))
}

/// Assigns principal orientations. Keypoints without a single voting cell are dropped;
/// clones for tied bins are appended after all original keypoints, in input order.
pub fn assign_orientations(keypoints: Vec<KeyPoint>, x_gradient: &Image, y_gradient: &Image, arctangent: ArctangentMode) -> Vec<KeyPoint> {
    let input_count = keypoints.len();
    let results = keypoints.par_iter()
        .map(|keypoint| generate_keypoints_from_extrema(keypoint, x_gradient, y_gradient, arctangent))
        .collect::<Vec<Option<(KeyPoint, Vec<KeyPoint>)>>>();

    let mut oriented = Vec::with_capacity(results.len());
    let mut clones = Vec::new();
    for (keypoint, extra) in results.into_iter().flatten() {
        oriented.push(keypoint);
        clones.extend(extra);
    }

    debug!("orientation assignment: {} in, {} without votes dropped, {} clones added", input_count, input_count - oriented.len(), clones.len());
    oriented.extend(clones);
    oriented
}
