use log::debug;

use crate::Float;
use crate::matching::sift_descriptor::keypoint::KeyPoint;

pub const MAGNITUDE_THRESHOLD: Float = 0.2;

/// Rescales every magnitude to `(m - min)/max` over the whole set.
///
/// The divisor is `max`, not `max - min`, so the largest result is `(max - min)/max` and only
/// equals 1 when `min` is 0. When `max` is 0 every magnitude becomes 0.
pub fn normalize_magnitudes(keypoints: &mut [KeyPoint]) -> () {
    let (min, max) = match magnitude_range(keypoints) {
        Some(range) => range,
        None => return
    };

    if max == 0.0 {
        debug!("maximum keypoint magnitude is zero, zeroing all {} magnitudes", keypoints.len());
        for keypoint in keypoints.iter_mut() {
            keypoint.magnitude = 0.0;
        }
        return;
    }

    for keypoint in keypoints.iter_mut() {
        keypoint.magnitude = (keypoint.magnitude - min)/max;
    }
}

pub fn magnitude_range(keypoints: &[KeyPoint]) -> Option<(Float, Float)> {
    let mut iter = keypoints.iter().map(|keypoint| keypoint.magnitude);
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), m| (min.min(m), max.max(m))))
}

/// Drops every keypoint whose normalised magnitude is below `MAGNITUDE_THRESHOLD`.
pub fn filter_weak_keypoints(keypoints: Vec<KeyPoint>) -> Vec<KeyPoint> {
    let before = keypoints.len();
    let strong = keypoints.into_iter().filter(|keypoint| keypoint.magnitude >= MAGNITUDE_THRESHOLD).collect::<Vec<KeyPoint>>();
    debug!("kept {} of {} keypoints above magnitude {}", strong.len(), before, MAGNITUDE_THRESHOLD);
    strong
}
