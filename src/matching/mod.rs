use log::debug;
use rayon::prelude::*;

use crate::{Float, Result, SiftError};
use self::sift_descriptor::feature_vector::MatchableKeypoint;
use self::sift_descriptor::affine_transformation::{AffineTransformation, TransformEstimator, MajorityVote};

pub mod sift_descriptor;

/// Index of the nearest descriptor in `bs`. Equal distances resolve to the lower index.
/// With a threshold, the nearest neighbour must lie strictly closer than it.
pub fn match_feature(a: &MatchableKeypoint, bs: &[MatchableKeypoint], acceptance_threshold: Option<Float>) -> Option<usize> {
    let mut best: Option<(usize, Float)> = None;
    for (idx, b) in bs.iter().enumerate() {
        let distance = a.descriptor.distance_between(&b.descriptor);
        match best {
            Some((_, best_distance)) if distance >= best_distance => (),
            _ => best = Some((idx, distance))
        }
    }

    match (best, acceptance_threshold) {
        (Some((_, distance)), Some(threshold)) if distance >= threshold => None,
        (best, _) => best.map(|(idx, _)| idx)
    }
}

/// Accepted `(index_a, index_b)` pairs in the order of `feature_list_a`.
pub fn generate_match_pairs(feature_list_a: &[MatchableKeypoint], feature_list_b: &[MatchableKeypoint], acceptance_threshold: Option<Float>) -> Vec<(usize, usize)> {
    feature_list_a.par_iter().enumerate()
        .filter_map(|(a_idx, a)| match_feature(a, feature_list_b, acceptance_threshold).map(|b_idx| (a_idx, b_idx)))
        .collect()
}

pub fn match_keypoints(feature_list_a: &[MatchableKeypoint], feature_list_b: &[MatchableKeypoint], acceptance_threshold: Option<Float>) -> Result<AffineTransformation> {
    match_keypoints_with(feature_list_a, feature_list_b, acceptance_threshold, &MajorityVote)
}

/// Matches `a` against `b` and hands the accepted pairs to `estimator`.
pub fn match_keypoints_with(feature_list_a: &[MatchableKeypoint], feature_list_b: &[MatchableKeypoint], acceptance_threshold: Option<Float>, estimator: &dyn TransformEstimator) -> Result<AffineTransformation> {
    if feature_list_a.is_empty() || feature_list_b.is_empty() {
        return Err(SiftError::EmptyKeypointSet);
    }

    let match_pairs = generate_match_pairs(feature_list_a, feature_list_b, acceptance_threshold);
    debug!("{} of {} keypoints matched", match_pairs.len(), feature_list_a.len());

    if match_pairs.is_empty() {
        // Without a threshold every keypoint has a nearest neighbour
        return Err(SiftError::NoAcceptedMatches { threshold: acceptance_threshold.unwrap_or(Float::INFINITY) });
    }

    let pairs = match_pairs.iter().map(|&(a_idx, b_idx)| (&feature_list_a[a_idx], &feature_list_b[b_idx])).collect::<Vec<_>>();
    estimator.estimate(&pairs)
}
