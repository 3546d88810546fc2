use serde::{Serialize, Deserialize};

use crate::{Float, Result, SiftError};
use crate::matching::sift_descriptor::feature_vector::MatchableKeypoint;

/// Similarity transform relating two keypoint sets.
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub struct AffineTransformation {
    pub scale: Float,
    pub rotation: Float,
    pub translation_x: Float,
    pub translation_y: Float
}

impl AffineTransformation {
    pub fn identity() -> AffineTransformation {
        AffineTransformation { scale: 1.0, rotation: 0.0, translation_x: 0.0, translation_y: 0.0 }
    }

    /// Transform that carries `from` onto `to`.
    pub fn between(from: &MatchableKeypoint, to: &MatchableKeypoint) -> AffineTransformation {
        AffineTransformation {
            scale: to.sigma/from.sigma,
            rotation: to.principal_orientation - from.principal_orientation,
            translation_x: to.column as Float - from.column as Float,
            translation_y: to.row as Float - from.row as Float
        }
    }
}

/// Reduces matched keypoint pairs to a single transform.
pub trait TransformEstimator {
    fn estimate(&self, pairs: &[(&MatchableKeypoint, &MatchableKeypoint)]) -> Result<AffineTransformation>;
}

/// Picks the most frequent exact value of each parameter on its own.
///
/// The four winners can come from different pairs, so the result need not be consistent with any single match.
#[derive(Debug,Copy,Clone,Default)]
pub struct MajorityVote;

impl TransformEstimator for MajorityVote {
    fn estimate(&self, pairs: &[(&MatchableKeypoint, &MatchableKeypoint)]) -> Result<AffineTransformation> {
        let votes = pairs.iter().map(|&(a, b)| AffineTransformation::between(a, b)).collect::<Vec<AffineTransformation>>();

        let scale = majority_value(votes.iter().map(|t| t.scale)).ok_or(SiftError::EmptyKeypointSet)?;
        let rotation = majority_value(votes.iter().map(|t| t.rotation)).ok_or(SiftError::EmptyKeypointSet)?;
        let translation_x = majority_value(votes.iter().map(|t| t.translation_x)).ok_or(SiftError::EmptyKeypointSet)?;
        let translation_y = majority_value(votes.iter().map(|t| t.translation_y)).ok_or(SiftError::EmptyKeypointSet)?;

        Ok(AffineTransformation { scale, rotation, translation_x, translation_y })
    }
}

/// Most frequent value by exact equality. Ties go to the value seen first.
pub fn majority_value<I: Iterator<Item = Float>>(values: I) -> Option<Float> {
    let mut groups: Vec<(Float, usize)> = Vec::new();
    for value in values {
        match groups.iter_mut().find(|(group_value, _)| *group_value == value) {
            Some((_, count)) => *count += 1,
            None => groups.push((value, 1))
        }
    }

    let mut best: Option<(Float, usize)> = None;
    for &(value, count) in groups.iter() {
        match best {
            Some((_, best_count)) if best_count >= count => (),
            _ => best = Some((value, count))
        }
    }
    best.map(|(value, _)| value)
}
