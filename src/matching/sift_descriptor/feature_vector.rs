use crate::{Float, Result, SiftError};
use crate::features::{Feature, Oriented};
use crate::matching::sift_descriptor::DESCRIPTOR_LENGTH;
use crate::matching::sift_descriptor::keypoint::KeyPoint;

/// Unit-length descriptor vector. Immutable once built.
#[derive(Debug,Clone,PartialEq)]
pub struct Descriptor {
    data: [Float; DESCRIPTOR_LENGTH]
}

impl Descriptor {
    pub fn from_histogram(histogram: [Float; DESCRIPTOR_LENGTH]) -> Result<Descriptor> {
        let norm = histogram.iter().map(|v| v*v).sum::<Float>().sqrt();
        if norm == 0.0 {
            return Err(SiftError::DegenerateDescriptor);
        }

        let mut data = histogram;
        for value in data.iter_mut() {
            *value /= norm;
        }
        Ok(Descriptor{data})
    }

    pub fn data(&self) -> &[Float] {
        &self.data
    }

    pub fn norm(&self) -> Float {
        self.data.iter().map(|v| v*v).sum::<Float>().sqrt()
    }

    pub fn distance_between(&self, other: &Descriptor) -> Float {
        self.data.iter().zip(other.data.iter()).map(|(a, b)| (a - b).powi(2)).sum::<Float>().sqrt()
    }
}

/// Keypoint geometry plus its descriptor. The sampled gradient neighbourhood is not retained.
#[derive(Debug,Clone,PartialEq)]
pub struct MatchableKeypoint {
    pub row: usize,
    pub column: usize,
    pub magnitude: Float,
    pub sigma: Float,
    pub principal_orientation: Float,
    pub descriptor: Descriptor
}

impl MatchableKeypoint {
    pub fn new(keypoint: KeyPoint, descriptor: Descriptor) -> MatchableKeypoint {
        MatchableKeypoint {
            row: keypoint.row,
            column: keypoint.column,
            magnitude: keypoint.magnitude,
            sigma: keypoint.sigma,
            principal_orientation: keypoint.principal_orientation,
            descriptor
        }
    }
}

impl Feature for MatchableKeypoint {
    fn get_row(&self) -> usize {
        self.row
    }

    fn get_column(&self) -> usize {
        self.column
    }

    fn get_sigma(&self) -> Float {
        self.sigma
    }
}

impl Oriented for MatchableKeypoint {
    fn get_orientation(&self) -> Float {
        self.principal_orientation
    }
}
