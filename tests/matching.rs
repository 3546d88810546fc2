use sift::{Float, Result, SiftError};
use sift::matching::{match_feature, generate_match_pairs, match_keypoints, match_keypoints_with};
use sift::matching::sift_descriptor::DESCRIPTOR_LENGTH;
use sift::matching::sift_descriptor::feature_vector::{Descriptor, MatchableKeypoint};
use sift::matching::sift_descriptor::affine_transformation::{AffineTransformation, TransformEstimator, majority_value};

fn one_hot(index: usize) -> Descriptor {
    let mut histogram = [0.0; DESCRIPTOR_LENGTH];
    histogram[index] = 1.0;
    Descriptor::from_histogram(histogram).unwrap()
}

fn keypoint(row: usize, column: usize, sigma: Float, orientation: Float, descriptor_index: usize) -> MatchableKeypoint {
    MatchableKeypoint {
        row,
        column,
        magnitude: 1.0,
        sigma,
        principal_orientation: orientation,
        descriptor: one_hot(descriptor_index)
    }
}

fn reference_set() -> Vec<MatchableKeypoint> {
    vec![
        keypoint(10, 4, 1.5, 0.25, 0),
        keypoint(22, 31, 3.0, 1.0, 1),
        keypoint(7, 18, 0.75, 2.5, 2),
        keypoint(40, 9, 6.0, 0.0, 3),
        keypoint(15, 15, 1.5, 3.0, 4)
    ]
}

// Doubles sigma, turns by 0.5, moves 5 right and 3 up
fn moved(a: &MatchableKeypoint) -> MatchableKeypoint {
    MatchableKeypoint {
        row: a.row - 3,
        column: a.column + 5,
        sigma: a.sigma*2.0,
        principal_orientation: a.principal_orientation + 0.5,
        ..a.clone()
    }
}

#[test]
fn self_match_is_identity() {
    let features = reference_set();
    let pairs = generate_match_pairs(&features, &features, Some(0.03));
    assert_eq!(pairs, (0..5).map(|i| (i, i)).collect::<Vec<_>>());

    let transformation = match_keypoints(&features, &features, Some(0.03)).unwrap();
    assert_eq!(transformation, AffineTransformation::identity());
}

#[test]
fn moved_set_recovers_transformation() {
    let features = reference_set();
    let moved_features = features.iter().map(moved).collect::<Vec<_>>();

    let transformation = match_keypoints(&features, &moved_features, Some(0.03)).unwrap();
    assert_eq!(transformation.scale, 2.0);
    assert_eq!(transformation.rotation, 0.5);
    assert_eq!(transformation.translation_x, 5.0);
    assert_eq!(transformation.translation_y, -3.0);
}

#[test]
fn majority_outvotes_a_bad_match() {
    let features = reference_set();
    let mut moved_features = features.iter().map(moved).collect::<Vec<_>>();
    moved_features[3] = keypoint(1, 60, 1.0, 0.1, 3);

    let transformation = match_keypoints(&features, &moved_features, None).unwrap();
    assert_eq!(transformation, AffineTransformation { scale: 2.0, rotation: 0.5, translation_x: 5.0, translation_y: -3.0 });
}

#[test]
fn empty_sets_are_rejected() {
    let features = reference_set();
    assert!(matches!(match_keypoints(&[], &features, None), Err(SiftError::EmptyKeypointSet)));
    assert!(matches!(match_keypoints(&features, &[], Some(0.03)), Err(SiftError::EmptyKeypointSet)));
}

#[test]
fn threshold_rejects_distant_neighbours() {
    let features = reference_set();
    let strangers = (0..3).map(|i| keypoint(5, 5, 1.0, 0.0, 100 + i)).collect::<Vec<_>>();

    assert!(generate_match_pairs(&features, &strangers, Some(0.03)).is_empty());
    match match_keypoints(&features, &strangers, Some(0.03)) {
        Err(SiftError::NoAcceptedMatches { threshold }) => assert_eq!(threshold, 0.03),
        other => panic!("expected no accepted matches, got {:?}", other)
    }

    // Without a threshold every nearest neighbour counts
    assert_eq!(generate_match_pairs(&features, &strangers, None).len(), features.len());
    assert!(match_keypoints(&features, &strangers, None).is_ok());
}

#[test]
fn threshold_is_strict() {
    let a = keypoint(0, 0, 1.0, 0.0, 0);
    let b = keypoint(0, 0, 1.0, 0.0, 1);
    let distance = a.descriptor.distance_between(&b.descriptor);
    assert_eq!(match_feature(&a, &[b.clone()], Some(distance)), None);
    assert_eq!(match_feature(&a, &[b], Some(distance + 1e-9)), Some(0));
}

#[test]
fn equal_distances_pick_the_lower_index() {
    let a = keypoint(0, 0, 1.0, 0.0, 0);
    let candidates = vec![keypoint(1, 1, 1.0, 0.0, 7), keypoint(2, 2, 1.0, 0.0, 5), keypoint(3, 3, 1.0, 0.0, 5)];
    assert_eq!(match_feature(&a, &candidates, None), Some(0));

    let candidates = vec![keypoint(1, 1, 1.0, 0.0, 7), keypoint(2, 2, 1.0, 0.0, 0), keypoint(3, 3, 1.0, 0.0, 0)];
    assert_eq!(match_feature(&a, &candidates, None), Some(1));
}

#[test]
fn majority_ties_go_to_first_seen() {
    assert_eq!(majority_value(vec![1.0, 2.0, 2.0, 3.0, 3.0].into_iter()), Some(2.0));
    assert_eq!(majority_value(vec![3.0, 1.0, 2.0].into_iter()), Some(3.0));
    assert_eq!(majority_value(vec![0.0, -0.0, 1.0].into_iter()), Some(0.0));
    assert_eq!(majority_value(Vec::<Float>::new().into_iter()), None);
}

struct PairCounter;

impl TransformEstimator for PairCounter {
    fn estimate(&self, pairs: &[(&MatchableKeypoint, &MatchableKeypoint)]) -> Result<AffineTransformation> {
        Ok(AffineTransformation { scale: pairs.len() as Float, ..AffineTransformation::identity() })
    }
}

#[test]
fn estimator_can_be_swapped() {
    let features = reference_set();
    let transformation = match_keypoints_with(&features, &features[..2], None, &PairCounter).unwrap();
    assert_eq!(transformation.scale, 5.0);
}
