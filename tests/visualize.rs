extern crate nalgebra as na;

use na::DMatrix;
use sift::image::Image;
use sift::matching::sift_descriptor::keypoint::KeyPoint;
use sift::visualize::{circle_bresenham, draw_keypoints, display_matches, gradient_magnitude_image, MARKER_VALUE};

#[test]
fn circle_points_lie_on_the_radius() {
    for radius in 1..6 {
        let offsets = circle_bresenham(radius);
        assert!(!offsets.is_empty());
        for offset in offsets.iter() {
            let distance = ((offset.x*offset.x + offset.y*offset.y) as f64).sqrt();
            assert!((distance - radius as f64).abs() < 1.0, "radius {}: ({},{})", radius, offset.x, offset.y);
        }
        let r = radius as isize;
        for &(x, y) in [(0, r), (r, 0), (0, -r), (-r, 0)].iter() {
            assert!(offsets.iter().any(|o| o.x == x && o.y == y));
        }
    }
}

#[test]
fn keypoint_is_drawn_with_orientation_stroke() {
    let mut image = Image::empty(20, 20);
    let keypoint = KeyPoint::new(10, 10, 1.0, 3.0);
    draw_keypoints(&mut image, &[keypoint]);

    // Circle crosses the axes three pixels out
    assert_eq!(image.buffer[(10, 13)], MARKER_VALUE);
    assert_eq!(image.buffer[(7, 10)], MARKER_VALUE);
    assert_eq!(image.buffer[(13, 10)], MARKER_VALUE);
    // Orientation 0 strokes along the row from the center
    assert_eq!(image.buffer[(10, 10)], MARKER_VALUE);
    assert_eq!(image.buffer[(10, 11)], MARKER_VALUE);
    assert_eq!(image.buffer[(10, 9)], 0.0);
    assert_eq!(image.buffer[(0, 0)], 0.0);
}

#[test]
fn keypoints_near_the_border_are_skipped() {
    let mut image = Image::empty(20, 20);
    let keypoints = vec![KeyPoint::new(1, 10, 1.0, 3.0), KeyPoint::new(10, 18, 1.0, 3.0)];
    draw_keypoints(&mut image, &keypoints);
    assert!(image.buffer.iter().all(|&v| v == 0.0));
}

#[test]
fn matches_are_marked_side_by_side() {
    let image_a = Image::from_matrix(&DMatrix::from_element(4, 5, 10.0));
    let image_b = Image::from_matrix(&DMatrix::from_element(6, 3, 20.0));
    let features_a = vec![KeyPoint::new(2, 2, 1.0, 1.0)];
    let features_b = vec![KeyPoint::new(3, 1, 1.0, 1.0)];

    let display = display_matches(&image_a, &image_b, &features_a, &features_b, &[(0, 0)]);
    assert_eq!((display.rows(), display.cols()), (6, 8));
    assert_eq!(display.buffer[(5, 0)], 0.0);
    assert_eq!(display.buffer[(0, 5)], 20.0);

    // Square outlines around each match, centers untouched
    assert_eq!(display.buffer[(1, 1)], MARKER_VALUE);
    assert_eq!(display.buffer[(3, 3)], MARKER_VALUE);
    assert_eq!(display.buffer[(2, 2)], 10.0);
    assert_eq!(display.buffer[(2, 5)], MARKER_VALUE);
    assert_eq!(display.buffer[(4, 7)], MARKER_VALUE);
    assert_eq!(display.buffer[(3, 6)], 20.0);
}

#[test]
fn gradient_magnitude_is_euclidean() {
    let x_gradient = Image::from_matrix(&DMatrix::from_element(2, 2, 3.0));
    let y_gradient = Image::from_matrix(&DMatrix::from_element(2, 2, -4.0));
    let magnitude = gradient_magnitude_image(&x_gradient, &y_gradient);
    assert!(magnitude.buffer.iter().all(|&v| v == 5.0));
}
