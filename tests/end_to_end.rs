use sift::Float;
use sift::image::{Image, filter::{gauss_kernel::GaussianBlur, prewitt_kernel::CentralDifference}};
use sift::matching::sift_descriptor::affine_transformation::AffineTransformation;
use sift::pyramid::sift::{sift_image, sift_image_from_pixels, match_sift_images, sift_runtime_params::SiftRuntimeParams};

const SIDE: usize = 32;

// Dark 3x3 square on a bright background, plus a faint dot that should not survive thresholding
fn dark_square() -> Vec<Float> {
    let mut pixels = vec![255.0; SIDE*SIDE];
    for r in 15..18 {
        for c in 15..18 {
            pixels[r*SIDE + c] = 0.0;
        }
    }
    pixels[4*SIDE + 4] = 235.0;
    pixels
}

fn single_octave() -> SiftRuntimeParams {
    SiftRuntimeParams { octave_count: 1, ..SiftRuntimeParams::default() }
}

#[test]
fn square_yields_descriptors_at_its_center() {
    let _ = env_logger::builder().is_test(true).try_init();
    let runtime_params = single_octave();

    let features = sift_image_from_pixels(&dark_square(), SIDE, SIDE, &runtime_params, &GaussianBlur::default(), &CentralDifference);
    assert!(!features.is_empty());
    for feature in features.iter() {
        assert_eq!((feature.row, feature.column), (16, 16));
        assert!((feature.descriptor.norm() - 1.0).abs() < 1e-12);
    }

    // Orientation clones share one neighbourhood, so their descriptors agree
    for feature in features.iter().skip(1) {
        assert_eq!(feature.descriptor, features[0].descriptor);
    }
}

#[test]
fn pipeline_is_deterministic() {
    let runtime_params = single_octave();
    let image = Image::from_row_slice(&dark_square(), SIDE, SIDE);
    let blur = GaussianBlur::new(runtime_params.blur_half_factor);

    let first = sift_image(&image, &runtime_params, &blur, &CentralDifference);
    let second = sift_image(&image, &runtime_params, &blur, &CentralDifference);
    assert_eq!(first, second);
}

#[test]
fn image_matches_itself_with_identity() {
    let _ = env_logger::builder().is_test(true).try_init();
    let runtime_params = single_octave();
    let image = Image::from_row_slice(&dark_square(), SIDE, SIDE);

    let features = sift_image(&image, &runtime_params, &GaussianBlur::default(), &CentralDifference);
    let transformation = match_sift_images(&features, &features, &runtime_params).unwrap();
    assert_eq!(transformation, AffineTransformation::identity());
}

#[test]
fn flat_image_yields_nothing() {
    let runtime_params = SiftRuntimeParams::default();
    let pixels = vec![90.0; 20*24];
    let features = sift_image_from_pixels(&pixels, 20, 24, &runtime_params, &GaussianBlur::default(), &CentralDifference);
    assert!(features.is_empty());
    assert!(match_sift_images(&features, &features, &runtime_params).is_err());
}
