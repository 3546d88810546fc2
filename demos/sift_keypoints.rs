extern crate image as image_rs;
extern crate sift;

use color_eyre::eyre::Result;
use log::info;
use std::env;
use std::path::Path;

use sift::image::{Image, filter::{Gradient, gauss_kernel::GaussianBlur, prewitt_kernel::CentralDifference}};
use sift::pyramid::sift::{sift_image, sift_runtime_params::load_runtime_params};
use sift::visualize::{draw_keypoints, gradient_magnitude_image};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let image_path = args.get(1).map(|s| s.as_str()).unwrap_or("images/Bikesgray.jpg");
    let config_path = args.get(2).map(|s| s.as_str()).unwrap_or("config/sift_runtime_params.yaml");
    let image_out_folder = "output/";

    let runtime_params = load_runtime_params(config_path)?;
    info!("{:?}", runtime_params);

    let gray_image = image_rs::open(&Path::new(image_path))?.to_luma8();
    let image = Image::from_gray_image(&gray_image);

    let blur = GaussianBlur::new(runtime_params.blur_half_factor);
    let gradient = CentralDifference;

    let keypoints = sift_image(&image, &runtime_params, &blur, &gradient);
    for keypoint in keypoints.iter() {
        info!("({},{}) sigma {:.3} orientation {:.3}: {:?}", keypoint.row, keypoint.column, keypoint.sigma, keypoint.principal_orientation, keypoint.descriptor.data());
    }
    info!("Total keypoints: {}", keypoints.len());

    let (x_gradient, y_gradient) = gradient.gradient(&image);
    gradient_magnitude_image(&x_gradient, &y_gradient).to_image().save(format!("{}gradient.png", image_out_folder))?;

    let mut display = image.clone();
    draw_keypoints(&mut display, &keypoints);
    display.to_image().save(format!("{}keypoints.png", image_out_folder))?;

    Ok(())
}
