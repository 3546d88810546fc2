extern crate image as image_rs;
extern crate sift;

use color_eyre::eyre::Result;
use log::info;
use std::env;
use std::path::Path;

use sift::image::{Image, filter::{gauss_kernel::GaussianBlur, prewitt_kernel::CentralDifference}};
use sift::pyramid::sift::{sift_image, match_sift_images, sift_runtime_params::load_runtime_params};
use sift::matching::generate_match_pairs;
use sift::visualize::display_matches;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let image_path = args.get(1).map(|s| s.as_str()).unwrap_or("images/blur.png");
    let image_path_2 = args.get(2).map(|s| s.as_str()).unwrap_or("images/blur_rotated.png");
    let config_path = args.get(3).map(|s| s.as_str()).unwrap_or("config/sift_runtime_params.yaml");
    let converted_file_out_path = "output/sift_matches.png";

    let runtime_params = load_runtime_params(config_path)?;
    info!("{}, {}", image_path, image_path_2);

    let image = Image::from_gray_image(&image_rs::open(&Path::new(image_path))?.to_luma8());
    let image_2 = Image::from_gray_image(&image_rs::open(&Path::new(image_path_2))?.to_luma8());

    let blur = GaussianBlur::new(runtime_params.blur_half_factor);
    let gradient = CentralDifference;

    let all_features = sift_image(&image, &runtime_params, &blur, &gradient);
    let all_features_2 = sift_image(&image_2, &runtime_params, &blur, &gradient);

    let match_pairs = generate_match_pairs(&all_features, &all_features_2, runtime_params.acceptance_threshold);
    info!("number of matched pairs: {}", match_pairs.len());

    let transformation = match_sift_images(&all_features, &all_features_2, &runtime_params)?;
    println!("{}", serde_yaml::to_string(&transformation)?);

    let match_display = display_matches(&image, &image_2, &all_features, &all_features_2, &match_pairs);
    match_display.to_image().save(converted_file_out_path)?;

    Ok(())
}
