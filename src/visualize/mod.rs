use log::debug;

use crate::Float;
use crate::image::Image;
use crate::features::{Feature, Oriented};

pub const MARKER_VALUE: Float = 255.0;

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Offset {
    pub x: isize,
    pub y: isize
}

// https://www.geeksforgeeks.org/bresenhams-circle-drawing-algorithm/?ref=rp
pub fn circle_bresenham(radius: usize) -> Vec<Offset> {

    let mut x: isize = 0;
    let mut y: isize = radius as isize;
    let mut d = 3 - 2*radius as isize;

    let mut offsets = bresenham_octant(x, y);
    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d = d + 4*(x - y) + 10;
        } else {
            d = d + 4*x + 6;
        }
        offsets.extend(bresenham_octant(x, y));
    }

    offsets
}

fn bresenham_octant(x: isize, y: isize) -> Vec<Offset> {
    let mut points = Vec::<Offset>::with_capacity(8);
    for x_sign in [-1isize, 1].iter() {
        for y_sign in [-1isize, 1].iter() {
            let x_signed = x_sign*x;
            let y_signed = y_sign*y;

            points.push(Offset{x: x_signed, y: y_signed});
            points.push(Offset{x: y_signed, y: x_signed});
        }
    }
    points
}

fn put_pixel(image: &mut Image, x: isize, y: isize, value: Float) -> () {
    if x >= 0 && y >= 0 && (y as usize) < image.rows() && (x as usize) < image.cols() {
        image.buffer[(y as usize, x as usize)] = value;
    }
}

/// Circle of radius sigma plus a sigma-long stroke along the principal orientation.
/// Keypoints whose circle would leave the image are skipped.
pub fn draw_keypoints<T: Feature + Oriented>(image: &mut Image, keypoints: &[T]) -> () {
    let rows = image.rows() as Float;
    let cols = image.cols() as Float;
    let mut drawn = 0;

    for keypoint in keypoints {
        let row = keypoint.get_row() as Float;
        let column = keypoint.get_column() as Float;
        let sigma = keypoint.get_sigma();
        if row - sigma < 0.0 || row + sigma >= rows || column - sigma < 0.0 || column + sigma >= cols {
            continue;
        }

        for offset in circle_bresenham(sigma.round() as usize) {
            put_pixel(image, column as isize + offset.x, row as isize + offset.y, MARKER_VALUE);
        }

        let orientation = keypoint.get_orientation();
        let end_x = column + sigma*orientation.cos();
        let end_y = row + sigma*orientation.sin();
        draw_line(image, (column, row), (end_x, end_y), MARKER_VALUE);
        drawn += 1;
    }

    debug!("drew {} of {} keypoints", drawn, keypoints.len());
}

pub fn draw_line(image: &mut Image, (x_start, y_start): (Float, Float), (x_end, y_end): (Float, Float), value: Float) -> () {
    let steps = (x_end - x_start).abs().max((y_end - y_start).abs()).ceil().max(1.0) as usize;
    for i in 0..steps+1 {
        let t = i as Float/steps as Float;
        let x = x_start + t*(x_end - x_start);
        let y = y_start + t*(y_end - y_start);
        put_pixel(image, x.round() as isize, y.round() as isize, value);
    }
}

pub fn draw_square(image: &mut Image, x: usize, y: usize, side_length: usize, value: Float) -> () {
    let side = side_length as isize;
    let (x, y) = (x as isize, y as isize);
    for i in -side..side+1 {
        put_pixel(image, x + i, y + side, value);
        put_pixel(image, x + i, y - side, value);
        put_pixel(image, x + side, y + i, value);
        put_pixel(image, x - side, y + i, value);
    }
}

pub fn gradient_magnitude_image(x_gradient: &Image, y_gradient: &Image) -> Image {
    Image::from_matrix(&x_gradient.buffer.zip_map(&y_gradient.buffer, |gx, gy| (gx*gx + gy*gy).sqrt()))
}

/// Places both images side by side and marks every matched keypoint with a square.
pub fn display_matches<T: Feature>(image_a: &Image, image_b: &Image, features_a: &[T], features_b: &[T], match_indices: &[(usize, usize)]) -> Image {
    let rows = image_a.rows().max(image_b.rows());
    let offset = image_a.cols();
    let mut target_image = Image::empty(rows, offset + image_b.cols());

    target_image.buffer.view_mut((0, 0), (image_a.rows(), image_a.cols())).copy_from(&image_a.buffer);
    target_image.buffer.view_mut((0, offset), (image_b.rows(), image_b.cols())).copy_from(&image_b.buffer);

    for &(a_index, b_index) in match_indices {
        let feature_a = &features_a[a_index];
        let feature_b = &features_b[b_index];

        draw_square(&mut target_image, feature_a.get_column(), feature_a.get_row(), 1, MARKER_VALUE);
        draw_square(&mut target_image, offset + feature_b.get_column(), feature_b.get_row(), 1, MARKER_VALUE);
    }

    target_image
}
