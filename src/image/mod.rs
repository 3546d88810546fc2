extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, Pixel, Luma};
use image_rs::flat::NormalForm;
use na::DMatrix;

use crate::Float;

pub mod filter;

/// Grayscale float image. Rows index y, columns index x.
#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    pub buffer: DMatrix<Float>
}

impl Image {

    pub fn rows(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn cols(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn size(&self) -> usize {
        self.rows()*self.cols()
    }

    pub fn empty(rows: usize, cols: usize) -> Image {
        Image{ buffer: DMatrix::<Float>::zeros(rows,cols) }
    }

    pub fn from_matrix(matrix: &DMatrix<Float>) -> Image {
        Image{ buffer: matrix.clone() }
    }

    /// Wraps a row-major pixel buffer. The caller guarantees `pixels.len() == rows*cols`.
    pub fn from_row_slice(pixels: &[Float], rows: usize, cols: usize) -> Image {
        debug_assert_eq!(pixels.len(), rows*cols);
        Image{ buffer: DMatrix::<Float>::from_row_slice(rows, cols, pixels) }
    }

    pub fn to_row_major(&self) -> Vec<Float> {
        let mut pixels = Vec::with_capacity(self.size());
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                pixels.push(self.buffer[(r,c)]);
            }
        }
        pixels
    }

    pub fn from_gray_image(image: &GrayImage) -> Image {
        Image{ buffer: Image::image8_to_matrix(image) }
    }

    pub fn to_image(&self) -> GrayImage {
        Image::matrix_to_image(&self.buffer)
    }

    /// Keeps every second row and column. Odd dimensions round up, so the last row/column survives.
    pub fn downsample_half(image: &Image) -> Image {
        let rows = image.rows();
        let cols = image.cols();

        let new_rows = (rows + 1)/2;
        let new_cols = (cols + 1)/2;

        let mut new_buffer = DMatrix::<Float>::zeros(new_rows,new_cols);
        for r in (0..rows).step_by(2) {
            for c in (0..cols).step_by(2) {
                new_buffer[(r/2,c/2)] = image.buffer[(r,c)];
            }
        }

        Image{ buffer: new_buffer }
    }

    fn image8_to_matrix(gray_image: &GrayImage) -> DMatrix<Float> {
        debug_assert!(gray_image.sample_layout().is_normal(NormalForm::RowMajorPacked));

        let (width, height) = gray_image.dimensions();
        let size = (width * height) as usize;
        let mut vec_column_major: Vec<Float> = Vec::with_capacity(size);
        for x in 0..width {
            for y in 0..height {
                let pixel_value = gray_image.get_pixel(x, y).channels()[0];
                vec_column_major.push(pixel_value as Float);
            }
        }
        DMatrix::<Float>::from_vec(height as usize, width as usize, vec_column_major)
    }

    fn matrix_to_image(matrix: &DMatrix<Float>) -> GrayImage {
        let (rows, cols) = matrix.shape();

        let mut gray_image = GrayImage::new(cols as u32, rows as u32);
        let max = matrix.max();
        let min = matrix.min();
        for c in 0..cols {
            for r in 0..rows {
                let val = matrix[(r, c)];
                gray_image.put_pixel(c as u32, r as u32, Luma([normalize_to_gray(max,min,val)]));
            }
        }
        gray_image
    }
}

// https://en.wikipedia.org/wiki/Normalization_(image_processing)
fn normalize_to_gray(max: Float, min: Float, value: Float) -> u8 {
    let range = 255 as Float;
    match max - min {
        spread if spread > 0.0 => ((value - min) * (range / spread)) as u8,
        _ => 0
    }
}
