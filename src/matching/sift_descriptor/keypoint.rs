extern crate nalgebra as na;

use na::{SMatrix, DMatrix};
use crate::Float;
use crate::image::Image;
use crate::features::{Feature, Oriented};

pub const NEIGHBOURHOOD_SIDE: usize = 8;

pub type GradientGrid = SMatrix<Float, NEIGHBOURHOOD_SIDE, NEIGHBOURHOOD_SIDE>;

/// Averaged gradients sampled on an 8x8 grid around a keypoint.
#[derive(Debug,Clone,PartialEq)]
pub struct GradientNeighbourhood {
    x_gradient: GradientGrid,
    y_gradient: GradientGrid
}

impl GradientNeighbourhood {
    pub fn zeros() -> GradientNeighbourhood {
        GradientNeighbourhood {
            x_gradient: GradientGrid::zeros(),
            y_gradient: GradientGrid::zeros()
        }
    }

    pub fn gradient(&self, r: usize, c: usize) -> (Float, Float) {
        (self.x_gradient[(r,c)], self.y_gradient[(r,c)])
    }

    pub fn set_gradient(&mut self, r: usize, c: usize, (x_gradient, y_gradient): (Float, Float)) -> () {
        self.x_gradient[(r,c)] = x_gradient;
        self.y_gradient[(r,c)] = y_gradient;
    }

    pub fn x_gradient(&self) -> &GradientGrid {
        &self.x_gradient
    }

    pub fn y_gradient(&self) -> &GradientGrid {
        &self.y_gradient
    }

    pub fn x_gradient_image(&self) -> Image {
        grid_to_image(&self.x_gradient)
    }

    pub fn y_gradient_image(&self) -> Image {
        grid_to_image(&self.y_gradient)
    }

    pub fn is_zero(&self) -> bool {
        self.x_gradient.iter().chain(self.y_gradient.iter()).all(|&v| v == 0.0)
    }
}

fn grid_to_image(grid: &GradientGrid) -> Image {
    Image::from_matrix(&DMatrix::from_column_slice(NEIGHBOURHOOD_SIDE, NEIGHBOURHOOD_SIDE, grid.as_slice()))
}

/// Scale-space keypoint in full-image coordinates.
#[derive(Debug,Clone,PartialEq)]
pub struct KeyPoint {
    pub row: usize,
    pub column: usize,
    pub magnitude: Float,
    pub sigma: Float,
    pub principal_orientation: Float,
    pub neighbourhood: GradientNeighbourhood
}

impl KeyPoint {
    pub fn new(row: usize, column: usize, magnitude: Float, sigma: Float) -> KeyPoint {
        KeyPoint {
            row,
            column,
            magnitude,
            sigma,
            principal_orientation: 0.0,
            neighbourhood: GradientNeighbourhood::zeros()
        }
    }

    /// Same keypoint, different orientation. The sampled neighbourhood is shared by value.
    pub fn with_orientation(&self, principal_orientation: Float) -> KeyPoint {
        KeyPoint { principal_orientation, ..self.clone() }
    }
}

impl Feature for KeyPoint {
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

impl Oriented for KeyPoint {
    fn get_orientation(&self) -> Float {
        self.principal_orientation
    }
}
