extern crate nalgebra as na;

use na::DMatrix;
use crate::Float;

pub trait Kernel {
    // 1 x (2*radius+1) row of filter taps
    fn kernel(&self) -> &DMatrix<Float>;
    // Size at which the filter is traversed
    fn step(&self) -> usize;
    // Number of taps on one side of the center element
    fn radius(&self) -> usize {
        (self.kernel().ncols()-1)/2
    }

    fn normalizing_constant(&self) -> Float;
}
