use crate::Float;

pub mod sift_feature;

pub trait Feature {
    fn get_row(&self) -> usize;
    fn get_column(&self) -> usize;
    fn get_sigma(&self) -> Float;
}

pub trait Oriented {
    fn get_orientation(&self) -> Float;
}
