mod complex;

pub use complex::*;
