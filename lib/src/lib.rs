#![deny(unused_imports)]

pub mod math;
