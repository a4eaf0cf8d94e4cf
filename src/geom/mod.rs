mod core;

pub use core::{Plane, Tolerance, UvPair, Vec3};
