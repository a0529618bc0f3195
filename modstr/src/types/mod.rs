mod ratio;
mod ff;
mod gauss_int;
pub mod lc;

pub use ratio::*;
pub use ff::*;
pub use gauss_int::*;
pub use lc::{Gen, FreeGen, Lc};
