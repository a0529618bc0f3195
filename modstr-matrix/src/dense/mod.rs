pub use crate::MatTrait;

mod mat;
mod calc;
mod snf;
mod echelon;
mod elim;

pub use mat::*;
pub use calc::*;
pub use snf::*;
pub use echelon::*;
pub use elim::*;
