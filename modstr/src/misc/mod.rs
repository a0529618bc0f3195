mod int_ext;
mod div_round;

pub use int_ext::*;
pub use div_round::*;
