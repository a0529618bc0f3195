mod r_mod_str;
mod summand;
mod simple;
mod homology;

pub use r_mod_str::*;
pub use summand::*;
pub use simple::*;
pub use homology::*;

pub mod config;
