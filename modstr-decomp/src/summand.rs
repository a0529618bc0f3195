use std::fmt::Display;
use modstr::{EucRing, EucRingOps};
use modstr::lc::{Gen, Lc};

/// A cyclic summand `R/(divisor)` generated by `gen`.
/// A zero divisor means the summand is free.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summand<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    gen: Lc<X, R>,
    divisor: R
}

impl<X, R> Summand<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    pub fn new(gen: Lc<X, R>, divisor: R) -> Self {
        Self { gen, divisor }
    }

    pub fn free(gen: Lc<X, R>) -> Self {
        Self::new(gen, R::zero())
    }

    pub fn gen(&self) -> &Lc<X, R> {
        &self.gen
    }

    pub fn divisor(&self) -> &R {
        &self.divisor
    }

    pub fn is_free(&self) -> bool {
        self.divisor.is_zero()
    }
}

impl<X, R> Display for Summand<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_free() {
            write!(f, "{}", R::math_symbol())
        } else {
            write!(f, "({}/{})", R::math_symbol(), self.divisor)
        }
    }
}
