use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign, Mul, MulAssign};
use ahash::AHashMap;
use itertools::Itertools;
use num_traits::Zero;
use auto_impl_ops::auto_ops;
use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Ring, RingOps, RMod, RModOps};

use super::gen::*;

/// A finite formal linear combination `Σ r_x x`.
/// Zero coefficients are never stored.
#[derive(PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    terms: AHashMap<X, R>,
    #[cfg_attr(feature = "serde", serde(skip))]
    zero: R
}

impl<X, R> Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn new() -> Self {
        // fixed seeds keep the iteration order reproducible.
        let hasher = ahash::RandomState::with_seeds(0, 0, 0, 0);
        Self {
            terms: AHashMap::with_hasher(hasher),
            zero: R::zero()
        }
    }

    /// The combination `Σ v_i b_i`.
    pub fn from_coords(basis: &[X], v: &[R]) -> Self {
        assert_eq!(basis.len(), v.len(), "dimension mismatch.");
        basis.iter().cloned().zip(v.iter().cloned()).collect()
    }

    /// Generators with a nonzero coefficient.
    pub fn gens(&self) -> impl Iterator<Item = &X> {
        self.terms.keys()
    }

    pub fn coeff(&self, x: &X) -> &R {
        self.terms.get(x).unwrap_or(&self.zero)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&X, &R)> {
        self.terms.iter()
    }

    /// Coordinates with respect to `basis`. Terms on
    /// generators outside `basis` do not contribute.
    pub fn factorize(&self, basis: &[X]) -> Vec<R> {
        basis.iter().map(|x| self.coeff(x).clone()).collect()
    }

    fn add_term<F>(&mut self, x: &X, r: &R, f: F)
    where F: Fn(&mut R, &R) {
        if r.is_zero() { return }

        match self.terms.get_mut(x) {
            Some(a) => {
                f(a, r);
                if a.is_zero() {
                    self.terms.remove(x);
                }
            },
            None => {
                let mut a = R::zero();
                f(&mut a, r);
                self.terms.insert(x.clone(), a);
            }
        }
    }
}

impl<X, R> Default for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X, R> From<X> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(x: X) -> Self {
        Self::from((x, R::one()))
    }
}

impl<X, R> From<(X, R)> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(term: (X, R)) -> Self {
        Self::from_iter([term])
    }
}

impl<X, R> FromIterator<(X, R)> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from_iter<T: IntoIterator<Item = (X, R)>>(iter: T) -> Self {
        let mut res = Self::new();
        for (x, r) in iter {
            res.add_term(&x, &r, |a, r| *a += r);
        }
        res
    }
}

impl<X, R> IntoIterator for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    type Item = (X, R);
    type IntoIter = std::collections::hash_map::IntoIter<X, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<X, R> Display for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = self.iter().sorted_by_key(|(x, _)| *x);
        write!(f, "{}", crate::util::format::lc(terms))
    }
}

impl<X, R> Debug for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<X, R> Zero for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<X, R> Neg for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for r in self.terms.values_mut() {
            *r = -&*r;
        }
        self
    }
}

impl<X, R> Neg for &Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Lc<X, R>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[auto_ops]
impl<X, R> AddAssign<&Lc<X, R>> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn add_assign(&mut self, rhs: &Self) {
        for (x, r) in rhs.iter() {
            self.add_term(x, r, |a, r| *a += r);
        }
    }
}

#[auto_ops]
impl<X, R> SubAssign<&Lc<X, R>> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn sub_assign(&mut self, rhs: &Self) {
        for (x, r) in rhs.iter() {
            self.add_term(x, r, |a, r| *a -= r);
        }
    }
}

#[auto_ops]
impl<X, R> MulAssign<&R> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        for r in self.terms.values_mut() {
            *r *= rhs;
        }
        self.terms.retain(|_, r| !r.is_zero());
    }
}

macro_rules! impl_alg_ops {
    ($trait:ident) => {
        impl<X, R> $trait<Self> for Lc<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

        impl<X, R> $trait<Lc<X, R>> for &Lc<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}
    };
}

impl_alg_ops!(AddMonOps);
impl_alg_ops!(AddGrpOps);

impl<X, R> RModOps<R, Self> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

impl<X, R> RModOps<R, Lc<X, R>> for &Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

impl<X, R> Elem for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn math_symbol() -> String {
        format!("{}<{}>", R::math_symbol(), X::math_symbol())
    }
}

impl<X, R> AddMon for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

impl<X, R> AddGrp for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

impl<X, R> RMod for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    type R = R;
}
