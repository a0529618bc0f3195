use std::fmt::{Display, Debug};
use std::str::FromStr;
use std::ops::{Add, Sub, Mul, Div, Rem, Neg, AddAssign, SubAssign, MulAssign, DivAssign, RemAssign};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use crate::{EucRing, EucRingOps, Elem, Mon, AddMon, AddGrp, AddMonOps, AddGrpOps, MonOps, RingOps, Ring, FieldOps, Field};

/// The field of fractions of a Euclidean ring `T`.
///
/// Values are always reduced: `gcd(numer, denom) = 1` and
/// `denom` is normalized, so equal fractions have equal
/// representations and `PartialEq` can be derived.
#[derive(Clone, PartialEq, Eq)]
pub struct Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    numer: T,
    denom: T,
}

impl<T> Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    pub fn new(numer: T, denom: T) -> Self {
        assert!(!denom.is_zero(), "denominator must be non-zero.");

        if numer.is_zero() {
            return Self::zero()
        }

        let g = T::gcd(&numer, &denom);
        let (numer, denom) = if g.is_one() {
            (numer, denom)
        } else {
            (&numer / &g, &denom / &g)
        };

        let u = denom.normalizing_unit();
        Self { numer: numer * &u, denom: denom * u }
    }

    pub fn from_numer(numer: T) -> Self {
        Self { numer, denom: T::one() }
    }

    pub fn numer(&self) -> &T {
        &self.numer
    }

    pub fn denom(&self) -> &T {
        &self.denom
    }

    pub fn is_numer(&self) -> bool {
        self.denom.is_one()
    }
}

impl<T> From<i32> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn from(i: i32) -> Self {
        Self::from_numer(T::from(i))
    }
}

impl<T> FromStr for Ratio<T>
where T: EucRing + FromStr, for<'x> &'x T: EucRingOps<T> {
    type Err = String;

    /// Accepts `a` or `a/b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || format!("cannot parse '{s}' as a fraction.");
        let parse = |t: &str| t.trim().parse::<T>().map_err(|_| err());

        match s.split_once('/') {
            None => parse(s).map(Self::from_numer),
            Some((a, b)) => {
                let (a, b) = (parse(a)?, parse(b)?);
                if b.is_zero() {
                    Err(err())
                } else {
                    Ok(Self::new(a, b))
                }
            }
        }
    }
}

impl<T> Display for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::util::format::paren_expr;

        if self.is_numer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", paren_expr(&self.numer), paren_expr(&self.denom))
        }
    }
}

impl<T> Debug for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T> Default for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> Zero for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl<T> Neg for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self { numer: -self.numer, denom: self.denom }
    }
}

impl<T> Neg for &Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// a/b ± c/d = (a(l/b) ± c(l/d)) / l, with l = lcm(b, d).
macro_rules! impl_add_op {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<'a, 'b, T> $trait<&'b Ratio<T>> for &'a Ratio<T>
        where T: EucRing, for<'x> &'x T: EucRingOps<T> {
            type Output = Ratio<T>;

            fn $method(self, rhs: &'b Ratio<T>) -> Self::Output {
                let (a, b) = (&self.numer, &self.denom);
                let (c, d) = (&rhs.numer, &rhs.denom);

                if b == d {
                    return Ratio::new($trait::$method(a, c), b.clone())
                }

                let l = T::lcm(b, d);
                let x = a * &(&l / b);
                let y = c * &(&l / d);
                Ratio::new($trait::$method(x, y), l)
            }
        }
    };
}

impl_add_op!(Add, add);
impl_add_op!(Sub, sub);

// cross-cancel before multiplying to keep entries small.
#[auto_ops]
impl<'a, 'b, T> Mul<&'b Ratio<T>> for &'a Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Ratio<T>;

    fn mul(self, rhs: &'b Ratio<T>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Ratio::zero()
        }

        let (a, b) = (&self.numer, &self.denom);
        let (c, d) = (&rhs.numer, &rhs.denom);
        let k = T::gcd(a, d);
        let l = T::gcd(c, b);

        Ratio::new(
            (a / &k) * (c / &l),
            (b / &l) * (d / &k)
        )
    }
}

#[auto_ops]
impl<'a, 'b, T> Div<&'b Ratio<T>> for &'a Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Ratio<T>;

    fn div(self, rhs: &'b Ratio<T>) -> Self::Output {
        let Some(inv) = rhs.inv() else {
            panic!("division by zero.")
        };
        self * &inv
    }
}

#[auto_ops]
impl<'a, 'b, T> Rem<&'b Ratio<T>> for &'a Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Ratio<T>;

    fn rem(self, rhs: &'b Ratio<T>) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero.");
        Ratio::zero()
    }
}

macro_rules! impl_alg_ops {
    ($trait:ident) => {
        impl<T> $trait for Ratio<T>
        where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

        impl<T> $trait<Ratio<T>> for &Ratio<T>
        where T: EucRing, for<'x> &'x T: EucRingOps<T> {}
    };
}

impl_alg_ops!(AddMonOps);
impl_alg_ops!(AddGrpOps);
impl_alg_ops!(MonOps);
impl_alg_ops!(RingOps);
impl_alg_ops!(EucRingOps);
impl_alg_ops!(FieldOps);

impl<T> Elem for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn math_symbol() -> String {
        match T::math_symbol().as_str() {
            "Z" => String::from("Q"),
            t   => format!("Frac({t})")
        }
    }
}

impl<T> AddMon for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> AddGrp for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> Mon for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> Ring for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::new(self.denom.clone(), self.numer.clone()))
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }
}

impl<T> EucRing for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Deg = u8;

    fn euc_deg(&self) -> u8 {
        if self.is_zero() { 0 } else { 1 }
    }
}

impl<T> Field for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GaussInt;

    type Q = Ratio<i64>;

    fn q(a: i64, b: i64) -> Q {
        Q::new(a, b)
    }

    #[test]
    fn reduced() {
        assert_eq!((q(0, -4).numer(), q(0, -4).denom()), (&0, &1));
        assert_eq!((q(1, -3).numer(), q(1, -3).denom()), (&-1, &3));
        assert_eq!((q(6, -8).numer(), q(6, -8).denom()), (&-3, &4));
        assert_eq!(q(4, 2), Q::from(2));
    }

    #[test]
    fn reduced_gauss() {
        // 2 / 2i = -i.
        type A = GaussInt<i64>;
        let a = Ratio::new(A::new(2, 0), A::new(0, 2));
        assert!(a.is_numer());
        assert_eq!(a.numer(), &A::new(0, -1));
    }

    #[test]
    fn symbol_and_display() {
        assert_eq!(Q::math_symbol(), "Q");
        assert_eq!(q(-3, 1).to_string(), "-3");
        assert_eq!(q(-3, 4).to_string(), "-3/4");
    }

    #[test]
    fn from_str() {
        assert_eq!("-3".parse::<Q>(), Ok(Q::from(-3)));
        assert_eq!(" 6 / -8 ".parse::<Q>(), Ok(q(-3, 4)));
        assert!("1/0".parse::<Q>().is_err());
        assert!("x".parse::<Q>().is_err());
        assert!("1/y".parse::<Q>().is_err());
    }

    #[test]
    fn add_sub() {
        assert_eq!(q(1, 2) + q(3, 5), q(11, 10));
        assert_eq!(q(1, 6) + q(1, 3), q(1, 2));
        assert_eq!(q(1, 2) - q(3, 5), q(-1, 10));
        assert_eq!(q(1, 4) + q(3, 4), Q::one());
        assert_eq!(&q(1, 2) + &Q::zero(), q(1, 2));

        let mut a = q(1, 2);
        a -= q(1, 2);
        assert!(a.is_zero());
    }

    #[test]
    fn mul_div() {
        assert_eq!(q(3, 10) * q(-2, 7), q(-3, 35));
        assert_eq!(q(3, 4) * -Q::one(), q(-3, 4));
        assert!((q(3, 4) * Q::zero()).is_zero());
        assert_eq!(q(3, 10) / q(-2, 7), q(-21, 20));
        assert_eq!(q(3, 10) % q(2, 7), Q::zero());
    }

    #[test]
    fn inv() {
        assert_eq!(q(-3, 10).inv(), Some(q(-10, 3)));
        assert_eq!(Q::zero().inv(), None);
        assert_eq!(q(-3, 10).normalizing_unit(), q(-10, 3));
        assert_eq!(Q::zero().normalizing_unit(), Q::one());
    }

    #[test]
    fn euc_deg() {
        assert_eq!(Q::zero().euc_deg(), 0);
        assert_eq!(q(5, 3).euc_deg(), 1);
    }
}
