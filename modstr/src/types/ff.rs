#![allow(non_upper_case_globals)]

use std::ops::{Add, Neg, Sub, Mul, Div, Rem, AddAssign, SubAssign, MulAssign, DivAssign, RemAssign};
use std::str::FromStr;
use derive_more::{Display, Debug};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Elem, AddMonOps, AddGrpOps, MonOps, RingOps, FieldOps, EucRingOps, AddMon, AddGrp, Mon, Ring, EucRing, Field};

/// The prime field `Z/p`. `p` is assumed to be prime,
/// values are kept reduced to `0 <= a < p`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Display, Debug)]
#[display("{}", _0)]
#[debug("{}", _0)]
pub struct FF<const p: u32>(u32);

impl<const p: u32> FF<p> {
    pub fn new(a: i64) -> Self {
        assert!(p > 1);
        Self(a.rem_euclid(p as i64) as u32)
    }

    pub fn rep(&self) -> u32 {
        self.0
    }

    fn reduce(a: u64) -> Self {
        Self((a % p as u64) as u32)
    }

    fn pow(&self, mut n: u32) -> Self {
        let mut res = Self::one();
        let mut b = *self;
        while n > 0 {
            if n & 1 == 1 {
                res = res * b;
            }
            b = b * b;
            n >>= 1;
        }
        res
    }
}

impl<const p: u32> From<i32> for FF<p> {
    fn from(a: i32) -> Self {
        Self::new(a as i64)
    }
}

impl<const p: u32> FromStr for FF<p> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>()
            .map(Self::new)
            .map_err(|e| format!("invalid element of F{}: '{}' ({})", p, s, e))
    }
}

impl<const p: u32> Zero for FF<p> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const p: u32> One for FF<p> {
    fn one() -> Self {
        Self(1)
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl<const p: u32> Neg for FF<p> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, const p: u32> Neg for &'a FF<p> {
    type Output = FF<p>;
    fn neg(self) -> Self::Output {
        if self.is_zero() { FF(0) } else { FF(p - self.0) }
    }
}

#[auto_ops]
impl<'a, 'b, const p: u32> Add<&'b FF<p>> for &'a FF<p> {
    type Output = FF<p>;
    fn add(self, rhs: &'b FF<p>) -> Self::Output {
        FF::reduce(self.0 as u64 + rhs.0 as u64)
    }
}

#[auto_ops]
impl<'a, 'b, const p: u32> Sub<&'b FF<p>> for &'a FF<p> {
    type Output = FF<p>;
    fn sub(self, rhs: &'b FF<p>) -> Self::Output {
        self + &(-rhs)
    }
}

#[auto_ops]
impl<'a, 'b, const p: u32> Mul<&'b FF<p>> for &'a FF<p> {
    type Output = FF<p>;
    fn mul(self, rhs: &'b FF<p>) -> Self::Output {
        FF::reduce(self.0 as u64 * rhs.0 as u64)
    }
}

#[auto_ops]
impl<'a, 'b, const p: u32> Div<&'b FF<p>> for &'a FF<p> {
    type Output = FF<p>;
    fn div(self, rhs: &'b FF<p>) -> Self::Output {
        let Some(inv) = rhs.inv() else {
            panic!("division by zero.")
        };
        self * &inv
    }
}

#[auto_ops]
impl<'a, 'b, const p: u32> Rem<&'b FF<p>> for &'a FF<p> {
    type Output = FF<p>;
    fn rem(self, rhs: &'b FF<p>) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero.");
        FF(0)
    }
}

macro_rules! impl_alg_ops {
    ($trait:ident) => {
        impl<const p: u32> $trait for FF<p> {}
        impl<'a, const p: u32> $trait<FF<p>> for &'a FF<p> {}
    };
}

impl_alg_ops!(AddMonOps);
impl_alg_ops!(AddGrpOps);
impl_alg_ops!(MonOps);
impl_alg_ops!(RingOps);
impl_alg_ops!(EucRingOps);
impl_alg_ops!(FieldOps);

impl<const p: u32> Elem for FF<p> {
    fn math_symbol() -> String {
        format!("F{}", crate::util::format::subscript(p as isize))
    }
}

impl<const p: u32> AddMon for FF<p> {}
impl<const p: u32> AddGrp for FF<p> {}
impl<const p: u32> Mon for FF<p> {}

impl<const p: u32> Ring for FF<p> {
    // a^{p-2} = a^{-1} by Fermat.
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.pow(p - 2))
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }
}

impl<const p: u32> EucRing for FF<p> {
    type Deg = u8;

    fn euc_deg(&self) -> u8 {
        if self.is_zero() { 0 } else { 1 }
    }
}

impl<const p: u32> Field for FF<p> {}
