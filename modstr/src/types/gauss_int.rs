use std::fmt::Display;
use std::str::FromStr;
use std::ops::{Add, Neg, Sub, Mul, AddAssign, SubAssign, MulAssign, Rem, Div, RemAssign, DivAssign};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use crate::*;

/// The Gaussian integers `Z[i]`, `a + bi` stored as `(a, b)`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct GaussInt<I>(I, I)
where I: Integer, for<'x> &'x I: IntOps<I>;

impl<I> GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    pub fn new(a: I, b: I) -> Self { 
        Self(a, b)
    }

    pub fn i() -> Self { 
        Self::new(I::zero(), I::one())
    }

    pub fn re(&self) -> &I { 
        &self.0
    }

    pub fn im(&self) -> &I { 
        &self.1
    }

    pub fn pair(&self) -> (&I, &I) { 
        (&self.0, &self.1)
    }

    pub fn pair_into(self) -> (I, I) { 
        (self.0, self.1)
    }

    pub fn conj(&self) -> Self { 
        Self(self.0.clone(), -&self.1)
    }

    pub fn norm(&self) -> I {
        let (a, b) = self.pair();
        a * a + b * b
    }
}

impl<I> From<i32> for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn from(a: i32) -> Self {
        Self::new(I::from(a), I::zero())
    }
}

impl<I> FromStr for GaussInt<I>
where I: Integer + FromStr, for<'x> &'x I: IntOps<I> {
    type Err = String;

    // accepts "a", "bi", "a + bi", "a - bi" and "(a, b)".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || format!("cannot parse string: '{s}'");
        let s = s.trim();

        if let Ok(a) = s.parse::<I>() {
            return Ok(Self::new(a, I::zero()))
        }

        let tuple = regex::Regex::new(r"^\(\s*(-?\d+)\s*,\s*(-?\d+)\s*\)$").map_err(|e| e.to_string())?;
        if let Some(c) = tuple.captures(s) { 
            let a = c[1].parse::<I>().map_err(|_| err())?;
            let b = c[2].parse::<I>().map_err(|_| err())?;
            return Ok(Self::new(a, b))
        }

        let expr = regex::Regex::new(r"^(?:(-?\d+)\s*([+-])|(-)?)\s*(\d*)\s*i$").map_err(|e| e.to_string())?;
        if let Some(c) = expr.captures(s) { 
            let a = match c.get(1) { 
                Some(a) => a.as_str().parse::<I>().map_err(|_| err())?,
                None => I::zero()
            };
            let neg = c.get(2).or(c.get(3)).map(|m| m.as_str() == "-").unwrap_or(false);
            let b = match &c[4] { 
                "" => I::one(),
                b  => b.parse::<I>().map_err(|_| err())?
            };
            let b = if neg { -b } else { b };
            return Ok(Self::new(a, b))
        }

        Err(err())
    }
}

impl<I> Display for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = self.pair();

        if b.is_zero() { 
            write!(f, "{a}")
        } else if a.is_zero() { 
            let b = 
                if b.is_one() { String::from("") } 
                else if (-b).is_one() { String::from("-") }
                else { b.to_string() };
            write!(f, "{b}i")
        } else {
            let sign = if !b.is_negative() { "+" } else { "-" };
            let b = 
                if b.is_unit() { String::from("") } 
                else { b.abs().to_string() };
    
            write!(f, "{a} {sign} {b}i")
        }
    }
}

impl<I> Zero for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn zero() -> Self {
        Self::new(I::zero(), I::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero() && self.1.is_zero()
    }
}

impl<I> One for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn one() -> Self {
        Self::new(I::one(), I::zero())
    }

    fn is_one(&self) -> bool {
        self.0.is_one() && self.1.is_zero()
    }
}

impl<I> Neg for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let (a, b) = self.pair_into();
        Self(-a, -b)
    }
}

impl<'a, I> Neg for &'a GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Output = GaussInt<I>;

    fn neg(self) -> Self::Output {
        let (a, b) = self.pair();
        GaussInt(-a, -b)
    }
}

macro_rules! impl_add_op {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<'a, 'b, I> $trait<&'b GaussInt<I>> for &'a GaussInt<I>
        where I: Integer, for<'x> &'x I: IntOps<I> {
            type Output = GaussInt<I>;

            fn $method(self, rhs: &'b GaussInt<I>) -> Self::Output {
                let (a, b) = self.pair();
                let (c, d) = rhs.pair();
                GaussInt($trait::$method(a, c), $trait::$method(b, d))
            }
        }
    };
}

impl_add_op!(Add, add);
impl_add_op!(Sub, sub);

#[auto_ops]
impl<'a, 'b, I> Mul<&'b GaussInt<I>> for &'a GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Output = GaussInt<I>;

    // (a + bi)(c + di) = (ac - bd) + (ad + bc)i.
    fn mul(self, rhs: &'b GaussInt<I>) -> Self::Output {
        let (a, b) = self.pair();
        let (c, d) = rhs.pair();

        if b.is_zero() {
            return GaussInt(a * c, a * d)
        } else if d.is_zero() { 
            return GaussInt(a * c, b * c)
        }

        GaussInt(a * c - b * d, a * d + b * c)
    }
}

// z / w = z conj(w) / N(w), rounded componentwise to 
// the nearest integers, so that N(z % w) <= N(w) / 2.

impl<I> DivRound for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn div_round(&self, rhs: &Self) -> Self {
        let n = rhs.norm();
        let (x, y) = (self * &rhs.conj()).pair_into();
        GaussInt( 
            x.div_round(&n),
            y.div_round(&n)
        )
    }
}

#[auto_ops]
impl<'a, 'b, I> Div<&'b GaussInt<I>> for &'a GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Output = GaussInt<I>;

    fn div(self, rhs: &'b GaussInt<I>) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero.");
        self.div_round(rhs)
    }
}

#[auto_ops]
impl<'a, 'b, I> Rem<&'b GaussInt<I>> for &'a GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Output = GaussInt<I>;

    fn rem(self, rhs: &'b GaussInt<I>) -> Self::Output {
        let q = self / rhs;
        self - &(rhs * &q)
    }
}

macro_rules! impl_alg_op {
    ($trait:ident) => {
        impl<I> $trait<Self> for GaussInt<I> 
        where I: Integer, for<'x> &'x I: IntOps<I> {}

        impl<'a, I> $trait<GaussInt<I>> for &'a GaussInt<I> 
        where I: Integer, for<'x> &'x I: IntOps<I> {}
    };
}

impl_alg_op!(AddMonOps);
impl_alg_op!(AddGrpOps);
impl_alg_op!(MonOps);
impl_alg_op!(RingOps);
impl_alg_op!(EucRingOps);

impl<I> Elem for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn math_symbol() -> String {
        String::from("Z[i]")
    }
}

impl<I> AddMon for GaussInt<I> 
where I: Integer, for<'x> &'x I: IntOps<I> {}

impl<I> AddGrp for GaussInt<I> 
where I: Integer, for<'x> &'x I: IntOps<I> {}

impl<I> Mon for GaussInt<I> 
where I: Integer, for<'x> &'x I: IntOps<I> {}

impl<I> Ring for GaussInt<I> 
where I: Integer, for<'x> &'x I: IntOps<I> {
    // units are ±1, ±i.
    fn is_unit(&self) -> bool {
        self.norm().is_one()
    }

    fn inv(&self) -> Option<Self> {
        if self.is_unit() {
            Some(self.conj())
        } else { 
            None
        }
    }

    // rotates into the quadrant a > 0, b ≧ 0.
    fn normalizing_unit(&self) -> Self {
        let (a, b) = self.pair();
        if a.is_positive() && !b.is_negative() {         // a > 0, b ≧ 0 -> 1
            Self::one()
        } else if !a.is_positive() && b.is_positive() {  // a ≦ 0, b > 0 -> -i
            -Self::i()
        } else if a.is_negative() && !b.is_positive() {  // a < 0, b ≦ 0 -> -1
            -Self::one()
        } else if !a.is_negative() && b.is_negative() {  // a ≧ 0, b < 0 -> i
            Self::i()
        } else {                                         // a = b = 0    -> 1
            Self::one()
        }
    }
}

impl<I> EucRing for GaussInt<I> 
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Deg = I;

    fn euc_deg(&self) -> I {
        self.norm()
    }

    // z - qw with q = (⌊x / N⌋, ⌊y / N⌋) where z conj(w) = x + yi. 
    // Adding kw to z shifts (x, y) by N k, so the result 
    // depends only on the class of z.
    fn rem_normal(&self, d: &Self) -> Self {
        if d.is_zero() { 
            return self.clone()
        }
        let n = d.norm();
        let (x, y) = (self * &d.conj()).pair_into();
        let q = GaussInt(x.floor_div(&n), y.floor_div(&n));
        self - &(d * &q)
    }
}
