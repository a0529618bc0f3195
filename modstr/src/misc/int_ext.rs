use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use crate::*;

pub trait IntOps<T = Self>: EucRingOps<T> {}

pub trait Integer: EucRing + IntOps + Signed + PartialOrd + Ord
where for<'a> &'a Self: EucRingOps<Self> {
    fn floor_div(&self, d: &Self) -> Self { 
        let q = self / d;
        let r = self - &q * d;
        if !r.is_zero() && (r.is_negative() != d.is_negative()) { 
            q - Self::one()
        } else { 
            q
        }
    }

    fn floor_mod(&self, d: &Self) -> Self { 
        self - &self.floor_div(d) * d
    }
}

impl<T> DivRound for T
where T: Integer, for<'x> &'x T: IntOps<T> {
    // round(a / b) = floor((2a + b) / 2b) for b > 0.
    fn div_round(&self, q: &Self) -> Self {
        let (a, b) = if q.is_negative() { 
            (-self, -q)
        } else { 
            (self.clone(), q.clone())
        };
        let two = Self::from(2);
        let n = &two * &a + &b;
        let d = &two * &b;
        n.floor_div(&d)
    }
}

macro_rules! impl_ops {
    ($trait:ident, $type:ty) => {
        impl $trait for $type {}
        impl<'a> $trait<$type> for &'a $type {}
    };
}

macro_rules! impl_integer {
    ($type:ident, $deg:ty, $deg_fn:expr) => {
        impl_ops!(AddMonOps, $type);
        impl_ops!(AddGrpOps, $type);
        impl_ops!(MonOps, $type);
        impl_ops!(RingOps, $type);
        impl_ops!(EucRingOps, $type);
        impl_ops!(IntOps, $type);

        impl Elem for $type {
            fn math_symbol() -> String { 
                String::from("Z")
            }
        }
        
        impl AddMon for $type {}
        impl AddGrp for $type {}
        impl Mon for $type {}
        impl Ring for $type {
            fn inv(&self) -> Option<Self> {
                if self.is_unit() { 
                    Some(self.clone())
                } else { 
                    None
                }
            }
        
            fn is_unit(&self) -> bool {
                self.is_one() || (-self).is_one()
            }
        
            fn normalizing_unit(&self) -> Self {
                if !self.is_negative() { 
                    Self::one() 
                } else { 
                    -Self::one() 
                }
            }
        }

        impl EucRing for $type {
            type Deg = $deg;

            fn euc_deg(&self) -> Self::Deg { 
                $deg_fn(self)
            }

            fn rem_normal(&self, d: &Self) -> Self { 
                if d.is_zero() { 
                    self.clone()
                } else { 
                    self.floor_mod(&d.abs())
                }
            }

            fn gcd(x: &Self, y: &Self) -> Self {
                num_integer::Integer::gcd(x, y)
            }

            fn gcdx(x: &Self, y: &Self) -> (Self, Self, Self) {
                let num_integer::ExtendedGcd{ gcd: d, x: s, y: t, .. } = num_integer::Integer::extended_gcd(x, y);
                (d, s, t)
            }

            fn lcm(x: &Self, y: &Self) -> Self {
                num_integer::Integer::lcm(x, y)
            }
        }

        impl Integer for $type {}
    }
}

impl_integer!(i32,  u32,  |a: &i32| a.unsigned_abs());
impl_integer!(i64,  u64,  |a: &i64| a.unsigned_abs());
impl_integer!(i128, u128, |a: &i128| a.unsigned_abs());
impl_integer!(BigInt, BigUint, |a: &BigInt| a.magnitude().clone());

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn check_type() {
        fn check<T>() where T: Integer, for<'a> &'a T: IntOps<T> {}
        check::<i32>();
        check::<i64>();
        check::<i128>();
        check::<BigInt>();
    }

    #[test]
    fn int_is_unit() { 
        assert!(1.is_unit());
        assert!((-1).is_unit());
        assert!(!2.is_unit());
    }

    #[test]
    fn int_inv() { 
        assert_eq!(1.inv(), Some(1));
        assert_eq!((-1).inv(), Some(-1));
        assert_eq!(2.inv(), None);
    }

    #[test]
    fn int_normalizing_unit() { 
        assert_eq!(1.normalizing_unit(), 1);
        assert_eq!((-1).normalizing_unit(), -1);
        assert_eq!(2.normalizing_unit(), 1);
    }

    #[test]
    fn int_divides() {
        assert!(2i32.divides(&4));
        assert!(!3i32.divides(&4));
        assert!(!0i32.divides(&1));
    }

    #[test]
    fn euc_deg() { 
        assert_eq!(0i32.euc_deg(), 0u32);
        assert_eq!((-7i64).euc_deg(), 7);
        assert_eq!(BigInt::from(-12).euc_deg(), BigUint::from(12u32));
        assert!(3i32.euc_deg() < (-4i32).euc_deg());
    }

    #[test]
    fn rem_normal() { 
        assert_eq!(7.rem_normal(&3), 1);
        assert_eq!((-7).rem_normal(&3), 2);
        assert_eq!(7.rem_normal(&-3), 1);
        assert_eq!((-7).rem_normal(&-3), 2);
        assert_eq!((-6).rem_normal(&3), 0);
        assert_eq!(5.rem_normal(&0), 5);
        assert_eq!(BigInt::from(-1).rem_normal(&BigInt::from(4)), BigInt::from(3));
    }

    #[test]
    fn floor_div() { 
        assert_eq!(7.floor_div(&2), 3);
        assert_eq!((-7).floor_div(&2), -4);
        assert_eq!(7.floor_div(&-2), -4);
        assert_eq!((-7).floor_div(&-2), 3);
        assert_eq!((-6).floor_div(&2), -3);
    }

    #[test]
    fn gcd_i32() {
        let (a, b) = (240, 46);
        let d = i32::gcd(&a, &b);
        assert_eq!(d, 2);

        let (a, b) = (24, 0);
        let d = i32::gcd(&a, &b);
        assert_eq!(d, 24);

        let (a, b) = (0, -24);
        let d = i32::gcd(&a, &b);
        assert_eq!(d, 24);

        let (a, b) = (0, 0);
        let d = i32::gcd(&a, &b);
        assert_eq!(d, 0);
    }

    #[test]
    fn gcdx_i32() {
        let (a, b) = (240, 46);
        let (d, s, t) = i32::gcdx(&a, &b);
        assert_eq!(d, 2);
        assert_eq!(s * a + t * b, d);

        let (a, b) = (24, 0);
        let (d, s, t) = i32::gcdx(&a, &b);
        assert_eq!(d, 24);
        assert_eq!(s * a + t * b, d);

        let (a, b) = (0, 0);
        let (d, s, t) = i32::gcdx(&a, &b);
        assert_eq!(d, 0);
        assert_eq!(s * a + t * b, d);
    }

    #[test]
    fn gcdx_bigint() {
        let (a, b) = (BigInt::from(-240), BigInt::from(46));
        let (d, s, t) = BigInt::gcdx(&a, &b);
        assert_eq!(d, BigInt::from(2));
        assert_eq!(s * a + t * b, d);
    }

    #[test]
    fn div_round() { 
        assert_eq!(12.div_round(&5), 2);
        assert_eq!(13.div_round(&5), 3);
        assert_eq!((-12).div_round(&5), -2);
        assert_eq!((-13).div_round(&5), -3);
        assert_eq!(12.div_round(&-5), -2);
        assert_eq!(5.div_round(&2), 3);
        assert_eq!((-5).div_round(&2), -2);
    }

    #[test]
    fn div_round_large() { 
        let a = i64::MAX / 4;
        assert_eq!(a.div_round(&1), a);
    }
}
