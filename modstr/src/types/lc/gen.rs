use std::hash::Hash;
use derive_more::Display;

use crate::{Elem, ElemBase};

/// Generators of a free module. The order fixes 
/// the canonical ordering of a basis.
pub trait Gen: Elem + Hash + Ord {}

#[derive(Debug, Display, Default, Hash, PartialEq, Eq, Clone, PartialOrd, Ord)]
#[display("<{}>", _0)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FreeGen<T>(pub T) where T: ElemBase;

impl<T> From<T> for FreeGen<T> 
where T: ElemBase {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Elem for FreeGen<T> 
where T: ElemBase { 
    fn math_symbol() -> String {
        let full_name = std::any::type_name::<T>();
        let name = full_name.split("::").last().unwrap_or(full_name);
        format!("Free<{}>", name)
    }
}

impl<T> Gen for FreeGen<T> 
where T: ElemBase + Hash + Ord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let a = FreeGen(42);
        let b = FreeGen("e0");

        assert_eq!(a.to_string(), "<42>");
        assert_eq!(b.to_string(), "<e0>");
    }

    #[test]
    fn ord() { 
        let mut v = vec![FreeGen(3), FreeGen(1), FreeGen(2)];
        v.sort();
        assert_eq!(v, vec![FreeGen(1), FreeGen(2), FreeGen(3)]);
    }

    #[test]
    fn math_symbol() { 
        assert_eq!(FreeGen::<i32>::math_symbol(), "Free<i32>");
    }
}
