use std::fmt::{Debug, Display};

// Everything that can be a coefficient or a generator.

pub trait ElemBase: 
    Default + 
    PartialEq + 
    Eq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

impl<T> ElemBase for T where T: 
    Default + 
    PartialEq + 
    Eq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

pub trait Elem: ElemBase { 
    fn math_symbol() -> String;
}
