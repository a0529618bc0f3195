pub trait DivRound { 
    /// `self / q` rounded to the nearest integer, halves rounded up.
    fn div_round(&self, q: &Self) -> Self;
}
