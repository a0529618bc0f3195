use modstr::{EucRing, EucRingOps};
use crate::dense::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ElimForm {
    RowEchelon,
    RowHermite,
    Smith
}

impl<R> Mat<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    /// Reduces `self` to the given form. Row forms ignore the
    /// `q`, `qinv` flags.
    pub fn elim(&self, form: ElimForm, flags: ElimFlags) -> ElimResult<R> {
        let [f0, f1, _, _] = flags;
        match form {
            ElimForm::RowEchelon => row_echelon(self, [f0, f1]),
            ElimForm::RowHermite => row_hermite(self, [f0, f1]),
            ElimForm::Smith      => snf(self, flags)
        }
    }
}
