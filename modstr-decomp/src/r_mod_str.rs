use itertools::Itertools;
use modstr::{Ring, RingOps};
use modstr::util::format::superscript;

/// A module of the form `R^r ⊕ R/(d_0) ⊕ ... ⊕ R/(d_t)`.
pub trait RModStr
where Self::R: Ring, for<'x> &'x Self::R: RingOps<Self::R> {
    type R;

    fn rank(&self) -> usize;
    fn tors(&self) -> &[Self::R];

    fn dim(&self) -> usize {
        self.rank() + self.tors().len()
    }

    fn is_zero(&self) -> bool {
        self.rank() == 0 && self.is_free()
    }

    fn is_free(&self) -> bool {
        self.tors().is_empty()
    }

    fn math_symbol(&self) -> String {
        rmod_str_symbol(self.rank(), self.tors(), "0")
    }
}

/// e.g. `Z² ⊕ (Z/2)³ ⊕ (Z/4)`. Equal adjacent torsions are grouped.
pub fn rmod_str_symbol<R>(rank: usize, tors: &[R], dflt: &str) -> String
where R: Ring, for<'x> &'x R: RingOps<R> {
    if rank == 0 && tors.is_empty() {
        return dflt.to_string()
    }

    let symbol = R::math_symbol();
    let mut res = vec![];

    if rank == 1 {
        res.push(symbol.clone());
    } else if rank > 1 {
        res.push(format!("{}{}", symbol, superscript(rank as isize)));
    }

    let tors = tors.iter()
        .map(|r| r.to_string())
        .dedup_with_count();

    for (n, t) in tors {
        let str = if n > 1 {
            format!("({}/{}){}", symbol, t, superscript(n as isize))
        } else {
            format!("({}/{})", symbol, t)
        };
        res.push(str);
    }

    res.join(" ⊕ ")
}
