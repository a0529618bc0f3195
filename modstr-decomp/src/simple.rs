use std::fmt::Display;
use itertools::Itertools;
use log::debug;
use modstr::{EucRing, EucRingOps};
use modstr::lc::{Gen, Lc};
use modstr_matrix::dense::{Mat, MatTrait, snf, row_hermite};

use crate::{RModStr, Summand};

/// A decomposed finitely presented module
///
///   M = R/(d_0) ⊕ ... ⊕ R/(d_t) ⊕ R^r,
///
/// together with the transform `trans` (summands × basis) that
/// sends the coordinates of an element over `basis` to its
/// coordinates over the summands.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    from = "SimpleRModStrData<X, R>",
    into = "SimpleRModStrData<X, R>",
    bound(
        serialize = "X: serde::Serialize, R: serde::Serialize",
        deserialize = "X: serde::Deserialize<'de>, R: serde::Deserialize<'de>"
    )
))]
pub struct SimpleRModStr<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    summands: Vec<Summand<X, R>>,
    basis: Vec<X>,
    trans: Mat<R>,
    rank: usize,
    tors: Vec<R>
}

impl<X, R> SimpleRModStr<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    fn new_raw(summands: Vec<Summand<X, R>>, basis: Vec<X>, trans: Mat<R>) -> Self {
        assert_eq!(trans.shape(), (summands.len(), basis.len()), "trans must be (summands × basis).");

        let rank = summands.iter().filter(|s| s.is_free()).count();
        let tors = summands.iter().filter(|s| !s.is_free()).map(|s| s.divisor().clone()).collect();

        Self { summands, basis, trans, rank, tors }
    }

    pub fn zero() -> Self {
        Self::new_raw(vec![], vec![], Mat::zero((0, 0)))
    }

    pub fn free(generators: Vec<X>) -> Self {
        Self::new(generators, None)
    }

    /// The free module on `generators` modulo the column span of `rel`.
    pub fn new(generators: Vec<X>, rel: Option<&Mat<R>>) -> Self {
        let id = Mat::id(generators.len());
        Self::from_matrices(generators, &id, &id, rel)
    }

    /// The submodule spanned by `generators` modulo the column
    /// span of `rel`. The generators must form a sub-basis of the
    /// free module on the generators they involve.
    pub fn from_lcs(generators: &[Lc<X, R>], rel: Option<&Mat<R>>) -> Self {
        let (basis, a, t) = Self::sub_basis(generators);
        let Some(t) = t else {
            panic!("generators do not form a sub-basis: {}", generators.iter().join(", "))
        };
        Self::from_matrices(basis, &a, &t, rel)
    }

    pub fn is_sub_basis(generators: &[Lc<X, R>]) -> bool {
        Self::sub_basis(generators).2.is_some()
    }

    // The canonical basis, the matrix `a` (basis × generators), and
    // a left inverse of `a` if the generators form a sub-basis.
    fn sub_basis(generators: &[Lc<X, R>]) -> (Vec<X>, Mat<R>, Option<Mat<R>>) {
        let basis = generators.iter()
            .flat_map(|z| z.gens().cloned())
            .sorted()
            .dedup()
            .collect_vec();

        let (n, k) = (basis.len(), generators.len());
        let a = Mat::generate((n, k), |i, j|
            generators[j].coeff(&basis[i]).clone()
        );

        if n < k {
            return (basis, a, None)
        }

        let t = row_hermite(&a, [true, false])
            .p()
            .map(|p| p.submat_rows(0..k))
            .filter(|t| (t * &a).is_id());

        (basis, a, t)
    }

    /// Flattens a basis of combinations into their generators,
    /// then decomposes as in `from_matrices`.
    pub fn from_lc_basis(basis: &[Lc<X, R>], a: &Mat<R>, t: &Mat<R>, rel: Option<&Mat<R>>) -> Self {
        let (o_basis, a0, t0) = Self::sub_basis(basis);
        let Some(t0) = t0 else {
            panic!("basis elements do not form a sub-basis: {}", basis.iter().join(", "))
        };
        Self::from_matrices(o_basis, &(a0 * a), &(t * t0), rel)
    }

    //                R^n
    //                ^|
    //               a||t
    //           rel  |v
    //  0 -> R^l >---> R^k --->> M -> 0
    //
    /// Decomposes `R^k / Im(rel)`, where `R^k` is embedded into the
    /// free module on `basis` by `a` with left inverse `t`.
    pub fn from_matrices(basis: Vec<X>, a: &Mat<R>, t: &Mat<R>, rel: Option<&Mat<R>>) -> Self {
        let (n, k) = a.shape();

        assert_eq!(basis.len(), n, "a must have one row per basis element.");
        assert_eq!(t.shape(), (k, n), "t must be the transpose shape of a.");
        assert!((t * a).is_id(), "t * a must be the identity.");

        let zero_rel = Mat::zero((k, 0));
        let rel = rel.unwrap_or(&zero_rel);

        assert_eq!(rel.nrows(), k, "rel must have one row per generator.");

        let (d, [Some(p), Some(pinv), _, _]) = snf(rel, [true, true, false, false]).destruct() else {
            unreachable!()
        };

        let r = std::cmp::min(k, rel.ncols());
        let diag = (0..k).map(|i|
            if i < r { d[(i, i)].clone() } else { R::zero() }
        ).collect_vec();

        let s = diag.iter().filter(|d| !d.is_unit()).count();

        let a2 = a * pinv.submat_cols(k - s .. k);
        let t2 = (&p * t).submat_rows(k - s .. k);

        assert!((&t2 * &a2).is_id());

        let summands = (0..s).map(|j| {
            let gen = Lc::from_coords(&basis, &a2.col_vec(j));
            let div = diag[k - s + j].clone();
            Summand::new(gen, div)
        }).collect();

        let res = Self::new_raw(summands, basis, t2);

        debug!("decomposed: {}", res.math_symbol());

        res
    }

    /// The abstract module `R^rank ⊕ R/(tors_0) ⊕ ...`, with the
    /// `i`-th summand generated by `f(i)`. Torsion summands come first.
    pub fn generate<F>(rank: usize, tors: Vec<R>, f: F) -> Self
    where F: Fn(usize) -> X {
        let t = tors.len();
        let n = t + rank;
        let basis = (0..n).map(f).collect_vec();

        let summands = basis.iter().enumerate().map(|(i, x)| {
            let div = if i < t { tors[i].clone() } else { R::zero() };
            Summand::new(Lc::from(x.clone()), div)
        }).collect();

        Self::new_raw(summands, basis, Mat::id(n))
    }

    pub fn summands(&self) -> &[Summand<X, R>] {
        &self.summands
    }

    pub fn summand(&self, i: usize) -> &Summand<X, R> {
        assert!(i < self.summands.len(), "summand index {i} out of range.");
        &self.summands[i]
    }

    pub fn basis(&self) -> &[X] {
        &self.basis
    }

    pub fn trans(&self) -> &Mat<R> {
        &self.trans
    }

    pub fn gens(&self) -> impl Iterator<Item = &Lc<X, R>> {
        self.summands.iter().map(|s| s.gen())
    }

    pub fn gen(&self, i: usize) -> &Lc<X, R> {
        self.summand(i).gen()
    }

    pub fn free_part(&self) -> Self {
        let indices = (0..self.summands.len()).filter(|&i| self.summands[i].is_free()).collect_vec();
        self.sub_summands(&indices)
    }

    pub fn tors_part(&self) -> Self {
        let indices = (0..self.summands.len()).filter(|&i| !self.summands[i].is_free()).collect_vec();
        self.sub_summands(&indices)
    }

    pub fn sub_summands(&self, indices: &[usize]) -> Self {
        let summands = indices.iter().map(|&i|
            self.summand(i).clone()
        ).collect();
        let trans = self.trans.select_rows(indices);

        Self::new_raw(summands, self.basis.clone(), trans)
    }

    /// Coordinates of `z` over the summands. Torsion coordinates
    /// are reduced to canonical residues.
    pub fn factorize(&self, z: &Lc<X, R>) -> Vec<R> {
        let v = z.factorize(&self.basis);
        let w = self.trans.apply(&v);

        w.into_iter().zip(self.summands.iter()).map(|(r, s)|
            if s.is_free() {
                r
            } else {
                r.rem_normal(s.divisor())
            }
        ).collect()
    }

    pub fn elem_is_zero(&self, z: &Lc<X, R>) -> bool {
        self.factorize(z).iter().all(|r| r.is_zero())
    }

    pub fn elems_are_equal(&self, z: &Lc<X, R>, w: &Lc<X, R>) -> bool {
        self.elem_is_zero(&(z - w))
    }
}

impl<X, R> RModStr for SimpleRModStr<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    type R = R;

    fn rank(&self) -> usize {
        self.rank
    }

    fn tors(&self) -> &[R] {
        &self.tors
    }
}

impl<X, R> Default for SimpleRModStr<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<X, R> PartialEq for SimpleRModStr<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    fn eq(&self, other: &Self) -> bool {
        self.summands == other.summands
    }
}

impl<X, R> Eq for SimpleRModStr<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {}

impl<X, R> Display for SimpleRModStr<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.math_symbol().fmt(f)
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(bound(
    serialize = "X: serde::Serialize, R: serde::Serialize",
    deserialize = "X: serde::Deserialize<'de>, R: serde::Deserialize<'de>"
))]
struct SimpleRModStrData<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    summands: Vec<Summand<X, R>>,
    basis: Vec<X>,
    trans: Mat<R>
}

#[cfg(feature = "serde")]
impl<X, R> From<SimpleRModStrData<X, R>> for SimpleRModStr<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    fn from(data: SimpleRModStrData<X, R>) -> Self {
        Self::new_raw(data.summands, data.basis, data.trans)
    }
}

#[cfg(feature = "serde")]
impl<X, R> From<SimpleRModStr<X, R>> for SimpleRModStrData<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    fn from(value: SimpleRModStr<X, R>) -> Self {
        let SimpleRModStr { summands, basis, trans, .. } = value;
        Self { summands, basis, trans }
    }
}
