use log::info;
use modstr::{EucRing, EucRingOps};
use modstr::lc::Gen;
use modstr_matrix::dense::{Mat, MatTrait, snf};

use crate::SimpleRModStr;

#[cfg(feature = "multithread")]
use rayon::prelude::{IntoParallelIterator, IndexedParallelIterator, ParallelIterator};

/// `Ker(d_out) / Im(d_in)` on the free module over `basis`, where
///
///   C_{+1} --d_in--> C --d_out--> C_{-1}.
///
/// A missing map is regarded as zero.
pub fn homology<X, R>(basis: Vec<X>, d_in: Option<&Mat<R>>, d_out: Option<&Mat<R>>) -> SimpleRModStr<X, R>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    let n = basis.len();

    if let Some(d) = d_in {
        assert_eq!(d.nrows(), n, "d_in must have one row per basis element.");
    }
    if let Some(d) = d_out {
        assert_eq!(d.ncols(), n, "d_out must have one column per basis element.");
    }
    if let (Some(d0), Some(d1)) = (d_in, d_out) {
        assert!((d1 * d0).is_zero(), "d_out * d_in must vanish.");
    }

    let (a, t) = match d_out {
        Some(d) => kernel(d),
        None    => (Mat::id(n), Mat::id(n))
    };

    let rel = d_in.map(|d| &t * d);

    SimpleRModStr::from_matrices(basis, &a, &t, rel.as_ref())
}

// A basis `a` of Ker(d) as columns, with a left inverse `t`
// that is exact on Ker(d).
fn kernel<R>(d: &Mat<R>) -> (Mat<R>, Mat<R>)
where R: EucRing, for<'x> &'x R: EucRingOps<R> {
    let n = d.ncols();
    let res = snf(d, [false, false, true, true]);
    let r = res.rank();

    let (_, [_, _, Some(q), Some(qinv)]) = res.destruct() else {
        unreachable!()
    };

    (q.submat_cols(r..n), qinv.submat_rows(r..n))
}

/// Homology of the chain complex
///
///   C_0 <--d_0-- C_1 <--d_1-- ... <--d_{N-1}-- C_N,
///
/// with `bases[i]` spanning `C_i` and `ds[i]: C_{i+1} → C_i`.
/// Degrees are computed in parallel when multithreading is enabled.
pub fn homology_seq<X, R>(bases: Vec<Vec<X>>, ds: &[Mat<R>]) -> Vec<SimpleRModStr<X, R>>
where X: Gen, R: EucRing, for<'x> &'x R: EucRingOps<R> {
    assert!(
        bases.is_empty() && ds.is_empty() || ds.len() + 1 == bases.len(),
        "expected one map between each pair of adjacent degrees."
    );

    info!("compute homology: {} degrees.", bases.len());

    let homology_at = |i: usize, basis: Vec<X>| {
        let d_out = if i > 0 { ds.get(i - 1) } else { None };
        let d_in = ds.get(i);
        homology(basis, d_in, d_out)
    };

    cfg_if::cfg_if! {
        if #[cfg(feature = "multithread")] {
            if crate::config::is_multithread_enabled() {
                return bases.into_par_iter()
                    .enumerate()
                    .map(|(i, basis)| homology_at(i, basis))
                    .collect()
            }
        }
    }

    bases.into_iter()
        .enumerate()
        .map(|(i, basis)| homology_at(i, basis))
        .collect()
}
