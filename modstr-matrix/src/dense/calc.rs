use log::trace;
use modstr::{EucRing, EucRingOps};
use crate::dense::*;

/// Which of `[p, pinv, q, qinv]` to track.
pub type ElimFlags = [bool; 4];

/// The outcome of a reduction: `p * target * q == result`,
/// with `pinv`, `qinv` the inverses of `p`, `q`.
#[derive(Debug, Clone)]
pub struct ElimResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    result: Mat<R>,
    p:    Option<Mat<R>>,
    pinv: Option<Mat<R>>,
    q:    Option<Mat<R>>,
    qinv: Option<Mat<R>>
}

impl<R> ElimResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    pub fn result(&self) -> &Mat<R> {
        &self.result
    }

    pub fn p(&self) -> Option<&Mat<R>> {
        self.p.as_ref()
    }

    pub fn pinv(&self) -> Option<&Mat<R>> {
        self.pinv.as_ref()
    }

    pub fn q(&self) -> Option<&Mat<R>> {
        self.q.as_ref()
    }

    pub fn qinv(&self) -> Option<&Mat<R>> {
        self.qinv.as_ref()
    }

    pub fn trans(&self) -> [Option<&Mat<R>>; 4] {
        [self.p.as_ref(),
         self.pinv.as_ref(),
         self.q.as_ref(),
         self.qinv.as_ref()]
    }

    pub fn destruct(self) -> (Mat<R>, [Option<Mat<R>>; 4]) {
        (self.result, [self.p, self.pinv, self.q, self.qinv])
    }

    /// The number of non-zero rows of the result.
    pub fn rank(&self) -> usize {
        let m = self.result.nrows();
        (0..m).filter(|&i| self.result.nz_row(i).next().is_some()).count()
    }

    /// Non-zero diagonal entries of the result.
    pub fn factors(&self) -> Vec<&R> {
        self.diag().into_iter().filter(|a| !a.is_zero()).collect()
    }

    pub fn diag(&self) -> Vec<&R> {
        let n = std::cmp::min(self.result.nrows(), self.result.ncols());
        (0..n).map(|i| &self.result[(i, i)]).collect()
    }
}

/// A matrix under reduction together with the transforms
/// accumulated so far. Every elementary operation on `target`
/// is mirrored on the tracked transforms.
#[derive(Debug)]
pub struct ElimCalc<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    pub(crate) target: Mat<R>,
    p:    Option<Mat<R>>,
    pinv: Option<Mat<R>>,
    q:    Option<Mat<R>>,
    qinv: Option<Mat<R>>
}

impl<R> ElimCalc<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    pub fn new(target: Mat<R>, flags: ElimFlags) -> Self {
        let id_opt = |size, flag| {
            if flag { Some(Mat::id(size)) } else { None }
        };

        let (m, n) = target.shape();
        let p    = id_opt(m, flags[0]);
        let pinv = id_opt(m, flags[1]);
        let q    = id_opt(n, flags[2]);
        let qinv = id_opt(n, flags[3]);

        ElimCalc{ target, p, pinv, q, qinv }
    }

    pub fn target(&self) -> &Mat<R> {
        &self.target
    }

    pub fn result(self) -> ElimResult<R> {
        ElimResult {
            result: self.target,
            p: self.p,
            pinv: self.pinv,
            q: self.q,
            qinv: self.qinv
        }
    }

    pub(crate) fn row_nz(&self, i: usize) -> usize {
        self.target.nz_row(i).count()
    }

    pub(crate) fn col_nz(&self, j: usize) -> usize {
        self.target.nz_col(j).count()
    }

    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        self.target.swap_rows(i, j);
        if let Some(p) = self.p.as_mut() {
            p.swap_rows(i, j)
        }
        if let Some(pinv) = self.pinv.as_mut() {
            pinv.swap_cols(i, j)
        }

        trace!("swap-rows: ({i}, {j})\n{}", self.target);
    }

    pub(crate) fn swap_cols(&mut self, i: usize, j: usize) {
        self.target.swap_cols(i, j);
        if let Some(q) = self.q.as_mut() {
            q.swap_cols(i, j)
        }
        if let Some(qinv) = self.qinv.as_mut() {
            qinv.swap_rows(i, j)
        }

        trace!("swap-cols: ({i}, {j})\n{}", self.target);
    }

    pub(crate) fn mul_row(&mut self, i: usize, u: &R) {
        let Some(uinv) = u.inv() else {
            panic!("{u} is not invertible.")
        };

        self.target.mul_row(i, u);
        if let Some(p) = self.p.as_mut() {
            p.mul_row(i, u)
        }
        if let Some(pinv) = self.pinv.as_mut() {
            pinv.mul_col(i, &uinv)
        }

        trace!("mul-row: {i} by {u}\n{}", self.target);
    }

    pub(crate) fn mul_col(&mut self, i: usize, u: &R) {
        let Some(uinv) = u.inv() else {
            panic!("{u} is not invertible.")
        };

        self.target.mul_col(i, u);
        if let Some(q) = self.q.as_mut() {
            q.mul_col(i, u)
        }
        if let Some(qinv) = self.qinv.as_mut() {
            qinv.mul_row(i, &uinv)
        }

        trace!("mul-col: {i} by {u}\n{}", self.target);
    }

    // row[j] += r * row[i]
    pub(crate) fn add_row_to(&mut self, i: usize, j: usize, r: &R) {
        self.target.add_row_to(i, j, r);
        if let Some(p) = self.p.as_mut() {
            p.add_row_to(i, j, r)
        }
        if let Some(pinv) = self.pinv.as_mut() {
            pinv.add_col_to(j, i, &-r)
        }

        trace!("add-row: {i} to {j} by {r}\n{}", self.target);
    }

    // Multiply [a, b; c, d] from left, assuming det = 1.
    pub(crate) fn left_elementary(&mut self, comps: [&R; 4], i: usize, j: usize) {
        let [a, b, c, d] = comps;
        debug_assert!((a * d - b * c).is_one());

        self.target.left_elementary(comps, i, j);
        if let Some(p) = self.p.as_mut() {
            p.left_elementary(comps, i, j)
        }
        if let Some(pinv) = self.pinv.as_mut() {
            let inv_t = [d, &-c, &-b, a];
            pinv.right_elementary(inv_t, i, j)
        }

        trace!("left-elem: [{a}, {b}; {c}, {d}] for rows ({i}, {j}).\n{}", self.target);
    }

    // Multiply [a, c; b, d] from right, assuming det = 1.
    pub(crate) fn right_elementary(&mut self, comps: [&R; 4], i: usize, j: usize) {
        let [a, b, c, d] = comps;
        debug_assert!((a * d - b * c).is_one());

        self.target.right_elementary(comps, i, j);
        if let Some(q) = self.q.as_mut() {
            q.right_elementary(comps, i, j)
        }
        if let Some(qinv) = self.qinv.as_mut() {
            let inv_t = [d, &-c, &-b, a];
            qinv.left_elementary(inv_t, i, j)
        }

        trace!("right-elem: [{a}, {b}; {c}, {d}] for cols ({i}, {j}).\n{}", self.target);
    }

    // d = sx + ty with s = (x/d)⁻¹, t = 0 whenever x | y.
    pub(crate) fn gcdx(x: &R, y: &R) -> (R, R, R) {
        let (d, s, t) = EucRing::gcdx(x, y);

        let a = x / &d;
        match a.inv() {
            Some(u) => (d, u, R::zero()),
            None    => (d, s, t)
        }
    }
}
