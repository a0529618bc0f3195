use std::cmp::{min, Reverse};
use log::{debug, trace};
use modstr::{EucRing, EucRingOps};
use crate::dense::*;

/// Smith normal form: `p * target * q` is diagonal with
/// normalized entries `d_0 | d_1 | ...`, zeros trailing.
pub fn snf<R>(target: &Mat<R>, flags: ElimFlags) -> ElimResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    let copy = target.clone();
    snf_in_place(copy, flags)
}

pub fn snf_in_place<R>(target: Mat<R>, flags: ElimFlags) -> ElimResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    debug!("start snf: {:?}, flags: {:?}.", target.shape(), flags);
    trace!("{}", target);

    let mut calc = ElimCalc::new(target, flags);

    calc.snf_process();

    debug!("snf done.");
    trace!("{}", calc.target);

    calc.result()
}

impl<R> ElimCalc<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    pub fn snf_process(&mut self) {
        if self.target.is_zero() {
            return
        }

        self.eliminate_all();
        self.diag_normalize();
    }

    fn eliminate_all(&mut self) {
        let (m, n) = self.target.shape();
        let mut i = 0;

        for j in 0..n {
            if i >= m { break }
            if self.eliminate_step(i, j) {
                i += 1;
            }
        }
    }

    fn eliminate_step(&mut self, i: usize, j: usize) -> bool {
        let Some(i_p) = self.select_pivot(i, j) else {
            return false
        };

        trace!("select-pivot: ({i_p}, {j})");

        if i_p > i {
            self.swap_rows(i, i_p);
        }

        if j > i {
            self.swap_cols(i, j);
        }

        let u = self.target[(i, i)].normalizing_unit();
        if !u.is_one() {
            self.mul_col(i, &u);
        }

        self.eliminate_at(i, i);

        true
    }

    // The row `i >= below_i` minimizing (euc_deg, row_nz)
    // among the non-zero entries of column `j`. Ties go to the
    // row with the larger index.
    pub(crate) fn select_pivot(&self, below_i: usize, j: usize) -> Option<usize> {
        (below_i..self.target.nrows())
            .filter( |&i| !self.target[(i, j)].is_zero() )
            .min_by_key( |&i| (self.target[(i, j)].euc_deg(), self.row_nz(i), Reverse(i)) )
    }

    fn eliminate_at(&mut self, i: usize, j: usize) {
        assert!(!self.target[(i, j)].is_zero());

        while self.row_nz(i) > 1 || self.col_nz(j) > 1 {
            let modified = self.eliminate_col(i, j)
                         | self.eliminate_row(i, j);
            if !modified {
                panic!("Detect endless loop");
            }
        }
    }

    fn eliminate_row(&mut self, i: usize, j: usize) -> bool {
        let mut modified = false;

        for j1 in 0..self.target.ncols() {
            if j == j1 || self.target[(i, j1)].is_zero() { continue }

            // d = sx + ty,
            // a = x/d,
            // b = y/d.

            // [x y][s -b] = [d 0]
            //      [t  a]

            let x = &self.target[(i, j )];
            let y = &self.target[(i, j1)];

            let (d, s, t) = Self::gcdx(x, y);
            let (a, b) = (x / &d, y / &d);

            self.right_elementary(
                [&s, &t, &-b, &a],
                j, j1
            );
            modified = true
        }

        modified
    }

    fn eliminate_col(&mut self, i: usize, j: usize) -> bool {
        let mut modified = false;

        for i1 in 0..self.target.nrows() {
            if i == i1 || self.target[(i1, j)].is_zero() { continue }

            // [ s t][x] < i  = [d]
            // [-b a][y] < i1   [0]

            let x = &self.target[(i , j)];
            let y = &self.target[(i1, j)];

            let (d, s, t) = Self::gcdx(x, y);
            let (a, b) = (x / &d, y / &d);

            self.left_elementary(
                [&s, &t, &-b, &a],
                i, i1
            );
            modified = true
        }

        modified
    }

    fn diag_normalize(&mut self) {
        debug_assert!(self.target.is_diag());

        let n = min(self.target.nrows(), self.target.ncols());
        let r = (0..n).find(|&i|
            self.target[(i, i)].is_zero()
        ).unwrap_or(n);

        if r == 0 {
            return
        }

        'outer: loop {
            for i in 0..r-1 {
                if !self.diag_normalize_step(i) {
                    continue 'outer
                }
            }
            break
        }

        for i in 0..r {
            let a = &self.target[(i, i)];
            let u = a.normalizing_unit();
            if !u.is_one() {
                self.mul_row(i, &u);
            }
        }
    }

    fn diag_normalize_step(&mut self, i: usize) -> bool {
        let x = &self.target[(i, i)];
        let y = &self.target[(i + 1, i + 1)];

        assert!(!x.is_zero());
        assert!(!y.is_zero());

        if x.divides(y) {
            return true
        }

        if y.divides(x) {
            self.swap_rows(i, i + 1);
            self.swap_cols(i, i + 1);
            return false
        }

        // sx + ty = d, a = x/d, b = y/d.
        //
        // [1   1 ][x   ][s  -b] = [d      ]
        // [-tb sa][   y][t   a]   [   xy/d]

        let (d, s, t) = Self::gcdx(x, y);
        let (a, b) = (x / &d, y / &d);
        let (tb, sa) = (&t * &b, &s * &a);

        self.left_elementary(
            [&R::one(), &R::one(), &-tb, &sa],
            i, i + 1
        );
        self.right_elementary(
            [&s, &t, &-b, &a],
            i, i + 1
        );

        false
    }
}
