use log::{debug, trace};
use modstr::{EucRing, EucRingOps};
use crate::dense::*;

/// Row-echelon form `p * target`, by row operations only.
/// `flags` selects `[p, pinv]`.
pub fn row_echelon<R>(target: &Mat<R>, flags: [bool; 2]) -> ElimResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    echelon(target, flags, false)
}

/// Row-echelon form with normalized pivots and the entries
/// above each pivot reduced modulo it.
pub fn row_hermite<R>(target: &Mat<R>, flags: [bool; 2]) -> ElimResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    echelon(target, flags, true)
}

fn echelon<R>(target: &Mat<R>, flags: [bool; 2], hermite: bool) -> ElimResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    let name = if hermite { "row-hermite" } else { "row-echelon" };

    debug!("start {name}: {:?}, flags: {:?}.", target.shape(), flags);
    trace!("{}", target);

    let [f0, f1] = flags;
    let mut calc = ElimCalc::new(target.clone(), [f0, f1, false, false]);

    let pivots = calc.echelon_process(hermite);

    debug!("{name} done, pivots: {:?}.", pivots);
    trace!("{}", calc.target);

    calc.result()
}

impl<R> ElimCalc<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    /// Returns the pivot positions, one per non-zero row of the result.
    pub fn echelon_process(&mut self, hermite: bool) -> Vec<(usize, usize)> {
        let (m, n) = self.target.shape();
        let mut pivots = vec![];
        let mut i = 0;

        for j in 0..n {
            if i >= m { break }

            let Some(i_p) = self.select_pivot(i, j) else {
                continue
            };

            if i_p > i {
                self.swap_rows(i, i_p);
            }

            self.reduce_below(i, j);

            if hermite {
                self.reduce_above(i, j);
            }

            pivots.push((i, j));
            i += 1;
        }

        pivots
    }

    // Clears column `j` below row `i` by Euclidean division,
    // re-pivoting whenever a remainder survives.
    fn reduce_below(&mut self, i: usize, j: usize) {
        let m = self.target.nrows();

        loop {
            for k in i + 1 .. m {
                if self.target[(k, j)].is_zero() { continue }

                let q = &self.target[(k, j)] / &self.target[(i, j)];
                if !q.is_zero() {
                    self.add_row_to(i, k, &-q);
                }
            }

            match self.select_pivot(i + 1, j) {
                None => break,
                Some(k) => {
                    // every remainder has smaller degree than the pivot.
                    debug_assert!(
                        self.target[(k, j)].euc_deg() < self.target[(i, j)].euc_deg()
                    );
                    self.swap_rows(i, k);
                }
            }
        }
    }

    fn reduce_above(&mut self, i: usize, j: usize) {
        let u = self.target[(i, j)].normalizing_unit();
        if !u.is_one() {
            self.mul_row(i, &u);
        }

        for k in 0..i {
            let e = &self.target[(k, j)];
            if e.is_zero() { continue }

            let piv = &self.target[(i, j)];
            let r = e.rem_normal(piv);
            let q = &(e - &r) / piv;

            if !q.is_zero() {
                self.add_row_to(i, k, &-q);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use modstr::{Ring, GaussInt, Ratio};

    fn assert_echelon<R>(a: &Mat<R>, res: &ElimResult<R>)
    where R: EucRing, for<'a> &'a R: EucRingOps<R> {
        let p = res.p().unwrap();
        let pinv = res.pinv().unwrap();
        let h = res.result();

        assert_eq!(&(p * a), h);
        assert_eq!(&(pinv * h), a);
        assert!((p * pinv).is_id());
        assert!(res.q().is_none());

        // leading entries strictly move right.
        let mut last: Option<usize> = None;
        for i in 0..h.nrows() {
            match h.nz_row(i).next() {
                Some((j, _)) => {
                    assert!(last.map(|l| l < j).unwrap_or(true));
                    for k in i + 1 .. h.nrows() {
                        assert!(h[(k, j)].is_zero());
                    }
                    last = Some(j);
                },
                None => last = Some(usize::MAX)
            }
        }
    }

    fn leading<R>(h: &Mat<R>) -> Vec<(usize, usize)>
    where R: EucRing, for<'a> &'a R: EucRingOps<R> {
        (0..h.nrows()).filter_map(|i|
            h.nz_row(i).next().map(|(j, _)| (i, j))
        ).collect()
    }

    #[test]
    fn echelon1() {
        let a = Mat::from_data((3, 3), [1,2,3,4,5,6,7,8,9]);
        let res = row_echelon(&a, [true; 2]);

        assert_echelon(&a, &res);
        assert_eq!(res.rank(), 2);
        assert!(res.result().nz_row(2).next().is_none());
    }

    #[test]
    fn echelon_euclid() {
        let a = Mat::<i32>::from_data((2, 2), [4,1,6,0]);
        let res = row_echelon(&a, [true; 2]);

        assert_echelon(&a, &res);
        assert_eq!(res.result()[(1, 0)], 0);
        assert_eq!(res.result()[(0, 0)].abs(), 2);
    }

    #[test]
    fn echelon_skip_zero_col() {
        let a = Mat::from_data((3, 4), [
            0, 2, 1, 0,
            0, 4, 3, 1,
            0, 0, 0, 5,
        ]);
        let res = row_echelon(&a, [true; 2]);

        assert_echelon(&a, &res);
        assert_eq!(leading(res.result()), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn echelon_no_trans() {
        let a = Mat::from_data((2, 2), [1,2,3,4]);
        let res = row_echelon(&a, [false; 2]);
        assert!(res.p().is_none());
        assert!(res.pinv().is_none());
        assert!(res.q().is_none());
        assert!(res.qinv().is_none());
    }

    #[test]
    fn echelon_zero() {
        let a: Mat<i32> = Mat::zero((2, 3));
        let res = row_echelon(&a, [true; 2]);
        assert!(res.result().is_zero());
        assert!(res.p().unwrap().is_id());
        assert_eq!(res.rank(), 0);
    }

    #[test]
    fn echelon_empty() {
        let a: Mat<i32> = Mat::zero((0, 2));
        let res = row_echelon(&a, [true; 2]);
        assert_eq!(res.result().shape(), (0, 2));
        assert_eq!(res.p().unwrap().shape(), (0, 0));
    }

    #[test]
    fn hermite1() {
        let a = Mat::from_data((3, 2), [
            1, 0,
            1, 0,
            0, 1
        ]);
        let res = row_hermite(&a, [true; 2]);

        assert_echelon(&a, &res);
        assert_eq!(res.result(), &Mat::from_data((3, 2), [1,0,0,1,0,0]));
    }

    #[test]
    fn hermite_reduced() {
        let a = Mat::from_data((3, 3), [
            2, 3, 6,
            0, 4, 8,
            0, 0, 3,
        ]);
        let res = row_hermite(&a, [true; 2]);
        let h = res.result();

        assert_echelon(&a, &res);

        for (i, j) in leading(h) {
            let piv = &h[(i, j)];
            assert!(piv > &0);
            for k in 0..i {
                let e = &h[(k, j)];
                assert!(&0 <= e && e < piv, "{e} not reduced mod {piv}");
            }
        }
    }

    #[test]
    fn hermite_neg_pivot() {
        let a = Mat::from_data((2, 2), [-3, 5, 0, -2]);
        let res = row_hermite(&a, [true; 2]);

        assert_echelon(&a, &res);
        assert_eq!(res.result(), &Mat::from_data((2, 2), [3, 1, 0, 2]));
    }

    #[test]
    fn hermite_unimodular() {
        let a = Mat::from_data((3, 3), [
            2, 3, 1,
            1, 2, 1,
            1, 1, 1,
        ]);
        let res = row_hermite(&a, [true; 2]);

        assert_echelon(&a, &res);
        assert!(res.result().is_id());
    }

    #[test]
    fn hermite_rational() {
        type Q = Ratio<i64>;
        let a: Mat<Q> = Mat::from_data((2, 3), [
            2, 4, 1,
            1, 2, 3
        ].map(Q::from));
        let res = row_hermite(&a, [true; 2]);

        assert_echelon(&a, &res);
        assert_eq!(res.result(), &Mat::from_data((2, 3), [
            Q::from(1), Q::from(2), Q::from(0),
            Q::from(0), Q::from(0), Q::from(1),
        ]));
    }

    #[test]
    fn hermite_gauss_int() {
        type A = GaussInt<i64>;
        let e = |a, b| A::new(a, b);

        let a: Mat<A> = Mat::from_data((3, 2), [
            e(1, 1), e(3, 0),
            e(2, 0), e(0, 1),
            e(0, 0), e(1, -2),
        ]);
        let res = row_hermite(&a, [true; 2]);
        let h = res.result();

        assert_echelon(&a, &res);

        for (i, j) in leading(h) {
            let piv = &h[(i, j)];
            assert!(piv.normalizing_unit().is_one());
            for k in 0..i {
                let e = &h[(k, j)];
                assert_eq!(&e.rem_normal(piv), e);
            }
        }
    }

    #[test]
    fn echelon_random() {
        use rand::{Rng, SeedableRng};
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..20 {
            let m = rng.gen_range(1..=6);
            let n = rng.gen_range(1..=6);
            let a: Mat<i64> = Mat::generate((m, n), |_, _| {
                if rng.gen_bool(0.4) { 0 } else { rng.gen_range(-9..=9) }
            });
            let res = row_hermite(&a, [true; 2]);
            assert_echelon(&a, &res);
        }
    }
}
