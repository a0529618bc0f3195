use std::ops::{Add, Neg, Sub, Mul, Index, IndexMut, AddAssign, SubAssign, MulAssign, Range};
use nalgebra::{Scalar, DMatrix};
use delegate::delegate;
use derive_more::Display;
use auto_impl_ops::auto_ops;
use num_traits::{Zero, One};
use modstr::{Ring, RingOps};
use crate::MatTrait;

/// A dense matrix. `DMatrix` is used as storage only,
/// arithmetic is carried out over `R: Ring`.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "R: Scalar + serde::Serialize",
    deserialize = "R: Scalar + serde::Deserialize<'de>"
)))]
pub struct Mat<R>
where R: Scalar {
    inner: DMatrix<R>
}

impl<R> MatTrait for Mat<R>
where R: Scalar {
    fn shape(&self) -> (usize, usize) {
        (self.inner.nrows(), self.inner.ncols())
    }
}

impl<R> Mat<R>
where R: Scalar {
    pub fn inner(&self) -> &DMatrix<R> {
        &self.inner
    }

    pub fn into_inner(self) -> DMatrix<R> {
        self.inner
    }

    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> {
        DMatrix::from_row_iterator(shape.0, shape.1, data).into()
    }

    pub fn generate<F>(shape: (usize, usize), f: F) -> Self
    where F: FnMut(usize, usize) -> R {
        DMatrix::from_fn(shape.0, shape.1, f).into()
    }

    /// All entries as `(i, j, a)`, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        let m = self.nrows();
        self.inner.iter().enumerate().map(move |(k, a)|
            (k % m, k / m, a)
        )
    }

    pub fn row_vec(&self, i: usize) -> Vec<R> {
        self.inner.row(i).iter().cloned().collect()
    }

    pub fn col_vec(&self, j: usize) -> Vec<R> {
        self.inner.column(j).iter().cloned().collect()
    }

    pub fn transpose(&self) -> Self {
        self.inner.transpose().into()
    }

    pub fn submat(&self, rows: Range<usize>, cols: Range<usize>) -> Self {
        let (i0, i1) = (rows.start, rows.end);
        let (j0, j1) = (cols.start, cols.end);

        assert!(i0 <= i1 && i1 <= self.nrows(), "row range {i0}..{i1} out of bounds.");
        assert!(j0 <= j1 && j1 <= self.ncols(), "col range {j0}..{j1} out of bounds.");

        let slice = self.inner.view((i0, j0), (i1 - i0, j1 - j0));
        Self::from(slice.clone_owned())
    }

    pub fn submat_rows(&self, rows: Range<usize>) -> Self {
        let n = self.ncols();
        self.submat(rows, 0 .. n)
    }

    pub fn submat_cols(&self, cols: Range<usize>) -> Self {
        let m = self.nrows();
        self.submat(0 .. m, cols)
    }

    /// The rows at `indices`, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let n = self.ncols();
        Self::generate((indices.len(), n), |i, j| self[(indices[i], j)].clone())
    }

    pub fn select_cols(&self, indices: &[usize]) -> Self {
        let m = self.nrows();
        Self::generate((m, indices.len()), |i, j| self[(i, indices[j])].clone())
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.inner.swap_rows(i, j);
    }

    pub fn swap_cols(&mut self, i: usize, j: usize) {
        self.inner.swap_columns(i, j);
    }
}

impl<R> Mat<R>
where R: Scalar + Zero {
    pub fn zero(shape: (usize, usize)) -> Self {
        DMatrix::zeros(shape.0, shape.1).into()
    }

    pub fn is_zero(&self) -> bool {
        self.inner.iter().all(|a| a.is_zero())
    }

    pub fn diag<I>(shape: (usize, usize), entries: I) -> Self
    where I: IntoIterator<Item = R> {
        let mut mat = Self::zero(shape);
        for (i, a) in entries.into_iter().enumerate() {
            mat[(i, i)] = a;
        }
        mat
    }

    pub fn is_diag(&self) -> bool {
        self.iter().all(|(i, j, a)|
            i == j || a.is_zero()
        )
    }

    pub fn nz_iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        self.iter().filter(|(_, _, a)| !a.is_zero())
    }

    pub fn nz_col(&self, j: usize) -> impl Iterator<Item = (usize, &R)> {
        (0..self.nrows()).map(move |i| (i, &self[(i, j)])).filter(|(_, a)| !a.is_zero())
    }

    pub fn nz_row(&self, i: usize) -> impl Iterator<Item = (usize, &R)> {
        (0..self.ncols()).map(move |j| (j, &self[(i, j)])).filter(|(_, a)| !a.is_zero())
    }
}

impl<R> Mat<R>
where R: Scalar + Zero + One {
    pub fn id(size: usize) -> Self {
        DMatrix::identity(size, size).into()
    }

    pub fn is_id(&self) -> bool {
        self.is_square() && self.iter().all(|(i, j, a)|
            i == j && a.is_one() ||
            i != j && a.is_zero()
        )
    }
}

impl<R> Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    /// The product `self * v`.
    pub fn apply(&self, v: &[R]) -> Vec<R> {
        assert_eq!(self.ncols(), v.len(), "dimension mismatch.");

        let mut res = vec![R::zero(); self.nrows()];
        for (j, b) in v.iter().enumerate() {
            if b.is_zero() { continue }
            for (i, a) in self.nz_col(j) {
                res[i] += a * b;
            }
        }
        res
    }

    pub fn mul_row(&mut self, i: usize, r: &R) {
        for a in self.inner.row_mut(i).iter_mut() {
            *a *= r;
        }
    }

    pub fn mul_col(&mut self, j: usize, r: &R) {
        for a in self.inner.column_mut(j).iter_mut() {
            *a *= r;
        }
    }

    // row[j] += r * row[i]
    pub fn add_row_to(&mut self, i: usize, j: usize, r: &R) {
        assert_ne!(i, j);
        for k in 0..self.ncols() {
            if self[(i, k)].is_zero() { continue }
            let b = &self[(i, k)] * r;
            self[(j, k)] += b;
        }
    }

    // col[j] += r * col[i]
    pub fn add_col_to(&mut self, i: usize, j: usize, r: &R) {
        assert_ne!(i, j);
        for k in 0..self.nrows() {
            if self[(k, i)].is_zero() { continue }
            let b = &self[(k, i)] * r;
            self[(k, j)] += b;
        }
    }

    // Multiply [a, b; c, d] from left.
    pub fn left_elementary(&mut self, comps: [&R; 4], i: usize, j: usize) {
        let [a, b, c, d] = comps;

        for k in 0..self.ncols() {
            let (x, y) = (&self[(i, k)], &self[(j, k)]);
            if x.is_zero() && y.is_zero() { continue }

            let s = a * x + b * y;
            let t = c * x + d * y;

            self[(i, k)] = s;
            self[(j, k)] = t;
        }
    }

    // Multiply [a, c; b, d] from right.
    pub fn right_elementary(&mut self, comps: [&R; 4], i: usize, j: usize) {
        let [a, b, c, d] = comps;

        for k in 0..self.nrows() {
            let (x, y) = (&self[(k, i)], &self[(k, j)]);
            if x.is_zero() && y.is_zero() { continue }

            let s = x * a + y * b;
            let t = x * c + y * d;

            self[(k, i)] = s;
            self[(k, j)] = t;
        }
    }
}

impl<R> From<DMatrix<R>> for Mat<R>
where R: Scalar {
    fn from(inner: DMatrix<R>) -> Self {
        Self { inner }
    }
}

impl<R> Index<(usize, usize)> for Mat<R>
where R: Scalar {
    type Output = R;
    delegate! {
        to self.inner {
            fn index(&self, index: (usize, usize)) -> &R;
        }
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R>
where R: Scalar {
    delegate! {
        to self.inner {
            fn index_mut(&mut self, index: (usize, usize)) -> &mut R;
        }
    }
}

impl<R> Default for Mat<R>
where R: Scalar + Zero {
    fn default() -> Self {
        Self::zero((0, 0))
    }
}

impl<R> Neg for Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.inner.map(|a| -a).into()
    }
}

impl<R> Neg for &Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Mat<R>;
    fn neg(self) -> Self::Output {
        self.inner.map(|a| -a).into()
    }
}

#[auto_ops]
impl<R> AddAssign<&Mat<R>> for Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape(), "dimension mismatch.");
        for (a, b) in self.inner.iter_mut().zip(rhs.inner.iter()) {
            *a += b;
        }
    }
}

#[auto_ops]
impl<R> SubAssign<&Mat<R>> for Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn sub_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape(), "dimension mismatch.");
        for (a, b) in self.inner.iter_mut().zip(rhs.inner.iter()) {
            *a -= b;
        }
    }
}

#[auto_ops]
impl<'a, 'b, R> Mul<&'b Mat<R>> for &'a Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Mat<R>;
    fn mul(self, rhs: &'b Mat<R>) -> Self::Output {
        assert_eq!(self.ncols(), rhs.nrows(), "dimension mismatch.");

        let (l, m, n) = (self.nrows(), self.ncols(), rhs.ncols());
        let mut res = Mat::zero((l, n));

        for k in 0..m {
            for (j, b) in rhs.nz_row(k) {
                for (i, a) in self.nz_col(k) {
                    res[(i, j)] += a * b;
                }
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init() {
        let a = Mat::from_data((2, 3), [1,2,3,4,5,6]);

        assert_eq!(a.nrows(), 2);
        assert_eq!(a.ncols(), 3);
        assert_eq!(a.into_inner(), DMatrix::from_row_slice(2, 3, &[1,2,3,4,5,6]));
    }

    #[test]
    fn generate() {
        let a = Mat::generate((2, 3), |i, j| (10 * i + j) as i32);
        assert_eq!(a, Mat::from_data((2, 3), [0,1,2,10,11,12]));
    }

    #[test]
    fn eq() {
        let a = Mat::from_data((2, 3), [1,2,3,4,5,6]);
        let b = Mat::from_data((2, 3), [1,2,0,4,5,6]);
        let c = Mat::from_data((3, 2), [1,2,3,4,5,6]);

        assert_eq!(a, a);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn empty() {
        let a: Mat<i32> = Mat::zero((0, 3));
        assert_eq!(a.shape(), (0, 3));
        assert!(a.is_zero());
        assert_eq!(a.apply(&[1, 2, 3]), Vec::<i32>::new());

        let b: Mat<i32> = Mat::zero((3, 0));
        assert_eq!(b.apply(&[]), vec![0, 0, 0]);
        assert_eq!(&b * &a, Mat::zero((3, 3)));
        assert_eq!(&a * &b, Mat::zero((0, 0)));
    }

    #[test]
    fn square() {
        let a: Mat<i32> = Mat::zero((3, 3));
        assert!(a.is_square());

        let a: Mat<i32> = Mat::zero((3, 2));
        assert!(!a.is_square());
    }

    #[test]
    fn zero() {
        let a: Mat<i32> = Mat::zero((3, 2));
        assert!(a.is_zero());

        let a = Mat::from_data((2, 3), [1,2,3,4,5,6]);
        assert!(!a.is_zero());
    }

    #[test]
    fn id() {
        let a: Mat<i32> = Mat::id(3);
        assert!(a.is_id());

        let a = Mat::from_data((2, 2), [1,2,3,4]);
        assert!(!a.is_id());

        let a = Mat::from_data((2, 3), [1,0,0,0,1,0]);
        assert!(!a.is_id());
    }

    #[test]
    fn diag() {
        let a = Mat::diag((2, 3), [2, 3]);
        assert_eq!(a, Mat::from_data((2, 3), [2,0,0,0,3,0]));
        assert!(a.is_diag());
        assert!(!Mat::from_data((2, 2), [1,1,0,1]).is_diag());
    }

    #[test]
    fn transpose() {
        let a = Mat::from_data((2, 3), [1,2,3,4,5,6]);
        assert_eq!(a.transpose(), Mat::from_data((3, 2), [1,4,2,5,3,6]));
    }

    #[test]
    fn nz_iter() {
        let a = Mat::from_data((2, 3), [1,0,3,0,5,0]);
        let nz = a.nz_iter().map(|(i, j, a)| (i, j, *a)).collect::<Vec<_>>();
        assert_eq!(nz, vec![(0, 0, 1), (1, 1, 5), (0, 2, 3)]);

        let col = a.nz_col(2).map(|(i, a)| (i, *a)).collect::<Vec<_>>();
        assert_eq!(col, vec![(0, 3)]);

        let row = a.nz_row(1).map(|(j, a)| (j, *a)).collect::<Vec<_>>();
        assert_eq!(row, vec![(1, 5)]);
    }

    #[test]
    fn apply() {
        let a = Mat::from_data((2, 3), [1,2,3,4,5,6]);
        assert_eq!(a.apply(&[1, 0, -1]), vec![-2, -2]);
    }

    #[test]
    fn swap_rows() {
        let mut a = Mat::from_data((3, 4), 1..=12);
        a.swap_rows(0, 1);
        assert_eq!(a, Mat::from_data((3, 4), [5,6,7,8,1,2,3,4,9,10,11,12]));
    }

    #[test]
    fn swap_cols() {
        let mut a = Mat::from_data((3, 4), 1..=12);
        a.swap_cols(0, 1);
        assert_eq!(a, Mat::from_data((3, 4), [2,1,3,4,6,5,7,8,10,9,11,12]));
    }

    #[test]
    fn mul_row() {
        let mut a = Mat::from_data((3, 3), 1..=9);
        a.mul_row(1, &10);
        assert_eq!(a, Mat::from_data((3, 3), [1,2,3,40,50,60,7,8,9]));
    }

    #[test]
    fn mul_col() {
        let mut a = Mat::from_data((3, 3), 1..=9);
        a.mul_col(1, &10);
        assert_eq!(a, Mat::from_data((3, 3), [1,20,3,4,50,6,7,80,9]));
    }

    #[test]
    fn add_row_to() {
        let mut a = Mat::from_data((3, 3), 1..=9);
        a.add_row_to(0, 1, &10);
        assert_eq!(a, Mat::from_data((3, 3), [1,2,3,14,25,36,7,8,9]));
    }

    #[test]
    fn add_col_to() {
        let mut a = Mat::from_data((3, 3), 1..=9);
        a.add_col_to(0, 1, &10);
        assert_eq!(a, Mat::from_data((3, 3), [1,12,3,4,45,6,7,78,9]));
    }

    #[test]
    fn left_elementary() {
        let mut a = Mat::from_data((3, 3), 1..=9);
        a.left_elementary([&3, &2, &4, &3], 0, 1);
        assert_eq!(a, Mat::from_data((3, 3), [11,16,21,16,23,30,7,8,9]));
    }

    #[test]
    fn right_elementary() {
        let mut a = Mat::from_data((3, 3), 1..=9);
        a.right_elementary([&3, &2, &4, &3], 0, 1);
        assert_eq!(a, Mat::from_data((3, 3), [7,10,3,22,31,6,37,52,9]));
    }

    #[test]
    fn add() {
        let a = Mat::from_data((3, 2), [1,2,3,4,5,6]);
        let b = Mat::from_data((3, 2), [8,2,4,0,2,1]);
        let c = a + b;
        assert_eq!(c, Mat::from_data((3, 2), [9,4,7,4,7,7]));
    }

    #[test]
    fn sub() {
        let a = Mat::from_data((3, 2), [1,2,3,4,5,6]);
        let b = Mat::from_data((3, 2), [8,2,4,0,2,1]);
        let c = a - b;
        assert_eq!(c, Mat::from_data((3, 2), [-7,0,-1,4,3,5]));
    }

    #[test]
    #[should_panic]
    fn add_mismatch() {
        let a = Mat::from_data((3, 2), [1,2,3,4,5,6]);
        let b = Mat::from_data((2, 3), [1,2,3,4,5,6]);
        let _ = a + b;
    }

    #[test]
    fn neg() {
        let a = Mat::from_data((3, 2), [1,2,3,4,5,6]);
        assert_eq!(-a, Mat::from_data((3, 2), [-1,-2,-3,-4,-5,-6]));
    }

    #[test]
    fn mul() {
        let a = Mat::from_data((2, 3), [1,2,3,4,5,6]);
        let b = Mat::from_data((3, 2), [1,2,1,-1,0,2]);
        let c = a * b;
        assert_eq!(c, Mat::from_data((2, 2), [3,6,9,15]));
    }

    #[test]
    #[should_panic]
    fn mul_mismatch() {
        let a = Mat::from_data((2, 3), [1,2,3,4,5,6]);
        let _ = &a * &a;
    }

    #[test]
    fn submat() {
        let a = Mat::from_data((3, 4), [
            1, 2, 3, 7,
            4, 5, 6, 8,
            9,10,11,12
        ]);
        let b = a.submat(1..3, 2..4);
        assert_eq!(b, Mat::from_data((2, 2), [
             6, 8,
            11,12
        ]));
        assert_eq!(a.submat_rows(2..3), Mat::from_data((1, 4), [9,10,11,12]));
        assert_eq!(a.submat_cols(3..4), Mat::from_data((3, 1), [7,8,12]));
        assert_eq!(a.submat_rows(1..1).shape(), (0, 4));
    }

    #[test]
    fn select() {
        let a = Mat::from_data((3, 3), 1..=9);
        assert_eq!(a.select_rows(&[2, 0]), Mat::from_data((2, 3), [7,8,9,1,2,3]));
        assert_eq!(a.select_cols(&[1]), Mat::from_data((3, 1), [2,5,8]));
        assert_eq!(a.row_vec(1), vec![4,5,6]);
        assert_eq!(a.col_vec(1), vec![2,5,8]);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() {
        let a = Mat::from_data((2, 3), [1,2,3,4,5,6]);
        let ser = serde_json::to_string(&a).unwrap();
        let des: Mat<i32> = serde_json::from_str(&ser).unwrap();
        assert_eq!(des, a);
    }
}
