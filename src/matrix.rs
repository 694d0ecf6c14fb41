//! Dense feature matrices
//!
//! Feature-learning code hands over activations in several shapes: nested
//! row vectors, flat buffers with an explicit shape, or ndarray arrays. All of
//! them are normalized into a [`FeatureMatrix`], an `M x N` array of `f64`
//! where each row is one instance and each column one hidden unit.

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::{Error, Result};

/// Canonical dense 2-D container of feature activations.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Array2<f64>,
}

impl FeatureMatrix {
    /// A matrix with no instances and no units.
    pub fn empty() -> Self {
        Self {
            data: Array2::zeros((0, 0)),
        }
    }

    /// Build a matrix from a sequence of rows.
    ///
    /// Every row must have the same length as the first one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedMatrix`] naming the first row whose length differs.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.as_ref().len());

        let mut flat = Vec::with_capacity(n_rows * n_cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(Error::RaggedMatrix {
                    row: idx,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            flat.extend(row.iter().map(|&value| value.into()));
        }

        Self::from_shape_vec(flat, n_rows, n_cols)
    }

    /// Build a matrix from a row-major buffer and an explicit shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBuffer`] if `data.len() != rows * cols`.
    pub fn from_buffer<T>(data: &[T], rows: usize, cols: usize) -> Result<Self>
    where
        T: Copy + Into<f64>,
    {
        let flat = data.iter().map(|&value| value.into()).collect();
        Self::from_shape_vec(flat, rows, cols)
    }

    fn from_shape_vec(flat: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        let len = flat.len();
        let fits = rows.checked_mul(cols).is_some_and(|total| total == len);
        if !fits {
            return Err(Error::InvalidBuffer { len, rows, cols });
        }
        let data = Array2::from_shape_vec((rows, cols), flat)
            .map_err(|_| Error::InvalidBuffer { len, rows, cols })?;
        Ok(Self { data })
    }

    /// Number of instances (M).
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of units (N) as stored.
    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    /// Number of units that take part in an export: zero when there are no instances.
    pub fn n_units(&self) -> usize {
        if self.is_empty() { 0 } else { self.n_cols() }
    }

    /// True when the matrix has no instances.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Iterate over instances.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = ArrayView1<'_, f64>> {
        self.data.outer_iter()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}

impl Default for FeatureMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Array2<f64>> for FeatureMatrix {
    fn from(data: Array2<f64>) -> Self {
        Self { data }
    }
}

/// Conversion into the canonical [`FeatureMatrix`].
///
/// Implemented for the input shapes the exporter accepts. Conversions that
/// cannot fail (ndarray inputs) still go through `Result` so callers handle
/// every shape the same way.
pub trait IntoFeatureMatrix {
    fn into_feature_matrix(self) -> Result<FeatureMatrix>;
}

impl IntoFeatureMatrix for FeatureMatrix {
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        Ok(self)
    }
}

impl IntoFeatureMatrix for &FeatureMatrix {
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        Ok(self.clone())
    }
}

impl IntoFeatureMatrix for Array2<f64> {
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        Ok(FeatureMatrix::from(self))
    }
}

impl IntoFeatureMatrix for &Array2<f64> {
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        Ok(FeatureMatrix::from(self.clone()))
    }
}

impl IntoFeatureMatrix for ArrayView2<'_, f64> {
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        Ok(FeatureMatrix::from(self.to_owned()))
    }
}

impl<T> IntoFeatureMatrix for Vec<Vec<T>>
where
    T: Copy + Into<f64>,
{
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        FeatureMatrix::from_rows(&self)
    }
}

impl<T> IntoFeatureMatrix for &[Vec<T>]
where
    T: Copy + Into<f64>,
{
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        FeatureMatrix::from_rows(self)
    }
}

impl<T> IntoFeatureMatrix for &Vec<Vec<T>>
where
    T: Copy + Into<f64>,
{
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        FeatureMatrix::from_rows(self)
    }
}

impl<T, const N: usize> IntoFeatureMatrix for &[[T; N]]
where
    T: Copy + Into<f64>,
{
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        FeatureMatrix::from_rows(self)
    }
}

impl<T, const N: usize> IntoFeatureMatrix for Vec<[T; N]>
where
    T: Copy + Into<f64>,
{
    fn into_feature_matrix(self) -> Result<FeatureMatrix> {
        FeatureMatrix::from_rows(&self)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_from_rows_integers() {
        let matrix = FeatureMatrix::from_rows(&[vec![0_i32, 1, 2], vec![3, 4, 5]]).unwrap();
        assert_eq!(matrix.n_rows(), 2);
        assert_eq!(matrix.n_cols(), 3);
        assert_eq!(matrix.view()[[1, 2]], 5.0);
    }

    #[test]
    fn test_from_rows_ragged_reports_row() {
        let err =
            FeatureMatrix::from_rows(&[vec![0.0, 1.0], vec![2.0], vec![3.0, 4.0]]).unwrap_err();
        match err {
            Error::RaggedMatrix { row, expected, got } => {
                assert_eq!((row, expected, got), (1, 2, 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let matrix = FeatureMatrix::from_rows(&rows).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.n_units(), 0);
    }

    #[test]
    fn test_from_buffer_shape_checked() {
        let data = [1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let matrix = FeatureMatrix::from_buffer(&data, 3, 2).unwrap();
        assert_eq!(matrix.view()[[2, 0]], 5.0);

        let err = FeatureMatrix::from_buffer(&data, 4, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidBuffer { len: 6, rows: 4, cols: 2 }));
    }

    #[test]
    fn test_zero_rows_have_no_units() {
        let data: [f64; 0] = [];
        let matrix = FeatureMatrix::from_buffer(&data, 0, 5).unwrap();
        assert_eq!(matrix.n_cols(), 5);
        assert_eq!(matrix.n_units(), 0);
    }

    #[test]
    fn test_ndarray_inputs() {
        let arr = array![[1.0, 2.0], [3.0, 4.0]];
        let from_view = arr.view().into_feature_matrix().unwrap();
        let from_ref = (&arr).into_feature_matrix().unwrap();
        let owned = arr.into_feature_matrix().unwrap();
        assert_eq!(from_view, owned);
        assert_eq!(from_ref, owned);
    }

    #[test]
    fn test_fixed_size_rows() {
        let rows = vec![[1_u8, 2, 3], [4, 5, 6]];
        let matrix = rows.into_feature_matrix().unwrap();
        let collected: Vec<Vec<f64>> = matrix.rows().map(|row| row.to_vec()).collect();
        assert_eq!(collected, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }
}
