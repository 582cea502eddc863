use std::ops::{Index, Mul};

use thiserror::Error;

use crate::common::equal;
use crate::Tuple;

type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("Attempted to calculate an inverse of a non-invertible matrix")]
    NonInvertible,
}

/// Square matrix of `f64`s, stored row-major.
/// Scenes only ever use 4x4 matrices; the 3x3 and 2x2 cases
/// show up as submatrices while computing cofactors.
#[derive(Clone, Debug)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Does not check whether the input data has a valid shape;
    /// rows are expected to all be as long as there are rows.
    pub fn new(input_data: &[&[f64]]) -> Self {
        let data = input_data
            .iter()
            .map(|row| row.to_vec())
            .collect::<Vec<_>>();
        Self { data }
    }

    pub fn identity() -> Self {
        Self::new(&[
            &[1.0, 0.0, 0.0, 0.0],
            &[0.0, 1.0, 0.0, 0.0],
            &[0.0, 0.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.data.len()
    }

    fn zeros(size: usize) -> Self {
        Self {
            data: vec![vec![0.0; size]; size],
        }
    }

    pub fn transpose(&self) -> Self {
        let mut transposed = Matrix::zeros(self.size());

        for (i, row) in self.data.iter().enumerate() {
            for (j, item) in row.iter().enumerate() {
                transposed.data[j][i] = *item;
            }
        }

        transposed
    }

    /// First-row cofactor expansion, bottoming out at the 2x2 case.
    /// The empty matrix has determinant 1, so 1x1 inverses work too.
    pub fn determinant(&self) -> f64 {
        match self.size() {
            0 => 1.0,
            1 => self[0][0],
            2 => {
                let a = self[0][0];
                let b = self[0][1];
                let c = self[1][0];
                let d = self[1][1];
                a * d - b * c
            }
            _ => self[0]
                .iter()
                .enumerate()
                .map(|(j, val)| val * self.cofactor(0, j))
                .sum(),
        }
    }

    pub fn submatrix(&self, row_index: usize, column_index: usize) -> Self {
        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != row_index)
            .map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != column_index)
                    .map(|(_, val)| *val)
                    .collect()
            })
            .collect();
        Self { data }
    }

    pub fn minor(&self, row_index: usize, column_index: usize) -> f64 {
        self.submatrix(row_index, column_index).determinant()
    }

    pub fn cofactor(&self, row_index: usize, column_index: usize) -> f64 {
        let minor = self.minor(row_index, column_index);
        // if row + column is odd, then we negate the minor
        // otherwise, we return it as is
        if (row_index + column_index) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Only an exactly-zero determinant counts as singular.
    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(MatrixError::NonInvertible);
        }

        let size = self.size();
        let mut inverse = Matrix::zeros(size);

        // writing [column][row] transposes the cofactor matrix on the fly
        for row in 0..size {
            for column in 0..size {
                inverse.data[column][row] = self.cofactor(row, column) / det;
            }
        }

        Ok(inverse)
    }
}

impl Index<usize> for Matrix {
    type Output = Vec<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(this_row, other_row)| {
                    this_row
                        .iter()
                        .zip(other_row)
                        .all(|(this_val, other_val)| equal(*this_val, *other_val))
                })
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, other: &Matrix) -> Matrix {
        let size = self.size();
        let mut result = Matrix::zeros(size);
        for row in 0..size {
            for col in 0..size {
                result.data[row][col] = (0..size).map(|k| self[row][k] * other[k][col]).sum();
            }
        }
        result
    }
}

impl Mul<Self> for Matrix {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl Mul<Tuple> for &Matrix {
    type Output = Tuple;

    /// Only defined for 4x4 matrices.
    fn mul(self, rhs: Tuple) -> Tuple {
        let row = |i: usize| {
            self[i][0] * rhs.x + self[i][1] * rhs.y + self[i][2] * rhs.z + self[i][3] * rhs.w
        };
        Tuple::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul<Tuple> for Matrix {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        &self * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_4x4_matrix() {
        let m = Matrix::new(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[5.5, 6.5, 7.5, 8.5],
            &[9.0, 10.0, 11.0, 12.0],
            &[13.5, 14.5, 15.5, 16.5],
        ]);

        assert_eq!(m.size(), 4);
        assert_eq!(m[0][0], 1.0);
        assert_eq!(m[0][3], 4.0);
        assert_eq!(m[1][0], 5.5);
        assert_eq!(m[1][2], 7.5);
        assert_eq!(m[2][2], 11.0);
        assert_eq!(m[3][0], 13.5);
        assert_eq!(m[3][2], 15.5);
    }

    #[test]
    fn build_2x2_and_3x3_matrices() {
        let m = Matrix::new(&[&[-3.0, 5.0], &[1.0, -2.0]]);
        assert_eq!(m[0][1], 5.0);
        assert_eq!(m[1][0], 1.0);

        let m = Matrix::new(&[&[-3.0, 5.0, 0.0], &[1.0, -2.0, 7.0], &[0.0, 1.0, 1.0]]);
        assert_eq!(m[1][1], -2.0);
        assert_eq!(m[2][2], 1.0);
    }

    #[test]
    fn matrix_equality() {
        let a = Matrix::new(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[5.0, 6.0, 7.0, 8.0],
            &[9.0, 8.0, 7.0, 6.0],
            &[5.0, 4.0, 3.0, 2.0],
        ]);
        let b = Matrix::new(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[5.0, 6.0, 7.0, 8.0],
            &[9.0, 8.0, 7.0, 6.000001],
            &[5.0, 4.0, 3.0, 2.0],
        ]);
        let c = Matrix::new(&[
            &[2.0, 3.0, 4.0, 5.0],
            &[6.0, 7.0, 8.0, 9.0],
            &[8.0, 7.0, 6.0, 5.0],
            &[4.0, 3.0, 2.0, 1.0],
        ]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn multiply_matrices() {
        let a = Matrix::new(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[5.0, 6.0, 7.0, 8.0],
            &[9.0, 8.0, 7.0, 6.0],
            &[5.0, 4.0, 3.0, 2.0],
        ]);

        let b = Matrix::new(&[
            &[-2.0, 1.0, 2.0, 3.0],
            &[3.0, 2.0, 1.0, -1.0],
            &[4.0, 3.0, 6.0, 5.0],
            &[1.0, 2.0, 7.0, 8.0],
        ]);
        let expected = Matrix::new(&[
            &[20.0, 22.0, 50.0, 48.0],
            &[44.0, 54.0, 114.0, 108.0],
            &[40.0, 58.0, 110.0, 102.0],
            &[16.0, 26.0, 46.0, 42.0],
        ]);
        assert_eq!(&a * &b, expected);
        assert_eq!(a * b, expected);
    }

    #[test]
    fn multiply_matrix_by_tuple() {
        let a = Matrix::new(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[2.0, 4.0, 4.0, 2.0],
            &[8.0, 6.0, 4.0, 1.0],
            &[0.0, 0.0, 0.0, 1.0],
        ]);
        let b = Tuple::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(&a * b, Tuple::new(18.0, 24.0, 33.0, 1.0));
    }

    #[test]
    fn multiply_by_identity_matrix() {
        let a = Matrix::new(&[
            &[0.0, 1.0, 2.0, 4.0],
            &[1.0, 2.0, 4.0, 8.0],
            &[2.0, 4.0, 8.0, 16.0],
            &[4.0, 8.0, 16.0, 32.0],
        ]);
        assert_eq!(&a * &Matrix::identity(), a);

        let t = Tuple::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Matrix::identity() * t, t);
    }

    #[test]
    fn transpose_matrix() {
        let a = Matrix::new(&[
            &[0.0, 9.0, 3.0, 0.0],
            &[9.0, 8.0, 0.0, 8.0],
            &[1.0, 8.0, 5.0, 3.0],
            &[0.0, 0.0, 5.0, 8.0],
        ]);
        let a_transpose = Matrix::new(&[
            &[0.0, 9.0, 1.0, 0.0],
            &[9.0, 8.0, 8.0, 0.0],
            &[3.0, 0.0, 5.0, 5.0],
            &[0.0, 8.0, 3.0, 8.0],
        ]);
        assert_eq!(a.transpose(), a_transpose);
        assert_eq!(Matrix::identity().transpose(), Matrix::identity());
    }

    #[test]
    fn determinant_2x2_matrix() {
        let a = Matrix::new(&[&[1.0, 5.0], &[-3.0, 2.0]]);
        assert_eq!(a.determinant(), 17.0);
    }

    #[test]
    fn determinant_and_inverse_of_tiny_matrices() {
        let a = Matrix::new(&[&[4.0]]);
        assert_eq!(a.determinant(), 4.0);
        assert_eq!(a.inverse().unwrap(), Matrix::new(&[&[0.25]]));
        assert!(!Matrix::new(&[&[0.0]]).is_invertible());
        assert_eq!(Matrix::new(&[]).determinant(), 1.0);
    }

    #[test]
    fn submatrices() {
        let a = Matrix::new(&[&[1.0, 5.0, 0.0], &[-3.0, 2.0, 7.0], &[0.0, 6.0, -3.0]]);
        assert_eq!(a.submatrix(0, 2), Matrix::new(&[&[-3.0, 2.0], &[0.0, 6.0]]));

        let a = Matrix::new(&[
            &[-6., 1., 1., 6.],
            &[-8., 5., 8., 6.],
            &[-1., 0., 8., 2.],
            &[-7., 1., -1., 1.],
        ]);
        let sub_a = Matrix::new(&[&[-6.0, 1.0, 6.0], &[-8.0, 8.0, 6.0], &[-7.0, -1.0, 1.0]]);
        assert_eq!(a.submatrix(2, 1), sub_a);
    }

    #[test]
    fn minor_and_cofactor_3x3_matrix() {
        let a = Matrix::new(&[&[3.0, 5.0, 0.0], &[2.0, -1.0, -7.0], &[6.0, -1.0, 5.0]]);
        assert_eq!(a.submatrix(1, 0).determinant(), 25.0);
        assert_eq!(a.minor(1, 0), 25.0);
        assert_eq!(a.minor(0, 0), -12.0);
        assert_eq!(a.cofactor(0, 0), -12.0);
        assert_eq!(a.cofactor(1, 0), -25.0);
    }

    #[test]
    fn determinant_3x3_matrix() {
        let a = Matrix::new(&[&[1.0, 2.0, 6.0], &[-5.0, 8.0, -4.0], &[2.0, 6.0, 4.0]]);
        assert_eq!(a.cofactor(0, 0), 56.0);
        assert_eq!(a.cofactor(0, 1), 12.0);
        assert_eq!(a.cofactor(0, 2), -46.0);
        assert_eq!(a.determinant(), -196.0);
    }

    #[test]
    fn determinant_4x4_matrix() {
        let a = Matrix::new(&[
            &[-2., -8., 3., 5.],
            &[-3., 1., 7., 3.],
            &[1., 2., -9., 6.],
            &[-6., 7., 7., -9.],
        ]);
        assert_eq!(a.cofactor(0, 0), 690.0);
        assert_eq!(a.cofactor(0, 1), 447.0);
        assert_eq!(a.cofactor(0, 2), 210.0);
        assert_eq!(a.cofactor(0, 3), 51.0);
        assert_eq!(a.determinant(), -4071.0);
    }

    #[test]
    fn invertible_matrix_is_invertible() {
        let a = Matrix::new(&[
            &[6., 4., 4., 4.],
            &[5., 5., 7., 6.],
            &[4., -9., 3., -7.],
            &[9., 1., 7., -6.],
        ]);
        assert_eq!(a.determinant(), -2120.0);
        assert!(a.is_invertible());
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let a = Matrix::new(&[
            &[-4., 2., -2., -3.],
            &[9., 6., 2., 6.],
            &[0., -5., 1., -5.],
            &[0., 0., 0., 0.],
        ]);
        assert_eq!(a.determinant(), 0.0);
        assert!(!a.is_invertible());
        assert!(matches!(a.inverse(), Err(MatrixError::NonInvertible)));
    }

    #[test]
    fn tiny_determinant_is_still_invertible() {
        let a = Matrix::new(&[
            &[1e-4, 0., 0., 0.],
            &[0., 1e-4, 0., 0.],
            &[0., 0., 1e-4, 0.],
            &[0., 0., 0., 1.],
        ]);
        assert!(a.determinant() != 0.0);
        assert!(a.is_invertible());
        assert_eq!(&a * &a.inverse().unwrap(), Matrix::identity());
    }

    #[test]
    fn calculate_inverse() {
        let a = Matrix::new(&[
            &[-5., 2., 6., -8.],
            &[1., -5., 1., 8.],
            &[7., 7., -6., -7.],
            &[1., -3., 7., 4.],
        ]);
        let b = a.inverse().unwrap();
        assert_eq!(a.determinant(), 532.0);
        assert_eq!(a.cofactor(2, 3), -160.0);
        assert!(equal(b[3][2], -160.0 / 532.0));
        assert_eq!(a.cofactor(3, 2), 105.0);
        assert!(equal(b[2][3], 105.0 / 532.0));

        let expected_b = Matrix::new(&[
            &[0.21805, 0.45113, 0.24060, -0.04511],
            &[-0.80827, -1.45677, -0.44361, 0.52068],
            &[-0.07895, -0.22368, -0.05263, 0.19737],
            &[-0.52256, -0.81391, -0.30075, 0.30639],
        ]);
        assert_eq!(b, expected_b);
    }

    #[test]
    fn calculate_another_inverse() {
        let a = Matrix::new(&[
            &[8., -5., 9., 2.],
            &[7., 5., 6., 1.],
            &[-6., 0., 9., 6.],
            &[-3., 0., -9., -4.],
        ]);
        let expected = Matrix::new(&[
            &[-0.15385, -0.15385, -0.28205, -0.53846],
            &[-0.07692, 0.12308, 0.02564, 0.03077],
            &[0.35897, 0.35897, 0.43590, 0.92308],
            &[-0.69231, -0.69231, -0.76923, -1.92308],
        ]);

        assert_eq!(a.inverse().unwrap(), expected);
    }

    #[test]
    fn multiplying_a_product_by_inverse_gives_original_matrix() {
        let a = Matrix::new(&[
            &[3., -9., 7., 3.],
            &[3., -8., 2., -9.],
            &[-4., 4., 4., 1.],
            &[-6., 5., -1., 1.],
        ]);
        let b = Matrix::new(&[
            &[8., 2., 2., 2.],
            &[3., -1., 7., 0.],
            &[7., 0., 5., 4.],
            &[6., -2., 0., 5.],
        ]);
        let c = &a * &b;
        assert_eq!(c * b.inverse().unwrap(), a);
    }

    #[test]
    fn matrix_times_its_inverse_is_identity() {
        let a = Matrix::new(&[
            &[9., 3., 0., 9.],
            &[-5., -2., -6., -3.],
            &[-4., 9., 6., 4.],
            &[-7., 6., 6., 2.],
        ]);
        assert_eq!(&a * &a.inverse().unwrap(), Matrix::identity());
    }

    #[test]
    fn transpose_and_inverse_commute() {
        let a = Matrix::new(&[
            &[-5., 2., 6., -8.],
            &[1., -5., 1., 8.],
            &[7., 7., -6., -7.],
            &[1., -3., 7., 4.],
        ]);
        assert_eq!(
            a.inverse().unwrap().transpose(),
            a.transpose().inverse().unwrap()
        );
    }
}
