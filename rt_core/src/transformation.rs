use crate::{Matrix, Result, Tuple};

impl Matrix {
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::new(&[
            &[1., 0., 0., x],
            &[0., 1., 0., y],
            &[0., 0., 1., z],
            &[0., 0., 0., 1.],
        ])
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        Self::new(&[
            &[x, 0., 0., 0.],
            &[0., y, 0., 0.],
            &[0., 0., z, 0.],
            &[0., 0., 0., 1.],
        ])
    }

    /// Rotation around the x axis by `radians` (left-handed).
    pub fn rotation_x(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(&[
            &[1., 0., 0., 0.],
            &[0., cos, -sin, 0.],
            &[0., sin, cos, 0.],
            &[0., 0., 0., 1.],
        ])
    }

    pub fn rotation_y(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(&[
            &[cos, 0., sin, 0.],
            &[0., 1., 0., 0.],
            &[-sin, 0., cos, 0.],
            &[0., 0., 0., 1.],
        ])
    }

    pub fn rotation_z(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(&[
            &[cos, -sin, 0., 0.],
            &[sin, cos, 0., 0.],
            &[0., 0., 1., 0.],
            &[0., 0., 0., 1.],
        ])
    }

    /// Each parameter moves one component in proportion to another,
    /// e.g. `xy` moves x in proportion to y.
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        Self::new(&[
            &[1., xy, xz, 0.],
            &[yx, 1., yz, 0.],
            &[zx, zy, 1., 0.],
            &[0., 0., 0., 1.],
        ])
    }

    // The chainable versions below apply their transformation *after* self,
    // so `identity().rotate_x(a).scale(..).translate(..)` reads in the order
    // the transformations happen.

    pub fn translate(&self, x: f64, y: f64, z: f64) -> Self {
        &Self::translation(x, y, z) * self
    }

    pub fn scale(&self, x: f64, y: f64, z: f64) -> Self {
        &Self::scaling(x, y, z) * self
    }

    pub fn rotate_x(&self, radians: f64) -> Self {
        &Self::rotation_x(radians) * self
    }

    pub fn rotate_y(&self, radians: f64) -> Self {
        &Self::rotation_y(radians) * self
    }

    pub fn rotate_z(&self, radians: f64) -> Self {
        &Self::rotation_z(radians) * self
    }

    pub fn shear(&self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        &Self::shearing(xy, xz, yx, yz, zx, zy) * self
    }
}

/// Orients the world relative to an eye at `from` looking at `to`,
/// with `up` pointing roughly upwards.
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Result<Matrix> {
    let forward = (to - from).norm()?;
    let up_norm = up.norm()?;
    let left = forward.cross(&up_norm)?;
    let true_up = left.cross(&forward)?;
    let orientation = Matrix::new(&[
        &[left.x, left.y, left.z, 0.],
        &[true_up.x, true_up.y, true_up.z, 0.],
        &[-forward.x, -forward.y, -forward.z, 0.],
        &[0., 0., 0., 1.],
    ]);
    Ok(orientation * Matrix::translation(-from.x, -from.y, -from.z))
}
