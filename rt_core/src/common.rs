/// Tolerance for every approximate float comparison in the crate,
/// and the distance the over/under points are nudged off a surface.
pub const EPSILON: f64 = 1e-5;

pub fn equal(a: f64, b: f64) -> bool {
    let c = a - b;
    c.abs() < EPSILON
}
