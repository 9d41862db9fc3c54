use crate::interpolation::errors::InterpolationError;

/// Solves a tridiagonal system with the Thomas algorithm, O(n).
///
/// Row `k` reads `sub[k] u[k-1] + diag[k] u[k] + sup[k] u[k+1] = rhs[k]`;
/// `sub[0]` and `sup[n-1]` are ignored. No pivoting.
pub(crate) fn solve(
    sub : &[f64],
    diag: &[f64],
    sup : &[f64],
    rhs : &[f64],
) -> Result<Vec<f64>, InterpolationError> {
    let n = diag.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    // thomas LU
    let mut l_sub  = vec![0.0; n];
    let mut u_diag = vec![0.0; n];
    u_diag[0] = diag[0];
    check_pivot(u_diag[0], 0)?;
    for k in 1..n {
        l_sub[k]  = sub[k] / u_diag[k - 1];
        u_diag[k] = diag[k] - l_sub[k] * sup[k - 1];
        check_pivot(u_diag[k], k)?;
    }

    // L w = rhs
    let mut w = rhs.to_vec();
    for k in 1..n {
        w[k] -= l_sub[k] * w[k - 1];
    }

    // U u = w
    w[n - 1] /= u_diag[n - 1];
    for k in (0..n - 1).rev() {
        w[k] = (w[k] - sup[k] * w[k + 1]) / u_diag[k];
    }

    Ok(w)
}

#[inline]
fn check_pivot(p: f64, row: usize) -> Result<(), InterpolationError> {
    if p == 0.0 || !p.is_finite() {
        return Err(InterpolationError::SingularSystem { row });
    }
    Ok(())
}
