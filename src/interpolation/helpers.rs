/// Spacings between adjacent nodes, `h[i] = x[i+1] - x[i]`
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}


/// Secant slopes of each segment
pub(crate) fn deltas(y: &[f64], h: &[f64]) -> Vec<f64> {
    y.windows(2).zip(h).map(|(w, &hi)| (w[1] - w[0]) / hi).collect()
}


/// Index `lo` of the segment `[x[lo], x[lo+1]]` used for `xq`.
///
/// Clamped to `0..=n-2`, so queries left of `x[0]` map to the first
/// segment and queries right of `x[n-1]` to the last one.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}


/// `num` evenly spaced points over `[start, end]`, both ends included.
pub(crate) fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            let mut v: Vec<f64> = (0..num - 1)
                .map(|i| (start + step * i as f64).min(end))
                .collect();
            v.push(end);
            v
        }
    }
}
