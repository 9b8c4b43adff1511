//! The p-value adjustment engine.
//!
//! Pure functions over numeric slices: no state is kept between calls, and
//! every method is a rank-based transform (sort, running extremum, inverse
//! permutation) except Bonferroni, which is element-wise.

use tracing::{debug, trace};

use crate::adjust::error::AdjustError;
use crate::adjust::method::Method;

/// Adjust a family of p-values for multiple comparisons.
///
/// `None` entries mark missing comparisons: they are excluded from the
/// correction and reproduced untouched at their original positions. The
/// comparison count `n` defaults to the number of present entries; a larger
/// `n` corrects as if the unobserved comparisons had maximally unfavorable
/// p-values, which can only raise the adjusted values of the observed ones.
///
/// Returns [`AdjustError::TooFewComparisons`] when `n` is smaller than the
/// number of present entries. With `n <= 1` the input is returned unchanged,
/// and with `n == 2` the Hommel procedure is replaced by Hochberg's, to
/// which it degenerates.
///
/// ```
/// use stat_adjust::{adjust, Method};
///
/// let adjusted = adjust(&[Some(0.01), None, Some(0.04)], Method::Holm, None).unwrap();
/// assert_eq!(adjusted, vec![Some(0.02), None, Some(0.04)]);
/// ```
pub fn adjust(
    p: &[Option<f64>],
    method: Method,
    n: Option<usize>,
) -> Result<Vec<Option<f64>>, AdjustError> {
    let observed: Vec<f64> = p.iter().filter_map(|slot| *slot).collect();
    let lp = observed.len();
    let n = n.unwrap_or(lp);

    if n < lp {
        return Err(AdjustError::TooFewComparisons { n, observed: lp });
    }
    trace!(method = %method, observed = lp, comparisons = n, "adjusting p-values");

    if n <= 1 {
        return Ok(p.to_vec());
    }
    let method = if method == Method::Hommel && n == 2 {
        debug!("hommel degenerates to hochberg for two comparisons");
        Method::Hochberg
    } else {
        method
    };

    let corrected = match method {
        Method::Holm => holm(&observed, n),
        Method::Bonferroni => bonferroni(&observed, n),
        Method::Hochberg => hochberg(&observed, n),
        Method::Hommel => hommel(&observed, n),
        Method::Bh => benjamini_hochberg(&observed, n),
        Method::By => benjamini_yekutieli(&observed, n),
        Method::None => observed,
    };

    let mut corrected = corrected.into_iter();
    Ok(p.iter()
        .map(|slot| slot.and_then(|_| corrected.next()))
        .collect())
}

/// [`adjust`] over a plain float slice, with `f64::NAN` marking missing
/// comparisons, as in the classical array-based formulation.
pub fn adjust_nan(p: &[f64], method: Method, n: Option<usize>) -> Result<Vec<f64>, AdjustError> {
    let masked: Vec<Option<f64>> = p
        .iter()
        .map(|&v| if v.is_nan() { None } else { Some(v) })
        .collect();
    let adjusted = adjust(&masked, method, n)?;
    Ok(adjusted
        .into_iter()
        .map(|slot| slot.unwrap_or(f64::NAN))
        .collect())
}

/// Harmonic-number inflation factor `sum(1/k, k = 1..=n)` used by the
/// Benjamini-Yekutieli correction to cover arbitrary dependence.
pub fn by_correction_factor(n: usize) -> f64 {
    (1..=n).map(|k| 1.0 / k as f64).sum()
}

/// Permutation that sorts `values`.
///
/// The sort is stable over `f64::total_cmp`, so tied p-values keep their
/// input order and the inverse mapping is deterministic.
fn sort_order(values: &[f64], descending: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    if descending {
        order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    } else {
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    }
    order
}

/// Map results computed in sorted order back to the pre-sort positions.
fn unsort(sorted: &[f64], order: &[usize]) -> Vec<f64> {
    let mut out = vec![0.0; sorted.len()];
    for (pos, &original) in order.iter().enumerate() {
        out[original] = sorted[pos];
    }
    out
}

fn bonferroni(p: &[f64], n: usize) -> Vec<f64> {
    p.iter().map(|&v| (v * n as f64).min(1.0)).collect()
}

/// Step-down running maximum over ascending p-values.
fn holm(p: &[f64], n: usize) -> Vec<f64> {
    let order = sort_order(p, false);
    let mut running = f64::NEG_INFINITY;
    let mut sorted = Vec::with_capacity(p.len());
    for (rank, &idx) in order.iter().enumerate() {
        running = running.max((n - rank) as f64 * p[idx]);
        sorted.push(running.min(1.0));
    }
    unsort(&sorted, &order)
}

/// Step-up running minimum over descending p-values, with a per-rank
/// weight. Shared skeleton of Hochberg, BH, and BY.
fn step_up(p: &[f64], weight: impl Fn(usize) -> f64) -> Vec<f64> {
    let order = sort_order(p, true);
    let mut running = f64::INFINITY;
    let mut sorted = Vec::with_capacity(p.len());
    for (pos, &idx) in order.iter().enumerate() {
        running = running.min(weight(pos) * p[idx]);
        sorted.push(running.min(1.0));
    }
    unsort(&sorted, &order)
}

fn hochberg(p: &[f64], n: usize) -> Vec<f64> {
    let lp = p.len();
    step_up(p, |pos| (n - lp + 1 + pos) as f64)
}

fn benjamini_hochberg(p: &[f64], n: usize) -> Vec<f64> {
    let lp = p.len();
    step_up(p, |pos| n as f64 / (lp - pos) as f64)
}

fn benjamini_yekutieli(p: &[f64], n: usize) -> Vec<f64> {
    let lp = p.len();
    let q = by_correction_factor(n);
    step_up(p, |pos| q * n as f64 / (lp - pos) as f64)
}

/// Hommel's stagewise procedure.
///
/// Works over the p-values padded with 1.0 up to `n`, sorted ascending.
/// `pa` accumulates, for every position, the largest Simes p-value over the
/// worst subset of each size `j = n, n-1, .., 2` containing that position;
/// the size-one subset is each value itself, folded in at the end. Padding
/// is discarded again before results are mapped back to input order.
fn hommel(p: &[f64], n: usize) -> Vec<f64> {
    let lp = p.len();
    let mut padded = p.to_vec();
    padded.resize(n, 1.0);

    let order = sort_order(&padded, false);
    let sorted: Vec<f64> = order.iter().map(|&idx| padded[idx]).collect();

    let mut q0 = f64::INFINITY;
    for (rank, &v) in sorted.iter().enumerate() {
        q0 = q0.min(n as f64 * v / (rank + 1) as f64);
    }
    let mut q = vec![q0; n];
    let mut pa = vec![q0; n];

    for j in (2..n).rev() {
        let boundary = n - j;
        let mut q1 = f64::INFINITY;
        for k in 0..j - 1 {
            q1 = q1.min(j as f64 * sorted[boundary + 1 + k] / (k + 2) as f64);
        }
        for idx in 0..=boundary {
            q[idx] = (j as f64 * sorted[idx]).min(q1);
        }
        let tail = q[boundary];
        for slot in &mut q[boundary + 1..] {
            *slot = tail;
        }
        for (acc, &v) in pa.iter_mut().zip(&q) {
            *acc = acc.max(v);
        }
    }

    let mut out = vec![0.0; lp];
    for (pos, &original) in order.iter().enumerate() {
        if original < lp {
            out[original] = pa[pos].max(sorted[pos]);
        }
    }
    out
}
