use crate::error::Result;
use crate::stream::PAdicInteger;

/// `base^(-d)` where `d` is the agreement depth within `window`.
///
/// Prefixes that agree over the whole window are reported at distance 0.
pub fn padic_distance(x: &PAdicInteger, y: &PAdicInteger, window: usize) -> Result<f64> {
    let depth = x.agreement_depth(y, window)?;
    if depth == window {
        return Ok(0.0);
    }

    let p = x.base() as f64;
    Ok(p.powi(-(depth as i32)))
}

/// Agreement depth clamped to `radius` and scaled into `[0, 1]`.
pub fn proximity_score(x: &PAdicInteger, y: &PAdicInteger, radius: usize) -> Result<f64> {
    if radius == 0 {
        return Ok(0.0);
    }
    let depth = x.agreement_depth(y, radius)?;
    Ok(depth as f64 / radius as f64)
}

pub fn are_close(x: &PAdicInteger, y: &PAdicInteger, min_depth: usize) -> Result<bool> {
    Ok(x.agreement_depth(y, min_depth)? >= min_depth)
}

/// Index of the candidate sharing the longest prefix with `reference`.
pub fn find_closest(
    reference: &PAdicInteger,
    candidates: &[PAdicInteger],
    window: usize,
) -> Result<Option<usize>> {
    let mut best: Option<(usize, usize)> = None;

    for (i, candidate) in candidates.iter().enumerate() {
        let depth = reference.agreement_depth(candidate, window)?;
        match best {
            Some((_, best_depth)) if depth <= best_depth => {}
            _ => best = Some((i, depth)),
        }
    }

    Ok(best.map(|(i, _)| i))
}
