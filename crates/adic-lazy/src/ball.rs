use crate::stream::PAdicInteger;
use std::collections::HashSet;

/// The first `radius` digits, identifying the p-adic ball of that radius.
pub fn ball_id(x: &PAdicInteger, radius: usize) -> Vec<u32> {
    x.prefix(radius)
}

pub fn is_in_ball(x: &PAdicInteger, center: &PAdicInteger, radius: usize) -> bool {
    x.equal_prefix(center, radius)
}

/// Number of distinct balls of `radius` among `points`, grouped per base.
pub fn count_distinct_balls(points: &[PAdicInteger], radius: usize) -> usize {
    let mut unique_balls = HashSet::new();

    for point in points {
        unique_balls.insert((point.base(), ball_id(point, radius)));
    }

    unique_balls.len()
}
