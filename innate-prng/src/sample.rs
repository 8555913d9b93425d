use crate::RandomSource;

/// Returns whether a random event with probability `numerator / denominator` occurs.
///
/// `denominator` must be nonzero.
pub fn chance(source: &mut dyn RandomSource, numerator: u64, denominator: u64) -> bool {
    source.next_u64().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
///
/// `max` must be greater than `min`.
pub fn range(source: &mut dyn RandomSource, min: u64, max: u64) -> u64 {
    source.next_u64().rem_euclid(max - min) + min
}

/// Returns a uniformly-chosen element of the slice, or `None` if it is empty.
pub fn pick<'a, T>(source: &mut dyn RandomSource, slice: &'a [T]) -> Option<&'a T> {
    match slice.len() {
        0 => None,
        1 => slice.first(),
        len => slice.get(range(source, 0, len as u64) as usize),
    }
}

/// Shuffles the slice in place, Fisher-Yates style.
pub fn shuffle<T>(source: &mut dyn RandomSource, items: &mut [T]) {
    let len = items.len() as u64;
    for start in 0..len.saturating_sub(1) {
        let next = range(source, start, len);
        items.swap(start as usize, next as usize);
    }
}
