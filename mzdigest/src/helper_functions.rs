use std::ops::{Bound, RangeBounds};

pub(crate) trait RangeExtension
where
    Self: Sized,
{
    fn start_index(&self) -> usize;
    /// Give the min of the end index (exclusive) or the upper bound
    fn end_index(&self, upper_bound: usize) -> usize;
    /// The (start, end) pair with the end exclusive, both clamped to the upper bound
    fn bounds(&self, upper_bound: usize) -> (usize, usize) {
        let end = self.end_index(upper_bound);
        (self.start_index().min(end), end)
    }
}

impl<Ra: RangeBounds<usize>> RangeExtension for Ra {
    fn start_index(&self) -> usize {
        match self.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(s) => *s,
            Bound::Excluded(s) => s + 1,
        }
    }

    fn end_index(&self, upper_bound: usize) -> usize {
        match self.end_bound() {
            Bound::Unbounded => upper_bound,
            Bound::Included(s) => (s + 1).min(upper_bound),
            Bound::Excluded(s) => (*s).min(upper_bound),
        }
    }
}

/// Find the index of the parenthesis closing the one opened right before `start`, taking nested
/// parentheses into account. Returns `None` if the parentheses are unbalanced.
pub(crate) fn end_of_enclosure(text: &str, start: usize) -> Option<usize> {
    let mut depth = 1_usize;
    for (index, ch) in text[start..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + index);
                }
            }
            _ => (),
        }
    }
    None
}
