//! Iterator utilities.
use std::cmp::Ordering;

/// The index of a maximal element in a collection, according to a comparison function.
///
/// # Example
/// Get the argmax of an iterator of floats:
///
/// ```
/// use nbandit::utils::iter::ArgMaxBy;
///
/// let v = vec![1.0, 2.5, -3.0, 2.5];
/// let argmax = v.into_iter().argmax_by(|a: &f64, b: &f64| a.partial_cmp(b).unwrap());
/// assert_eq!(argmax, Some(3));
/// ```
pub trait ArgMaxBy {
    type Item;

    /// The index of an element that gives the maximum value from the specified function.
    ///
    /// Elements are scanned in order and a later element replaces the current best
    /// unless the current best compares strictly greater.
    /// If several elements are equally maximum, the last index is returned.
    /// If the iterator is empty, None is returned.
    fn argmax_by<F>(self, compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;
}

impl<I: Iterator> ArgMaxBy for I {
    type Item = <Self as Iterator>::Item;

    fn argmax_by<F>(self, mut compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.enumerate()
            .fold(None, |best, (i, x)| match best {
                Some((j, y)) if compare(&y, &x) == Ordering::Greater => Some((j, y)),
                _ => Some((i, x)),
            })
            .map(|(i, _)| i)
    }
}

/// Index of the maximum float, with the last index winning ties.
///
/// NaN never compares greater so a NaN best is replaced by the next element.
pub fn argmax_f64<'a, I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a f64>,
{
    values
        .into_iter()
        .argmax_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Less))
}
