use std::{fmt, sync::Arc};

use super::{LeadsTo, Shape};

/// An element predicate shared across the places a property needs it.
///
/// Cloning is cheap; clones share the underlying closure.
pub struct Matcher<T>(Arc<dyn Fn(&T) -> bool>);

impl<T> Matcher<T> {
    /// Wraps a predicate.
    pub fn new(pred: impl Fn(&T) -> bool + 'static) -> Self {
        Self(Arc::new(pred))
    }

    /// Tests one element.
    #[inline]
    pub fn test(&self, element: &T) -> bool {
        (self.0)(element)
    }

    /// Pairs this matcher with the shape that answers it.
    ///
    /// The pair is a [`Property`](super::Property); hand it to
    /// [`for_all()`](super::for_all) or [`every()`](super::every),
    /// whichever the shape declares.
    pub fn leads_to<S>(self, shape: S) -> LeadsTo<T, S>
    where
        S: Shape<T>,
    {
        LeadsTo::new(self, shape)
    }
}

impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher").finish_non_exhaustive()
    }
}

impl<T> From<T> for Matcher<T>
where
    T: PartialEq + 'static,
{
    /// Matches elements equal to `value`.
    fn from(value: T) -> Self {
        eq(value)
    }
}

/// A matcher for elements equal to `value`.
///
/// # Examples
///
/// ```
/// use temporal_splice::eq;
///
/// let sevens = eq(7);
/// assert!(sevens.test(&7));
/// assert!(!sevens.test(&8));
/// ```
pub fn eq<T>(value: T) -> Matcher<T>
where
    T: PartialEq + 'static,
{
    Matcher::new(move |element| *element == value)
}
