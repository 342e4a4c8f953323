//! Iterator adaptors that splice extra values into a sequence.
//!
//! Every adaptor here is lazy. Nothing is pulled from the input, and no
//! [`ValueSource`] provider runs, until the output itself is pulled.
//! Each adaptor is mirrored by a generator of the same name in the
//! `strategy` module (behind the `proptest` feature) that produces
//! sequences shaped the way the adaptor would have shaped them.

#[cfg(feature = "alloc")]
mod always;
mod ends_with;
#[cfg(feature = "alloc")]
mod ends_with_until;
mod next;
mod starts_with;

#[cfg(feature = "alloc")]
pub use always::*;
pub use ends_with::*;
#[cfg(feature = "alloc")]
pub use ends_with_until::*;
pub use next::*;
pub use starts_with::*;

use crate::{ValueSource, assert_iterator};

/// Prepends one value to the front of `seq`.
///
/// A provider runs on the first pull of the output; a history provider sees
/// an empty slice, since nothing has been emitted that early.
///
/// # Examples
///
/// ```
/// use temporal_splice::{ValueSource, augment};
///
/// let out = augment::starts_with([1, 2, 3], ValueSource::literal(0));
/// assert!(out.eq([0, 1, 2, 3]));
/// ```
#[inline]
pub fn starts_with<S, F, H>(
    seq: S,
    lead: ValueSource<S::Item, F, H>,
) -> StartsWith<S::IntoIter, F, H>
where
    S: IntoIterator,
    F: FnMut() -> S::Item,
    H: FnMut(&[S::Item]) -> S::Item,
{
    assert_iterator(StartsWith::new(seq.into_iter(), lead))
}

/// Appends one value once `seq` runs out.
///
/// A provider runs twice: eagerly on the first pull of the output, before
/// any element goes out, and again when the input is exhausted. The
/// appended value comes from the second run; the first run's value is
/// dropped. [`ends_with_until()`] is the variant that puts the first run's
/// value to use. A literal is appended as-is.
///
/// # Examples
///
/// ```
/// use temporal_splice::{ValueSource, augment};
///
/// let out = augment::ends_with([1, 2, 3], ValueSource::literal(4));
/// assert!(out.eq([1, 2, 3, 4]));
/// ```
#[inline]
pub fn ends_with<S, F, H>(
    seq: S,
    tail: ValueSource<S::Item, F, H>,
) -> EndsWith<S::IntoIter, F, H>
where
    S: IntoIterator,
    F: FnMut() -> S::Item,
    H: FnMut(&[S::Item]) -> S::Item,
{
    assert_iterator(EndsWith::new(seq.into_iter(), tail))
}

/// Appends one value, unless some element matches `pred` first, in which
/// case the output is only the value.
///
/// The value resolves eagerly on the first pull, before any element is
/// inspected. On the first match, everything seen so far is discarded and
/// the output is exactly that eagerly resolved value. Without a match, the
/// source runs once more at the end and the second run's value is appended,
/// exactly like [`ends_with()`].
///
/// The input up to the first match (or its end) is buffered on the first
/// pull, so the input must not be endless unless a match is guaranteed.
///
/// # Examples
///
/// ```
/// use temporal_splice::{ValueSource, augment};
///
/// let out = augment::ends_with_until([1, 2, 3], ValueSource::literal(4), |&x| x == 2);
/// assert!(out.eq([4]));
/// ```
///
/// A predicate that never fires degenerates to a plain append.
///
/// ```
/// use temporal_splice::{ValueSource, augment};
///
/// let out = augment::ends_with_until([1, 2, 3], ValueSource::literal(4), |_: &i32| false);
/// assert!(out.eq([1, 2, 3, 4]));
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn ends_with_until<S, P, F, H>(
    seq: S,
    tail: ValueSource<S::Item, F, H>,
    pred: P,
) -> EndsWithUntil<S::IntoIter, P, F, H>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
    F: FnMut() -> S::Item,
    H: FnMut(&[S::Item]) -> S::Item,
{
    assert_iterator(EndsWithUntil::new(seq.into_iter(), tail, pred))
}

/// Inserts one value right after the first element matching `pred`.
///
/// Only the first match counts; later matches pass through untouched. The
/// value resolves on the first pull of the output whether or not a match
/// ever shows up. Without a match, the input is reproduced unchanged and
/// the resolved value is dropped.
///
/// # Examples
///
/// ```
/// use temporal_splice::{ValueSource, augment};
///
/// let out = augment::next([1, 2, 3], ValueSource::literal(0), |&x| x == 2);
/// assert!(out.eq([1, 2, 0, 3]));
/// ```
///
/// Later matches are left alone.
///
/// ```
/// use temporal_splice::{ValueSource, augment};
///
/// let out = augment::next([1, 2, 3, 2, 4], ValueSource::literal(0), |&x| x == 2);
/// assert!(out.eq([1, 2, 0, 3, 2, 4]));
/// ```
#[inline]
pub fn next<S, P, F, H>(
    seq: S,
    value: ValueSource<S::Item, F, H>,
    pred: P,
) -> Next<S::IntoIter, P, F, H>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
    F: FnMut() -> S::Item,
    H: FnMut(&[S::Item]) -> S::Item,
{
    assert_iterator(Next::new(seq.into_iter(), value, pred))
}

/// Replaces the rest of the sequence with one frozen value once the emitted
/// history satisfies `pred`.
///
/// Before each element goes out, `pred` judges the elements emitted so far,
/// the current one excluded. The first time it holds, the source resolves
/// once against that history, and the resulting value replaces the current
/// element and every one after it. The output is exactly as long as the
/// input.
///
/// # Examples
///
/// ```
/// use temporal_splice::{ValueSource, augment};
///
/// let out = augment::always([1, 2, 3], ValueSource::literal(0), |seen: &[i32]| seen.len() >= 2);
/// assert!(out.eq([1, 2, 0]));
/// ```
///
/// A history provider derives the frozen value from everything before the
/// trigger.
///
/// ```
/// use temporal_splice::{ValueSource, augment};
///
/// let out = augment::always(
///     [5, 6, 7, 8],
///     ValueSource::from_seen(|seen: &[i32]| seen.iter().sum()),
///     |seen: &[i32]| seen.len() >= 2,
/// );
/// assert!(out.eq([5, 6, 11, 11]));
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn always<S, P, F, H>(
    seq: S,
    source: ValueSource<S::Item, F, H>,
    pred: P,
) -> Always<S::IntoIter, P, F, H>
where
    S: IntoIterator,
    S::Item: Clone,
    P: FnMut(&[S::Item]) -> bool,
    F: FnMut() -> S::Item,
    H: FnMut(&[S::Item]) -> S::Item,
{
    assert_iterator(Always::new(seq.into_iter(), source, pred))
}
