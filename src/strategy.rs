//! Generator-side counterparts of the `augment` adaptors.
//!
//! Each constructor here builds a [`Shape`](crate::Shape): where the
//! same-named adaptor reshapes a sequence it observes, the shape produces
//! sequences that already look reshaped. Pair a shape with a
//! [`Matcher`](crate::Matcher) via [`leads_to()`](crate::leads_to) or
//! [`Matcher::leads_to()`](crate::Matcher::leads_to), then instantiate
//! under the quantifier the shape declares with
//! [`for_all()`](crate::for_all) or [`every()`](crate::every).
//!
//! One asymmetry is deliberate: the `next` adaptor inserts after the first
//! match only, while the [`next()`] shape answers every match. A generated
//! sequence should exercise a property at each opportunity; an observed one
//! is patched at the first.

mod always;
mod ends_with;
mod eventually;
mod next;
mod none_after;
mod splice;
mod starts_with;

pub use always::*;
pub use ends_with::*;
pub use eventually::*;
pub use next::*;
pub use none_after::*;
pub use starts_with::*;

use proptest::prelude::Strategy;

use crate::assert_shape;

/// Keeps the drawn value and drops the trigger.
///
/// The default mapper of the shapes that take one.
pub fn default_mapper<T>(_trigger: &T, new: T) -> T {
    new
}

/// After the first match, the rest of the sequence is one frozen value
/// drawn from `values`.
///
/// The base sample is kept through its first match, then replaced by a
/// single drawn value repeated to the end. Declared for
/// [`for_all()`](crate::for_all). Samples without a match pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use proptest::collection::vec as propvec;
/// use proptest::prelude::*;
/// use proptest::strategy::ValueTree;
/// use proptest::test_runner::TestRunner;
/// use temporal_splice::{eq, for_all, strategy};
///
/// let seqs = for_all(
///     propvec(0..10, ..8),
///     eq(7).leads_to(strategy::always(Just(-1))),
/// );
///
/// let mut runner = TestRunner::deterministic();
/// for _ in 0..16 {
///     let seq = seqs.new_tree(&mut runner).unwrap().current();
///     if let Some(at) = seq.iter().position(|&x| x == 7) {
///         assert!(!seq[at + 1..].is_empty());
///         assert!(seq[at + 1..].iter().all(|&x| x == -1));
///     }
/// }
/// ```
pub fn always<V>(values: V) -> Always<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
{
    assert_shape(Always::new(values, default_mapper))
}

/// Somewhere after each match, a value drawn from `values` shows up.
///
/// One value is inserted per match, anywhere between right after the match
/// and the end of the sequence. Declared for [`for_all()`](crate::for_all).
pub fn eventually<V>(values: V) -> Eventually<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
{
    assert_shape(Eventually::new(values, default_mapper))
}

/// Right after each match, a value drawn from `values` shows up.
///
/// Every match is answered, not just the first one as the same-named
/// adaptor does. Declared for [`for_all()`](crate::for_all).
pub fn next<V>(values: V) -> Next<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
{
    assert_shape(Next::new(values, default_mapper))
}

/// After the first match, no element matches again.
///
/// The base sample is kept through its first match; the tail is redrawn
/// from `elements` with matching ones filtered out. Declared for
/// [`for_all()`](crate::for_all). Samples without a match pass through
/// unchanged.
pub fn none_after<V>(elements: V) -> NoneAfter<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
{
    assert_shape(NoneAfter::new(elements))
}

/// Sequences open with a value drawn from `values`.
///
/// The drawn value is prepended to the base sample. An empty sample may
/// stay empty, which satisfies the property on its own. Declared for
/// [`every()`](crate::every); the matcher plays no part in the shaping.
pub fn starts_with<V>(values: V) -> StartsWith<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
{
    assert_shape(StartsWith::new(values))
}

/// Sequences close with a value drawn from `values`.
///
/// The drawn value is appended to the base sample. An empty sample may
/// stay empty, which satisfies the property on its own. Declared for
/// [`every()`](crate::every); the matcher plays no part in the shaping.
pub fn ends_with<V>(values: V) -> EndsWith<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + 'static,
{
    assert_shape(EndsWith::new(values))
}
