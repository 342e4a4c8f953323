use std::fmt::{self, Debug};

use proptest::prelude::*;

use super::{Matcher, Property, Quantifier, SeqStrategy, Shape};

/// A matcher paired with the shape that answers it.
///
/// This `struct` is created by [`leads_to()`] and [`Matcher::leads_to()`].
/// It implements [`Property`]; hand it to [`for_all()`](super::for_all) or
/// [`every()`](super::every), whichever quantifier its shape declares.
pub struct LeadsTo<T, S> {
    matcher: Matcher<T>,
    shape: S,
}

impl<T, S> LeadsTo<T, S> {
    pub(crate) fn new(matcher: Matcher<T>, shape: S) -> Self {
        Self { matcher, shape }
    }
}

impl<T, S> Property<T> for LeadsTo<T, S>
where
    T: Clone + Debug + 'static,
    S: Shape<T> + 'static,
{
    type Output = SeqStrategy<T>;

    fn instantiate(self, base: SeqStrategy<T>, quantifier: Quantifier) -> Self::Output {
        let declared = self.shape.quantifier();
        assert!(
            declared == quantifier,
            "property declared for `{declared}` was instantiated under `{quantifier}`",
        );

        let Self { matcher, shape } = self;
        base.prop_flat_map(move |sample| shape.apply(sample, &matcher).into_strategy())
            .boxed()
    }
}

impl<T, S: Clone> Clone for LeadsTo<T, S> {
    fn clone(&self) -> Self {
        Self {
            matcher: self.matcher.clone(),
            shape: self.shape.clone(),
        }
    }
}

impl<T, S: Debug> Debug for LeadsTo<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadsTo")
            .field("matcher", &self.matcher)
            .field("shape", &self.shape)
            .finish()
    }
}

/// Pairs a matcher with the shape that answers it.
///
/// `matcher` may be a [`Matcher`] or any equatable value, which stands for
/// [`eq(value)`](super::eq).
///
/// # Examples
///
/// ```
/// use proptest::collection::vec as propvec;
/// use proptest::prelude::*;
/// use proptest::strategy::ValueTree;
/// use proptest::test_runner::TestRunner;
/// use temporal_splice::{for_all, leads_to, strategy};
///
/// // Every 2 is immediately followed by a 0.
/// let seqs = for_all(
///     propvec(0..10, ..8),
///     leads_to(2, strategy::next(Just(0))),
/// );
///
/// let mut runner = TestRunner::deterministic();
/// let seq = seqs.new_tree(&mut runner).unwrap().current();
/// if let Some(at) = seq.iter().position(|&x| x == 2) {
///     assert_eq!(seq.get(at + 1), Some(&0));
/// }
/// ```
pub fn leads_to<T, S>(matcher: impl Into<Matcher<T>>, shape: S) -> LeadsTo<T, S>
where
    S: Shape<T>,
{
    LeadsTo::new(matcher.into(), shape)
}
