use std::fmt::{self, Display};

use proptest::strategy::Strategy;

use super::SeqStrategy;

/// How a temporal property ranges over a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// The property constrains the sequence as a whole.
    ForAll,
    /// The property constrains every position of the sequence.
    Every,
}

impl Quantifier {
    /// The name this quantifier goes by at the call site.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForAll => "for_all",
            Self::Every => "every",
        }
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A temporal property waiting for its base sequences and quantifier.
///
/// Implemented by [`LeadsTo`](super::LeadsTo) and, for ad-hoc strategies,
/// by [`PropertyFn`].
pub trait Property<T> {
    /// What instantiation produces. [`LeadsTo`](super::LeadsTo) produces a
    /// [`SeqStrategy`].
    type Output;

    /// Binds the property to `base` under `quantifier`.
    ///
    /// # Panics
    ///
    /// Implementations panic if the property was declared for a different
    /// quantifier.
    fn instantiate(self, base: SeqStrategy<T>, quantifier: Quantifier) -> Self::Output;
}

/// Adapts a closure into a [`Property`].
///
/// The closure receives the base strategy and the quantifier as-is; what it
/// makes of them is its own business.
#[derive(Debug, Clone, Copy)]
pub struct PropertyFn<F>(pub F);

impl<T, F, R> Property<T> for PropertyFn<F>
where
    F: FnOnce(SeqStrategy<T>, Quantifier) -> R,
{
    type Output = R;

    #[inline]
    fn instantiate(self, base: SeqStrategy<T>, quantifier: Quantifier) -> R {
        (self.0)(base, quantifier)
    }
}

/// Instantiates `property` over whole sequences drawn from `base`.
///
/// This is the quantifier for shapes that constrain the sequence as a
/// whole: `always`, `eventually`, `next`, and `none_after`.
///
/// # Panics
///
/// If `property` was declared for [`every()`] instead.
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
/// // Whenever a 7 shows up, a 0 eventually follows.
/// let seqs = for_all(
///     propvec(0..10, ..8),
///     eq(7).leads_to(strategy::eventually(Just(0))),
/// );
///
/// let mut runner = TestRunner::deterministic();
/// for _ in 0..16 {
///     let seq = seqs.new_tree(&mut runner).unwrap().current();
///     if let Some(at) = seq.iter().position(|&x| x == 7) {
///         assert!(seq[at..].contains(&0));
///     }
/// }
/// ```
pub fn for_all<T, P>(base: impl Strategy<Value = Vec<T>> + 'static, property: P) -> P::Output
where
    P: Property<T>,
{
    property.instantiate(base.boxed(), Quantifier::ForAll)
}

/// Instantiates `property` at every position of sequences drawn from
/// `base`.
///
/// This is the quantifier for the edge shapes `starts_with` and
/// `ends_with`, whose constraint is read off the sequence positionally
/// rather than from any particular match.
///
/// # Panics
///
/// If `property` was declared for [`for_all()`] instead.
pub fn every<T, P>(base: impl Strategy<Value = Vec<T>> + 'static, property: P) -> P::Output
where
    P: Property<T>,
{
    property.instantiate(base.boxed(), Quantifier::Every)
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    use crate::{PropertyFn, Quantifier, SeqStrategy, every, for_all};

    #[test]
    fn displays_as_the_call_site_name() {
        assert_eq!(Quantifier::ForAll.to_string(), "for_all");
        assert_eq!(Quantifier::Every.to_string(), "every");
    }

    #[test]
    fn closures_participate_as_properties() {
        let seqs = for_all(
            propvec(0..10_i32, ..4),
            PropertyFn(|base: SeqStrategy<i32>, quantifier| {
                assert_eq!(quantifier, Quantifier::ForAll);
                base
            }),
        );

        let mut runner = TestRunner::deterministic();
        let seq = seqs.new_tree(&mut runner).unwrap().current();
        assert!(seq.len() < 4);
    }

    #[test]
    fn every_hands_its_own_quantifier_over() {
        every(
            propvec(0..10_i32, ..4),
            PropertyFn(|_base: SeqStrategy<i32>, quantifier| {
                assert_eq!(quantifier, Quantifier::Every);
            }),
        );
    }
}
