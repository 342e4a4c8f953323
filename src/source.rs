use std::fmt::Debug;

/// Describes how an operator in [`augment`](crate::augment) obtains the value
/// it inserts.
///
/// A source has one of three shapes, selected at the call site by picking a
/// constructor:
///
/// - [`literal`](ValueSource::literal): the value already exists.
/// - [`lazy`](ValueSource::lazy): a provider produces the value, and runs only
///   when the operator actually needs it.
/// - [`from_seen`](ValueSource::from_seen): a provider computes the value from
///   the elements observed so far. Only [`augment::always()`] records a
///   history; every other operator resolves this shape against an empty
///   slice.
///
/// The shape decides *when*, and how often, a provider runs. Each operator
/// documents its own timing.
///
/// # Examples
///
/// ```
/// use temporal_splice::ValueSource;
///
/// assert_eq!(ValueSource::literal(7).resolve(&[]), 7);
/// assert_eq!(ValueSource::lazy(|| 6 * 7).resolve(&[]), 42);
/// assert_eq!(
///     ValueSource::from_seen(|seen: &[i32]| seen.iter().sum()).resolve(&[40, 2]),
///     42,
/// );
/// ```
///
/// [`augment::always()`]: crate::augment::always
#[derive(Clone)]
pub enum ValueSource<T, F = fn() -> T, H = fn(&[T]) -> T> {
    /// A value supplied up front.
    Literal(T),
    /// A provider invoked with no arguments.
    Lazy(F),
    /// A provider invoked with the elements seen so far.
    FromSeen(H),
}

impl<T> ValueSource<T> {
    /// Creates a source holding an already-computed value.
    #[inline]
    pub const fn literal(value: T) -> Self {
        Self::Literal(value)
    }
}

impl<T, F> ValueSource<T, F>
where
    F: FnMut() -> T,
{
    /// Creates a source backed by a zero-argument provider.
    #[inline]
    pub const fn lazy(provider: F) -> Self {
        Self::Lazy(provider)
    }
}

impl<T, H> ValueSource<T, fn() -> T, H>
where
    H: FnMut(&[T]) -> T,
{
    /// Creates a source backed by a provider that receives the elements seen
    /// so far.
    #[inline]
    pub const fn from_seen(provider: H) -> Self {
        Self::FromSeen(provider)
    }
}

impl<T, F, H> ValueSource<T, F, H>
where
    F: FnMut() -> T,
    H: FnMut(&[T]) -> T,
{
    /// Consumes the source and produces the value.
    ///
    /// A provider runs exactly once. `seen` is only inspected by the
    /// [`FromSeen`](ValueSource::FromSeen) shape.
    pub fn resolve(self, seen: &[T]) -> T {
        match self {
            Self::Literal(value) => value,
            Self::Lazy(mut provider) => provider(),
            Self::FromSeen(mut provider) => provider(seen),
        }
    }

    // Runs the provider once and hands the source back so it can run a second
    // time later. A literal has no provider to re-run; its value is final.
    pub(crate) fn resolve_eager(self, seen: &[T]) -> (T, Option<Self>) {
        match self {
            Self::Literal(value) => (value, None),
            Self::Lazy(mut provider) => {
                let value = provider();
                (value, Some(Self::Lazy(provider)))
            }
            Self::FromSeen(mut provider) => {
                let value = provider(seen);
                (value, Some(Self::FromSeen(provider)))
            }
        }
    }
}

impl<T: Debug, F, H> Debug for ValueSource<T, F, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Lazy(_) => f.debug_struct("Lazy").finish_non_exhaustive(),
            Self::FromSeen(_) => f.debug_struct("FromSeen").finish_non_exhaustive(),
        }
    }
}
