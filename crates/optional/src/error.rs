use core::fmt;

/// Returned (or its text raised as a panic) when a value is read from a
/// container that was never set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotSetError;

impl fmt::Display for NotSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value is not set")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotSetError {}

/// Aborts the current thread with the [`NotSetError`] message.
#[cold]
#[track_caller]
pub(crate) fn not_set() -> ! {
    panic!("{}", NotSetError)
}
