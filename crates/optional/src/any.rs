use crate::comparable::Optional;
use crate::error::{NotSetError, not_set};

/// An optional value for any element type.
///
/// Works like [`Optional`] but places no `PartialEq` requirement on `V`, so it
/// can wrap structs holding floats, maps, trait objects and the like. Without
/// equality there is no notion of an "empty" value, which means no `is_empty`,
/// `set_not_empty` or `set_auto`.
///
/// Types that already carry their own absence (`Vec`, `HashMap`) rarely need
/// wrapping; this type earns its keep on custom structs.
///
/// ```
/// use optional::AnyOptional;
///
/// #[derive(Clone, Debug, Default)]
/// struct User {
///     id: u32,
///     names: Vec<String>,
/// }
///
/// let user = AnyOptional::<User>::default();
/// assert!(!user.is_set());
///
/// let user = user.set(User { id: 1, names: vec!["John".into()] });
/// assert_eq!(user.value().id, 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnyOptional<V> {
    value: V,
    is_set: bool,
}

impl<V> AnyOptional<V> {
    /// Constructs a container holding `value`.
    pub const fn new_set(value: V) -> Self {
        Self {
            value,
            is_set: true,
        }
    }

    /// Replaces the value and marks it set.
    #[must_use]
    pub fn set(&self, value: V) -> Self {
        Self::new_set(value)
    }

    /// Returns true if a value was explicitly set.
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Borrows the stored value. Yields `V::default()` when not set.
    pub fn get(&self) -> &V {
        &self.value
    }

    /// Returns a reference to the value if it is set, `None` otherwise.
    pub fn ptr(&self) -> Option<&V> {
        if self.is_set { Some(&self.value) } else { None }
    }

    /// Consumes the container, returning `Some` only if the value is set.
    pub fn into_option(self) -> Option<V> {
        if self.is_set { Some(self.value) } else { None }
    }
}

impl<V: Default> AnyOptional<V> {
    /// Constructs a container with no value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constructs a container from a value and an explicit presence flag.
    ///
    /// `AnyOptional::new(v, false)` stores `V::default()`, never `v`, so an
    /// unset container cannot carry a stale value.
    pub fn new(value: V, is_set: bool) -> Self {
        if is_set {
            Self::new_set(value)
        } else {
            Self::empty()
        }
    }

    /// Resets the value to the default and clears the flag.
    #[must_use]
    pub fn unset(&self) -> Self {
        Self::empty()
    }
}

impl<V: Clone + Default> AnyOptional<V> {
    /// Constructs a container from a borrowed value; `None` gives an empty one.
    pub fn from_ptr(ptr: Option<&V>) -> Self {
        match ptr {
            Some(value) => Self::new_set(value.clone()),
            None => Self::empty(),
        }
    }

    /// Sets from a borrowed value. `None` unsets.
    #[must_use]
    pub fn set_ptr(&self, ptr: Option<&V>) -> Self {
        Self::from_ptr(ptr)
    }

    /// Sets `value` only if nothing is set yet.
    #[must_use]
    pub fn set_default(&self, value: V) -> Self {
        if self.is_set {
            return self.clone();
        }
        Self::new_set(value)
    }

    /// Returns the value, or `V::default()` if it is not set.
    pub fn value(&self) -> V {
        self.value.clone()
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with [`NotSetError`] if the value is not set.
    #[track_caller]
    pub fn must_value(&self) -> V {
        if !self.is_set {
            not_set();
        }
        self.value.clone()
    }

    /// Returns the value, or [`NotSetError`] if it is not set.
    pub fn try_value(&self) -> Result<V, NotSetError> {
        if self.is_set {
            Ok(self.value.clone())
        } else {
            Err(NotSetError)
        }
    }
}

impl<V: Default> From<Option<V>> for AnyOptional<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(value) => Self::new_set(value),
            None => Self::empty(),
        }
    }
}

impl<V> From<AnyOptional<V>> for Option<V> {
    fn from(value: AnyOptional<V>) -> Self {
        value.into_option()
    }
}

// Forgetting the comparable bound keeps both the value and the flag.
impl<V: Default> From<Optional<V>> for AnyOptional<V> {
    fn from(value: Optional<V>) -> Self {
        value.into_option().into()
    }
}
