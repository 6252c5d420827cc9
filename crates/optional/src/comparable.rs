use crate::error::{NotSetError, not_set};

/// An optional value for element types that can be compared for equality.
///
/// `Optional<V>` stores the value inline next to a presence flag, so
/// `Optional<u16>` set to `0` and an untouched `Optional<u16>` stay distinguishable
/// without boxing or reaching for `Option<Option<_>>` in config structs.
///
/// While the flag is clear the stored value is always `V::default()`; every
/// constructor and setter keeps that true.
///
/// Setters never touch `self`. They return the updated container and the caller
/// reassigns it:
///
/// ```
/// use optional::Optional;
///
/// let name = Optional::<String>::empty();
/// let name = name.set_not_empty(String::new());
/// assert!(!name.is_set());
///
/// let name = name.set_not_empty("AppName".to_string());
/// assert_eq!(name.value(), "AppName");
/// ```
///
/// "Empty" means equal to `V::default()`, nothing more. A struct whose fields are
/// all defaults counts as empty whatever it means to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Optional<V> {
    value: V,
    is_set: bool,
}

impl<V> Optional<V> {
    /// Constructs a container holding `value`.
    pub const fn new_set(value: V) -> Self {
        Self {
            value,
            is_set: true,
        }
    }

    /// Replaces the value and marks it set, whatever the current state.
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
    ///
    /// This is the bridge to APIs that model optionality with `Option`, e.g. a
    /// serde struct with `skip_serializing_if = "Option::is_none"`.
    pub fn ptr(&self) -> Option<&V> {
        if self.is_set { Some(&self.value) } else { None }
    }

    /// Consumes the container, returning `Some` only if the value is set.
    pub fn into_option(self) -> Option<V> {
        if self.is_set { Some(self.value) } else { None }
    }
}

impl<V: Default> Optional<V> {
    /// Constructs a container with no value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constructs a container from a value and an explicit presence flag.
    ///
    /// When `is_set` is false the given value is dropped and the default is
    /// stored instead.
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

impl<V: Clone + Default> Optional<V> {
    /// Constructs a container from a borrowed value; `None` gives an empty one.
    ///
    /// Meant for owned element types. If `V` is itself a shared handle (`Rc`,
    /// `Arc`) only the handle is cloned.
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
    ///
    /// Used to fill in fallbacks without overwriting explicit configuration.
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
    /// Panics with [`NotSetError`] if the value is not set. Reading an unset
    /// value here is a bug in the caller; use [`Optional::value`] or
    /// [`Optional::try_value`] when absence is expected.
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

impl<V: PartialEq + Default> Optional<V> {
    /// Constructs a set container unless `value` is the default, in which case
    /// the container is empty.
    pub fn new_set_not_empty(value: V) -> Self {
        if value == V::default() {
            Self::empty()
        } else {
            Self::new_set(value)
        }
    }

    /// Returns true if the stored value equals `V::default()`.
    ///
    /// The flag is ignored: an unset container and one explicitly set to the
    /// default both report empty. Use [`Optional::is_set`] to tell them apart.
    pub fn is_empty(&self) -> bool {
        self.value == V::default()
    }

    /// Stores `value`, setting the flag only when it is not the default.
    ///
    /// Unlike [`Optional::set_not_empty`] the value is written either way.
    #[must_use]
    pub fn set_auto(&self, value: V) -> Self {
        let is_set = value != V::default();
        Self { value, is_set }
    }
}

impl<V: Clone + PartialEq + Default> Optional<V> {
    /// Same as [`Optional::set`], but a default `value` leaves the container
    /// unchanged.
    #[must_use]
    pub fn set_not_empty(&self, value: V) -> Self {
        if value == V::default() {
            return self.clone();
        }
        Self::new_set(value)
    }
}

impl<V: Default> From<Option<V>> for Optional<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(value) => Self::new_set(value),
            None => Self::empty(),
        }
    }
}

impl<V> From<Optional<V>> for Option<V> {
    fn from(value: Optional<V>) -> Self {
        value.into_option()
    }
}
