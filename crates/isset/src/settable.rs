//! `Settable<T>` — a value paired with a flag recording whether it was set.

/// A scalar that remembers whether it was explicitly assigned.
///
/// The default state is unset with `T::default()` as the value. Mutators
/// return a new container instead of changing the receiver, so a field is
/// updated by assigning the result back:
///
/// ```
/// use isset::Int;
///
/// let mut retries = Int::default();
/// assert!(!retries.is_set());
///
/// retries = retries.set(0);
/// assert!(retries.is_set());
/// assert_eq!(retries.value(), 0);
///
/// retries = retries.unset();
/// assert!(!retries.is_set());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Settable<T> {
    value: T,
    is_set: bool,
}

impl<T: Default> Settable<T> {
    /// An unset container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a container holding `value`, marked as set.
    ///
    /// Setting `T`'s zero value still marks the container as set.
    #[must_use]
    pub fn set(&self, value: T) -> Self {
        Self {
            value,
            is_set: true,
        }
    }

    /// Returns an unset container holding `T::default()`.
    #[must_use]
    pub fn unset(&self) -> Self {
        Self::default()
    }

    pub(crate) fn assign(&mut self, value: T) {
        self.value = value;
        self.is_set = true;
    }

    pub(crate) fn clear(&mut self) {
        self.value = T::default();
        self.is_set = false;
    }
}

impl<T> Settable<T> {
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Negation of [`is_set`](Self::is_set), for
    /// `#[serde(skip_serializing_if = "Settable::is_unset")]`.
    pub fn is_unset(&self) -> bool {
        !self.is_set
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn as_option(&self) -> Option<&T> {
        self.is_set.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.is_set.then_some(self.value)
    }

    /// The stored value if set, `default` otherwise.
    pub fn value_or(self, default: T) -> T {
        if self.is_set {
            self.value
        } else {
            default
        }
    }
}

impl<T: Clone> Settable<T> {
    /// The stored value; `T::default()` when unset.
    pub fn value(&self) -> T {
        self.value.clone()
    }
}

impl<T> From<T> for Settable<T> {
    fn from(value: T) -> Self {
        Self {
            value,
            is_set: true,
        }
    }
}

impl<T: Default> From<Option<T>> for Settable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::default(),
        }
    }
}
