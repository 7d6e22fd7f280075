use core::fmt;

/// A value that is either present (`Some`) or explicitly absent (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum O<T> {
    Some(T),
    None,
}

impl<T> O<T> {
    /// Constructs an `O::Some(val)` variant.
    pub fn some(val: T) -> Self {
        O::Some(val)
    }

    /// Constructs an `O::None` variant.
    pub fn none() -> Self {
        O::None
    }

    /// Returns true if a value is held.
    pub fn present(&self) -> bool {
        matches!(self, O::Some(_))
    }

    /// Returns true if no value is held.
    pub fn absent(&self) -> bool {
        matches!(self, O::None)
    }

    /// Unwraps the value.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent. Check [`O::present`] first or use
    /// one of the `value_or*` accessors.
    pub fn value(self) -> T {
        match self {
            O::Some(val) => val,
            O::None => panic!("called `O::value()` on an absent value"),
        }
    }

    /// Unwraps the value, panicking with `msg` if it is absent.
    pub fn expect(self, msg: &str) -> T {
        match self {
            O::Some(val) => val,
            O::None => panic!("{msg}"),
        }
    }

    /// Returns the value if present, otherwise `fallback`.
    pub fn value_or(self, fallback: T) -> T {
        match self {
            O::Some(val) => val,
            O::None => fallback,
        }
    }

    /// Returns the value if present, otherwise the result of `supplier`.
    ///
    /// `supplier` only runs when the value is absent.
    pub fn value_or_by<F: FnOnce() -> T>(self, supplier: F) -> T {
        match self {
            O::Some(val) => val,
            O::None => supplier(),
        }
    }

    /// Returns `self` if present, otherwise `other`.
    pub fn alt(self, other: O<T>) -> O<T> {
        match self {
            O::Some(_) => self,
            O::None => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `supplier`.
    ///
    /// Chains of `alt_by` try each source in order and stop at the first
    /// present one.
    pub fn alt_by<F: FnOnce() -> O<T>>(self, supplier: F) -> O<T> {
        match self {
            O::Some(_) => self,
            O::None => supplier(),
        }
    }

    /// Maps `O<T>` to `O<U>` by applying `f` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> O<U> {
        match self {
            O::Some(val) => O::Some(f(val)),
            O::None => O::None,
        }
    }

    /// Converts from `&O<T>` to `O<&T>`.
    pub fn as_ref(&self) -> O<&T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => O::None,
        }
    }

    /// Converts from `&mut O<T>` to `O<&mut T>`.
    pub fn as_mut(&mut self) -> O<&mut T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => O::None,
        }
    }
}

impl<T> Default for O<T> {
    fn default() -> Self {
        O::None
    }
}

/// Renders `Some(<value as Debug>)` or `None`.
impl<T: fmt::Debug> fmt::Display for O<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            O::Some(val) => write!(f, "Some({val:?})"),
            O::None => f.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for O<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(val) => O::Some(val),
            None => O::None,
        }
    }
}

impl<T> From<O<T>> for Option<T> {
    fn from(opt: O<T>) -> Self {
        match opt {
            O::Some(val) => Some(val),
            O::None => None,
        }
    }
}
