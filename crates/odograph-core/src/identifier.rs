//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based approach.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner backing all [`Id`] values.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Efficient identifier type using string interning
///
/// Identifiers name the nodes (entity types) and relations (navigation
/// links) of a topology. Interning makes them cheap to copy, compare, and
/// use as map keys, while keeping the original name available through
/// [`fmt::Display`].
///
/// # Examples
///
/// ```
/// use odograph_core::identifier::Id;
///
/// // Create identifiers from entity and relation names
/// let customer = Id::new("Customer");
/// let orders = Id::new("Customer_Orders");
///
/// // Create anonymous identifiers for unnamed relations
/// let anon = Id::from_anonymous(0);
///
/// assert_eq!(customer, "Customer");
/// assert_ne!(customer, orders);
/// assert_ne!(anon, customer);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// Interning the same string twice yields equal identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use odograph_core::identifier::Id;
    ///
    /// let entity_id = Id::new("Product");
    /// assert_eq!(entity_id, Id::new("Product"));
    /// ```
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Creates an internal `Id` identifier without a caller-supplied name.
    ///
    /// Useful for relations that carry no name of their own in the source
    /// model; distinct indices yield distinct identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use odograph_core::identifier::Id;
    ///
    /// let first = Id::from_anonymous(0);
    /// let second = Id::from_anonymous(1);
    /// assert_ne!(first, second);
    /// ```
    pub fn from_anonymous(idx: usize) -> Self {
        let name = format!("__{idx}");
        Self::new(&name)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = interner();
        let str_value = guard
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let guard = interner();
        let self_str = guard
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
