//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based approach.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning
///
/// Node and cluster names are interned once and compared as symbols, so
/// identifiers are `Copy` and cheap to pass around while the diagram is
/// being assembled.
///
/// # Examples
///
/// ```
/// use archviz_core::identifier::Id;
///
/// let api_service = Id::new("api_service");
/// let same = Id::new("api_service");
/// assert_eq!(api_service, same);
/// assert_eq!(api_service.to_string(), "api_service");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get()
            .expect("Interner is initialized before any Id exists")
            .lock()
            .expect("Failed to acquire interner lock");
        let name = interner
            .resolve(self.0)
            .expect("Symbol was interned by Id::new");
        write!(f, "{name}")
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interned_ids_compare_equal() {
        let a = Id::new("postgres");
        let b = Id::new("postgres");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_names_produce_distinct_ids() {
        assert_ne!(Id::new("user_repo"), Id::new("goal_repo"));
    }

    #[test]
    fn display_resolves_original_name() {
        let id = Id::new("jwt_filter");
        assert_eq!(id, "jwt_filter");
    }
}
