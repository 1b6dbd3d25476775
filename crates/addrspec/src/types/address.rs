//! Email address types.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::scan;

/// A syntactically valid email address.
///
/// The only way to obtain an `Address` is through validation, so holding
/// one guarantees [`is_valid`](crate::is_valid) accepted its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    addr: String,
    /// Byte offset of the domain part, one past the separating `@`.
    domain_offset: usize,
}

impl Address {
    /// Creates a new address from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if the address is invalid.
    pub fn new(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        let Some(domain_offset) = scan::split(&addr) else {
            tracing::debug!(%addr, "rejected email address");
            return Err(Error::InvalidAddress(addr));
        };
        Ok(Self {
            addr,
            domain_offset,
        })
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.addr
    }

    /// Returns the local part, everything before the separating `@`.
    ///
    /// Quotes, escapes and comments are returned verbatim.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.addr[..self.domain_offset - 1]
    }

    /// Returns the domain part, everything after the separating `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.addr[self.domain_offset..]
    }

    /// Consumes the address and returns the underlying string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.addr
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.addr)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.addr
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Address {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Address {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.addr
    }
}

impl PartialEq<str> for Address {
    fn eq(&self, other: &str) -> bool {
        self.addr == other
    }
}

impl PartialEq<&str> for Address {
    fn eq(&self, other: &&str) -> bool {
        self.addr == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.addr)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let addr = String::deserialize(deserializer)?;
        Self::new(addr).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address() {
        let addr = Address::new("user@example.com").unwrap();
        assert_eq!(addr.as_str(), "user@example.com");
        assert_eq!(addr.local_part(), "user");
        assert_eq!(addr.domain(), "example.com");
    }

    #[test]
    fn test_quoted_local_part_with_at() {
        let addr = Address::new("\"a@b\"@example.com").unwrap();
        assert_eq!(addr.local_part(), "\"a@b\"");
        assert_eq!(addr.domain(), "example.com");
    }

    #[test]
    fn test_international_domain() {
        let addr = Address::new("user@bücher.example").unwrap();
        assert_eq!(addr.local_part(), "user");
        assert_eq!(addr.domain(), "bücher.example");
    }

    #[test]
    fn test_invalid_address_no_at() {
        assert!(Address::new("userexample.com").is_err());
    }

    #[test]
    fn test_invalid_address_empty() {
        assert_eq!(Address::new(""), Err(Error::InvalidAddress(String::new())));
    }

    #[test]
    fn test_invalid_address_empty_local() {
        assert!(Address::new("@example.com").is_err());
    }

    #[test]
    fn test_invalid_address_empty_domain() {
        assert!(Address::new("user@").is_err());
    }

    #[test]
    fn test_error_keeps_input() {
        let err = Address::new("user..name@example.com").unwrap_err();
        assert_eq!(err.input(), "user..name@example.com");
    }

    #[test]
    fn test_conversions() {
        let addr: Address = "user@example.com".parse().unwrap();
        assert_eq!(addr, "user@example.com");
        assert_eq!(addr.to_string(), "user@example.com");
        assert_eq!(addr.as_ref(), "user@example.com");

        let owned = Address::try_from(String::from("a@b.c")).unwrap();
        assert_eq!(String::from(owned.clone()), "a@b.c");
        assert_eq!(owned.into_inner(), "a@b.c");

        assert!(Address::try_from("a b@c").is_err());
    }
}
