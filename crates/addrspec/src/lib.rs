//! # addrspec
//!
//! Syntactic validation of email addresses following a pragmatic reading of
//! the RFC 5321/5322 `addr-spec` grammar.
//!
//! ## Features
//!
//! - **Single pass**: one left-to-right scan with no backtracking and no parse
//!   tree, linear in the input length
//! - **Quoted local parts**: `"john doe"@example.com`, with `\` escapes
//! - **Comments**: nested `(...)` comments, checked for balance
//! - **Internationalized domains**: Unicode letters and digits in domain labels
//! - **Length limits**: 254 characters overall, 64 for the local part, 63 per
//!   domain label
//!
//! Validation is purely syntactic: nothing is normalized, no punycode
//! conversion is done and no DNS or mailbox check is made.
//!
//! ## Quick Start
//!
//! ```
//! use addrspec::{is_valid, Address};
//!
//! assert!(is_valid("user@example.com"));
//! assert!(!is_valid("user@-example.com"));
//!
//! let addr = Address::new("\"quoted user\"@example.com")?;
//! assert_eq!(addr.local_part(), "\"quoted user\"");
//! assert_eq!(addr.domain(), "example.com");
//! # Ok::<(), addrspec::Error>(())
//! ```
//!
//! ## Cargo features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Address`]. Deserialization
//!   validates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod domain;
mod error;
mod scan;
pub mod types;

pub use error::{Error, Result};
pub use scan::is_valid;
pub use types::Address;

/// Maximum length of a whole address, in characters.
pub const MAX_ADDRESS_LEN: usize = 254;

/// Maximum length of the local part, in characters.
pub const MAX_LOCAL_PART_LEN: usize = 64;

/// Maximum length of a single domain label, in characters.
pub const MAX_LABEL_LEN: usize = 63;
