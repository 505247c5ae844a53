#![forbid(unsafe_code)]
//! ENSIP-15 ENS name normalization.
//!
//! Maps arbitrary user-supplied names to their canonical Ethereum Name
//! Service form, rejecting inputs that are structurally illegal, visually
//! confusable or script-mixing. Three operations:
//!
//! - [`normalize`] — canonicalize, or fail with the first violation;
//! - [`beautify`] — canonicalize for display, keeping fully-qualified emoji
//!   and presentational variants;
//! - [`tokenize`] — always-succeeding diagnostic decomposition.
//!
//! ```
//! use ensnorm::EnsNameNormalizer;
//!
//! let normalizer = EnsNameNormalizer::new();
//! assert_eq!(normalizer.normalize("Hello.ETH").unwrap(), "hello.eth");
//! assert!(normalizer.normalize("ab--cd").is_err());
//! ```
//!
//! The compiled character tables are built once per
//! [`EnsNameNormalizer`]; processing itself is pure, synchronous and safe
//! for unbounded concurrent use.

pub mod emoji;
pub mod error;
pub mod nfc;
pub mod normalizer;
pub mod tables;
pub mod tokens;

// Internal only
mod tokenize;
mod utils;
mod validate;

pub use error::{ProcessError, TableError};
pub use normalizer::{EnsNameNormalizer, beautify, normalize, tokenize};
pub use tables::{CharClass, Tables};
pub use tokens::{Label, LabelKind, Token, TokenizedName};
pub use utils::{cps_to_string, filter_fe0f, str_to_cps};

/// A Unicode scalar value as the pipeline handles it.
pub type CodePoint = u32;

#[cfg(test)]
mod tests {
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
