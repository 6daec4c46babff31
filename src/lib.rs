//! Case-insensitive word lookup over interchangeable storage backends.
//!
//! A [`Dictionary`] is built for one [`BackendKind`], loaded once from a
//! whitespace-delimited word file and then queried with `check`.

pub mod backend;
pub mod bench;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod lexer;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod validation;

pub use backend::Backend;
pub use dictionary::{BackendKind, Dictionary};
pub use error::{ConfigError, DictionaryError};
pub use normalize::normalize;
pub use validation::is_valid;
