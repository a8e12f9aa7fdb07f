//! Russian numeral declension engine
//!
//! This crate renders cardinal and ordinal numbers as grammatically correct
//! Russian words, inflected for case, gender and number, and optionally
//! agreeing with an accompanying noun or currency.
//!
//! # Architecture
//!
//! - [`grammar`]: closed grammatical categories (case, gender, plurality,
//!   animacy) and the six-slot [`CaseForms`] container.
//! - [`ordinal`]: recursive decomposition of arbitrary-magnitude integers
//!   into named components and inflection of the dominant component.
//! - [`cardinal`]: six-case cardinal declension of integers and decimals.
//! - [`agreement`]: quantity/noun agreement, currency presets, and the
//!   embedded noun lexicon.
//! - [`protocol`]: the line-oriented request dispatcher used by the server.
//!
//! # Example
//!
//! ```rust
//! use sklon_core::{ordinal, Case, Gender, Plurality};
//!
//! let word = ordinal::decline(2000, Case::Nominative, Gender::Masculine, Plurality::Singular)
//!     .unwrap();
//! assert_eq!(word, "двухтысячный");
//! ```

#![warn(missing_docs)]

pub mod agreement;
pub mod cardinal;
pub mod error;
pub mod grammar;
pub mod ordinal;
pub mod protocol;

pub use error::{DeclineError, Result};
pub use grammar::{Animacy, Case, CaseForms, Gender, Plurality};
pub use protocol::{process_batch, process_record};
