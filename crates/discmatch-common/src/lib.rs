//! Discmatch-Common: Shared types, errors, and lookup tables.
//!
//! This crate provides the data model shared by the discmatch engine and its
//! callers:
//!
//! - **Local disc spec**: What the local probe knows about the disc being uploaded
//! - **Candidate releases**: Catalog listings handed over by the fetch layer
//! - **Selection result**: The metadata written back once a release is accepted
//! - **Error Handling**: Common error types and result aliases
//! - **Regions**: Catalog country name to three-letter region code table
//!
//! # Examples
//!
//! ```
//! use discmatch_common::{region_code_for_country, Error, Result};
//!
//! assert_eq!(region_code_for_country("United Kingdom"), Some("GBR"));
//!
//! fn example() -> Result<()> {
//!     Err(Error::configuration("single_threshold must be finite"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod region;
pub mod types;

pub use error::{Error, Result};
pub use region::region_code_for_country;
pub use types::*;
