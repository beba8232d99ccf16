//! # Negotiator Core
//!
//! Header parsing and offer selection shared by every content negotiation
//! axis: `Accept`, `Accept-Language`, `Accept-Encoding` and `Accept-Charset`.
//!
//! - [`parser::parse`] turns a raw header value into [`ParsedPreferences`]
//! - [`selector::select`] picks the best offer for those preferences
//! - [`Axis`] holds the per-header configuration (header name, wildcard,
//!   `type/subtype` structure)
//!
//! Everything here is a pure function of its inputs. Header storage and
//! retrieval belong to the caller.
//!
//! ## Example
//!
//! ```
//! use negotiator_core::{Axis, selector::select};
//!
//! let specs = Axis::Encoding.parse_header("gzip, compress;q=0.2, identity;q=0.5");
//! let selection = select(["compress", "identity"], &specs, Axis::Encoding.allows_slash_structure());
//!
//! assert_eq!(selection.offer, "identity");
//! assert!(selection.matched);
//! ```

pub mod axis;
pub mod parser;
pub mod preference;
pub mod selector;

pub use axis::{Axis, AxisParseError};
pub use preference::{DEFAULT_QUALITY, ParsedPreferences, PreferenceSpec};
pub use selector::Selection;
