//! # Negotiator
//!
//! HTTP content negotiation: pick the best of the server's offers for a
//! client's `Accept`, `Accept-Language`, `Accept-Encoding` or
//! `Accept-Charset` header, honoring quality values and wildcards.
//!
//! ## Quick Start
//!
//! ```
//! use http::HeaderMap;
//! use http::header::ACCEPT_ENCODING;
//! use negotiator::Negotiator;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(ACCEPT_ENCODING, "gzip, compress;q=0.2, identity;q=0.5".parse().unwrap());
//!
//! let negotiator = Negotiator::new(&headers);
//! let selection = negotiator.select_encoding(["compress", "identity"]);
//!
//! assert_eq!(selection.offer, "identity");
//! assert!(selection.matched);
//! ```
//!
//! ## Crates
//!
//! - `negotiator-core`: header parser and offer selector, re-exported here
//! - this crate: [`Negotiator`] facade and [`HeaderSource`] adapters for
//!   `http` types and plain maps
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Axis`], [`PreferenceSpec`],
//!   [`ParsedPreferences`] and [`Selection`]

pub mod error;
pub mod header;
pub mod negotiator;

pub use error::{NegotiationError, NegotiationResult};
pub use header::HeaderSource;
pub use negotiator::Negotiator;

// Re-export core types so callers need a single dependency
pub use negotiator_core::{
	Axis, AxisParseError, DEFAULT_QUALITY, ParsedPreferences, PreferenceSpec, Selection, parser,
	selector,
};
