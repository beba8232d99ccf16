//! Negotiation axes and their header configuration
//!
//! Every axis is negotiated by the same parser and selector; they differ
//! only in the header they read and in the shape of their wildcard.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::parser;
use crate::preference::ParsedPreferences;

/// The `Accept` header name
pub const ACCEPT: &str = "Accept";
/// The `Accept-Language` header name
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";
/// The `Accept-Encoding` header name
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
/// The `Accept-Charset` header name
pub const ACCEPT_CHARSET: &str = "Accept-Charset";

/// Wildcard token of an axis.
///
/// `*/*` when values are `type/subtype` pairs, `*` otherwise.
pub const fn wildcard_for(allows_slash_structure: bool) -> &'static str {
	if allows_slash_structure { "*/*" } else { "*" }
}

/// One of the four negotiable header families
///
/// # Examples
///
/// ```
/// use negotiator_core::Axis;
///
/// assert_eq!(Axis::MediaType.header_name(), "Accept");
/// assert_eq!(Axis::MediaType.wildcard(), "*/*");
/// assert!(Axis::MediaType.allows_slash_structure());
///
/// let axis: Axis = "accept-language".parse().unwrap();
/// assert_eq!(axis, Axis::Language);
/// assert_eq!(axis.wildcard(), "*");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(rename_all = "snake_case")
)]
pub enum Axis {
	/// `Accept`: media types such as `text/html`
	MediaType,
	/// `Accept-Language`: language tags such as `en-us`
	Language,
	/// `Accept-Encoding`: content codings such as `gzip`
	Encoding,
	/// `Accept-Charset`: character sets such as `utf-8`
	Charset,
}

impl Axis {
	pub const ALL: [Axis; 4] = [Axis::MediaType, Axis::Language, Axis::Encoding, Axis::Charset];

	pub const fn header_name(self) -> &'static str {
		match self {
			Axis::MediaType => ACCEPT,
			Axis::Language => ACCEPT_LANGUAGE,
			Axis::Encoding => ACCEPT_ENCODING,
			Axis::Charset => ACCEPT_CHARSET,
		}
	}

	/// Whether values of this axis are `type/subtype` pairs
	pub const fn allows_slash_structure(self) -> bool {
		matches!(self, Axis::MediaType)
	}

	pub const fn wildcard(self) -> &'static str {
		wildcard_for(self.allows_slash_structure())
	}

	/// Parses a raw header value with this axis' configuration
	pub fn parse_header(self, header_value: &str) -> ParsedPreferences {
		parser::parse(header_value, self.allows_slash_structure())
	}
}

impl fmt::Display for Axis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.header_name())
	}
}

/// Error returned when a string names no known axis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown negotiation axis: {0}")]
pub struct AxisParseError(pub String);

/// Accepts header names (`Accept-Charset`) and axis names (`charset`),
/// case-insensitively.
impl FromStr for Axis {
	type Err = AxisParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim().to_ascii_lowercase();
		match name.as_str() {
			"accept" | "type" | "media_type" | "media-type" | "mediatype" => Ok(Axis::MediaType),
			"accept-language" | "language" => Ok(Axis::Language),
			"accept-encoding" | "encoding" => Ok(Axis::Encoding),
			"accept-charset" | "charset" => Ok(Axis::Charset),
			_ => Err(AxisParseError(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Axis::MediaType, "Accept", "*/*", true)]
	#[case(Axis::Language, "Accept-Language", "*", false)]
	#[case(Axis::Encoding, "Accept-Encoding", "*", false)]
	#[case(Axis::Charset, "Accept-Charset", "*", false)]
	fn test_axis_table(
		#[case] axis: Axis,
		#[case] header: &str,
		#[case] wildcard: &str,
		#[case] slash: bool,
	) {
		assert_eq!(axis.header_name(), header);
		assert_eq!(axis.wildcard(), wildcard);
		assert_eq!(axis.allows_slash_structure(), slash);
		assert_eq!(axis.to_string(), header);
	}

	#[rstest]
	#[case("Accept", Axis::MediaType)]
	#[case("media_type", Axis::MediaType)]
	#[case("ACCEPT-LANGUAGE", Axis::Language)]
	#[case(" encoding ", Axis::Encoding)]
	#[case("Accept-Charset", Axis::Charset)]
	fn test_axis_from_str(#[case] input: &str, #[case] expected: Axis) {
		assert_eq!(input.parse::<Axis>(), Ok(expected));
	}

	#[rstest]
	fn test_axis_from_str_unknown() {
		let err = "Accept-Ranges".parse::<Axis>().unwrap_err();
		assert_eq!(err, AxisParseError("Accept-Ranges".to_string()));
		assert_eq!(err.to_string(), "Unknown negotiation axis: Accept-Ranges");
	}

	#[rstest]
	fn test_header_names_round_trip_through_from_str() {
		for axis in Axis::ALL {
			assert_eq!(axis.header_name().parse::<Axis>(), Ok(axis));
		}
	}

	#[rstest]
	fn test_parse_header_uses_axis_wildcard() {
		assert_eq!(Axis::MediaType.parse_header("").as_slice()[0].value, "*/*");
		assert_eq!(Axis::Encoding.parse_header("").as_slice()[0].value, "*");
	}
}
