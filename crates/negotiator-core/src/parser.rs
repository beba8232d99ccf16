//! `Accept*` header value parsing
//!
//! Parsing is permissive: a token that cannot be understood is skipped and
//! the rest of the header is still used. Skipped tokens are reported through
//! `tracing` at `trace` level only.

use thiserror::Error;
use tracing::trace;

use crate::axis::wildcard_for;
use crate::preference::{DEFAULT_QUALITY, ParsedPreferences, PreferenceSpec};

const QUALITY_PREFIX: &str = "q=";
/// Legacy alias for `q=`
const LEVEL_PREFIX: &str = "level=";

/// Why a header token was skipped
#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum TokenError {
	#[error("empty value")]
	EmptyValue,
	#[error("more than one parameter")]
	TooManyParameters,
	#[error("value has no type/subtype slash")]
	MissingSlash,
	#[error("unsupported parameter `{0}`")]
	UnsupportedParameter(String),
	#[error("invalid quality `{0}`")]
	InvalidQuality(String),
	#[error("rejected with zero quality")]
	Rejected,
}

/// Parses a raw header value into preferences, most preferred first.
///
/// The header is lowercased and stripped of all whitespace first. An empty
/// header means "anything goes" and yields the single wildcard entry of the
/// axis (`*/*` when `allows_slash_structure`, `*` otherwise).
///
/// Entries with `q=0` are explicit rejections and never appear in the
/// result, so the result may be empty.
///
/// # Examples
///
/// ```
/// use negotiator_core::parser::parse;
///
/// let prefs = parse("application/json;q=0.2, text/html", true);
/// assert_eq!(prefs.as_slice()[0].value, "text/html");
/// assert_eq!(prefs.as_slice()[1].quality, 0.2);
///
/// let prefs = parse("", false);
/// assert_eq!(prefs.as_slice()[0].value, "*");
///
/// assert!(parse("gzip;q=0", false).is_empty());
/// ```
pub fn parse(header_value: &str, allows_slash_structure: bool) -> ParsedPreferences {
	let normalized = header_value
		.split_whitespace()
		.collect::<String>()
		.to_lowercase();

	if normalized.is_empty() {
		return ParsedPreferences::from_unsorted(vec![PreferenceSpec::new(
			wildcard_for(allows_slash_structure),
			DEFAULT_QUALITY,
		)]);
	}

	let specs = normalized
		.split(',')
		.filter_map(|token| match parse_token(token, allows_slash_structure) {
			Ok(spec) => Some(spec),
			Err(reason) => {
				trace!(token, %reason, "skipping preference token");
				None
			}
		})
		.collect();

	ParsedPreferences::from_unsorted(specs)
}

/// Parses one normalized `value[;q=<float>]` token
fn parse_token(token: &str, allows_slash_structure: bool) -> Result<PreferenceSpec, TokenError> {
	let mut parts = token.split(';');
	let value = parts.next().unwrap_or_default();
	let param = parts.next();

	if parts.next().is_some() {
		return Err(TokenError::TooManyParameters);
	}
	if value.is_empty() {
		return Err(TokenError::EmptyValue);
	}
	if allows_slash_structure && !value.contains('/') {
		return Err(TokenError::MissingSlash);
	}

	let quality = match param {
		Some(param) => parse_quality(param)?,
		None => DEFAULT_QUALITY,
	};

	Ok(PreferenceSpec::new(value, quality))
}

fn parse_quality(param: &str) -> Result<f64, TokenError> {
	let raw = param
		.strip_prefix(QUALITY_PREFIX)
		.or_else(|| param.strip_prefix(LEVEL_PREFIX))
		.ok_or_else(|| TokenError::UnsupportedParameter(param.to_string()))?;

	let quality: f64 = raw
		.parse()
		.map_err(|_| TokenError::InvalidQuality(raw.to_string()))?;

	if quality.is_nan() {
		return Err(TokenError::InvalidQuality(raw.to_string()));
	}
	if quality == 0.0 {
		return Err(TokenError::Rejected);
	}
	if quality < 0.0 {
		return Err(TokenError::InvalidQuality(raw.to_string()));
	}

	Ok(quality.min(DEFAULT_QUALITY))
}
