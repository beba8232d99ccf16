//! Content negotiation against a request's headers

use negotiator_core::selector;
use negotiator_core::{Axis, ParsedPreferences, Selection};
use tracing::debug;

use crate::error::{NegotiationError, NegotiationResult};
use crate::header::HeaderSource;

/// Negotiates media type, language, encoding and charset for one request
///
/// The negotiator only reads headers; every call parses the current header
/// value afresh and keeps nothing between calls.
///
/// # Examples
///
/// ```
/// use http::HeaderMap;
/// use http::header::{ACCEPT, ACCEPT_LANGUAGE};
/// use negotiator::Negotiator;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(ACCEPT, "text/html, application/*;q=0.9, image/jpeg;q=0.8".parse().unwrap());
/// headers.insert(ACCEPT_LANGUAGE, "en;q=0.8, es, pt".parse().unwrap());
///
/// let negotiator = Negotiator::new(&headers);
///
/// let selection = negotiator.select_type(["application/json", "image/jpeg", "text/plain"]);
/// assert_eq!(selection.offer, "application/json");
/// assert!(selection.matched);
///
/// let selection = negotiator.select_language(["en", "es", "fr"]);
/// assert_eq!(selection.offer, "es");
///
/// // No Accept-Encoding header: anything is acceptable.
/// assert_eq!(negotiator.select_encoding(["br", "gzip"]).offer, "br");
/// ```
#[derive(Debug, Clone)]
pub struct Negotiator<H> {
	headers: H,
}

impl<H: HeaderSource> Negotiator<H> {
	pub fn new(headers: H) -> Self {
		Self { headers }
	}

	pub fn headers(&self) -> &H {
		&self.headers
	}

	pub fn into_inner(self) -> H {
		self.headers
	}

	/// Raw value of the axis' header, empty when absent
	fn raw_header(&self, axis: Axis) -> String {
		self.headers
			.header(axis.header_name())
			.map(|value| value.into_owned())
			.unwrap_or_default()
	}

	/// Parsed client preferences for `axis`, most preferred first
	///
	/// # Examples
	///
	/// ```
	/// use std::collections::HashMap;
	/// use negotiator::{Axis, Negotiator};
	///
	/// let headers = HashMap::from([("Accept-Encoding".to_string(), "br;q=0.5, gzip".to_string())]);
	/// let negotiator = Negotiator::new(headers);
	///
	/// let preferences = negotiator.preferences(Axis::Encoding);
	/// assert_eq!(preferences.to_string(), "gzip,br;q=0.5");
	///
	/// // An absent header accepts anything.
	/// assert_eq!(negotiator.preferences(Axis::Charset).to_string(), "*");
	/// ```
	pub fn preferences(&self, axis: Axis) -> ParsedPreferences {
		axis.parse_header(&self.raw_header(axis))
	}

	/// Selects the best of `offers` on any axis
	///
	/// With no offers the client's most preferred value is returned, with
	/// `matched` set only when that value is not a wildcard.
	pub fn select<I, S>(&self, axis: Axis, offers: I) -> Selection
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let preferences = self.preferences(axis);
		let selection = selector::select(offers, &preferences, axis.allows_slash_structure());

		debug!(
			header = axis.header_name(),
			%preferences,
			offer = %selection.offer,
			matched = selection.matched,
			"negotiated"
		);

		selection
	}

	/// Selects a media type from the `Accept` header
	pub fn select_type<I, S>(&self, offers: I) -> Selection
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.select(Axis::MediaType, offers)
	}

	/// Selects a language from the `Accept-Language` header
	pub fn select_language<I, S>(&self, offers: I) -> Selection
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.select(Axis::Language, offers)
	}

	/// Selects a content coding from the `Accept-Encoding` header
	pub fn select_encoding<I, S>(&self, offers: I) -> Selection
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.select(Axis::Encoding, offers)
	}

	/// Selects a charset from the `Accept-Charset` header
	pub fn select_charset<I, S>(&self, offers: I) -> Selection
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.select(Axis::Charset, offers)
	}

	/// Like [`select`](Self::select), but fails when nothing matched
	///
	/// # Examples
	///
	/// ```
	/// use http::{HeaderMap, StatusCode};
	/// use http::header::ACCEPT_CHARSET;
	/// use negotiator::{Axis, Negotiator};
	///
	/// let mut headers = HeaderMap::new();
	/// headers.insert(ACCEPT_CHARSET, "utf-8, iso-8859-1;q=0.8".parse().unwrap());
	/// let negotiator = Negotiator::new(headers);
	///
	/// assert_eq!(negotiator.require(Axis::Charset, ["UTF-8"]).unwrap(), "UTF-8");
	///
	/// let err = negotiator.require(Axis::Charset, ["ISO-8859-5"]).unwrap_err();
	/// assert_eq!(err.status_code(), StatusCode::NOT_ACCEPTABLE);
	/// ```
	pub fn require<I, S>(&self, axis: Axis, offers: I) -> NegotiationResult<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.select(axis, offers)
			.into_option()
			.ok_or_else(|| NegotiationError::NotAcceptable {
				axis,
				header: self.raw_header(axis),
			})
	}

	pub fn require_type<I, S>(&self, offers: I) -> NegotiationResult<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.require(Axis::MediaType, offers)
	}

	pub fn require_language<I, S>(&self, offers: I) -> NegotiationResult<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.require(Axis::Language, offers)
	}

	pub fn require_encoding<I, S>(&self, offers: I) -> NegotiationResult<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.require(Axis::Encoding, offers)
	}

	pub fn require_charset<I, S>(&self, offers: I) -> NegotiationResult<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.require(Axis::Charset, offers)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::HeaderMap;
	use http::header::{ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, ACCEPT_LANGUAGE, HeaderValue};
	use rstest::{fixture, rstest};

	#[fixture]
	fn headers() -> HeaderMap {
		let mut headers = HeaderMap::new();
		headers.insert(
			ACCEPT,
			HeaderValue::from_static("text/html, application/*;q=0.9, image/jpeg;q=0.8"),
		);
		headers.insert(
			ACCEPT_ENCODING,
			HeaderValue::from_static("gzip, compress;q=0.2, identity;q=0.5"),
		);
		headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en;q=0.8, es, pt"));
		headers.insert(
			ACCEPT_CHARSET,
			HeaderValue::from_static("utf-8, iso-8859-1;q=0.8, utf-7;q=0.2"),
		);
		headers
	}

	#[rstest]
	fn test_select_type(headers: HeaderMap) {
		let negotiator = Negotiator::new(headers);

		assert_eq!(
			negotiator.select_type(["text/html", "application/json", "image/jpeg"]),
			Selection::matched("text/html")
		);
		assert_eq!(
			negotiator.select_type(["application/json", "image/jpeg", "text/plain"]),
			Selection::matched("application/json")
		);
		assert_eq!(negotiator.select_type(["text/plain"]), Selection::unmatched());
	}

	#[rstest]
	fn test_select_encoding(headers: HeaderMap) {
		let negotiator = Negotiator::new(headers);

		assert_eq!(
			negotiator.select_encoding(["identity", "gzip"]),
			Selection::matched("gzip")
		);
		assert_eq!(
			negotiator.select_encoding(["compress", "identity"]),
			Selection::matched("identity")
		);
	}

	#[rstest]
	fn test_select_language(headers: HeaderMap) {
		let negotiator = Negotiator::new(headers);

		assert_eq!(
			negotiator.select_language(["en", "es", "fr"]),
			Selection::matched("es")
		);
		assert_eq!(negotiator.select_language(["es", "pt"]), Selection::matched("es"));
	}

	#[rstest]
	fn test_select_charset(headers: HeaderMap) {
		let negotiator = Negotiator::new(headers);

		assert_eq!(
			negotiator.select_charset(["UTF-8", "ISO-8859-1", "ISO-8859-5"]),
			Selection::matched("UTF-8")
		);
		assert_eq!(negotiator.select_charset(["ISO-8859-5"]), Selection::unmatched());
	}

	#[rstest]
	fn test_absent_headers_accept_anything() {
		let negotiator = Negotiator::new(HeaderMap::new());

		assert_eq!(
			negotiator.select_type(["application/json", "text/html"]),
			Selection::matched("application/json")
		);
		assert_eq!(negotiator.select_charset(["ascii"]), Selection::matched("ascii"));
	}

	#[rstest]
	fn test_no_offers_reports_client_preference(headers: HeaderMap) {
		let negotiator = Negotiator::new(headers);

		assert_eq!(
			negotiator.select_language(Vec::<&str>::new()),
			Selection::matched("es")
		);
		assert_eq!(
			Negotiator::new(HeaderMap::new()).select_language(Vec::<&str>::new()),
			Selection {
				offer: "*".to_string(),
				matched: false,
			}
		);
	}

	#[rstest]
	fn test_require_reports_axis_and_header(headers: HeaderMap) {
		let negotiator = Negotiator::new(headers);

		assert_eq!(negotiator.require_encoding(["gzip"]), Ok("gzip".to_string()));
		assert_eq!(
			negotiator.require_type(["text/plain"]),
			Err(NegotiationError::NotAcceptable {
				axis: Axis::MediaType,
				header: "text/html, application/*;q=0.9, image/jpeg;q=0.8".to_string(),
			})
		);
	}

	#[rstest]
	fn test_require_without_header_and_rejected_offer() {
		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("de;q=0"));
		let negotiator = Negotiator::new(headers);

		let err = negotiator.require_language(["de"]).unwrap_err();
		assert_eq!(err.axis(), Axis::Language);
		assert_eq!(negotiator.require_charset(["utf-8"]), Ok("utf-8".to_string()));
	}

	#[rstest]
	fn test_negotiator_does_not_take_ownership(headers: HeaderMap) {
		let negotiator = Negotiator::new(&headers);

		assert_eq!(negotiator.select_encoding(["gzip"]).offer, "gzip");
		assert_eq!(negotiator.into_inner().len(), headers.len());
	}
}
