//! Header sources
//!
//! A [`HeaderSource`] is the only thing a [`Negotiator`](crate::Negotiator)
//! needs from the surrounding HTTP layer: a raw header value by name.

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::BuildHasher;

use http::HeaderMap;
use tracing::trace;

/// Read-only lookup of raw header values by (case-insensitive) name
///
/// Returns `None` when the header is absent. Negotiation treats an absent
/// header like an empty one.
///
/// # Examples
///
/// ```
/// use negotiator::HeaderSource;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("accept-language".to_string(), "en, fr;q=0.5".to_string());
///
/// assert_eq!(headers.header("Accept-Language").as_deref(), Some("en, fr;q=0.5"));
/// assert_eq!(headers.header("Accept"), None);
/// ```
pub trait HeaderSource {
	fn header(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Repeated header fields are combined into one comma-separated value.
///
/// Values that are not visible ASCII are ignored.
impl HeaderSource for HeaderMap {
	fn header(&self, name: &str) -> Option<Cow<'_, str>> {
		let mut values = self
			.get_all(name)
			.iter()
			.filter_map(|value| match value.to_str() {
				Ok(value) => Some(value),
				Err(_) => {
					trace!(header = name, "ignoring non-ASCII header value");
					None
				}
			});

		let first = values.next()?;
		match values.next() {
			None => Some(Cow::Borrowed(first)),
			Some(second) => {
				let mut combined = format!("{}, {}", first, second);
				for value in values {
					combined.push_str(", ");
					combined.push_str(value);
				}
				Some(Cow::Owned(combined))
			}
		}
	}
}

impl<B> HeaderSource for http::Request<B> {
	fn header(&self, name: &str) -> Option<Cow<'_, str>> {
		self.headers().header(name)
	}
}

impl HeaderSource for http::request::Parts {
	fn header(&self, name: &str) -> Option<Cow<'_, str>> {
		self.headers.header(name)
	}
}

impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
	fn header(&self, name: &str) -> Option<Cow<'_, str>> {
		self.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| Cow::Borrowed(value.as_str()))
	}
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
	fn header(&self, name: &str) -> Option<Cow<'_, str>> {
		(**self).header(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::header::{ACCEPT, ACCEPT_ENCODING, HeaderValue};
	use rstest::rstest;

	#[rstest]
	fn test_header_map_lookup_is_case_insensitive() {
		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT, HeaderValue::from_static("text/html"));

		assert_eq!(headers.header("Accept").as_deref(), Some("text/html"));
		assert_eq!(headers.header("ACCEPT").as_deref(), Some("text/html"));
		assert_eq!(headers.header("Accept-Language"), None);
	}

	#[rstest]
	fn test_header_map_combines_repeated_fields() {
		let mut headers = HeaderMap::new();
		headers.append(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
		headers.append(ACCEPT_ENCODING, HeaderValue::from_static("br;q=0.5"));
		headers.append(ACCEPT_ENCODING, HeaderValue::from_static("deflate;q=0.1"));

		assert_eq!(
			headers.header("Accept-Encoding").as_deref(),
			Some("gzip, br;q=0.5, deflate;q=0.1")
		);
	}

	#[rstest]
	fn test_header_map_skips_opaque_values() {
		let mut headers = HeaderMap::new();
		headers.append(ACCEPT, HeaderValue::from_bytes(b"text/\xffhtml").unwrap());

		assert_eq!(headers.header("Accept"), None);

		headers.append(ACCEPT, HeaderValue::from_static("application/json"));
		assert_eq!(headers.header("Accept").as_deref(), Some("application/json"));
	}

	#[rstest]
	fn test_invalid_header_name_is_absent() {
		let headers = HeaderMap::new();

		assert_eq!(headers.header("not a header"), None);
	}

	#[rstest]
	fn test_request_and_parts_delegate_to_headers() {
		let request = http::Request::builder()
			.header(ACCEPT, "application/json")
			.body(())
			.unwrap();

		assert_eq!(request.header("accept").as_deref(), Some("application/json"));

		let (parts, _body) = request.into_parts();
		assert_eq!(parts.header("Accept").as_deref(), Some("application/json"));
	}

	#[rstest]
	fn test_hash_map_lookup_is_case_insensitive() {
		let headers = HashMap::from([("Accept-Charset".to_string(), "utf-8".to_string())]);

		assert_eq!(headers.header("accept-charset").as_deref(), Some("utf-8"));
		assert_eq!((&headers).header("ACCEPT-CHARSET").as_deref(), Some("utf-8"));
	}
}
