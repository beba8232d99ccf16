//! Preference entries parsed from an `Accept*` header
//!
//! A [`PreferenceSpec`] is one `value;q=<quality>` entry of a header and a
//! [`ParsedPreferences`] is the whole header, ordered from most to least
//! preferred.

use std::cmp::Ordering;
use std::fmt;

/// Quality of an entry that carries no `q` (or `level`) parameter
pub const DEFAULT_QUALITY: f64 = 1.0;

/// Returns `true` for `*`, `*/*` and `type/*` values
pub(crate) fn is_wildcard_value(value: &str) -> bool {
	value == "*" || value.ends_with("/*")
}

/// A single weighted preference from a header
///
/// `value` is lowercased with all whitespace removed, `quality` lies in
/// `(0, 1]`.
///
/// # Examples
///
/// ```
/// use negotiator_core::PreferenceSpec;
///
/// let spec = PreferenceSpec::new("text/html", 0.8);
/// assert_eq!(spec.to_string(), "text/html;q=0.8");
/// assert!(!spec.is_wildcard());
///
/// let any = PreferenceSpec::new("*/*", 1.0);
/// assert_eq!(any.to_string(), "*/*");
/// assert!(any.is_wildcard());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceSpec {
	/// Normalized header token, e.g. `text/html`, `en`, `*`
	pub value: String,
	/// Client-assigned weight
	pub quality: f64,
}

impl PreferenceSpec {
	pub fn new(value: impl Into<String>, quality: f64) -> Self {
		Self {
			value: value.into(),
			quality,
		}
	}

	/// Whether this entry matches a class of offers rather than one value
	pub fn is_wildcard(&self) -> bool {
		is_wildcard_value(&self.value)
	}
}

impl fmt::Display for PreferenceSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.quality == DEFAULT_QUALITY {
			write!(f, "{}", self.value)
		} else {
			write!(f, "{};q={}", self.value, self.quality)
		}
	}
}

/// Preference entries of one header, most preferred first
///
/// Ordering is by quality (descending); on equal quality exact values come
/// before wildcards, and otherwise the header order is kept.
///
/// The [`Display`](fmt::Display) form is a canonical header value: parsing it
/// again yields the same entries.
///
/// # Examples
///
/// ```
/// use negotiator_core::parser::parse;
///
/// let prefs = parse("*/*;q=0.1, text/plain, application/json;q=0.5", true);
/// assert_eq!(prefs.len(), 3);
/// assert_eq!(prefs.to_string(), "text/plain,application/json;q=0.5,*/*;q=0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(from = "Vec<PreferenceSpec>", into = "Vec<PreferenceSpec>")
)]
pub struct ParsedPreferences {
	specs: Vec<PreferenceSpec>,
}

impl ParsedPreferences {
	/// Orders `specs` by quality, then exact-before-wildcard, then position
	pub(crate) fn from_unsorted(specs: Vec<PreferenceSpec>) -> Self {
		let mut keyed: Vec<(usize, PreferenceSpec)> = specs.into_iter().enumerate().collect();
		keyed.sort_by(|(left_index, left), (right_index, right)| {
			compare_specs(left, right).then_with(|| left_index.cmp(right_index))
		});

		Self {
			specs: keyed.into_iter().map(|(_, spec)| spec).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.specs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.specs.is_empty()
	}

	/// The most preferred entry, if any
	pub fn first(&self) -> Option<&PreferenceSpec> {
		self.specs.first()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PreferenceSpec> {
		self.specs.iter()
	}

	pub fn as_slice(&self) -> &[PreferenceSpec] {
		&self.specs
	}

	/// Whether some entry has exactly this (already normalized) value
	pub fn contains_value(&self, value: &str) -> bool {
		self.specs.iter().any(|spec| spec.value == value)
	}
}

fn compare_specs(left: &PreferenceSpec, right: &PreferenceSpec) -> Ordering {
	right
		.quality
		.total_cmp(&left.quality)
		.then_with(|| left.is_wildcard().cmp(&right.is_wildcard()))
}

/// Builds preferences from arbitrary entries.
///
/// Entries outside `(0, 1]` are handled like the header parser does: zero,
/// negative and NaN qualities are dropped, anything above 1 is clamped.
impl From<Vec<PreferenceSpec>> for ParsedPreferences {
	fn from(specs: Vec<PreferenceSpec>) -> Self {
		let specs = specs
			.into_iter()
			.filter(|spec| spec.quality > 0.0)
			.map(|mut spec| {
				spec.quality = spec.quality.min(DEFAULT_QUALITY);
				spec
			})
			.collect();
		Self::from_unsorted(specs)
	}
}

impl From<ParsedPreferences> for Vec<PreferenceSpec> {
	fn from(preferences: ParsedPreferences) -> Self {
		preferences.specs
	}
}

impl IntoIterator for ParsedPreferences {
	type Item = PreferenceSpec;
	type IntoIter = std::vec::IntoIter<PreferenceSpec>;

	fn into_iter(self) -> Self::IntoIter {
		self.specs.into_iter()
	}
}

impl<'a> IntoIterator for &'a ParsedPreferences {
	type Item = &'a PreferenceSpec;
	type IntoIter = std::slice::Iter<'a, PreferenceSpec>;

	fn into_iter(self) -> Self::IntoIter {
		self.specs.iter()
	}
}

impl fmt::Display for ParsedPreferences {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, spec) in self.specs.iter().enumerate() {
			if index > 0 {
				f.write_str(",")?;
			}
			write!(f, "{}", spec)?;
		}
		Ok(())
	}
}
