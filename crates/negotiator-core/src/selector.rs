//! Offer selection against parsed preferences

use crate::axis::wildcard_for;
use crate::preference::{ParsedPreferences, PreferenceSpec};

/// Outcome of a negotiation
///
/// `offer` keeps the caller's original casing. When nothing matched,
/// `offer` is empty and `matched` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
	pub offer: String,
	pub matched: bool,
}

impl Selection {
	pub fn matched(offer: impl Into<String>) -> Self {
		Self {
			offer: offer.into(),
			matched: true,
		}
	}

	pub fn unmatched() -> Self {
		Self::default()
	}

	pub fn is_match(&self) -> bool {
		self.matched
	}

	/// The selected offer, or `None` when nothing matched
	pub fn into_option(self) -> Option<String> {
		self.matched.then_some(self.offer)
	}
}

impl From<Selection> for (String, bool) {
	fn from(selection: Selection) -> Self {
		(selection.offer, selection.matched)
	}
}

/// How specifically a preference matched an offer; lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
	/// `text/html` against `text/html`
	Exact,
	/// `text/*` against `text/html`
	Subtype,
	/// `*/*` or `*` against anything
	Wildcard,
}

fn match_rank(spec: &PreferenceSpec, offer: &str, allows_slash_structure: bool) -> Option<MatchRank> {
	let wildcard = wildcard_for(allows_slash_structure);

	if spec.value == offer {
		Some(MatchRank::Exact)
	} else if spec.value == wildcard {
		Some(MatchRank::Wildcard)
	} else if allows_slash_structure
		&& let Some(prefix) = spec.value.strip_suffix('*')
		&& prefix.ends_with('/')
		&& offer.starts_with(prefix)
	{
		Some(MatchRank::Subtype)
	} else {
		None
	}
}

/// Picks the offer that best satisfies `specs`.
///
/// Offers are tried in the given order and every preference is checked
/// against each one. A match replaces the best so far when its quality is
/// higher, or when its quality is at least as high and it is more specific
/// (exact, then `type/*`, then the plain wildcard). On a full tie the
/// earlier offer stays.
///
/// The plain wildcard never applies to an offer that has its own entry in
/// `specs`, whatever the qualities involved.
///
/// Without offers, the most preferred entry's value is returned; `matched`
/// is then `true` only if that entry is not a wildcard.
///
/// # Examples
///
/// ```
/// use negotiator_core::parser::parse;
/// use negotiator_core::selector::select;
///
/// let specs = parse("text/html, application/*;q=0.9, image/jpeg;q=0.8", true);
///
/// let selection = select(["application/json", "image/jpeg", "text/plain"], &specs, true);
/// assert_eq!(selection.offer, "application/json");
/// assert!(selection.matched);
///
/// let selection = select(["text/plain"], &specs, true);
/// assert_eq!(selection.offer, "");
/// assert!(!selection.matched);
/// ```
pub fn select<I, S>(offers: I, specs: &ParsedPreferences, allows_slash_structure: bool) -> Selection
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut offers = offers.into_iter().peekable();
	if offers.peek().is_none() {
		return default_preference(specs);
	}

	let mut best: Option<(f64, MatchRank)> = None;
	let mut best_offer: Option<String> = None;

	for offer in offers {
		let offer = offer.as_ref();
		let normalized = offer.to_lowercase();
		let has_explicit_spec = specs.contains_value(&normalized);

		for spec in specs {
			let Some(rank) = match_rank(spec, &normalized, allows_slash_structure) else {
				continue;
			};
			// An explicit entry for this offer overrides the blanket wildcard.
			if rank == MatchRank::Wildcard && has_explicit_spec {
				continue;
			}

			let replaces = match best {
				None => true,
				Some((best_quality, best_rank)) => {
					spec.quality > best_quality || (spec.quality >= best_quality && rank < best_rank)
				}
			};

			if replaces {
				best = Some((spec.quality, rank));
				best_offer = Some(offer.to_string());
			}
		}
	}

	best_offer.map(Selection::matched).unwrap_or_default()
}

fn default_preference(specs: &ParsedPreferences) -> Selection {
	match specs.first() {
		Some(top) => Selection {
			offer: top.value.clone(),
			matched: !top.is_wildcard(),
		},
		None => Selection::unmatched(),
	}
}
