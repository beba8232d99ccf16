//! Error types for strict negotiation.

use http::StatusCode;
use negotiator_core::Axis;
use thiserror::Error;

/// Errors returned by the `require_*` operations of
/// [`Negotiator`](crate::Negotiator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NegotiationError {
	/// None of the offers satisfies the client's preferences.
	#[error("Not acceptable: no offer satisfies {axis} {header:?}")]
	NotAcceptable {
		/// Axis that was negotiated.
		axis: Axis,
		/// Raw header value sent by the client (empty when absent).
		header: String,
	},
}

impl NegotiationError {
	/// HTTP status an HTTP layer should answer with.
	pub fn status_code(&self) -> StatusCode {
		match self {
			NegotiationError::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
		}
	}

	pub fn axis(&self) -> Axis {
		match self {
			NegotiationError::NotAcceptable { axis, .. } => *axis,
		}
	}
}

/// Result type alias for strict negotiation.
pub type NegotiationResult<T> = Result<T, NegotiationError>;
