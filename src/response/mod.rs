//! # Response Module
//!
//! Response envelopes and the JSON serialization boundary.
//!
//! Every dispatch ends by handing exactly one [`ResponseEnvelope`] to a
//! [`JsonSerializer`]: either the handler's result with the merged exclusion
//! list, or an [`ErrorBean`] (`{"errorMessage": "..."}`) with the defaults
//! only.

mod envelope;
mod serializer;

pub use envelope::{ErrorBean, ResponseEnvelope, DEFAULT_EXCLUSION};
pub use serializer::{ExclusionSerializer, JsonSerializer};
