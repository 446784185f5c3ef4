//! Result normalization.

use crate::types::{ApiResult, Envelope, OutputFields, ReturnMode};

/// Default for `fields_only` when the caller left it unset.
///
/// Callers naming concrete fields get flat field maps; wildcard callers keep
/// the object identity (class and key) for follow-up operations.
pub fn default_fields_only(output_fields: &OutputFields) -> bool {
    !output_fields.is_wildcard()
}

/// Reshapes an envelope according to `mode`.
///
/// A `null` `objects` member is replaced by an empty map before anything
/// else, so no shape ever carries a null object set.
pub fn normalize(mut envelope: Envelope, mode: ReturnMode, fields_only: bool) -> ApiResult {
    let objects = envelope.objects.get_or_insert_with(Default::default);

    match mode {
        ReturnMode::Array if fields_only => ApiResult::Fields(
            std::mem::take(objects)
                .into_values()
                .map(|record| record.fields)
                .collect(),
        ),
        ReturnMode::Array => ApiResult::Records(std::mem::take(objects).into_values().collect()),
        ReturnMode::Object => ApiResult::Objects(std::mem::take(objects)),
        ReturnMode::All => ApiResult::Envelope(envelope),
    }
}
