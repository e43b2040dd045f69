//! Post-create identifier injection.

use rosapi_proto::{AttributeSet, RET_ATTRIBUTE};

use crate::schema::Record;

/// Copy the identifier named by `attribute` from an acknowledgement into the
/// record's identifier field.
///
/// Returns `true` when the identifier was written. Nothing happens when the
/// attribute is absent or the record type declares no identifier field.
pub fn inject_identifier<R: Record>(record: &mut R, ack: &AttributeSet, attribute: &str) -> bool {
    let id = match ack.lookup(attribute) {
        Some(id) => id,
        None => return false,
    };
    let field = match R::schema().identifier() {
        Some(field) => field,
        None => return false,
    };
    // text fields accept any value verbatim
    field.assign(record, id).is_ok()
}

/// Copy the `ret` identifier of a `!done` sentence into the record.
pub fn inject<R: Record>(record: &mut R, ack: &AttributeSet) -> bool {
    inject_identifier(record, ack, RET_ATTRIBUTE)
}
