//! Derived statistics for parsed benchmark records.
//!
//! Derivation is best-effort: a record missing any dimension passes
//! through unchanged.

use crate::record::TestRecord;

/// Statistics key for the derived multiply-add operation count.
pub const OPERATIONS_KEY: &str = "operations";

/// Human-readable label for the derived operation counter.
pub const OPERATIONS_LABEL: &str = "useful arithmetic operation";

/// Adds the derived operation count `2 * m * n * k` to the record.
///
/// Requires `m`, `n`, `k` all present and positive; otherwise the record
/// is left untouched. A product too large for the counter type is skipped
/// rather than stored wrong.
pub fn enrich(record: &mut TestRecord) {
    let (Some(m), Some(n), Some(k)) = (record.input.m, record.input.n, record.input.k) else {
        return;
    };
    if m <= 0 || n <= 0 || k <= 0 {
        return;
    }
    let ops = 2i64
        .checked_mul(m)
        .and_then(|v| v.checked_mul(n))
        .and_then(|v| v.checked_mul(k));
    let Some(ops) = ops else {
        return;
    };
    record.statistics.insert(OPERATIONS_KEY.to_string(), ops);
    record.operations_label = Some(OPERATIONS_LABEL.to_string());
}
