//! Domain label checks.

use crate::MAX_LABEL_LEN;

/// Checks every `.`-separated label of `domain`.
///
/// A label must be non-empty, must not start or end with `-` and must not
/// be longer than [`MAX_LABEL_LEN`] characters. Character classes are
/// enforced by the scanner, not here.
pub(crate) fn labels_valid(domain: &str) -> bool {
    domain.split('.').all(|label| {
        let ok = label_valid(label);
        if !ok {
            tracing::trace!(label, "invalid domain label");
        }
        ok
    })
}

fn label_valid(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().count() <= MAX_LABEL_LEN
}
