use serde::{Deserialize, Serialize};

/// Runtime options for a [`SelectionSession`](crate::SelectionSession).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rewrite the input word with the resolved word whenever the bits are
    /// edited directly (single toggles, whole-pattern or index jumps).
    ///
    /// Off by default: editing bits leaves the typed text as it was.
    pub sync_input_on_toggle: bool,
}
