/// Outcome of converting one untrusted LLM entry into a schema-valid value.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled<T> {
    Valid(T),
    Skipped { index: usize, reason: String },
}

impl<T> Reconciled<T> {
    pub fn from_result(index: usize, result: Result<T, String>) -> Self {
        match result {
            Ok(v) => Reconciled::Valid(v),
            Err(reason) => Reconciled::Skipped { index, reason },
        }
    }

    pub fn valid(self) -> Option<T> {
        match self {
            Reconciled::Valid(v) => Some(v),
            Reconciled::Skipped { .. } => None,
        }
    }
}

/// Keeps the valid entries and logs every skipped one.
pub fn collect_valid<T>(entries: impl IntoIterator<Item = Reconciled<T>>, what: &str) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Reconciled::Valid(v) => Some(v),
            Reconciled::Skipped { index, reason } => {
                tracing::warn!(index, %reason, "Skipped invalid {}", what);
                None
            }
        })
        .collect()
}
