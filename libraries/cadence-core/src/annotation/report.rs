/// Per-item outcomes of a scrobble request
use crate::types::ScrobbleEvent;

/// What happened to one scrobble item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Accepted,
    /// The collaborator failed; the error was logged and the item skipped
    Skipped { reason: String },
}

/// Accumulated outcomes of a scrobble batch, in request order
///
/// The request itself is acknowledged regardless of what this holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrobbleReport {
    pub items: Vec<(ScrobbleEvent, ItemOutcome)>,
}

impl ScrobbleReport {
    pub(crate) fn record(&mut self, event: ScrobbleEvent, outcome: ItemOutcome) {
        self.items.push((event, outcome));
    }

    pub fn accepted(&self) -> usize {
        self.items
            .iter()
            .filter(|(_, outcome)| *outcome == ItemOutcome::Accepted)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.items.len() - self.accepted()
    }
}
