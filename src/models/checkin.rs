use serde::Serialize;

/// Check-in counters shown on the profile view.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CheckinTotals {
    pub total: i64,
    pub this_month: i64,
}
