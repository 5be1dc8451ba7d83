/// Every state change flows through one of these descriptors.
///
/// Actions a slice does not recognize fall through its reducer's
/// default match arm and leave the slice untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the filter query with the given text, exactly as
    /// typed. An empty string is a valid query distinct from a
    /// cleared one.
    ChangeFilterQuery(String),
    /// Drop the filter entirely; every item is shown again.
    ClearFilterQuery,
    /// Move the list cursor one row up.
    MoveSelectionUp,
    /// Move the list cursor one row down.
    MoveSelectionDown,
}
