/// Draughts domain types and rules.
pub mod draughts;
