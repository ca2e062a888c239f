//! Entity trait: records that keep their identity while their fields change.

/// A record addressed by a stable name.
///
/// Restriction rules are entities: renaming the warehouse on a rule does not
/// make it a different rule, and the write-side uniqueness check excludes the
/// record being saved by comparing ids.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
