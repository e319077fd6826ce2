// Copyright 2025 Cowboy AI, LLC.

//! Identity shared by every stored aggregate

/// Marker trait for aggregate roots
///
/// Aggregate roots are the entry points for modifying aggregates and the unit
/// a repository stores. Identity is a caller-supplied string; aggregates refer
/// to each other only through these ids, never through direct references.
///
/// # Examples
///
/// ```rust
/// use zoo_domain::AggregateRoot;
///
/// #[derive(Clone)]
/// struct Keeper {
///     id: String,
/// }
///
/// impl AggregateRoot for Keeper {
///     const ENTITY_TYPE: &'static str = "Keeper";
///
///     fn id(&self) -> &str {
///         &self.id
///     }
/// }
///
/// let keeper = Keeper { id: "k-1".to_string() };
/// assert_eq!(keeper.id(), "k-1");
/// assert_eq!(Keeper::ENTITY_TYPE, "Keeper");
/// ```
pub trait AggregateRoot: Clone + Send + Sync {
    /// Human-readable type name used in errors and logs
    const ENTITY_TYPE: &'static str;

    /// Get the aggregate's ID
    fn id(&self) -> &str;
}
