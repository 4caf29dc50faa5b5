/// Source of unique region identifiers.
///
/// Uniqueness is only required within a caller-managed collection of
/// regions; infrastructure decides how strong the guarantee is.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
