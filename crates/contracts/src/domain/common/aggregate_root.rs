use super::AggregateId;

/// Record owned by the API and addressed under its own collection path
pub trait AggregateRoot {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;

    /// REST collection segment (e.g. "projects")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Project")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Projects")
    fn list_name() -> &'static str;

    /// "/projects"
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// "/projects/42"
    fn item_path(id: Self::Id) -> String {
        format!("/{}/{}", Self::collection_name(), id.as_string())
    }
}
