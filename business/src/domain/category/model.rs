use uuid::Uuid;

/// A catalogue category. Names are unique; resolving a name to its row is
/// the store's job, so instances are only ever built from repository data.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub fn from_repository(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}
