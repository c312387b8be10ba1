use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

pub trait ProjectRepository {
    /// All projects, newest id first.
    fn list_projects(&self) -> impl Future<Output = anyhow::Result<Vec<Project>>>;
}
