mod bom;
mod circuit;
mod project;
mod record;
mod state;

use std::path::Path;

use state::DashboardState;

pub use bom::{BomItem, BomRepository};
pub use circuit::{Circuit, CircuitRepository};
pub use project::{Project, ProjectRepository};
pub use record::{Cell, Field};
pub use state::{InitOutcome, ensure_initialized};

/// Read-only view over the cockpit database.
#[derive(Debug)]
pub struct DashboardDb {
    state: DashboardState,
}

impl DashboardDb {
    pub async fn open<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: DashboardState::open(db_file).await?,
        })
    }

    /// Close the connection at the end of a render.
    pub async fn close(self) {
        self.state.close().await
    }
}

impl ProjectRepository for DashboardDb {
    async fn list_projects(&self) -> anyhow::Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            r#"SELECT id, name FROM projects ORDER BY id DESC"#,
        )
        .fetch_all(self.state.pool())
        .await?;
        Ok(projects)
    }
}

impl CircuitRepository for DashboardDb {
    async fn circuits_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Circuit>> {
        let circuits = sqlx::query_as::<_, Circuit>(
            r#"SELECT * FROM circuits WHERE project_id = $1 ORDER BY id ASC"#,
        )
        .bind(project_id)
        .fetch_all(self.state.pool())
        .await?;
        Ok(circuits)
    }
}

impl BomRepository for DashboardDb {
    async fn bom_items_for_project(&self, project_id: i64) -> anyhow::Result<Vec<BomItem>> {
        let items = sqlx::query_as::<_, BomItem>(
            r#"SELECT * FROM bom_items WHERE project_id = $1 ORDER BY id ASC"#,
        )
        .bind(project_id)
        .fetch_all(self.state.pool())
        .await?;
        Ok(items)
    }
}
