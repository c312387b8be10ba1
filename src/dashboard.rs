//! Per-project dashboard: counts and connected power of the selected project.

use serde::Serialize;

use crate::config::AppConfig;
use crate::core::db::{
    BomItem, BomRepository, Circuit, CircuitRepository, DashboardDb, Project, ProjectRepository,
};

/// Total connected power `sum(qty * power_w)`, missing values counted as zero.
pub fn total_power_w(circuits: &[Circuit]) -> f64 {
    circuits.iter().map(Circuit::connected_power_w).sum()
}

/// Group digits by thousands with a space: `1234567` -> `1 234 567`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub circuit_count: usize,
    pub bom_item_count: usize,
    pub total_power_w: f64,
}

impl ProjectSummary {
    pub fn new(circuits: &[Circuit], bom_items: &[BomItem]) -> Self {
        Self {
            circuit_count: circuits.len(),
            bom_item_count: bom_items.len(),
            total_power_w: total_power_w(circuits),
        }
    }

    /// Total power truncated to whole watts, thousands separated.
    pub fn total_power_display(&self) -> String {
        format_thousands(self.total_power_w as i64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDashboard {
    pub projects: Vec<Project>,
    pub selected: Project,
    pub summary: ProjectSummary,
    pub circuits: Vec<Circuit>,
    pub bom_items: Vec<BomItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardView {
    /// No working database could be found or seeded.
    NoData,
    NoProjects,
    Project(ProjectDashboard),
}

/// Pick a project by name, or the first listed one when no name is given.
pub fn select_project<'a>(
    projects: &'a [Project],
    name: Option<&str>,
) -> anyhow::Result<&'a Project> {
    match name {
        Some(name) => projects
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| anyhow::anyhow!("No project named {name:?}")),
        None => projects
            .first()
            .ok_or_else(|| anyhow::anyhow!("Project list is empty")),
    }
}

/// Load everything a dashboard render needs, holding the database open only
/// for the duration of the call.
pub async fn load_dashboard(
    config: &AppConfig,
    project_name: Option<&str>,
) -> anyhow::Result<DashboardView> {
    if !config.db_path.is_file() {
        tracing::info!(db = ?config.db_path, "no database to read");
        return Ok(DashboardView::NoData);
    }

    let db = DashboardDb::open(&config.db_path).await?;
    let view = read_dashboard(&db, project_name).await;
    db.close().await;
    view
}

async fn read_dashboard<R>(repo: &R, project_name: Option<&str>) -> anyhow::Result<DashboardView>
where
    R: ProjectRepository + CircuitRepository + BomRepository,
{
    let projects = repo.list_projects().await?;
    if projects.is_empty() {
        return Ok(DashboardView::NoProjects);
    }

    let selected = select_project(&projects, project_name)?.clone();
    let circuits = repo.circuits_for_project(selected.id).await?;
    let bom_items = repo.bom_items_for_project(selected.id).await?;
    let summary = ProjectSummary::new(&circuits, &bom_items);
    tracing::debug!(
        project_id = selected.id,
        circuits = summary.circuit_count,
        bom_items = summary.bom_item_count,
        total_power_w = summary.total_power_w,
        "loaded project dashboard"
    );

    Ok(DashboardView::Project(ProjectDashboard {
        projects,
        selected,
        summary,
        circuits,
        bom_items,
    }))
}
