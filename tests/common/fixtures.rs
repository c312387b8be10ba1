use std::path::Path;

use cockpit::AppConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Creates an AppConfig rooted in a fresh temp directory.
/// Returns both the config and the temp directory (which must be kept alive).
pub fn create_test_config() -> (AppConfig, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let config = AppConfig::new(dir.path().join("data"));
    (config, dir)
}

pub struct SeedCircuit {
    pub name: &'static str,
    pub qty: Option<f64>,
    pub power_w: Option<f64>,
}

pub struct SeedBomItem {
    pub reference: &'static str,
    pub designation: &'static str,
    pub qty: f64,
    pub unit: &'static str,
}

pub struct SeedProject {
    pub id: i64,
    pub name: &'static str,
    pub circuits: Vec<SeedCircuit>,
    pub bom: Vec<SeedBomItem>,
}

pub fn circuit(name: &'static str, qty: Option<f64>, power_w: Option<f64>) -> SeedCircuit {
    SeedCircuit { name, qty, power_w }
}

pub fn bom_item(
    reference: &'static str,
    designation: &'static str,
    qty: f64,
    unit: &'static str,
) -> SeedBomItem {
    SeedBomItem {
        reference,
        designation,
        qty,
        unit,
    }
}

/// Two projects: "Maison" (id 1) with two circuits and one BOM line,
/// "Atelier" (id 2) with three circuits, one of them missing its power.
pub fn demo_projects() -> Vec<SeedProject> {
    vec![
        SeedProject {
            id: 1,
            name: "Maison",
            circuits: vec![
                circuit("Lighting", Some(12.0), Some(10.0)),
                circuit("Sockets", Some(8.0), Some(200.0)),
            ],
            bom: vec![bom_item("DISJ-16", "Breaker 16A", 4.0, "pc")],
        },
        SeedProject {
            id: 2,
            name: "Atelier",
            circuits: vec![
                circuit("Saw", Some(1.0), Some(2200.0)),
                circuit("Compressor", Some(2.0), Some(1500.0)),
                circuit("Spare", Some(1.0), None),
            ],
            bom: vec![
                bom_item("CBL-2.5", "Cable 3G2.5", 50.0, "m"),
                bom_item("DISJ-20", "Breaker 20A", 2.0, "pc"),
            ],
        },
    ]
}

async fn create_pool(path: &Path) -> anyhow::Result<SqlitePool> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Writes a SQLite database by running `statements` in order.
pub async fn write_raw_database(path: &Path, statements: &[&str]) -> anyhow::Result<()> {
    let pool = create_pool(path).await?;
    for statement in statements {
        sqlx::query(statement).execute(&pool).await?;
    }
    pool.close().await;
    Ok(())
}

/// Writes a SQLite database with the cockpit schema and the given projects.
pub async fn write_database(path: &Path, projects: &[SeedProject]) -> anyhow::Result<()> {
    let pool = create_pool(path).await?;

    for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement).execute(&pool).await?;
    }

    for project in projects {
        sqlx::query("INSERT INTO projects (id, name) VALUES ($1, $2)")
            .bind(project.id)
            .bind(project.name)
            .execute(&pool)
            .await?;
        for circuit in &project.circuits {
            sqlx::query(
                "INSERT INTO circuits (project_id, name, qty, power_w) VALUES ($1, $2, $3, $4)",
            )
            .bind(project.id)
            .bind(circuit.name)
            .bind(circuit.qty)
            .bind(circuit.power_w)
            .execute(&pool)
            .await?;
        }
        for item in &project.bom {
            sqlx::query(
                "INSERT INTO bom_items (project_id, reference, designation, qty, unit)
                VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(project.id)
            .bind(item.reference)
            .bind(item.designation)
            .bind(item.qty)
            .bind(item.unit)
            .execute(&pool)
            .await?;
        }
    }

    pool.close().await;
    Ok(())
}

/// Writes the demo projects as the seed database of `config`.
pub async fn write_demo_seed(config: &AppConfig) -> anyhow::Result<()> {
    write_database(&config.seed_path, &demo_projects()).await
}
