use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cockpit::cable::{self, AMPACITY_TABLE, CableInputs, Phases};
use cockpit::{AppConfig, InitOutcome, render};

#[derive(Parser)]
#[command(name = "cockpit")]
#[command(about = "Read-only project dashboard and cable sizing demo")]
struct Cli {
    /// Directory holding cockpit.db and seed/cockpit_demo.db
    #[arg(long, value_name = "DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show counts, total power, circuits and BOM of a project
    Dashboard {
        /// Project name; defaults to the most recent project
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Estimate current, cross-section and voltage drop for a load
    Cable {
        /// Phase count, 1 or 3
        #[arg(long, default_value_t = 3)]
        phases: u8,

        /// Power (kW)
        #[arg(long, default_value_t = 5.0)]
        power_kw: f64,

        /// Voltage (V); 400 for three-phase, 230 for single-phase when omitted
        #[arg(long)]
        voltage: Option<f64>,

        /// Power factor
        #[arg(long, default_value_t = 0.9)]
        pf: f64,

        /// Efficiency
        #[arg(long, default_value_t = 1.0)]
        efficiency: f64,

        /// Cable length (m)
        #[arg(long, default_value_t = 50.0)]
        length: f64,
    },

    /// Print the ampacity reference table
    Table,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "cockpit=debug" } else { "cockpit=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Dashboard { project } => {
            let config = AppConfig::new(&args.data_dir);
            let outcome = cockpit::ensure_initialized(&config).await?;
            if outcome == InitOutcome::Initialized {
                tracing::info!(db = ?config.db_path, "seeded working database");
            }

            let view = cockpit::load_dashboard(&config, project.as_deref()).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", render::APP_TITLE);
                println!("DB: {}\n", config.db_path.display());
                print!("{}", render::dashboard(&view));
            }
        }
        Command::Cable {
            phases,
            power_kw,
            voltage,
            pf,
            efficiency,
            length,
        } => {
            let phases = Phases::try_from(phases)?;
            let inputs = CableInputs {
                phases,
                power_kw,
                voltage_v: voltage.unwrap_or_else(|| cable::default_voltage(phases)),
                power_factor: pf,
                efficiency,
                length_m: length,
            };
            let sizing = cable::size_cable(&inputs)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&sizing)?);
            } else {
                print!("{}", render::cable_sizing(&sizing));
            }
        }
        Command::Table => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(AMPACITY_TABLE)?);
            } else {
                print!("{}", render::ampacity_table(AMPACITY_TABLE));
            }
        }
    }

    Ok(())
}
