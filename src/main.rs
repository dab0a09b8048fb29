//! Terminal client for a patient medical record service.
//!
//! Keeps a normalized in-memory view of patients and diagnoses, fetched
//! lazily from the record service, and appends new entries to a patient's
//! history through a type-discriminated form.

mod render;
mod session;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use medrec_client::HttpRecordService;
use medrec_core::{AppConfig, EntryForm, NoticeBoard, RecordStore};
use session::Session;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "medrec")]
#[command(about = "Terminal client for the medrec patient record service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients known to the record service
    List,
    /// Show one patient's full record
    Show {
        /// Patient id
        id: String,
    },
    /// List the diagnosis catalogue
    Diagnoses,
    /// Append a new entry to a patient's history
    AddEntry(AddEntryArgs),
}

#[derive(Args)]
struct AddEntryArgs {
    /// Patient id
    id: String,
    /// Entry type: HealthCheck, Hospital or OccupationalHealthcare
    #[arg(long)]
    kind: String,
    /// Entry date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Attending specialist
    #[arg(long)]
    specialist: String,
    /// Free-text description
    #[arg(long)]
    description: String,
    /// Diagnosis codes (comma-separated)
    #[arg(long, value_delimiter = ',')]
    diagnosis_codes: Vec<String>,
    /// Health check rating, 0 (best) to 3 (worst)
    #[arg(long)]
    rating: Option<u8>,
    /// Hospital discharge date
    #[arg(long)]
    discharge_date: Option<String>,
    /// Hospital discharge criteria
    #[arg(long)]
    discharge_criteria: Option<String>,
    /// Employer name (occupational healthcare)
    #[arg(long)]
    employer: Option<String>,
    /// Sick leave start date (optional)
    #[arg(long)]
    sick_leave_start: Option<String>,
    /// Sick leave end date (optional)
    #[arg(long)]
    sick_leave_end: Option<String>,
}

impl AddEntryArgs {
    /// Form-layer validation of the common fields; the builder assumes
    /// these were checked here.
    fn check_common_fields(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.date.trim().is_empty() {
            problems.push("date: field is required".to_owned());
        } else if NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            problems.push(format!("date: expected YYYY-MM-DD, got {:?}", self.date));
        }
        if self.specialist.trim().is_empty() {
            problems.push("specialist: field is required".to_owned());
        }
        if self.description.trim().is_empty() {
            problems.push("description: field is required".to_owned());
        }
        problems
    }

    fn into_form(self) -> EntryForm {
        EntryForm {
            kind: self.kind,
            date: self.date,
            specialist: self.specialist,
            description: self.description,
            diagnosis_codes: self.diagnosis_codes,
            health_check_rating: self.rating,
            discharge_date: self.discharge_date.unwrap_or_default(),
            discharge_criteria: self.discharge_criteria.unwrap_or_default(),
            employer_name: self.employer.unwrap_or_default(),
            sick_leave_start: self.sick_leave_start.unwrap_or_default(),
            sick_leave_end: self.sick_leave_end.unwrap_or_default(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medrec=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let cfg = AppConfig::from_env().context("failed to resolve configuration")?;

    let api = HttpRecordService::new(&cfg);
    let store = RecordStore::new();
    let notices = NoticeBoard::new(cfg.notice_ttl());
    let mut session = Session::new(api, store, notices);

    match cli.command {
        Commands::List => {
            if let Err(err) = session.load_patient_list().await {
                report_failure(&session, &err);
                return Ok(());
            }
            print!("{}", render::render_patient_list(&session.store().snapshot()));
        }
        Commands::Show { id } => {
            let loaded = session.ensure_patient(&id).await;
            if let Err(err) = loaded {
                report_failure(&session, &err);
                return Ok(());
            }
            if let Err(err) = session.ensure_diagnoses().await {
                report_failure(&session, &err);
                return Ok(());
            }

            match render::render_patient(&session.store().snapshot(), &id) {
                Some(view) => print!("{view}"),
                None => println!("unable to find id {id}"),
            }
        }
        Commands::Diagnoses => {
            if let Err(err) = session.ensure_diagnoses().await {
                report_failure(&session, &err);
                return Ok(());
            }
            print!("{}", render::render_diagnoses(&session.store().snapshot()));
        }
        Commands::AddEntry(args) => {
            let problems = args.check_common_fields();
            if !problems.is_empty() {
                for problem in problems {
                    eprintln!("{problem}");
                }
                return Ok(());
            }

            let patient_id = args.id.clone();
            let form = args.into_form();

            match session.submit_entry(&patient_id, &form).await {
                Ok(saved) => {
                    println!("Added {} entry {}", saved.kind().to_wire(), saved.id());
                    session.ensure_diagnoses().await.ok();
                    if let Some(view) =
                        render::render_patient(&session.store().snapshot(), &patient_id)
                    {
                        print!("{view}");
                    }
                }
                Err(err) => report_failure(&session, &err),
            }
        }
    }

    Ok(())
}

/// Shows the transient notice when one is active, otherwise the bare error.
fn report_failure<A: medrec_client::RecordApi>(
    session: &Session<A>,
    err: &session::SessionError,
) {
    match session.notices().current() {
        Some(notice) => eprintln!("{notice}"),
        None => eprintln!("Error: {err}"),
    }
}
