use clap::Args;
use hiring_form::config::AppConfig;
use hiring_form::error::AppError;
use hiring_form::telemetry;
use hiring_form::workflows::application::ApplicantRecord;
use hiring_form::workflows::export::{export_to, DirectorySink};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Applicant record as JSON (see the `template` command)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Directory for the .docx file (defaults to APP_EXPORT_DIR)
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
}

pub(crate) fn run_export(args: ExportArgs) -> Result<PathBuf, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let out_dir = args.out_dir.unwrap_or(config.export.directory);
    let path = export_record(&args.input, out_dir)?;
    println!("{}", path.display());
    Ok(path)
}

fn export_record(input: &Path, out_dir: PathBuf) -> Result<PathBuf, AppError> {
    let record = read_record(input)?;
    let path = export_to(&record, &DirectorySink::new(out_dir)).map_err(|err| {
        warn!(notice = %err.notice(), error = %err, input = %input.display(), "record not exported");
        AppError::from(err)
    })?;

    info!(input = %input.display(), output = %path.display(), "record exported");
    Ok(path)
}

pub(crate) fn run_template() -> Result<(), AppError> {
    println!("{}", template_json()?);
    Ok(())
}

fn template_json() -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&ApplicantRecord::default())?)
}

fn read_record(path: &Path) -> Result<ApplicantRecord, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
