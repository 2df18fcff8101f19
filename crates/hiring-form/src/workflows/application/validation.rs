use super::domain::ApplicantRecord;

/// Notice shown when an export is attempted without the applicant's name.
pub const MISSING_NAME_NOTICE: &str = "لطفاً حداقل نام و نام خانوادگی را وارد کنید.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", MISSING_NAME_NOTICE)]
    MissingName {
        first_name: bool,
        last_name: bool,
    },
}

impl ValidationError {
    pub fn notice(&self) -> &'static str {
        match self {
            ValidationError::MissingName { .. } => MISSING_NAME_NOTICE,
        }
    }
}

/// The only precondition on exporting: first and last name are filled in.
pub fn validate_for_export(record: &ApplicantRecord) -> Result<(), ValidationError> {
    let first_name = record.first_name.trim().is_empty();
    let last_name = record.last_name.trim().is_empty();

    if first_name || last_name {
        return Err(ValidationError::MissingName {
            first_name,
            last_name,
        });
    }
    Ok(())
}
