//! Applicant form state: the record being filled in, its repeating tables,
//! export validation and the draft service exposed over HTTP.

pub mod domain;
pub mod form;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantRecord, ComputerSkill, ComputerSkills, CooperationType, EducationRecord, EntryId,
    FamilyMember, FlagGroup, Guarantor, GuaranteeType, HealthStatus, HomeType, JobType, JobTypes,
    LanguageLevel, MaritalStatus, MarketingArea, MarketingInterest, MilitaryStatus,
    RepeatingEntry, SalaryPreference, TeamworkLevel, TrainingCourse, WorkExperience,
};
pub use form::{ApplicationForm, Collection, FormEditError};
pub use repository::{FormId, FormRepository, RepositoryError};
pub use router::{form_router, EditRequest};
pub use service::{ApplicationFormService, FormServiceError};
pub use validation::{validate_for_export, ValidationError, MISSING_NAME_NOTICE};
