use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier attached to every repeating entry so edits can address it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One employment application as captured by the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantRecord {
    pub target_job_title: String,

    pub first_name: String,
    pub last_name: String,
    pub father_name: String,
    /// Birth certificate number.
    pub id_number: String,
    pub birth_date: String,
    pub national_id: String,
    pub issue_place: String,
    pub birth_place: String,
    pub religion: String,
    pub marital_status: MaritalStatus,
    pub children_count_daughter: String,
    pub children_count_son: String,
    pub health_status: HealthStatus,
    pub blood_type: String,
    pub medical_condition_description: String,
    pub medication_description: String,
    pub medical_history: String,
    pub surgery_history: String,

    pub military_status: MilitaryStatus,
    pub exemption_reason: String,

    pub education_history: Vec<EducationRecord>,
    pub work_history: Vec<WorkExperience>,

    pub criminal_record: bool,
    pub criminal_record_desc: String,
    pub smoking_drugs: bool,

    pub lang_english_read: LanguageLevel,
    pub lang_english_write: LanguageLevel,
    pub lang_english_speak: LanguageLevel,
    pub computer_skills: ComputerSkills,
    pub training_courses: Vec<TrainingCourse>,

    pub job_types: JobTypes,
    pub driver_license_type: String,
    pub relevant_docs: String,

    pub cooperation_type: CooperationType,
    pub can_overtime: bool,
    pub overtime_hours: String,
    pub can_weekends: bool,

    pub teamwork: TeamworkLevel,
    pub interests: String,
    pub personal_challenges: bool,
    pub personal_challenges_desc: String,
    pub introvert_extrovert: String,
    pub unique_traits: String,

    pub marketing_interest: MarketingInterest,
    pub can_work_all_zones: bool,
    pub restricted_zones_desc: String,

    pub has_insurance_history: bool,
    pub insurance_years: String,
    pub insurance_number: String,

    pub how_did_you_find_us: String,

    pub guarantors: Vec<Guarantor>,
    pub guarantee_type: GuaranteeType,
    pub guarantee_type_other: String,

    pub currently_employed: bool,
    pub current_employment_desc: String,

    pub willing_to_relocate: bool,

    pub expected_salary: String,
    pub salary_preference: SalaryPreference,

    pub is_head_of_household: bool,
    pub family_members: Vec<FamilyMember>,

    pub home_type: HomeType,
    pub address: String,
    pub postal_code: String,
    pub phone_fixed: String,
    pub mobile: String,
    pub phone_emergency: String,
}

/// Behaviour shared by the repeating sub-records of an application.
pub trait RepeatingEntry: Clone + Serialize + serde::de::DeserializeOwned {
    fn blank(id: EntryId) -> Self;
    fn id(&self) -> &EntryId;
}

macro_rules! repeating_entry {
    ($ty:ty) => {
        impl RepeatingEntry for $ty {
            fn blank(id: EntryId) -> Self {
                Self {
                    id,
                    ..Self::default()
                }
            }

            fn id(&self) -> &EntryId {
                &self.id
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRecord {
    pub id: EntryId,
    pub degree: String,
    pub major: String,
    pub gpa: String,
    pub end_date: String,
    pub university_type: String,
    pub institute_name: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub id: EntryId,
    pub organization: String,
    pub role: String,
    pub duration: String,
    pub end_date: String,
    pub phone: String,
    pub salary: String,
    pub reason_for_leaving: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingCourse {
    pub id: EntryId,
    pub name: String,
    pub institute: String,
    pub duration: String,
    pub start_date: String,
    pub has_certificate: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Guarantor {
    pub id: EntryId,
    pub name: String,
    pub relation: String,
    pub job: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyMember {
    pub id: EntryId,
    pub name: String,
    pub gender: String,
    pub relation: String,
    pub job: String,
    pub birth_date: String,
    pub national_id: String,
    pub phone: String,
}

repeating_entry!(EducationRecord);
repeating_entry!(WorkExperience);
repeating_entry!(TrainingCourse);
repeating_entry!(Guarantor);
repeating_entry!(FamilyMember);

/// A fixed set of independent flags rendered as a filtered label list.
pub trait FlagGroup {
    type Flag: Copy;

    fn is_set(&self, flag: Self::Flag) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputerSkills {
    pub word: bool,
    pub excel: bool,
    pub access: bool,
    pub powerpoint: bool,
    pub internet: bool,
    #[serde(rename = "type")]
    pub typing: bool,
    pub windows: bool,
    pub other: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerSkill {
    Word,
    Excel,
    Access,
    PowerPoint,
    Internet,
    Typing,
    Windows,
    Other,
}

impl FlagGroup for ComputerSkills {
    type Flag = ComputerSkill;

    fn is_set(&self, flag: ComputerSkill) -> bool {
        match flag {
            ComputerSkill::Word => self.word,
            ComputerSkill::Excel => self.excel,
            ComputerSkill::Access => self.access,
            ComputerSkill::PowerPoint => self.powerpoint,
            ComputerSkill::Internet => self.internet,
            ComputerSkill::Typing => self.typing,
            ComputerSkill::Windows => self.windows,
            ComputerSkill::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobTypes {
    pub admin: bool,
    pub phone_sales: bool,
    pub field_sales: bool,
    pub distributor: bool,
    pub finance: bool,
    pub secretary: bool,
    pub service: bool,
    pub warehouse: bool,
    pub anything: bool,
    pub driver: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    Admin,
    PhoneSales,
    FieldSales,
    Distributor,
    Finance,
    Secretary,
    Service,
    Warehouse,
    Anything,
    Driver,
}

impl FlagGroup for JobTypes {
    type Flag = JobType;

    fn is_set(&self, flag: JobType) -> bool {
        match flag {
            JobType::Admin => self.admin,
            JobType::PhoneSales => self.phone_sales,
            JobType::FieldSales => self.field_sales,
            JobType::Distributor => self.distributor,
            JobType::Finance => self.finance,
            JobType::Secretary => self.secretary,
            JobType::Service => self.service,
            JobType::Warehouse => self.warehouse,
            JobType::Anything => self.anything,
            JobType::Driver => self.driver,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingInterest {
    pub b2b: bool,
    pub retail: bool,
    pub restaurant: bool,
    pub advertising: bool,
    pub internet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketingArea {
    B2b,
    Retail,
    Restaurant,
    Advertising,
    Internet,
}

impl FlagGroup for MarketingInterest {
    type Flag = MarketingArea;

    fn is_set(&self, flag: MarketingArea) -> bool {
        match flag {
            MarketingArea::B2b => self.b2b,
            MarketingArea::Retail => self.retail,
            MarketingArea::Restaurant => self.restaurant,
            MarketingArea::Advertising => self.advertising,
            MarketingArea::Internet => self.internet,
        }
    }
}

// Every choice field decodes values outside its declared set to
// `Unrecognized`, keeping the raw value so it serializes back unchanged.
// The export applies the field's fallback label to it.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    #[serde(untagged)]
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Unhealthy,
    #[serde(untagged)]
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilitaryStatus {
    #[default]
    Done,
    NotDone,
    Exempt,
    #[serde(untagged)]
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLevel {
    #[default]
    Weak,
    Medium,
    Good,
    Excellent,
    #[serde(untagged)]
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooperationType {
    #[default]
    FullTime,
    PartTime,
    Remote,
    #[serde(untagged)]
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamworkLevel {
    #[default]
    Good,
    Medium,
    Weak,
    #[serde(untagged)]
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuaranteeType {
    #[default]
    PromissoryGovt,
    PromissoryMarket,
    Other,
    #[serde(untagged)]
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryPreference {
    #[default]
    Fixed,
    Commission,
    Mixed,
    #[serde(untagged)]
    Unrecognized(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeType {
    #[default]
    Owned,
    Rented,
    Parents,
    Other,
    #[serde(untagged)]
    Unrecognized(String),
}
