//! Fixed display text used by the transcriber.
//!
//! Every token and lookup table here is part of the document contract: the
//! exported file must read the same for the same record.

use crate::workflows::application::domain::{
    ComputerSkill, CooperationType, FlagGroup, GuaranteeType, HealthStatus, HomeType, JobType,
    LanguageLevel, MaritalStatus, MarketingArea, MilitaryStatus, SalaryPreference, TeamworkLevel,
};

pub const AFFIRMATIVE: &str = "بله ☑";
pub const NEGATIVE: &str = "خیر ☐";
pub const YES: &str = "بله";
pub const NO: &str = "خیر";

/// Stands in for an empty label/value line.
pub const EMPTY_VALUE: &str = "---";
/// Stands in for an empty table cell.
pub const EMPTY_CELL: &str = "-";

pub const FLAG_SEPARATOR: &str = " , ";

pub const COMPUTER_SKILL_LABELS: &[(ComputerSkill, &str)] = &[
    (ComputerSkill::Word, "Word"),
    (ComputerSkill::Excel, "Excel"),
    (ComputerSkill::PowerPoint, "PowerPoint"),
    (ComputerSkill::Windows, "Windows"),
    (ComputerSkill::Internet, "Internet"),
    (ComputerSkill::Typing, "تایپ"),
    (ComputerSkill::Access, "Access"),
];

pub const JOB_TYPE_LABELS: &[(JobType, &str)] = &[
    (JobType::Admin, "کارمند اداری"),
    (JobType::PhoneSales, "بازاریابی تلفنی"),
    (JobType::FieldSales, "بازاریابی حضوری"),
    (JobType::Distributor, "توزیع کننده"),
    (JobType::Finance, "امور مالی"),
    (JobType::Secretary, "منشی"),
    (JobType::Service, "نیروی خدماتی"),
    (JobType::Warehouse, "کارگر انبار"),
    (JobType::Driver, "راننده"),
    (JobType::Anything, "هر کاری بتوانم"),
];

pub const MARKETING_AREA_LABELS: &[(MarketingArea, &str)] = &[
    (MarketingArea::B2b, "B2B"),
    (MarketingArea::Retail, "خرده فروشی"),
    (MarketingArea::Restaurant, "رستوران"),
    (MarketingArea::Advertising, "تبلیغاتی"),
    (MarketingArea::Internet, "اینترنتی"),
];

pub fn flag(value: bool) -> &'static str {
    if value {
        AFFIRMATIVE
    } else {
        NEGATIVE
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        YES
    } else {
        NO
    }
}

pub fn text(value: &str) -> String {
    or_placeholder(value, EMPTY_VALUE)
}

pub fn cell(value: &str) -> String {
    or_placeholder(value, EMPTY_CELL)
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Labels of the active flags in table order; an empty group yields `""`.
pub fn flag_list<G: FlagGroup>(group: &G, labels: &[(G::Flag, &str)]) -> String {
    labels
        .iter()
        .filter(|(flag, _)| group.is_set(*flag))
        .map(|(_, label)| *label)
        .collect::<Vec<_>>()
        .join(FLAG_SEPARATOR)
}

pub fn marital_status(value: &MaritalStatus) -> &'static str {
    match value {
        MaritalStatus::Single => "مجرد",
        MaritalStatus::Married => "متأهل",
        MaritalStatus::Divorced | MaritalStatus::Unrecognized(_) => "مطلقه",
    }
}

pub fn health_status(value: &HealthStatus) -> &'static str {
    match value {
        HealthStatus::Healthy => "سالم هستم",
        HealthStatus::Unhealthy | HealthStatus::Unrecognized(_) => "مشکل دارم",
    }
}

pub fn military_status(value: &MilitaryStatus) -> &'static str {
    match value {
        MilitaryStatus::Done => "انجام داده",
        MilitaryStatus::Exempt => "معاف",
        MilitaryStatus::NotDone | MilitaryStatus::Unrecognized(_) => "انجام نداده",
    }
}

pub fn language_level(value: &LanguageLevel) -> &'static str {
    match value {
        LanguageLevel::Weak => "ضعیف",
        LanguageLevel::Medium => "متوسط",
        LanguageLevel::Good => "خوب",
        LanguageLevel::Excellent => "عالی",
        LanguageLevel::Unrecognized(_) => EMPTY_VALUE,
    }
}

pub fn teamwork(value: &TeamworkLevel) -> &'static str {
    match value {
        TeamworkLevel::Good => "خوب",
        TeamworkLevel::Medium => "متوسط",
        TeamworkLevel::Weak => "ضعیف",
        TeamworkLevel::Unrecognized(_) => EMPTY_VALUE,
    }
}

pub fn cooperation_type(value: &CooperationType) -> &'static str {
    match value {
        CooperationType::FullTime => "تمام وقت",
        CooperationType::PartTime => "پاره وقت",
        CooperationType::Remote | CooperationType::Unrecognized(_) => "دورکاری",
    }
}

/// `None` means the free-text "other" guarantee description applies.
pub fn guarantee_type(value: &GuaranteeType) -> Option<&'static str> {
    match value {
        GuaranteeType::PromissoryGovt => Some("سفته با ضامن دولتی"),
        GuaranteeType::PromissoryMarket => Some("سفته با ضامن بازاری"),
        GuaranteeType::Other | GuaranteeType::Unrecognized(_) => None,
    }
}

pub fn salary_preference(value: &SalaryPreference) -> &'static str {
    match value {
        SalaryPreference::Fixed => "ثابت",
        SalaryPreference::Commission => "پورسانت",
        SalaryPreference::Mixed | SalaryPreference::Unrecognized(_) => "ترکیبی",
    }
}

pub fn home_type(value: &HomeType) -> &'static str {
    match value {
        HomeType::Owned => "شخصی",
        HomeType::Rented => "اجاره",
        HomeType::Parents => "منزل والدین",
        HomeType::Other | HomeType::Unrecognized(_) => "سایر",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::application::domain::{ComputerSkills, JobTypes, MarketingInterest};

    #[test]
    fn booleans_render_as_fixed_tokens() {
        assert_eq!(flag(true), "بله ☑");
        assert_eq!(flag(false), "خیر ☐");
        assert_eq!(yes_no(true), "بله");
        assert_eq!(yes_no(false), "خیر");
    }

    #[test]
    fn empty_text_renders_placeholders() {
        assert_eq!(text(""), EMPTY_VALUE);
        assert_eq!(cell(""), EMPTY_CELL);
        assert_eq!(text("O+"), "O+");
        assert_eq!(cell("Tabriz"), "Tabriz");
    }

    #[test]
    fn empty_flag_group_renders_empty_string() {
        assert_eq!(flag_list(&JobTypes::default(), JOB_TYPE_LABELS), "");
        assert_eq!(
            flag_list(&MarketingInterest::default(), MARKETING_AREA_LABELS),
            ""
        );
    }

    #[test]
    fn flag_list_follows_declared_order() {
        let skills = ComputerSkills {
            access: true,
            word: true,
            typing: true,
            ..ComputerSkills::default()
        };
        assert_eq!(
            flag_list(&skills, COMPUTER_SKILL_LABELS),
            "Word , تایپ , Access"
        );

        let jobs = JobTypes {
            anything: true,
            driver: true,
            admin: true,
            ..JobTypes::default()
        };
        assert_eq!(
            flag_list(&jobs, JOB_TYPE_LABELS),
            "کارمند اداری , راننده , هر کاری بتوانم"
        );
    }

    #[test]
    fn unlabelled_other_flag_is_never_rendered() {
        let skills = ComputerSkills {
            other: true,
            ..ComputerSkills::default()
        };
        assert_eq!(flag_list(&skills, COMPUTER_SKILL_LABELS), "");
    }

    #[test]
    fn every_flag_group_renders_one_label_per_active_flag() {
        let all_jobs = JobTypes {
            admin: true,
            phone_sales: true,
            field_sales: true,
            distributor: true,
            finance: true,
            secretary: true,
            service: true,
            warehouse: true,
            anything: true,
            driver: true,
        };
        let rendered = flag_list(&all_jobs, JOB_TYPE_LABELS);
        assert_eq!(rendered.split(FLAG_SEPARATOR).count(), JOB_TYPE_LABELS.len());

        let all_areas = MarketingInterest {
            b2b: true,
            retail: true,
            restaurant: true,
            advertising: true,
            internet: true,
        };
        assert_eq!(
            flag_list(&all_areas, MARKETING_AREA_LABELS),
            "B2B , خرده فروشی , رستوران , تبلیغاتی , اینترنتی"
        );
    }

    #[test]
    fn marital_status_labels() {
        for (value, label) in [
            (MaritalStatus::Single, "مجرد"),
            (MaritalStatus::Married, "متأهل"),
            (MaritalStatus::Divorced, "مطلقه"),
            (MaritalStatus::Unrecognized("widowed".to_string()), "مطلقه"),
        ] {
            assert_eq!(marital_status(&value), label, "{value:?}");
        }
    }

    #[test]
    fn health_status_labels() {
        for (value, label) in [
            (HealthStatus::Healthy, "سالم هستم"),
            (HealthStatus::Unhealthy, "مشکل دارم"),
            (HealthStatus::Unrecognized("unknown".to_string()), "مشکل دارم"),
        ] {
            assert_eq!(health_status(&value), label, "{value:?}");
        }
    }

    #[test]
    fn military_status_labels() {
        for (value, label) in [
            (MilitaryStatus::Done, "انجام داده"),
            (MilitaryStatus::NotDone, "انجام نداده"),
            (MilitaryStatus::Exempt, "معاف"),
            (MilitaryStatus::Unrecognized("postponed".to_string()), "انجام نداده"),
        ] {
            assert_eq!(military_status(&value), label, "{value:?}");
        }
    }

    #[test]
    fn language_level_labels() {
        for (value, label) in [
            (LanguageLevel::Weak, "ضعیف"),
            (LanguageLevel::Medium, "متوسط"),
            (LanguageLevel::Good, "خوب"),
            (LanguageLevel::Excellent, "عالی"),
            (LanguageLevel::Unrecognized("native".to_string()), EMPTY_VALUE),
        ] {
            assert_eq!(language_level(&value), label, "{value:?}");
        }
    }

    #[test]
    fn teamwork_labels() {
        for (value, label) in [
            (TeamworkLevel::Good, "خوب"),
            (TeamworkLevel::Medium, "متوسط"),
            (TeamworkLevel::Weak, "ضعیف"),
            (TeamworkLevel::Unrecognized("legendary".to_string()), EMPTY_VALUE),
        ] {
            assert_eq!(teamwork(&value), label, "{value:?}");
        }
    }

    #[test]
    fn cooperation_type_labels() {
        for (value, label) in [
            (CooperationType::FullTime, "تمام وقت"),
            (CooperationType::PartTime, "پاره وقت"),
            (CooperationType::Remote, "دورکاری"),
            (CooperationType::Unrecognized("seasonal".to_string()), "دورکاری"),
        ] {
            assert_eq!(cooperation_type(&value), label, "{value:?}");
        }
    }

    #[test]
    fn guarantee_type_labels() {
        for (value, label) in [
            (GuaranteeType::PromissoryGovt, Some("سفته با ضامن دولتی")),
            (GuaranteeType::PromissoryMarket, Some("سفته با ضامن بازاری")),
            (GuaranteeType::Other, None),
            (GuaranteeType::Unrecognized("deed".to_string()), None),
        ] {
            assert_eq!(guarantee_type(&value), label, "{value:?}");
        }
    }

    #[test]
    fn salary_preference_labels() {
        for (value, label) in [
            (SalaryPreference::Fixed, "ثابت"),
            (SalaryPreference::Commission, "پورسانت"),
            (SalaryPreference::Mixed, "ترکیبی"),
            (SalaryPreference::Unrecognized("hourly".to_string()), "ترکیبی"),
        ] {
            assert_eq!(salary_preference(&value), label, "{value:?}");
        }
    }

    #[test]
    fn home_type_labels() {
        for (value, label) in [
            (HomeType::Owned, "شخصی"),
            (HomeType::Rented, "اجاره"),
            (HomeType::Parents, "منزل والدین"),
            (HomeType::Other, "سایر"),
            (HomeType::Unrecognized("dorm".to_string()), "سایر"),
        ] {
            assert_eq!(home_type(&value), label, "{value:?}");
        }
    }
}
