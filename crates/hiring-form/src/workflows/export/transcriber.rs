use super::document::{Block, ExportDocument, Table, TitleSize};
use super::labels;
use crate::workflows::application::domain::ApplicantRecord;

pub const INVOCATION: &str = "به نام خدا";
pub const FORM_TITLE: &str = "فرم درخواست استخدام شرکت آراز پخش تنکا";
pub const ATTESTATION: &str = "صحت کلیه اطلاعات مندرج در این فرم را تأیید و گواهی می‌نمایم.";
pub const TRAINING_CAPTION: &str = "دوره‌های آموزشی گذرانده شده:";

pub const SECTION_PERSONAL: &str = "۱. اطلاعات شخصی";
pub const SECTION_MILITARY: &str = "۲. خدمت نظام وظیفه";
pub const SECTION_EDUCATION: &str = "۳. سوابق تحصیلی";
pub const SECTION_WORK: &str = "۴. تجربیات شغلی";
pub const SECTION_LEGAL: &str = "۵ و ۶. سوابق کیفری و عادات";
pub const SECTION_SKILLS: &str = "۷. مهارت‌ها";
pub const SECTION_ACTIVITIES: &str = "۸. فعالیت‌های درخواستی";
pub const SECTION_COOPERATION: &str = "۹. نحوه همکاری";
pub const SECTION_PERSONALITY: &str = "۱۰. روحیات";
pub const SECTION_MARKETING: &str = "۱۱. زمینه بازاریابی";
pub const SECTION_INSURANCE: &str = "۱۲ و ۱۳. بیمه و آشنایی";
pub const SECTION_GUARANTORS: &str = "۱۴. ضامن‌ها";
pub const SECTION_CONDITIONS: &str = "۱۵ تا ۱۸. شرایط شغلی";
pub const SECTION_DEPENDANTS: &str = "۱۹. افراد تحت تکفل";
pub const SECTION_ADDRESS: &str = "۲۰. آدرس و تماس";

pub const LABEL_FULL_NAME: &str = "نام و نام خانوادگی";
pub const LABEL_MARITAL_STATUS: &str = "وضعیت تأهل";
pub const LABEL_MILITARY_STATUS: &str = "وضعیت";
pub const LABEL_EXEMPTION_REASON: &str = "علت معافیت";
pub const LABEL_CRIMINAL_RECORD: &str = "سابقه کیفری/بازداشت";
pub const LABEL_COMPUTER_SKILLS: &str = "مهارت‌های کامپیوتر";
pub const LABEL_JOB_INTERESTS: &str = "علاقمندی‌ها";
pub const LABEL_MARKETING_AREAS: &str = "زمینه‌های توانایی";
pub const LABEL_GUARANTEE_TYPE: &str = "نوع تضمین";
pub const LABEL_TEAMWORK: &str = "روحیه کار تیمی";

pub const EDUCATION_HEADERS: [&str; 7] = [
    "مقطع",
    "رشته",
    "معدل",
    "تاریخ پایان",
    "نوع دانشگاه",
    "موسسه",
    "شهر",
];
pub const WORK_HEADERS: [&str; 7] = [
    "سازمان",
    "سمت",
    "مدت",
    "پایان همکاری",
    "تلفن",
    "حقوق",
    "علت ترک",
];
pub const TRAINING_HEADERS: [&str; 6] = [
    "نام دوره",
    "موسسه",
    "مدت",
    "تاریخ شروع",
    "مدرک دارد؟",
    "توضیحات",
];
pub const GUARANTOR_HEADERS: [&str; 5] = ["نام", "نسبت", "شغل", "نشانی", "تلفن"];
pub const FAMILY_HEADERS: [&str; 6] = ["نام", "نسبت", "جنسیت", "شغل", "تولد", "کدملی"];

/// Transcribes a record into the fixed, numbered document layout.
///
/// Conditional form fields (exemption reason, criminal record description)
/// are always emitted; visibility rules belong to the form, not the export.
pub fn transcribe(record: &ApplicantRecord) -> ExportDocument {
    let mut doc = Transcript::default();

    doc.title(INVOCATION, TitleSize::Invocation);
    doc.title(FORM_TITLE, TitleSize::FormName);
    doc.text("عنوان شغلی مورد نظر", &record.target_job_title);

    doc.heading(SECTION_PERSONAL);
    doc.line(
        LABEL_FULL_NAME,
        format!("{} {}", record.first_name, record.last_name),
    );
    doc.text("نام پدر", &record.father_name);
    doc.text("شماره شناسنامه", &record.id_number);
    doc.text("کد ملی", &record.national_id);
    doc.text("تاریخ تولد", &record.birth_date);
    doc.line(
        "محل تولد / صدور",
        format!("{} / {}", record.birth_place, record.issue_place),
    );
    doc.text("دین (مذهب)", &record.religion);
    doc.text(
        LABEL_MARITAL_STATUS,
        labels::marital_status(&record.marital_status),
    );
    doc.line(
        "تعداد فرزند",
        format!(
            "دختر: {} | پسر: {}",
            record.children_count_daughter, record.children_count_son
        ),
    );
    doc.text("وضعیت سلامت", labels::health_status(&record.health_status));
    doc.text("گروه خونی", &record.blood_type);
    doc.text("سابقه بیماری", &record.medical_history);
    doc.text("سابقه جراحی", &record.surgery_history);
    doc.text("توضیحات پزشکی", &record.medical_condition_description);
    doc.text("داروی مصرفی", &record.medication_description);

    doc.heading(SECTION_MILITARY);
    doc.text(
        LABEL_MILITARY_STATUS,
        labels::military_status(&record.military_status),
    );
    doc.text(LABEL_EXEMPTION_REASON, &record.exemption_reason);

    doc.heading(SECTION_EDUCATION);
    doc.table(
        Table::new(&EDUCATION_HEADERS).with_rows(record.education_history.iter().map(|entry| {
            cells([
                entry.degree.as_str(),
                entry.major.as_str(),
                entry.gpa.as_str(),
                entry.end_date.as_str(),
                entry.university_type.as_str(),
                entry.institute_name.as_str(),
                entry.city.as_str(),
            ])
        })),
    );

    doc.heading(SECTION_WORK);
    doc.table(
        Table::new(&WORK_HEADERS).with_rows(record.work_history.iter().map(|entry| {
            cells([
                entry.organization.as_str(),
                entry.role.as_str(),
                entry.duration.as_str(),
                entry.end_date.as_str(),
                entry.phone.as_str(),
                entry.salary.as_str(),
                entry.reason_for_leaving.as_str(),
            ])
        })),
    );

    doc.heading(SECTION_LEGAL);
    doc.flag(LABEL_CRIMINAL_RECORD, record.criminal_record);
    doc.text("توضیح سابقه", &record.criminal_record_desc);
    doc.flag("مصرف سیگار/مواد", record.smoking_drugs);

    doc.heading(SECTION_SKILLS);
    doc.text(
        "زبان انگلیسی (خواندن)",
        labels::language_level(&record.lang_english_read),
    );
    doc.text(
        "زبان انگلیسی (نوشتن)",
        labels::language_level(&record.lang_english_write),
    );
    doc.text(
        "زبان انگلیسی (مکالمه)",
        labels::language_level(&record.lang_english_speak),
    );
    doc.line(
        LABEL_COMPUTER_SKILLS,
        labels::flag_list(&record.computer_skills, labels::COMPUTER_SKILL_LABELS),
    );
    doc.caption(TRAINING_CAPTION);
    doc.table(
        Table::new(&TRAINING_HEADERS).with_rows(record.training_courses.iter().map(|entry| {
            cells([
                entry.name.as_str(),
                entry.institute.as_str(),
                entry.duration.as_str(),
                entry.start_date.as_str(),
                labels::yes_no(entry.has_certificate),
                entry.description.as_str(),
            ])
        })),
    );

    doc.heading(SECTION_ACTIVITIES);
    doc.line(
        LABEL_JOB_INTERESTS,
        labels::flag_list(&record.job_types, labels::JOB_TYPE_LABELS),
    );
    doc.text("نوع گواهینامه", &record.driver_license_type);
    doc.text("مدارک مرتبط", &record.relevant_docs);

    doc.heading(SECTION_COOPERATION);
    doc.text(
        "نوع همکاری",
        labels::cooperation_type(&record.cooperation_type),
    );
    doc.line(
        "آمادگی اضافه کاری",
        affirm_with(record.can_overtime, || {
            format!("{} ({} ساعت)", labels::YES, record.overtime_hours)
        }),
    );
    doc.flag("کار در تعطیلات", record.can_weekends);

    doc.heading(SECTION_PERSONALITY);
    doc.text(LABEL_TEAMWORK, labels::teamwork(&record.teamwork));
    doc.text("علاقمندی‌ها", &record.interests);
    doc.line(
        "چالش شخصی/خانوادگی",
        affirm_with(record.personal_challenges, || {
            format!("{} - {}", labels::YES, record.personal_challenges_desc)
        }),
    );
    doc.text("شخصیت", &record.introvert_extrovert);
    doc.text("ویژگی متمایز", &record.unique_traits);

    doc.heading(SECTION_MARKETING);
    doc.line(
        LABEL_MARKETING_AREAS,
        labels::flag_list(&record.marketing_interest, labels::MARKETING_AREA_LABELS),
    );
    let zones = if record.can_work_all_zones {
        labels::YES.to_string()
    } else {
        format!("{} - عدم توانایی در: {}", labels::NO, record.restricted_zones_desc)
    };
    doc.line("امکان کار در همه مناطق", zones);

    doc.heading(SECTION_INSURANCE);
    doc.line(
        "سابقه بیمه",
        affirm_with(record.has_insurance_history, || {
            format!("{} - {} سال", labels::YES, record.insurance_years)
        }),
    );
    doc.text("شماره بیمه", &record.insurance_number);
    doc.text("نحوه آشنایی", &record.how_did_you_find_us);

    doc.heading(SECTION_GUARANTORS);
    doc.table(
        Table::new(&GUARANTOR_HEADERS).with_rows(record.guarantors.iter().map(|entry| {
            cells([
                entry.name.as_str(),
                entry.relation.as_str(),
                entry.job.as_str(),
                entry.address.as_str(),
                entry.phone.as_str(),
            ])
        })),
    );

    doc.heading(SECTION_CONDITIONS);
    let guarantee = labels::guarantee_type(&record.guarantee_type)
        .unwrap_or(record.guarantee_type_other.as_str());
    doc.text(LABEL_GUARANTEE_TYPE, guarantee);
    doc.line(
        "شاغل فعلی",
        affirm_with(record.currently_employed, || {
            format!("{} - {}", labels::YES, record.current_employment_desc)
        }),
    );
    doc.flag("مأموریت شهرستان", record.willing_to_relocate);
    doc.text("حقوق درخواستی", &record.expected_salary);
    doc.text(
        "ترجیح حقوق",
        labels::salary_preference(&record.salary_preference),
    );

    doc.heading(SECTION_DEPENDANTS);
    doc.flag("سرپرست خانواده هستید؟", record.is_head_of_household);
    doc.table(
        Table::new(&FAMILY_HEADERS).with_rows(record.family_members.iter().map(|entry| {
            cells([
                entry.name.as_str(),
                entry.relation.as_str(),
                entry.gender.as_str(),
                entry.job.as_str(),
                entry.birth_date.as_str(),
                entry.national_id.as_str(),
            ])
        })),
    );

    doc.heading(SECTION_ADDRESS);
    doc.text("وضعیت مسکن", labels::home_type(&record.home_type));
    doc.text("آدرس", &record.address);
    doc.text("کد پستی", &record.postal_code);
    doc.text("تلفن ثابت", &record.phone_fixed);
    doc.text("موبایل", &record.mobile);
    doc.text("تلفن اضطراری", &record.phone_emergency);

    doc.attestation(ATTESTATION);

    doc.finish()
}

fn cells<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.into_iter().map(labels::cell).collect()
}

fn affirm_with(value: bool, detail: impl FnOnce() -> String) -> String {
    if value {
        detail()
    } else {
        labels::NO.to_string()
    }
}

#[derive(Default)]
struct Transcript {
    document: ExportDocument,
}

impl Transcript {
    fn title(&mut self, text: &str, size: TitleSize) {
        self.document.push(Block::Title {
            text: text.to_string(),
            size,
        });
    }

    fn heading(&mut self, title: &str) {
        self.document.push(Block::Heading(title.to_string()));
    }

    /// Text value, substituting the placeholder when empty.
    fn text(&mut self, label: &str, value: &str) {
        self.line(label, labels::text(value));
    }

    fn flag(&mut self, label: &str, value: bool) {
        self.line(label, labels::flag(value).to_string());
    }

    /// Pre-rendered value, emitted verbatim.
    fn line(&mut self, label: &str, value: String) {
        self.document.push(Block::LabelValue {
            label: label.to_string(),
            value,
        });
    }

    fn caption(&mut self, text: &str) {
        self.document.push(Block::Caption(text.to_string()));
    }

    fn table(&mut self, table: Table) {
        self.document.push(Block::Table(table));
    }

    fn attestation(&mut self, text: &str) {
        self.document.push(Block::Attestation(text.to_string()));
    }

    fn finish(self) -> ExportDocument {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::application::domain::{
        CooperationType, EducationRecord, EntryId, GuaranteeType, HealthStatus, HomeType,
        LanguageLevel, MaritalStatus, MilitaryStatus, SalaryPreference, TeamworkLevel,
        TrainingCourse,
    };

    fn record() -> ApplicantRecord {
        ApplicantRecord {
            first_name: "Ali".to_string(),
            last_name: "Rezai".to_string(),
            marital_status: MaritalStatus::Married,
            ..ApplicantRecord::default()
        }
    }

    #[test]
    fn layout_starts_with_titles_and_lists_sections_in_order() {
        let doc = transcribe(&record());

        assert!(matches!(
            &doc.blocks[0],
            Block::Title { text, size: TitleSize::Invocation } if text == INVOCATION
        ));
        assert!(matches!(
            &doc.blocks[1],
            Block::Title { text, size: TitleSize::FormName } if text == FORM_TITLE
        ));
        assert!(matches!(doc.blocks.last(), Some(Block::Attestation(text)) if text == ATTESTATION));

        let headings: Vec<&str> = doc.headings().collect();
        assert_eq!(
            headings,
            vec![
                SECTION_PERSONAL,
                SECTION_MILITARY,
                SECTION_EDUCATION,
                SECTION_WORK,
                SECTION_LEGAL,
                SECTION_SKILLS,
                SECTION_ACTIVITIES,
                SECTION_COOPERATION,
                SECTION_PERSONALITY,
                SECTION_MARKETING,
                SECTION_INSURANCE,
                SECTION_GUARANTORS,
                SECTION_CONDITIONS,
                SECTION_DEPENDANTS,
                SECTION_ADDRESS,
            ]
        );
    }

    #[test]
    fn combines_related_fields_into_one_line() {
        let mut record = record();
        record.birth_place = "Tabriz".to_string();
        record.issue_place = "Tehran".to_string();
        record.children_count_daughter = "1".to_string();
        record.children_count_son = "2".to_string();

        let doc = transcribe(&record);
        assert_eq!(doc.value_of(LABEL_FULL_NAME), Some("Ali Rezai"));
        assert_eq!(doc.value_of("محل تولد / صدور"), Some("Tabriz / Tehran"));
        assert_eq!(doc.value_of("تعداد فرزند"), Some("دختر: 1 | پسر: 2"));
    }

    #[test]
    fn empty_text_fields_render_the_placeholder() {
        let doc = transcribe(&record());
        assert_eq!(doc.value_of("نام پدر"), Some(labels::EMPTY_VALUE));
        assert_eq!(doc.value_of("عنوان شغلی مورد نظر"), Some(labels::EMPTY_VALUE));
        assert_eq!(doc.value_of("تلفن اضطراری"), Some(labels::EMPTY_VALUE));
    }

    #[test]
    fn empty_flag_groups_render_an_empty_value() {
        let doc = transcribe(&record());
        assert_eq!(doc.value_of(LABEL_COMPUTER_SKILLS), Some(""));
        assert_eq!(doc.value_of(LABEL_JOB_INTERESTS), Some(""));
        assert_eq!(doc.value_of(LABEL_MARKETING_AREAS), Some(""));
    }

    #[test]
    fn exemption_reason_is_emitted_whatever_the_military_status() {
        let mut record = record();
        record.military_status = MilitaryStatus::Done;
        record.exemption_reason = "medical".to_string();

        let doc = transcribe(&record);
        assert_eq!(doc.value_of(LABEL_MILITARY_STATUS), Some("انجام داده"));
        assert_eq!(doc.value_of(LABEL_EXEMPTION_REASON), Some("medical"));
    }

    #[test]
    fn conditional_detail_lines_use_the_flag() {
        let mut record = record();
        record.can_overtime = true;
        record.overtime_hours = "10".to_string();
        record.has_insurance_history = false;
        record.insurance_years = "4".to_string();
        record.can_work_all_zones = false;
        record.restricted_zones_desc = "north".to_string();

        let doc = transcribe(&record);
        assert_eq!(doc.value_of("آمادگی اضافه کاری"), Some("بله (10 ساعت)"));
        assert_eq!(doc.value_of("سابقه بیمه"), Some("خیر"));
        assert_eq!(
            doc.value_of("امکان کار در همه مناطق"),
            Some("خیر - عدم توانایی در: north")
        );
    }

    #[test]
    fn other_guarantee_uses_the_free_text_description() {
        let mut record = record();
        record.guarantee_type = GuaranteeType::Other;
        record.guarantee_type_other = "cheque".to_string();
        assert_eq!(transcribe(&record).value_of(LABEL_GUARANTEE_TYPE), Some("cheque"));

        record.guarantee_type_other.clear();
        assert_eq!(
            transcribe(&record).value_of(LABEL_GUARANTEE_TYPE),
            Some(labels::EMPTY_VALUE)
        );

        record.guarantee_type = GuaranteeType::PromissoryGovt;
        assert_eq!(
            transcribe(&record).value_of(LABEL_GUARANTEE_TYPE),
            Some("سفته با ضامن دولتی")
        );
    }

    #[test]
    fn repeating_entries_render_one_row_each() {
        let mut record = record();
        record.education_history.push(EducationRecord {
            id: EntryId::generate(),
            degree: "B.Sc.".to_string(),
            ..EducationRecord::default()
        });
        record.training_courses.push(TrainingCourse {
            id: EntryId::generate(),
            name: "Excel".to_string(),
            has_certificate: true,
            ..TrainingCourse::default()
        });

        let doc = transcribe(&record);
        let education = doc.table_after(SECTION_EDUCATION).expect("education table");
        assert_eq!(education.headers, EDUCATION_HEADERS.to_vec());
        assert_eq!(education.rows.len(), 1);
        assert_eq!(education.rows[0][0], "B.Sc.");
        assert!(education.rows[0][1..]
            .iter()
            .all(|cell| cell == labels::EMPTY_CELL));

        let training = doc.table_after(SECTION_SKILLS).expect("training table");
        assert_eq!(
            training.rows[0],
            vec!["Excel", "-", "-", "-", "بله", "-"]
        );
    }

    #[test]
    fn boolean_lines_render_affirmative_or_negative_tokens() {
        let lines: [(&str, fn(&mut ApplicantRecord, bool)); 5] = [
            (LABEL_CRIMINAL_RECORD, |r, v| r.criminal_record = v),
            ("مصرف سیگار/مواد", |r, v| r.smoking_drugs = v),
            ("کار در تعطیلات", |r, v| r.can_weekends = v),
            ("مأموریت شهرستان", |r, v| r.willing_to_relocate = v),
            ("سرپرست خانواده هستید؟", |r, v| r.is_head_of_household = v),
        ];

        for (label, set) in lines {
            for (value, token) in [(true, labels::AFFIRMATIVE), (false, labels::NEGATIVE)] {
                let mut record = record();
                set(&mut record, value);
                assert_eq!(transcribe(&record).value_of(label), Some(token), "{label}");
            }
        }
    }

    #[test]
    fn choice_lines_use_the_field_labels() {
        let mut record = record();
        record.health_status = HealthStatus::Unhealthy;
        record.military_status = MilitaryStatus::Exempt;
        record.lang_english_read = LanguageLevel::Good;
        record.lang_english_write = LanguageLevel::Unrecognized("fluent".to_string());
        record.lang_english_speak = LanguageLevel::Weak;
        record.cooperation_type = CooperationType::PartTime;
        record.teamwork = TeamworkLevel::Unrecognized("legendary".to_string());
        record.guarantee_type = GuaranteeType::PromissoryMarket;
        record.salary_preference = SalaryPreference::Commission;
        record.home_type = HomeType::Rented;

        let doc = transcribe(&record);
        for (label, expected) in [
            (LABEL_MARITAL_STATUS, "متأهل"),
            ("وضعیت سلامت", "مشکل دارم"),
            (LABEL_MILITARY_STATUS, "معاف"),
            ("زبان انگلیسی (خواندن)", "خوب"),
            ("زبان انگلیسی (نوشتن)", labels::EMPTY_VALUE),
            ("زبان انگلیسی (مکالمه)", "ضعیف"),
            ("نوع همکاری", "پاره وقت"),
            (LABEL_TEAMWORK, labels::EMPTY_VALUE),
            (LABEL_GUARANTEE_TYPE, "سفته با ضامن بازاری"),
            ("ترجیح حقوق", "پورسانت"),
            ("وضعیت مسکن", "اجاره"),
        ] {
            assert_eq!(doc.value_of(label), Some(expected), "{label}");
        }
    }
}
