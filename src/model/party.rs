//! Parties: the people that take part in associations.
//!
//! A [`Party`] is one shared record (identifier, contact profile, append-only history) plus a
//! [`Role`] that carries the kind-specific fields. Students and teachers live in the school's
//! registries, patients and doctors in the hospital's; a registry only accepts parties of its
//! own [`RoleKind`].
//!
//! # Actor Framework
//! `Party` implements [`ActorEntity`](actor_framework::ActorEntity), see
//! [`party_actor`](crate::party_actor) for creation, updates and the [`Link`] operations.

use super::{AppointmentId, CourseId, PartyId, RoomId, DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::association::ExclusiveSlot;
use crate::validation::ValidationError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    Student,
    Teacher,
    Patient,
    Doctor,
}

impl Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoleKind::Student => "Student",
            RoleKind::Teacher => "Teacher",
            RoleKind::Patient => "Patient",
            RoleKind::Doctor => "Doctor",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodType {
    pub fn as_str(self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
        }
    }
}

impl Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A+" => Ok(BloodType::APositive),
            "A-" => Ok(BloodType::ANegative),
            "B+" => Ok(BloodType::BPositive),
            "B-" => Ok(BloodType::BNegative),
            "O+" => Ok(BloodType::OPositive),
            "O-" => Ok(BloodType::ONegative),
            "AB+" => Ok(BloodType::AbPositive),
            "AB-" => Ok(BloodType::AbNegative),
            _ => Err(ValidationError::UnknownBloodType(s.to_string())),
        }
    }
}

/// Contact details shared by every role.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl Profile {
    /// Age in whole years on `today`, if the date of birth is known.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth.and_then(|dob| today.years_since(dob))
    }
}

/// A timestamped, append-only history line (grades posted, diagnoses, notes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub at: NaiveDateTime,
    pub text: String,
}

impl HistoryEntry {
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            at: Local::now().naive_local(),
            text: text.into(),
        }
    }
}

impl Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.at.format(TIMESTAMP_FORMAT), self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub blood_pressure: String,
    pub temperature: f64,
    pub heart_rate: u32,
    pub pulse: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsReading {
    pub at: NaiveDateTime,
    pub signs: VitalSigns,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub grade_level: u8,
    pub enrolled_on: NaiveDate,
    pub(crate) courses: Vec<CourseId>,
    pub(crate) grades: BTreeMap<CourseId, f64>,
}

impl StudentRecord {
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub fn grade(&self, course: &CourseId) -> Option<f64> {
        self.grades.get(course).copied()
    }

    /// Mean of the current grades, `0.0` without any.
    pub fn gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.values().sum::<f64>() / self.grades.len() as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherRecord {
    pub subject: String,
    pub hired_on: NaiveDate,
    pub salary: f64,
    pub(crate) courses: Vec<CourseId>,
}

impl TeacherRecord {
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    pub blood_type: BloodType,
    pub(crate) allergies: Vec<String>,
    pub(crate) room: ExclusiveSlot<RoomId>,
    pub(crate) admitted_at: Option<NaiveDateTime>,
    pub(crate) doctor: ExclusiveSlot<PartyId>,
    pub(crate) appointments: Vec<AppointmentId>,
    pub(crate) vitals: Vec<VitalsReading>,
}

impl PatientRecord {
    pub fn allergies(&self) -> &[String] {
        &self.allergies
    }

    pub fn room(&self) -> Option<&RoomId> {
        self.room.holder()
    }

    pub fn admitted_at(&self) -> Option<NaiveDateTime> {
        self.admitted_at
    }

    pub fn is_admitted(&self) -> bool {
        self.room.is_held()
    }

    pub fn doctor(&self) -> Option<&PartyId> {
        self.doctor.holder()
    }

    pub fn appointments(&self) -> &[AppointmentId] {
        &self.appointments
    }

    pub fn vitals(&self) -> &[VitalsReading] {
        &self.vitals
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorRecord {
    pub specialization: String,
    pub license_number: String,
    pub hired_on: NaiveDate,
    pub salary: f64,
    pub(crate) patients: Vec<PartyId>,
    pub(crate) appointments: Vec<AppointmentId>,
}

impl DoctorRecord {
    pub fn patients(&self) -> &[PartyId] {
        &self.patients
    }

    pub fn appointments(&self) -> &[AppointmentId] {
        &self.appointments
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    Student(StudentRecord),
    Teacher(TeacherRecord),
    Patient(PatientRecord),
    Doctor(DoctorRecord),
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Role::Student(_) => RoleKind::Student,
            Role::Teacher(_) => RoleKind::Teacher,
            Role::Patient(_) => RoleKind::Patient,
            Role::Doctor(_) => RoleKind::Doctor,
        }
    }
}

/// Edge kinds a party can hold. The payload is the id of the other side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Student enrolled in a course.
    Course(CourseId),
    /// Teacher teaching a course.
    Teaching(CourseId),
    /// Patient admitted to a room (exclusive).
    Room(RoomId),
    /// Doctor caring for a patient; mirrors the patient's exclusive doctor.
    Patient(PartyId),
    /// Patient or doctor booked on an appointment.
    Appointment(AppointmentId),
}

impl Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Link::Course(id) => write!(f, "course {id}"),
            Link::Teaching(id) => write!(f, "teaching {id}"),
            Link::Room(id) => write!(f, "room {id}"),
            Link::Patient(id) => write!(f, "patient {id}"),
            Link::Appointment(id) => write!(f, "appointment {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Party {
    pub(crate) id: PartyId,
    pub(crate) profile: Profile,
    pub(crate) role: Role,
    pub(crate) history: Vec<HistoryEntry>,
}

impl Party {
    pub fn id(&self) -> &PartyId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn kind(&self) -> RoleKind {
        self.role.kind()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Whether any registry still references this party through a link.
    pub fn is_linked(&self) -> bool {
        match &self.role {
            Role::Student(s) => !s.courses.is_empty(),
            Role::Teacher(t) => !t.courses.is_empty(),
            Role::Patient(p) => p.room.is_held() || p.doctor.is_held() || !p.appointments.is_empty(),
            Role::Doctor(d) => !d.patients.is_empty() || !d.appointments.is_empty(),
        }
    }

    pub fn as_student(&self) -> Option<&StudentRecord> {
        match &self.role {
            Role::Student(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_teacher(&self) -> Option<&TeacherRecord> {
        match &self.role {
            Role::Teacher(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_patient(&self) -> Option<&PatientRecord> {
        match &self.role {
            Role::Patient(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_doctor(&self) -> Option<&DoctorRecord> {
        match &self.role {
            Role::Doctor(record) => Some(record),
            _ => None,
        }
    }

    pub fn summary(&self) -> PartySummary {
        self.summary_on(Local::now().date_naive())
    }

    /// Summary with the age computed on `today`.
    pub fn summary_on(&self, today: NaiveDate) -> PartySummary {
        let role = match &self.role {
            Role::Student(s) => RoleSummary::Student {
                grade_level: s.grade_level,
                enrollment_date: s.enrolled_on.format(DATE_FORMAT).to_string(),
                enrolled_courses: s.courses.clone(),
                gpa: (s.gpa() * 100.0).round() / 100.0,
            },
            Role::Teacher(t) => RoleSummary::Teacher {
                subject: t.subject.clone(),
                hire_date: t.hired_on.format(DATE_FORMAT).to_string(),
                courses_taught: t.courses.clone(),
                salary: t.salary,
            },
            Role::Patient(p) => RoleSummary::Patient {
                blood_type: p.blood_type,
                allergies: p.allergies.clone(),
                assigned_doctor: p.doctor().cloned(),
                is_admitted: p.is_admitted(),
                room: p.room().cloned(),
                total_appointments: p.appointments.len(),
            },
            Role::Doctor(d) => RoleSummary::Doctor {
                specialization: d.specialization.clone(),
                license_number: d.license_number.clone(),
                hire_date: d.hired_on.format(DATE_FORMAT).to_string(),
                total_patients: d.patients.len(),
                salary: d.salary,
            },
        };

        PartySummary {
            id: self.id.clone(),
            name: self.profile.name.clone(),
            email: self.profile.email.clone(),
            phone: self.profile.phone.clone(),
            date_of_birth: self
                .profile
                .date_of_birth
                .map(|dob| dob.format(DATE_FORMAT).to_string()),
            age: self.profile.age_on(today),
            created_at: self.profile.created_at.format(TIMESTAMP_FORMAT).to_string(),
            role,
        }
    }
}

impl Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(ID: {}, Name: {})", self.kind(), self.id, self.profile.name)
    }
}

/// Serializable snapshot of a party.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartySummary {
    pub id: PartyId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub created_at: String,
    #[serde(flatten)]
    pub role: RoleSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RoleSummary {
    Student {
        grade_level: u8,
        enrollment_date: String,
        enrolled_courses: Vec<CourseId>,
        gpa: f64,
    },
    Teacher {
        subject: String,
        hire_date: String,
        courses_taught: Vec<CourseId>,
        salary: f64,
    },
    Patient {
        blood_type: BloodType,
        allergies: Vec<String>,
        assigned_doctor: Option<PartyId>,
        is_admitted: bool,
        room: Option<RoomId>,
        total_appointments: usize,
    },
    Doctor {
        specialization: String,
        license_number: String,
        hire_date: String,
        total_patients: usize,
        salary: f64,
    },
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Payload for registering a party.
#[derive(Debug, Clone)]
pub struct PartyCreate {
    pub id: PartyId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub role: RoleCreate,
}

/// Kind-specific creation fields. Dates default to today.
#[derive(Debug, Clone)]
pub enum RoleCreate {
    Student {
        grade_level: u8,
        enrolled_on: Option<NaiveDate>,
    },
    Teacher {
        subject: String,
        hired_on: Option<NaiveDate>,
        salary: f64,
    },
    Patient {
        blood_type: BloodType,
    },
    Doctor {
        specialization: String,
        license_number: String,
        hired_on: Option<NaiveDate>,
        salary: f64,
    },
}

impl RoleCreate {
    pub fn kind(&self) -> RoleKind {
        match self {
            RoleCreate::Student { .. } => RoleKind::Student,
            RoleCreate::Teacher { .. } => RoleKind::Teacher,
            RoleCreate::Patient { .. } => RoleKind::Patient,
            RoleCreate::Doctor { .. } => RoleKind::Doctor,
        }
    }
}

impl PartyCreate {
    fn base(
        id: impl Into<PartyId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: RoleCreate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            date_of_birth: None,
            role,
        }
    }

    pub fn student(
        id: impl Into<PartyId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        grade_level: u8,
    ) -> Self {
        Self::base(
            id,
            name,
            email,
            phone,
            RoleCreate::Student {
                grade_level,
                enrolled_on: None,
            },
        )
    }

    pub fn teacher(
        id: impl Into<PartyId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self::base(
            id,
            name,
            email,
            phone,
            RoleCreate::Teacher {
                subject: subject.into(),
                hired_on: None,
                salary: 0.0,
            },
        )
    }

    pub fn patient(
        id: impl Into<PartyId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        blood_type: BloodType,
    ) -> Self {
        Self::base(id, name, email, phone, RoleCreate::Patient { blood_type })
    }

    pub fn doctor(
        id: impl Into<PartyId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        specialization: impl Into<String>,
        license_number: impl Into<String>,
    ) -> Self {
        Self::base(
            id,
            name,
            email,
            phone,
            RoleCreate::Doctor {
                specialization: specialization.into(),
                license_number: license_number.into(),
                hired_on: None,
                salary: 0.0,
            },
        )
    }

    pub fn born_on(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    /// Sets the salary of a teacher or doctor; ignored for other roles.
    pub fn with_salary(mut self, amount: f64) -> Self {
        match &mut self.role {
            RoleCreate::Teacher { salary, .. } | RoleCreate::Doctor { salary, .. } => {
                *salary = amount
            }
            _ => {}
        }
        self
    }

    /// Sets the enrollment date of a student or the hire date of staff.
    pub fn since(mut self, date: NaiveDate) -> Self {
        match &mut self.role {
            RoleCreate::Student { enrolled_on, .. } => *enrolled_on = Some(date),
            RoleCreate::Teacher { hired_on, .. } | RoleCreate::Doctor { hired_on, .. } => {
                *hired_on = Some(date)
            }
            RoleCreate::Patient { .. } => {}
        }
        self
    }
}

/// Profile and role field changes. Validated as a whole before anything is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartyUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub grade_level: Option<u8>,
    pub subject: Option<String>,
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blood_types_parse_and_print() {
        assert_eq!("ab-".parse::<BloodType>().unwrap(), BloodType::AbNegative);
        assert_eq!(BloodType::OPositive.to_string(), "O+");
        assert!("C+".parse::<BloodType>().is_err());
    }

    #[test]
    fn age_counts_completed_years() {
        let profile = Profile {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15),
            created_at: Local::now().naive_local(),
        };
        let before_birthday = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let on_birthday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(profile.age_on(before_birthday), Some(33));
        assert_eq!(profile.age_on(on_birthday), Some(34));
    }

    #[test]
    fn gpa_is_the_mean_of_current_grades() {
        let mut record = StudentRecord {
            grade_level: 10,
            enrolled_on: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            courses: vec![],
            grades: BTreeMap::new(),
        };
        assert_eq!(record.gpa(), 0.0);
        record.grades.insert(CourseId::from("C001"), 92.5);
        record.grades.insert(CourseId::from("C002"), 88.0);
        assert!((record.gpa() - 90.25).abs() < f64::EPSILON);
    }

    fn student_with_grades(grades: &[f64]) -> Party {
        let courses: Vec<CourseId> = (1..=grades.len())
            .map(|n| CourseId::from(format!("C{n:03}")))
            .collect();
        Party {
            id: PartyId::from("S001"),
            profile: Profile {
                name: "Alice Williams".into(),
                email: "alice.w@student.com".into(),
                phone: String::new(),
                date_of_birth: None,
                created_at: Local::now().naive_local(),
            },
            role: Role::Student(StudentRecord {
                grade_level: 10,
                enrolled_on: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                grades: courses.iter().cloned().zip(grades.iter().copied()).collect(),
                courses,
            }),
            history: Vec::new(),
        }
    }

    fn summary_gpa(party: &Party) -> f64 {
        match party.summary().role {
            RoleSummary::Student { gpa, .. } => gpa,
            other => panic!("unexpected role: {other:?}"),
        }
    }

    #[test]
    fn summary_rounds_gpa_to_two_decimals() {
        assert_eq!(summary_gpa(&student_with_grades(&[90.0, 85.0, 86.0])), 87.0);
        assert_eq!(summary_gpa(&student_with_grades(&[91.0, 92.0, 92.0])), 91.67);
        assert_eq!(summary_gpa(&student_with_grades(&[])), 0.0);
    }

    #[test]
    fn builder_fills_role_fields() {
        let params = PartyCreate::teacher("T001", "John", "john@school.com", "555", "Math")
            .with_salary(60_000.0);
        match params.role {
            RoleCreate::Teacher { salary, ref subject, .. } => {
                assert_eq!(salary, 60_000.0);
                assert_eq!(subject, "Math");
            }
            other => panic!("unexpected role: {other:?}"),
        }
    }
}
