//! Entity trait implementation for [`Party`].
//!
//! Everything that mutates a party lives here: validation of the creation payload and of
//! profile updates, the party side of every link, grades, history and clinical records.

use super::actions::{PartyAction, PartyActionResult};
use super::{PartyContext, PartyError};
use crate::association::{self, LinkOutcome, UnlinkOutcome};
use crate::model::{
    CourseId, DoctorRecord, HistoryEntry, Link, Party, PartyCreate, PartyId, PartyUpdate, PatientRecord,
    Profile, Role, RoleCreate, StudentRecord, TeacherRecord, VitalSigns, VitalsReading,
};
use crate::validation;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Local;
use std::collections::BTreeMap;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Party {
    type Id = PartyId;
    type Create = PartyCreate;
    type Update = PartyUpdate;
    type Action = PartyAction;
    type ActionResult = PartyActionResult;
    type Context = PartyContext;
    type Error = PartyError;

    fn from_create_params(params: PartyCreate) -> Result<Self, PartyError> {
        validation::non_empty("name", &params.name)?;
        validation::email(&params.email)?;

        let now = Local::now().naive_local();
        let today = now.date();
        let role = match params.role {
            RoleCreate::Student {
                grade_level,
                enrolled_on,
            } => {
                validation::grade_level(grade_level)?;
                Role::Student(StudentRecord {
                    grade_level,
                    enrolled_on: enrolled_on.unwrap_or(today),
                    courses: Vec::new(),
                    grades: BTreeMap::new(),
                })
            }
            RoleCreate::Teacher {
                subject,
                hired_on,
                salary,
            } => {
                validation::salary(salary)?;
                Role::Teacher(TeacherRecord {
                    subject,
                    hired_on: hired_on.unwrap_or(today),
                    salary,
                    courses: Vec::new(),
                })
            }
            RoleCreate::Patient { blood_type } => Role::Patient(PatientRecord {
                blood_type,
                allergies: Vec::new(),
                room: Default::default(),
                admitted_at: None,
                doctor: Default::default(),
                appointments: Vec::new(),
                vitals: Vec::new(),
            }),
            RoleCreate::Doctor {
                specialization,
                license_number,
                hired_on,
                salary,
            } => {
                validation::salary(salary)?;
                Role::Doctor(DoctorRecord {
                    specialization,
                    license_number,
                    hired_on: hired_on.unwrap_or(today),
                    salary,
                    patients: Vec::new(),
                    appointments: Vec::new(),
                })
            }
        };

        Ok(Party {
            id: params.id,
            profile: Profile {
                name: params.name,
                email: params.email,
                phone: params.phone,
                date_of_birth: params.date_of_birth,
                created_at: now,
            },
            role,
            history: Vec::new(),
        })
    }

    fn id(&self) -> &PartyId {
        &self.id
    }

    /// Keeps each registry to a single role.
    async fn on_create(&mut self, ctx: &PartyContext) -> Result<(), PartyError> {
        if self.kind() != ctx.kind {
            return Err(PartyError::WrongRegistry {
                expected: ctx.kind,
                found: self.kind(),
            });
        }
        Ok(())
    }

    async fn on_update(&mut self, update: PartyUpdate, _ctx: &PartyContext) -> Result<(), PartyError> {
        self.apply_update(update)
    }

    /// A party referenced by a course, room, doctor or appointment stays registered.
    async fn on_delete(&self, _ctx: &PartyContext) -> Result<(), PartyError> {
        if self.is_linked() {
            return Err(PartyError::StillLinked(self.id.clone()));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PartyAction,
        ctx: &PartyContext,
    ) -> Result<PartyActionResult, PartyError> {
        match action {
            PartyAction::Attach(mirror) => self
                .attach(mirror.into_link())
                .map(PartyActionResult::Attach),
            PartyAction::Detach(mirror) => self.detach(mirror.link()).map(PartyActionResult::Detach),
            PartyAction::AssignDoctor(doctor) => self
                .assign_doctor(doctor, ctx)
                .await
                .map(PartyActionResult::AssignDoctor),
            PartyAction::ReleaseDoctor => self
                .release_doctor(ctx)
                .await
                .map(PartyActionResult::ReleaseDoctor),
            PartyAction::PostGrade { course, grade } => self
                .post_grade(course, grade)
                .map(PartyActionResult::PostGrade),
            PartyAction::RecordHistory(text) => self
                .record_history(text)
                .map(PartyActionResult::RecordHistory),
            PartyAction::AddAllergy(allergy) => {
                self.add_allergy(allergy).map(PartyActionResult::AddAllergy)
            }
            PartyAction::RecordVitals(signs) => self
                .record_vitals(signs)
                .map(PartyActionResult::RecordVitals),
        }
    }
}

impl Party {
    fn wrong_role(&self, operation: impl Into<String>) -> PartyError {
        PartyError::WrongRole {
            id: self.id.clone(),
            kind: self.kind(),
            operation: operation.into(),
        }
    }

    fn student_mut(&mut self, operation: &str) -> Result<&mut StudentRecord, PartyError> {
        match &mut self.role {
            Role::Student(record) => Ok(record),
            other => Err(PartyError::WrongRole {
                id: self.id.clone(),
                kind: other.kind(),
                operation: operation.to_string(),
            }),
        }
    }

    fn patient_mut(&mut self, operation: &str) -> Result<&mut PatientRecord, PartyError> {
        match &mut self.role {
            Role::Patient(record) => Ok(record),
            other => Err(PartyError::WrongRole {
                id: self.id.clone(),
                kind: other.kind(),
                operation: operation.to_string(),
            }),
        }
    }

    /// Validates every field of `update`, then applies all of them.
    pub(crate) fn apply_update(&mut self, update: PartyUpdate) -> Result<(), PartyError> {
        if let Some(name) = &update.name {
            validation::non_empty("name", name)?;
        }
        if let Some(email) = &update.email {
            validation::email(email)?;
        }
        if let Some(level) = update.grade_level {
            if self.as_student().is_none() {
                return Err(self.wrong_role("update grade level"));
            }
            validation::grade_level(level)?;
        }
        if update.subject.is_some() && self.as_teacher().is_none() {
            return Err(self.wrong_role("update subject"));
        }
        if let Some(salary) = update.salary {
            if !matches!(self.role, Role::Teacher(_) | Role::Doctor(_)) {
                return Err(self.wrong_role("update salary"));
            }
            validation::salary(salary)?;
        }

        if let Some(name) = update.name {
            self.profile.name = name;
        }
        if let Some(email) = update.email {
            self.profile.email = email;
        }
        if let Some(phone) = update.phone {
            self.profile.phone = phone;
        }
        match &mut self.role {
            Role::Student(student) => {
                if let Some(level) = update.grade_level {
                    student.grade_level = level;
                }
            }
            Role::Teacher(teacher) => {
                if let Some(subject) = update.subject {
                    teacher.subject = subject;
                }
                if let Some(salary) = update.salary {
                    teacher.salary = salary;
                }
            }
            Role::Doctor(doctor) => {
                if let Some(salary) = update.salary {
                    doctor.salary = salary;
                }
            }
            Role::Patient(_) => {}
        }
        Ok(())
    }

    /// Records this party's side of `link`.
    pub(crate) fn attach(&mut self, link: Link) -> Result<LinkOutcome, PartyError> {
        let kind = self.kind();
        let Party { id, role, .. } = &mut *self;
        let outcome = match (role, &link) {
            (Role::Student(student), Link::Course(course)) => {
                association::insert_unique(&mut student.courses, course.clone())
            }
            (Role::Teacher(teacher), Link::Teaching(course)) => {
                association::insert_unique(&mut teacher.courses, course.clone())
            }
            (Role::Patient(patient), Link::Room(room)) => {
                let outcome = patient.room.assign(room.clone());
                if outcome.applied() {
                    patient.admitted_at = Some(Local::now().naive_local());
                }
                outcome
            }
            (Role::Patient(patient), Link::Appointment(appointment)) => {
                association::insert_unique(&mut patient.appointments, appointment.clone())
            }
            (Role::Doctor(doctor), Link::Patient(patient)) => {
                association::insert_unique(&mut doctor.patients, patient.clone())
            }
            (Role::Doctor(doctor), Link::Appointment(appointment)) => {
                association::insert_unique(&mut doctor.appointments, appointment.clone())
            }
            _ => {
                return Err(PartyError::WrongRole {
                    id: id.clone(),
                    kind,
                    operation: format!("attach {link}"),
                })
            }
        };

        if outcome.applied() {
            info!(party_id = %self.id, %link, "Attached");
        } else {
            debug!(party_id = %self.id, %link, ?outcome, "Attach was a no-op");
        }
        Ok(outcome)
    }

    /// Removes this party's side of `link` together with state derived from it.
    pub(crate) fn detach(&mut self, link: &Link) -> Result<UnlinkOutcome, PartyError> {
        let kind = self.kind();
        let Party { id, role, .. } = &mut *self;
        let outcome = match (role, link) {
            (Role::Student(student), Link::Course(course)) => {
                let outcome = association::remove_item(&mut student.courses, course);
                if outcome.applied() {
                    student.grades.remove(course);
                }
                outcome
            }
            (Role::Teacher(teacher), Link::Teaching(course)) => {
                association::remove_item(&mut teacher.courses, course)
            }
            (Role::Patient(patient), Link::Room(room)) => {
                let outcome = patient.room.release_matching(room);
                if outcome.applied() {
                    patient.admitted_at = None;
                }
                outcome
            }
            (Role::Patient(patient), Link::Appointment(appointment)) => {
                association::remove_item(&mut patient.appointments, appointment)
            }
            (Role::Doctor(doctor), Link::Patient(patient)) => {
                association::remove_item(&mut doctor.patients, patient)
            }
            (Role::Doctor(doctor), Link::Appointment(appointment)) => {
                association::remove_item(&mut doctor.appointments, appointment)
            }
            _ => {
                return Err(PartyError::WrongRole {
                    id: id.clone(),
                    kind,
                    operation: format!("detach {link}"),
                })
            }
        };

        if outcome.applied() {
            info!(party_id = %self.id, %link, "Detached");
        } else {
            debug!(party_id = %self.id, %link, "Detach was a no-op");
        }
        Ok(outcome)
    }

    /// Links this patient to `doctor` on both sides. A patient that already has a doctor keeps it.
    async fn assign_doctor(
        &mut self,
        doctor: PartyId,
        ctx: &PartyContext,
    ) -> Result<LinkOutcome, PartyError> {
        if let Some(current) = self.patient_mut("assign doctor")?.doctor.holder().cloned() {
            debug!(patient_id = %self.id, %current, "Doctor already assigned");
            return Ok(LinkOutcome::AlreadyLinked);
        }

        let doctors = ctx.care_team.as_ref().ok_or(PartyError::NoCareTeam)?;
        doctors
            .attach(doctor.clone(), Link::Patient(self.id.clone()))
            .await
            .map_err(|e| match e {
                PartyError::NotFound(_) => PartyError::UnknownDoctor(doctor.clone()),
                other => other,
            })?;

        let outcome = self.patient_mut("assign doctor")?.doctor.assign(doctor.clone());
        info!(patient_id = %self.id, doctor_id = %doctor, "Doctor assigned");
        Ok(outcome)
    }

    async fn release_doctor(&mut self, ctx: &PartyContext) -> Result<UnlinkOutcome, PartyError> {
        let Some(current) = self.patient_mut("release doctor")?.doctor.holder().cloned() else {
            debug!(patient_id = %self.id, "No doctor to release");
            return Ok(UnlinkOutcome::NotLinked);
        };

        let doctors = ctx.care_team.as_ref().ok_or(PartyError::NoCareTeam)?;
        doctors
            .detach(current.clone(), Link::Patient(self.id.clone()))
            .await
            .map_err(|e| match e {
                PartyError::NotFound(_) => PartyError::UnknownDoctor(current.clone()),
                other => other,
            })?;

        let outcome = self
            .patient_mut("release doctor")?
            .doctor
            .release_matching(&current);
        info!(patient_id = %self.id, doctor_id = %current, "Doctor released");
        Ok(outcome)
    }

    /// Grades are kept per enrolled course; a new grade replaces the previous one.
    pub(crate) fn post_grade(&mut self, course: CourseId, grade: f64) -> Result<(), PartyError> {
        validation::grade(grade)?;
        let id = self.id.clone();
        let student = self.student_mut("post grade")?;
        if !student.courses.contains(&course) {
            return Err(PartyError::NotEnrolled {
                student: id,
                course,
            });
        }
        student.grades.insert(course.clone(), grade);
        self.history
            .push(HistoryEntry::now(format!("Grade {grade} recorded for {course}")));
        Ok(())
    }

    pub(crate) fn record_history(&mut self, text: String) -> Result<(), PartyError> {
        validation::non_empty("history entry", &text)?;
        self.history.push(HistoryEntry::now(text));
        Ok(())
    }

    pub(crate) fn add_allergy(&mut self, allergy: String) -> Result<bool, PartyError> {
        validation::non_empty("allergy", &allergy)?;
        let patient = self.patient_mut("add allergy")?;
        let allergy = allergy.trim().to_string();
        if patient.allergies.contains(&allergy) {
            return Ok(false);
        }
        patient.allergies.push(allergy);
        Ok(true)
    }

    pub(crate) fn record_vitals(&mut self, signs: VitalSigns) -> Result<(), PartyError> {
        let patient = self.patient_mut("record vitals")?;
        patient.vitals.push(VitalsReading {
            at: Local::now().naive_local(),
            signs,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BloodType, RoleKind, RoomId};
    use crate::validation::ValidationError;

    fn student() -> Party {
        Party::from_create_params(PartyCreate::student(
            "S001",
            "Alice Williams",
            "alice.w@student.com",
            "555-0201",
            10,
        ))
        .unwrap()
    }

    fn patient() -> Party {
        Party::from_create_params(PartyCreate::patient(
            "P001",
            "Jane Doe",
            "jane@example.com",
            "555-0301",
            BloodType::OPositive,
        ))
        .unwrap()
    }

    #[test]
    fn creation_validates_contact_and_role_fields() {
        let blank = PartyCreate::student("S009", " ", "x@y.z", "", 10);
        assert_eq!(
            Party::from_create_params(blank).unwrap_err(),
            PartyError::Validation(ValidationError::Empty("name"))
        );

        let bad_level = PartyCreate::student("S009", "Zed", "zed@school.com", "", 13);
        assert_eq!(
            Party::from_create_params(bad_level).unwrap_err(),
            PartyError::Validation(ValidationError::GradeLevelOutOfRange(13))
        );

        let bad_salary =
            PartyCreate::teacher("T009", "Zed", "zed@school.com", "", "Art").with_salary(-5.0);
        assert!(matches!(
            Party::from_create_params(bad_salary),
            Err(PartyError::Validation(ValidationError::InvalidSalary(_)))
        ));
    }

    #[test]
    fn attach_then_detach_restores_the_course_list() {
        let mut alice = student();
        let before = alice.clone();
        let algebra = Link::Course(CourseId::from("C001"));

        assert_eq!(alice.attach(algebra.clone()).unwrap(), LinkOutcome::Linked);
        assert_eq!(alice.attach(algebra.clone()).unwrap(), LinkOutcome::AlreadyLinked);
        assert_eq!(alice.as_student().unwrap().courses().len(), 1);

        assert_eq!(alice.detach(&algebra).unwrap(), UnlinkOutcome::Unlinked);
        assert_eq!(alice.detach(&algebra).unwrap(), UnlinkOutcome::NotLinked);
        assert_eq!(alice, before);
    }

    #[tokio::test]
    async fn linked_parties_refuse_deletion() {
        let ctx = PartyContext::standalone(RoleKind::Patient);
        let mut jane = patient();
        let room = Link::Room(RoomId::from("R101"));
        assert_eq!(jane.on_delete(&ctx).await, Ok(()));

        jane.attach(room.clone()).unwrap();
        assert_eq!(
            jane.on_delete(&ctx).await,
            Err(PartyError::StillLinked(PartyId::from("P001")))
        );

        jane.detach(&room).unwrap();
        assert_eq!(jane.on_delete(&ctx).await, Ok(()));
    }

    #[test]
    fn dropping_a_course_discards_its_grade_but_not_history() {
        let mut alice = student();
        let algebra = CourseId::from("C001");
        alice.attach(Link::Course(algebra.clone())).unwrap();
        alice.post_grade(algebra.clone(), 92.5).unwrap();
        alice.post_grade(algebra.clone(), 94.0).unwrap();
        assert_eq!(alice.as_student().unwrap().grade(&algebra), Some(94.0));

        alice.detach(&Link::Course(algebra.clone())).unwrap();
        assert_eq!(alice.as_student().unwrap().grade(&algebra), None);
        assert_eq!(alice.as_student().unwrap().gpa(), 0.0);
        assert_eq!(alice.history().len(), 2);
    }

    #[test]
    fn grades_require_enrollment_and_range() {
        let mut alice = student();
        let physics = CourseId::from("C002");
        assert!(matches!(
            alice.post_grade(physics.clone(), 80.0),
            Err(PartyError::NotEnrolled { .. })
        ));

        alice.attach(Link::Course(physics.clone())).unwrap();
        assert_eq!(
            alice.post_grade(physics, 101.0).unwrap_err(),
            PartyError::Validation(ValidationError::GradeOutOfRange(101.0))
        );
        assert!(alice.history().is_empty());
    }

    #[test]
    fn links_are_checked_against_the_role() {
        let mut alice = student();
        let err = alice.attach(Link::Room(RoomId::from("R101"))).unwrap_err();
        assert!(matches!(
            err,
            PartyError::WrongRole { kind: RoleKind::Student, .. }
        ));
    }

    #[test]
    fn a_patient_holds_one_room_at_a_time() {
        let mut jane = patient();
        let first = Link::Room(RoomId::from("R101"));
        let second = Link::Room(RoomId::from("R102"));

        assert_eq!(jane.attach(first.clone()).unwrap(), LinkOutcome::Linked);
        assert!(jane.as_patient().unwrap().admitted_at().is_some());
        assert_eq!(jane.attach(second.clone()).unwrap(), LinkOutcome::AlreadyLinked);
        assert_eq!(jane.detach(&second).unwrap(), UnlinkOutcome::NotLinked);
        assert_eq!(jane.as_patient().unwrap().room(), Some(&RoomId::from("R101")));

        assert_eq!(jane.detach(&first).unwrap(), UnlinkOutcome::Unlinked);
        assert!(!jane.as_patient().unwrap().is_admitted());
        assert!(jane.as_patient().unwrap().admitted_at().is_none());
    }

    #[test]
    fn profile_updates_are_all_or_nothing() {
        let mut alice = student();
        let update = PartyUpdate {
            name: Some("Alice W.".into()),
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(matches!(
            alice.apply_update(update),
            Err(PartyError::Validation(ValidationError::InvalidEmail(_)))
        ));
        assert_eq!(alice.name(), "Alice Williams");

        let salary = PartyUpdate {
            salary: Some(10.0),
            ..Default::default()
        };
        assert!(matches!(
            alice.apply_update(salary),
            Err(PartyError::WrongRole { .. })
        ));

        let ok = PartyUpdate {
            email: Some("alice@school.com".into()),
            grade_level: Some(11),
            ..Default::default()
        };
        alice.apply_update(ok).unwrap();
        assert_eq!(alice.profile().email, "alice@school.com");
        assert_eq!(alice.as_student().unwrap().grade_level, 11);
    }

    #[test]
    fn allergies_are_deduplicated() {
        let mut jane = patient();
        assert!(jane.add_allergy("Penicillin".into()).unwrap());
        assert!(!jane.add_allergy(" Penicillin ".into()).unwrap());
        assert_eq!(jane.as_patient().unwrap().allergies(), &["Penicillin".to_string()]);
    }

    #[test]
    fn history_lines_carry_a_timestamp() {
        let mut jane = patient();
        jane.record_history("Diagnosis: flu".into()).unwrap();
        let line = jane.history()[0].to_string();
        assert!(line.ends_with(": Diagnosis: flu"));
        assert_eq!(line.len(), "2024-01-01 00:00:00: Diagnosis: flu".len());
    }
}
