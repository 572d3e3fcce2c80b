//! End-to-end tests of the academic registries, every actor real.

use actor_framework::ActorClient;
use roster::association::{LinkOutcome, Registration, UnlinkOutcome};
use roster::config::RosterConfig;
use roster::course_actor::CourseError;
use roster::lifecycle::School;
use roster::model::{CourseCreate, CourseId, DepartmentCreate, PartyCreate, PartyId, PartyUpdate};
use roster::party_actor::PartyError;
use roster::validation::ValidationError;
use std::sync::Arc;

fn school() -> School {
    School::new("Springfield High School", "123 Main St, Springfield", &RosterConfig::default())
}

async fn register_students(school: &School, ids: &[&str]) {
    for id in ids {
        let created = school
            .students
            .register(PartyCreate::student(
                *id,
                format!("Student {id}"),
                format!("{}@student.com", id.to_lowercase()),
                "555-0200",
                10,
            ))
            .await
            .unwrap();
        assert_eq!(created, Registration::Registered);
    }
}

async fn enrolled_courses(school: &School, student: &str) -> Vec<CourseId> {
    let party = school.students.get(student.into()).await.unwrap().unwrap();
    party.as_student().unwrap().courses().to_vec()
}

#[tokio::test]
async fn capacity_two_course_admits_exactly_two() {
    let school = school();
    register_students(&school, &["S001", "S002", "S003"]).await;
    school
        .courses
        .register(CourseCreate::new("C001", "Algebra I", "", 3).max_students(2))
        .await
        .unwrap();

    let c001 = CourseId::from("C001");
    assert_eq!(school.courses.enroll(c001.clone(), "S001".into()).await.unwrap(), LinkOutcome::Linked);
    assert_eq!(school.courses.enroll(c001.clone(), "S002".into()).await.unwrap(), LinkOutcome::Linked);
    assert_eq!(school.courses.enroll(c001.clone(), "S003".into()).await.unwrap(), LinkOutcome::AtCapacity);

    let course = school.courses.get(c001.clone()).await.unwrap().unwrap();
    assert_eq!(course.enrollment_count(), 2);
    assert!(course.is_full());
    assert!(enrolled_courses(&school, "S003").await.is_empty());

    school.shutdown().await.unwrap();
}

#[tokio::test]
async fn enroll_then_drop_restores_both_sides() {
    let school = school();
    register_students(&school, &["S001"]).await;
    school
        .courses
        .register(CourseCreate::new("C001", "Algebra I", "", 3))
        .await
        .unwrap();
    let student_before = school.students.get("S001".into()).await.unwrap();
    let course_before = school.courses.get("C001".into()).await.unwrap();

    school.courses.enroll("C001".into(), "S001".into()).await.unwrap();
    assert_eq!(enrolled_courses(&school, "S001").await, vec![CourseId::from("C001")]);

    let outcome = school.courses.drop_student("C001".into(), "S001".into()).await.unwrap();
    assert_eq!(outcome, UnlinkOutcome::Unlinked);
    assert_eq!(school.students.get("S001".into()).await.unwrap(), student_before);
    assert_eq!(school.courses.get("C001".into()).await.unwrap(), course_before);
}

#[tokio::test]
async fn enrolling_twice_leaves_one_edge() {
    let school = school();
    register_students(&school, &["S001"]).await;
    school
        .courses
        .register(CourseCreate::new("C001", "Algebra I", "", 3))
        .await
        .unwrap();

    school.courses.enroll("C001".into(), "S001".into()).await.unwrap();
    let again = school.courses.enroll("C001".into(), "S001".into()).await.unwrap();
    assert_eq!(again, LinkOutcome::AlreadyLinked);

    let course = school.courses.get("C001".into()).await.unwrap().unwrap();
    assert_eq!(course.students(), &[PartyId::from("S001")]);
    assert_eq!(enrolled_courses(&school, "S001").await.len(), 1);
}

#[tokio::test]
async fn duplicate_registration_keeps_the_first_record() {
    let school = school();
    school
        .students
        .register(PartyCreate::student("S001", "Alice Williams", "alice.w@student.com", "555-0201", 10))
        .await
        .unwrap();

    let second = school
        .students
        .register(PartyCreate::student("S001", "Impostor", "imp@student.com", "555-0000", 12))
        .await
        .unwrap();
    assert_eq!(second, Registration::Duplicate);
    assert!(!second.applied());

    let alice = school.students.get("S001".into()).await.unwrap().unwrap();
    assert_eq!(alice.name(), "Alice Williams");
    assert_eq!(school.students.count().await.unwrap(), 1);
}

#[tokio::test]
async fn dropping_a_missing_pair_changes_nothing() {
    let school = school();
    register_students(&school, &["S001", "S002"]).await;
    school
        .courses
        .register(CourseCreate::new("C001", "Algebra I", "", 3))
        .await
        .unwrap();
    school.courses.enroll("C001".into(), "S001".into()).await.unwrap();

    let outcome = school.courses.drop_student("C001".into(), "S002".into()).await.unwrap();
    assert_eq!(outcome, UnlinkOutcome::NotLinked);
    let course = school.courses.get("C001".into()).await.unwrap().unwrap();
    assert_eq!(course.students(), &[PartyId::from("S001")]);
}

#[tokio::test]
async fn concurrent_enrollments_never_exceed_capacity() {
    let school = Arc::new(school());
    let ids: Vec<String> = (1..=20).map(|n| format!("S{n:03}")).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    register_students(&school, &refs).await;
    school
        .courses
        .register(CourseCreate::new("C001", "Algebra I", "", 3).max_students(5))
        .await
        .unwrap();

    let tasks: Vec<_> = ids
        .iter()
        .cloned()
        .map(|id| {
            let courses = school.courses.clone();
            tokio::spawn(async move { courses.enroll("C001".into(), id.into()).await })
        })
        .collect();

    let mut linked = 0;
    for task in tasks {
        match task.await.unwrap().unwrap() {
            LinkOutcome::Linked => linked += 1,
            LinkOutcome::AtCapacity => {}
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    assert_eq!(linked, 5);

    let course = school.courses.get("C001".into()).await.unwrap().unwrap();
    assert_eq!(course.enrollment_count(), 5);
    for student in course.students() {
        assert_eq!(enrolled_courses(&school, student.as_str()).await, vec![CourseId::from("C001")]);
    }
}

#[tokio::test]
async fn grades_follow_enrollment() {
    let school = school();
    register_students(&school, &["S001"]).await;
    for course in [
        CourseCreate::new("C001", "Algebra I", "", 3),
        CourseCreate::new("C002", "Physics 101", "", 4),
    ] {
        school.courses.register(course).await.unwrap();
    }

    let err = school
        .students
        .post_grade("S001".into(), "C001".into(), 90.0)
        .await
        .unwrap_err();
    assert!(matches!(err, PartyError::NotEnrolled { .. }));

    school.courses.enroll("C001".into(), "S001".into()).await.unwrap();
    school.courses.enroll("C002".into(), "S001".into()).await.unwrap();
    school.students.post_grade("S001".into(), "C001".into(), 92.5).await.unwrap();
    school.students.post_grade("S001".into(), "C002".into(), 88.0).await.unwrap();

    let out_of_range = school
        .students
        .post_grade("S001".into(), "C002".into(), 101.0)
        .await
        .unwrap_err();
    assert_eq!(out_of_range, PartyError::Validation(ValidationError::GradeOutOfRange(101.0)));

    let alice = school.students.get("S001".into()).await.unwrap().unwrap();
    assert_eq!(alice.as_student().unwrap().gpa(), 90.25);

    school.courses.drop_student("C002".into(), "S001".into()).await.unwrap();
    let alice = school.students.get("S001".into()).await.unwrap().unwrap();
    let record = alice.as_student().unwrap();
    assert_eq!(record.grade(&CourseId::from("C002")), None);
    assert_eq!(record.gpa(), 92.5);
    assert_eq!(alice.history().len(), 2);
}

#[tokio::test]
async fn unknown_parties_and_wrong_roles_are_errors() {
    let school = school();
    school
        .courses
        .register(CourseCreate::new("C001", "Algebra I", "", 3))
        .await
        .unwrap();

    let err = school.courses.enroll("C001".into(), "S999".into()).await.unwrap_err();
    assert_eq!(err, CourseError::UnknownParty(PartyId::from("S999")));

    let err = school
        .students
        .register(PartyCreate::teacher("T001", "Dr. John Smith", "john@school.com", "", "Math"))
        .await
        .unwrap_err();
    assert!(matches!(err, PartyError::WrongRegistry { .. }));

    let err = school.courses.enroll("C404".into(), "S001".into()).await.unwrap_err();
    assert!(matches!(err, CourseError::NotFound(_)));
}

#[tokio::test]
async fn linked_courses_and_parties_cannot_be_deleted() {
    let school = school();
    register_students(&school, &["S001"]).await;
    school
        .teachers
        .register(PartyCreate::teacher("T001", "Dr. John Smith", "john@school.com", "", "Math"))
        .await
        .unwrap();
    school
        .courses
        .register(CourseCreate::new("C001", "Algebra I", "", 3))
        .await
        .unwrap();
    school.courses.enroll("C001".into(), "S001".into()).await.unwrap();
    school.courses.assign_teacher("C001".into(), "T001".into()).await.unwrap();

    let err = school.courses.inner().delete("C001".into()).await.unwrap_err();
    assert_eq!(CourseError::from_framework(err), CourseError::StillLinked(CourseId::from("C001")));
    let err = school.students.inner().delete("S001".into()).await.unwrap_err();
    assert_eq!(PartyError::from_framework(err), PartyError::StillLinked(PartyId::from("S001")));
    let err = school.teachers.inner().delete("T001".into()).await.unwrap_err();
    assert_eq!(PartyError::from_framework(err), PartyError::StillLinked(PartyId::from("T001")));

    // Releasing the teacher alone is not enough.
    school.courses.release_teacher("C001".into()).await.unwrap();
    let err = school.courses.inner().delete("C001".into()).await.unwrap_err();
    assert_eq!(CourseError::from_framework(err), CourseError::StillLinked(CourseId::from("C001")));

    school.courses.drop_student("C001".into(), "S001".into()).await.unwrap();
    school.courses.inner().delete("C001".into()).await.unwrap();
    school.students.inner().delete("S001".into()).await.unwrap();
    school.teachers.inner().delete("T001".into()).await.unwrap();
    assert_eq!(school.courses.count().await.unwrap(), 0);
    assert_eq!(school.students.count().await.unwrap(), 0);
    assert_eq!(school.teachers.count().await.unwrap(), 0);
}

#[tokio::test]
async fn profile_updates_are_all_or_nothing() {
    let school = school();
    register_students(&school, &["S001"]).await;

    let err = school
        .students
        .update_profile(
            "S001".into(),
            PartyUpdate {
                name: Some("Alice Cooper".into()),
                email: Some("not-an-email".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PartyError::Validation(ValidationError::InvalidEmail(_))));
    let unchanged = school.students.get("S001".into()).await.unwrap().unwrap();
    assert_eq!(unchanged.name(), "Student S001");

    let updated = school
        .students
        .update_profile(
            "S001".into(),
            PartyUpdate {
                email: Some("alice@student.com".into()),
                grade_level: Some(11),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.profile().email, "alice@student.com");
    assert_eq!(updated.as_student().unwrap().grade_level, 11);
}

#[tokio::test]
async fn report_counts_every_registry() {
    let school = school();
    register_students(&school, &["S001", "S002", "S003"]).await;
    school
        .teachers
        .register(PartyCreate::teacher("T001", "Dr. John Smith", "john@school.com", "", "Math").with_salary(60_000.0))
        .await
        .unwrap();
    school
        .courses
        .register(CourseCreate::new("C001", "Algebra I", "", 3))
        .await
        .unwrap();
    school
        .departments
        .register(DepartmentCreate::new("DEPT001", "Mathematics"))
        .await
        .unwrap();

    let report = school.report().await.unwrap();
    assert_eq!(report.title, "School Report: Springfield High School");
    assert_eq!(report.get("Students"), Some(3));
    assert_eq!(report.get("Teachers"), Some(1));
    assert_eq!(report.get("Courses"), Some(1));
    assert_eq!(report.get("Departments"), Some(1));
    assert!(report.to_string().contains("Total Students: 3"));

    school.shutdown().await.unwrap();
}
