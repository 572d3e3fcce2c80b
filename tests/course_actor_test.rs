use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use roster::association::{LinkOutcome, Registration, UnlinkOutcome};
use roster::clients::PartyClient;
use roster::course_actor::{CourseContext, CourseError};
use roster::model::{CourseCreate, CourseId, Party, PartyId};
use roster::party_actor::PartyActionResult;

/// Real Course actor with mocked student and teacher registries.
/// Exercises the gate and mirror logic of `Enroll` in isolation from the Party actor.
#[tokio::test]
async fn enrollment_mirrors_onto_the_student_registry() {
    let mut students = MockClient::<Party>::new();
    let teachers = MockClient::<Party>::new();

    // Only the first two enrollments reach the student registry; the third is gated.
    students
        .expect_action(PartyId::from("S001"))
        .return_ok(PartyActionResult::Attach(LinkOutcome::Linked));
    students
        .expect_action(PartyId::from("S002"))
        .return_ok(PartyActionResult::Attach(LinkOutcome::Linked));

    let (course_actor, courses) = roster::course_actor::new(8);
    let handle = tokio::spawn(course_actor.run(CourseContext::new(
        PartyClient::new(students.client()),
        PartyClient::new(teachers.client()),
    )));

    let registered = courses
        .register(CourseCreate::new("C001", "Algebra I", "Introduction to Algebra", 3).max_students(2))
        .await
        .unwrap();
    assert_eq!(registered, Registration::Registered);

    let c001 = CourseId::from("C001");
    for (student, expected) in [
        ("S001", LinkOutcome::Linked),
        ("S001", LinkOutcome::AlreadyLinked),
        ("S002", LinkOutcome::Linked),
        ("S003", LinkOutcome::AtCapacity),
    ] {
        let outcome = courses.enroll(c001.clone(), student.into()).await.unwrap();
        assert_eq!(outcome, expected, "enrolling {student}");
    }

    let course = courses.get(c001).await.unwrap().unwrap();
    assert_eq!(course.students(), &[PartyId::from("S001"), PartyId::from("S002")]);
    assert!(course.is_full());

    students.verify();
    teachers.verify();

    drop(courses);
    handle.await.unwrap();
}

#[tokio::test]
async fn unknown_student_leaves_roster_untouched() {
    let mut students = MockClient::<Party>::new();
    let teachers = MockClient::<Party>::new();
    students
        .expect_action(PartyId::from("S404"))
        .return_err(FrameworkError::NotFound("S404".into()));

    let (course_actor, courses) = roster::course_actor::new(8);
    tokio::spawn(course_actor.run(CourseContext::new(
        PartyClient::new(students.client()),
        PartyClient::new(teachers.client()),
    )));

    courses
        .register(CourseCreate::new("C001", "Algebra I", "", 3))
        .await
        .unwrap();

    let err = courses
        .enroll("C001".into(), "S404".into())
        .await
        .unwrap_err();
    assert_eq!(err, CourseError::UnknownParty(PartyId::from("S404")));

    let course = courses.get("C001".into()).await.unwrap().unwrap();
    assert!(course.students().is_empty());
    students.verify();
}

#[tokio::test]
async fn dropping_a_student_who_never_enrolled_is_reported() {
    // No expectations: the student registry must not be contacted at all.
    let students = MockClient::<Party>::new();
    let teachers = MockClient::<Party>::new();

    let (course_actor, courses) = roster::course_actor::new(8);
    tokio::spawn(course_actor.run(CourseContext::new(
        PartyClient::new(students.client()),
        PartyClient::new(teachers.client()),
    )));

    courses
        .register(CourseCreate::new("C002", "Physics 101", "", 4))
        .await
        .unwrap();
    let outcome = courses
        .drop_student("C002".into(), "S001".into())
        .await
        .unwrap();
    assert_eq!(outcome, UnlinkOutcome::NotLinked);
    students.verify();
}

#[tokio::test]
async fn second_teacher_is_not_assigned() {
    let students = MockClient::<Party>::new();
    let mut teachers = MockClient::<Party>::new();
    teachers
        .expect_action(PartyId::from("T001"))
        .return_ok(PartyActionResult::Attach(LinkOutcome::Linked));

    let (course_actor, courses) = roster::course_actor::new(8);
    tokio::spawn(course_actor.run(CourseContext::new(
        PartyClient::new(students.client()),
        PartyClient::new(teachers.client()),
    )));

    courses
        .register(CourseCreate::new("C003", "Calculus", "Advanced Mathematics", 4))
        .await
        .unwrap();

    let first = courses.assign_teacher("C003".into(), "T001".into()).await.unwrap();
    let second = courses.assign_teacher("C003".into(), "T002".into()).await.unwrap();
    assert_eq!(first, LinkOutcome::Linked);
    assert_eq!(second, LinkOutcome::AlreadyLinked);

    let course = courses.get("C003".into()).await.unwrap().unwrap();
    assert_eq!(course.teacher(), Some(&PartyId::from("T001")));
    teachers.verify();
}

#[tokio::test]
async fn course_summary_serializes_flat() {
    let students = MockClient::<Party>::new();
    let teachers = MockClient::<Party>::new();
    let (course_actor, courses) = roster::course_actor::new(8);
    tokio::spawn(course_actor.run(CourseContext::new(
        PartyClient::new(students.client()),
        PartyClient::new(teachers.client()),
    )));

    courses
        .register(CourseCreate::new("C001", "Algebra I", "Introduction to Algebra", 3).max_students(25))
        .await
        .unwrap();
    let course = courses.get("C001".into()).await.unwrap().unwrap();

    let json = serde_json::to_value(course.summary()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "course_id": "C001",
            "name": "Algebra I",
            "description": "Introduction to Algebra",
            "credits": 3,
            "teacher": null,
            "enrolled_students": 0,
            "max_students": 25,
            "is_full": false
        })
    );
}
