//! Demonstration of the school and hospital registries.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ROSTER__MAILBOX_CAPACITY=8 cargo run
//! ```

use actor_framework::tracing::setup_tracing_with_default;
use actor_framework::ActorClient;
use chrono::{Local, NaiveDate};
use roster::config::RosterConfig;
use roster::lifecycle::{Hospital, School, SystemError};
use roster::model::{
    AppointmentCreate, AppointmentStatus, BloodType, CourseCreate, CourseId, DepartmentCreate,
    PartyCreate, PartyId, RoleSummary, RoomCreate, RoomType, VitalSigns,
};
use tracing::{info, Instrument};

const RULE: &str = "============================================================";

fn section(title: &str) {
    println!("\n{RULE}\n{title}\n{RULE}");
}

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = RosterConfig::load()?;
    config.validate()?;
    setup_tracing_with_default(&config.log_filter);

    info!(mailbox_capacity = config.mailbox_capacity, "Starting roster demo");

    run_school(&config)
        .instrument(tracing::info_span!("school"))
        .await?;
    run_hospital(&config)
        .instrument(tracing::info_span!("hospital"))
        .await?;
    Ok(())
}

async fn run_school(config: &RosterConfig) -> Result<(), SystemError> {
    section("SCHOOL MANAGEMENT SYSTEM - DEMONSTRATION");
    let school = School::new("Springfield High School", "123 Main St, Springfield", config);

    school
        .departments
        .register(DepartmentCreate::new("DEPT001", "Mathematics"))
        .await?;
    school
        .departments
        .register(DepartmentCreate::new("DEPT002", "Science"))
        .await?;

    let teachers = [
        PartyCreate::teacher("T001", "Dr. John Smith", "john.smith@school.com", "555-0101", "Mathematics")
            .with_salary(60_000.0),
        PartyCreate::teacher("T002", "Prof. Sarah Johnson", "sarah.j@school.com", "555-0102", "Physics")
            .with_salary(65_000.0),
    ];
    for teacher in teachers {
        school.teachers.register(teacher).await?;
    }

    school.departments.add_member("DEPT001".into(), "T001".into()).await?;
    school.departments.appoint_head("DEPT001".into(), "T001".into()).await?;
    school.departments.add_member("DEPT002".into(), "T002".into()).await?;

    let courses = [
        CourseCreate::new("C001", "Algebra I", "Introduction to Algebra", 3).max_students(25),
        CourseCreate::new("C002", "Physics 101", "Basic Physics Principles", 4).max_students(20),
        CourseCreate::new("C003", "Calculus", "Advanced Mathematics", 4).max_students(15),
    ];
    for course in courses {
        school.courses.register(course).await?;
    }

    for (course, teacher) in [("C001", "T001"), ("C003", "T001"), ("C002", "T002")] {
        school.courses.assign_teacher(course.into(), teacher.into()).await?;
    }
    for (dept, course) in [("DEPT001", "C001"), ("DEPT001", "C003"), ("DEPT002", "C002")] {
        school.departments.add_course(dept.into(), course.into()).await?;
    }

    let students = [
        PartyCreate::student("S001", "Alice Williams", "alice.w@student.com", "555-0201", 10),
        PartyCreate::student("S002", "Bob Brown", "bob.b@student.com", "555-0202", 11),
        PartyCreate::student("S003", "Carol Davis", "carol.d@student.com", "555-0203", 10),
    ];
    for student in students {
        school.students.register(student).await?;
    }

    let enrollments = [
        ("S001", "C001", 92.5),
        ("S001", "C002", 88.0),
        ("S002", "C001", 95.0),
        ("S002", "C003", 90.5),
        ("S003", "C002", 87.5),
        ("S003", "C003", 93.0),
    ];
    for (student, course, _) in enrollments {
        let outcome = school.courses.enroll(course.into(), student.into()).await?;
        info!(student, course, ?outcome, "Enrollment");
    }
    for (student, course, grade) in enrollments {
        school
            .students
            .post_grade(student.into(), course.into(), grade)
            .await?;
    }

    section("STUDENT INFORMATION");
    for student in school.students.list().await? {
        println!("\n{student}");
        if let RoleSummary::Student {
            grade_level,
            gpa,
            enrolled_courses,
            ..
        } = student.summary().role
        {
            println!("  Grade Level: {grade_level}");
            println!("  GPA: {gpa}");
            println!("  Enrolled Courses: {}", join(&enrolled_courses));
        }
    }

    section("TEACHER INFORMATION");
    for teacher in school.teachers.list().await? {
        println!("\n{teacher}");
        if let RoleSummary::Teacher {
            subject,
            salary,
            courses_taught,
            ..
        } = teacher.summary().role
        {
            println!("  Subject: {subject}");
            println!("  Salary: ${salary:.2}");
            println!("  Courses Taught: {}", join(&courses_taught));
        }
    }

    section("COURSE INFORMATION");
    for course in school.courses.list().await? {
        println!("\n{course}");
        let summary = course.summary();
        println!("  Credits: {}", summary.credits);
        println!(
            "  Teacher: {}",
            summary.teacher.map_or_else(|| "None".to_string(), |t| t.to_string())
        );
        println!(
            "  Enrollment: {}/{}",
            summary.enrolled_students, summary.max_students
        );
    }

    println!("{}", school.report().await?);

    println!("Testing course drop:");
    let outcome = school.courses.drop_student("C002".into(), "S001".into()).await?;
    info!(?outcome, "Dropped S001 from C002");
    if let Some(alice) = school.students.get("S001".into()).await? {
        let courses: Vec<CourseId> = alice
            .as_student()
            .map(|s| s.courses().to_vec())
            .unwrap_or_default();
        println!("Updated enrolled courses: {}\n", join(&courses));
    }

    school.shutdown().await
}

async fn run_hospital(config: &RosterConfig) -> Result<(), SystemError> {
    section("HOSPITAL MANAGEMENT SYSTEM - DEMONSTRATION");
    let hospital = Hospital::new("Springfield General", config);

    hospital
        .doctors
        .register(
            PartyCreate::doctor(
                "D001",
                "Dr. Gregory House",
                "house@hospital.com",
                "555-0301",
                "Diagnostics",
                "LIC-1001",
            )
            .with_salary(250_000.0),
        )
        .await?;

    let patient = PartyCreate::patient("P001", "John Doe", "john.doe@email.com", "555-0401", BloodType::OPositive)
        .born_on(NaiveDate::from_ymd_opt(1985, 3, 12).unwrap_or_default());
    hospital.patients.register(patient).await?;

    hospital
        .rooms
        .register(RoomCreate::new("R101", 101, RoomType::Private))
        .await?;
    hospital
        .rooms
        .register(RoomCreate::new("R201", 201, RoomType::General).beds(4))
        .await?;

    let john = PartyId::from("P001");
    let house = PartyId::from("D001");

    hospital.patients.add_allergy(john.clone(), "Penicillin".into()).await?;
    hospital.patients.assign_doctor(john.clone(), house.clone()).await?;
    hospital.rooms.admit("R101".into(), john.clone()).await?;
    hospital
        .patients
        .record_vitals(
            john.clone(),
            VitalSigns {
                blood_pressure: "120/80".into(),
                temperature: 37.2,
                heart_rate: 72,
                pulse: 72,
            },
        )
        .await?;

    let tomorrow = Local::now().date_naive().succ_opt().unwrap_or_default();
    let scheduled_for = tomorrow.and_hms_opt(10, 30, 0).unwrap_or_default();
    hospital
        .appointments
        .schedule(AppointmentCreate {
            id: "A001".into(),
            patient: john.clone(),
            doctor: house.clone(),
            scheduled_for,
            reason: "Follow-up".into(),
        })
        .await?;
    hospital
        .appointments
        .set_status("A001".into(), AppointmentStatus::Confirmed)
        .await?;
    hospital
        .write_diagnosis(house.clone(), john.clone(), "Seasonal flu")
        .await?;

    section("PATIENT INFORMATION");
    for patient in hospital.patients.list().await? {
        println!("\n{patient}");
        if let RoleSummary::Patient {
            blood_type,
            allergies,
            assigned_doctor,
            room,
            ..
        } = patient.summary().role
        {
            println!("  Blood Type: {blood_type}");
            println!("  Allergies: {}", allergies.join(", "));
            println!(
                "  Doctor: {}",
                assigned_doctor.map_or_else(|| "None".to_string(), |d| d.to_string())
            );
            println!(
                "  Room: {}",
                room.map_or_else(|| "None".to_string(), |r| r.to_string())
            );
        }
        for entry in patient.history() {
            println!("  {entry}");
        }
    }

    println!("\nAvailable rooms:");
    for room in hospital.rooms.available().await? {
        println!("  {room}");
    }

    println!("{}", hospital.report().await?);

    let outcome = hospital.discharge(john).await?;
    info!(?outcome, "Discharged P001");

    hospital.shutdown().await
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
