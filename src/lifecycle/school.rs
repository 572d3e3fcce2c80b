use super::{join_all, SystemError};
use crate::clients::{CourseClient, DepartmentClient, PartyClient};
use crate::config::RosterConfig;
use crate::course_actor::CourseContext;
use crate::model::{Report, RoleKind};
use crate::party_actor::PartyContext;
use actor_framework::ActorClient;
use tokio::task::JoinHandle;
use tracing::info;

/// The academic registries, started and wired together.
///
/// The course actor is the only one with dependencies: it mirrors every enrollment onto the
/// student registry and every teaching assignment onto the teacher registry.
///
/// ```ignore
/// let school = School::new("Springfield High School", "742 Evergreen Terrace", &config);
/// school.students.register(PartyCreate::student("S001", "Bart Simpson", "bart@school.edu", "555-0101", 9)).await?;
/// school.courses.enroll("C001".into(), "S001".into()).await?;
/// println!("{}", school.report().await?);
/// school.shutdown().await?;
/// ```
pub struct School {
    pub name: String,
    pub address: String,
    pub students: PartyClient,
    pub teachers: PartyClient,
    pub courses: CourseClient,
    pub departments: DepartmentClient,
    handles: Vec<JoinHandle<()>>,
}

impl School {
    /// Spawns the four registries. Must be called inside a Tokio runtime.
    pub fn new(name: impl Into<String>, address: impl Into<String>, config: &RosterConfig) -> Self {
        let mailbox = config.mailbox_capacity;

        // 1. Create actors
        let (student_actor, students) = crate::party_actor::new(mailbox);
        let (teacher_actor, teachers) = crate::party_actor::new(mailbox);
        let (course_actor, courses) = crate::course_actor::new(mailbox);
        let (department_actor, departments) = crate::department_actor::new(mailbox);

        // 2. Start them with their context
        let handles = vec![
            tokio::spawn(student_actor.run(PartyContext::standalone(RoleKind::Student))),
            tokio::spawn(teacher_actor.run(PartyContext::standalone(RoleKind::Teacher))),
            tokio::spawn(course_actor.run(CourseContext::new(students.clone(), teachers.clone()))),
            tokio::spawn(department_actor.run(())),
        ];

        let school = Self {
            name: name.into(),
            address: address.into(),
            students,
            teachers,
            courses,
            departments,
            handles,
        };
        info!(school = %school.name, "School started");
        school
    }

    pub async fn report(&self) -> Result<Report, SystemError> {
        Ok(Report::new(format!("School Report: {}", self.name))
            .count("Students", self.students.count().await?)
            .count("Teachers", self.teachers.count().await?)
            .count("Courses", self.courses.count().await?)
            .count("Departments", self.departments.count().await?))
    }

    /// Closes every registry and waits for the actor tasks to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!(school = %self.name, "Shutting down school...");
        drop(self.courses);
        drop(self.departments);
        drop(self.students);
        drop(self.teachers);

        join_all(self.handles).await?;
        info!("School shutdown complete.");
        Ok(())
    }
}
