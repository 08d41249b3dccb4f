//! 预导入模块，方便使用

pub use super::campuses::Entity as Campuses;
pub use super::companies::Entity as Companies;
pub use super::course_committees::Entity as CourseCommittees;
pub use super::course_instructors::Entity as CourseInstructors;
pub use super::course_sections::Entity as CourseSections;
pub use super::courses::Entity as Courses;
pub use super::curriculums::Entity as Curriculums;
pub use super::evaluations::Entity as Evaluations;
pub use super::faculties::Entity as Faculties;
pub use super::instructors::Entity as Instructors;
pub use super::majors::Entity as Majors;
pub use super::programs::Entity as Programs;
pub use super::staffs::Entity as Staffs;
pub use super::student_enroll_statuses::Entity as StudentEnrollStatuses;
pub use super::student_enrolls::Entity as StudentEnrolls;
pub use super::student_trainings::Entity as StudentTrainings;
pub use super::students::Entity as Students;
pub use super::users::Entity as Users;
pub use super::visitor_schedules::Entity as VisitorSchedules;
pub use super::visitor_trainings::Entity as VisitorTrainings;
pub use super::visits_pictures::Entity as VisitsPictures;
