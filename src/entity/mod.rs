//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod campuses;
pub mod companies;
pub mod course_committees;
pub mod course_instructors;
pub mod course_sections;
pub mod courses;
pub mod curriculums;
pub mod evaluations;
pub mod faculties;
pub mod instructors;
pub mod majors;
pub mod programs;
pub mod staffs;
pub mod student_enroll_statuses;
pub mod student_enrolls;
pub mod student_trainings;
pub mod students;
pub mod users;
pub mod visitor_schedules;
pub mod visitor_trainings;
pub mod visits_pictures;
