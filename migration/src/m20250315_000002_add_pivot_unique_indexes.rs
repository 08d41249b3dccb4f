use sea_orm_migration::prelude::*;

use crate::m20250301_000003_create_courses::{CourseCommittees, CourseInstructors};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 同一教师在同一课程班只能关联一次
        manager
            .create_index(
                Index::create()
                    .name("uq_course_instructors_section_instructor")
                    .table(CourseInstructors::Table)
                    .col(CourseInstructors::CourseSectionId)
                    .col(CourseInstructors::InstructorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_course_committees_section_instructor")
                    .table(CourseCommittees::Table)
                    .col(CourseCommittees::CourseSectionId)
                    .col(CourseCommittees::InstructorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_course_committees_section_instructor")
                    .table(CourseCommittees::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_course_instructors_section_instructor")
                    .table(CourseInstructors::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
