use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_organization::Curriculums;
use crate::m20250301_000002_create_people::Instructors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::CurriculumId).big_integer().null())
                    .col(ColumnDef::new(Courses::CourseCode).string().not_null())
                    .col(ColumnDef::new(Courses::CourseNameTh).string().not_null())
                    .col(ColumnDef::new(Courses::CourseNameEn).string().null())
                    .col(
                        ColumnDef::new(Courses::CourseType)
                            .string()
                            .not_null()
                            .default("internship"),
                    )
                    .col(ColumnDef::new(Courses::Credits).integer().null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::CurriculumId)
                            .to(Curriculums::Table, Curriculums::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程班表
        manager
            .create_table(
                Table::create()
                    .table(CourseSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseSections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseSections::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(CourseSections::Section).integer().not_null())
                    .col(ColumnDef::new(CourseSections::Semester).integer().not_null())
                    .col(ColumnDef::new(CourseSections::Year).integer().not_null())
                    .col(ColumnDef::new(CourseSections::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(CourseSections::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseSections::Table, CourseSections::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 授课教师关联表
        manager
            .create_table(
                Table::create()
                    .table(CourseInstructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseInstructors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseInstructors::CourseSectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseInstructors::InstructorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseInstructors::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseInstructors::Table, CourseInstructors::CourseSectionId)
                            .to(CourseSections::Table, CourseSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseInstructors::Table, CourseInstructors::InstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 委员会关联表
        manager
            .create_table(
                Table::create()
                    .table(CourseCommittees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseCommittees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseCommittees::CourseSectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseCommittees::InstructorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseCommittees::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseCommittees::Table, CourseCommittees::CourseSectionId)
                            .to(CourseSections::Table, CourseSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseCommittees::Table, CourseCommittees::InstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程班查询索引
        manager
            .create_index(
                Index::create()
                    .name("idx_course_sections_course_id")
                    .table(CourseSections::Table)
                    .col(CourseSections::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseCommittees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseInstructors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseSections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Courses {
    Table,
    Id,
    CurriculumId,
    CourseCode,
    CourseNameTh,
    CourseNameEn,
    CourseType,
    Credits,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum CourseSections {
    Table,
    Id,
    CourseId,
    Section,
    Semester,
    Year,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum CourseInstructors {
    Table,
    CourseSectionId,
    InstructorId,
    Id,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum CourseCommittees {
    Table,
    Id,
    CourseSectionId,
    InstructorId,
    CreatedAt,
}
