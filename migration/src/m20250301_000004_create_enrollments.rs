use sea_orm_migration::prelude::*;

use crate::m20250301_000002_create_people::{Companies, Instructors, Students};
use crate::m20250301_000003_create_courses::CourseSections;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 选课表
        manager
            .create_table(
                Table::create()
                    .table(StudentEnrolls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentEnrolls::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentEnrolls::StudentId).big_integer().not_null())
                    .col(
                        ColumnDef::new(StudentEnrolls::CourseSectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentEnrolls::Grade).string().null())
                    .col(ColumnDef::new(StudentEnrolls::AttendTraining).string().null())
                    .col(ColumnDef::new(StudentEnrolls::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(StudentEnrolls::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentEnrolls::Table, StudentEnrolls::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentEnrolls::Table, StudentEnrolls::CourseSectionId)
                            .to(CourseSections::Table, CourseSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 审批状态表
        manager
            .create_table(
                Table::create()
                    .table(StudentEnrollStatuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentEnrollStatuses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentEnrollStatuses::StudentEnrollId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEnrollStatuses::InstructorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEnrollStatuses::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(StudentEnrollStatuses::Remarks).text().null())
                    .col(
                        ColumnDef::new(StudentEnrollStatuses::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEnrollStatuses::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                StudentEnrollStatuses::Table,
                                StudentEnrollStatuses::StudentEnrollId,
                            )
                            .to(StudentEnrolls::Table, StudentEnrolls::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                StudentEnrollStatuses::Table,
                                StudentEnrollStatuses::InstructorId,
                            )
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 实习安排表
        manager
            .create_table(
                Table::create()
                    .table(StudentTrainings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentTrainings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentTrainings::StudentEnrollId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StudentTrainings::CompanyId).big_integer().null())
                    .col(
                        ColumnDef::new(StudentTrainings::DocumentLanguage)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentTrainings::StartDate).string().null())
                    .col(ColumnDef::new(StudentTrainings::EndDate).string().null())
                    .col(ColumnDef::new(StudentTrainings::Coordinator).string().null())
                    .col(
                        ColumnDef::new(StudentTrainings::CoordinatorPhoneNumber)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentTrainings::CoordinatorEmail)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentTrainings::Supervisor).string().null())
                    .col(
                        ColumnDef::new(StudentTrainings::SupervisorPhoneNumber)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentTrainings::SupervisorEmail)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentTrainings::Department).string().null())
                    .col(ColumnDef::new(StudentTrainings::Position).string().null())
                    .col(ColumnDef::new(StudentTrainings::JobDescription).text().null())
                    .col(
                        ColumnDef::new(StudentTrainings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentTrainings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentTrainings::Table, StudentTrainings::StudentEnrollId)
                            .to(StudentEnrolls::Table, StudentEnrolls::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentTrainings::Table, StudentTrainings::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 巡访记录表
        manager
            .create_table(
                Table::create()
                    .table(VisitorTrainings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VisitorTrainings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VisitorTrainings::StudentEnrollId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VisitorTrainings::VisitorInstructorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VisitorTrainings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VisitorTrainings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VisitorTrainings::Table, VisitorTrainings::StudentEnrollId)
                            .to(StudentEnrolls::Table, StudentEnrolls::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VisitorTrainings::Table, VisitorTrainings::VisitorInstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 巡访日程表
        manager
            .create_table(
                Table::create()
                    .table(VisitorSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VisitorSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VisitorSchedules::VisitorTrainingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VisitorSchedules::VisitNo).integer().not_null())
                    .col(ColumnDef::new(VisitorSchedules::VisitAt).big_integer().null())
                    .col(ColumnDef::new(VisitorSchedules::Comment).text().null())
                    .col(ColumnDef::new(VisitorSchedules::Status).string().null())
                    .col(
                        ColumnDef::new(VisitorSchedules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VisitorSchedules::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VisitorSchedules::Table, VisitorSchedules::VisitorTrainingId)
                            .to(VisitorTrainings::Table, VisitorTrainings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 巡访照片表
        manager
            .create_table(
                Table::create()
                    .table(VisitsPictures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VisitsPictures::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VisitsPictures::VisitorScheduleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VisitsPictures::PhotoNo).integer().not_null())
                    .col(ColumnDef::new(VisitsPictures::FileName).string().not_null())
                    .col(ColumnDef::new(VisitsPictures::OriginalName).string().not_null())
                    .col(ColumnDef::new(VisitsPictures::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(VisitsPictures::FileType).string().not_null())
                    .col(ColumnDef::new(VisitsPictures::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(VisitsPictures::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(VisitsPictures::Table, VisitsPictures::VisitorScheduleId)
                            .to(VisitorSchedules::Table, VisitorSchedules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 评价表
        manager
            .create_table(
                Table::create()
                    .table(Evaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evaluations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::StudentTrainingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Evaluations::Evaluator).string().not_null())
                    .col(ColumnDef::new(Evaluations::Question).text().not_null())
                    .col(ColumnDef::new(Evaluations::Score).integer().null())
                    .col(ColumnDef::new(Evaluations::Comment).text().null())
                    .col(ColumnDef::new(Evaluations::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Evaluations::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Evaluations::Table, Evaluations::StudentTrainingId)
                            .to(StudentTrainings::Table, StudentTrainings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 常用查询索引
        manager
            .create_index(
                Index::create()
                    .name("idx_student_enrolls_student_id")
                    .table(StudentEnrolls::Table)
                    .col(StudentEnrolls::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_enroll_statuses_enroll_id")
                    .table(StudentEnrollStatuses::Table)
                    .col(StudentEnrollStatuses::StudentEnrollId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Evaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VisitsPictures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VisitorSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VisitorTrainings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentTrainings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentEnrollStatuses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentEnrolls::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum StudentEnrolls {
    Table,
    Id,
    StudentId,
    CourseSectionId,
    Grade,
    AttendTraining,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum StudentEnrollStatuses {
    Table,
    Id,
    StudentEnrollId,
    InstructorId,
    Status,
    Remarks,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentTrainings {
    Table,
    Id,
    StudentEnrollId,
    CompanyId,
    DocumentLanguage,
    StartDate,
    EndDate,
    Coordinator,
    CoordinatorPhoneNumber,
    CoordinatorEmail,
    Supervisor,
    SupervisorPhoneNumber,
    SupervisorEmail,
    Department,
    Position,
    JobDescription,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum VisitorTrainings {
    Table,
    Id,
    StudentEnrollId,
    VisitorInstructorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum VisitorSchedules {
    Table,
    Id,
    VisitorTrainingId,
    VisitNo,
    VisitAt,
    Comment,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum VisitsPictures {
    Table,
    Id,
    VisitorScheduleId,
    PhotoNo,
    FileName,
    OriginalName,
    FileSize,
    FileType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Evaluations {
    Table,
    Id,
    StudentTrainingId,
    Evaluator,
    Question,
    Score,
    Comment,
    CreatedAt,
    UpdatedAt,
}
