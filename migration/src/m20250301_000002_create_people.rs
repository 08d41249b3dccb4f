use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_organization::{
    Campuses, Curriculums, Faculties, Majors, Programs,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(
                        ColumnDef::new(Users::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Students::StudentCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::MiddleName).string().null())
                    .col(ColumnDef::new(Students::LastName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::Gpax).double().null())
                    .col(ColumnDef::new(Students::FacultyId).big_integer().null())
                    .col(ColumnDef::new(Students::ProgramId).big_integer().null())
                    .col(ColumnDef::new(Students::CurriculumId).big_integer().null())
                    .col(ColumnDef::new(Students::MajorId).big_integer().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::CurriculumId)
                            .to(Curriculums::Table, Curriculums::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::MajorId)
                            .to(Majors::Table, Majors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 教师表
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Instructors::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Instructors::StaffCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Instructors::AcademicTitle).string().null())
                    .col(ColumnDef::new(Instructors::FirstName).string().not_null())
                    .col(ColumnDef::new(Instructors::LastName).string().not_null())
                    .col(ColumnDef::new(Instructors::Email).string().null())
                    .col(ColumnDef::new(Instructors::Phone).string().null())
                    .col(ColumnDef::new(Instructors::FacultyId).big_integer().null())
                    .col(ColumnDef::new(Instructors::ProgramId).big_integer().null())
                    .col(ColumnDef::new(Instructors::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Instructors::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Instructors::Table, Instructors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Instructors::Table, Instructors::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Instructors::Table, Instructors::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 教务人员表
        manager
            .create_table(
                Table::create()
                    .table(Staffs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Staffs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Staffs::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Staffs::StaffCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Staffs::FirstName).string().not_null())
                    .col(ColumnDef::new(Staffs::LastName).string().not_null())
                    .col(ColumnDef::new(Staffs::Email).string().null())
                    .col(ColumnDef::new(Staffs::Phone).string().null())
                    .col(ColumnDef::new(Staffs::CampusId).big_integer().null())
                    .col(ColumnDef::new(Staffs::FacultyId).big_integer().null())
                    .col(ColumnDef::new(Staffs::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Staffs::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Staffs::Table, Staffs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Staffs::Table, Staffs::CampusId)
                            .to(Campuses::Table, Campuses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Staffs::Table, Staffs::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 实习单位表
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Companies::CompanyRegisterNumber)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(Companies::CompanyNameTh).string().not_null())
                    .col(ColumnDef::new(Companies::CompanyNameEn).string().null())
                    .col(ColumnDef::new(Companies::CompanyAddress).text().null())
                    .col(ColumnDef::new(Companies::CompanyMap).string().null())
                    .col(ColumnDef::new(Companies::CompanyEmail).string().null())
                    .col(ColumnDef::new(Companies::CompanyPhoneNumber).string().null())
                    .col(ColumnDef::new(Companies::CompanyType).string().null())
                    .col(ColumnDef::new(Companies::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Companies::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Staffs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Students {
    Table,
    Id,
    UserId,
    StudentCode,
    FirstName,
    MiddleName,
    LastName,
    Email,
    Phone,
    Gpax,
    FacultyId,
    ProgramId,
    CurriculumId,
    MajorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Instructors {
    Table,
    Id,
    UserId,
    StaffCode,
    AcademicTitle,
    FirstName,
    LastName,
    Email,
    Phone,
    FacultyId,
    ProgramId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Staffs {
    Table,
    Id,
    UserId,
    StaffCode,
    FirstName,
    LastName,
    Email,
    Phone,
    CampusId,
    FacultyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Companies {
    Table,
    Id,
    CompanyRegisterNumber,
    CompanyNameTh,
    CompanyNameEn,
    CompanyAddress,
    CompanyMap,
    CompanyEmail,
    CompanyPhoneNumber,
    CompanyType,
    CreatedAt,
    UpdatedAt,
}
