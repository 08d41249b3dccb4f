use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 校区表
        manager
            .create_table(
                Table::create()
                    .table(Campuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campuses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Campuses::CampusCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Campuses::CampusNameTh).string().not_null())
                    .col(ColumnDef::new(Campuses::CampusNameEn).string().null())
                    .col(ColumnDef::new(Campuses::Address).text().null())
                    .col(ColumnDef::new(Campuses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Campuses::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 学院表
        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculties::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faculties::CampusId).big_integer().not_null())
                    .col(ColumnDef::new(Faculties::FacultyNameTh).string().not_null())
                    .col(ColumnDef::new(Faculties::FacultyNameEn).string().null())
                    .col(ColumnDef::new(Faculties::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Faculties::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Faculties::Table, Faculties::CampusId)
                            .to(Campuses::Table, Campuses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 专业计划表
        manager
            .create_table(
                Table::create()
                    .table(Programs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Programs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Programs::FacultyId).big_integer().not_null())
                    .col(ColumnDef::new(Programs::ProgramNameTh).string().not_null())
                    .col(ColumnDef::new(Programs::ProgramNameEn).string().null())
                    .col(ColumnDef::new(Programs::Abbreviation).string().null())
                    .col(ColumnDef::new(Programs::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Programs::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Programs::Table, Programs::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程体系表
        manager
            .create_table(
                Table::create()
                    .table(Curriculums::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Curriculums::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Curriculums::ProgramId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Curriculums::CurriculumNameTh)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Curriculums::CurriculumNameEn).string().null())
                    .col(ColumnDef::new(Curriculums::AcademicYear).integer().null())
                    .col(
                        ColumnDef::new(Curriculums::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Curriculums::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Curriculums::Table, Curriculums::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 方向表
        manager
            .create_table(
                Table::create()
                    .table(Majors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Majors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Majors::CurriculumId).big_integer().not_null())
                    .col(ColumnDef::new(Majors::MajorNameTh).string().not_null())
                    .col(ColumnDef::new(Majors::MajorNameEn).string().null())
                    .col(ColumnDef::new(Majors::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Majors::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Majors::Table, Majors::CurriculumId)
                            .to(Curriculums::Table, Curriculums::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Majors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Curriculums::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Programs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Campuses::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Campuses {
    #[sea_orm(iden = "campuses")]
    Table,
    Id,
    CampusCode,
    CampusNameTh,
    CampusNameEn,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Faculties {
    #[sea_orm(iden = "faculties")]
    Table,
    Id,
    CampusId,
    FacultyNameTh,
    FacultyNameEn,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Programs {
    #[sea_orm(iden = "programs")]
    Table,
    Id,
    FacultyId,
    ProgramNameTh,
    ProgramNameEn,
    Abbreviation,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Curriculums {
    #[sea_orm(iden = "curriculums")]
    Table,
    Id,
    ProgramId,
    CurriculumNameTh,
    CurriculumNameEn,
    AcademicYear,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Majors {
    #[sea_orm(iden = "majors")]
    Table,
    Id,
    CurriculumId,
    MajorNameTh,
    MajorNameEn,
    CreatedAt,
    UpdatedAt,
}
