use sea_orm_migration::prelude::*;

use crate::m20250301_000004_create_enrollments::StudentEnrollStatuses;

#[derive(DeriveMigrationName)]
pub struct Migration;

// 审批流程字段，JSON 以文本形式保存
// SQLite 每条 ALTER TABLE 只能添加一列
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let columns = [
            ColumnDef::new(Workflow::CommitteeVotes).text().null().to_owned(),
            ColumnDef::new(Workflow::CommitteeVoteCount)
                .integer()
                .not_null()
                .default(0)
                .to_owned(),
            ColumnDef::new(Workflow::RequiredCommitteeVotes)
                .integer()
                .not_null()
                .default(3)
                .to_owned(),
            ColumnDef::new(Workflow::CommitteeVotingDeadline)
                .big_integer()
                .null()
                .to_owned(),
            ColumnDef::new(Workflow::StatusHistory).text().null().to_owned(),
            ColumnDef::new(Workflow::InstructorAssignmentHistory)
                .text()
                .null()
                .to_owned(),
        ];

        for column in columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(StudentEnrollStatuses::Table)
                        .add_column(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Workflow::InstructorAssignmentHistory,
            Workflow::StatusHistory,
            Workflow::CommitteeVotingDeadline,
            Workflow::RequiredCommitteeVotes,
            Workflow::CommitteeVoteCount,
            Workflow::CommitteeVotes,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(StudentEnrollStatuses::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Workflow {
    CommitteeVotes,
    CommitteeVoteCount,
    RequiredCommitteeVotes,
    CommitteeVotingDeadline,
    StatusHistory,
    InstructorAssignmentHistory,
}
