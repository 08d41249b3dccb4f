use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct BulkUpdateResponse {
    /// 实际更新的行数，不存在的 id 被忽略
    pub affected: u64,
}
