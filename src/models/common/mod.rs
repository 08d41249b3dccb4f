pub mod response;

pub use response::ApiResponse;

use serde::Deserialize;
use ts_rs::TS;

/// `index` 查询参数：带 id 时返回单条记录及其关联，否则返回全部集合
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct IndexQuery {
    pub id: Option<i64>,
}
