use serde::Serialize;
use ts_rs::TS;

// 上传的表格解析结果：首个工作表，每行按表头映射为对象
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/excel.ts")]
pub struct ExcelImportResponse {
    pub file_name: String,
    pub sheet_name: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<serde_json::Value>,
}
