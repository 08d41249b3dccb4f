//! Excel 解析：读取第一个工作表，首行作为表头

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use serde_json::{Map, Number, Value};

use crate::errors::Result;

/// 解析结果
#[derive(Debug)]
pub struct ParsedSheet {
    pub sheet_name: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Value>,
}

pub fn parse_first_sheet(path: &Path) -> Result<ParsedSheet> {
    let mut workbook = open_workbook_auto(path)?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Ok(ParsedSheet {
            sheet_name: None,
            headers: Vec::new(),
            rows: Vec::new(),
        });
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let (headers, rows) = rows_from_range(&range);

    Ok(ParsedSheet {
        sheet_name: Some(sheet_name),
        headers,
        rows,
    })
}

/// 首行生成表头，其余每行转换为 表头 -> 值 的对象；空行跳过
pub fn rows_from_range(range: &Range<Data>) -> (Vec<String>, Vec<Value>) {
    let mut iter = range.rows();
    let Some(header_row) = iter.next() else {
        return (Vec::new(), Vec::new());
    };

    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let name = cell.to_string().trim().to_string();
            if name.is_empty() {
                format!("column_{}", i + 1)
            } else {
                name
            }
        })
        .collect();

    let rows = iter
        .filter(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|row| {
            let mut object = Map::new();
            for (i, header) in headers.iter().enumerate() {
                let value = row.get(i).map(cell_to_json).unwrap_or(Value::Null);
                object.insert(header.clone(), value);
            }
            Value::Object(object)
        })
        .collect();

    (headers, rows)
}

fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::Int(i) => Value::Number((*i).into()),
        // 整数形式的浮点数按整数输出，学号之类的列不会变成 6501001.0
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Value::Number((*f as i64).into())
        }
        Data::Float(f) => Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (3, 2));
        range.set_value((0, 0), Data::String("student_code".to_string()));
        range.set_value((0, 1), Data::String("name".to_string()));
        range.set_value((0, 2), Data::Empty);

        range.set_value((1, 0), Data::Float(6501001.0));
        range.set_value((1, 1), Data::String("Somchai".to_string()));
        range.set_value((1, 2), Data::Float(3.25));

        // 第 3 行全空，应被跳过
        range.set_value((3, 0), Data::Int(6501002));
        range.set_value((3, 1), Data::Bool(true));
        range
    }

    #[test]
    fn test_header_row_mapping() {
        let (headers, rows) = rows_from_range(&sample_range());
        assert_eq!(headers, vec!["student_code", "name", "column_3"]);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0]["student_code"], Value::from(6501001));
        assert_eq!(rows[0]["name"], Value::from("Somchai"));
        assert_eq!(rows[0]["column_3"], Value::from(3.25));

        assert_eq!(rows[1]["student_code"], Value::from(6501002));
        assert_eq!(rows[1]["name"], Value::Bool(true));
        assert_eq!(rows[1]["column_3"], Value::Null);
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        let (headers, rows) = rows_from_range(&range);
        assert!(headers.is_empty());
        assert!(rows.is_empty());
    }
}
