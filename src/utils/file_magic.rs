//! 上传文件的扩展名与魔术字节校验

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
// OOXML 是 ZIP 容器
const ZIP: &[u8] = &[0x50, 0x4B, 0x03, 0x04];
// 旧版 Office 使用 OLE 复合文档
const OLE: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// 取小写扩展名（含点号），没有扩展名时返回 None
pub fn file_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_ascii_lowercase()))
}

/// 文件头是否与扩展名一致，未知扩展名一律拒绝
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_ascii_lowercase().as_str() {
        ".png" => data.starts_with(PNG),
        ".jpg" | ".jpeg" => data.starts_with(JPEG),
        ".xlsx" => data.starts_with(ZIP),
        ".xls" => data.starts_with(OLE),
        ".pdf" => data.starts_with(b"%PDF"),
        _ => false,
    }
}

/// 按扩展名给出 Content-Type
pub fn content_type_for(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".xls" => "application/vnd.ms-excel",
        ".pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(file_extension("visit-1.JPG").as_deref(), Some(".jpg"));
        assert_eq!(file_extension("students.v2.xlsx").as_deref(), Some(".xlsx"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn test_image_magic() {
        assert!(validate_magic_bytes(PNG, ".png"));
        assert!(validate_magic_bytes(PNG, ".PNG"));
        assert!(!validate_magic_bytes(PNG, ".jpg"));
        assert!(validate_magic_bytes(&[0xFF, 0xD8, 0xFF, 0xE0], ".jpeg"));
    }

    #[test]
    fn test_spreadsheet_magic() {
        assert!(validate_magic_bytes(&[0x50, 0x4B, 0x03, 0x04, 0x14], ".xlsx"));
        assert!(!validate_magic_bytes(&[0x50, 0x4B, 0x03, 0x04], ".xls"));
        assert!(validate_magic_bytes(OLE, ".xls"));
        // 改了扩展名的文本文件
        assert!(!validate_magic_bytes(b"id,name\n1,a", ".xlsx"));
    }

    #[test]
    fn test_empty_and_unknown() {
        assert!(!validate_magic_bytes(&[], ".png"));
        assert!(!validate_magic_bytes(b"MZ\x90\x00", ".exe"));
    }
}
