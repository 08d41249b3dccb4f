//! 公函中的泰文数字与佛历日期

use chrono::{Datelike, NaiveDate};

/// 佛历与公历的年份差
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

const THAI_DIGITS: [char; 10] = ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙'];

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// 把阿拉伯数字替换为泰文数字，其余字符保持不变
pub fn to_thai_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => THAI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

pub fn buddhist_year(ad_year: i32) -> i32 {
    ad_year + BUDDHIST_ERA_OFFSET
}

/// "๑๖ กันยายน ๒๕๖๗"
pub fn thai_date(date: NaiveDate) -> String {
    let month = THAI_MONTHS[date.month0() as usize];
    to_thai_digits(&format!(
        "{} {} {}",
        date.day(),
        month,
        buddhist_year(date.year())
    ))
}

/// "16 September B.E. 2567 (2024)"
pub fn english_be_date(date: NaiveDate) -> String {
    let month = ENGLISH_MONTHS[date.month0() as usize];
    format!(
        "{} {} B.E. {} ({})",
        date.day(),
        month,
        buddhist_year(date.year()),
        date.year()
    )
}

/// 英文函件中的学期写法
pub fn semester_en(semester: i32) -> &'static str {
    match semester {
        1 => "first",
        _ => "second",
    }
}

/// 可选日期，缺失时保留占位点线
pub fn thai_date_or_blank(date: Option<NaiveDate>) -> String {
    date.map(thai_date).unwrap_or_else(|| "………………".to_string())
}

pub fn english_be_date_or_blank(date: Option<NaiveDate>) -> String {
    date.map(english_be_date)
        .unwrap_or_else(|| "……………………".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_digits() {
        assert_eq!(to_thai_digits("0123456789"), "๐๑๒๓๔๕๖๗๘๙");
        assert_eq!(to_thai_digits("ที่ 12/2567"), "ที่ ๑๒/๒๕๖๗");
        assert_eq!(to_thai_digits("abc"), "abc");
    }

    #[test]
    fn test_thai_date_uses_buddhist_era() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 16).unwrap();
        assert_eq!(thai_date(date), "๑๖ กันยายน ๒๕๖๗");

        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(thai_date(new_year), "๑ มกราคม ๒๕๖๘");
    }

    #[test]
    fn test_english_be_date() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 16).unwrap();
        assert_eq!(english_be_date(date), "16 September B.E. 2567 (2024)");
    }

    #[test]
    fn test_semester_words() {
        assert_eq!(semester_en(1), "first");
        assert_eq!(semester_en(2), "second");
        assert_eq!(semester_en(3), "second");
    }

    #[test]
    fn test_blank_placeholders() {
        assert!(thai_date_or_blank(None).starts_with('…'));
        assert_eq!(
            english_be_date_or_blank(NaiveDate::from_ymd_opt(2025, 6, 2)),
            "2 June B.E. 2568 (2025)"
        );
    }
}
