use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

// 学号与教职工号允许字母、数字和连字符
static PERSON_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{1,32}$").expect("Invalid code regex"));

/// 用户名 3 到 32 位，学号常直接用作用户名
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, dots, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_person_code(code: &str) -> Result<(), &'static str> {
    if !PERSON_CODE_RE.is_match(code) {
        return Err("Code must be 1-32 letters, digits or hyphens");
    }
    Ok(())
}

/// 至少 8 位，须同时包含字母与数字
pub fn validate_password(password: &str) -> Result<(), String> {
    let mut errors = Vec::new();
    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        errors.push("Password must contain at least one letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

/// GPAX 取值 0.00 到 4.00
pub fn validate_gpax(gpax: f64) -> Result<(), &'static str> {
    if !(0.0..=4.0).contains(&gpax) {
        return Err("GPAX must be between 0.00 and 4.00");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("6401001").is_ok());
        assert!(validate_username("somchai.k").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("advisor@rmutl.ac.th").is_ok());
        assert!(validate_email("advisor@localhost").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("coop2568").is_ok());
        let err = validate_password("short").unwrap_err();
        assert!(err.contains("at least 8"));
        assert!(err.contains("digit"));
        assert!(validate_password("12345678").is_err());
    }

    #[test]
    fn test_gpax_range() {
        assert!(validate_gpax(3.5).is_ok());
        assert!(validate_gpax(4.01).is_err());
        assert!(validate_gpax(-0.1).is_err());
    }

    #[test]
    fn test_person_code() {
        assert!(validate_person_code("64-0100-1").is_ok());
        assert!(validate_person_code("").is_err());
    }
}
