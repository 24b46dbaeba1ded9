pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".into());
    }
    if password.is_empty() {
        return Err("Password is required".into());
    }
    Ok(())
}

pub fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), String> {
    validate_credentials(username, password)?;
    if !email.contains('@') {
        return Err("A valid email address is required".into());
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_fields() {
        assert!(validate_credentials("alice", "pass").is_ok());
        assert!(validate_credentials("", "pass").is_err());
        assert!(validate_credentials("  ", "pass").is_err());
        assert!(validate_credentials("alice", "").is_err());
    }

    #[test]
    fn registration_checks_email_and_password_length() {
        assert!(validate_registration("alice", "alice@example.com", "longenough").is_ok());
        assert!(validate_registration("alice", "not-an-email", "longenough").is_err());
        assert!(validate_registration("alice", "alice@example.com", "short").is_err());
    }
}
