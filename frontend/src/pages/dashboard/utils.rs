pub const MAX_SESSION_MINUTES: i64 = 24 * 60;

pub fn validate_session(subject: &str, minutes_input: &str) -> Result<(String, i64), String> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Err("Subject is required".into());
    }
    let minutes = minutes_input
        .trim()
        .parse::<i64>()
        .map_err(|_| "Duration must be a whole number of minutes".to_string())?;
    if !(1..=MAX_SESSION_MINUTES).contains(&minutes) {
        return Err(format!(
            "Duration must be between 1 and {MAX_SESSION_MINUTES} minutes"
        ));
    }
    Ok((subject.to_string(), minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_needs_a_subject_and_sane_duration() {
        assert_eq!(
            validate_session(" Math ", "45"),
            Ok(("Math".to_string(), 45))
        );
        assert!(validate_session("", "45").is_err());
        assert!(validate_session("Math", "0").is_err());
        assert!(validate_session("Math", "1500").is_err());
        assert!(validate_session("Math", "forty").is_err());
    }
}
