pub const DEFAULT_NUM_CARDS: u32 = 5;
pub const MAX_NUM_CARDS: u32 = 20;

pub fn validate_card(question: &str, answer: &str) -> Result<(), String> {
    if question.trim().is_empty() {
        return Err("Question is required".into());
    }
    if answer.trim().is_empty() {
        return Err("Answer is required".into());
    }
    Ok(())
}

/// Parses the "number of cards" field; empty means the server default.
pub fn parse_num_cards(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_NUM_CARDS);
    }
    match trimmed.parse::<u32>() {
        Ok(n) if (1..=MAX_NUM_CARDS).contains(&n) => Ok(n),
        Ok(_) => Err(format!("Choose between 1 and {MAX_NUM_CARDS} cards")),
        Err(_) => Err("Number of cards must be a whole number".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_requires_question_and_answer() {
        assert!(validate_card("Q", "A").is_ok());
        assert!(validate_card(" ", "A").is_err());
        assert!(validate_card("Q", "").is_err());
    }

    #[test]
    fn num_cards_defaults_and_bounds() {
        assert_eq!(parse_num_cards(""), Ok(DEFAULT_NUM_CARDS));
        assert_eq!(parse_num_cards(" 10 "), Ok(10));
        assert!(parse_num_cards("0").is_err());
        assert!(parse_num_cards("21").is_err());
        assert!(parse_num_cards("ten").is_err());
    }
}
