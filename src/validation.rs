pub fn validate_name(name: &str) -> bool {
    // Must contain at least one alphabetic character
    // Name may contain spaces between alphabets
    name.chars().any(|c| c.is_alphabetic())
        && name
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace())
}

pub fn validate_number(number: &str) -> bool {
    // Must contain at least one digit
    // Digits may be grouped with hyphens or spaces, eg. 909-876-1234
    number.chars().any(|c| c.is_ascii_digit())
        && number
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == '+' || c == ' ')
}
