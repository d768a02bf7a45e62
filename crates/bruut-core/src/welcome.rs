/// Greeting markup for the `welcome` query parameter.
///
/// Only ASCII letters, digits and hyphens are accepted; hyphens read as
/// spaces. Any other input yields `None` and nothing is rendered.
pub fn parse(value: &str) -> Option<String> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    Some(format!("Welcome,<br>{}", value.replace('-', " ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphens_become_spaces() {
        assert_eq!(parse("john-doe").as_deref(), Some("Welcome,<br>john doe"));
    }

    #[test]
    fn rejects_disallowed_characters() {
        assert_eq!(parse("<script>"), None);
        assert_eq!(parse("john doe"), None);
        assert_eq!(parse("jöhn"), None);
        assert_eq!(parse(""), None);
    }
}
