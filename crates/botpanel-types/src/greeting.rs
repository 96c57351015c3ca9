/// Render the console greeting shown when a bot session opens.
///
/// Any name is accepted as-is, including the empty string.
///
/// # Examples
///
/// ```
/// use botpanel_types::greeting::greeting;
///
/// assert_eq!(greeting("Sam"), "Hello, Sam!");
/// ```
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting("Sam"), "Hello, Sam!");
    }

    #[test]
    fn test_greeting_empty_name() {
        assert_eq!(greeting(""), "Hello, !");
    }

    #[test]
    fn test_greeting_idempotent() {
        assert_eq!(greeting("Bot Manager User"), greeting("Bot Manager User"));
    }
}
