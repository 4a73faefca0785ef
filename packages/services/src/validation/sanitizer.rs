/// Strips `<` and `>` from raw user input and trims surrounding whitespace.
///
/// The raw text is later rendered back into the page and forwarded to the
/// submit handler, so angle brackets are dropped outright rather than
/// escaped. Total and idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_angle_brackets() {
        assert_eq!(sanitize("<script>alert(1)</script>"), "scriptalert(1)/script");
        assert_eq!(sanitize("a < b > c"), "a  b  c");
        assert!(!sanitize("<<>>").contains('<'));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  hello  "), "hello");
        assert_eq!(sanitize("\tgood evening\n"), "good evening");
    }

    #[test]
    fn test_trims_whitespace_exposed_by_stripping() {
        // Brackets at the edges can leave fresh leading/trailing whitespace
        assert_eq!(sanitize("< hello >"), "hello");
    }

    #[test]
    fn test_idempotent() {
        for input in ["  <b>hi</b>  ", "plain", "", "< x >", "a<b"] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn test_empty_and_bracket_only_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("<>"), "");
    }
}
