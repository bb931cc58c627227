use crate::config::Script;

const PUNCT: &str = ".,!?:;'\"()[]{}<>@#$%^&*+=-_/\\|`~";

fn is_allowed(c: char, scripts: &[Script]) -> bool {
    if c.is_ascii_alphanumeric() || c.is_whitespace() {
        return true;
    }
    if PUNCT.contains(c) {
        return true;
    }
    scripts.iter().any(|s| s.contains(c))
}

// Disallowed characters are dropped, never replaced
pub fn stage1(text: &str, scripts: &[Script]) -> String {
    text.chars().filter(|&c| is_allowed(c, scripts)).collect()
}
