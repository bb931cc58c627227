use regex::Regex;
use std::sync::LazyLock;

static RE_EMPHASIS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*{3,}").unwrap());

/// Strip runs of 3+ emphasis markers and clamp heading marker runs deeper
/// than `max_heading_level` down to exactly that level.
pub fn stage2(text: &str, max_heading_level: usize) -> String {
    let text = RE_EMPHASIS_RUN.replace_all(text, "").to_string();
    let max = max_heading_level.clamp(1, 6);
    let re = Regex::new(&format!("#{{{},}}", max + 1)).unwrap();
    re.replace_all(&text, "#".repeat(max).as_str()).to_string()
}
