use regex::Regex;
use std::sync::LazyLock;

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

fn is_heading(line: &str) -> bool {
    line.starts_with("## ")
}

fn is_list_item(line: &str) -> bool {
    line.starts_with("- ")
}

// Single pass, lookback limited to the last emitted line
pub fn stage3(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for raw in text.split('\n') {
        let line = RE_MULTI_SPACE.replace_all(raw, " ").trim().to_string();

        let needs_blank = match out.last() {
            None => false,
            Some(last) => {
                if is_heading(&line) {
                    !last.is_empty()
                } else if is_list_item(&line) {
                    !last.is_empty() && !is_heading(last) && !is_list_item(last)
                } else if !line.is_empty() {
                    // Ordinary text directly after a list closes the list
                    is_list_item(last)
                } else {
                    false
                }
            }
        };
        if needs_blank {
            out.push(String::new());
        }
        out.push(line);
    }

    out
}
