use regex::Regex;

pub fn stage4(lines: &[String], blank_line_limit: usize) -> String {
    let text = lines.join("\n");
    let limit = blank_line_limit.min(8);
    // N blank lines between blocks means N+1 consecutive newlines
    let re = Regex::new(&format!(r"\n{{{},}}", limit + 2)).unwrap();
    let replacement = "\n".repeat(limit + 1);
    re.replace_all(&text, replacement.as_str()).trim().to_string()
}
