pub mod config;
pub mod filter;
pub mod markup;
pub mod postprocess;
pub mod prepare;
pub mod reflow;

use config::Config;
use std::io;
use std::path::PathBuf;

/// Normalize untrusted model-generated Markdown into renderer-safe text.
/// Total over all inputs: never panics, degrades to a smaller or empty
/// string on adversarial input.
pub fn normalize(text: &str, config: &Config) -> String {
    // Stage 0
    let text = prepare::stage0(text);

    // Stage 1
    let text = filter::stage1(&text, &config.scripts);

    // Stage 2
    let text = markup::stage2(&text, config.max_heading_level);

    // Stage 3
    let lines = reflow::stage3(&text);

    // Stage 4
    postprocess::stage4(&lines, config.blank_line_limit)
}

pub fn normalize_default(text: &str) -> String {
    normalize(text, &Config::default())
}

pub fn list_files(inputs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let re = regex::Regex::new(r"(?i)\.(md|markdown|txt)$").unwrap();
    let mut out: Vec<PathBuf> = Vec::new();

    for p in inputs {
        if p.is_dir() {
            for entry in std::fs::read_dir(p)? {
                let entry = entry?;
                let sub_path = entry.path();
                if sub_path.is_dir() {
                    let sub_files = list_files(&[sub_path])?;
                    out.extend(sub_files);
                } else if sub_path.is_file() {
                    if let Some(path_str) = sub_path.to_str() {
                        if re.is_match(path_str) {
                            out.push(sub_path);
                        }
                    }
                }
            }
        } else if p.is_file() {
            if let Some(path_str) = p.to_str() {
                if re.is_match(path_str) {
                    out.push(p.clone());
                }
            }
        }
    }

    out.sort();
    Ok(out)
}
