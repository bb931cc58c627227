use clap::Parser;
use mdscrub::config::{Config, Script};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "mdscrub", about = "Markdown response scrubber — normalize model-generated Markdown for rendering")]
struct Cli {
    /// Input file(s) or directory (default: stdin)
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Allowed non-ASCII scripts: hangul, kana, cjk, cyrillic, greek
    #[arg(long, value_delimiter = ',')]
    scripts: Option<Vec<String>>,

    /// Deepest heading level to keep; deeper markers are clamped (default: 3)
    #[arg(long)]
    max_heading_level: Option<usize>,

    /// Maximum consecutive blank lines between blocks (default: 1)
    #[arg(long)]
    blank_line_limit: Option<usize>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn parse_script(name: &str) -> Script {
    match name {
        "hangul" => Script::Hangul,
        "kana" => Script::Kana,
        "cjk" => Script::Cjk,
        "cyrillic" => Script::Cyrillic,
        "greek" => Script::Greek,
        _ => die(&format!("unknown script: {}", name)),
    }
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["mdscrub.config.json", "config/mdscrub.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(ref names) = cli.scripts {
        config.scripts = names.iter().map(|n| parse_script(n)).collect();
    }
    if let Some(level) = cli.max_heading_level {
        config.max_heading_level = level;
    }
    if let Some(limit) = cli.blank_line_limit {
        config.blank_line_limit = limit;
    }

    // Collect input text
    let (text, source) = if cli.inputs.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| die(&format!("cannot read stdin: {}", e)));
        (buf, "stdin".to_string())
    } else {
        let files = mdscrub::list_files(&cli.inputs).unwrap_or_else(|e| die(&format!("{}", e)));
        if files.is_empty() {
            die("no input files found");
        }
        let mut all_text = String::new();
        for fp in &files {
            if !all_text.is_empty() {
                all_text.push('\n');
            }
            let content = fs::read_to_string(fp)
                .unwrap_or_else(|e| die(&format!("cannot read {}: {}", fp.display(), e)));
            all_text.push_str(&content);
        }
        (all_text, format!("{} file(s)", files.len()))
    };

    let mut result = mdscrub::normalize(&text, &config);
    result.push('\n');

    if let Some(ref output_path) = cli.output {
        fs::write(output_path, &result)
            .unwrap_or_else(|e| die(&format!("cannot write {}: {}", output_path.display(), e)));
        eprintln!(
            "scrubbed {} -> {} ({} chars)",
            source,
            output_path.display(),
            result.chars().count()
        );
    } else {
        print!("{}", result);
    }
}
