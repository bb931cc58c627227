use serde::Deserialize;

/// Non-ASCII scripts that may be allowed through the character filter.
/// ASCII letters, digits, whitespace, and the punctuation set are always
/// allowed regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hangul,
    Kana,
    Cjk,
    Cyrillic,
    Greek,
}

impl Script {
    pub fn contains(self, c: char) -> bool {
        match self {
            // Precomposed syllables only; stage 0 composes jamo first
            Script::Hangul => ('\u{AC00}'..='\u{D7A3}').contains(&c),
            Script::Kana => ('\u{3040}'..='\u{30FF}').contains(&c),
            Script::Cjk => ('\u{4E00}'..='\u{9FFF}').contains(&c),
            Script::Cyrillic => ('\u{0400}'..='\u{04FF}').contains(&c),
            Script::Greek => ('\u{0370}'..='\u{03FF}').contains(&c),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_scripts")]
    pub scripts: Vec<Script>,

    #[serde(default = "default_max_heading_level")]
    pub max_heading_level: usize,

    #[serde(default = "default_blank_line_limit")]
    pub blank_line_limit: usize,
}

fn default_scripts() -> Vec<Script> {
    vec![Script::Hangul]
}
fn default_max_heading_level() -> usize {
    3
}
fn default_blank_line_limit() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scripts: vec![Script::Hangul],
            max_heading_level: 3,
            blank_line_limit: 1,
        }
    }
}
