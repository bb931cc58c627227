use mdscrub::config::{Config, Script};
use mdscrub::{normalize, normalize_default};

const PUNCT: &str = ".,!?:;'\"()[]{}<>@#$%^&*+=-_/\\|`~";

fn in_allow_list(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || PUNCT.contains(c)
        || Script::Hangul.contains(c)
}

#[test]
fn test_list_closed_by_text() {
    let input = "## Title\n- item one\n- item two\ntext after";
    let result = normalize_default(input);
    assert_eq!(result, "## Title\n- item one\n- item two\n\ntext after");
}

#[test]
fn test_blank_run_between_paragraphs_collapsed() {
    let input = "para one\n\n\n\n\npara two";
    assert_eq!(normalize_default(input), "para one\n\npara two");
}

#[test]
fn test_disallowed_script_only_input() {
    assert_eq!(normalize_default("日本語のテキストです"), "");
    assert_eq!(normalize_default("🔥🚀✨💡"), "");
}

#[test]
fn test_plain_sentence_untouched() {
    let input = "plain sentence with no markdown";
    assert_eq!(normalize_default(input), input);
}

#[test]
fn test_emphasis_run_removed() {
    let result = normalize_default("before ****after");
    assert_eq!(result, "before after");
}

#[test]
fn test_deep_heading_clamped() {
    let result = normalize_default("##### Way Too Deep");
    assert_eq!(result, "### Way Too Deep");
}

#[test]
fn test_model_response_shape() {
    // Same layout the upstream model is prompted to produce
    let input = "## 한 줄 총평\n짧은 총평이야.\n## 잘한 점\n- 기술 스택 선택\n- 범위 관리\n일반 조언 문단.";
    let result = normalize_default(input);
    assert_eq!(
        result,
        "## 한 줄 총평\n짧은 총평이야.\n\n## 잘한 점\n- 기술 스택 선택\n- 범위 관리\n\n일반 조언 문단."
    );
}

#[test]
fn test_allow_list_closure() {
    let inputs = [
        "## Title\n- item 🔥 one\n日本 text",
        "거의 다 한국어인데 ₩5000 같은 게 섞임",
        "\u{200B}zero\u{200B}width\u{FEFF}",
        "mixed   spacing\t\ttabs",
    ];
    for input in inputs {
        let result = normalize_default(input);
        for c in result.chars() {
            assert!(in_allow_list(c), "disallowed char {:?} from {:?}", c, input);
        }
    }
}

#[test]
fn test_idempotence() {
    let inputs = [
        "## Title\n- item one\n- item two\ntext after",
        "para one\n\n\n\n\npara two",
        "##### deep\n****\ntext",
        "## 총평\n\n좋은 프로젝트!\n- 근거 하나\n- 근거 둘\n마무리.",
        "  leading and trailing  \n\n\n",
    ];
    let config = Config::default();
    for input in inputs {
        let once = normalize(input, &config);
        let twice = normalize(&once, &config);
        assert_eq!(once, twice, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_length_monotonicity() {
    // Structural blank-line insertion can add at most one newline per list
    // or heading boundary; these inputs have none, so length may only shrink.
    let inputs = [
        "## Title\n- a\n- b",
        "text with 🔥 emoji and 日本語",
        "\n\n\n\n\nsparse\n\n\n\n\ntext\n\n\n\n\n",
        "plain",
        "",
    ];
    for input in inputs {
        let result = normalize_default(input);
        assert!(
            result.chars().count() <= input.chars().count(),
            "output longer than input for {:?}",
            input
        );
    }
}

#[test]
fn test_no_leading_or_trailing_whitespace() {
    let inputs = ["\n\n\ntext\n\n\n", "   padded   ", "\n## Title\n"];
    for input in inputs {
        let result = normalize_default(input);
        assert_eq!(result, result.trim(), "untrimmed output for {:?}", input);
    }
}

#[test]
fn test_blank_line_cap() {
    let input = "a\n\n\n\n\n\n\nb\n\n\n\nc";
    let result = normalize_default(input);
    assert!(!result.contains("\n\n\n"), "blank run in {:?}", result);
}

#[test]
fn test_two_blank_variant_config() {
    let config = Config {
        blank_line_limit: 2,
        ..Config::default()
    };
    let result = normalize("a\n\n\n\n\n\nb", &config);
    assert_eq!(result, "a\n\n\nb");
}

#[test]
fn test_oversized_blank_line_limit() {
    let config = Config {
        blank_line_limit: usize::MAX,
        ..Config::default()
    };
    assert_eq!(normalize("a\n\n\nb", &config), "a\n\n\nb");
}

#[test]
fn test_cjk_script_config() {
    let config = Config {
        scripts: vec![Script::Cjk],
        ..Config::default()
    };
    assert_eq!(normalize("中文内容 ok", &config), "中文内容 ok");
    assert_eq!(normalize("한국어는 빠짐", &config), "");
}

#[test]
fn test_never_panics_on_adversarial_input() {
    let inputs = [
        "\u{0000}\u{FFFF}\u{10FFFF}",
        "######################",
        "*************",
        "- \n- \n- ",
        "## \n## \n## ",
        "\r\r\r\n\r\n",
    ];
    for input in inputs {
        let _ = normalize_default(input);
    }
}
