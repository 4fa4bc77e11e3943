//! 显示名称推导模块
//!
//! 把题目文件名转换成前端选择界面展示用的标签。
//! 规则按优先级排成一个有序列表，取第一个命中的规则；
//! 全部未命中时走通用的兜底格式化。

use regex::Regex;
use std::sync::OnceLock;

/// 单条命名规则：命中时返回显示名称，否则返回 None
type Rule = fn(&str) -> Option<String>;

/// 命名规则表，按优先级排列
const RULES: &[Rule] = &[
    default_set_rule,
    numbered_set_rule,
    named_set_rule,
    chemistry_rule,
];

/// 从文件名推导显示名称
///
/// # 参数
/// - `file_name`: 原始文件名（含扩展名）
///
/// # 返回
/// 返回用于展示的显示名称
pub fn derive_display_name(file_name: &str) -> String {
    let stem = strip_json_ext(file_name);

    for rule in RULES {
        if let Some(display_name) = rule(stem) {
            return display_name;
        }
    }

    fallback(stem)
}

/// 规则 1: questions.json -> "Default Question Set"
fn default_set_rule(stem: &str) -> Option<String> {
    (stem == "questions").then(|| "Default Question Set".to_string())
}

/// 规则 2: questions-4.json -> "Question Set 4"
fn numbered_set_rule(stem: &str) -> Option<String> {
    numbered_set_re()
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .map(|digits| format!("Question Set {}", digits.as_str()))
}

/// 规则 3: questions-answer.json -> "Answer Question Set"
fn named_set_rule(stem: &str) -> Option<String> {
    stem.strip_prefix("questions-")
        .map(|rest| format!("{} Question Set", capitalize_first(rest)))
}

/// 规则 4: chemistry2.json -> "Chemistry 2"，chemistry.json -> "Chemistry"
fn chemistry_rule(stem: &str) -> Option<String> {
    let caps = chemistry_re().captures(stem)?;
    Some(match caps.get(1) {
        Some(digits) => format!("Chemistry {}", digits.as_str()),
        None => "Chemistry".to_string(),
    })
}

/// 兜底规则：在字母后紧跟的数字前插入空格，
/// 再按 - / _ 拆词并把每个词首字母大写
///
/// 例如 Chemi1.json -> "Chemi 1"，physics-p2.json -> "Physics P 2"
fn fallback(stem: &str) -> String {
    let spaced = letter_digit_re().replace_all(stem, "$1 $2");

    spaced
        .split(['-', '_'])
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 去掉末尾的 .json 扩展名（大小写不敏感）
fn strip_json_ext(file_name: &str) -> &str {
    let Some(split) = file_name.len().checked_sub(5) else {
        return file_name;
    };
    match (file_name.get(..split), file_name.get(split..)) {
        (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(".json") => stem,
        _ => file_name,
    }
}

/// 把词的首字母大写，其余部分不变
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ========== 正则表达式（固定模式，首次使用时编译） ==========

fn numbered_set_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^questions-(\d+)").expect("固定正则模式"))
}

fn chemistry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^chemistry(\d+)?").expect("固定正则模式"))
}

fn letter_digit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Za-z])(\d)").expect("固定正则模式"))
}
