//! Singularizer
//!
//! ディレクトリ名（複数形）を単数形のカテゴリラベルに変換する。
//! ビルトインの英語規則に、設定ファイルの上書きをマージして保持。

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 単数化の差し替えポイント
///
/// `PathClassifier`はこのトレイト経由でのみ単数化を呼び出す。
pub trait Singularize {
    fn singularize(&self, word: &str) -> String;
}

impl<F> Singularize for F
where
    F: Fn(&str) -> String,
{
    fn singularize(&self, word: &str) -> String {
        self(word)
    }
}

/// 単数形と複数形が同じ語
const BUILTIN_UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// 不規則な複数形（複数形, 単数形）
const BUILTIN_IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("sexes", "sex"),
    ("moves", "move"),
    ("zombies", "zombie"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
];

/// 接尾辞ルール（先にマッチしたものを採用）
static SINGULAR_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)(database)s$", "${1}"),
        (r"(?i)(quiz)zes$", "${1}"),
        (r"(?i)(matr)ices$", "${1}ix"),
        (r"(?i)(vert|ind)ices$", "${1}ex"),
        (r"(?i)^(ox)en", "${1}"),
        (r"(?i)(alias|status)(es)?$", "${1}"),
        (r"(?i)(octop|vir)(us|i)$", "${1}us"),
        (r"(?i)^(a)x[ie]s$", "${1}xis"),
        (r"(?i)(cris|test)(is|es)$", "${1}is"),
        (r"(?i)(shoe)s$", "${1}"),
        (r"(?i)(o)es$", "${1}"),
        (r"(?i)(bus)(es)?$", "${1}"),
        (r"(?i)^(m|l)ice$", "${1}ouse"),
        (r"(?i)(x|ch|ss|sh)es$", "${1}"),
        (r"(?i)(m)ovies$", "${1}ovie"),
        (r"(?i)(s)eries$", "${1}eries"),
        (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
        (r"(?i)([lr])ves$", "${1}f"),
        (r"(?i)(tive)s$", "${1}"),
        (r"(?i)(hive)s$", "${1}"),
        (r"(?i)([^f])ves$", "${1}fe"),
        (r"(?i)(^analy)(sis|ses)$", "${1}sis"),
        (
            r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
            "${1}sis",
        ),
        (r"(?i)([ti])a$", "${1}um"),
        (r"(?i)(n)ews$", "${1}ews"),
        (r"(?i)(ss)$", "${1}"),
        (r"(?i)s$", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let regex = Regex::new(pattern).expect("builtin singular rule must compile");
        (regex, replacement)
    })
    .collect()
});

/// 英語の単数化ルールのランタイムストア
#[derive(Debug, Clone)]
pub struct Singularizer {
    /// 小文字の複数形 → 単数形
    irregular: HashMap<String, String>,
    /// 小文字で保持
    uncountable: HashSet<String>,
}

impl Singularizer {
    /// ビルトインルールのみで初期化
    pub fn builtin() -> Self {
        Self {
            irregular: BUILTIN_IRREGULAR
                .iter()
                .map(|(plural, singular)| (plural.to_string(), singular.to_string()))
                .collect(),
            uncountable: BUILTIN_UNCOUNTABLE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 設定でオーバーライド
    ///
    /// - 同じ複数形の不規則変化は上書き
    /// - 不可算名詞は追加
    pub fn with_config(mut self, config: &SingularizeConfig) -> Self {
        for (plural, singular) in &config.irregular {
            let plural = plural.to_lowercase();
            self.uncountable.remove(&plural);
            self.irregular.insert(plural, singular.clone());
        }
        for word in &config.uncountable {
            self.uncountable.insert(word.to_lowercase());
        }
        self
    }

    fn apply(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        let lower = word.to_lowercase();
        if self.uncountable.contains(&lower) {
            return word.to_string();
        }

        if let Some(singular) = self.irregular.get(&lower) {
            return match_leading_case(word, singular);
        }

        for (regex, replacement) in SINGULAR_RULES.iter() {
            if regex.is_match(word) {
                return regex.replace(word, *replacement).into_owned();
            }
        }

        word.to_string()
    }
}

impl Default for Singularizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Singularize for Singularizer {
    fn singularize(&self, word: &str) -> String {
        self.apply(word)
    }
}

fn match_leading_case(original: &str, replacement: &str) -> String {
    let mut chars = replacement.chars();
    match (original.chars().next(), chars.next()) {
        (Some(o), Some(r)) if o.is_uppercase() => r.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}

/// `config.toml`のsingularizeセクション
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingularizeConfig {
    /// 追加の不規則変化（複数形 → 単数形）
    #[serde(default)]
    pub irregular: HashMap<String, String>,
    /// 追加の不可算名詞
    #[serde(default)]
    pub uncountable: Vec<String>,
}
