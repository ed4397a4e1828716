//! File Kinds
//!
//! 分類結果のデータ型。
//! 1回の分類呼び出しで生成され、生成後は不変。

use serde::{Serialize, Serializer};

/// ファイルのカテゴリ（判別子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    /// `app/`直下のエントリファイル
    Main,
    /// Handlebarsテンプレート
    Template,
    /// `app/<type>/`配下のモジュール
    Module,
    /// ユニットテスト / インテグレーションテスト
    ModuleTest,
    /// 受け入れテスト
    AcceptanceTest,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Template => "template",
            Self::Module => "module",
            Self::ModuleTest => "module-test",
            Self::AcceptanceTest => "acceptance-test",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// テストの種類（`tests/<kind>/`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Unit,
    Integration,
}

impl TestKind {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "unit" => Some(Self::Unit),
            "integration" => Some(Self::Integration),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Integration => "integration",
        }
    }
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainFile {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateFile {
    pub name: String,
    pub slash_name: String,
    /// `components`ディレクトリ経由のテンプレートか
    pub for_component: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleFile {
    /// `app/`直下ディレクトリ名の単数形（"route", "component"等）
    pub module_type: String,
    pub name: String,
    pub slash_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleTestFile {
    pub test_kind: TestKind,
    /// `tests/<kind>/`直下ディレクトリ名の単数形
    pub subject_type: String,
    pub name: String,
    pub slash_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptanceTestFile {
    pub name: String,
    pub slash_name: String,
}

/// カテゴリ別のペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum FileKind {
    Main(MainFile),
    Template(TemplateFile),
    Module(ModuleFile),
    ModuleTest(ModuleTestFile),
    AcceptanceTest(AcceptanceTestFile),
}

impl FileKind {
    pub fn category(&self) -> FileCategory {
        match self {
            Self::Main(_) => FileCategory::Main,
            Self::Template(_) => FileCategory::Template,
            Self::Module(_) => FileCategory::Module,
            Self::ModuleTest(_) => FileCategory::ModuleTest,
            Self::AcceptanceTest(_) => FileCategory::AcceptanceTest,
        }
    }

    /// 関連ファイルをまとめるコンテナ名
    ///
    /// MainとModuleのみ値を持つ。
    pub fn container_name(&self) -> Option<String> {
        match self {
            Self::Main(main) => Some(format!("main:{}", main.name)),
            Self::Module(module) => Some(format!("{}:{}", module.module_type, module.name)),
            _ => None,
        }
    }

    /// 表示用ラベル
    pub fn display_label(&self) -> String {
        match self {
            Self::Main(main) => main.name.clone(),
            Self::Template(template) => {
                let suffix = if template.for_component {
                    "component-template"
                } else {
                    "template"
                };
                format!("{} {}", template.name, suffix)
            }
            Self::Module(module) => format!("{} {}", module.name, module.module_type),
            Self::ModuleTest(test) => format!("{} {}", test.name, test_suffix(test)),
            Self::AcceptanceTest(test) => format!("{} acceptance-test", test.name),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Main(main) => &main.name,
            Self::Template(template) => &template.name,
            Self::Module(module) => &module.name,
            Self::ModuleTest(test) => &test.name,
            Self::AcceptanceTest(test) => &test.name,
        }
    }

    pub fn slash_name(&self) -> Option<&str> {
        match self {
            Self::Main(_) => None,
            Self::Template(template) => Some(&template.slash_name),
            Self::Module(module) => Some(&module.slash_name),
            Self::ModuleTest(test) => Some(&test.slash_name),
            Self::AcceptanceTest(test) => Some(&test.slash_name),
        }
    }
}

/// テストラベルの接尾辞
///
/// componentはintegration、それ以外はunitが標準。
/// 標準でない組み合わせのみ種類を明記する。
fn test_suffix(test: &ModuleTestFile) -> String {
    let is_component = test.subject_type == "component";
    let mut suffix = format!("{}-", test.subject_type);
    match test.test_kind {
        TestKind::Unit if is_component => suffix.push_str("-unit"),
        TestKind::Integration if !is_component => suffix.push_str("-integration"),
        _ => {}
    }
    suffix.push_str("-test");
    suffix
}

/// 1ファイルの分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    relative_path: String,
    display_label: String,
    kind: FileKind,
}

impl FileInfo {
    pub fn new(relative_path: impl Into<String>, kind: FileKind) -> Self {
        Self {
            relative_path: relative_path.into(),
            display_label: kind.display_label(),
            kind,
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn category(&self) -> FileCategory {
        self.kind.category()
    }

    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    pub fn container_name(&self) -> Option<String> {
        self.kind.container_name()
    }

    pub fn kind(&self) -> &FileKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn slash_name(&self) -> Option<&str> {
        self.kind.slash_name()
    }
}

impl std::fmt::Display for FileInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_label)
    }
}

impl Serialize for FileInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Record<'a> {
            relative_path: &'a str,
            display_label: &'a str,
            container_name: Option<String>,
            #[serde(flatten)]
            kind: &'a FileKind,
        }

        Record {
            relative_path: &self.relative_path,
            display_label: &self.display_label,
            container_name: self.container_name(),
            kind: &self.kind,
        }
        .serialize(serializer)
    }
}
