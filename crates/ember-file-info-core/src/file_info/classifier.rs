//! Path Classifier
//!
//! プロジェクト相対パスをディレクトリ構成の規約に基づいて分類する。
//! ファイル内容やファイルシステムには一切アクセスしない。

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::config::Config;

use super::kind::{
    AcceptanceTestFile, FileCategory, FileInfo, FileKind, MainFile, ModuleFile, ModuleTestFile,
    TemplateFile, TestKind,
};
use super::singular::{Singularize, Singularizer};

/// 分類対象の拡張子
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "hbs", "handlebars"];

/// テンプレートとして扱う拡張子
pub const TEMPLATE_EXTENSIONS: &[&str] = &["hbs", "handlebars"];

pub const APP_ROOT: &str = "app";
pub const TESTS_ROOT: &str = "tests";
pub const ACCEPTANCE_DIR: &str = "acceptance";
pub const COMPONENTS_DIR: &str = "components";

static BUILTIN_CLASSIFIER: Lazy<PathClassifier> = Lazy::new(PathClassifier::builtin);

/// ビルトインの単数化ルールでパスを分類
///
/// 認識できない形のパスは`None`。
pub fn classify(relative_path: &str) -> Option<FileInfo> {
    BUILTIN_CLASSIFIER.classify(relative_path)
}

/// パス分類器
#[derive(Debug, Clone, Default)]
pub struct PathClassifier<S = Singularizer> {
    singularizer: S,
}

impl PathClassifier<Singularizer> {
    /// ビルトインの単数化ルールで構築
    pub fn builtin() -> Self {
        Self::new(Singularizer::builtin())
    }

    /// 設定ファイルの単数化オーバーライドを適用して構築
    pub fn from_config(config: &Config) -> Self {
        Self::new(Singularizer::builtin().with_config(&config.singularize))
    }
}

impl<S: Singularize> PathClassifier<S> {
    pub fn new(singularizer: S) -> Self {
        Self { singularizer }
    }

    /// 1パスを分類
    pub fn classify(&self, relative_path: &str) -> Option<FileInfo> {
        let extension = extension(relative_path)?;
        if !SOURCE_EXTENSIONS.contains(&extension) {
            return None;
        }

        let segments: Vec<&str> = relative_path.split('/').collect();

        let kind = match segments[0] {
            APP_ROOT => self.classify_app(&segments, extension),
            TESTS_ROOT => self.classify_tests(&segments),
            _ => None,
        }?;

        tracing::trace!(path = relative_path, category = %kind.category(), "classified");
        Some(FileInfo::new(relative_path, kind))
    }

    /// 複数パスをまとめて分類
    pub fn classify_all<I, P>(&self, paths: I) -> ClassifiedPaths
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut files = Vec::new();
        let mut unclassified = Vec::new();

        for path in paths {
            let path = path.as_ref();
            match self.classify(path) {
                Some(info) => files.push(info),
                None => {
                    tracing::debug!(path, "skipping unclassifiable path");
                    unclassified.push(path.to_string());
                }
            }
        }

        ClassifiedPaths {
            files,
            unclassified,
        }
    }

    fn classify_app(&self, segments: &[&str], extension: &str) -> Option<FileKind> {
        if segments.len() == 2 {
            return Some(FileKind::Main(MainFile {
                name: strip_extension(segments[1]).to_string(),
            }));
        }

        if TEMPLATE_EXTENSIONS.contains(&extension) {
            // app/components/<name>.hbs または app/templates/components/<name>.hbs
            let (for_component, start) = if segments[1] == COMPONENTS_DIR {
                (true, 2)
            } else if segments.len() > 3 && segments[2] == COMPONENTS_DIR {
                (true, 3)
            } else {
                (false, 2)
            };
            let (name, slash_name) = name_parts(&segments[start..]);
            return Some(FileKind::Template(TemplateFile {
                name,
                slash_name,
                for_component,
            }));
        }

        let (name, slash_name) = name_parts(&segments[2..]);
        Some(FileKind::Module(ModuleFile {
            module_type: self.singularizer.singularize(segments[1]),
            name,
            slash_name,
        }))
    }

    fn classify_tests(&self, segments: &[&str]) -> Option<FileKind> {
        let kind_segment = *segments.get(1)?;

        if kind_segment == ACCEPTANCE_DIR {
            if segments.len() < 3 {
                return None;
            }
            let (name, slash_name) = name_parts(&segments[2..]);
            return Some(FileKind::AcceptanceTest(AcceptanceTestFile { name, slash_name }));
        }

        let test_kind = TestKind::from_segment(kind_segment)?;
        if segments.len() < 4 {
            return None;
        }

        let (name, slash_name) = name_parts(&segments[3..]);
        Some(FileKind::ModuleTest(ModuleTestFile {
            test_kind,
            subject_type: self.singularizer.singularize(segments[2]),
            name,
            slash_name,
        }))
    }
}

/// 最終セグメントの拡張子（ドットなし）
///
/// 先頭のドットのみのファイル名（`.hbs`等）は拡張子なし。
fn extension(path: &str) -> Option<&str> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rfind('.') {
        Some(index) if index > 0 => Some(&file_name[index + 1..]),
        _ => None,
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) if index > 0 => &file_name[..index],
        _ => file_name,
    }
}

/// 名前セグメントから(ドット区切り, スラッシュ区切り)の名前を作る
fn name_parts(segments: &[&str]) -> (String, String) {
    let mut parts: Vec<&str> = segments.to_vec();
    if let Some(last) = parts.last_mut() {
        *last = strip_extension(*last);
    }
    (parts.join("."), parts.join("/"))
}

/// 複数パスの分類結果
#[derive(Debug, Clone, Default)]
pub struct ClassifiedPaths {
    /// 分類できたファイル（入力順）
    pub files: Vec<FileInfo>,
    /// 分類できなかったパス（入力順）
    pub unclassified: Vec<String>,
}

impl ClassifiedPaths {
    /// 特定カテゴリのファイルを取得
    pub fn in_category(&self, category: FileCategory) -> Vec<&FileInfo> {
        self.files
            .iter()
            .filter(|f| f.category() == category)
            .collect()
    }

    /// カテゴリ別のファイル数を取得
    pub fn category_counts(&self) -> BTreeMap<FileCategory, usize> {
        let mut counts = BTreeMap::new();
        for file in &self.files {
            *counts.entry(file.category()).or_insert(0) += 1;
        }
        counts
    }

    /// コンテナ名でグループ化
    ///
    /// コンテナ名を持たないファイルは含まない。
    pub fn containers(&self) -> BTreeMap<String, Vec<&FileInfo>> {
        let mut groups: BTreeMap<String, Vec<&FileInfo>> = BTreeMap::new();
        for file in &self.files {
            if let Some(container) = file.container_name() {
                groups.entry(container).or_default().push(file);
            }
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_extensions() {
        for path in [
            "app/styles/app.css",
            "app/images/logo.png",
            "app/config.json",
            "app/routes/foo.ts",
            "tests/unit/routes/foo-test.coffee",
            "app/routes/README",
            "app/templates/.hbs",
            "",
        ] {
            assert!(classify(path).is_none(), "Expected {} to be absent", path);
        }
    }

    #[test]
    fn test_main_file() {
        let info = classify("app/foo.js").unwrap();
        assert_eq!(
            info.kind(),
            &FileKind::Main(MainFile {
                name: "foo".to_string()
            })
        );
        assert_eq!(info.container_name().as_deref(), Some("main:foo"));
        assert_eq!(info.display_label(), "foo");
        assert_eq!(info.relative_path(), "app/foo.js");
    }

    #[test]
    fn test_main_file_template_extension() {
        let info = classify("app/index.hbs").unwrap();
        assert_eq!(info.category(), FileCategory::Main);
        assert_eq!(info.name(), "index");
    }

    #[test]
    fn test_colocated_component_template() {
        let info = classify("app/components/widget.hbs").unwrap();
        assert_eq!(
            info.kind(),
            &FileKind::Template(TemplateFile {
                name: "widget".to_string(),
                slash_name: "widget".to_string(),
                for_component: true,
            })
        );
        assert_eq!(info.display_label(), "widget component-template");
        assert_eq!(info.container_name(), None);
    }

    #[test]
    fn test_classic_component_template() {
        let info = classify("app/templates/components/ui/button.hbs").unwrap();
        assert_eq!(
            info.kind(),
            &FileKind::Template(TemplateFile {
                name: "ui.button".to_string(),
                slash_name: "ui/button".to_string(),
                for_component: true,
            })
        );
        assert_eq!(info.display_label(), "ui.button component-template");
    }

    #[test]
    fn test_route_template() {
        let info = classify("app/templates/index.hbs").unwrap();
        assert_eq!(
            info.kind(),
            &FileKind::Template(TemplateFile {
                name: "index".to_string(),
                slash_name: "index".to_string(),
                for_component: false,
            })
        );
        assert_eq!(info.display_label(), "index template");
    }

    #[test]
    fn test_handlebars_extension_is_template() {
        let info = classify("app/templates/posts/show.handlebars").unwrap();
        assert_eq!(info.category(), FileCategory::Template);
        assert_eq!(info.name(), "posts.show");
        assert_eq!(info.slash_name(), Some("posts/show"));
    }

    #[test]
    fn test_template_named_components_is_not_component_template() {
        let info = classify("app/templates/components.hbs").unwrap();
        assert_eq!(info.display_label(), "components template");
    }

    #[test]
    fn test_module() {
        let info = classify("app/routes/foo/bar.js").unwrap();
        assert_eq!(
            info.kind(),
            &FileKind::Module(ModuleFile {
                module_type: "route".to_string(),
                name: "foo.bar".to_string(),
                slash_name: "foo/bar".to_string(),
            })
        );
        assert_eq!(info.container_name().as_deref(), Some("route:foo.bar"));
        assert_eq!(info.display_label(), "foo.bar route");
    }

    #[test]
    fn test_component_module() {
        let info = classify("app/components/widget.js").unwrap();
        assert_eq!(info.container_name().as_deref(), Some("component:widget"));
        assert_eq!(info.display_label(), "widget component");
    }

    #[test]
    fn test_unit_component_test() {
        let info = classify("tests/unit/components/widget-test.js").unwrap();
        assert_eq!(
            info.kind(),
            &FileKind::ModuleTest(ModuleTestFile {
                test_kind: TestKind::Unit,
                subject_type: "component".to_string(),
                name: "widget-test".to_string(),
                slash_name: "widget-test".to_string(),
            })
        );
        assert_eq!(info.display_label(), "widget-test component--unit-test");
        assert_eq!(info.container_name(), None);
    }

    #[test]
    fn test_integration_route_test() {
        let info = classify("tests/integration/routes/foo-test.js").unwrap();
        match info.kind() {
            FileKind::ModuleTest(test) => {
                assert_eq!(test.subject_type, "route");
                assert_eq!(test.test_kind, TestKind::Integration);
            }
            other => panic!("Expected module test, got {:?}", other),
        }
        assert_eq!(info.display_label(), "foo-test route--integration-test");
    }

    #[test]
    fn test_unmarked_module_tests() {
        assert_eq!(
            classify("tests/integration/components/x-foo-test.js")
                .unwrap()
                .display_label(),
            "x-foo-test component--test"
        );
        assert_eq!(
            classify("tests/unit/services/session/store-test.js")
                .unwrap()
                .display_label(),
            "session.store-test service--test"
        );
    }

    #[test]
    fn test_acceptance_test() {
        let info = classify("tests/acceptance/login.js").unwrap();
        assert_eq!(
            info.kind(),
            &FileKind::AcceptanceTest(AcceptanceTestFile {
                name: "login".to_string(),
                slash_name: "login".to_string(),
            })
        );
        assert_eq!(info.display_label(), "login acceptance-test");
    }

    #[test]
    fn test_unrecognized_roots_and_kinds() {
        for path in [
            "tests/other/x.js",
            "lib/foo.js",
            "foo.js",
            "tests/helpers/start-app.js",
            "tests/test-helper.js",
            "tests/acceptance.js",
            "tests/unit/foo-test.js",
            "./app/foo.js",
            "/app/foo.js",
        ] {
            assert!(classify(path).is_none(), "Expected {} to be absent", path);
        }
    }

    #[test]
    fn test_name_never_contains_extension() {
        for path in [
            "app/foo.js",
            "app/templates/index.hbs",
            "app/routes/a/b.js",
            "tests/unit/routes/a-test.js",
            "tests/acceptance/x/y.js",
        ] {
            let info = classify(path).unwrap();
            assert!(!info.name().ends_with(".js"), "{}", info.name());
            assert!(!info.name().ends_with(".hbs"), "{}", info.name());
        }
    }

    #[test]
    fn test_name_and_slash_name_agree() {
        for path in [
            "app/templates/components/a/b/c.hbs",
            "app/routes/a/b/c.js",
            "tests/unit/routes/a/b-test.js",
            "tests/acceptance/a/b/c.js",
        ] {
            let info = classify(path).unwrap();
            let slash_name = info.slash_name().unwrap();
            assert_eq!(info.name().replace('.', "/"), slash_name);
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let path = "app/routes/foo/bar.js";
        assert_eq!(classify(path), classify(path));
    }

    #[test]
    fn test_injected_singularizer() {
        let classifier = PathClassifier::new(|word: &str| format!("<{}>", word));
        let info = classifier.classify("app/routes/foo.js").unwrap();
        assert_eq!(info.container_name().as_deref(), Some("<routes>:foo"));

        let info = classifier
            .classify("tests/unit/services/foo-test.js")
            .unwrap();
        assert_eq!(info.display_label(), "foo-test <services>--test");
    }

    #[test]
    fn test_classifier_from_config() {
        let mut config = Config::default();
        config
            .singularize
            .irregular
            .insert("data".to_string(), "data".to_string());

        let classifier = PathClassifier::from_config(&config);
        let info = classifier.classify("app/data/store.js").unwrap();
        assert_eq!(info.container_name().as_deref(), Some("data:store"));

        let builtin = classify("app/data/store.js").unwrap();
        assert_eq!(builtin.container_name().as_deref(), Some("datum:store"));
    }

    #[test]
    fn test_classify_all_groups_results() {
        let classified = PathClassifier::builtin().classify_all([
            "app/app.js",
            "app/components/widget.js",
            "app/components/widget.hbs",
            "app/routes/index.js",
            "app/styles/app.css",
            "tests/unit/components/widget-test.js",
            "tests/acceptance/login.js",
            "README.md",
        ]);

        assert_eq!(classified.files.len(), 6);
        assert_eq!(classified.unclassified, vec!["app/styles/app.css", "README.md"]);
        assert!(!classified.is_empty());

        let counts = classified.category_counts();
        assert_eq!(counts.get(&FileCategory::Main), Some(&1));
        assert_eq!(counts.get(&FileCategory::Module), Some(&2));
        assert_eq!(counts.get(&FileCategory::Template), Some(&1));
        assert_eq!(counts.get(&FileCategory::ModuleTest), Some(&1));
        assert_eq!(counts.get(&FileCategory::AcceptanceTest), Some(&1));

        let modules = classified.in_category(FileCategory::Module);
        assert_eq!(modules[0].relative_path(), "app/components/widget.js");

        let containers = classified.containers();
        let names: Vec<&str> = containers.keys().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["component:widget", "main:app", "route:index"]);
    }

    #[test]
    fn test_extension_helpers() {
        assert_eq!(extension("app/foo.js"), Some("js"));
        assert_eq!(extension("app/foo.min.js"), Some("js"));
        assert_eq!(extension("app/.hbs"), None);
        assert_eq!(extension("app.dir/foo"), None);
        assert_eq!(strip_extension("foo.min.js"), "foo.min");
        assert_eq!(strip_extension(".eslintrc"), ".eslintrc");
    }
}
