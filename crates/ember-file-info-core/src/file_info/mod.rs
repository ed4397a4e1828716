//! # File Info Module
//!
//! Emberプロジェクトのファイルパスを意味的なカテゴリに分類する機能を提供する。
//!
//! ## 設計目的
//!
//! Emberプロジェクトはディレクトリの位置でファイルの役割が決まる。
//! パス文字列だけから以下のカテゴリを判定し、表示ラベルと
//! 関連ファイルをまとめるためのコンテナ名を導出する：
//!
//! - **Main**: `app/`直下のエントリファイル（`app/app.js`等）
//! - **Template**: Handlebarsテンプレート（コンポーネント用かどうかを区別）
//! - **Module**: `app/<type>/`配下のモジュール（route, component, service等）
//! - **ModuleTest**: `tests/unit/`または`tests/integration/`配下のテスト
//! - **AcceptanceTest**: `tests/acceptance/`配下のテスト
//!
//! 分類は純粋関数であり、認識できないパスは`None`を返す（エラーではない）。
//!
//! ## モジュール構成
//!
//! - `kind`: 分類結果のデータ型
//! - `singular`: ディレクトリ名の単数化
//! - `classifier`: 分類器
//!
//! ## 使用例
//!
//! ### 単一パスの分類
//!
//! ```rust
//! use ember_file_info_core::file_info::{classify, FileCategory};
//!
//! let info = classify("app/routes/foo/bar.js").unwrap();
//! assert_eq!(info.category(), FileCategory::Module);
//! assert_eq!(info.display_label(), "foo.bar route");
//! assert_eq!(info.container_name().as_deref(), Some("route:foo.bar"));
//!
//! // 認識できないパス
//! assert!(classify("app/styles/app.css").is_none());
//! assert!(classify("lib/foo.js").is_none());
//! ```
//!
//! ### 複数パスの分類
//!
//! ```rust
//! use ember_file_info_core::file_info::{FileCategory, PathClassifier};
//!
//! let classifier = PathClassifier::builtin();
//! let classified = classifier.classify_all([
//!     "app/components/widget.js",
//!     "app/components/widget.hbs",
//!     "tests/integration/components/widget-test.js",
//!     "public/robots.txt",
//! ]);
//!
//! assert_eq!(classified.in_category(FileCategory::Template).len(), 1);
//! assert_eq!(classified.unclassified, vec!["public/robots.txt"]);
//! assert!(classified.containers().contains_key("component:widget"));
//! ```

mod classifier;
mod kind;
mod singular;

// Re-exports
pub use classifier::{
    classify, ClassifiedPaths, PathClassifier, ACCEPTANCE_DIR, APP_ROOT, COMPONENTS_DIR,
    SOURCE_EXTENSIONS, TEMPLATE_EXTENSIONS, TESTS_ROOT,
};
pub use kind::{
    AcceptanceTestFile, FileCategory, FileInfo, FileKind, MainFile, ModuleFile, ModuleTestFile,
    TemplateFile, TestKind,
};
pub use singular::{Singularize, SingularizeConfig, Singularizer};
