pub mod config;
pub mod error;
pub mod file_info;

pub use config::{Config, OutputConfig, OutputFormat};
pub use error::{FileInfoError, Result};

// File classification
pub use file_info::{
    classify, AcceptanceTestFile, ClassifiedPaths, FileCategory, FileInfo, FileKind, MainFile,
    ModuleFile, ModuleTestFile, PathClassifier, Singularize, SingularizeConfig, Singularizer,
    TemplateFile, TestKind,
};
