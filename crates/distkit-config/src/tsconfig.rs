//! TypeScript compiler configuration written into the npm package.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsConfig {
    #[serde(rename = "$schema")]
    pub schema: String,

    #[serde(rename = "compilerOptions")]
    pub compiler_options: TsCompilerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsCompilerOptions {
    pub lib: Vec<String>,
    pub target: String,
    pub strict: bool,
    pub allow_js: bool,
    pub force_consistent_casing_in_file_names: bool,
    pub skip_lib_check: bool,
    pub module_resolution: String,
}

impl Default for TsConfig {
    fn default() -> Self {
        Self {
            schema: "https://json.schemastore.org/tsconfig".to_string(),
            compiler_options: TsCompilerOptions::default(),
        }
    }
}

impl Default for TsCompilerOptions {
    fn default() -> Self {
        Self {
            lib: vec!["ESNext".to_string(), "DOM".to_string()],
            target: "ESNext".to_string(),
            strict: true,
            allow_js: true,
            force_consistent_casing_in_file_names: true,
            skip_lib_check: true,
            module_resolution: "node".to_string(),
        }
    }
}
