use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns, one row per root
    #[default]
    Table,
    Json,
    Yaml,
    /// One JSON object per line, followed by a total line
    Jsonl,
}
