use leafsort::engine::config as core_config;
use std::path::PathBuf;

pub struct AppConfig {
    pub structure_path: PathBuf,
    pub index_path: PathBuf,
    /// `None` writes the groups to standard output.
    pub output_path: Option<PathBuf>,
    pub core_config: core_config::ClassificationConfig,
}
