use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use leafsort::core::utils::geometry::Axis;
use leafsort::engine::config as core_config;
use std::path::PathBuf;

/// Merges command-line arguments, `--set` overrides, the config file and built-in defaults,
/// in that order of priority.
pub fn build_config(args: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let index_path = args
        .index
        .clone()
        .or(file_config.index.take())
        .unwrap_or_else(|| PathBuf::from(&defaults.index));

    let normal = match (args.normal, file_config.normal.as_deref()) {
        (Some(axis), _) => axis,
        (None, Some(text)) => text
            .parse::<Axis>()
            .map_err(|e| CliError::Config(e.to_string()))?,
        (None, None) => defaults.normal,
    };

    let selection_file = file_config.selection.take().unwrap_or_default();
    let membrane = args
        .membrane
        .clone()
        .or(selection_file.membrane)
        .unwrap_or(defaults.membrane);
    let heads = args
        .heads
        .clone()
        .or(selection_file.heads)
        .unwrap_or(defaults.heads);

    let output_file = file_config.output.take().unwrap_or_default();
    let output_path = args.output.clone().or(output_file.path);
    let emit_empty = args.empty || output_file.emit_empty.unwrap_or(defaults.emit_empty);

    let core_config = core_config::ClassificationConfigBuilder::new()
        .membrane_query(membrane)
        .heads_query(heads)
        .normal(normal)
        .emit_empty(emit_empty)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        structure_path: args.structure.clone(),
        index_path,
        output_path,
        core_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Argument(e.to_string()))?;

        match key {
            "index" => config.index = Some(PathBuf::from(value)),
            "normal" => config.normal = Some(value.to_string()),
            "selection.membrane" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .membrane = Some(value.to_string());
            }
            "selection.heads" => {
                config.selection.get_or_insert_with(Default::default).heads =
                    Some(value.to_string());
            }
            "output.path" => {
                config.output.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value));
            }
            "output.emit-empty" => {
                config.output.get_or_insert_with(Default::default).emit_empty = Some(
                    parser::parse_bool(key, value).map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
