use crate::core::utils::geometry::Axis;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Parameters of a single leaflet classification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationConfig {
    /// Query selecting all atoms of the membrane.
    pub membrane_query: String,
    /// Query selecting exactly one head atom per membrane lipid.
    pub heads_query: String,
    /// Axis along which the membrane normal is oriented.
    pub normal: Axis,
    /// Whether groups without atoms should be written.
    pub emit_empty: bool,
}

#[derive(Default)]
pub struct ClassificationConfigBuilder {
    membrane_query: Option<String>,
    heads_query: Option<String>,
    normal: Option<Axis>,
    emit_empty: Option<bool>,
}

impl ClassificationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn membrane_query(mut self, query: impl Into<String>) -> Self {
        self.membrane_query = Some(query.into());
        self
    }
    pub fn heads_query(mut self, query: impl Into<String>) -> Self {
        self.heads_query = Some(query.into());
        self
    }
    pub fn normal(mut self, axis: Axis) -> Self {
        self.normal = Some(axis);
        self
    }
    pub fn emit_empty(mut self, emit: bool) -> Self {
        self.emit_empty = Some(emit);
        self
    }

    /// The normal defaults to [`Axis::Z`] and empty groups are skipped unless requested.
    pub fn build(self) -> Result<ClassificationConfig, ConfigError> {
        Ok(ClassificationConfig {
            membrane_query: self
                .membrane_query
                .ok_or(ConfigError::MissingParameter("membrane_query"))?,
            heads_query: self
                .heads_query
                .ok_or(ConfigError::MissingParameter("heads_query"))?,
            normal: self.normal.unwrap_or_default(),
            emit_empty: self.emit_empty.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_optional_parameters_with_defaults() {
        let config = ClassificationConfigBuilder::new()
            .membrane_query("Membrane")
            .heads_query("name PO4")
            .build()
            .unwrap();

        assert_eq!(config.membrane_query, "Membrane");
        assert_eq!(config.heads_query, "name PO4");
        assert_eq!(config.normal, Axis::Z);
        assert!(!config.emit_empty);
    }

    #[test]
    fn builder_keeps_explicit_values() {
        let config = ClassificationConfigBuilder::new()
            .membrane_query("resname POPC")
            .heads_query("name P")
            .normal(Axis::X)
            .emit_empty(true)
            .build()
            .unwrap();

        assert_eq!(config.normal, Axis::X);
        assert!(config.emit_empty);
    }

    #[test]
    fn builder_reports_missing_queries() {
        let result = ClassificationConfigBuilder::new().heads_query("name PO4").build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("membrane_query"))
        );

        let result = ClassificationConfigBuilder::new().membrane_query("Membrane").build();
        assert_eq!(result, Err(ConfigError::MissingParameter("heads_query")));
    }
}
