use leafsort::core::utils::geometry::Axis;

pub struct DefaultsConfig {
    pub index: String,
    pub membrane: String,
    pub heads: String,
    pub normal: Axis,
    pub emit_empty: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            index: "index.ndx".to_string(),
            membrane: "Membrane".to_string(),
            heads: "name PO4".to_string(),
            normal: Axis::Z,
            emit_empty: false,
        }
    }
}
