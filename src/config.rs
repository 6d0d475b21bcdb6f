use serde::{Deserialize, Serialize};

/// Record field names the grid renderer consumes. These must match the
/// column names the normalizer produced from the document's header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNames {
    pub x: String,
    pub y: String,
    pub character: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            x: "x-coordinate".to_string(),
            y: "y-coordinate".to_string(),
            character: "Character".to_string(),
        }
    }
}

/// Runtime configuration: defaults, overridden by environment variables,
/// overridden in turn by CLI flags. There is no configuration file and no
/// persisted state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocgridConfig {
    pub fields: FieldNames,
    pub prefer_formatted: bool,
    pub prefer_formatted_dates: bool,
}

impl DocgridConfig {
    pub fn load_from_env() -> Self {
        let mut config = Self::default();

        if let Ok(field) = std::env::var("DOCGRID_X_FIELD") {
            config.fields.x = field;
        }
        if let Ok(field) = std::env::var("DOCGRID_Y_FIELD") {
            config.fields.y = field;
        }
        if let Ok(field) = std::env::var("DOCGRID_CHAR_FIELD") {
            config.fields.character = field;
        }
        if let Ok(flag) = std::env::var("DOCGRID_PREFER_FORMATTED") {
            config.prefer_formatted = flag.to_lowercase() == "true";
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_names() {
        let fields = FieldNames::default();
        assert_eq!(fields.x, "x-coordinate");
        assert_eq!(fields.y, "y-coordinate");
        assert_eq!(fields.character, "Character");
    }

    #[test]
    fn test_default_config_prefers_raw_values() {
        let config = DocgridConfig::default();
        assert!(!config.prefer_formatted);
        assert!(!config.prefer_formatted_dates);
    }
}
