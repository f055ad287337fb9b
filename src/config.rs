//! Field configuration.
//!
//! A config file holds either a single field or a `fields:` list. YAML and
//! JSON are both accepted; the file extension picks the parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MaskError, Result};

/// Per-field mask settings supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default)]
    pub id: Option<String>,
    /// Mask template used when no character set is given.
    pub placeholder: String,
    /// Alternate template; its presence switches on charset mode.
    #[serde(default)]
    pub character_set: Option<String>,
    /// Known-good complete value with the template's shape.
    #[serde(default)]
    pub valid_example: Option<String>,
    /// Regex a complete value must satisfy.
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_character_set(mut self, character_set: impl Into<String>) -> Self {
        self.character_set = Some(character_set.into());
        self
    }

    pub fn with_validation(
        mut self,
        valid_example: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.valid_example = Some(valid_example.into());
        self.pattern = Some(pattern.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn template(&self) -> &str {
        self.character_set.as_deref().unwrap_or(self.placeholder.as_str())
    }

    pub fn charset_mode(&self) -> bool {
        self.character_set.is_some()
    }

    pub fn preset(name: &str) -> Result<Self> {
        let spec = match name {
            "phone_us" => Self::new("(XXX) XXX-XXXX").with_validation(
                "(555) 555-5555",
                r"^\([2-9][0-9]{2}\) [0-9]{3}-[0-9]{4}$",
            ),
            "date_mm_dd_yyyy" => Self::new("MM/DD/YYYY").with_validation(
                "01/01/2000",
                r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/[0-9]{4}$",
            ),
            "expiry_mm_yy" => Self::new("MM/YY")
                .with_validation("01/30", r"^(0[1-9]|1[0-2])/[0-9]{2}$"),
            "zip_us" => Self::new("XXXXX"),
            "postal_ca" => Self::new("A1A 1A1")
                .with_character_set("_X_ X_X")
                .with_validation("A1A 1A1", r"^[A-Za-z][0-9][A-Za-z] [0-9][A-Za-z][0-9]$"),
            other => return Err(MaskError::UnknownPreset(other.to_string())),
        };
        Ok(spec.with_id(name))
    }

    pub const PRESETS: [&'static str; 5] = [
        "phone_us",
        "date_mm_dd_yyyy",
        "expiry_mm_yy",
        "zip_us",
        "postal_ca",
    ];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Many { fields: Vec<FieldSpec> },
    One(FieldSpec),
}

impl ConfigFile {
    fn into_fields(self) -> Vec<FieldSpec> {
        match self {
            Self::Many { fields } => fields,
            Self::One(field) => vec![field],
        }
    }
}

pub fn from_yaml_str(text: &str) -> Result<Vec<FieldSpec>> {
    let file: ConfigFile = serde_yaml::from_str(text)?;
    Ok(file.into_fields())
}

pub fn from_json_str(text: &str) -> Result<Vec<FieldSpec>> {
    let file: ConfigFile = serde_json::from_str(text)?;
    Ok(file.into_fields())
}

pub fn load(path: &Path) -> Result<Vec<FieldSpec>> {
    let text = std::fs::read_to_string(path)?;
    let fields = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json_str(text.as_str())?,
        _ => from_yaml_str(text.as_str())?,
    };
    tracing::debug!(path = %path.display(), count = fields.len(), "loaded field config");
    Ok(fields)
}

/// Pick a field by id, or the first one when no id is given.
pub fn select(fields: Vec<FieldSpec>, id: Option<&str>) -> Result<FieldSpec> {
    match id {
        Some(id) => fields
            .into_iter()
            .find(|field| field.id.as_deref() == Some(id))
            .ok_or_else(|| MaskError::UnknownField(id.to_string())),
        None => fields.into_iter().next().ok_or(MaskError::NoFields),
    }
}
