use serde::Serialize;
use tracing::debug;

use crate::config::FieldSpec;
use crate::error::{MaskError, Result};
use crate::mask::{self, ProgressValidator};
use crate::validators::{self, Validator, run_validators};

const REQUIRED_MESSAGE: &str = "Value is required";
const INCOMPLETE_MESSAGE: &str = "Invalid or incomplete value";
const MISMATCH_MESSAGE: &str = "Value does not match the expected format";

/// What the editable surface and its overlay should show after a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    pub value: String,
    pub guide: String,
}

/// A configured mask: formats each change and trims it against the
/// field's pattern when one is set.
pub struct MaskedField {
    id: Option<String>,
    template: String,
    charset_mode: bool,
    progress: Option<ProgressValidator>,
    validators: Vec<Validator>,
}

impl MaskedField {
    pub fn new(spec: FieldSpec) -> Result<Self> {
        let template = spec.template().to_string();
        let charset_mode = spec.charset_mode();
        if template.is_empty() {
            return Err(MaskError::EmptyTemplate);
        }

        let progress = match (spec.valid_example, spec.pattern) {
            (Some(example), Some(pattern)) => {
                if example.chars().count() < template.chars().count() {
                    return Err(MaskError::ExampleTooShort { example, template });
                }
                Some(ProgressValidator::new(pattern.as_str(), example)?)
            }
            _ => None,
        };

        let mut validators = Vec::new();
        if spec.required {
            validators.push(validators::required(REQUIRED_MESSAGE));
        }
        validators.push(validators::complete(
            template.chars().count(),
            INCOMPLETE_MESSAGE,
        ));
        if let Some(progress) = &progress {
            validators.push(validators::matches_pattern(
                progress.pattern().clone(),
                MISMATCH_MESSAGE,
            ));
        }

        debug!(
            id = spec.id.as_deref().unwrap_or("-"),
            template = template.as_str(),
            charset_mode,
            validated = progress.is_some(),
            "masked field ready"
        );

        Ok(Self {
            id: spec.id,
            charset_mode,
            template,
            progress,
            validators,
        })
    }

    pub fn preset(name: &str) -> Result<Self> {
        Self::new(FieldSpec::preset(name)?)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    pub fn charset_mode(&self) -> bool {
        self.charset_mode
    }

    pub fn is_validated(&self) -> bool {
        self.progress.is_some()
    }

    /// Overlay text before anything has been typed.
    pub fn initial_guide(&self) -> &str {
        self.template.as_str()
    }

    /// Recompute the field from the full raw text after a change event.
    pub fn handle_change(&self, raw: &str) -> FieldUpdate {
        let mut value = mask::format(raw, self.template.as_str(), self.charset_mode);
        if let Some(progress) = &self.progress {
            value = progress.validate(value.as_str(), self.template.as_str());
        }
        let guide = mask::guide(value.as_str(), self.template.as_str());
        FieldUpdate { value, guide }
    }

    /// Feed `keys` one at a time, writing each result back as the next raw
    /// value the way an editable surface would.
    pub fn type_keys(&self, keys: &str) -> Vec<FieldUpdate> {
        let mut current = String::new();
        keys.chars()
            .map(|key| {
                current.push(key);
                let update = self.handle_change(current.as_str());
                current.clone_from(&update.value);
                update
            })
            .collect()
    }

    /// State after typing all of `keys`; empty keys give the untouched field.
    pub fn type_keys_final(&self, keys: &str) -> FieldUpdate {
        self.type_keys(keys)
            .pop()
            .unwrap_or_else(|| self.handle_change(""))
    }

    /// Submit-time check of a settled value.
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        run_validators(&self.validators, value)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldUpdate, MaskedField};
    use crate::config::FieldSpec;
    use crate::error::MaskError;

    fn update(value: &str, guide: &str) -> FieldUpdate {
        FieldUpdate {
            value: value.to_string(),
            guide: guide.to_string(),
        }
    }

    #[test]
    fn unvalidated_field_formats_and_guides() {
        let field = MaskedField::new(FieldSpec::new("(XXX) XXX-XXXX")).expect("field");
        assert!(!field.is_validated());
        assert_eq!(field.initial_guide(), "(XXX) XXX-XXXX");
        assert_eq!(field.handle_change("555"), update("(555", "(555) XXX-XXXX"));
    }

    #[test]
    fn guide_follows_validated_value() {
        let field = MaskedField::preset("date_mm_dd_yyyy").expect("field");
        assert_eq!(field.handle_change("5"), update("05", "05/DD/YYYY"));
        assert_eq!(field.handle_change("13"), update("1", "1M/DD/YYYY"));
    }

    #[test]
    fn character_set_replaces_placeholder() {
        let field = MaskedField::preset("postal_ca").expect("field");
        assert!(field.charset_mode());
        assert_eq!(field.template(), "_X_ X_X");
        assert_eq!(field.handle_change("k1a0b1"), update("k1a 0b1", "k1a 0b1"));
        assert_eq!(field.handle_change("k1"), update("k1", "k1_ X_X"));
    }

    #[test]
    fn pattern_without_example_is_not_validated() {
        let mut spec = FieldSpec::new("XX");
        spec.pattern = Some("(".to_string());
        let field = MaskedField::new(spec).expect("field");
        assert!(!field.is_validated());
    }

    #[test]
    fn construction_errors() {
        assert!(matches!(
            MaskedField::new(FieldSpec::new("")),
            Err(MaskError::EmptyTemplate)
        ));
        assert!(matches!(
            MaskedField::new(FieldSpec::new("XX/XX").with_validation("1", ".")),
            Err(MaskError::ExampleTooShort { .. })
        ));
        assert!(matches!(
            MaskedField::new(FieldSpec::new("XX").with_validation("12", "[")),
            Err(MaskError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn typing_a_date_evicts_dead_keystrokes() {
        let field = MaskedField::preset("date_mm_dd_yyyy").expect("field");
        let values: Vec<String> = field
            .type_keys("1341")
            .into_iter()
            .map(|update| update.value)
            .collect();
        assert_eq!(values, vec!["1", "1", "1", "11"]);
    }

    #[test]
    fn empty_keys_still_produce_an_update() {
        let field = MaskedField::preset("phone_us").expect("field");
        assert_eq!(field.type_keys_final(""), update("(", "(XXX) XXX-XXXX"));
        assert_eq!(field.type_keys_final("25").value, "(25");
    }

    #[test]
    fn check_reports_incomplete_and_required() {
        let field = MaskedField::new(FieldSpec::new("XXXXX").required()).expect("field");
        assert_eq!(field.check(""), Err("Value is required".to_string()));
        assert_eq!(field.check("123"), Err("Invalid or incomplete value".to_string()));
        assert_eq!(field.check("12345"), Ok(()));
    }

    #[test]
    fn check_applies_pattern_to_complete_value() {
        let field = MaskedField::preset("date_mm_dd_yyyy").expect("field");
        assert_eq!(field.check("02/30/1999"), Ok(()));
        assert_eq!(
            field.check("13/01/1999"),
            Err("Value does not match the expected format".to_string())
        );
    }
}
