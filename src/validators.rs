use regex::Regex;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// Run a field's submit-time validators in order; the first failure is the
/// message shown for the value.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationError> {
    validators.iter().try_for_each(|validator| validator(value))
}

/// Rejects a value that is empty or only whitespace.
pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| match value.trim() {
        "" => Err(message.clone()),
        _ => Ok(()),
    })
}

/// Non-empty values must fill every template position.
pub fn complete(template_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.is_empty() || value.chars().count() == template_len {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Non-empty values must match `pattern`.
pub fn matches_pattern(pattern: Regex, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.is_empty() || pattern.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}
