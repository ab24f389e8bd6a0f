use crate::error::InputError;
use regex::Regex;
use std::sync::LazyLock;

static FEET_INCHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:(?P<feet>\d+(?:\.\d*)?)\s*')?\s*(?:(?P<inches>\d+(?:\.\d*)?)\s*"?)?$"#)
        .expect("hardcoded regex is valid")
});

/// Parses a length written in feet and inches into inches.
///
/// Accepts `5'11"`, `7' 6"`, `6'`, `30"`, `12` and `10.5`. Surrounding whitespace is ignored.
pub fn parse_length(text: &str) -> Result<f32, InputError> {
    let text = text.trim();
    let unparsable = || InputError::UnparsableLength(text.to_owned());

    let caps = FEET_INCHES.captures(text).ok_or_else(unparsable)?;
    let part = |name: &str| -> Result<Option<f32>, InputError> {
        caps.name(name)
            .map(|m| m.as_str().parse::<f32>().map_err(|_| unparsable()))
            .transpose()
    };

    match (part("feet")?, part("inches")?) {
        (None, None) => Err(unparsable()),
        (feet, inches) => Ok(feet.unwrap_or(0.0) * 12.0 + inches.unwrap_or(0.0)),
    }
}
