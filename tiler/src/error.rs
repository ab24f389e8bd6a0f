use thiserror::Error;

/// Errors raised while validating a tiling instance, before any layout is computed.
/// Once an [`Instance`](crate::entities::Instance) exists, computing its layout cannot fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("invalid {what}: {value} (must be {requirement})")]
    InvalidDimension {
        what: String,
        value: f32,
        requirement: &'static str,
    },
    #[error("cutout `{cutout}` references unknown wall `{wall}`")]
    UnknownCutoutWall { cutout: String, wall: String },
    #[error("wall label `{0}` is used more than once")]
    DuplicateWallLabel(String),
    #[error("an instance needs at least one wall")]
    NoWalls,
    #[error("could not parse length `{0}`, expected e.g. 5'11\", 30\" or 12.5")]
    UnparsableLength(String),
}

pub(crate) fn ensure_positive(what: impl Into<String>, value: f32) -> Result<f32, InputError> {
    match value.is_finite() && value > 0.0 {
        true => Ok(value),
        false => Err(InputError::InvalidDimension {
            what: what.into(),
            value,
            requirement: "finite and > 0",
        }),
    }
}

pub(crate) fn ensure_finite(what: impl Into<String>, value: f32) -> Result<f32, InputError> {
    match value.is_finite() {
        true => Ok(value),
        false => Err(InputError::InvalidDimension {
            what: what.into(),
            value,
            requirement: "finite",
        }),
    }
}

pub(crate) fn ensure_non_negative(what: impl Into<String>, value: f32) -> Result<f32, InputError> {
    match value.is_finite() && value >= 0.0 {
        true => Ok(value),
        false => Err(InputError::InvalidDimension {
            what: what.into(),
            value,
            requirement: "finite and >= 0",
        }),
    }
}
