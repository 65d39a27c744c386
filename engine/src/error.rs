use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A shape or grid parameter the rasterizers cannot work with
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Loading, parsing or writing the INI configuration failed
    #[error("config error: {0}")]
    Config(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn ensure_non_negative(name: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(Error::InvalidArgument(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_value_is_rejected() {
        let err = ensure_non_negative("radius", -3).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), "invalid argument: radius must be non-negative, got -3");
    }

    #[parameterized(value = { 0, 1, i32::MAX })]
    fn non_negative_value_is_accepted(value: i32) {
        assert!(ensure_non_negative("width", value).is_ok());
    }
}
