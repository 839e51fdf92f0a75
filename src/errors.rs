/// All error types that can occur when working with lamp states.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to parse a [`crate::Lamp`] from a string.
    #[error("invalid lamp string {input:?}: expected format: hue,saturation,brightness")]
    InvalidLampString { input: String },
}

impl Error {
    /// Create a parse error for the given input.
    pub fn invalid_lamp_string(input: &str) -> Self {
        Error::InvalidLampString {
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_lamp_string("1,2");
        assert_eq!(
            err.to_string(),
            "invalid lamp string \"1,2\": expected format: hue,saturation,brightness"
        );
    }
}
