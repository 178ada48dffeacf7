//! Error handling for the console shell

use rental_app::CatalogError;
use thiserror::Error;

/// Everything that can interrupt a menu action.
///
/// Catalog failures and malformed numbers are reported to the operator and
/// the menu carries on. End of input and I/O failures stop the loop.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid number for {field}: '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("input closed")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Create an invalid number error
    pub fn invalid_number(field: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            input: input.into(),
        }
    }

    /// The line shown to the operator, or `None` when the loop must stop.
    pub fn operator_message(&self) -> Option<&'static str> {
        let message = match self {
            ConsoleError::Catalog(CatalogError::VideoNotFound(_)) => "Video not found!",
            ConsoleError::Catalog(CatalogError::CustomerNotFound(_)) => "Customer not found!",
            ConsoleError::Catalog(CatalogError::NoCopiesAvailable(_)) => {
                "Video is not available for rent!"
            }
            ConsoleError::Catalog(CatalogError::NoRentalRecord(_)) => {
                "No rented videos found for this customer!"
            }
            ConsoleError::Catalog(CatalogError::IdsExhausted(_)) => "Catalog is full!",
            ConsoleError::Catalog(CatalogError::InvalidInput { .. })
            | ConsoleError::InvalidNumber { .. } => "Invalid input!",
            ConsoleError::EndOfInput | ConsoleError::Io(_) => return None,
        };
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_operator_lines() {
        let cases = [
            (CatalogError::VideoNotFound(1), "Video not found!"),
            (CatalogError::CustomerNotFound(1), "Customer not found!"),
            (
                CatalogError::NoCopiesAvailable(1),
                "Video is not available for rent!",
            ),
            (
                CatalogError::NoRentalRecord(1),
                "No rented videos found for this customer!",
            ),
            (CatalogError::IdsExhausted("video"), "Catalog is full!"),
            (
                CatalogError::invalid_input("copies", "negative"),
                "Invalid input!",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(ConsoleError::from(error).operator_message(), Some(expected));
        }
    }

    #[test]
    fn malformed_numbers_are_recoverable() {
        let error = ConsoleError::invalid_number("video id", "abc");
        assert_eq!(error.to_string(), "invalid number for video id: 'abc'");
        assert_eq!(error.operator_message(), Some("Invalid input!"));
    }

    #[test]
    fn closed_input_stops_the_loop() {
        assert_eq!(ConsoleError::EndOfInput.operator_message(), None);
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert_eq!(ConsoleError::from(io).operator_message(), None);
    }
}
