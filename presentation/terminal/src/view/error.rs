use business::domain::cart::errors::CartError;
use clap::error::{ContextKind, ContextValue, ErrorKind};

/// User-facing rendering of a failed action.
#[derive(Debug, PartialEq)]
pub struct ErrorNotice {
    pub name: String,
    pub message: String,
}

impl std::fmt::Display for ErrorNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

pub trait IntoErrorNotice {
    fn into_error_notice(self) -> ErrorNotice;
}

impl IntoErrorNotice for CartError {
    fn into_error_notice(self) -> ErrorNotice {
        let (name, message) = match &self {
            CartError::NonPositiveQuantity(q) => (
                "ValidationError",
                format!("quantity must be at least 1, got {q}"),
            ),
            CartError::QuantityOverflow => {
                ("ValidationError", "quantity is too large".to_string())
            }
            CartError::UnknownProduct(id) => ("NotFound", format!("no product with id {id}")),
        };
        ErrorNotice {
            name: name.to_string(),
            message: format!("{message} ({self})"),
        }
    }
}

impl IntoErrorNotice for clap::Error {
    fn into_error_notice(self) -> ErrorNotice {
        let context = |kind: ContextKind| match self.get(kind) {
            Some(ContextValue::String(value)) => value.clone(),
            Some(ContextValue::Strings(values)) => values.join(", "),
            _ => String::new(),
        };
        let message = match self.kind() {
            ErrorKind::InvalidSubcommand => format!(
                "unknown command `{}`, try `help`",
                context(ContextKind::InvalidSubcommand)
            ),
            ErrorKind::MissingRequiredArgument => {
                format!("missing {}", context(ContextKind::InvalidArg))
            }
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => format!(
                "`{}` is not valid for {}",
                context(ContextKind::InvalidValue),
                context(ContextKind::InvalidArg)
            ),
            ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                "type a command, or `help`".to_string()
            }
            _ => self
                .to_string()
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string(),
        };
        ErrorNotice {
            name: "InputError".to_string(),
            message,
        }
    }
}
