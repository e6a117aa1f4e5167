use std::any::Any;

/// Failure payload: a message plus an ordered list of nested causes.
///
/// Two errors are equal iff their messages are equal and their cause
/// sequences are equal element-wise, in order and in count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error {
    message: String,
    causes: Vec<Error>,
}

impl Error {
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            causes: Vec::new(),
        }
    }

    pub fn caused_by(message: impl ToString, causes: impl IntoIterator<Item = Error>) -> Self {
        Self {
            message: message.to_string(),
            causes: causes.into_iter().collect(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn causes(&self) -> &[Error] {
        &self.causes
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;

        if let Some((first, rest)) = self.causes.split_first() {
            write!(f, " ({first}")?;
            for cause in rest {
                write!(f, "; {cause}")?;
            }
            f.write_str(")")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

/// Open-extension point for caller-defined failure kinds.
///
/// A failure always carries something `Error`-shaped; `swap` and `act` can
/// still single out the concrete type via [`Fault::as_any`].
pub trait Fault: Any + std::fmt::Debug + Send + Sync {
    fn as_error(&self) -> &Error;

    fn as_any(&self) -> &dyn Any;
}

impl Fault for Error {
    fn as_error(&self) -> &Error {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
