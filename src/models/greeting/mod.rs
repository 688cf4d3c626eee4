//! Greeting model: a validated recipient name and the composed message.

/// A recipient name that is known to be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientName(String);

impl RecipientName {
    /// Validate free-text input from the dedication entry.
    pub fn parse(input: &str) -> Result<Self, GreetingValidationError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(GreetingValidationError::EmptyName);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A composed greeting ready to show in a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub title: String,
    pub body: String,
}

/// Validation errors for greeting input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingValidationError {
    EmptyName,
}

impl GreetingValidationError {
    /// Short heading for the warning shown to the user.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::EmptyName => "Hold on!",
        }
    }
}

impl std::fmt::Display for GreetingValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please type a name first."),
        }
    }
}

impl std::error::Error for GreetingValidationError {}
