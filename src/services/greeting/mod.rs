// Greeting service
// Validates the dedication input and fills in the greeting template

use crate::models::greeting::{Greeting, GreetingValidationError, RecipientName};

const GREETING_TEMPLATE: &str = "Dear {name},

🎊 Happy International Men's Day! 🎊

Today the world pauses to say THANK YOU —
for your strength, your courage, your kindness,
and all the ways — big and small — you make life better.

You are seen. You are valued. You are celebrated.

💙 With deepest respect and gratitude,
— Everyone whose life you've touched";

/// Build the greeting for an already validated name.
pub fn compose(name: &RecipientName, year: i32) -> Greeting {
    Greeting {
        title: format!("International Men's Day {}", year),
        body: GREETING_TEMPLATE.replace("{name}", name.as_str()),
    }
}

/// Validate raw input and build the greeting in one step.
pub fn compose_from_input(input: &str, year: i32) -> Result<Greeting, GreetingValidationError> {
    let name = RecipientName::parse(input)?;
    log::debug!("Composing greeting for {}", name);
    Ok(compose(&name, year))
}
