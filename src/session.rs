use tracing::info;

use crate::model::funballer::FunballerPin;

/// Per-request login state. Replaces a process-wide "logged in funballer" slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    funballer_name: Option<String>,
}

impl Session {
    /// A session nobody has logged into.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Look up `pin` in the directory. An unknown PIN leaves the session anonymous.
    pub fn login(pin: &str, directory: &[FunballerPin]) -> Self {
        let funballer_name = directory
            .iter()
            .find(|f| f.pin == pin)
            .map(|f| f.first_name.clone());
        if let Some(name) = &funballer_name {
            info!(funballer = %name, "Funballer logged in");
        }
        Self { funballer_name }
    }

    pub fn funballer_name(&self) -> Option<&str> {
        self.funballer_name.as_deref()
    }

    /// Whether the logged-in funballer is `name` (names are compared case-insensitively).
    pub fn is_funballer(&self, name: &str) -> bool {
        self.funballer_name
            .as_deref()
            .map(|n| n.eq_ignore_ascii_case(name))
            .unwrap_or(false)
    }
}

/// Capitalise a typed funballer name the way the backend stores them ("patrick" -> "Patrick").
pub fn normalise_funballer_name(name: &str) -> String {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
