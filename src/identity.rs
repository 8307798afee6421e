//! Identity context.
//!
//! Resolved once before the first render and read-only afterwards. An
//! empty display name is a valid state, not an error.

/// The current user's display identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    display_name: String,
}

impl Identity {
    /// Resolve the display name: explicit override first, then the login
    /// environment, else empty.
    pub fn resolve(override_name: Option<&str>) -> Self {
        let display_name = override_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
            .or_else(|| std::env::var("USER").ok().filter(|v| !v.is_empty()))
            .or_else(|| std::env::var("USERNAME").ok().filter(|v| !v.is_empty()))
            .unwrap_or_default();
        Self { display_name }
    }

    /// An identity with a fixed name (tests, config override).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            display_name: name.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Header greeting; omits the name clause when unresolved.
    pub fn greeting(&self) -> String {
        if self.display_name.is_empty() {
            "Welcome to Jotter!".to_string()
        } else {
            format!("Welcome to Jotter, {}!", self.display_name)
        }
    }
}
