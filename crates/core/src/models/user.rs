use serde::{Deserialize, Serialize};

/// The signed-in account, as returned by `/user`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Uppercase initials for the avatar, e.g. "OJ" for "Olivier Jones".
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
