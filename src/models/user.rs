use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Dashboard role chosen at registration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Buyer,
    Owner,
    Agent,
}

impl Role {
    /// Unknown labels fall back to the buyer view.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "owner" => Role::Owner,
            "agent" => Role::Agent,
            _ => Role::Buyer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Owner => "owner",
            Role::Agent => "agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().map(Role::from_label))
}

/// Profile of the logged-in user, kept in session scope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Absent for plain logins; registration always sets it
    #[serde(
        rename = "userType",
        default,
        deserialize_with = "lenient_role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
    #[serde(rename = "loggedIn", default)]
    pub logged_in: bool,
}

impl UserProfile {
    pub fn role(&self) -> Role {
        self.role.unwrap_or_default()
    }
}
