use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Row id in the users table, used for audit stamping
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user holds any of the given roles
    pub fn has_any_role(&self, allowed: &[&str]) -> bool {
        allowed.iter().any(|role| self.has_role(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: 7,
            email: None,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_has_role() {
        let user = user_with(&["manager"]);
        assert!(user.has_role("manager"));
        assert!(!user.has_role("admin"));
    }

    #[test]
    fn test_has_any_role() {
        let user = user_with(&["staff"]);
        assert!(user.has_any_role(&["admin", "manager", "staff"]));
        assert!(!user.has_any_role(&["admin", "manager"]));
        assert!(!user.has_any_role(&[]));
    }
}
