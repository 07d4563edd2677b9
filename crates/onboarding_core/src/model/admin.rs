//! Admin accounts and their visibility scope.

use crate::model::ids::{AdminId, DepartmentId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Sees only its own department.
    Admin,
    /// Sees every department and may manage admins/departments.
    SuperUser,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::SuperUser => "SuperUser",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl Display for ParseRoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported role `{}`; expected Admin|SuperUser", self.0)
    }
}

impl Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Admin" => Ok(Self::Admin),
            "SuperUser" => Ok(Self::SuperUser),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Admin account; also the shape of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: AdminId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department_id: DepartmentId,
}

impl Admin {
    pub fn is_super_user(&self) -> bool {
        self.role == Role::SuperUser
    }

    /// Whether items owned by `department_id` are visible to this admin.
    pub fn sees_department(&self, department_id: &DepartmentId) -> bool {
        self.is_super_user() || &self.department_id == department_id
    }
}

#[cfg(test)]
mod tests {
    use super::{Admin, Role};
    use crate::model::ids::{AdminId, DepartmentId};

    fn admin(role: Role) -> Admin {
        Admin {
            id: AdminId::new("a1"),
            name: "Admin A".to_string(),
            email: "a@org.be".to_string(),
            role,
            department_id: DepartmentId::new("it-dept"),
        }
    }

    #[test]
    fn admin_sees_only_own_department() {
        let it = admin(Role::Admin);
        assert!(it.sees_department(&DepartmentId::new("it-dept")));
        assert!(!it.sees_department(&DepartmentId::new("lik-dept")));
    }

    #[test]
    fn super_user_sees_everything() {
        let root = admin(Role::SuperUser);
        assert!(root.sees_department(&DepartmentId::new("lik-dept")));
        assert!(root.sees_department(&DepartmentId::new("deleted-dept")));
    }

    #[test]
    fn role_parses_known_values() {
        assert_eq!("SuperUser".parse::<Role>().unwrap(), Role::SuperUser);
        assert!("Owner".parse::<Role>().is_err());
    }
}
