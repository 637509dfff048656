//! Role assignment
//!
//! Typed role names and the scanner that grants them. Roles exist only as
//! attribute strings on nodes; there is no backing store.

use crate::attr;
use lumiere_dom::{Document, NodeId};

/// A grantable role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Moderator,
    Custom(String),
}

impl Role {
    /// Parse a role attribute value
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "moderator" => Self::Moderator,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Attribute-value form of the role
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Custom(name) => name,
        }
    }
}

/// One granted role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrant {
    pub node: NodeId,
    pub user: Option<String>,
    pub role: Role,
}

/// Grant a role to every node declaring it: each `[lm-role=<role>]` node has
/// the granted role written back onto it, with the target user read from
/// `lm-r-for`. Zero matches is a no-op.
pub fn assign_roles(doc: &mut Document, role: &Role) -> Vec<RoleGrant> {
    let matches: Vec<NodeId> = doc
        .elements_with_attribute(attr::ROLE)
        .into_iter()
        .filter(|&node| doc.tree().get_attribute(node, attr::ROLE) == Some(role.as_str()))
        .collect();

    let mut grants = Vec::new();
    for node in matches {
        let user = doc
            .tree()
            .get_attribute(node, attr::ROLE_FOR)
            .map(str::to_string);
        let _ = doc
            .tree_mut()
            .set_attribute(node, attr::ROLE_GRANTED, role.as_str());
        tracing::debug!(role = role.as_str(), ?user, "role granted");
        grants.push(RoleGrant {
            node,
            user,
            role: role.clone(),
        });
    }
    grants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("moderator"), Role::Moderator);
        assert_eq!(Role::parse("editor"), Role::Custom("editor".to_string()));
    }

    #[test]
    fn test_assign_roles_writes_grant() {
        let mut doc = Document::default();
        let node = doc.tree_mut().create_element("div");
        let root = doc.root();
        doc.tree_mut().append_child(root, node).unwrap();
        doc.tree_mut().set_attribute(node, attr::ROLE, "admin").unwrap();
        doc.tree_mut().set_attribute(node, attr::ROLE_FOR, "user1").unwrap();

        let grants = assign_roles(&mut doc, &Role::Admin);
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].user.as_deref(), Some("user1"));
        assert_eq!(doc.tree().get_attribute(node, attr::ROLE_GRANTED), Some("admin"));
    }

    #[test]
    fn test_assign_roles_no_match_is_noop() {
        let mut doc = Document::default();
        let node = doc.tree_mut().create_element("div");
        let root = doc.root();
        doc.tree_mut().append_child(root, node).unwrap();
        doc.tree_mut().set_attribute(node, attr::ROLE, "moderator").unwrap();

        let grants = assign_roles(&mut doc, &Role::Admin);
        assert!(grants.is_empty());
        assert!(!doc.tree().has_attribute(node, attr::ROLE_GRANTED));
    }
}
