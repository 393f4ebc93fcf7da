use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

use events_security::authority::GrantedAuthority;
use events_security::user_details::UserDetails;

/// Authorization label held by users through `tb_user_role`.
///
/// Identity is the `id`; equality, ordering and hashing ignore `authority`.
#[derive(Debug, Clone)]
pub struct Role {
    pub id: i64,
    pub authority: String,
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Role {}

impl Hash for Role {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

/// Authenticatable account. The email doubles as the username.
///
/// Two users are equal iff their ids are equal.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub roles: BTreeSet<Role>,
}

impl User {
    /// A user holding no roles.
    pub fn new(id: i64, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
            roles: BTreeSet::new(),
        }
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles.extend(roles);
        self
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// No account lifecycle is tracked: the status predicates are constant.
impl UserDetails for User {
    fn authorities(&self) -> Vec<GrantedAuthority> {
        self.roles
            .iter()
            .map(|role| GrantedAuthority::new(role.authority.as_str()))
            .collect()
    }

    fn password(&self) -> &str {
        &self.password
    }

    fn username(&self) -> &str {
        &self.email
    }

    fn is_account_non_expired(&self) -> bool {
        true
    }

    fn is_account_non_locked(&self) -> bool {
        true
    }

    fn is_credentials_non_expired(&self) -> bool {
        true
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// A dated event held in a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub url: String,
    pub city_id: i64,
}
