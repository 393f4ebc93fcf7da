//! Authenticatable principal contract.

use crate::authority::GrantedAuthority;

/// Behaviour every authenticatable principal exposes to the security layer.
///
/// The four status predicates are the hook points for account lifecycle
/// tracking (expiry, lockout, credential rotation, disabling). Implementors
/// that track none of these return `true` from each.
pub trait UserDetails {
    /// Authorities granted to this principal, one per role.
    fn authorities(&self) -> Vec<GrantedAuthority>;

    /// Stored password hash.
    fn password(&self) -> &str;

    /// Login name.
    fn username(&self) -> &str;

    fn is_account_non_expired(&self) -> bool;

    fn is_account_non_locked(&self) -> bool;

    fn is_credentials_non_expired(&self) -> bool;

    fn is_enabled(&self) -> bool;
}
