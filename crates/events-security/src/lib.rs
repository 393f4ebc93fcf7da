//! Principal types shared across events services.
//!
//! Provides the [`UserDetails`](user_details::UserDetails) capability contract
//! and the [`GrantedAuthority`](authority::GrantedAuthority) label it yields.

pub mod authority;
pub mod user_details;
