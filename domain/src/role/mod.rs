//! Council roles
//!
//! A [`RoleProfile`] is the static configuration of one stage: which model
//! answers, how it is instructed, and under which variable its reply is
//! handed to later stages. [`check_council`] verifies an ordered list of
//! profiles can run start to finish.

mod council;
mod profile;
pub mod vars;

pub use council::{CouncilDefect, check_council};
pub use profile::RoleProfile;
