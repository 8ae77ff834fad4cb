//! # cpanel-cli
//!
//! Command-line front end for the DNS-01 authenticator.
//!
//! `perform` and `cleanup` are meant to be wired into certbot's
//! `--manual-auth-hook` and `--manual-cleanup-hook`; they pick the domain
//! and token up from `CERTBOT_DOMAIN` and `CERTBOT_VALIDATION`. `records`
//! lists what the zone currently holds.

pub mod cli;
pub mod output;

pub use cli::run;
