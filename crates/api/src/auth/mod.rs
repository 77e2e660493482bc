//! Credential handling: [`password`] hashes what users type in,
//! [`jwt`] mints and checks the tokens they carry afterwards.

pub mod jwt;
pub mod password;
