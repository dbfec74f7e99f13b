//! Wananchi Portal - citizen engagement backend for Homa Bay County.
//!
//! Citizens submit and vote on project ideas, follow official projects,
//! try their own budget allocation and ask a county assistant questions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
