//! Personal job-application tracker: a REST backend over companies, job
//! postings, applications, interview rounds and a crawler-fed review queue,
//! plus a client library that mirrors the mobile app's state handling.

pub mod application;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
