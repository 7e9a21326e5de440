//! RFC building blocks for the Friday calendar service.
//!
//! The only area implemented here is recurrence-rule encoding (RFC 5545
//! §3.3.10): turning a caller-built [`rfc::recur::RecurrenceSpec`] into a
//! RECUR value string, or rejecting it with the first rule part that failed
//! validation. Everything else the service needs (HTTP, sessions, event
//! storage) lives outside this crate and never calls back into it.

pub mod rfc;
