//! Notify: push and SMS notification bindings.

pub mod binding;
