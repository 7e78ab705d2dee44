//! The 2010-04-01 core API.
//!
//! Every resource here lives under `/2010-04-01/Accounts/{AccountSid}`. Options
//! accept an explicit `account_sid`; without one the client's default account
//! is used.

pub mod conference;
pub mod connect_app;
pub mod participant;
pub mod token;
pub mod usage;
