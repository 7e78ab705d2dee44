//! Elastic SIP trunking.

pub mod ip_access_control_list;
pub mod origination_url;
