//! Usage records.

use crate::rest::{read_paging, wire_enum};
use crate::{Domain, Operation, Params, Resource, Route};
use chrono::NaiveDate;
use serde::Deserialize;

wire_enum! {
    /// A usage category. Only the common ones are named here.
    pub enum UsageCategory {
        Calls => "calls",
        CallsInbound => "calls-inbound",
        CallsOutbound => "calls-outbound",
        Sms => "sms",
        SmsInbound => "sms-inbound",
        SmsOutbound => "sms-outbound",
        Mms => "mms",
        PhoneNumbers => "phonenumbers",
        Recordings => "recordings",
        Transcriptions => "transcriptions",
        TotalPrice => "totalprice",
    }
}

/// Usage of one category over a period.
///
/// Amounts are strings as the API returns them, to avoid losing precision.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UsageRecord {
    /// Account that owns the usage record.
    pub account_sid: Option<String>,
    /// Usage category.
    pub category: Option<UsageCategory>,
    /// Human-readable description.
    pub description: Option<String>,
    /// First day the usage record covers.
    pub start_date: Option<NaiveDate>,
    /// Last day the usage record covers.
    pub end_date: Option<NaiveDate>,
    /// Number of billable units.
    pub count: Option<String>,
    /// Unit of `count`.
    pub count_unit: Option<String>,
    /// Amount used.
    pub usage: Option<String>,
    /// Unit of `usage`.
    pub usage_unit: Option<String>,
    /// Total price.
    pub price: Option<String>,
    /// Currency of `price`.
    pub price_unit: Option<String>,
    /// Path of this usage record relative to the API host.
    pub uri: Option<String>,
}

impl Resource for UsageRecord {
    const ROUTE: Route = Route {
        domain: Domain::Api,
        name: "Record",
        list_path: "/2010-04-01/Accounts/{AccountSid}/Usage/Records.json",
        instance_path: "/2010-04-01/Accounts/{AccountSid}/Usage/Records.json",
        list_key: "usage_records",
    };
}

/// Lists usage records.
#[derive(Debug, Clone, Default)]
pub struct ReadRecordOptions {
    /// Account override; `None` uses the client's default.
    pub account_sid: Option<String>,
    /// Only this usage category.
    pub category: Option<UsageCategory>,
    /// Only records from this day on.
    pub start_date: Option<NaiveDate>,
    /// Only records up to and including this day.
    pub end_date: Option<NaiveDate>,
    /// Records per page; derived from `limit` when unset.
    pub page_size: Option<u32>,
    /// Cap on records yielded across all pages.
    pub limit: Option<u64>,
}

impl ReadRecordOptions {
    /// Lists every usage record; add filters with the setters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the call to an account other than the client's default.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    /// Restricts the listing to one usage category.
    pub fn category(mut self, category: UsageCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Only records from this day on.
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Only records up to and including this day.
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }
}

read_paging!(ReadRecordOptions);

impl Operation for ReadRecordOptions {
    type Resource = UsageRecord;

    fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("Category", self.category);
        params.push_opt("StartDate", self.start_date);
        params.push_opt("EndDate", self.end_date);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::build_read_request;

    #[test]
    fn dates_are_sent_as_plain_days() {
        let options = ReadRecordOptions::new()
            .category(UsageCategory::Calls)
            .start_date(NaiveDate::from_ymd_opt(2016, 1, 1).unwrap())
            .end_date(NaiveDate::from_ymd_opt(2016, 1, 31).unwrap())
            .limit(10);
        let request = build_read_request(&options, "AC1").unwrap();

        assert_eq!(
            request.query_params.to_form(),
            "Category=calls&StartDate=2016-01-01&EndDate=2016-01-31&PageSize=10"
        );
    }

    #[test]
    fn deserializes_record_with_plain_dates() {
        let record: UsageRecord = serde_json::from_str(
            r#"{"category": "sms", "start_date": "2016-01-01", "end_date": "2016-01-31", "count": "12"}"#,
        )
        .unwrap();

        assert_eq!(record.category, Some(UsageCategory::Sms));
        assert_eq!(record.start_date, NaiveDate::from_ymd_opt(2016, 1, 1));
        assert_eq!(record.count.as_deref(), Some("12"));
    }
}
