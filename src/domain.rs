//! API product domains and host resolution.

use std::fmt;

/// The host suffix shared by every product domain.
pub const BASE_HOST: &str = "twilio.com";

/// One API product, each served from its own subdomain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Core telephony and messaging (`api`).
    Api,
    /// Programmable chat (`chat`).
    Chat,
    /// Legacy IP messaging (`ip-messaging`).
    IpMessaging,
    /// Push notifications (`notify`).
    Notify,
    /// Preview products, including Sync (`preview`).
    Preview,
    /// Task routing (`taskrouter`).
    Taskrouter,
    /// Elastic SIP trunking (`trunking`).
    Trunking,
}

impl Domain {
    /// The subdomain this product is served from.
    pub fn subdomain(&self) -> &'static str {
        match self {
            Domain::Api => "api",
            Domain::Chat => "chat",
            Domain::IpMessaging => "ip-messaging",
            Domain::Notify => "notify",
            Domain::Preview => "preview",
            Domain::Taskrouter => "taskrouter",
            Domain::Trunking => "trunking",
        }
    }

    /// The scheme and host for this product, optionally pinned to a region.
    ///
    /// # Examples
    ///
    /// ```
    /// use callwire::Domain;
    ///
    /// assert_eq!(Domain::Api.base_url(None), "https://api.twilio.com");
    /// assert_eq!(Domain::Notify.base_url(Some("au1")), "https://notify.au1.twilio.com");
    /// ```
    pub fn base_url(&self, region: Option<&str>) -> String {
        match region {
            Some(region) => format!("https://{}.{}.{}", self.subdomain(), region, BASE_HOST),
            None => format!("https://{}.{}", self.subdomain(), BASE_HOST),
        }
    }

    /// Resolves a server-relative URI against this product's host.
    pub fn url_for(&self, region: Option<&str>, uri: &str) -> String {
        format!("{}{}", self.base_url(region), uri)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subdomain())
    }
}
