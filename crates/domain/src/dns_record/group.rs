use serde::Serialize;
use std::fmt;

/// Typed collection an answer record is collated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordGroup {
    /// A and AAAA records
    IpAddress,
    NameServer,
    CanonicalName,
    StartOfAuthority,
    Pointer,
    MailExchange,
    Text,
}

impl RecordGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordGroup::IpAddress => "ip_address",
            RecordGroup::NameServer => "name_server",
            RecordGroup::CanonicalName => "canonical_name",
            RecordGroup::StartOfAuthority => "start_of_authority",
            RecordGroup::Pointer => "pointer",
            RecordGroup::MailExchange => "mail_exchange",
            RecordGroup::Text => "text",
        }
    }

    /// Heading shown by renderers
    pub fn label(&self) -> &'static str {
        match self {
            RecordGroup::IpAddress => "A/AAAA Records",
            RecordGroup::NameServer => "NS Records",
            RecordGroup::CanonicalName => "CNAME Records",
            RecordGroup::StartOfAuthority => "SOA Records",
            RecordGroup::Pointer => "PTR Records",
            RecordGroup::MailExchange => "MX Records",
            RecordGroup::Text => "TXT Records",
        }
    }

    /// All groups in display order.
    pub fn all() -> &'static [RecordGroup] {
        &[
            RecordGroup::CanonicalName,
            RecordGroup::IpAddress,
            RecordGroup::MailExchange,
            RecordGroup::NameServer,
            RecordGroup::Pointer,
            RecordGroup::StartOfAuthority,
            RecordGroup::Text,
        ]
    }
}

impl fmt::Display for RecordGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
