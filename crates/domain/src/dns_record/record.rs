use super::RecordType;
use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Start-of-authority payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoaData {
    pub primary_name_server: String,
    pub responsible_mailbox: String,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum_ttl: u32,
}

/// Typed payload of an answer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(String),
    CNAME(String),
    SOA(SoaData),
    PTR(String),
    MX { preference: u16, exchange: String },
    TXT(String),
    /// Any type the collator does not group; only the wire number is kept.
    Other { record_type: u16 },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::NS(_) => RecordType::NS,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::SOA(_) => RecordType::SOA,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::Other { record_type } => RecordType::from_u16(*record_type),
        }
    }

    pub fn ip_address(&self) -> Option<IpAddr> {
        match self {
            RecordData::A(v4) => Some(IpAddr::V4(*v4)),
            RecordData::AAAA(v6) => Some(IpAddr::V6(*v6)),
            _ => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::AAAA(addr) => write!(f, "{}", addr),
            RecordData::NS(name) | RecordData::CNAME(name) | RecordData::PTR(name) => {
                write!(f, "{}", name)
            }
            RecordData::SOA(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.primary_name_server,
                soa.responsible_mailbox,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minimum_ttl
            ),
            RecordData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RecordData::TXT(text) => write!(f, "\"{}\"", text),
            RecordData::Other { record_type } => write!(f, "<type {} data>", record_type),
        }
    }
}

/// One entry of a response's answer section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    /// Owner name
    pub name: String,
    /// Time to live in seconds
    pub ttl: u32,
    #[serde(flatten)]
    pub data: RecordData,
}

impl AnswerRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} IN {} {}",
            self.name,
            self.ttl,
            self.record_type(),
            self.data
        )
    }
}
