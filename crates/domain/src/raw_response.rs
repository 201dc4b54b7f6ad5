use crate::dns_record::AnswerRecord;
use serde::{Serialize, Serializer};
use std::fmt;

/// DNS response code (RCODE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Other(value) => *value,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::NoError)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(value) => write!(f, "RCODE{}", value),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Protocol-level reply of a single resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub response_code: ResponseCode,
    /// Answer section, in wire order
    pub answers: Vec<AnswerRecord>,
}

impl RawResponse {
    pub fn new(response_code: ResponseCode, answers: Vec<AnswerRecord>) -> Self {
        Self {
            response_code,
            answers,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_code.is_success()
    }

    pub fn is_nxdomain(&self) -> bool {
        self.response_code == ResponseCode::NXDomain
    }
}
