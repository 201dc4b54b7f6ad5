//! Record collation
//!
//! Partitions the answer section of a resolver response into one typed,
//! ordered collection per [`RecordGroup`], next to the address list produced
//! by the supplementary forward lookup.

use crate::dns_record::{AnswerRecord, RecordData, RecordGroup, SoaData};
use crate::raw_response::RawResponse;
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    pub name: String,
    pub ttl: u32,
    pub address: IpAddr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameServerRecord {
    pub name: String,
    pub ttl: u32,
    pub name_server: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalNameRecord {
    pub name: String,
    pub ttl: u32,
    pub canonical_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartOfAuthorityRecord {
    pub name: String,
    pub ttl: u32,
    #[serde(flatten)]
    pub soa: SoaData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointerRecord {
    pub name: String,
    pub ttl: u32,
    pub pointer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailExchangeRecord {
    pub name: String,
    pub ttl: u32,
    pub preference: u16,
    pub exchange: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRecord {
    pub name: String,
    pub ttl: u32,
    pub text: String,
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.address.is_ipv4() { "A" } else { "AAAA" };
        write!(f, "{} {} IN {} {}", self.name, self.ttl, kind, self.address)
    }
}

impl fmt::Display for NameServerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} IN NS {}", self.name, self.ttl, self.name_server)
    }
}

impl fmt::Display for CanonicalNameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} IN CNAME {}", self.name, self.ttl, self.canonical_name)
    }
}

impl fmt::Display for StartOfAuthorityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} IN SOA {}",
            self.name,
            self.ttl,
            RecordData::SOA(self.soa.clone())
        )
    }
}

impl fmt::Display for PointerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} IN PTR {}", self.name, self.ttl, self.pointer)
    }
}

impl fmt::Display for MailExchangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} IN MX {} {}",
            self.name, self.ttl, self.preference, self.exchange
        )
    }
}

impl fmt::Display for TextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} IN TXT \"{}\"", self.name, self.ttl, self.text)
    }
}

/// Answer records of one response grouped by type, plus the addresses the
/// forward lookup returned.
///
/// Built once by [`CollatedRecords::collate`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollatedRecords {
    ip_address_records: Vec<AddressRecord>,
    name_server_records: Vec<NameServerRecord>,
    canonical_name_records: Vec<CanonicalNameRecord>,
    start_of_authority_records: Vec<StartOfAuthorityRecord>,
    pointer_records: Vec<PointerRecord>,
    mail_exchange_records: Vec<MailExchangeRecord>,
    text_records: Vec<TextRecord>,
    ip_addresses: Vec<IpAddr>,
}

impl CollatedRecords {
    /// Never fails: answers whose type has no group are dropped.
    pub fn collate(response: &RawResponse, resolved_addresses: Vec<IpAddr>) -> Self {
        let mut collated = Self {
            ip_addresses: resolved_addresses,
            ..Self::default()
        };

        for answer in &response.answers {
            collated.push(answer);
        }

        collated
    }

    fn push(&mut self, answer: &AnswerRecord) {
        let name = answer.name.clone();
        let ttl = answer.ttl;

        match &answer.data {
            RecordData::A(_) | RecordData::AAAA(_) => {
                if let Some(address) = answer.data.ip_address() {
                    self.ip_address_records
                        .push(AddressRecord { name, ttl, address });
                }
            }
            RecordData::NS(name_server) => self.name_server_records.push(NameServerRecord {
                name,
                ttl,
                name_server: name_server.clone(),
            }),
            RecordData::CNAME(canonical_name) => {
                self.canonical_name_records.push(CanonicalNameRecord {
                    name,
                    ttl,
                    canonical_name: canonical_name.clone(),
                })
            }
            RecordData::SOA(soa) => self.start_of_authority_records.push(StartOfAuthorityRecord {
                name,
                ttl,
                soa: soa.clone(),
            }),
            RecordData::PTR(pointer) => self.pointer_records.push(PointerRecord {
                name,
                ttl,
                pointer: pointer.clone(),
            }),
            RecordData::MX {
                preference,
                exchange,
            } => self.mail_exchange_records.push(MailExchangeRecord {
                name,
                ttl,
                preference: *preference,
                exchange: exchange.clone(),
            }),
            RecordData::TXT(text) => self.text_records.push(TextRecord {
                name,
                ttl,
                text: text.clone(),
            }),
            RecordData::Other { .. } => {}
        }
    }

    pub fn ip_address_records(&self) -> &[AddressRecord] {
        &self.ip_address_records
    }

    pub fn name_server_records(&self) -> &[NameServerRecord] {
        &self.name_server_records
    }

    pub fn canonical_name_records(&self) -> &[CanonicalNameRecord] {
        &self.canonical_name_records
    }

    pub fn start_of_authority_records(&self) -> &[StartOfAuthorityRecord] {
        &self.start_of_authority_records
    }

    pub fn pointer_records(&self) -> &[PointerRecord] {
        &self.pointer_records
    }

    pub fn mail_exchange_records(&self) -> &[MailExchangeRecord] {
        &self.mail_exchange_records
    }

    pub fn text_records(&self) -> &[TextRecord] {
        &self.text_records
    }

    pub fn ip_addresses(&self) -> &[IpAddr] {
        &self.ip_addresses
    }

    pub fn group_len(&self, group: RecordGroup) -> usize {
        match group {
            RecordGroup::IpAddress => self.ip_address_records.len(),
            RecordGroup::NameServer => self.name_server_records.len(),
            RecordGroup::CanonicalName => self.canonical_name_records.len(),
            RecordGroup::StartOfAuthority => self.start_of_authority_records.len(),
            RecordGroup::Pointer => self.pointer_records.len(),
            RecordGroup::MailExchange => self.mail_exchange_records.len(),
            RecordGroup::Text => self.text_records.len(),
        }
    }

    /// Display lines of one group, in response order.
    pub fn group_lines(&self, group: RecordGroup) -> Vec<String> {
        fn lines<T: fmt::Display>(records: &[T]) -> Vec<String> {
            records.iter().map(ToString::to_string).collect()
        }

        match group {
            RecordGroup::IpAddress => lines(&self.ip_address_records),
            RecordGroup::NameServer => lines(&self.name_server_records),
            RecordGroup::CanonicalName => lines(&self.canonical_name_records),
            RecordGroup::StartOfAuthority => lines(&self.start_of_authority_records),
            RecordGroup::Pointer => lines(&self.pointer_records),
            RecordGroup::MailExchange => lines(&self.mail_exchange_records),
            RecordGroup::Text => lines(&self.text_records),
        }
    }

    pub fn record_count(&self) -> usize {
        RecordGroup::all().iter().map(|g| self.group_len(*g)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0 && self.ip_addresses.is_empty()
    }
}
