use dns_librarian_domain::{RecordData, RecordType, SoaData};
use hickory_proto::rr::{RData, Record, RecordType as HickoryRecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::ANY => HickoryRecordType::ANY,
            RecordType::Other(value) => HickoryRecordType::from(*value),
        }
    }

    /// Typed payload of an answer record. Types the collator does not group
    /// keep only their wire number.
    pub fn record_data(record: &Record) -> RecordData {
        match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::NS(ns) => RecordData::NS(ns.to_utf8()),
            RData::CNAME(cname) => RecordData::CNAME(cname.to_utf8()),
            RData::PTR(ptr) => RecordData::PTR(ptr.to_utf8()),
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            },
            RData::TXT(txt) => RecordData::TXT(
                txt.txt_data()
                    .iter()
                    .map(|part| String::from_utf8_lossy(part).into_owned())
                    .collect::<Vec<_>>()
                    .join(""),
            ),
            RData::SOA(soa) => RecordData::SOA(SoaData {
                primary_name_server: soa.mname().to_utf8(),
                responsible_mailbox: soa.rname().to_utf8(),
                serial: soa.serial(),
                refresh: soa.refresh(),
                retry: soa.retry(),
                expire: soa.expire(),
                minimum_ttl: soa.minimum(),
            }),
            _ => RecordData::Other {
                record_type: u16::from(record.record_type()),
            },
        }
    }
}
