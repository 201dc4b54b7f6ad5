use super::record_type_map::RecordTypeMapper;
use bytes::Bytes;
use dns_librarian_domain::{AnswerRecord, DomainError, RawResponse, ResponseCode};
use hickory_proto::op::{Message, MessageType};
use tracing::debug;

/// Parsed upstream reply: the protocol-independent response plus the header
/// bits the client needs for matching and TCP fallback.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,
    pub truncated: bool,
    pub raw: RawResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Message is not a response".into(),
            ));
        }

        let response_code = ResponseCode::from_u16(u16::from(message.response_code()));
        let truncated = message.truncated();

        let answers: Vec<AnswerRecord> = message
            .answers()
            .iter()
            .map(|record| {
                AnswerRecord::new(
                    record.name().to_utf8(),
                    record.ttl(),
                    RecordTypeMapper::record_data(record),
                )
            })
            .collect();

        debug!(
            rcode = %response_code,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            truncated,
            raw: RawResponse::new(response_code, answers),
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }
}
