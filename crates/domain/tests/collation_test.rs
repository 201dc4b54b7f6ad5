use dns_librarian_domain::{
    AnswerRecord, CollatedRecords, DomainError, DomainName, RawResponse, RecordData, RecordGroup,
    ResponseCode, SoaData,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

fn record(name: &str, data: RecordData) -> AnswerRecord {
    AnswerRecord::new(name, 300, data)
}

fn soa() -> SoaData {
    SoaData {
        primary_name_server: "ns.icann.org.".into(),
        responsible_mailbox: "noc.dns.icann.org.".into(),
        serial: 2024081413,
        refresh: 7200,
        retry: 3600,
        expire: 1209600,
        minimum_ttl: 3600,
    }
}

fn mixed_response() -> RawResponse {
    RawResponse::new(
        ResponseCode::NoError,
        vec![
            record("example.com.", RecordData::NS("a.iana-servers.net.".into())),
            record("example.com.", RecordData::A(Ipv4Addr::new(93, 184, 216, 34))),
            record("example.com.", RecordData::SOA(soa())),
            record("www.example.com.", RecordData::CNAME("example.com.".into())),
            record("example.com.", RecordData::TXT("v=spf1 -all".into())),
            record(
                "example.com.",
                RecordData::MX {
                    preference: 0,
                    exchange: ".".into(),
                },
            ),
            record("example.com.", RecordData::Other { record_type: 13 }),
            record("example.com.", RecordData::NS("b.iana-servers.net.".into())),
            record(
                "34.216.184.93.in-addr.arpa.",
                RecordData::PTR("example.com.".into()),
            ),
            record(
                "example.com.",
                RecordData::AAAA("2606:2800:220:1:248:1893:25c8:1946".parse().unwrap()),
            ),
        ],
    )
}

// ============================================================================
// Collation Tests
// ============================================================================

#[test]
fn test_every_recognized_record_lands_in_one_group() {
    let response = mixed_response();

    let collated = CollatedRecords::collate(&response, Vec::new());

    // HINFO (type 13) is the only record without a group
    assert_eq!(collated.record_count(), response.answers.len() - 1);
    assert_eq!(collated.group_len(RecordGroup::IpAddress), 2);
    assert_eq!(collated.group_len(RecordGroup::NameServer), 2);
    assert_eq!(collated.group_len(RecordGroup::CanonicalName), 1);
    assert_eq!(collated.group_len(RecordGroup::StartOfAuthority), 1);
    assert_eq!(collated.group_len(RecordGroup::Pointer), 1);
    assert_eq!(collated.group_len(RecordGroup::MailExchange), 1);
    assert_eq!(collated.group_len(RecordGroup::Text), 1);
}

#[test]
fn test_groups_keep_response_order() {
    let collated = CollatedRecords::collate(&mixed_response(), Vec::new());

    let name_servers: Vec<&str> = collated
        .name_server_records()
        .iter()
        .map(|r| r.name_server.as_str())
        .collect();
    assert_eq!(name_servers, vec!["a.iana-servers.net.", "b.iana-servers.net."]);

    let addresses: Vec<IpAddr> = collated
        .ip_address_records()
        .iter()
        .map(|r| r.address)
        .collect();
    assert_eq!(
        addresses,
        vec![
            IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34)),
            IpAddr::V6("2606:2800:220:1:248:1893:25c8:1946".parse::<Ipv6Addr>().unwrap()),
        ]
    );
}

#[test]
fn test_soa_fields_survive() {
    let collated = CollatedRecords::collate(&mixed_response(), Vec::new());

    let soa_record = &collated.start_of_authority_records()[0];
    assert_eq!(soa_record.soa, soa());
    assert_eq!(
        collated.group_lines(RecordGroup::StartOfAuthority),
        vec![
            "example.com. 300 IN SOA ns.icann.org. noc.dns.icann.org. 2024081413 7200 3600 1209600 3600"
                .to_string()
        ]
    );
}

#[test]
fn test_error_response_collates_normally() {
    let response = RawResponse::new(ResponseCode::NXDomain, Vec::new());

    let collated = CollatedRecords::collate(&response, Vec::new());

    assert!(collated.is_empty());
}

// ============================================================================
// Domain Input Tests
// ============================================================================

#[test]
fn test_url_input_reduced_to_host() {
    let cases = [
        ("example.com", "example.com"),
        ("https://example.com/path?q=1", "example.com"),
        ("HTTP://WWW.Example.COM:8080/", "www.example.com"),
        ("example.com.", "example.com"),
        ("  mail.example.org  ", "mail.example.org"),
    ];

    for (input, expected) in cases {
        let parsed = DomainName::parse(input).unwrap();
        assert_eq!(parsed.as_str(), expected, "input: {}", input);
    }
}

#[test]
fn test_bad_input_is_invalid_domain() {
    for input in ["", "https://", "exa mple.com", "-bad.com", "a..b", "aaaaaaé.com"] {
        assert!(
            matches!(DomainName::parse(input), Err(DomainError::InvalidDomain(_))),
            "input: {:?}",
            input
        );
    }
}
