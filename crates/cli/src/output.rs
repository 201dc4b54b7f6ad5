//! Text and JSON rendering of lookup results

use dns_librarian_application::use_cases::ResolvedDomain;
use dns_librarian_domain::{CollatedRecords, DomainName, RecordGroup, ResolverAddress, ResponseCode};
use serde::Serialize;

#[derive(Serialize)]
struct LookupReport<'a> {
    domain: &'a DomainName,
    resolver: ResolverAddress,
    response_code: ResponseCode,
    records: &'a CollatedRecords,
}

/// Non-empty groups in display order, then the forward lookup addresses.
pub fn render_lookup_text(domain: &DomainName, resolved: &ResolvedDomain) -> String {
    let mut lines = vec![format!(
        ";; {} via {} ({})",
        domain, resolved.resolver, resolved.response_code
    )];

    let records = &resolved.records;
    if records.is_empty() {
        lines.push(String::new());
        lines.push("No records found.".to_string());
    }

    for group in RecordGroup::all() {
        push_section(&mut lines, group.label(), records.group_lines(*group));
    }

    push_section(
        &mut lines,
        "IP Addresses",
        records.ip_addresses().iter().map(ToString::to_string).collect(),
    );

    lines.push(String::new());
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, entries: Vec<String>) {
    if entries.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("{}:", title));
    lines.extend(entries.into_iter().map(|entry| format!("  {}", entry)));
}

pub fn render_lookup_json(
    domain: &DomainName,
    resolved: &ResolvedDomain,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LookupReport {
        domain,
        resolver: resolved.resolver,
        response_code: resolved.response_code,
        records: &resolved.records,
    })
}

pub fn render_resolvers_text(resolvers: &[ResolverAddress]) -> String {
    resolvers.iter().map(|r| format!("{}\n", r)).collect()
}

pub fn render_resolvers_json(resolvers: &[ResolverAddress]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(resolvers)
}
