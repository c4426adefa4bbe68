//! Structural serializers -- JSON, XML, and CSV renditions of the
//! filtered item list.
//!
//! The three formats deliberately disagree on absent values: JSON carries
//! every field and serializes absent optionals as `null`, XML omits the
//! element entirely, CSV writes an empty cell. The JSON/XML asymmetry is
//! contractual, not accidental.

use crate::error::{AgendaError, Result};
use crate::model::AgendaItem;

/// Serialize items as a JSON array, one object per item, all fields
/// present including nulls. An empty list serializes to `[]`.
pub fn to_json(items: &[AgendaItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Serialize items as an `<agenda>` document with one `<event>` child per
/// item.
///
/// Only non-null fields produce child elements; an item without a url has
/// no `<url>` element at all. An empty list produces the childless root.
pub fn to_xml(items: &[AgendaItem]) -> String {
    let mut out = String::from("<agenda>");

    for item in items {
        out.push_str("<event>");
        push_element(&mut out, "id", &item.id.to_string());
        push_element(&mut out, "year", &item.year.to_string());
        push_element(&mut out, "week", &item.week.to_string());
        push_element(&mut out, "start", &item.start);
        push_element(&mut out, "end", &item.end);
        if let Some(top) = &item.top {
            push_element(&mut out, "top", top);
        }
        push_element(&mut out, "thema", &item.thema);
        push_element(&mut out, "beschreibung", &item.beschreibung);
        if let Some(url) = &item.url {
            push_element(&mut out, "url", url);
        }
        if let Some(status) = &item.status {
            push_element(&mut out, "status", status);
        }
        push_element(
            &mut out,
            "namentliche_abstimmung",
            if item.namentliche_abstimmung {
                "true"
            } else {
                "false"
            },
        );
        push_element(&mut out, "uid", &item.uid);
        push_element(&mut out, "dtstamp", &item.dtstamp);
        out.push_str("</event>");
    }

    out.push_str("</agenda>");
    out
}

/// Serialize items as CSV.
///
/// The header row comes from [`AgendaItem::FIELD_NAMES`]; each item
/// contributes one data row with absent optionals as empty cells. An
/// empty list produces the header row alone -- the documented empty-input
/// policy, deterministic rather than a serialization failure.
pub fn to_csv(items: &[AgendaItem]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(AgendaItem::FIELD_NAMES)?;
    for item in items {
        writer.write_record(&[
            item.id.to_string(),
            item.year.to_string(),
            item.week.to_string(),
            item.start.clone(),
            item.end.clone(),
            item.top.clone().unwrap_or_default(),
            item.thema.clone(),
            item.beschreibung.clone(),
            item.url.clone().unwrap_or_default(),
            item.status.clone().unwrap_or_default(),
            item.namentliche_abstimmung.to_string(),
            item.uid.clone(),
            item.dtstamp.clone(),
        ])?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| AgendaError::Io(e.into_error()))?;
    Ok(String::from_utf8(buf)?)
}

fn push_element(out: &mut String, name: &str, text: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    push_escaped_xml(out, text);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Escape XML character data: `&`, `<`, and `>`.
fn push_escaped_xml(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
