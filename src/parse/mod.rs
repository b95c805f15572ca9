//! ads.txt payload parsing.
//!
//! This module turns a newline-delimited ads.txt payload into an [`AdsTxt`]
//! aggregate. Each line is preprocessed (comment strip, whitespace removal),
//! then attempted both as a seller record and as a `KEY=VALUE` variable:
//! - a line with fewer than three comma-separated fields is not a record and
//!   contributes nothing as one
//! - a record-shaped line either yields a record, is dropped as the
//!   placeholder sentinel, or aborts the whole parse with the specific error
//! - variable detection runs on every cleaned line regardless of the record
//!   attempt's structural outcome
//!
//! Parsing is pure and synchronous: no I/O beyond reading the supplied
//! stream, no state shared across calls.

use std::collections::HashMap;
use std::io::BufRead;

use crate::error_handling::{ParseError, RecordField};
use crate::model::{AdsTxt, Record, Relationship, Variable};

/// Parses an ads.txt payload from a buffered reader.
///
/// # Arguments
///
/// * `reader` - Newline-delimited ads.txt text
///
/// # Returns
///
/// The accumulated records and variables, in encounter order.
///
/// # Errors
///
/// Returns a [`ParseError`] if a record-shaped line is malformed (bad
/// relationship token, empty required field, invalid percent-encoding) or if
/// the stream faults mid-read. Partial results are discarded on error.
pub fn parse<R: BufRead>(reader: R) -> Result<AdsTxt, ParseError> {
    let mut records = Vec::new();
    let mut variables: HashMap<Variable, Vec<String>> = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let cleaned = strip_whitespace(strip_comment(&line));
        if cleaned.is_empty() {
            continue;
        }

        if let Some(record) = parse_record(&cleaned)? {
            if !record.is_placeholder() {
                records.push(record);
            }
        }

        if let Some((variable, value)) = parse_variable(&cleaned) {
            variables.entry(variable).or_default().push(value);
        }
    }

    Ok(AdsTxt { records, variables })
}

/// Parses an ads.txt payload held in memory. Equivalent to [`parse`] over the
/// string's bytes.
///
/// # Errors
///
/// Same as [`parse`], minus the stream-read fault (reading from memory cannot
/// fail).
pub fn parse_str(input: &str) -> Result<AdsTxt, ParseError> {
    parse(input.as_bytes())
}

/// Drops everything from the first `#` onward. Comments are not quote-aware.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Removes every whitespace character, embedded ones included. The governing
/// format treats whitespace as insignificant anywhere on a line, which is
/// more aggressive than trimming the ends.
fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Attempts to decode a cleaned line as a seller record.
///
/// Returns `Ok(None)` when the line is not record-shaped (fewer than three
/// comma-separated fields); the caller then falls through to variable
/// detection. Any other failure is a hard parse error for the whole payload.
fn parse_record(line: &str) -> Result<Option<Record>, ParseError> {
    // A trailing ";annotation" is a free-form extension, split off before the
    // comma fields are considered.
    let (line, extension) = match line.split_once(';') {
        Some((fields, annotation)) => (fields, Some(annotation.to_string())),
        None => (line, None),
    };

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 {
        return Ok(None);
    }

    let relationship = Relationship::from_token(fields[2])
        .ok_or_else(|| ParseError::UnrecognizedRelationship(fields[2].to_string()))?;

    let ad_system_domain = query_unescape(RecordField::AdSystemDomain, fields[0])?;
    if ad_system_domain.is_empty() {
        return Err(ParseError::MissingAdSystemDomain);
    }
    let seller_account_id = query_unescape(RecordField::SellerAccountId, fields[1])?;
    if seller_account_id.is_empty() {
        return Err(ParseError::MissingSellerAccountId);
    }

    // Fields past the fourth are ignored.
    let cert_authority_id = match fields.get(3) {
        Some(raw) => query_unescape(RecordField::CertAuthorityId, raw)?,
        None => String::new(),
    };

    Ok(Some(Record {
        ad_system_domain,
        seller_account_id,
        relationship,
        cert_authority_id,
        extension,
    }))
}

/// Attempts to read a cleaned line as a `KEY=VALUE` variable declaration.
///
/// Only the first `=` separates key from value; later `=` characters belong
/// to the value. Unrecognized keys yield `None`.
fn parse_variable(line: &str) -> Option<(Variable, String)> {
    let (key, value) = line.split_once('=')?;
    let variable = Variable::from_key(key)?;
    Some((variable, value.to_string()))
}

/// Strict percent-decoding with query-string semantics: `+` becomes a space
/// and `%XX` becomes the byte it names. A `%` not followed by two hex digits,
/// or a decoded byte sequence that is not valid UTF-8, fails the field.
fn query_unescape(field: RecordField, raw: &str) -> Result<String, ParseError> {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16));
                let lo = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        decoded.push((hi * 16 + lo) as u8);
                        i += 3;
                    }
                    _ => {
                        return Err(ParseError::PercentDecode {
                            field,
                            value: raw.to_string(),
                        })
                    }
                }
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            other => {
                decoded.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8(decoded).map_err(|_| ParseError::PercentDecode {
        field,
        value: raw.to_string(),
    })
}
