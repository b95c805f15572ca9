//! ads.txt data model.
//!
//! This module defines the aggregate produced by a parse (`AdsTxt`), the
//! per-line entities (`Record`, `Variable`), and the closed enumerations the
//! format recognizes (`Relationship`, `Variable`). All values are plain data:
//! constructed once per parse, never mutated afterwards, no shared state.

use std::collections::HashMap;
use std::fmt;

/// Ad system domain of the spec-defined sentinel record meaning "this domain
/// authorizes no sellers".
const PLACEHOLDER_AD_SYSTEM_DOMAIN: &str = "placeholder.example.com";

/// Seller account ID of the placeholder sentinel record.
const PLACEHOLDER_SELLER_ACCOUNT_ID: &str = "placeholder";

/// Aggregate result of parsing one ads.txt payload.
///
/// Records keep encounter order and duplicates. Values for a repeated
/// variable key accumulate in encounter order; ordering across distinct
/// variable keys is not meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdsTxt {
    /// Seller authorization records, in the order they appeared.
    pub records: Vec<Record>,
    /// Recognized `KEY=VALUE` declarations, grouped by variable.
    pub variables: HashMap<Variable, Vec<String>>,
}

impl fmt::Display for AdsTxt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record_suffix = if self.records.len() == 1 { "" } else { "s" };
        let variable_suffix = if self.variables.len() == 1 { "" } else { "s" };
        write!(
            f,
            "{} record{}, {} variable{}",
            self.records.len(),
            record_suffix,
            self.variables.len(),
            variable_suffix
        )
    }
}

/// One seller-authorization entry from an ads.txt file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Domain of the advertising system the seller account lives on.
    pub ad_system_domain: String,
    /// The seller's account identifier with that advertising system.
    pub seller_account_id: String,
    /// Whether the account sells inventory directly or as a reseller.
    pub relationship: Relationship,
    /// Optional certification authority identifier; empty when absent.
    pub cert_authority_id: String,
    /// Free-form annotation after the first `;` on the line, if any.
    pub extension: Option<String>,
}

impl Record {
    /// Reports whether this is the spec-defined placeholder record that
    /// signals "no authorized sellers". Matching is exact and case-sensitive
    /// on the documented placeholder domain and account ID.
    pub fn is_placeholder(&self) -> bool {
        self.ad_system_domain == PLACEHOLDER_AD_SYSTEM_DOMAIN
            && self.seller_account_id == PLACEHOLDER_SELLER_ACCOUNT_ID
    }
}

/// Relationship between the publisher and the seller account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// The publisher directly controls the account.
    Direct,
    /// The account resells the publisher's inventory.
    Reseller,
}

impl Relationship {
    /// Looks up a relationship from its ads.txt token, case-insensitively.
    /// Returns `None` for anything other than `DIRECT` or `RESELLER`.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("DIRECT") {
            Some(Relationship::Direct)
        } else if token.eq_ignore_ascii_case("RESELLER") {
            Some(Relationship::Reseller)
        } else {
            None
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relationship::Direct => write!(f, "DIRECT"),
            Relationship::Reseller => write!(f, "RESELLER"),
        }
    }
}

/// Recognized top-level `KEY=VALUE` declarations.
///
/// Keys are matched case-insensitively; unrecognized keys are ignored by the
/// parser rather than recorded or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// `CONTACT`: how to reach the party maintaining the file.
    Contact,
    /// `SUBDOMAIN`: a subdomain publishing its own ads.txt.
    Subdomain,
    /// `INVENTORYPARTNERDOMAIN`: a partner domain whose inventory is shared.
    InventoryPartnerDomain,
}

impl Variable {
    /// Looks up a variable from its ads.txt key, case-insensitively.
    pub fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("CONTACT") {
            Some(Variable::Contact)
        } else if key.eq_ignore_ascii_case("SUBDOMAIN") {
            Some(Variable::Subdomain)
        } else if key.eq_ignore_ascii_case("INVENTORYPARTNERDOMAIN") {
            Some(Variable::InventoryPartnerDomain)
        } else {
            None
        }
    }

    /// The canonical (upper-case) ads.txt key for this variable.
    pub fn as_key(&self) -> &'static str {
        match self {
            Variable::Contact => "CONTACT",
            Variable::Subdomain => "SUBDOMAIN",
            Variable::InventoryPartnerDomain => "INVENTORYPARTNERDOMAIN",
        }
    }
}
