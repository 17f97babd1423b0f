//! Link entities for the created-links dashboard

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::constants::{CLAIMED_LABEL, DEFAULT_AMOUNT_FRACTION_DIGITS, DEPOSIT_DATE_UNAVAILABLE};
use crate::shared::types::{Address, Amount};
use crate::shared::utils::format_token_amount;

lazy_static! {
    static ref CHAIN_PARAM: Regex = Regex::new(r"c=(\d+)").expect("chain parameter pattern is valid");
}

/// A link remembered locally for the wallet that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLink {
    pub creator: Address,
    pub hash: String,
    /// Position inside a batch deposit; absent for single links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idx: Option<u32>,
    pub link: String,
}

impl StoredLink {
    pub fn new(creator: impl Into<Address>, hash: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            hash: hash.into(),
            idx: None,
            link: link.into(),
        }
    }

    pub fn with_idx(mut self, idx: u32) -> Self {
        self.idx = Some(idx);
        self
    }

    /// Chain id carried by the `c=` parameter of the link.
    pub fn chain_id(&self) -> Option<u64> {
        CHAIN_PARAM
            .captures(&self.link)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Row key: the deposit hash, suffixed with the batch index when it is non-zero.
    pub fn row_key(&self) -> String {
        match self.idx {
            Some(idx) if idx != 0 => format!("{}{}", self.hash, idx),
            _ => self.hash.clone(),
        }
    }
}

/// What the link SDK reports about a deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDetails {
    pub token_amount: Amount,
    pub token_symbol: String,
    #[serde(default)]
    pub deposit_date: Option<DateTime<Utc>>,
}

/// One dashboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardItem {
    pub hash: String,
    pub chain_id: u64,
    pub amount: Amount,
    pub token: String,
    pub date: String,
    pub claimed: bool,
    pub link: String,
    pub copied: bool,
}

impl DashboardItem {
    pub fn from_details(stored: &StoredLink, chain_id: u64, details: LinkDetails) -> Self {
        let claimed = amount_value(&details.token_amount) <= 0.0;
        let date = details
            .deposit_date
            .map(|date| date.to_rfc2822())
            .unwrap_or_else(|| DEPOSIT_DATE_UNAVAILABLE.to_string());

        Self {
            hash: stored.row_key(),
            chain_id,
            amount: details.token_amount,
            token: details.token_symbol,
            date,
            claimed,
            link: stored.link.clone(),
            copied: false,
        }
    }

    /// Amount column text: the formatted amount while funds remain, otherwise "Claimed".
    pub fn amount_label(&self) -> String {
        self.amount_label_with_digits(DEFAULT_AMOUNT_FRACTION_DIGITS)
    }

    pub fn amount_label_with_digits(&self, max_fraction_digits: usize) -> String {
        let value = amount_value(&self.amount);
        if value > 0.0 {
            format_token_amount(value, max_fraction_digits)
        } else {
            CLAIMED_LABEL.to_string()
        }
    }
}

/// Numeric reading of an SDK amount string. Blank reads as zero, anything
/// unparsable as NaN, so it is neither claimed nor positive.
fn amount_value(amount: &str) -> f64 {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}
