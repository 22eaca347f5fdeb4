//! Inbox export loading.
//!
//! The pipeline does not talk to a device; it consumes a JSON export of
//! the message inbox: `[{"id": 1, "address": "Raiffeisen", "body": "..."}]`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxMessage {
    pub id: i64,
    pub address: String,
    pub body: String,
}

pub fn load_inbox(path: &Path) -> Result<Vec<InboxMessage>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading inbox {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("decoding inbox {}", path.display()))
}

/// Messages from one sender, in export order.
pub fn messages_for_address<'a>(
    messages: &'a [InboxMessage],
    address: &str,
) -> Vec<&'a InboxMessage> {
    messages.iter().filter(|m| m.address == address).collect()
}
