//! JSON output formatting.

use anyhow::Result;
use serde::Serialize;
use vlr_core::Envelope;

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats retrieval envelopes: a single one as an object, several as
    /// an array.
    pub fn format_envelopes<T: Serialize>(&self, envelopes: &[&Envelope<T>]) -> Result<String> {
        match envelopes {
            [single] => self.format(single),
            many => self.format(many),
        }
    }
}
