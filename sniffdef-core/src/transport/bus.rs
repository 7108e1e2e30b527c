//! Message-bus transport.

use crate::schema::Encoding;

/// Generic bus transport options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusOptions {
    /// Broker list passed to the consumer
    pub broker: String,
    /// First topic segment
    pub namespace: String,
    /// Per-partition fetch limit in bytes
    pub max_message_size: Option<u64>,
}

impl Default for BusOptions {
    fn default() -> Self {
        Self {
            broker: "localhost:9092".to_string(),
            namespace: "pvx".to_string(),
            max_message_size: Some(1_000_000),
        }
    }
}

/// Topic one definition consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusBinding {
    pub namespace: String,
    pub encoding_segment: Option<&'static str>,
    pub topic_token: &'static str,
    pub broker: String,
    pub max_message_size: Option<u64>,
}

impl BusBinding {
    pub(super) fn new(options: &BusOptions, topic_token: &'static str, encoding: Encoding) -> Self {
        Self {
            namespace: options.namespace.clone(),
            encoding_segment: encoding.topic_segment(),
            topic_token,
            broker: options.broker.clone(),
            max_message_size: options.max_message_size,
        }
    }

    /// Dotted topic name, e.g. `pvx.chb.databases`.
    pub fn topic(&self) -> String {
        match self.encoding_segment {
            Some(segment) => format!("{}.{}.{}", self.namespace, segment, self.topic_token),
            None => format!("{}.{}", self.namespace, self.topic_token),
        }
    }
}
