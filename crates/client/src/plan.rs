//! Read-only inputs shared by every worker

use loggen_protocol::{Payload, RecordSpec, RecordTemplate, TimestampStyle};

/// Everything a worker needs to render records
///
/// Built once before fan-out and shared behind an `Arc`. Workers only read
/// it, so no lock guards it.
#[derive(Debug, Clone)]
pub struct SendPlan {
    template: RecordTemplate,
    payload: Payload,
    timestamp: TimestampStyle,
}

impl SendPlan {
    /// Create a plan from its parts
    pub fn new(template: RecordTemplate, payload: Payload, timestamp: TimestampStyle) -> Self {
        Self {
            template,
            payload,
            timestamp,
        }
    }

    /// Build the template and pick the timestamp style for a record spec
    pub fn from_spec(spec: &RecordSpec, payload: Payload) -> Self {
        Self::new(spec.template(), payload, spec.timestamp_style())
    }

    /// Record template
    pub fn template(&self) -> &RecordTemplate {
        &self.template
    }

    /// Message body
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Timestamp style stamped on each record
    pub fn timestamp(&self) -> TimestampStyle {
        self.timestamp
    }

    /// Render one record stamped with the current time into `buf`
    ///
    /// `ts` is scratch space for the timestamp; both buffers are reused
    /// across calls.
    pub fn render_now(&self, ts: &mut String, buf: &mut Vec<u8>) {
        ts.clear();
        self.timestamp.write_now(ts);
        self.template.render_into(buf, ts, self.payload.as_str());
    }
}
