//! Loggen Client - concurrent syslog senders
//!
//! This crate moves rendered records onto the network. It never builds
//! records itself; it takes a prepared [`SendPlan`] and writes it out.
//!
//! # Architecture
//!
//! - [`transport`] - transport selection and destination address
//! - [`session`] - one worker: one connection, one send loop
//! - [`dispatcher`] - fixed fan-out of sessions and the completion join
//! - [`stats`] - shared send counters for progress reporting
//!
//! # Failure model
//!
//! Fail fast. A dial or write error ends the worker, and the dispatcher
//! aborts every other worker and returns that error. Nothing is retried.
//!
//! # Example
//!
//! ```ignore
//! use loggen_client::{Destination, Dispatcher, SendPlan, Transport};
//! use loggen_protocol::{BsdFields, Payload, Priority, RecordSpec};
//!
//! let spec = RecordSpec::bsd(Priority::default(), "web-01", BsdFields::new("app"));
//! let plan = SendPlan::from_spec(&spec, Payload::random(128));
//!
//! let dispatcher = Dispatcher::new(Destination::new("127.0.0.1", 514), Transport::Tcp, plan);
//! let report = dispatcher.run(4, 1_000).await?;
//! assert_eq!(report.total_records(), 4_000);
//! ```

mod error;

pub mod dispatcher;
pub mod plan;
pub mod session;
pub mod stats;
pub mod transport;

pub use dispatcher::{DispatchReport, Dispatcher};
pub use error::{ClientError, Result};
pub use plan::SendPlan;
pub use session::{TransportSession, WorkerResult};
pub use stats::{SendCounters, SendSnapshot};
pub use transport::{Destination, Transport};

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod session_test;
#[cfg(test)]
mod transport_test;
