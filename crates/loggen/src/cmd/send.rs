//! Send command - generate syslog load against a collector
//!
//! Settings come from the config file (if any) with every flag given here
//! taking precedence. The merged configuration is validated before any
//! connection is made.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: port 514, tcp, bsd, local0.info, 1 worker, 1 record
//! loggen send -s 127.0.0.1
//!
//! # 8 workers x 100k IETF records over UDP with progress
//! loggen send -s 10.0.0.5 -t udp -f ietf --workers 8 --count 100000 --progress
//! ```

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use loggen_client::{Destination, Dispatcher, SendPlan, Transport};
use loggen_config::{Config, FormatKind};
use loggen_protocol::Payload;

use crate::output::{ProgressReporter, format_number, print_report};

/// Record format flag values
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// RFC 3164
    Bsd,
    /// RFC 5424
    Ietf,
}

impl From<FormatArg> for FormatKind {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Bsd => Self::Bsd,
            FormatArg::Ietf => Self::Ietf,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct SendArgs {
    /// Destination host
    #[arg(short = 's', long = "server")]
    host: Option<String>,

    /// Destination port [default: 514]
    #[arg(short, long)]
    port: Option<u16>,

    /// Transport: tcp, udp or tls (tls is rejected) [default: tcp]
    #[arg(short, long)]
    transport: Option<Transport>,

    /// Record format [default: bsd]
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Priority as facility.severity [default: local0.info]
    #[arg(long = "pri")]
    priority: Option<String>,

    /// Random message length in bytes [default: 128]
    #[arg(long = "mlen")]
    message_length: Option<usize>,

    /// Records per worker [default: 1]
    #[arg(short = 'n', long)]
    count: Option<u64>,

    /// Concurrent workers [default: 1]
    #[arg(short, long)]
    workers: Option<usize>,

    /// Hostname written into records [default: system hostname]
    #[arg(long)]
    hostname: Option<String>,

    /// BSD tag [default: TAG]
    #[arg(long)]
    tag: Option<String>,

    /// Do not append [pid] to the BSD tag
    #[arg(long)]
    no_pid: bool,

    /// Stamp BSD records with RFC 3339 timestamps
    #[arg(long)]
    rfc3339: bool,

    /// IETF APP-NAME [default: loggen]
    #[arg(long)]
    app_name: Option<String>,

    /// Write "-" instead of the process ID in IETF PROCID
    #[arg(long)]
    no_proc_id: bool,

    /// IETF MSGID [default: -]
    #[arg(long)]
    msg_id: Option<String>,

    /// IETF STRUCTURED-DATA, written verbatim [default: -]
    #[arg(long = "sd")]
    structured_data: Option<String>,

    /// Print a progress line every second
    #[arg(long)]
    progress: bool,
}

impl SendArgs {
    /// Overlay the flags that were given onto the loaded configuration
    fn apply(&self, config: &mut Config) {
        let target = &mut config.target;
        if let Some(host) = &self.host {
            target.host = Some(host.clone());
        }
        if let Some(port) = self.port {
            target.port = port;
        }
        if let Some(transport) = self.transport {
            target.transport = transport;
        }

        let record = &mut config.record;
        if let Some(format) = self.format {
            record.format = format.into();
        }
        if let Some(priority) = &self.priority {
            record.priority = priority.clone();
        }
        if let Some(len) = self.message_length {
            record.message_length = len;
        }
        if let Some(hostname) = &self.hostname {
            record.hostname = Some(hostname.clone());
        }
        if let Some(tag) = &self.tag {
            record.bsd.tag = tag.clone();
        }
        if self.no_pid {
            record.bsd.pid = false;
        }
        if self.rfc3339 {
            record.bsd.rfc3339 = true;
        }
        if let Some(app_name) = &self.app_name {
            record.ietf.app_name = app_name.clone();
        }
        if self.no_proc_id {
            record.ietf.proc_id = false;
        }
        if let Some(msg_id) = &self.msg_id {
            record.ietf.msg_id = msg_id.clone();
        }
        if let Some(sd) = &self.structured_data {
            record.ietf.structured_data = sd.clone();
        }

        if let Some(count) = self.count {
            config.load.count = count;
        }
        if let Some(workers) = self.workers {
            config.load.workers = workers;
        }
    }
}

/// Everything the dispatcher needs, resolved from a validated config
struct Prepared {
    destination: Destination,
    transport: Transport,
    plan: SendPlan,
}

fn prepare(config: &Config) -> Result<Prepared> {
    config.validate().context("invalid configuration")?;

    let hostname = match &config.record.hostname {
        Some(hostname) => hostname.clone(),
        None => hostname::get()
            .context("failed to look up system hostname")?
            .to_string_lossy()
            .into_owned(),
    };

    let spec = config.record.to_spec(&hostname)?;
    let payload = Payload::random(config.record.message_length);

    // validate() guarantees a host
    let host = config.target.host.clone().unwrap_or_default();

    Ok(Prepared {
        destination: Destination::new(host, config.target.port),
        transport: config.target.transport,
        plan: SendPlan::from_spec(&spec, payload),
    })
}

pub async fn run(args: SendArgs, mut config: Config) -> Result<()> {
    args.apply(&mut config);
    let prepared = prepare(&config)?;

    let workers = config.load.workers;
    let count = config.load.count;
    let total = config.load.total();

    println!(
        "Sending {} records ({} workers x {}) to {} over {} as {}",
        format_number(total),
        workers,
        count,
        prepared.destination,
        prepared.transport,
        prepared.plan.timestamp(),
    );

    info!(
        hostname = %config.record.hostname.as_deref().unwrap_or("<system>"),
        priority = %config.record.priority,
        message_length = config.record.message_length,
        "record layout ready"
    );

    let dispatcher = Dispatcher::new(prepared.destination, prepared.transport, prepared.plan);
    let reporter = args
        .progress
        .then(|| ProgressReporter::start(dispatcher.counters(), total));

    let result = dispatcher.run(workers, count).await;

    if let Some(reporter) = reporter {
        reporter.stop();
    }

    let report = result.context("send failed")?;
    print_report(&report);

    Ok(())
}
