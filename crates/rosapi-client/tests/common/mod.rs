//! Shared helpers for session tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use rosapi_proto::{AttributeSet, Reply, Transport, TransportError, TransportResult};

/// One command as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub command: String,
    pub args: Vec<String>,
}

impl Call {
    pub fn new(command: &str, args: &[&str]) -> Self {
        Call {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Shared view of the commands a transport has received.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.lock().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.0.lock().iter().map(|c| c.command.clone()).collect()
    }
}

/// A transport that answers from a script, in order.
///
/// Once the script runs out every command succeeds with an empty reply.
pub struct ScriptedTransport {
    script: VecDeque<TransportResult<Reply>>,
    log: CallLog,
}

impl ScriptedTransport {
    pub fn new() -> (Self, CallLog) {
        let log = CallLog::default();
        let transport = ScriptedTransport {
            script: VecDeque::new(),
            log: log.clone(),
        };
        (transport, log)
    }

    pub fn reply(mut self, reply: Reply) -> Self {
        self.script.push_back(Ok(reply));
        self
    }

    pub fn fail(mut self, err: TransportError) -> Self {
        self.script.push_back(Err(err));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn answer(&mut self, call: Call) -> TransportResult<Reply> {
        self.log.push(call);
        self.script.pop_front().unwrap_or_else(|| Ok(Reply::default()))
    }
}

impl Transport for ScriptedTransport {
    fn run(&mut self, command: &str) -> TransportResult<Reply> {
        self.answer(Call::new(command, &[]))
    }

    fn run_args(&mut self, command: &str, args: &[String]) -> TransportResult<Reply> {
        self.answer(Call {
            command: command.to_string(),
            args: args.to_vec(),
        })
    }
}

/// Build an attribute set from pairs.
pub fn sentence(pairs: &[(&str, &str)]) -> AttributeSet {
    pairs.iter().copied().collect()
}

/// Install a tracing subscriber once so log statements are exercised.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
        .with_test_writer()
        .try_init();
}
