//! Serialized command execution over a shared connection.
//!
//! A [`Session`] owns one [`Transport`] behind a lock. Every exchange holds the
//! lock from the moment the command is written until its reply has been read,
//! so replies are never interleaved even when the session is shared between
//! threads. When an exchange fails, an empty command is sent on the same
//! connection before the lock is released to push the device back to a clean
//! reply boundary.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use rosapi_marshal::{decode_many, decode_reply_into, encode, inject_identifier, Record};
use rosapi_proto::{
    encode_attribute_word, to_words, Reply, Token, Transport, TransportResult, ID_ATTRIBUTE,
    QUERY_PREFIX,
};
use tracing::{debug, trace, warn};

use crate::config::SessionConfig;
use crate::error::ClientResult;

/// A RouterOS API session.
pub struct Session<T> {
    transport: Mutex<T>,
    config: SessionConfig,
    log_replies: AtomicBool,
}

impl<T: Transport> Session<T> {
    /// Create a session with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    /// Create a session with an explicit configuration.
    pub fn with_config(transport: T, config: SessionConfig) -> Self {
        Session {
            transport: Mutex::new(transport),
            log_replies: AtomicBool::new(config.log_replies),
            config,
        }
    }

    /// Create a session configured from a YAML file.
    pub fn from_config_file(transport: T, path: impl AsRef<Path>) -> ClientResult<Self> {
        let config = SessionConfig::from_yaml_file(path)?;
        Ok(Self::with_config(transport, config))
    }

    /// The configuration the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Enable or disable logging of every reply sentence.
    pub fn set_log_replies(&self, enabled: bool) {
        self.log_replies.store(enabled, Ordering::Relaxed);
    }

    /// Whether reply sentences are being logged.
    pub fn log_replies(&self) -> bool {
        self.log_replies.load(Ordering::Relaxed)
    }

    /// Give back the transport. Closing it is the caller's business.
    pub fn into_inner(self) -> T {
        self.transport.into_inner()
    }

    // ========================================================================
    // Raw Execution
    // ========================================================================

    /// Send a command path with argument words and wait for the full reply.
    ///
    /// On failure the error from this exchange is returned unchanged, after a
    /// single empty command has been sent to resynchronize the connection.
    pub fn execute(&self, command: &str, args: &[String]) -> ClientResult<Reply> {
        self.exchange(command, args, |transport| transport.run_args(command, args))
    }

    /// Send a single-word command and wait for the full reply.
    pub fn run(&self, command: &str) -> ClientResult<Reply> {
        self.exchange(command, &[], |transport| transport.run(command))
    }

    fn exchange<F>(&self, command: &str, args: &[String], send: F) -> ClientResult<Reply>
    where
        F: FnOnce(&mut T) -> TransportResult<Reply>,
    {
        let mut transport = self.transport.lock();
        trace!("Session[{}]: -> {} {:?}", self.config.label, command, args);

        match send(&mut *transport) {
            Ok(reply) => {
                trace!(
                    "Session[{}]: <- {} sentence(s), done: {}",
                    self.config.label,
                    reply.sentences.len(),
                    reply.done
                );
                if self.log_replies() {
                    for sentence in &reply.sentences {
                        debug!("Session[{}]: {} !re {}", self.config.label, command, sentence);
                    }
                    debug!("Session[{}]: {} !done {}", self.config.label, command, reply.done);
                }
                Ok(reply)
            }
            Err(err) => {
                warn!(
                    "Session[{}]: {} failed: {}; resynchronizing connection",
                    self.config.label, command, err
                );
                // the outcome of the nudge is irrelevant
                let _ = transport.run("");
                Err(err.into())
            }
        }
    }

    // ========================================================================
    // Record Exchanges
    // ========================================================================

    /// Run a print command and decode one record per reply sentence.
    pub fn print<R: Record>(&self, command: &str) -> ClientResult<Vec<R>> {
        let reply = self.run(command)?;
        let mut records = Vec::with_capacity(reply.sentences.len());
        decode_many(&reply.sentences, &mut records)?;
        Ok(records)
    }

    /// Run a print command and apply every reply sentence to one record.
    pub fn print_into<R: Record>(&self, command: &str, record: &mut R) -> ClientResult<()> {
        let reply = self.run(command)?;
        decode_reply_into(&reply.sentences, record)?;
        Ok(())
    }

    /// Run a print command filtered by a query (`name=value`).
    pub fn find<R: Record>(&self, command: &str, query: &str) -> ClientResult<Vec<R>> {
        let args = to_words([Token::raw(format!("{}{}", QUERY_PREFIX, query))]);
        let reply = self.execute(command, &args)?;
        let mut records = Vec::with_capacity(reply.sentences.len());
        decode_many(&reply.sentences, &mut records)?;
        Ok(records)
    }

    /// Print the single item with the given id into `record`.
    pub fn print_by_id<R: Record>(
        &self,
        command: &str,
        id: &str,
        record: &mut R,
    ) -> ClientResult<()> {
        let args = to_words([Token::raw("where"), Token::query(ID_ATTRIBUTE, id)]);
        let reply = self.execute(command, &args)?;
        decode_reply_into(&reply.sentences, record)?;
        Ok(())
    }

    /// Create an item from `record` and write the acknowledged id back into it.
    pub fn add<R: Record>(&self, command: &str, record: &mut R) -> ClientResult<()> {
        let reply = self.execute(command, &encode(record))?;
        if !inject_identifier(record, &reply.done, &self.config.ack_attribute) {
            trace!(
                "Session[{}]: {} acknowledged without `{}`",
                self.config.label,
                command,
                self.config.ack_attribute
            );
        }
        Ok(())
    }

    /// Update the item `id` with the writable, non-empty fields of `record`.
    pub fn set<R: Record>(&self, command: &str, id: &str, record: &R) -> ClientResult<()> {
        let mut args = vec![Token::id(id).to_word()];
        args.extend(encode(record));
        self.execute(command, &args)?;
        Ok(())
    }

    /// Set a single attribute, for configuration paths without items.
    pub fn set_one(&self, command: &str, name: &str, value: &str) -> ClientResult<()> {
        self.execute(command, &[encode_attribute_word(name, value)])?;
        Ok(())
    }

    /// Remove the item `id`.
    pub fn remove(&self, command: &str, id: &str) -> ClientResult<()> {
        self.by_id(command, id)
    }

    /// Enable the item `id`.
    pub fn enable(&self, command: &str, id: &str) -> ClientResult<()> {
        self.by_id(command, id)
    }

    /// Disable the item `id`.
    pub fn disable(&self, command: &str, id: &str) -> ClientResult<()> {
        self.by_id(command, id)
    }

    /// Replace the comment of the item `id`.
    pub fn comment(&self, command: &str, id: &str, comment: &str) -> ClientResult<()> {
        let args = to_words([Token::id(id), Token::attribute("comment", comment)]);
        self.execute(command, &args)?;
        Ok(())
    }

    fn by_id(&self, command: &str, id: &str) -> ClientResult<()> {
        self.execute(command, &to_words([Token::id(id)]))?;
        Ok(())
    }
}

impl<T> std::fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("log_replies", &self.log_replies.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
