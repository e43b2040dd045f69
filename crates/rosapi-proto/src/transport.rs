//! The connection collaborator.

use crate::error::TransportResult;
use crate::reply::Reply;

/// A connected, logged-in RouterOS API connection.
///
/// Implementations own framing, login and timeouts. Each call is one complete
/// exchange: the command sentence is written and the reply is read up to and
/// including `!done`. Callers serialize access; an implementation never sees
/// two exchanges at once.
pub trait Transport: Send {
    /// Send a command consisting of a single word.
    fn run(&mut self, command: &str) -> TransportResult<Reply>;

    /// Send a command path followed by argument words.
    fn run_args(&mut self, command: &str, args: &[String]) -> TransportResult<Reply>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn run(&mut self, command: &str) -> TransportResult<Reply> {
        (**self).run(command)
    }

    fn run_args(&mut self, command: &str, args: &[String]) -> TransportResult<Reply> {
        (**self).run_args(command, args)
    }
}
