use std::sync::mpsc::{channel, Receiver, Sender};

use serde::{Deserialize, Serialize};

use super::OutputWriter;

/// Colour tag given to echoed player input.
pub const ECHO_COLOR: &str = "inherit";

/// One line of narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl LogLine {
    pub fn new(text: impl Into<String>) -> Self {
        LogLine {
            text: text.into(),
            color: None,
        }
    }

    pub fn with_color(text: impl Into<String>, color: impl Into<String>) -> Self {
        LogLine {
            text: text.into(),
            color: Some(color.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Append-only narrative log.
///
/// Every line goes to the full log and, unless it is an input echo, to the
/// pending buffer drained by `take_pending`. Subscribers receive each appended
/// line, echoes included, in order over a channel.
#[derive(Debug, Default)]
pub struct EventLog {
    pending: Vec<LogLine>,
    full: Vec<LogLine>,
    subscribers: Vec<(SubscriberId, Sender<LogLine>)>,
    next_id: u64,
    /// Text written with `write` that has not been terminated yet.
    partial: String,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: LogLine) {
        self.pending.push(line.clone());
        self.append_full(line);
    }

    /// Record player input in the full log only.
    pub fn echo(&mut self, input: &str) {
        self.append_full(LogLine::with_color(format!("> {}", input), ECHO_COLOR));
    }

    fn append_full(&mut self, line: LogLine) {
        self.full.push(line.clone());
        // Receivers that hung up are dropped.
        self.subscribers
            .retain(|(_, sender)| sender.send(line.clone()).is_ok());
    }

    /// Drain the lines produced since the last call.
    pub fn take_pending(&mut self) -> Vec<LogLine> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[LogLine] {
        &self.pending
    }

    pub fn full_log(&self) -> &[LogLine] {
        &self.full
    }

    pub fn subscribe(&mut self) -> (SubscriberId, Receiver<LogLine>) {
        let (tx, rx) = channel();
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, tx));
        (id, rx)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Start over for a new game. Subscribers stay attached.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.full.clear();
        self.partial.clear();
    }
}

impl OutputWriter for EventLog {
    fn write(&mut self, message: &str) {
        self.partial.push_str(message);
    }

    fn writeln(&mut self, message: &str) {
        let mut text = std::mem::take(&mut self.partial);
        text.push_str(message);
        self.push(LogLine::new(text));
    }
}
