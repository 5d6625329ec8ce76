//! In-memory stand-in for a Discord text channel.
//!
//! `FakeChannel` keeps an ordered message log with optional file attachments and
//! records every call made against it, so tests can assert on the exact sequence of
//! remote operations a component performed. Failures and hangs can be injected per
//! operation kind to exercise error paths.
//!
//! The channel itself is synchronous. Async adapters wrap each operation with
//! [`FakeChannel::begin`] and [`FakeChannel::end`] so overlapping calls can be
//! detected through [`FakeChannel::max_in_flight`].

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use crate::error::FakeError;

/// First message ID handed out by a fresh channel.
const FIRST_MESSAGE_ID: u64 = 1_000;

/// Kind of remote operation, used for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeOperation {
    ResolveChannel,
    FetchRecent,
    Send,
    Edit,
    Delete,
    FetchAttachment,
}

/// File attached to a fake message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeAttachment {
    pub filename: String,
    pub url: String,
    pub data: Vec<u8>,
}

/// Message stored in the fake channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeMessage {
    pub id: u64,
    pub content: String,
    pub attachment: Option<FakeAttachment>,
}

/// A call observed by the fake channel, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    ResolveChannel,
    FetchRecent {
        limit: u8,
    },
    Send {
        message_id: u64,
        content: String,
        attachment: Option<String>,
    },
    Edit {
        message_id: u64,
        content: String,
        attachment: Option<String>,
    },
    Delete {
        message_id: u64,
    },
    FetchAttachment {
        url: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Injection {
    Fail,
    Hang,
}

#[derive(Debug)]
struct ChannelState {
    messages: BTreeMap<u64, FakeMessage>,
    next_id: u64,
    calls: Vec<FakeCall>,
    injections: VecDeque<(FakeOperation, Injection)>,
    in_flight: usize,
    max_in_flight: usize,
    resolvable: bool,
}

/// In-memory Discord channel that records every operation.
#[derive(Debug)]
pub struct FakeChannel {
    channel_id: u64,
    state: Mutex<ChannelState>,
}

impl FakeChannel {
    /// Creates an empty, resolvable channel.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID the fake answers to
    ///
    /// # Returns
    /// - `FakeChannel` - Channel with no messages and no recorded calls
    pub fn new(channel_id: u64) -> Self {
        Self {
            channel_id,
            state: Mutex::new(ChannelState {
                messages: BTreeMap::new(),
                next_id: FIRST_MESSAGE_ID,
                calls: Vec::new(),
                injections: VecDeque::new(),
                in_flight: 0,
                max_in_flight: 0,
                resolvable: true,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ChannelState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Discord channel ID of this fake.
    pub fn channel_id(&self) -> u64 {
        self.channel_id
    }

    /// Makes every subsequent `resolve` call fail with `UnknownChannel`.
    pub fn set_unresolvable(&self) {
        self.state().resolvable = false;
    }

    /// Makes the next call of the given kind fail with `FakeError::Injected`.
    pub fn fail_next(&self, operation: FakeOperation) {
        self.state()
            .injections
            .push_back((operation, Injection::Fail));
    }

    /// Makes the next call of the given kind report `FakeError::Hang`.
    ///
    /// Async adapters are expected to never complete such a call.
    pub fn hang_next(&self, operation: FakeOperation) {
        self.state()
            .injections
            .push_back((operation, Injection::Hang));
    }

    /// Marks the start of a remote call.
    ///
    /// Consumes the first pending injection for `operation`, if any. On success the
    /// in-flight counter is incremented and must be released with [`FakeChannel::end`].
    ///
    /// # Returns
    /// - `Ok(())` - Call may proceed
    /// - `Err(FakeError::Injected)` - Injected failure, call must fail
    /// - `Err(FakeError::Hang)` - Injected hang, call must never complete
    pub fn begin(&self, operation: FakeOperation) -> Result<(), FakeError> {
        let mut state = self.state();

        let position = state
            .injections
            .iter()
            .position(|(op, _)| *op == operation);
        if let Some(injection) = position.and_then(|index| state.injections.remove(index)) {
            return match injection.1 {
                Injection::Fail => Err(FakeError::Injected(operation)),
                Injection::Hang => Err(FakeError::Hang(operation)),
            };
        }

        state.in_flight += 1;
        state.max_in_flight = state.max_in_flight.max(state.in_flight);
        Ok(())
    }

    /// Marks the end of a call started with [`FakeChannel::begin`].
    pub fn end(&self) {
        let mut state = self.state();
        state.in_flight = state.in_flight.saturating_sub(1);
    }

    /// Highest number of calls observed running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.state().max_in_flight
    }

    /// Resolves the channel.
    pub fn resolve(&self) -> Result<u64, FakeError> {
        let mut state = self.state();
        state.calls.push(FakeCall::ResolveChannel);

        if state.resolvable {
            Ok(self.channel_id)
        } else {
            Err(FakeError::UnknownChannel(self.channel_id))
        }
    }

    /// Returns up to `limit` messages, newest first, mirroring Discord's history order.
    pub fn recent(&self, limit: u8) -> Vec<FakeMessage> {
        let mut state = self.state();
        state.calls.push(FakeCall::FetchRecent { limit });

        state
            .messages
            .values()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect()
    }

    /// Posts a new message and returns its ID.
    pub fn send(&self, content: &str, attachment: Option<(&str, &[u8])>) -> u64 {
        let mut state = self.state();
        let id = state.next_id;
        state.next_id += 1;

        let attachment = attachment.map(|(filename, data)| self.attachment_for(id, filename, data));
        state.calls.push(FakeCall::Send {
            message_id: id,
            content: content.to_string(),
            attachment: attachment.as_ref().map(|a| a.filename.clone()),
        });
        state.messages.insert(
            id,
            FakeMessage {
                id,
                content: content.to_string(),
                attachment,
            },
        );

        id
    }

    /// Replaces the content and attachment of an existing message.
    ///
    /// Passing `None` as the attachment removes any existing one.
    pub fn edit(
        &self,
        message_id: u64,
        content: &str,
        attachment: Option<(&str, &[u8])>,
    ) -> Result<u64, FakeError> {
        let mut state = self.state();
        let attachment =
            attachment.map(|(filename, data)| self.attachment_for(message_id, filename, data));
        state.calls.push(FakeCall::Edit {
            message_id,
            content: content.to_string(),
            attachment: attachment.as_ref().map(|a| a.filename.clone()),
        });

        let message = state
            .messages
            .get_mut(&message_id)
            .ok_or(FakeError::UnknownMessage(message_id))?;
        message.content = content.to_string();
        message.attachment = attachment;

        Ok(message_id)
    }

    /// Deletes a message.
    pub fn delete(&self, message_id: u64) -> Result<(), FakeError> {
        let mut state = self.state();
        state.calls.push(FakeCall::Delete { message_id });

        state
            .messages
            .remove(&message_id)
            .map(|_| ())
            .ok_or(FakeError::UnknownMessage(message_id))
    }

    /// Downloads attachment content by URL.
    pub fn attachment(&self, url: &str) -> Result<Vec<u8>, FakeError> {
        let mut state = self.state();
        state.calls.push(FakeCall::FetchAttachment {
            url: url.to_string(),
        });

        state
            .messages
            .values()
            .filter_map(|message| message.attachment.as_ref())
            .find(|attachment| attachment.url == url)
            .map(|attachment| attachment.data.clone())
            .ok_or_else(|| FakeError::UnknownAttachment(url.to_string()))
    }

    /// Seeds a message without recording a call, as if it was already in history.
    pub fn push_message(&self, content: &str, attachment: Option<(&str, &[u8])>) -> u64 {
        let mut state = self.state();
        let id = state.next_id;
        state.next_id += 1;

        let attachment = attachment.map(|(filename, data)| self.attachment_for(id, filename, data));
        state.messages.insert(
            id,
            FakeMessage {
                id,
                content: content.to_string(),
                attachment,
            },
        );

        id
    }

    /// Removes a message without recording a call, simulating a deletion made outside
    /// of the component under test (a moderator clearing the channel, for example).
    pub fn remove_message(&self, message_id: u64) -> Option<FakeMessage> {
        self.state().messages.remove(&message_id)
    }

    /// Current message with the given ID.
    pub fn message(&self, message_id: u64) -> Option<FakeMessage> {
        self.state().messages.get(&message_id).cloned()
    }

    /// All messages currently in the channel, oldest first.
    pub fn messages(&self) -> Vec<FakeMessage> {
        self.state().messages.values().cloned().collect()
    }

    /// Every call recorded so far, in order.
    pub fn calls(&self) -> Vec<FakeCall> {
        self.state().calls.clone()
    }

    /// Recorded send calls, in order.
    pub fn sends(&self) -> Vec<FakeCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, FakeCall::Send { .. }))
            .collect()
    }

    /// Recorded edit calls, in order.
    pub fn edits(&self) -> Vec<FakeCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, FakeCall::Edit { .. }))
            .collect()
    }

    fn attachment_for(&self, message_id: u64, filename: &str, data: &[u8]) -> FakeAttachment {
        FakeAttachment {
            filename: filename.to_string(),
            url: format!(
                "https://cdn.discordapp.com/attachments/{}/{}/{}",
                self.channel_id, message_id, filename
            ),
            data: data.to_vec(),
        }
    }
}
