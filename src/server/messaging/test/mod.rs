use crate::server::{
    error::messaging::MessagingError,
    messaging::{discord::remote_message, MessagingClient},
    model::message::{OutgoingAttachment, OutgoingMessage, RemoteAttachment},
};
use serenity::all::{ChannelId, MessageId};
use test_utils::{
    builder::TestBuilder,
    channel::{FakeCall, FakeOperation},
    serenity::create_test_message,
};

mod fake;
mod remote_message;
