// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat session management
//!
//! Thread resolution, message modeling, and the send/fallback flow.

pub mod fallback;
pub mod message;
pub mod session;
pub mod thread;

pub use message::{Message, Sender};
pub use session::{ChatReply, ChatSession, ReplySource};
pub use thread::{ThreadId, ThreadResolver};
