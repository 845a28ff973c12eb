// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! API endpoint paths

/// List all artists
pub const ARTISTS: &str = "/api/v1/artist";

/// Create a chat thread
pub const CREATE_CHAT: &str = "/api/v1/chat";

/// Fetch a single artist profile
pub fn artist(artist_id: &str) -> String {
    format!("/api/v1/artist/{artist_id}")
}

/// Update an artist's assistant instructions
pub fn artist_instructions(artist_id: &str) -> String {
    format!("/api/v1/artist/{artist_id}/instructions")
}

/// Update an artist's profile info
pub fn artist_info(artist_id: &str) -> String {
    format!("/api/v1/artist/{artist_id}/info")
}

/// Append a message to a chat thread
pub fn chat_messages(thread_id: &str) -> String {
    format!("/api/v1/chat/{thread_id}/messages")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(artist("A1"), "/api/v1/artist/A1");
        assert_eq!(chat_messages("T1"), "/api/v1/chat/T1/messages");
        assert_eq!(artist_instructions("A1"), "/api/v1/artist/A1/instructions");
        assert_eq!(artist_info("A1"), "/api/v1/artist/A1/info");
    }
}
