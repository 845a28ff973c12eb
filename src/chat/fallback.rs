// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Canned assistant replies
//!
//! Deterministic keyword-matched responses used when the backend cannot be
//! reached, so the dialogue keeps moving instead of surfacing an error.

/// Generate a canned reply for the given user input
///
/// Rules are checked in order against the lowercased input; the first match
/// wins.
pub fn canned_reply(input: &str) -> String {
    let lower = input.to_lowercase();

    if lower.contains("song")
        && (lower.contains("greatest")
            || lower.contains("best")
            || lower.contains("youtube")
            || lower.contains("video"))
    {
        return concat!(
            "Based on many critics and polls, one of the greatest songs of all time is ",
            "\"Bohemian Rhapsody\" by Queen. This epic 1975 masterpiece combined rock, ",
            "opera, and ballad elements in a revolutionary way.\n\n",
            "<iframe width=\"560\" height=\"315\" src=\"https://www.youtube.com/embed/fJ9rUzIMcZQ\" ",
            "frameborder=\"0\" allow=\"autoplay; encrypted-media\" allowfullscreen></iframe>\n\n",
            "What aspects of this song inspire you for your own music?"
        )
        .to_string();
    }

    if lower.contains("chord") || lower.contains("progression") {
        "For a pop song, try a classic I-V-vi-IV progression. In the key of C major, \
         that would be C-G-Am-F. This progression is used in countless hit songs!"
            .to_string()
    } else if lower.contains("lyric") || lower.contains("verse") {
        "When writing lyrics, try focusing on a specific emotion or experience. Start \
         with a strong hook that captures the essence of what you want to express, then \
         build verses around that central theme."
            .to_string()
    } else if lower.contains("beat") || lower.contains("drum") {
        "For a solid pop beat, start with a four-on-the-floor kick pattern, add snares \
         on beats 2 and 4, and use hi-hats to create rhythm and movement. Try adding \
         subtle variations every 4 or 8 bars to keep it interesting."
            .to_string()
    } else if lower.contains("mix") || lower.contains("master") {
        "When mixing, focus on creating space for each element. Start with balancing \
         levels, then work on panning, EQ, compression, and finally add effects like \
         reverb and delay. Remember that less is often more!"
            .to_string()
    } else {
        "I'd love to help with your music project! Could you tell me more about what \
         you're working on or what specific aspect you need assistance with?"
            .to_string()
    }
}
