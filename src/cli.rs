// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// HitCraft - chat with your music assistant from the terminal
#[derive(Parser, Debug)]
#[command(name = "hitcraft")]
#[command(version, about = "Chat and music-assistant client for the HitCraft API")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat with an artist's assistant
    Chat(ChatArgs),

    /// Artist lookup
    Artists(ArtistsArgs),

    /// Session credential management
    Auth(AuthArgs),
}

/// Arguments for the chat subcommand
#[derive(clap::Args, Debug)]
pub struct ChatArgs {
    /// Artist to chat with
    pub artist_id: String,

    /// Send a single message instead of starting an interactive session
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments for the artists subcommand
#[derive(clap::Args, Debug)]
pub struct ArtistsArgs {
    #[command(subcommand)]
    pub command: ArtistsCommands,
}

/// Artist lookup subcommands
#[derive(Subcommand, Debug)]
pub enum ArtistsCommands {
    /// List all artists
    List,

    /// Show a single artist profile
    Show {
        /// Artist id
        artist_id: String,
    },
}

/// Arguments for the auth subcommand
#[derive(clap::Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

/// Credential management subcommands
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Store a session token (and optional refresh token)
    Login {
        /// Session JWT
        token: String,

        /// Refresh JWT
        #[arg(long)]
        refresh_token: Option<String>,
    },

    /// Exchange the refresh token for a new session token
    Refresh,

    /// Wipe stored credentials
    Logout,

    /// Show whether a credential is stored
    Status,
}
