// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HitCraft - chat with your music assistant from the terminal
//!
//! Entry point for the HitCraft CLI application.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;

use hitcraft::api::ApiClient;
use hitcraft::artist::ArtistApi;
use hitcraft::auth::{Credential, TokenProvider};
use hitcraft::chat::{ChatSession, ReplySource};
use hitcraft::cli::{ArtistsCommands, AuthCommands, Cli, Commands};
use hitcraft::config::Settings;
use hitcraft::error::{HitcraftError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables client diagnostics without
    // requiring users to know target names up front. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        if let Ok(directive) = "hitcraft=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = Settings::load()?;
    let tokens = Arc::new(TokenProvider::new(&settings)?);

    match cli.command {
        Commands::Chat(args) => {
            let api = Arc::new(ApiClient::new(&settings, tokens)?);
            let mut session = ChatSession::new(api);

            if let Some(message) = args.message {
                let reply = session.send_message(&message, &args.artist_id).await;
                print_reply(&reply.message.content, reply.source);
            } else {
                run_chat_loop(&mut session, &args.artist_id).await?;
            }
        }
        Commands::Artists(args) => {
            let api = Arc::new(ApiClient::new(&settings, tokens)?);
            let artists = ArtistApi::new(api);
            match args.command {
                ArtistsCommands::List => {
                    for artist in artists.list().await.map_err(HitcraftError::Api)? {
                        println!("{}  {}", artist.id, artist.name);
                    }
                }
                ArtistsCommands::Show { artist_id } => {
                    let artist = artists.get(&artist_id).await.map_err(HitcraftError::Api)?;
                    println!("{} ({})", artist.name, artist.id);
                    println!("Genres: {}", artist.genres_list());
                    println!("{}", artist.short_bio());
                }
            }
        }
        Commands::Auth(args) => match args.command {
            AuthCommands::Login {
                token,
                refresh_token,
            } => {
                let credential = match refresh_token {
                    Some(refresh) => Credential::with_refresh(token, refresh),
                    None => Credential::new(token),
                };
                tokens.set_credential(credential)?;
                println!("Credential stored.");
            }
            AuthCommands::Refresh => {
                tokens.refresh().await.map_err(HitcraftError::Auth)?;
                println!("Session token refreshed.");
            }
            AuthCommands::Logout => {
                tokens.clear();
                println!("Credentials cleared.");
            }
            AuthCommands::Status => match tokens.current_token() {
                Some(credential) => {
                    let refresh = if credential.refresh_token.is_some() {
                        "with refresh token"
                    } else {
                        "no refresh token"
                    };
                    println!("Signed in ({refresh}).");
                }
                None => println!("Not signed in."),
            },
        },
    }

    Ok(())
}

/// Interactive chat loop; `/new` resets the thread, `exit` quits
async fn run_chat_loop(session: &mut ChatSession, artist_id: &str) -> Result<()> {
    println!("Chatting with {artist_id}. Type /new for a fresh thread, exit to quit.");

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "exit" | "quit" => break,
            "/new" => {
                session.start_new_chat();
                println!("Started a new chat.");
                continue;
            }
            _ => {}
        }

        let reply = session.send_message(input, artist_id).await;
        print_reply(&reply.message.content, reply.source);
    }

    Ok(())
}

fn print_reply(content: &str, source: ReplySource) {
    match source {
        ReplySource::Server => println!("{content}"),
        ReplySource::LocalFallback => println!("[offline] {content}"),
        ReplySource::SessionExpired => println!("[signed out] {content}"),
    }
}
