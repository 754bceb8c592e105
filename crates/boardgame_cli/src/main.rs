//! Board game engine CLI
//!
//! Thin host over `boardgame_rules`: reads a stored state and a move from
//! the command line and prints JSON on stdout. Logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use boardgame_rules::{Engine, EngineConfig, VariantRegistry};
use clap::Parser;
use cli::{Cli, Command};
use serde_json::{Value, json};
use std::path::Path;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = build_engine(cli.config.as_deref())?;

    let output = match cli.command {
        Command::Variants => list_variants(&engine),
        Command::New { variant } => new_game(&engine, &variant)?,
        Command::Move {
            variant,
            state,
            payload,
        } => play_move(&engine, &variant, &state, &payload)?,
        Command::Moves { variant, state } => list_moves(&engine, &variant, &state)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Builds the engine from built-in variants plus an optional config file.
#[instrument]
fn build_engine(config: Option<&Path>) -> Result<Engine> {
    let registry = match config {
        Some(path) => {
            let config = EngineConfig::from_file(path)?;
            VariantRegistry::from_config(&config)?
        }
        None => VariantRegistry::builtin(),
    };
    info!(variants = registry.len(), "Engine ready");
    Ok(Engine::new(registry))
}

fn list_variants(engine: &Engine) -> Value {
    Value::Array(
        engine
            .variants()
            .map(|variant| {
                json!({
                    "name": variant.name(),
                    "rules": variant.rules(),
                    "default_state": variant.default_state(),
                })
            })
            .collect(),
    )
}

fn new_game(engine: &Engine, variant: &str) -> Result<Value> {
    let state = engine.default_state(variant)?;
    Ok(json!({ "state": state }))
}

/// Runs one move through the engine.
#[instrument(skip(engine))]
fn play_move(engine: &Engine, variant: &str, state: &str, payload: &str) -> Result<Value> {
    let raw: Value = serde_json::from_str(payload)
        .with_context(|| format!("Move payload is not valid JSON: {}", payload))?;
    debug!(%raw, "Payload parsed");

    let applied = engine.submit_move(state, &raw, variant)?;
    Ok(json!({
        "state": applied.state(),
        "outcome": applied.outcome(),
        "result": applied.outcome().code(),
    }))
}

fn list_moves(engine: &Engine, variant: &str, state: &str) -> Result<Value> {
    let moves = engine.legal_moves(state, variant)?;
    Ok(Value::Array(moves.iter().map(|mv| mv.to_payload()).collect()))
}
