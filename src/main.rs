//! Pawns-only chess for two players.
//!
//! Starts the terminal front-end by default; `--gui` opens a window instead when
//! the crate is built with the `gui` feature.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pawns_only_chess::ui::ChessUI;
use pawns_only_chess::{EngineState, StalemateRule};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum StalemateArg {
    /// Draw when the player to move is stuck
    #[default]
    SideToMove,
    /// Draw when either player is stuck
    EitherSide,
}

impl From<StalemateArg> for StalemateRule {
    fn from(arg: StalemateArg) -> Self {
        match arg {
            StalemateArg::SideToMove => StalemateRule::SideToMove,
            StalemateArg::EitherSide => StalemateRule::EitherSide,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the white player (asked for when omitted)
    #[arg(long)]
    white: Option<String>,

    /// Name of the black player (asked for when omitted)
    #[arg(long)]
    black: Option<String>,

    /// When a position without legal moves is a draw
    #[arg(long, value_enum, default_value_t = StalemateArg::default())]
    stalemate: StalemateArg,

    /// Start from a pawn-only FEN position instead of the usual setup
    #[arg(long)]
    fen: Option<String>,

    /// Open a window instead of playing in the terminal
    #[cfg(feature = "gui")]
    #[arg(long)]
    gui: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level))
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let rule = StalemateRule::from(args.stalemate);
    let state = match &args.fen {
        Some(fen) => EngineState::from_fen(fen, rule).with_context(|| format!("cannot load FEN '{fen}'"))?,
        None => EngineState::with_rule(rule),
    };

    #[cfg(feature = "gui")]
    {
        if args.gui {
            let white = args.white.unwrap_or_else(|| "White".to_string());
            let black = args.black.unwrap_or_else(|| "Black".to_string());
            return pawns_only_chess::gui::run_gui(state, white, black)
                .map_err(|e| anyhow::anyhow!("GUI failed: {e}"));
        }
    }

    let mut ui = ChessUI::new(state).with_players(args.white, args.black);
    let stdin = io::stdin();
    ui.play_game(stdin.lock(), io::stdout().lock())
        .context("terminal session failed")
}
