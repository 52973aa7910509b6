//! Terminal goods-sort runner (default binary).
//!
//! Owns the event loop: keyboard picks become move events, wall-clock time
//! becomes one-second tick events, and both are applied to the session one
//! at a time. The profile (lives/coins) is settled around session starts
//! and wins.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use goods_sort::core::{catalog, generate, ClearNotice, GameSession, LevelConfig, SecondTicker, SimpleRng};
use goods_sort::input::{map_key, should_quit};
use goods_sort::profile::PlayerProfile;
use goods_sort::term::{Screen, Selection, SessionView};
use goods_sort::types::{Status, UiAction, CLEAR_FLASH_MS};

#[derive(Parser, Debug)]
#[command(name = "goods-sort", about = "Terminal goods-sorting puzzle")]
struct Args {
    /// Level to play (1-50)
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Board generation seed; wall clock when omitted
    #[arg(long)]
    seed: Option<u32>,

    /// Player profile path
    #[arg(long, default_value = "goods-sort-profile.json")]
    profile: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config =
        catalog::level(args.level).ok_or_else(|| anyhow!("unknown level {}", args.level))?;

    let mut profile = PlayerProfile::load(&args.profile, now_secs())?;
    profile.regenerate(now_secs());

    let seed = args.seed.unwrap_or(now_secs() as u32);
    let mut rng = SimpleRng::new(seed);

    let mut session = start_session(&config, &mut rng, &mut profile, &args.profile)?;

    let mut screen = Screen::new();
    screen.enter()?;
    let result = run(
        &mut screen,
        &config,
        &mut rng,
        &mut profile,
        &args.profile,
        &mut session,
    );

    // Always try to restore terminal state.
    let _ = screen.exit();
    profile.save(&args.profile)?;
    result
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Session-start contract: a life is consumed up front and refunded when
/// generation fails; no session is exposed on failure.
fn start_session(
    config: &LevelConfig,
    rng: &mut SimpleRng,
    profile: &mut PlayerProfile,
    path: &Path,
) -> Result<GameSession> {
    if !profile.consume_life() {
        return Err(anyhow!("no lives left; wait for regeneration"));
    }
    match generate(config, rng) {
        Ok(session) => {
            profile.save(path)?;
            Ok(session)
        }
        Err(err) => {
            profile.refund_life();
            profile.save(path)?;
            Err(err).context("board generation failed")
        }
    }
}

fn run(
    screen: &mut Screen,
    config: &LevelConfig,
    rng: &mut SimpleRng,
    profile: &mut PlayerProfile,
    path: &Path,
    session: &mut GameSession,
) -> Result<()> {
    let view = SessionView;
    let mut selection = Selection::Idle;
    let mut ticker = SecondTicker::new();
    let mut last_update = Instant::now();
    let mut flash: Option<(ClearNotice, Instant)> = None;
    let mut win_settled = false;

    loop {
        if let Some((_, since)) = flash {
            if since.elapsed() >= Duration::from_millis(CLEAR_FLASH_MS) {
                flash = None;
            }
        }

        let rows = view.render(
            &session.snapshot(),
            selection,
            flash.as_ref().map(|(clear, _)| clear),
        );
        screen.draw(&rows)?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(UiAction::Cancel) => selection = Selection::Idle,
                        Some(UiAction::Restart) => {
                            *session = start_session(config, rng, profile, path)?;
                            selection = Selection::Idle;
                            ticker.reset();
                            flash = None;
                            win_settled = false;
                        }
                        Some(UiAction::Pick(pick)) => {
                            selection = advance_selection(selection, pick, session);
                        }
                        None => {}
                    }
                }
            }
        }

        // Timer driver: 1 Hz while playing, backlog discarded otherwise
        let elapsed_ms = last_update.elapsed().as_millis() as u64;
        last_update = Instant::now();
        if session.status().is_playing() {
            for _ in 0..ticker.advance(elapsed_ms) {
                session.tick();
                if !session.status().is_playing() {
                    break;
                }
            }
        } else {
            ticker.reset();
        }

        if let Some(clear) = session.take_last_clear() {
            flash = Some((clear, Instant::now()));
        }

        if session.status() == Status::Won && !win_settled {
            profile.award_win();
            profile.save(path)?;
            win_settled = true;
        }
    }
}

/// Three-pick move entry. Picks that do not resolve (bad shelf, empty slot)
/// leave the selection where it was; the final pick hands the move to the
/// session, where a rejection is a silent no-op.
fn advance_selection(selection: Selection, pick: usize, session: &mut GameSession) -> Selection {
    match selection {
        Selection::Idle => {
            if pick < session.board().shelf_count() {
                Selection::Source { shelf: pick }
            } else {
                Selection::Idle
            }
        }
        Selection::Source { shelf } => {
            let occupied = session
                .board()
                .shelf(shelf)
                .and_then(|s| s.get(pick))
                .flatten()
                .is_some();
            if occupied {
                Selection::SourceSlot { shelf, slot: pick }
            } else {
                Selection::Source { shelf }
            }
        }
        Selection::SourceSlot { shelf, slot } => {
            if pick < session.board().shelf_count() {
                session.apply_move(shelf, slot, pick);
                Selection::Idle
            } else {
                Selection::SourceSlot { shelf, slot }
            }
        }
    }
}
