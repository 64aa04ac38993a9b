use anyhow::{anyhow, Result};
use chrono::Local;
use rusqlite::Connection;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::config::AppConfig;
use crate::db::repository::{FactsRepo, GameRepo, MetaRepo, PetRepo, StatsRepo};
use crate::engine::{achievements, pet, scoring};
use crate::models::{DailyStats, GameKind, GameSession, PetRecord, DATE_FMT};
use crate::utils::format::{day_word, happiness_face, progress_bar};
use crate::utils::seen::SeenCache;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const SUN: &str = "\x1b[38;2;240;178;54m";

// ─── Setup ───────────────────────────────────────────────────────────────────

pub fn handle_setup(conn: &Connection, config: &mut AppConfig, reset: bool) -> Result<()> {
    if !reset {
        if let Some(done) = MetaRepo::get(conn, "setup_done")? {
            if done == "1" {
                println!("pollito is already configured. Use --reset to reconfigure.");
                return Ok(());
            }
        }
    }

    println!();
    println_colored!(SUN, "  ¡Hola! Let's set up pollito.");
    println!();

    let player = prompt(&format!(
        "  Player name [{}]: ",
        config.profile.player_name
    ))?;
    if !player.is_empty() {
        config.profile.player_name = player;
    }

    let pet_name = prompt(&format!("  Pet name [{}]: ", config.profile.pet_name))?;
    if !pet_name.is_empty() {
        config.profile.pet_name = pet_name;
    }

    config.save()?;
    MetaRepo::set(conn, "setup_done", "1")?;

    if reset {
        // Start the one-time hints over for the new player.
        SeenCache::load(conn)?.invalidate(conn)?;
    }

    println!();
    println_colored!(
        GREEN,
        "  ✓ Ready! {} is waiting for {}.",
        config.profile.pet_name,
        config.profile.player_name
    );
    println!();
    Ok(())
}

// ─── Log a game ──────────────────────────────────────────────────────────────

pub fn handle_log(
    conn: &Connection,
    game_str: &str,
    correct: u32,
    total: u32,
    seconds: Option<u32>,
    max_seconds: u32,
) -> Result<()> {
    let game = GameKind::from_str(game_str)
        .map_err(|_| anyhow!("Unknown game '{}'. Use: quiz, memory, foodsort, plate", game_str))?;
    if correct > total {
        return Err(anyhow!("correct ({}) cannot exceed total ({})", correct, total));
    }

    let today = Local::now().date_naive();
    let today_str = today.format(DATE_FMT).to_string();

    let before = FactsRepo::gather(conn, today)?;

    let time_bonus = seconds
        .map(|s| scoring::calculate_time_bonus(s, max_seconds))
        .unwrap_or(0);
    let score = scoring::calculate_score(correct, total, time_bonus);
    let perfect = total > 0 && correct == total;

    GameRepo::log_session(
        conn,
        &GameSession {
            id: None,
            game,
            date: today_str,
            correct,
            total,
            time_bonus,
            score,
            perfect,
        },
    )?;

    if perfect {
        println_colored!(GREEN, "  ★ {} — ¡perfecto! {} puntos", game, score);
    } else {
        println_colored!(GREEN, "  ✓ {} — {}/{} correct, {} puntos", game, correct, total, score);
    }
    if time_bonus > 0 {
        println_colored!(DIM, "    (includes +{} time bonus)", time_bonus);
    }

    let after = FactsRepo::gather(conn, today)?;

    // Announce fresh unlocks.
    let old = achievements::unlocked_names(&before);
    for name in achievements::unlocked_names(&after) {
        if !old.contains(&name) {
            println_colored!(SUN, "  🏆 ¡Logro desbloqueado: {}!", name);
        }
    }

    if pet::can_feed(&after) && !pet::can_feed(&before) {
        println_colored!(AMBER, "  ¡Señor Pollo está listo para comer! Run `pollito feed`.");
    } else if !after.fed_today {
        let left = pet::REQUIRED_GAMES_PER_DAY.saturating_sub(after.games_completed_today);
        if left > 0 {
            println_colored!(
                DIM,
                "  {} distinct game{} to go before feeding time.",
                left,
                if left == 1 { "" } else { "s" }
            );
        }
    }
    Ok(())
}

// ─── Feed ────────────────────────────────────────────────────────────────────

pub fn handle_feed(conn: &Connection, config: &AppConfig) -> Result<()> {
    let today = Local::now().date_naive();
    let pet_name = &config.profile.pet_name;

    let record = PetRepo::load(conn)?;
    let facts = FactsRepo::gather(conn, today)?;

    if facts.fed_today {
        println_colored!(DIM, "  {} already ate today. Come back tomorrow!", pet_name);
        return Ok(());
    }
    if !pet::can_feed(&facts) {
        let left = pet::REQUIRED_GAMES_PER_DAY - facts.games_completed_today;
        println_colored!(
            AMBER,
            "  {} is not ready yet — {} more distinct game{} today.",
            pet_name,
            left,
            if left == 1 { "" } else { "s" }
        );
        return Ok(());
    }

    let state = pet::feed(&facts, record.fed_day_before(today));
    PetRepo::save(
        conn,
        &PetRecord {
            happiness_level: state.happiness_level,
            current_streak: state.current_streak,
            longest_streak: state.longest_streak,
            last_fed_date: Some(today.format(DATE_FMT).to_string()),
        },
    )?;
    log::debug!("fed pet: {:?}", state);

    println!();
    println_colored!(GREEN, "  🐣 ¡Ñam ñam! {} {}", pet_name, happiness_face(state.happiness_level));
    println_colored!(
        BOLD,
        "  Felicidad: {}  {}%",
        progress_bar(state.happiness_level as u32, 100, 10),
        state.happiness_level
    );
    println_colored!(
        AMBER,
        "  Racha: {} {} (mejor: {})",
        state.current_streak,
        day_word(state.current_streak),
        state.longest_streak
    );

    // Feeding can push the bond badges over their thresholds.
    let old = achievements::unlocked_names(&facts);
    let after = FactsRepo::gather(conn, today)?;
    for name in achievements::unlocked_names(&after) {
        if !old.contains(&name) {
            println_colored!(SUN, "  🏆 ¡Logro desbloqueado: {}!", name);
        }
    }
    println!();
    Ok(())
}

// ─── Pet status ──────────────────────────────────────────────────────────────

pub fn handle_pet(conn: &Connection, config: &AppConfig) -> Result<()> {
    let today = Local::now().date_naive();
    let today_str = today.format(DATE_FMT).to_string();
    let facts = FactsRepo::gather(conn, today)?;
    let phase = pet::phase(&facts);

    println!();
    println_colored!(SUN, "  {}  {}", config.profile.pet_name, happiness_face(facts.happiness_level));
    println!();
    println_colored!(BOLD, "  Estado:    {}", phase);
    println_colored!(
        BOLD,
        "  Felicidad: {}  {}%",
        progress_bar(facts.happiness_level as u32, 100, 10),
        facts.happiness_level
    );
    println_colored!(
        AMBER,
        "  Racha:     {} {} (mejor: {})",
        facts.current_streak,
        day_word(facts.current_streak),
        facts.longest_streak
    );

    println!();
    let played = GameRepo::kinds_played_on(conn, &today_str)?;
    println_colored!(
        BOLD,
        "  Juegos de hoy:  {}/{}",
        facts.games_completed_today,
        pet::REQUIRED_GAMES_PER_DAY
    );
    for kind in GameKind::all() {
        if played.contains(&kind) {
            println_colored!(GREEN, "    ✓ {}", kind);
        } else {
            println_colored!(DIM, "    ○ {}", kind);
        }
    }
    println!();
    Ok(())
}

// ─── Achievements ────────────────────────────────────────────────────────────

pub fn handle_achievements(conn: &Connection) -> Result<()> {
    let today = Local::now().date_naive();
    let facts = FactsRepo::gather(conn, today)?;
    let grouped = achievements::evaluate_grouped(&facts);
    let unlocked: usize = grouped
        .iter()
        .flat_map(|(_, v)| v.iter())
        .filter(|s| s.unlocked)
        .count();

    println!();
    println_colored!(SUN, "  Logros  ({}/{})", unlocked, achievements::CATALOG.len());
    for (category, entries) in &grouped {
        println!();
        println_colored!(BOLD, "  {}", category.display_name());
        for status in entries {
            let a = status.achievement;
            if status.unlocked {
                println_colored!(GREEN, "    ✓ {:<22} {}", a.name, a.description);
            } else {
                println_colored!(DIM, "    ○ {:<22} {}", a.name, a.description);
            }
        }
    }
    println!();
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(conn: &Connection, week: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let today_str = today.format(DATE_FMT).to_string();
    let facts = FactsRepo::gather(conn, today)?;

    let level = scoring::level_for_score(facts.total_score);
    let title = scoring::level_title(level);
    let to_next = scoring::points_to_next_level(facts.total_score);

    println!();
    println_colored!(SUN, "  Estadísticas");
    println!();
    println_colored!(BOLD, "  Nivel {} — {}", level, title);
    println_colored!(DIM, "  {} puntos para el siguiente nivel", to_next);
    println!();
    println_colored!(BOLD, "  Juegos:    {}", facts.total_games_completed);
    println_colored!(BOLD, "  Puntos:    {}", facts.total_score);
    println_colored!(BOLD, "  Perfectos: {}", facts.perfect_games);
    println_colored!(
        AMBER,
        "  Racha:     {} {} (mejor: {})",
        facts.current_streak,
        day_word(facts.current_streak),
        facts.longest_streak
    );

    if week {
        let week_start = (today - chrono::Duration::days(6))
            .format(DATE_FMT)
            .to_string();
        let daily = StatsRepo::daily_games_range(conn, &week_start, &today_str)?;
        println!();
        println_colored!(DIM, "  Last 7 days  (● = 4+, ◕ = 2-3, ◑ = 1, ○ = 0)");
        println!();
        print!("  ");
        for day_offset in (0..7).rev() {
            let date = (today - chrono::Duration::days(day_offset))
                .format(DATE_FMT)
                .to_string();
            let games = daily
                .iter()
                .find(|d| d.date == date)
                .map(|d| d.games_done)
                .unwrap_or(0);
            let icon = match games {
                n if n >= 4 => format!("{}●\x1b[0m ", GREEN),
                2 | 3 => format!("{}◕\x1b[0m ", AMBER),
                1 => format!("{}◑\x1b[0m ", AMBER),
                _ => format!("{}○\x1b[0m ", DIM),
            };
            print!("{}", icon);
        }
        println!();
    }

    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct WeeklyReport<'a> {
    date: String,
    player: &'a str,
    pet: &'a str,
    level: u32,
    level_title: &'static str,
    total_games: u32,
    total_score: u32,
    perfect_games: u32,
    current_streak: u32,
    longest_streak: u32,
    happiness: u8,
    achievements_unlocked: Vec<&'static str>,
    week: Vec<DailyStats>,
}

pub fn handle_export(conn: &Connection, config: &AppConfig, json: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let today_str = today.format(DATE_FMT).to_string();
    let week_start = (today - chrono::Duration::days(6))
        .format(DATE_FMT)
        .to_string();

    let facts = FactsRepo::gather(conn, today)?;
    let daily = StatsRepo::daily_games_range(conn, &week_start, &today_str)?;
    let level = scoring::level_for_score(facts.total_score);

    if json {
        let report = WeeklyReport {
            date: today_str,
            player: &config.profile.player_name,
            pet: &config.profile.pet_name,
            level,
            level_title: scoring::level_title(level),
            total_games: facts.total_games_completed,
            total_score: facts.total_score,
            perfect_games: facts.perfect_games,
            current_streak: facts.current_streak,
            longest_streak: facts.longest_streak,
            happiness: facts.happiness_level,
            achievements_unlocked: achievements::unlocked_names(&facts),
            week: daily,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("# pollito — Resumen Semanal");
    println!("# {}", today_str);
    println!();
    println!("Player: {}", config.profile.player_name);
    println!("Pet:    {}", config.profile.pet_name);
    println!();
    println!("## Juegos (últimos 7 días)");
    for stat in &daily {
        let bar = match stat.games_done {
            n if n >= 4 => "████",
            3 => "███░",
            2 => "██░░",
            1 => "█░░░",
            _ => "░░░░",
        };
        println!("  {}  {}/4  {}", stat.date, stat.games_done.min(4), bar);
    }
    println!();
    println!("## Resumen");
    println!(
        "  Nivel:      {} ({})",
        level,
        scoring::level_title(level)
    );
    println!("  Puntos:     {}", facts.total_score);
    println!("  Juegos:     {} ({} perfectos)", facts.total_games_completed, facts.perfect_games);
    println!(
        "  Racha:      {} {} (mejor: {})",
        facts.current_streak,
        day_word(facts.current_streak),
        facts.longest_streak
    );
    println!(
        "  Logros:     {}/{}",
        achievements::unlocked_names(&facts).len(),
        achievements::CATALOG.len()
    );
    println!("  Felicidad:  {}%", facts.happiness_level);
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(buf.trim_end_matches('\n').trim_end_matches('\r').to_string())
}
