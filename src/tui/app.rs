use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::repository::{FactsRepo, GameRepo, PetRepo, StatsRepo};
use crate::engine::achievements::{self, AchievementStatus, Category};
use crate::engine::{pet, scoring};
use crate::models::{DailyActivityFacts, DailyStats, GameKind, PetPhase, PetRecord, DATE_FMT};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{games, header, logros, pet as pet_widget, statusbar, streak};
use crate::utils::format::day_word;
use crate::utils::seen::SeenCache;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Achievements,
    Stats,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub should_quit: bool,
    pub logros_scroll: u16,
    pub flash: Option<String>, // one-line feedback after actions
    pub show_hint: bool,       // first-visit hint popup
    pub seen: SeenCache,

    // Cached state (refreshed on action/rollover)
    pub today_str: String,
    pub facts: DailyActivityFacts,
    pub phase: PetPhase,
    pub played: Vec<GameKind>,
    pub weekly_grid: Vec<DailyStats>,
    pub grouped: Vec<(Category, Vec<AchievementStatus>)>,
    pub level: u32,
}

impl App {
    pub fn new(config: AppConfig, seen: SeenCache) -> Self {
        let today_str = Local::now().date_naive().format(DATE_FMT).to_string();
        let show_hint = config.display.hints && !seen.seen("dashboard");

        App {
            view: View::Dashboard,
            config,
            should_quit: false,
            logros_scroll: 0,
            flash: None,
            show_hint,
            seen,
            today_str,
            facts: DailyActivityFacts::default(),
            phase: PetPhase::Hungry,
            played: Vec::new(),
            weekly_grid: Vec::new(),
            grouped: Vec::new(),
            level: 1,
        }
    }

    pub fn load(&mut self, conn: &Connection) -> Result<()> {
        let today = Local::now().date_naive();
        self.today_str = today.format(DATE_FMT).to_string();

        self.facts = FactsRepo::gather(conn, today)?;
        self.phase = pet::phase(&self.facts);
        self.played = GameRepo::kinds_played_on(conn, &self.today_str)?;
        self.grouped = achievements::evaluate_grouped(&self.facts);
        self.level = scoring::level_for_score(self.facts.total_score);

        // Last 7 days, oldest first, zero-filled for quiet days.
        let week_start = (today - chrono::Duration::days(6))
            .format(DATE_FMT)
            .to_string();
        let rows = StatsRepo::daily_games_range(conn, &week_start, &self.today_str)?;
        self.weekly_grid = (0..7)
            .rev()
            .map(|offset| {
                let date = (today - chrono::Duration::days(offset))
                    .format(DATE_FMT)
                    .to_string();
                let games_done = rows
                    .iter()
                    .find(|r| r.date == date)
                    .map(|r| r.games_done)
                    .unwrap_or(0);
                DailyStats { date, games_done }
            })
            .collect();

        Ok(())
    }

    /// Reload everything when the local day rolls over underneath us.
    pub fn tick(&mut self, conn: &Connection) {
        let now_str = Local::now().date_naive().format(DATE_FMT).to_string();
        if now_str != self.today_str {
            let _ = self.load(conn);
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        // Only handle actual key presses, not release/repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }

        // First-visit hint: any key dismisses it.
        if self.show_hint {
            self.show_hint = false;
            let _ = self.seen.mark(conn, "dashboard");
            return;
        }

        match self.view {
            View::Dashboard => self.handle_dashboard_key(key, conn),
            View::Achievements => self.handle_achievements_key(key),
            View::Stats => self.handle_stats_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('f') => {
                self.feed_pet(conn);
            }
            KeyCode::Char('a') => {
                self.view = View::Achievements;
                self.logros_scroll = 0;
            }
            KeyCode::Char('s') => {
                self.view = View::Stats;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            _ => {}
        }
    }

    fn handle_achievements_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('a') => {
                self.view = View::Dashboard;
            }
            KeyCode::Up => {
                self.logros_scroll = self.logros_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                // Grouped list is ~30 lines; cap generously.
                if self.logros_scroll < 32 {
                    self.logros_scroll += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn feed_pet(&mut self, conn: &Connection) {
        let pet_name = self.config.profile.pet_name.clone();

        if self.facts.fed_today {
            self.flash = Some(format!("{} ya comió hoy", pet_name));
            return;
        }
        if !pet::can_feed(&self.facts) {
            let left = pet::REQUIRED_GAMES_PER_DAY - self.facts.games_completed_today;
            self.flash = Some(format!(
                "Faltan {} juego{} para alimentar a {}",
                left,
                if left == 1 { "" } else { "s" },
                pet_name
            ));
            return;
        }

        let today = Local::now().date_naive();
        let record = match PetRepo::load(conn) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("pet row read failed: {e}");
                self.flash = Some("No se pudo leer la mascota — intenta otra vez".to_string());
                return;
            }
        };
        let state = pet::feed(&self.facts, record.fed_day_before(today));
        let saved = PetRepo::save(
            conn,
            &PetRecord {
                happiness_level: state.happiness_level,
                current_streak: state.current_streak,
                longest_streak: state.longest_streak,
                last_fed_date: Some(self.today_str.clone()),
            },
        );
        if saved.is_err() {
            self.flash = Some("No se pudo guardar — intenta otra vez".to_string());
            return;
        }

        self.flash = Some(format!(
            "¡Ñam ñam! {} — felicidad {}%, racha {} {}",
            pet_name,
            state.happiness_level,
            state.current_streak,
            day_word(state.current_streak)
        ));
        let _ = self.load(conn);
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Achievements => self.draw_achievements(frame),
            View::Stats => self.draw_stats(frame),
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }

        if self.show_hint {
            self.draw_hint_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // flash
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            &self.config.profile.player_name,
            self.level,
            scoring::level_title(self.level),
        );

        if let Some(flash) = &self.flash {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("  {}", flash),
                    theme::sun().add_modifier(Modifier::BOLD),
                ))),
                outer_chunks[2],
            );
        }
        statusbar::render(frame, outer_chunks[3], &self.view);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer_chunks[1]);

        pet_widget::render(
            frame,
            columns[0],
            &self.config.profile.pet_name,
            &self.facts,
            self.phase,
        );

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),  // games
                Constraint::Length(10), // streak
                Constraint::Min(0),
            ])
            .split(columns[1]);

        games::render(
            frame,
            right_chunks[0],
            &self.played,
            self.facts.games_completed_today,
        );
        streak::render(
            frame,
            right_chunks[1],
            self.facts.current_streak,
            self.facts.longest_streak,
            &self.weekly_grid,
        );
    }

    fn draw_achievements(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        logros::render(frame, chunks[0], &self.grouped, self.logros_scroll);
        statusbar::render(frame, chunks[1], &self.view);
    }

    fn draw_stats(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("  Estadísticas  ", theme::sun().add_modifier(Modifier::BOLD)),
            Span::styled("  [Esc] back", theme::dim()),
        ]));
        frame.render_widget(title, chunks[0]);

        let to_next = scoring::points_to_next_level(self.facts.total_score);
        let mut all_lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Nivel:             ", theme::dim()),
                Span::styled(
                    format!("{} — {}", self.level, scoring::level_title(self.level)),
                    theme::sun().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Al siguiente:      ", theme::dim()),
                Span::styled(format!("{} puntos", to_next), theme::dim()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Juegos:            ", theme::dim()),
                Span::styled(
                    format!("{}", self.facts.total_games_completed),
                    theme::orange(),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Puntos:            ", theme::dim()),
                Span::styled(format!("{}", self.facts.total_score), theme::orange()),
            ]),
            Line::from(vec![
                Span::styled("  Perfectos:         ", theme::dim()),
                Span::styled(format!("{}", self.facts.perfect_games), theme::orange()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Racha actual:      ", theme::dim()),
                Span::styled(
                    format!(
                        "{} {}",
                        self.facts.current_streak,
                        day_word(self.facts.current_streak)
                    ),
                    theme::green().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Mejor racha:       ", theme::dim()),
                Span::styled(
                    format!(
                        "{} {}",
                        self.facts.longest_streak,
                        day_word(self.facts.longest_streak)
                    ),
                    theme::green(),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled("  Últimos 7 días", theme::sun())),
            Line::from(""),
        ];

        for stat in &self.weekly_grid {
            let icon = match stat.games_done {
                n if n >= 4 => Span::styled("  ████████████  ", theme::green()),
                3 => Span::styled("  █████████░░░  ", theme::orange()),
                2 => Span::styled("  ██████░░░░░░  ", theme::orange()),
                1 => Span::styled("  ███░░░░░░░░░  ", theme::dim()),
                _ => Span::styled("  ░░░░░░░░░░░░  ", theme::dim()),
            };
            all_lines.push(Line::from(vec![
                icon,
                Span::styled(
                    format!("{}  {}/4", stat.date, stat.games_done.min(4)),
                    theme::dim(),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(all_lines), chunks[1]);
        statusbar::render(frame, chunks[2], &self.view);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).min(14),
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::sun().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [f]    ", theme::sun()),
                Span::styled("Feed the pet", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [a]    ", theme::sun()),
                Span::styled("Achievements", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [s]    ", theme::sun()),
                Span::styled("Stats view", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]    ", theme::sun()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]  ", theme::sun()),
                Span::styled("Quit", theme::dim()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Log games with `pollito log <game> ...`",
                theme::dim(),
            )),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::sun()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::sun())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_hint_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 3,
            width: area.width / 2,
            height: 7,
        };

        frame.render_widget(Clear, popup_area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "  Completa los {} juegos del día para",
                    pet::REQUIRED_GAMES_PER_DAY
                ),
                theme::bold(),
            )),
            Line::from(Span::styled(
                format!("  alimentar a {}.", self.config.profile.pet_name),
                theme::bold(),
            )),
            Line::from(""),
            Line::from(Span::styled("  [any key] ¡vamos!", theme::dim())),
        ];

        let block = Block::default()
            .title(Span::styled(" ¡Bienvenido! ", theme::sun()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::sun())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let seen = SeenCache::load(&conn)?;
    let mut app = App::new(config, seen);
    app.load(&conn)?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(500);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, &conn);
                if app.should_quit {
                    break;
                }
            }
            Event::Resize => {}
            Event::Tick => {
                app.tick(&conn);
            }
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().expect("tempdir");
        let conn = Connection::open(dir.path().join("pollito.db")).expect("open db");
        run_migrations(&conn).expect("migrations");
        (dir, conn)
    }

    fn ready_app(conn: &Connection) -> App {
        let seen = SeenCache::load(conn).expect("seen cache");
        let mut app = App::new(AppConfig::default(), seen);
        app.load(conn).expect("load");
        app.facts.games_completed_today = pet::REQUIRED_GAMES_PER_DAY;
        app
    }

    #[test]
    fn feed_key_persists_and_reloads() {
        let (_dir, conn) = test_db();
        let mut app = ready_app(&conn);

        app.feed_pet(&conn);

        let record = PetRepo::load(&conn).unwrap();
        assert_eq!(record.happiness_level, 20);
        assert_eq!(record.current_streak, 1);
        assert!(app.facts.fed_today);
        assert!(app.flash.as_deref().unwrap_or("").contains("Ñam"));
    }

    #[test]
    fn feed_surfaces_a_failed_pet_read() {
        let (_dir, conn) = test_db();
        let mut app = ready_app(&conn);
        let streak_before = app.facts.current_streak;

        // Simulate a broken store: the singleton pet row is gone.
        conn.execute("DELETE FROM pet", []).unwrap();
        app.feed_pet(&conn);

        let flash = app.flash.as_deref().unwrap_or("");
        assert!(flash.contains("No se pudo leer"), "flash: {}", flash);
        assert!(!app.facts.fed_today);
        assert_eq!(app.facts.current_streak, streak_before);
    }
}
