use std::io::{self, BufRead, Write};

use gomoku_common::games::SessionRng;
use gomoku_common::games::gomoku::{GameOutcome, GomokuSession, Move, MoveRejection, StrategyKind};
use gomoku_common::log;
use gomoku_common::persistence::{GameStats, SavedGameStore, StatsStore};
use gomoku_common::storage::ContentProvider;

use crate::command::{Command, HELP_TEXT, parse_command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub rows: usize,
    pub cols: usize,
    pub bot: StrategyKind,
    /// Fixed seed for reproducible games; each new game offsets it by the game index.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App<S: ContentProvider, G: ContentProvider> {
    settings: GameSettings,
    session: GomokuSession,
    games_started: u64,
    stats: GameStats,
    stats_recorded: bool,
    stats_store: StatsStore<S>,
    saved_games: SavedGameStore<G>,
}

impl<S: ContentProvider, G: ContentProvider> App<S, G> {
    pub fn new(
        settings: GameSettings,
        stats_store: StatsStore<S>,
        saved_games: SavedGameStore<G>,
    ) -> Result<Self, String> {
        let stats = stats_store.load()?;
        let session = start_session(&settings, 0)?;

        Ok(Self {
            settings,
            session,
            games_started: 1,
            stats,
            stats_recorded: false,
            stats_store,
            saved_games,
        })
    }

    #[cfg(test)]
    pub fn session(&self) -> &GomokuSession {
        &self.session
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
        writeln!(
            output,
            "Gomoku - {}x{}. {}",
            self.settings.rows, self.settings.cols, HELP_TEXT
        )?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let flow = match parse_command(&line) {
                Ok(Some(command)) => self.handle(command, output)?,
                Ok(None) => Flow::Continue,
                Err(message) => {
                    writeln!(output, "{}", message)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
            write!(output, "> ")?;
            output.flush()?;
        }

        Ok(())
    }

    pub fn handle(&mut self, command: Command, output: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Help => writeln!(output, "{}", HELP_TEXT)?,
            Command::Show => write!(output, "{}", self.session.render())?,
            Command::Stats => writeln!(output, "{}", self.stats)?,
            Command::Move { row, col } => self.handle_move(row, col, output)?,
            Command::Ai => self.handle_ai(output)?,
            Command::Save => self.handle_save(output)?,
            Command::Saved => self.handle_saved(output)?,
            Command::New => self.handle_new(output)?,
            Command::Exit => {
                writeln!(output, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_move(&mut self, row: usize, col: usize, output: &mut impl Write) -> io::Result<()> {
        let Some(mv) = Move::from_one_based(row, col) else {
            return writeln!(output, "Invalid move: coordinates start at 1");
        };

        match self.session.apply_first_move(mv) {
            Ok(report) => {
                write!(output, "Move accepted\n{}", self.session.render())?;
                if report.outcome.is_terminal() {
                    return self.finish_game(report.outcome, output);
                }
                self.handle_ai(output)
            }
            Err(MoveRejection::GameOver) => {
                writeln!(output, "Game is over. Type 'new' to play again.")
            }
            Err(rejection) => writeln!(output, "Invalid move: {}", rejection),
        }
    }

    fn handle_ai(&mut self, output: &mut impl Write) -> io::Result<()> {
        match self.session.apply_second_move() {
            Ok(report) => {
                write!(output, "AI moved at {}\n{}", report.mv, self.session.render())?;
                if report.outcome.is_terminal() {
                    return self.finish_game(report.outcome, output);
                }
                Ok(())
            }
            Err(MoveRejection::GameOver) => {
                writeln!(output, "Game is over. Type 'new' to play again.")
            }
            Err(rejection) => writeln!(output, "AI cannot move: {}", rejection),
        }
    }

    fn finish_game(&mut self, outcome: GameOutcome, output: &mut impl Write) -> io::Result<()> {
        writeln!(output, "Game over: {}", outcome)?;
        if let Some(line) = self.session.winning_line() {
            writeln!(output, "Winning line: {} to {}", line.start, line.end)?;
        }

        if self.stats_recorded {
            return Ok(());
        }
        self.stats_recorded = true;
        self.stats = self.stats.record(outcome);

        match self.stats_store.save(&self.stats) {
            Ok(()) => writeln!(output, "Saved stats: {}", self.stats),
            Err(e) => {
                log!("Failed to save stats: {}", e);
                writeln!(output, "Failed to save stats: {}", e)
            }
        }
    }

    fn handle_save(&mut self, output: &mut impl Write) -> io::Result<()> {
        let board = self.session.board();
        let moves = self.session.move_list();
        let outcome = self.session.outcome();

        match self.saved_games.save(board.rows(), board.cols(), &moves, outcome) {
            Ok(id) => {
                log!("Saved game {} result={} moves={}", id, outcome, moves);
                writeln!(output, "Saved game id: {}", id)
            }
            Err(e) => {
                log!("Failed to save game: {}", e);
                writeln!(output, "Failed to save game: {}", e)
            }
        }
    }

    fn handle_saved(&self, output: &mut impl Write) -> io::Result<()> {
        match self.saved_games.list_all() {
            Ok(games) if games.is_empty() => writeln!(output, "No saved games"),
            Ok(games) => {
                for game in games {
                    writeln!(output, "{}", game)?;
                }
                Ok(())
            }
            Err(e) => writeln!(output, "Failed to load saved games: {}", e),
        }
    }

    fn handle_new(&mut self, output: &mut impl Write) -> io::Result<()> {
        match start_session(&self.settings, self.games_started) {
            Ok(session) => {
                self.session = session;
                self.games_started += 1;
                self.stats_recorded = false;
                write!(output, "New game\n{}", self.session.render())
            }
            Err(e) => writeln!(output, "Failed to start a new game: {}", e),
        }
    }
}

fn start_session(settings: &GameSettings, game_index: u64) -> Result<GomokuSession, String> {
    let rng = match settings.seed {
        Some(seed) => SessionRng::new(seed.wrapping_add(game_index)),
        None => SessionRng::from_random(),
    };
    GomokuSession::new_game(settings.rows, settings.cols, settings.bot.build(), rng)
        .map_err(|e| e.to_string())
}
