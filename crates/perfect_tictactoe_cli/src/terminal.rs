//! Line-oriented terminal front-end.
//!
//! Reads moves from any `BufRead` and writes the board to any `Write`,
//! so a session can be driven by stdin or by a test script.

use crate::config::EngineConfig;
use crate::game::{Game, GameTransition, InProgress};
use crate::scoreboard::Scoreboard;
use anyhow::Result;
use perfect_tictactoe::{Board, Line, Outcome, Player, Position, Searcher, Square};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Parses a move typed by the player: `1`-`9` or a position label.
pub fn parse_move(input: &str) -> Option<Position> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(n) if (1..=9).contains(&n) => Position::from_index(n - 1),
        Ok(_) => None,
        Err(_) => Position::from_label(input),
    }
}

/// Renders the board, bracketing the cells of `highlight`.
///
/// Empty cells show the number that selects them.
pub fn render(board: &Board, highlight: Option<Line>) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_index(row * 3 + col))
                .map(|pos| {
                    let mark = match board.get(pos) {
                        Square::Empty => (pos.to_index() + 1).to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    if highlight.is_some_and(|line| line.contains(pos)) {
                        format!("[{mark}]")
                    } else {
                        format!(" {mark} ")
                    }
                })
                .collect();
            cells.join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Plays games until the player quits, returning the tally.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &EngineConfig,
) -> Result<Scoreboard> {
    let searcher = Searcher::new(*config.search());
    let mut scoreboard = Scoreboard::new();

    loop {
        let Some(outcome) = play_game(&mut input, &mut output, config, &searcher)? else {
            break;
        };
        scoreboard.record(&outcome);
        info!(outcome = %outcome, games = scoreboard.games(), "Game finished");
        writeln!(output, "{scoreboard}")?;

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    writeln!(output, "Thanks for playing. {scoreboard}")?;
    Ok(scoreboard)
}

/// Plays one game. Returns `None` if the player quits or input ends.
fn play_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &EngineConfig,
    searcher: &Searcher,
) -> Result<Option<Outcome>> {
    let first = if *config.human_first() {
        Player::X
    } else {
        Player::O
    };
    let mut game = Game::<InProgress>::new(first);

    loop {
        let transition = match game.to_move() {
            Player::X => {
                writeln!(output, "\n{}\n", render(game.board(), None))?;
                write!(output, "Your turn - you are X (1-9, q to quit): ")?;
                output.flush()?;

                let Some(line) = read_line(input)? else {
                    return Ok(None);
                };
                if line.trim().eq_ignore_ascii_case("q") {
                    return Ok(None);
                }
                let Some(pos) = parse_move(&line) else {
                    writeln!(output, "Enter a number from 1 to 9 or a square name.")?;
                    continue;
                };
                match game.clone().place(pos) {
                    Ok(transition) => transition,
                    Err(e) => {
                        writeln!(output, "{e}")?;
                        continue;
                    }
                }
            }
            Player::O => {
                writeln!(output, "AI is thinking...")?;
                std::thread::sleep(config.computer_delay());
                let (pos, transition) = game.play_computer(searcher)?;
                writeln!(output, "Computer plays {pos}")?;
                transition
            }
        };

        game = match transition {
            GameTransition::InProgress(next) => next,
            GameTransition::Won(won) => {
                writeln!(output, "\n{}\n", render(won.board(), Some(won.line())))?;
                writeln!(output, "{} WINS! ({})", won.winner(), won.line())?;
                debug!(history = ?won.history(), "Game won");
                return Ok(Some(Outcome::Win {
                    player: won.winner(),
                    line: won.line(),
                }));
            }
            GameTransition::Draw(draw) => {
                writeln!(output, "\n{}\n", render(draw.board(), None))?;
                writeln!(output, "It's a Draw!")?;
                debug!(history = ?draw.history(), "Game drawn");
                return Ok(Some(Outcome::Draw));
            }
        };
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
