//! Turn orchestration: both players set up their fleets, then alternate
//! shots until one fleet is sunk.

use crate::board::{parse_endpoints, Board};
use crate::common::{PlaceError, ShotOutcome};
use crate::config::{NUM_SHIPS, SHIPS};
use crate::console::Console;
use crate::coord::Coord;
use crate::render::render_board;
use anyhow::Result;
use log::{debug, info};
use rand::rngs::SmallRng;

/// Phases of a match, in the order they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SetupP1,
    SetupP2,
    TurnP1,
    TurnP2,
    GameOver,
}

/// A full two-player match and its progress.
pub struct Game {
    boards: [Board; 2],
    phase: Phase,
    winner: Option<usize>,
    auto_place: bool,
}

/// Error line that replaces the prompt until the player gets it right.
fn reprompt(err: PlaceError) -> String {
    format!("Error! {} Try again:", err)
}

impl Game {
    /// `auto_place` lets an empty answer during setup place the ship
    /// randomly instead of re-prompting.
    pub fn new(auto_place: bool) -> Self {
        Game {
            boards: [Board::new(), Board::new()],
            phase: Phase::SetupP1,
            winner: None,
            auto_place,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Board of player 1 or 2.
    pub fn board(&self, player: usize) -> &Board {
        &self.boards[player - 1]
    }

    /// Winning player (1 or 2), once the match is over.
    pub fn winner(&self) -> Option<usize> {
        self.winner.map(|index| index + 1)
    }

    /// Play a full match on `console`. Blocks on input between moves and
    /// returns the winning player number.
    pub fn run<C: Console>(&mut self, console: &mut C, rng: &mut SmallRng) -> Result<usize> {
        loop {
            match self.phase {
                Phase::SetupP1 => {
                    self.setup(0, console, rng)?;
                    console.print_line("");
                    self.hand_off(console)?;
                    self.phase = Phase::SetupP2;
                }
                Phase::SetupP2 => {
                    self.setup(1, console, rng)?;
                    console.print_line("");
                    self.hand_off(console)?;
                    self.phase = Phase::TurnP1;
                }
                Phase::TurnP1 => self.turn(0, console)?,
                Phase::TurnP2 => self.turn(1, console)?,
                Phase::GameOver => {
                    console.print_line("");
                    console.print_line("Game Over");
                    let winner = self
                        .winner
                        .ok_or_else(|| anyhow::anyhow!("game over without a winner"))?;
                    info!("player {} wins", winner + 1);
                    return Ok(winner + 1);
                }
            }
        }
    }

    fn setup<C: Console>(&mut self, idx: usize, console: &mut C, rng: &mut SmallRng) -> Result<()> {
        debug!("setup: player {}", idx + 1);
        console.print_line(&format!(
            "Player {}, place your ships on the game field",
            idx + 1
        ));
        console.print_line("");
        console.print_line(&render_board(&self.boards[idx], false));
        for ship_index in 0..NUM_SHIPS {
            self.place_one(idx, ship_index, console, rng)?;
            console.print_line("");
            console.print_line(&render_board(&self.boards[idx], false));
        }
        Ok(())
    }

    /// Prompt until one ship is successfully placed.
    fn place_one<C: Console>(
        &mut self,
        idx: usize,
        ship_index: usize,
        console: &mut C,
        rng: &mut SmallRng,
    ) -> Result<()> {
        let def = SHIPS[ship_index];
        let mut prompt = format!(
            "Enter the coordinates of the {} ({} cells):",
            def.name(),
            def.length()
        );
        loop {
            console.print_line("");
            console.print_line(&prompt);
            console.print_line("");
            let line = console.read_line()?;
            if self.auto_place && line.trim().is_empty() {
                match self.boards[idx].random_placement(rng, ship_index) {
                    Some((a, b)) => match self.boards[idx].place_ship(ship_index, a, b) {
                        Ok(()) => return Ok(()),
                        Err(err) => prompt = reprompt(err),
                    },
                    None => {
                        prompt =
                            String::from("No room left for automatic placement, enter the coordinates:");
                    }
                }
                continue;
            }
            match parse_endpoints(&line)
                .and_then(|(a, b)| self.boards[idx].place_ship(ship_index, a, b))
            {
                Ok(()) => return Ok(()),
                Err(err) => prompt = reprompt(err),
            }
        }
    }

    /// One firing turn: show both boards, take a shot, report it and
    /// either pass the move or end the game.
    fn turn<C: Console>(&mut self, attacker: usize, console: &mut C) -> Result<()> {
        let defender = 1 - attacker;
        console.print_line(&render_board(&self.boards[defender], true));
        console.print_line("---------------------");
        console.print_line(&render_board(&self.boards[attacker], false));

        let mut prompt = format!("Player {}, it's your turn:", attacker + 1);
        let target = loop {
            console.print_line("");
            console.print_line(&prompt);
            console.print_line("");
            let line = console.read_line()?;
            match Coord::parse(line.trim()) {
                Some(at) => break at,
                None => prompt = reprompt(PlaceError::BadCoordinates),
            }
        };

        let outcome = self.boards[defender].fire(target);
        debug!("player {} fired at {}: {:?}", attacker + 1, target, outcome);
        console.print_line("");
        match outcome {
            ShotOutcome::Miss => console.print_line("You missed!"),
            ShotOutcome::Hit => console.print_line("You hit a ship!"),
            ShotOutcome::Sunk => console.print_line("You sank a ship!"),
            ShotOutcome::Won => {
                console.print_line("You sank a ship!");
                console.print_line("You sank the last ship. You won. Congratulations!");
            }
        }

        if outcome == ShotOutcome::Won {
            self.winner = Some(attacker);
            self.phase = Phase::GameOver;
        } else {
            self.hand_off(console)?;
            self.phase = if attacker == 0 {
                Phase::TurnP2
            } else {
                Phase::TurnP1
            };
        }
        Ok(())
    }

    /// Wait for Enter, then clear the screen so the next player cannot
    /// see the previous one's board.
    fn hand_off<C: Console>(&self, console: &mut C) -> Result<()> {
        console.print_line("Press Enter and pass the move to another player");
        console.read_line()?;
        console.clear_screen();
        Ok(())
    }
}
