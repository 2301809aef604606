//! Line-oriented interactive session
//!
//! Reads specifications from any `BufRead`, writes prompts and results to any
//! `Write`. The binary wires this to stdin/stdout; tests use in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::coords::Coordinate;
use crate::error::{Error, Result};
use crate::placement::{Placement, Setup};
use crate::scan::AttackReport;

pub const INTRO: &str = "This program will model a filled in chess board, with input pieces and an input target.\n\
If the input pieces can attack the target, they are listed after the board is displayed \
(disregarding other pieces that may be in the way)";

pub const PROMPT: &str = "Input a type of piece, column letter, and row number. (Ex. Qb2). \
Input a target (type X) to end the input stage: ";

pub const INVALID_MESSAGE: &str = "Please enter a valid piece type, column letter, and row number. \
It must be in a position where there are no other pieces.";

pub const ATTACKERS_HEADER: &str = "The following pieces can attack the target position:";

pub struct Session<R, W> {
    input: R,
    output: W,
    setup: Setup,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            setup: Setup::new(),
        }
    }

    /// Places pieces, then prints the board and the attackers.
    pub fn run(&mut self) -> Result<AttackReport> {
        let target = self.place_pieces()?;
        self.report(target)
    }

    /// Keeps prompting until the target marker is placed.
    pub fn place_pieces(&mut self) -> Result<Coordinate> {
        loop {
            self.write(PROMPT)?;
            let bytes = self.read_line()?.ok_or(Error::InputClosed)?;
            writeln!(self.output)?;

            let outcome = match String::from_utf8(bytes) {
                Ok(line) => self.setup.submit(&line),
                Err(e) => {
                    let lossy = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                    warn!(input = %lossy, "specification is not valid UTF-8");
                    Err(Error::MalformedSpecification(lossy))
                }
            };

            match outcome {
                Ok(Placement::Placed(_)) => {}
                Ok(Placement::Target(target)) => return Ok(target),
                Err(e @ Error::CountCapExceeded { .. }) => {
                    writeln!(self.output, "{}\n", e)?;
                }
                Err(e) if e.is_rejection() => {
                    writeln!(self.output, "{}\n", INVALID_MESSAGE)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Prints the board followed by one identifier per attacking piece.
    pub fn report(&mut self, target: Coordinate) -> Result<AttackReport> {
        let report = AttackReport::new(self.setup.board(), target);
        info!(
            target_square = %target,
            attackers = report.attackers.len(),
            "scan complete"
        );

        write!(self.output, "{}", self.setup.board())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", ATTACKERS_HEADER)?;
        write!(self.output, "{}", report)?;
        self.output.flush()?;

        Ok(report)
    }

    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Raw bytes of the next line, `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
