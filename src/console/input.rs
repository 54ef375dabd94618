//! Reading moves and answers from a line-oriented console.

use crate::game::{Cell, InputError, MoveSource};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Why a typed move was rejected.
///
/// All kinds are recovered by prompting again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveInputError {
    /// The input is not a number.
    #[display("'{}' is not a number. Please input a number between 1 and 9", input)]
    InvalidMoveFormat {
        /// The trimmed text that was typed.
        input: String,
    },

    /// The number is outside 1-9.
    #[display("{} is out of range. Please input a number between 1 and 9", value)]
    MoveOutOfRange {
        /// The number that was typed.
        value: i64,
    },

    /// The cell already holds a mark.
    #[display(
        "Box {} is already occupied. Please look at the board and input an index position that is free",
        cell
    )]
    CellOccupied {
        /// The occupied cell.
        cell: Cell,
    },
}

/// Parses one typed move against the cells already played.
#[instrument]
pub fn parse_move(raw: &str, occupied: &[Cell]) -> Result<Cell, MoveInputError> {
    let input = raw.trim();
    let value: i64 = input
        .parse()
        .map_err(|_| MoveInputError::InvalidMoveFormat {
            input: input.to_string(),
        })?;
    let cell = Cell::new(value).map_err(|e| MoveInputError::MoveOutOfRange { value: e.value })?;
    if occupied.contains(&cell) {
        return Err(MoveInputError::CellOccupied { cell });
    }
    Ok(cell)
}

/// Line-oriented console over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `prompt` and reads one line, without its line ending.
    ///
    /// Returns [`InputError::Closed`] at end of input.
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Input reached end of stream");
            return Err(InputError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> std::io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Asks until a free cell is typed.
    #[instrument(skip(self))]
    pub fn prompt_move(&mut self, occupied: &[Cell], player_name: &str) -> Result<Cell, InputError> {
        let prompt = format!(
            "{player_name}'s turn: Please choose your next move - index position, \
             remember that it must be a number between 1 and 9, and that the box must be available: "
        );
        loop {
            let line = self.ask(&prompt)?;
            match parse_move(&line, occupied) {
                Ok(cell) => return Ok(cell),
                Err(e) => {
                    debug!(error = %e, "Move rejected, prompting again");
                    self.say(&e)?;
                }
            }
        }
    }

    /// Returns the writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    fn choose_move(&mut self, occupied: &[Cell], player_name: &str) -> Result<Cell, InputError> {
        self.prompt_move(occupied, player_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cell(n: i64) -> Cell {
        Cell::new(n).expect("valid cell")
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_move_kinds() {
        assert_eq!(parse_move(" 5 \n", &[]), Ok(cell(5)));
        assert!(matches!(
            parse_move("abc", &[]),
            Err(MoveInputError::InvalidMoveFormat { .. })
        ));
        assert_eq!(
            parse_move("10", &[]),
            Err(MoveInputError::MoveOutOfRange { value: 10 })
        );
        assert_eq!(
            parse_move("0", &[]),
            Err(MoveInputError::MoveOutOfRange { value: 0 })
        );
        assert_eq!(
            parse_move("5", &[cell(5)]),
            Err(MoveInputError::CellOccupied { cell: cell(5) })
        );
    }

    #[test]
    fn test_non_numeric_then_valid() {
        let mut console = console("abc\n5\n");
        assert_eq!(console.prompt_move(&[], "Ana").ok(), Some(cell(5)));

        let output = String::from_utf8(console.into_writer()).expect("utf8");
        assert!(output.contains("'abc' is not a number"));
        assert_eq!(output.matches("Ana's turn").count(), 2);
    }

    #[test]
    fn test_occupied_then_valid() {
        let mut console = console("5\n7\n");
        assert_eq!(console.prompt_move(&[cell(5)], "Ana").ok(), Some(cell(7)));

        let output = String::from_utf8(console.into_writer()).expect("utf8");
        assert!(output.contains("Box 5 is already occupied"));
    }

    #[test]
    fn test_out_of_range_then_valid() {
        let mut console = console("12\n-1\n9\n");
        assert_eq!(console.prompt_move(&[], "Ana").ok(), Some(cell(9)));

        let output = String::from_utf8(console.into_writer()).expect("utf8");
        assert_eq!(output.matches("out of range").count(), 2);
    }

    #[test]
    fn test_end_of_input_is_closed() {
        let mut console = console("abc\n");
        assert!(matches!(
            console.prompt_move(&[], "Ana"),
            Err(InputError::Closed)
        ));
    }
}
