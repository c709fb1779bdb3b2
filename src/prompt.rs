use std::io::{self, BufRead, Write};

use log::debug;

use crate::grid::Grid;

pub const PROMPT: &str = "Initial configuration: ";

/// Asks for a grid until the input is valid.
///
/// Returns `Ok(None)` when the input ends before a valid grid is entered.
pub fn read_grid<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Option<Grid>> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input ended");
            return Ok(None);
        }

        match line.parse::<Grid>() {
            Ok(grid) => return Ok(Some(grid)),
            Err(err) => {
                debug!("Rejected input {:?}: {}", line.trim_end(), err);
                writeln!(
                    output,
                    "Invalid input: {}. Enter nine numbers 0-8 separated by spaces, each exactly once.",
                    err
                )?;
            }
        }
    }
}
