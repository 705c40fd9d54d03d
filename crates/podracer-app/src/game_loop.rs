//! Control loop: one observation in, one command line out, until EOF.
//!
//! Runs on the calling thread. A tick whose input cannot be parsed still
//! produces a line (the solver's fallback move), so the game never waits on us.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{trace, warn};

use podracer_nav::NavigationSolver;

use crate::input;

/// Drive `solver` from `reader` until end of input. Returns the tick count.
pub fn run<R: BufRead, W: Write>(
    solver: &mut NavigationSolver,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<u64> {
    let mut ticks = 0;

    while let Some(parsed) = input::read_tick(&mut reader).context("reading observation")? {
        let mv = match parsed {
            Ok(obs) => solver.step(&obs),
            Err(err) => {
                warn!(%err, "malformed input, emitting fallback move");
                solver.fallback_move()
            }
        };

        writeln!(writer, "{mv}").context("writing command")?;
        writer.flush().context("flushing command")?;
        ticks += 1;

        if tracing::enabled!(tracing::Level::TRACE) {
            let snapshot = serde_json::to_string(&solver.snapshot())?;
            trace!(%snapshot, "race state");
        }
    }

    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use podracer_core::config::SolverConfig;
    use std::io::Cursor;

    fn solver() -> NavigationSolver {
        NavigationSolver::new(SolverConfig {
            seed: Some(1),
            ..Default::default()
        })
    }

    #[test]
    fn test_one_line_per_tick() {
        let input = "0 0 1000 0 1000 0\n5000 5000\n100 0 1000 0 900 0\n5000 5000\n";
        let mut out = Vec::new();
        let ticks = run(&mut solver(), Cursor::new(input), &mut out).unwrap();

        assert_eq!(ticks, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "1000 0 100\n1000 0 100\n");
    }

    #[test]
    fn test_empty_input_runs_zero_ticks() {
        let mut out = Vec::new();
        assert_eq!(run(&mut solver(), Cursor::new(""), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
