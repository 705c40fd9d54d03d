//! Per-tick input parsing.
//!
//! Each tick is two lines: `x y cpx cpy dist angle`, then `ox oy`.

use std::io::{self, BufRead};

use podracer_core::error::PodError;
use podracer_core::types::{Observation, Position};

const POD_FIELDS: [&str; 6] = [
    "x",
    "y",
    "checkpoint_x",
    "checkpoint_y",
    "checkpoint_distance",
    "checkpoint_angle",
];
const OPPONENT_FIELDS: [&str; 2] = ["opponent_x", "opponent_y"];

/// Read one tick. `Ok(None)` means the input stream has ended.
///
/// Only I/O failures are errors here; undecodable or unparsable lines come
/// back as a per-tick `PodError` so the caller can keep going.
pub fn read_tick<R: BufRead>(reader: &mut R) -> io::Result<Option<Result<Observation, PodError>>> {
    let mut pod_line = Vec::new();
    if reader.read_until(b'\n', &mut pod_line)? == 0 {
        return Ok(None);
    }
    let mut opponent_line = Vec::new();
    reader.read_until(b'\n', &mut opponent_line)?;
    Ok(Some(decode_tick(&pod_line, &opponent_line)))
}

fn decode_tick(pod_line: &[u8], opponent_line: &[u8]) -> Result<Observation, PodError> {
    let pod_line = utf8_line(pod_line, POD_FIELDS[0])?;
    let opponent_line = utf8_line(opponent_line, OPPONENT_FIELDS[0])?;
    parse_observation(pod_line, opponent_line)
}

fn utf8_line<'a>(bytes: &'a [u8], field: &'static str) -> Result<&'a str, PodError> {
    std::str::from_utf8(bytes).map_err(|_| PodError::MalformedObservation {
        field,
        reason: "invalid UTF-8".into(),
    })
}

pub fn parse_observation(pod_line: &str, opponent_line: &str) -> Result<Observation, PodError> {
    let [x, y, cpx, cpy, dist, angle] = parse_fields(pod_line, POD_FIELDS)?;
    let [ox, oy] = parse_fields(opponent_line, OPPONENT_FIELDS)?;
    let obs = Observation {
        pod: Position::new(x, y),
        checkpoint: Position::new(cpx, cpy),
        checkpoint_distance: dist,
        checkpoint_angle: angle,
        opponent: Position::new(ox, oy),
    };
    obs.validate()?;
    Ok(obs)
}

fn parse_fields<const N: usize>(
    line: &str,
    names: [&'static str; N],
) -> Result<[f64; N], PodError> {
    let mut tokens = line.split_whitespace();
    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(names) {
        let token = tokens.next().ok_or_else(|| PodError::MalformedObservation {
            field,
            reason: "missing".into(),
        })?;
        *value = token.parse().map_err(|_| PodError::MalformedObservation {
            field,
            reason: format!("not a number: {token:?}"),
        })?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_observation() {
        let obs = parse_observation("100 200 3000 4000 5000 -45\n", "7 8\n").unwrap();
        assert_eq!(obs.pod, Position::new(100.0, 200.0));
        assert_eq!(obs.checkpoint, Position::new(3000.0, 4000.0));
        assert_eq!(obs.checkpoint_distance, 5000.0);
        assert_eq!(obs.checkpoint_angle, -45.0);
        assert_eq!(obs.opponent, Position::new(7.0, 8.0));
    }

    #[test]
    fn test_missing_field_is_named() {
        match parse_observation("1 2 3 4 5\n", "7 8\n") {
            Err(PodError::MalformedObservation { field, .. }) => {
                assert_eq!(field, "checkpoint_angle")
            }
            other => panic!("unexpected {other:?}"),
        }
        match parse_observation("1 2 3 4 5 6\n", "") {
            Err(PodError::MalformedObservation { field, .. }) => assert_eq!(field, "opponent_x"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse_observation("1 two 3 4 5 6", "7 8").unwrap_err();
        assert!(err.to_string().contains("`y`"));
        assert!(parse_observation("1 2 3 4 5 NaN", "7 8").is_err());
    }

    #[test]
    fn test_read_tick_until_eof() {
        let mut input = Cursor::new("0 0 1000 0 1000 0\n50 50\n");
        assert!(matches!(read_tick(&mut input), Ok(Some(Ok(_)))));
        assert!(matches!(read_tick(&mut input), Ok(None)));
    }

    #[test]
    fn test_invalid_utf8_is_a_malformed_tick() {
        let bytes = b"0 0 1000 0 1000 0\n\xff\xfe 1\n0 0 1000 0 1000 0\n1 1\n";
        let mut input = Cursor::new(bytes.to_vec());
        match read_tick(&mut input) {
            Ok(Some(Err(PodError::MalformedObservation { field, reason }))) => {
                assert_eq!(field, "opponent_x");
                assert_eq!(reason, "invalid UTF-8");
            }
            other => panic!("unexpected {other:?}"),
        }
        // The bad line was consumed, so the next tick still lines up
        assert!(matches!(read_tick(&mut input), Ok(Some(Ok(_)))));
        assert!(matches!(read_tick(&mut input), Ok(None)));
    }
}
