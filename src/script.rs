//! Line-oriented event scripts for driving an overlay without a browser.
//!
//! Each non-empty line is one event; lines starting with `#` are comments.
//!
//! ```text
//! mode on
//! tool highlighter
//! color #ffcc00
//! down 10 10
//! move 40 12
//! up
//! resize 1200 600
//! ```

use crate::draw::Point;
use crate::input::{OverlayEvent, Tool};
use crate::util;
use thiserror::Error;

/// A script line that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    pub reason: String,
}

/// Parses a whole script into events, stopping at the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<OverlayEvent>, ScriptError> {
    let mut events = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let words: Vec<&str> = content.split_whitespace().collect();
        let event = parse_line(&words).map_err(|reason| ScriptError {
            line: index + 1,
            reason,
        })?;
        events.push(event);
    }

    Ok(events)
}

fn parse_line(words: &[&str]) -> Result<OverlayEvent, String> {
    let command = words[0].to_ascii_lowercase();
    let args = &words[1..];

    let event = match command.as_str() {
        "down" => OverlayEvent::PointerDown(parse_point(args)?),
        "move" => OverlayEvent::PointerMove(parse_point(args)?),
        "up" => {
            expect_args(args, 0)?;
            OverlayEvent::PointerUp
        }
        "resize" => {
            expect_args(args, 2)?;
            OverlayEvent::Resize {
                width: parse_number(args[0])?,
                height: parse_number(args[1])?,
            }
        }
        "mode" => {
            expect_args(args, 1)?;
            match args[0].to_ascii_lowercase().as_str() {
                "on" => OverlayEvent::SetWritingMode(true),
                "off" => OverlayEvent::SetWritingMode(false),
                "toggle" => OverlayEvent::ToggleWritingMode,
                other => return Err(format!("expected on, off, or toggle, got '{other}'")),
            }
        }
        "tool" => {
            expect_args(args, 1)?;
            OverlayEvent::SetTool(args[0].parse::<Tool>()?)
        }
        "color" => {
            expect_args(args, 1)?;
            let color =
                util::parse_color(args[0]).ok_or_else(|| format!("unknown color '{}'", args[0]))?;
            OverlayEvent::SetColor(color)
        }
        "reopen" => {
            expect_args(args, 0)?;
            OverlayEvent::RequestReopen
        }
        "close" => {
            expect_args(args, 0)?;
            OverlayEvent::CloseToolbar
        }
        other => return Err(format!("unknown command '{other}'")),
    };

    Ok(event)
}

fn expect_args(args: &[&str], count: usize) -> Result<(), String> {
    if args.len() == count {
        Ok(())
    } else {
        Err(format!("expected {count} argument(s), got {}", args.len()))
    }
}

fn parse_point(args: &[&str]) -> Result<Point, String> {
    expect_args(args, 2)?;
    let x: f64 = parse_number(args[0])?;
    let y: f64 = parse_number(args[1])?;
    if !x.is_finite() || !y.is_finite() {
        return Err("coordinates must be finite".to_string());
    }
    Ok(Point::new(x, y))
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("'{value}' is not a valid number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn parses_every_command() {
        let script = "\
# warm up
mode on
mode toggle
mode off
tool Highlighter
color #ff0000
color red

down 10 10
move 20.5 10
up
resize 1200 600
close
reopen
";
        let events = parse_script(script).unwrap();
        assert_eq!(
            events,
            vec![
                OverlayEvent::SetWritingMode(true),
                OverlayEvent::ToggleWritingMode,
                OverlayEvent::SetWritingMode(false),
                OverlayEvent::SetTool(Tool::Highlighter),
                OverlayEvent::SetColor(RED),
                OverlayEvent::SetColor(RED),
                OverlayEvent::PointerDown(Point::new(10.0, 10.0)),
                OverlayEvent::PointerMove(Point::new(20.5, 10.0)),
                OverlayEvent::PointerUp,
                OverlayEvent::Resize {
                    width: 1200,
                    height: 600
                },
                OverlayEvent::CloseToolbar,
                OverlayEvent::RequestReopen,
            ]
        );
    }

    #[test]
    fn reports_line_of_first_error() {
        let err = parse_script("mode on\n\ndown 10\nup\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.reason.contains("expected 2 argument(s)"));
        assert_eq!(err.to_string(), format!("line 3: {}", err.reason));
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(parse_script("tool crayon").unwrap_err().reason.contains("unknown tool"));
        assert!(parse_script("color #12").unwrap_err().reason.contains("unknown color"));
        assert!(parse_script("mode maybe").is_err());
        assert!(parse_script("jump 1 2").unwrap_err().reason.contains("unknown command"));
        assert!(parse_script("move x 2").unwrap_err().reason.contains("not a valid number"));
        assert!(parse_script("down NaN 2").is_err());
    }
}
