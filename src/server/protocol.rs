use std::io;

use serde_json::{Value, json};

use crate::error::MazeError;
use crate::maze::{Direction, Survey};

/// A parsed client request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Start a fresh maze and wake the agent at the start cell.
    Awake,
    /// Walk one step in the given direction.
    Move(Direction),
    /// End the session and ask for the score summary.
    Done,
}

/// Parses one client message. Requests are single-key JSON objects:
/// `{"Awake": null}`, `{"Move": "north"}`, `{"Done": null}`.
pub fn parse_request(message: &str) -> io::Result<Request> {
    let value: Value = serde_json::from_str(message)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("invalid json: {}", e)))?;

    if value.get("Awake").is_some() {
        return Ok(Request::Awake);
    }
    if let Some(direction) = value.get("Move") {
        let direction = direction
            .as_str()
            .unwrap_or_default()
            .parse::<Direction>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        return Ok(Request::Move(direction));
    }
    if value.get("Done").is_some() {
        return Ok(Request::Done);
    }

    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("unknown request: {}", message),
    ))
}

pub fn survey_reply(survey: Survey) -> Value {
    json!({
        "Survey": {
            "north": survey.north,
            "south": survey.south,
            "east": survey.east,
            "west": survey.west,
        }
    })
}

pub fn victory_reply(steps: u32) -> Value {
    json!({
        "Victory": {
            "steps": steps,
            "message": format!("victory achieved in {} steps", steps),
        }
    })
}

pub fn error_reply(error: &MazeError) -> Value {
    json!({ "Error": error.to_string() })
}

pub fn results_reply(sessions: usize, avg_steps: u32) -> Value {
    json!({
        "Results": {
            "sessions": sessions,
            "avg_steps": avg_steps,
        }
    })
}
