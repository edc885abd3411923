//! Line protocol for driving a brain from an external engine over stdin/stdout.
//!
//! One turn per line: `<UDLR> [ping <id>:<role>:<x>,<y> ...]`, where `<UDLR>`
//! holds four `0`/`1` flags (`1` = blocked) in UP, DOWN, LEFT, RIGHT order.
//! The reply is a single action word such as `LEFT` or `PING`.

use crate::error::ProtocolError;
use crate::infra::{Direction, Obstruction, Position};
use crate::state::{PingResponse, PlayerId, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub obstruction: Obstruction,
    pub ping: Option<PingResponse>,
}

pub fn parse_turn(line: &str) -> Result<Turn, ProtocolError> {
    let mut tokens = line.split_whitespace();
    let flags = tokens.next().ok_or(ProtocolError::Empty)?;
    let obstruction = parse_obstruction(flags)?;

    let ping = match tokens.next() {
        None => None,
        Some("ping") => Some(parse_ping(tokens)?),
        Some(other) => return Err(ProtocolError::UnexpectedToken(other.to_string())),
    };

    Ok(Turn { obstruction, ping })
}

fn parse_ping<'a, I>(entries: I) -> Result<PingResponse, ProtocolError>
where
    I: Iterator<Item = &'a str>,
{
    let mut ping = PingResponse::new();
    for entry in entries {
        let (player, pos) = parse_player(entry)?;
        if ping.insert(player, pos).is_some() {
            return Err(ProtocolError::DuplicatePlayer(format!(
                "{}:{}",
                player.id, player.role
            )));
        }
    }
    Ok(ping)
}

fn parse_obstruction(flags: &str) -> Result<Obstruction, ProtocolError> {
    let bits: Vec<char> = flags.chars().collect();
    if bits.len() != Direction::ALL.len() || bits.iter().any(|c| *c != '0' && *c != '1') {
        return Err(ProtocolError::Obstruction(flags.to_string()));
    }
    Ok(Obstruction::from_fn(|direction| bits[direction.index()] == '1'))
}

fn parse_player(entry: &str) -> Result<(PlayerId, Position), ProtocolError> {
    let malformed = || ProtocolError::PlayerEntry(entry.to_string());

    let mut parts = entry.splitn(3, ':');
    let (Some(id), Some(role), Some(coords)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let id: u32 = id.parse().map_err(|_| malformed())?;
    let role = parse_role(role)?;
    let (x, y) = coords.split_once(',').ok_or_else(malformed)?;
    let x: i32 = x.parse().map_err(|_| malformed())?;
    let y: i32 = y.parse().map_err(|_| malformed())?;

    Ok((PlayerId::new(id, role), Position::new(x, y)))
}

fn parse_role(role: &str) -> Result<Role, ProtocolError> {
    match role.to_ascii_lowercase().as_str() {
        "goody" => Ok(Role::Goody),
        "baddy" => Ok(Role::Baddy),
        _ => Err(ProtocolError::Role(role.to_string())),
    }
}
