use std::str::{FromStr, SplitAsciiWhitespace};

use halite_core::{GameMap, MoveSet, PlayerId};

use crate::ProtocolError;

fn next_number<T: FromStr>(
    tokens: &mut SplitAsciiWhitespace<'_>,
    field: &'static str,
) -> Result<T, ProtocolError> {
    let token = tokens.next().ok_or(ProtocolError::MissingToken { field })?;
    token.parse().map_err(|_| ProtocolError::InvalidInteger {
        field,
        token: token.to_owned(),
    })
}

fn expect_end(
    tokens: &mut SplitAsciiWhitespace<'_>,
    after: &'static str,
) -> Result<(), ProtocolError> {
    match tokens.next() {
        Some(token) => Err(ProtocolError::TrailingToken {
            after,
            token: token.to_owned(),
        }),
        None => Ok(()),
    }
}

pub fn parse_player(line: &str) -> Result<PlayerId, ProtocolError> {
    let mut tokens = line.split_ascii_whitespace();
    let player = next_number(&mut tokens, "player id")?;
    expect_end(&mut tokens, "player id")?;
    Ok(player)
}

pub fn parse_dimensions(line: &str) -> Result<(u16, u16), ProtocolError> {
    let mut tokens = line.split_ascii_whitespace();
    let width = next_number(&mut tokens, "map width")?;
    let height = next_number(&mut tokens, "map height")?;
    expect_end(&mut tokens, "map dimensions")?;
    Ok((width, height))
}

/// Fills in every site's production from a row-major line.
pub fn parse_productions(line: &str, map: &mut GameMap) -> Result<(), ProtocolError> {
    let mut tokens = line.split_ascii_whitespace();
    for site in map.sites_mut() {
        site.production = next_number(&mut tokens, "production")?;
    }
    expect_end(&mut tokens, "productions")
}

/// Overwrites owners and strengths from one frame line. Productions are left untouched.
pub fn parse_frame_into(line: &str, map: &mut GameMap) -> Result<(), ProtocolError> {
    let mut tokens = line.split_ascii_whitespace();
    let expected = map.len();
    let sites = map.sites_mut();

    let mut covered = 0usize;
    while covered < expected {
        let count: usize = next_number(&mut tokens, "run length")?;
        let owner: PlayerId = next_number(&mut tokens, "run owner")?;
        let Some(end) = covered.checked_add(count).filter(|&end| end <= expected) else {
            return Err(ProtocolError::RunOverflow {
                covered: covered.saturating_add(count),
                expected,
            });
        };
        for site in &mut sites[covered..end] {
            site.owner = owner;
        }
        covered = end;
    }

    for site in sites.iter_mut() {
        site.strength = next_number(&mut tokens, "strength")?;
    }
    expect_end(&mut tokens, "frame")
}

/// Renders a move set as one line of `x y direction` triples, without the newline.
pub fn format_moves(moves: &MoveSet) -> String {
    moves
        .iter()
        .map(|mv| format!("{} {} {}", mv.loc.x, mv.loc.y, mv.dir.code()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_reject_extra_tokens() {
        assert_eq!(parse_dimensions("30 20").unwrap(), (30, 20));
        assert!(matches!(
            parse_dimensions("30 20 7"),
            Err(ProtocolError::TrailingToken { .. })
        ));
        assert!(matches!(
            parse_dimensions("30"),
            Err(ProtocolError::MissingToken { field: "map height" })
        ));
    }

    #[test]
    fn player_must_fit_a_byte() {
        assert_eq!(parse_player(" 2 \n").unwrap(), 2);
        assert!(matches!(
            parse_player("300"),
            Err(ProtocolError::InvalidInteger { field: "player id", .. })
        ));
    }
}
