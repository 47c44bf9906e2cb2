use crate::{Coordinate, PatternError};

/// Reads live cells from a plaintext drawing.
///
/// `#` and `o` are live; `.`, `·` and spaces are dead. The line number is the
/// row and the character index is the column, counted from the top left.
pub fn parse_pattern(s: &str) -> Result<Vec<Coordinate>, PatternError> {
    let mut cells = vec![];
    for (y, line) in s.lines().enumerate() {
        for (x, c) in line.chars().enumerate() {
            let (x, y) = (x as isize, y as isize);
            match c {
                ' ' | '.' | '·' => (),
                '#' | 'o' => cells.push(Coordinate::new(x, y)),
                character => {
                    return Err(PatternError::UnexpectedCharacter { character, x, y });
                }
            }
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let cells = parse_pattern(".#.\n..o\n###").unwrap();
        let expected = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)].map(Coordinate::from);
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_unexpected_character() {
        let err = parse_pattern("..\n.x").unwrap_err();
        assert_eq!(
            err,
            PatternError::UnexpectedCharacter {
                character: 'x',
                x: 1,
                y: 1
            }
        );
    }
}
