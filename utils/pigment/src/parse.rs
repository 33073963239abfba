use super::HexColorError;

const fn nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn prefix_len(bytes: &[u8]) -> usize {
    if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    }
}

/// Parses a `#RRGGBB` / `0xRRGGBB` / `RRGGBB` string into raw components.
///
/// Usable in const context; panics on malformed input, which in const
/// context surfaces as a compile error.
pub const fn parse_hex_rgb(s: &str) -> (u8, u8, u8) {
    let bytes = s.as_bytes();
    let i = prefix_len(bytes);

    if bytes.len() - i != 6 {
        panic!("expected 6 hex digits");
    }

    (
        (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]),
        (nibble(bytes[i + 2]) << 4) | nibble(bytes[i + 3]),
        (nibble(bytes[i + 4]) << 4) | nibble(bytes[i + 5]),
    )
}

fn checked_nibble(b: u8, index: usize) -> Result<u8, HexColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(HexColorError::InvalidDigit(index)),
    }
}

fn checked_byte(bytes: &[u8], index: usize) -> Result<u8, HexColorError> {
    let hi = checked_nibble(bytes[index], index)?;
    let lo = checked_nibble(bytes[index + 1], index + 1)?;
    Ok((hi << 4) | lo)
}

/// Fallible counterpart of [`parse_hex_rgb`] for runtime input.
pub fn try_parse_hex_rgb(s: &str) -> Result<(u8, u8, u8), HexColorError> {
    let bytes = s.as_bytes();
    let offset = prefix_len(bytes);
    if bytes.len().saturating_sub(offset) != 6 {
        return Err(HexColorError::InvalidLength);
    }

    Ok((
        checked_byte(bytes, offset)?,
        checked_byte(bytes, offset + 2)?,
        checked_byte(bytes, offset + 4)?,
    ))
}
