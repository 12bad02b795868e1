//! Addressing on a counter-clockwise numbered spiral.
//!
//! Cell 1 sits at the origin. Cell 2 is one step right of it and numbering
//! continues counter-clockwise, so every ring `k` ends at the bottom-right
//! corner `(k, -k)` with address `(2k + 1)^2`.

use crate::error::{Result, SheetsumError};

/// x/y offset of spiral cell `addr` from cell 1
pub fn spiral_index(addr: u64) -> Result<(i64, i64)> {
    if addr == 0 {
        return Err(SheetsumError::InvalidSpiralAddress(addr));
    }
    if addr == 1 {
        return Ok((0, 0));
    }

    // Smallest odd side length whose square reaches addr.
    let mut side = addr.isqrt();
    if side * side < addr {
        side += 1;
    }
    if side % 2 == 0 {
        side += 1;
    }

    let ring = ((side - 1) / 2) as i64;
    let inner = side - 2;
    let offset = (addr - inner * inner - 1) as i64;
    let edge = 2 * ring;
    let pos = offset % edge;

    let coords = match offset / edge {
        // Right edge, moving up from just above the bottom-right corner.
        0 => (ring, -ring + 1 + pos),
        // Top edge, moving left.
        1 => (ring - 1 - pos, ring),
        // Left edge, moving down.
        2 => (-ring, ring - 1 - pos),
        // Bottom edge, moving right.
        _ => (-ring + 1 + pos, -ring),
    };
    Ok(coords)
}

/// Manhattan distance from spiral cell `addr` back to cell 1
pub fn step_count(addr: u64) -> Result<u64> {
    let (x, y) = spiral_index(addr)?;
    Ok(x.unsigned_abs() + y.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spiral_index_first_rings() {
        let expected = [
            (1, (0, 0)),
            (2, (1, 0)),
            (3, (1, 1)),
            (4, (0, 1)),
            (5, (-1, 1)),
            (6, (-1, 0)),
            (7, (-1, -1)),
            (8, (0, -1)),
            (9, (1, -1)),
            (10, (2, -1)),
            (11, (2, 0)),
            (12, (2, 1)),
            (13, (2, 2)),
            (14, (1, 2)),
            (15, (0, 2)),
            (16, (-1, 2)),
            (17, (-2, 2)),
            (18, (-2, 1)),
            (19, (-2, 0)),
            (20, (-2, -1)),
            (21, (-2, -2)),
            (22, (-1, -2)),
            (23, (0, -2)),
            (24, (1, -2)),
            (25, (2, -2)),
        ];
        for (addr, coords) in expected {
            assert_eq!(spiral_index(addr).unwrap(), coords, "addr {addr}");
        }
    }

    #[test]
    fn test_odd_squares_are_bottom_right_corners() {
        for k in 1..50i64 {
            let side = (2 * k + 1) as u64;
            assert_eq!(spiral_index(side * side).unwrap(), (k, -k));
        }
    }

    #[test]
    fn test_consecutive_cells_are_adjacent() {
        let mut prev = spiral_index(1).unwrap();
        for addr in 2..2_000 {
            let next = spiral_index(addr).unwrap();
            let dist = (next.0 - prev.0).abs() + (next.1 - prev.1).abs();
            assert_eq!(dist, 1, "addr {addr}");
            prev = next;
        }
    }

    #[test]
    fn test_step_count() {
        assert_eq!(step_count(1).unwrap(), 0);
        assert_eq!(step_count(12).unwrap(), 3);
        assert_eq!(step_count(23).unwrap(), 2);
        assert_eq!(step_count(1024).unwrap(), 31);
    }

    #[test]
    fn test_address_zero_is_rejected() {
        assert!(matches!(
            spiral_index(0),
            Err(SheetsumError::InvalidSpiralAddress(0))
        ));
        assert!(step_count(0).is_err());
    }
}
