//! Run-length text codec for tile grids.
//!
//! The body is row-major: a maximal run of `k` identical symbols in a row
//! encodes as the decimal `k` followed by the symbol when `k > 1`, or just
//! the symbol on its own. Runs never cross the `|` row separator. An
//! optional link segment follows a `::` sentinel, holding the four
//! direction link integers as space-separated decimal text.
//!
//! Decoding is strict about the grid body (dangling run counts, ragged
//! rows and unknown symbols are errors) but deliberately lenient about the
//! link segment, so levels saved before links existed stay loadable.

use std::fmt::Write;

use crate::{DirectionLinks, RllError, Size, Tile, TileGrid};

/// Separates encoded rows; reserved, may not appear in the tile alphabet.
pub const ROW_SEPARATOR: char = '|';

/// [`ROW_SEPARATOR`] as a string, for joining wrapped store lines.
pub const ROW_SEPARATOR_STR: &str = "|";

/// Upper bound for a single run count. Encoding never produces runs longer
/// than a row, so anything beyond this is a corrupt or hostile file; the
/// bound also keeps a forged count from requesting a multi-gigabyte
/// allocation.
pub const MAX_RUN_COUNT: usize = 1_000_000;

/// Introduces the trailing direction-link segment.
pub const LINK_SENTINEL: &str = "::";

/// Encodes a grid into run-length text, appending the link segment when
/// `links` is given. Unset cells encode as the Air symbol.
pub fn encode(grid: &TileGrid, links: Option<&DirectionLinks>) -> String {
    let mut result = String::new();
    for y in 0..grid.get_height() {
        if y > 0 {
            result.push(ROW_SEPARATOR);
        }
        let mut run_symbol = grid.symbol((0, y));
        let mut run_length = 1usize;
        for x in 1..grid.get_width() {
            let symbol = grid.symbol((x, y));
            if symbol == run_symbol {
                run_length += 1;
            } else {
                push_run(&mut result, run_length, run_symbol);
                run_symbol = symbol;
                run_length = 1;
            }
        }
        push_run(&mut result, run_length, run_symbol);
    }
    if let Some(links) = links {
        result.push_str(LINK_SENTINEL);
        let _ = write!(result, "{links}");
    }
    result
}

fn push_run(result: &mut String, length: usize, symbol: char) {
    if length > 1 {
        let _ = write!(result, "{length}");
    }
    result.push(symbol);
}

/// Decodes run-length text into a grid plus its direction links.
///
/// On any error the input produced no grid at all, so a caller can keep
/// editing its current level untouched.
pub fn decode(text: &str) -> crate::Result<(TileGrid, DirectionLinks)> {
    let (body, links) = match text.find(LINK_SENTINEL) {
        Some(at) => (&text[..at], DirectionLinks::parse(&text[at + LINK_SENTINEL.len()..])),
        None => (text, DirectionLinks::NONE),
    };

    let mut tiles = Vec::new();
    let mut columns: Option<usize> = None;
    let mut row_length = 0usize;
    let mut rows = 0usize;

    let mut scanner = body.char_indices().peekable();
    while let Some((offset, ch)) = scanner.next() {
        if ch.is_ascii_digit() {
            let mut count = (ch as u8 - b'0') as usize;
            while let Some((_, digit)) = scanner.next_if(|(_, next)| next.is_ascii_digit()) {
                count = count
                    .checked_mul(10)
                    .and_then(|c| c.checked_add((digit as u8 - b'0') as usize))
                    .filter(|&c| c <= MAX_RUN_COUNT)
                    .ok_or(RllError::RunCountTooLarge { offset })?;
            }
            let Some((symbol_offset, symbol)) = scanner.next() else {
                return Err(RllError::DanglingRunCount { offset });
            };
            let tile = Tile::from_symbol(symbol).ok_or(RllError::UnknownSymbol {
                symbol,
                offset: symbol_offset,
            })?;
            tiles.extend(std::iter::repeat(tile).take(count));
            row_length += count;
        } else if ch == ROW_SEPARATOR {
            close_row(&mut columns, row_length, rows)?;
            rows += 1;
            row_length = 0;
        } else {
            let tile = Tile::from_symbol(ch).ok_or(RllError::UnknownSymbol { symbol: ch, offset })?;
            tiles.push(tile);
            row_length += 1;
        }
    }
    // No trailing separator required to close the last row.
    if row_length > 0 {
        close_row(&mut columns, row_length, rows)?;
        rows += 1;
    }

    let columns = columns.unwrap_or(0);
    if rows == 0 || columns == 0 {
        // Bodies made of nothing but separators establish a zero column
        // count and are as empty as "".
        return Err(RllError::EmptyBody);
    }
    let size = Size::new(columns as i32, rows as i32);
    Ok((TileGrid::from_tiles(size, tiles), links))
}

fn close_row(columns: &mut Option<usize>, row_length: usize, row: usize) -> crate::Result<()> {
    match *columns {
        None => {
            *columns = Some(row_length);
            Ok(())
        }
        Some(expected) if expected == row_length => Ok(()),
        Some(expected) => Err(RllError::ColumnCountMismatch {
            row: row + 1,
            expected,
            found: row_length,
        }),
    }
}
