use serde::{Deserialize, Serialize};

/// Represents all tile kinds a level cell can hold.
///
/// Each variant maps bijectively to a single printable symbol used by the
/// run-length codec. The alphabet must stay clear of ASCII digits, the row
/// separator `|` and the link sentinel character `:`, all of which are
/// structural in the encoded text (see [`Tile::validate_alphabet`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Empty space (`-`)
    Air,
    /// Solid wall (`#`)
    Wall,
    /// Background wall (`=`)
    DarkWall,
    /// Collectible coin (`*`)
    Coin,
    /// Spikes hazard (`^`)
    Spikes,
    /// Enemy spawn (`&`)
    Enemy,
    /// Player spawn, facing left (`L`)
    PlayerLeft,
    /// Player spawn, facing right (`R`)
    PlayerRight,
    /// Player spawn, facing up (`U`)
    PlayerUp,
    /// Player spawn, facing down (`D`)
    PlayerDown,
    /// Jump-through platform (`P`)
    Platform,
    /// Spring (`S`)
    Spring,
    /// Level exit (`E`)
    Exit,
}

impl Tile {
    pub const ALL: [Tile; 13] = [
        Tile::Air,
        Tile::Wall,
        Tile::DarkWall,
        Tile::Coin,
        Tile::Spikes,
        Tile::Enemy,
        Tile::PlayerLeft,
        Tile::PlayerRight,
        Tile::PlayerUp,
        Tile::PlayerDown,
        Tile::Platform,
        Tile::Spring,
        Tile::Exit,
    ];

    /// The symbol this tile encodes to.
    pub const fn symbol(self) -> char {
        match self {
            Tile::Air => '-',
            Tile::Wall => '#',
            Tile::DarkWall => '=',
            Tile::Coin => '*',
            Tile::Spikes => '^',
            Tile::Enemy => '&',
            Tile::PlayerLeft => 'L',
            Tile::PlayerRight => 'R',
            Tile::PlayerUp => 'U',
            Tile::PlayerDown => 'D',
            Tile::Platform => 'P',
            Tile::Spring => 'S',
            Tile::Exit => 'E',
        }
    }

    /// Look up the tile for a symbol, `None` for symbols outside the alphabet.
    pub const fn from_symbol(symbol: char) -> Option<Tile> {
        Some(match symbol {
            '-' => Tile::Air,
            '#' => Tile::Wall,
            '=' => Tile::DarkWall,
            '*' => Tile::Coin,
            '^' => Tile::Spikes,
            '&' => Tile::Enemy,
            'L' => Tile::PlayerLeft,
            'R' => Tile::PlayerRight,
            'U' => Tile::PlayerUp,
            'D' => Tile::PlayerDown,
            'P' => Tile::Platform,
            'S' => Tile::Spring,
            'E' => Tile::Exit,
            _ => return None,
        })
    }

    /// Checks the symbol alphabet against the characters the codec reserves.
    ///
    /// Digits carry run counts, `|` separates rows and `:` opens the link
    /// sentinel, so none of them may double as a tile symbol. The mapping
    /// must also be injective. Exercised by the test suite; the alphabet is
    /// fixed at compile time, so this never runs on the decode path.
    pub fn validate_alphabet() -> crate::Result<()> {
        for tile in Tile::ALL {
            let symbol = tile.symbol();
            if symbol.is_ascii_digit() || symbol == crate::codec::ROW_SEPARATOR || symbol == ':' {
                return Err(crate::RllError::generic(format!("tile {tile:?} uses reserved symbol '{symbol}'")));
            }
            if !symbol.is_ascii_graphic() {
                return Err(crate::RllError::generic(format!("tile {tile:?} uses non-printable symbol {symbol:?}")));
            }
            if Tile::from_symbol(symbol) != Some(tile) {
                return Err(crate::RllError::generic(format!("symbol '{symbol}' does not map back to {tile:?}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Tile;

    #[test]
    fn alphabet_is_valid() {
        Tile::validate_alphabet().unwrap();
    }

    #[test]
    fn symbols_are_unique() {
        for a in Tile::ALL {
            for b in Tile::ALL {
                if a != b {
                    assert_ne!(a.symbol(), b.symbol(), "{a:?} and {b:?} share a symbol");
                }
            }
        }
    }
}
