use serde::{Deserialize, Serialize};

/// Destination level index for each of the four directions.
///
/// A value of `0` means "no link". Stored in encoded level text behind the
/// `::` sentinel as four space-separated decimal integers; levels saved
/// before links existed simply omit the segment and decode as [`Self::NONE`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionLinks {
    pub left: i32,
    pub right: i32,
    pub up: i32,
    pub down: i32,
}

impl DirectionLinks {
    pub const NONE: DirectionLinks = DirectionLinks {
        left: 0,
        right: 0,
        up: 0,
        down: 0,
    };

    pub const fn new(left: i32, right: i32, up: i32, down: i32) -> Self {
        DirectionLinks { left, right, up, down }
    }

    /// Best-effort parse of a link segment.
    ///
    /// Takes up to four whitespace-separated integers; every missing or
    /// unparsable value independently falls back to 0. This never fails, so
    /// a mangled link segment can not make an otherwise valid level
    /// unloadable.
    pub fn parse(text: &str) -> Self {
        let mut values = text.split_whitespace().map(|field| field.parse::<i32>().unwrap_or(0));
        DirectionLinks {
            left: values.next().unwrap_or(0),
            right: values.next().unwrap_or(0),
            up: values.next().unwrap_or(0),
            down: values.next().unwrap_or(0),
        }
    }

    /// `true` when no direction links to another level.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl std::fmt::Display for DirectionLinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.left, self.right, self.up, self.down)
    }
}

#[cfg(test)]
mod tests {
    use super::DirectionLinks;

    #[test]
    fn parse_full_segment() {
        assert_eq!(DirectionLinks::parse("1 0 2 0"), DirectionLinks::new(1, 0, 2, 0));
    }

    #[test]
    fn parse_tolerates_garbage_and_gaps() {
        assert_eq!(DirectionLinks::parse(""), DirectionLinks::NONE);
        assert_eq!(DirectionLinks::parse("3"), DirectionLinks::new(3, 0, 0, 0));
        assert_eq!(DirectionLinks::parse("x 4 ? -2"), DirectionLinks::new(0, 4, 0, -2));
        assert_eq!(DirectionLinks::parse("1 2 3 4 5 6"), DirectionLinks::new(1, 2, 3, 4));
    }

    #[test]
    fn display_round_trips() {
        let links = DirectionLinks::new(1, 0, 2, -1);
        assert_eq!(DirectionLinks::parse(&links.to_string()), links);
    }
}
