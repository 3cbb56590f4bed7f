/// Card rank, Ace low.
///
/// The discriminant is the rank index used throughout the game: Ace is `0`,
/// the pips follow in order, and Jack, Queen and King close the range at
/// `10`, `11` and `12`.
///
/// Ordering by discriminant is *not* the comparison order of the game. Use
/// [`Rank::value`] when judging a higher-or-lower guess.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    /// All thirteen ranks, Ace first.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ]
    }
    /// Comparison value for higher-or-lower guesses.
    ///
    /// Pips count at face value, Jack 11, Queen 12, King 13. The Ace is 0:
    /// it never loses a comparison as the card underneath, since anything
    /// flipped onto it is higher or tied.
    pub const fn value(&self) -> u8 {
        match self {
            Rank::Ace => 0,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            pip => *pip as u8 + 1,
        }
    }
    /// Queens and Kings.
    pub const fn is_royal(&self) -> bool {
        self.value() >= 12
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            _ => unreachable!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "A" | "1" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(format!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for rank in Rank::all() {
            assert_eq!(rank, Rank::from(u8::from(rank)));
        }
    }

    #[test]
    fn bijective_str() {
        for rank in Rank::all() {
            assert_eq!(Ok(rank), Rank::try_from(rank.to_string().as_str()));
        }
    }

    #[test]
    fn comparison_values() {
        assert_eq!(Rank::Ace.value(), 0);
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Queen.value(), 12);
        assert_eq!(Rank::King.value(), 13);
    }

    #[test]
    fn royalty_is_queen_and_king() {
        let royals = Rank::all()
            .into_iter()
            .filter(Rank::is_royal)
            .collect::<Vec<_>>();
        assert_eq!(royals, vec![Rank::Queen, Rank::King]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Rank::try_from("11").is_err());
        assert!(Rank::try_from("Z").is_err());
    }
}
