use super::player::Player;
use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::gameplay::*;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;

/// Plays from the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn decide(&mut self, game: &Game) -> Action {
        match game.phase() {
            Phase::Prompt(Prompt::Trickster(i)) => {
                let (rank, suit) =
                    Self::call("Trickster wager, e.g. 7, 7h, h (blank declines)", true);
                Action::Trickster(i, Wager::new(rank, suit))
            }
            Phase::Prompt(Prompt::FinalGuess) => {
                let (rank, suit) = Self::call("Name the hidden card, e.g. Q or Qs", false);
                Action::Final(rank.unwrap_or_default(), suit)
            }
            _ => {
                let actions = game.legal();
                let labels = actions.iter().map(|a| a.to_string()).collect::<Vec<_>>();
                let choice = Self::selection(&labels, game);
                actions[choice]
            }
        }
    }
    fn notify(&mut self, event: &Event) {
        let message = event.message();
        match event.kind() {
            Kind::Info => println!("{}", message),
            Kind::Success => println!("{}", message.green()),
            Kind::Warning => println!("{}", message.yellow()),
            Kind::Error => println!("{}", message.red()),
        }
    }
}

impl Human {
    fn selection(labels: &[String], game: &Game) -> usize {
        Select::new()
            .with_prompt(format!("\n{}", game))
            .report(false)
            .items(labels)
            .default(0)
            .interact()
            .expect("interactive terminal")
    }
    /// Reads an optional rank and an optional suit from one line.
    fn call(prompt: &str, optional: bool) -> (Option<Rank>, Option<Suit>) {
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(optional)
            .validate_with(move |s: &String| -> Result<(), String> {
                Self::parse(s, optional).map(|_| ())
            })
            .report(false)
            .interact_text()
            .expect("interactive terminal");
        Self::parse(&input, optional).unwrap_or_default()
    }
    fn parse(s: &str, optional: bool) -> Result<(Option<Rank>, Option<Suit>), String> {
        let s = s.trim();
        if s.is_empty() {
            return match optional {
                true => Ok((None, None)),
                false => Err(String::from("Enter a rank")),
            };
        }
        if let Ok(rank) = Rank::try_from(s) {
            return Ok((Some(rank), None));
        }
        if let Ok(card) = Card::try_from(s) {
            return Ok((Some(card.rank()), Some(card.suit())));
        }
        match (optional, Suit::try_from(s)) {
            (true, Ok(suit)) => Ok((None, Some(suit))),
            _ => Err(format!("Cannot read {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calls() {
        assert_eq!(Human::parse("Q", false), Ok((Some(Rank::Queen), None)));
        assert_eq!(Human::parse("10h", false), Ok((Some(Rank::Ten), Some(Suit::H))));
        assert_eq!(Human::parse("s", true), Ok((None, Some(Suit::S))));
        assert_eq!(Human::parse("", true), Ok((None, None)));
        assert!(Human::parse("", false).is_err());
        assert!(Human::parse("s", false).is_err());
        assert!(Human::parse("zz", true).is_err());
    }
}
