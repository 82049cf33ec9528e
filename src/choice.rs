use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// One of the three throws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

/// Result of a single throw, seen from the user's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Outcome {
    UserWin,
    ComputerWin,
    Tie,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The choice this one defeats
    pub fn victim(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    pub fn beats(self, other: Choice) -> bool {
        self.victim() == other
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Choice::Rock => "✊",
            Choice::Paper => "✋",
            Choice::Scissors => "✌",
        }
    }

    /// Key bindings used by the throw row: initials and 1/2/3
    pub fn from_key(c: char) -> Option<Choice> {
        match c.to_ascii_lowercase() {
            'r' | '1' => Some(Choice::Rock),
            'p' | '2' => Some(Choice::Paper),
            's' | '3' => Some(Choice::Scissors),
            _ => None,
        }
    }
}

pub fn resolve(user: Choice, computer: Choice) -> Outcome {
    if user == computer {
        Outcome::Tie
    } else if user.beats(computer) {
        Outcome::UserWin
    } else {
        Outcome::ComputerWin
    }
}

/// Source of the computer's throws
pub trait Opponent {
    fn pick(&mut self) -> Choice;
}

/// Uniform draw from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOpponent;

impl Opponent for RandomOpponent {
    fn pick(&mut self) -> Choice {
        *Choice::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Choice::Rock)
    }
}

/// Replays a fixed sequence of throws, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    script: VecDeque<Choice>,
}

impl ScriptedOpponent {
    pub fn new<I: IntoIterator<Item = Choice>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Opponent for ScriptedOpponent {
    fn pick(&mut self) -> Choice {
        match self.script.pop_front() {
            Some(choice) => {
                self.script.push_back(choice);
                choice
            }
            None => Choice::Rock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_same_choice_is_tie() {
        for c in Choice::ALL {
            assert_eq!(resolve(c, c), Outcome::Tie);
        }
    }

    #[test]
    fn test_resolve_is_antisymmetric() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                if a == b {
                    continue;
                }
                assert_ne!(a.beats(b), b.beats(a), "{a} vs {b}");
                match resolve(a, b) {
                    Outcome::UserWin => assert_eq!(resolve(b, a), Outcome::ComputerWin),
                    Outcome::ComputerWin => assert_eq!(resolve(b, a), Outcome::UserWin),
                    Outcome::Tie => panic!("distinct choices cannot tie"),
                }
            }
        }
    }

    #[test]
    fn test_beats_relation() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Scissors.beats(Choice::Paper));
        assert!(Choice::Paper.beats(Choice::Rock));
        assert!(!Choice::Rock.beats(Choice::Paper));
        assert!(!Choice::Rock.beats(Choice::Rock));
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Choice::from_key('r'), Some(Choice::Rock));
        assert_eq!(Choice::from_key('P'), Some(Choice::Paper));
        assert_eq!(Choice::from_key('3'), Some(Choice::Scissors));
        assert_eq!(Choice::from_key('x'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Choice::Scissors.to_string(), "Scissors");
        assert_eq!(Outcome::UserWin.to_string(), "UserWin");
    }

    #[test]
    fn test_random_opponent_covers_all_choices() {
        let mut opponent = RandomOpponent;
        let seen: HashSet<Choice> = (0..300).map(|_| opponent.pick()).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_scripted_opponent_cycles() {
        let mut opponent = ScriptedOpponent::new([Choice::Paper, Choice::Rock]);
        assert_eq!(opponent.pick(), Choice::Paper);
        assert_eq!(opponent.pick(), Choice::Rock);
        assert_eq!(opponent.pick(), Choice::Paper);
    }
}
