use checked_sum::CheckedSum;
use itertools::Itertools;
use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 7: Camel Cards",
    parsed = HandList,
    part_one = Day07,
    part_two = Day07,
    answer_one = "252052080",
    answer_two = "252898370"
)]
impl super::AdventOfCode2023<7> {}

#[derive(thiserror::Error, Debug)]
enum CamelCardsError {
    #[error("expected \"<five cards> <bid>\", found {0:?}")]
    InvalidHand(String),

    #[error("unknown card {0:?}")]
    UnknownCard(char),

    #[error("winnings overflowed")]
    Overflow,
}

/*
Input is a list of Camel Cards hands, each five cards followed by a bid:

```text
32T3K 765
```

Cards are labeled `A`, `K`, `Q`, `J`, `T` and `9` through `2`, strongest first. A hand's type is
decided by its groups of equal cards, from five of a kind down to high card. Hands of the same type
are ordered by comparing their cards in order, first card first.

Each hand wins its bid times its rank, where the weakest hand has rank 1. Answers total the
winnings.
*/

const LABELS: &str = "23456789TJQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

/// How to treat `J` cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JCard {
    Jack,
    /// Jokers stand in for whatever card makes the best type, but are the weakest single card.
    Joker,
}

const JACK: u8 = 9;

struct Hand {
    /// Card strengths, `0` for `2` up to `12` for `A`.
    cards: [u8; 5],
    bid: u64,
}

impl Hand {
    fn hand_type(&self, j_card: JCard) -> HandType {
        let jokers = match j_card {
            JCard::Jack => 0,
            JCard::Joker => self.cards.iter().filter(|&&card| card == JACK).count(),
        };
        let mut groups: Vec<usize> = self
            .cards
            .iter()
            .filter(|&&card| j_card == JCard::Jack || card != JACK)
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        match groups.first_mut() {
            Some(largest) => *largest += jokers,
            None => groups.push(jokers),
        }

        match groups.as_slice() {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    /// A key ordering hands from weakest to strongest.
    fn strength(&self, j_card: JCard) -> (HandType, [u8; 5]) {
        let cards = self.cards.map(|card| match (j_card, card) {
            (JCard::Joker, JACK) => 0,
            (JCard::Joker, _) if card < JACK => card + 1,
            _ => card,
        });
        (self.hand_type(j_card), cards)
    }
}

struct HandList(Vec<Hand>);

impl ParseData for HandList {
    fn parse(input: &str) -> DynamicResult<Self> {
        let hands = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let invalid = || CamelCardsError::InvalidHand(line.to_owned());
            let (labels, bid) = line.split_once(' ').ok_or_else(invalid)?;
            let strengths = labels
                .chars()
                .map(|label| {
                    LABELS
                        .find(label)
                        .map(|strength| strength as u8)
                        .ok_or(CamelCardsError::UnknownCard(label))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Hand {
                cards: strengths.try_into().map_err(|_| invalid())?,
                bid: parse_with_context(bid.trim())?,
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(hands))
    }
}

impl HandList {
    fn total_winnings(&self, j_card: JCard) -> Result<u64, CamelCardsError> {
        self.0
            .iter()
            .sorted_by_cached_key(|hand| hand.strength(j_card))
            .zip(1..)
            .map(|(hand, rank)| hand.bid.checked_mul(rank))
            .collect::<Option<Vec<_>>>()
            .and_then(|winnings| winnings.into_iter().checked_sum())
            .ok_or(CamelCardsError::Overflow)
    }
}

/*
For part 1, `J` is a jack.
*/

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = HandList;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.total_winnings(JCard::Jack)?)
    }
}

/*
For part 2, `J` is a joker. It acts as whatever card makes the hand's type strongest, but when
comparing cards it is weaker than `2`.
*/

impl Solution<PartTwo> for Day07 {
    type Input = HandList;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.total_winnings(JCard::Joker)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = HandList::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day07 as Solution<PartOne>>::solve(&parsed)?, 6440);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = HandList::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day07 as Solution<PartTwo>>::solve(&parsed)?, 5905);
        Ok(())
    }

    #[test]
    fn jokers_join_the_largest_group() -> DynamicResult<()> {
        let parsed = HandList::parse("JJJJJ 1\nKTJJT 1\n2345J 1\n")?;
        let types: Vec<_> = parsed.0.iter().map(|hand| hand.hand_type(JCard::Joker)).collect();
        assert_eq!(
            types,
            vec![
                HandType::FiveOfAKind,
                HandType::FourOfAKind,
                HandType::OnePair
            ]
        );
        Ok(())
    }

    #[test]
    fn short_hands_are_rejected() {
        assert!(HandList::parse("KKK 10\n").is_err());
    }
}
