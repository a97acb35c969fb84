use std::str::FromStr as _;

use anyhow::{Context as _, Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, builder::PossibleValuesParser, value_parser};
use hashdrill_core::{
    Board, decode, encode, group_anagrams, has_duplicate, is_anagram, longest_consecutive,
    product_except_self, top_k_frequent, two_sum, two_sum_sorted,
};
use strum::IntoEnumIterator as _;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::output::{Format, Outcome};

/// One subcommand per exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Exercise {
    ContainsDuplicate,
    GroupAnagrams,
    TwoSum,
    TwoSumSorted,
    ValidAnagram,
    TopKFrequent,
    ProductExceptSelf,
    LongestConsecutive,
    Encode,
    Decode,
    ValidSudoku,
}

impl Exercise {
    pub fn about(&self) -> &'static str {
        match self {
            Self::ContainsDuplicate => "Report whether any number repeats",
            Self::GroupAnagrams => "Group words that are letter permutations of each other",
            Self::TwoSum => "Find two positions whose numbers add up to the target",
            Self::TwoSumSorted => "Two-sum over sorted numbers, 1-based positions",
            Self::ValidAnagram => "Check whether two lowercase words are anagrams",
            Self::TopKFrequent => "List the k most frequent numbers",
            Self::ProductExceptSelf => "Product of all other numbers for each position",
            Self::LongestConsecutive => "Length of the longest run of consecutive numbers",
            Self::Encode => "Pack words into one length-prefixed string",
            Self::Decode => "Unpack a string produced by encode",
            Self::ValidSudoku => "Check nine sudoku rows for repeated digits",
        }
    }

    fn command(self) -> Command {
        let name: &'static str = self.into();
        let command = Command::new(name).about(self.about());
        match self {
            Self::ContainsDuplicate | Self::ProductExceptSelf | Self::LongestConsecutive => {
                command.arg(numbers_arg())
            }
            Self::TwoSum | Self::TwoSumSorted => command.arg(target_arg()).arg(numbers_arg()),
            Self::TopKFrequent => command
                .arg(
                    Arg::new("k")
                        .short('k')
                        .value_name("K")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("How many values to return"),
                )
                .arg(numbers_arg()),
            Self::GroupAnagrams | Self::Encode => command.arg(words_arg()),
            Self::ValidAnagram => command
                .arg(Arg::new("first").required(true).value_name("A"))
                .arg(Arg::new("second").required(true).value_name("B")),
            Self::Decode => command.arg(Arg::new("packed").required(true).value_name("ENCODED")),
            Self::ValidSudoku => command.arg(
                Arg::new("rows")
                    .value_name("ROW")
                    .num_args(1..)
                    .required(true)
                    .help("Nine rows of nine cells, digits 1-9 or '.'"),
            ),
        }
    }

    fn run(self, matches: &ArgMatches) -> Result<Outcome> {
        let outcome = match self {
            Self::ContainsDuplicate => Outcome::Flag(has_duplicate(&numbers(matches))),
            Self::GroupAnagrams => Outcome::Groups(group_anagrams(&strings(matches, "words"))),
            Self::TwoSum => Outcome::Indices(two_sum(&numbers(matches), target(matches)?)),
            Self::TwoSumSorted => {
                Outcome::Indices(two_sum_sorted(&numbers(matches), target(matches)?))
            }
            Self::ValidAnagram => {
                let first = required_str(matches, "first")?;
                let second = required_str(matches, "second")?;
                Outcome::Flag(is_anagram(first, second)?)
            }
            Self::TopKFrequent => {
                let k = matches
                    .get_one::<usize>("k")
                    .copied()
                    .context("missing -k")?;
                Outcome::Numbers(top_k_frequent(&numbers(matches), k))
            }
            Self::ProductExceptSelf => Outcome::Numbers(product_except_self(&numbers(matches))?),
            Self::LongestConsecutive => Outcome::Count(longest_consecutive(&numbers(matches))),
            Self::Encode => Outcome::Text(encode(&strings(matches, "words"))),
            Self::Decode => Outcome::Words(decode(required_str(matches, "packed")?)?),
            Self::ValidSudoku => {
                let board = Board::parse(&strings(matches, "rows"))?;
                log::debug!("parsed board:\n{board}");
                Outcome::Flag(board.is_valid())
            }
        };
        Ok(outcome)
    }
}

fn numbers_arg() -> Arg {
    Arg::new("numbers")
        .value_name("NUM")
        .num_args(0..)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
}

fn target_arg() -> Arg {
    Arg::new("target")
        .long("target")
        .short('t')
        .value_name("T")
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
}

fn words_arg() -> Arg {
    Arg::new("words").value_name("WORD").num_args(0..)
}

fn numbers(matches: &ArgMatches) -> Vec<i64> {
    matches
        .get_many::<i64>("numbers")
        .map(|values| values.copied().collect())
        .unwrap_or_default()
}

fn strings(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn required_str<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("missing <{id}>"))
}

fn target(matches: &ArgMatches) -> Result<i64> {
    matches
        .get_one::<i64>("target")
        .copied()
        .context("missing --target")
}

/// The full command tree
pub fn command() -> Command {
    let formats: Vec<&'static str> = Format::iter().map(<&'static str>::from).collect();
    Command::new("hashdrill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hash-based array and string exercises")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Set verbose output level"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .value_parser(PossibleValuesParser::new(formats))
                .default_value(<&'static str>::from(Format::default()))
                .help("Output format"),
        )
        .subcommands(Exercise::iter().map(Exercise::command))
}

pub fn log_level(matches: &ArgMatches) -> log::LevelFilter {
    match matches.get_count("verbose") {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

pub fn format(matches: &ArgMatches) -> Result<Format> {
    let name = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or_default();
    Format::from_str(name).map_err(|e| anyhow!("unknown format {name:?}: {e}"))
}

/// Dispatch the parsed subcommand to its exercise.
pub fn run(matches: &ArgMatches) -> Result<Outcome> {
    let (name, sub) = matches.subcommand().context("no command given")?;
    let exercise =
        Exercise::from_str(name).map_err(|e| anyhow!("unknown command {name:?}: {e}"))?;
    log::debug!("running {exercise}");
    exercise
        .run(sub)
        .with_context(|| format!("{exercise} failed"))
}
