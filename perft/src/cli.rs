use clap::{Parser, Subcommand, ValueEnum};
use util::{
    bitboard::Bitboard,
    error::DomainError,
    lookup::{label_to_mask_code, mask_to_label_code},
    square::Square,
};

use crate::{
    diff::diff,
    error::CliError,
    observation::Side,
    parse::parse_observations,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "snake_case")]
pub enum Command {
    /// Compare two perft divide outputs given as `<move>: <count>` lines
    Diff { baseline: String, candidate: String },
    /// Show index, label, mask and diagram of one square
    Square {
        /// A label (`e4`), an index (`36`) or a `0x` prefixed single-bit mask
        input: String,
    },
    /// Print the square lookup table as Rust source
    Table {
        #[arg(short, long, value_enum, default_value_t = Direction::MaskToLabel)]
        direction: Direction,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MaskToLabel,
    LabelToMask,
}

/// Whether a command found nothing to complain about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Mismatch,
}

/// Process exit status for a command result: 0 clean, 1 mismatch, 2 error.
pub fn exit_status(result: &Result<Outcome, CliError>) -> u8 {
    match result {
        Ok(Outcome::Clean) => 0,
        Ok(Outcome::Mismatch) => 1,
        Err(_) => 2,
    }
}

pub fn handle_command(cmd: Command) -> Result<Outcome, CliError> {
    match cmd {
        Command::Diff {
            baseline,
            candidate,
        } => {
            let baseline = parse_observations(&baseline).map_err(|source| CliError::Parse {
                side: Side::Baseline,
                source,
            })?;
            let candidate = parse_observations(&candidate).map_err(|source| CliError::Parse {
                side: Side::Candidate,
                source,
            })?;

            let report = diff(&baseline, &candidate)?;
            println!("{}", report);
            Ok(if report.is_clean() {
                Outcome::Clean
            } else {
                Outcome::Mismatch
            })
        }
        Command::Square { input } => {
            let sq = parse_square(&input)?;
            println!("index: {}", sq.idx());
            println!("label: {}", sq);
            println!("mask: {:#018x}", sq.bitboard().0);
            println!("{}", sq.bitboard());
            Ok(Outcome::Clean)
        }
        Command::Table { direction } => {
            let code = match direction {
                Direction::MaskToLabel => mask_to_label_code(),
                Direction::LabelToMask => label_to_mask_code(),
            };
            print!("{}", code);
            Ok(Outcome::Clean)
        }
    }
}

pub fn parse_square(input: &str) -> Result<Square, DomainError> {
    let input = input.trim();
    if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        let mask =
            u64::from_str_radix(hex, 16).map_err(|_| DomainError::Label(input.to_owned()))?;
        Bitboard(mask).single_square()
    } else if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        let idx = input
            .parse::<usize>()
            .map_err(|_| DomainError::Label(input.to_owned()))?;
        Square::from_idx(idx)
    } else {
        input.parse()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("e4", Ok(Square::E4); "label")]
    #[test_case("36", Ok(Square::E4); "index")]
    #[test_case("0x1000000000", Ok(Square::E4); "mask")]
    #[test_case("0x1", Ok(Square::A8); "lowest bit")]
    #[test_case("64", Err(DomainError::SquareOutOfRange(64)); "index out of range")]
    #[test_case("0x0", Err(DomainError::EmptyMask); "empty mask")]
    #[test_case("0x3", Err(DomainError::MultipleBits(3)); "two bits")]
    #[test_case("0xzz", Err(DomainError::Label("0xzz".to_owned())); "bad hex")]
    #[test_case("k9", Err(DomainError::Label("k9".to_owned())); "bad label")]
    fn square_input(input: &str, expected: Result<Square, DomainError>) {
        assert_eq!(parse_square(input), expected);
    }

    #[test]
    fn parses_diff_command() {
        let cli = Cli::try_parse_from(["perft", "diff", "e2e4: 20", "e2e4: 21"]).unwrap();
        match cli.command {
            Command::Diff {
                baseline,
                candidate,
            } => {
                assert_eq!(baseline, "e2e4: 20");
                assert_eq!(candidate, "e2e4: 21");
            }
            cmd => panic!("unexpected command {cmd:?}"),
        }
    }

    #[test]
    fn table_direction_defaults_to_mask_to_label() {
        let cli = Cli::try_parse_from(["perft", "table"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Table {
                direction: Direction::MaskToLabel
            }
        ));
        let cli = Cli::try_parse_from(["perft", "table", "--direction", "label-to-mask"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Table {
                direction: Direction::LabelToMask
            }
        ));
    }

    #[test]
    fn diff_outcome() {
        let clean = handle_command(Command::Diff {
            baseline: "e2e4: 20\nd2d4: 20".to_owned(),
            candidate: "d2d4: 20\ne2e4: 20".to_owned(),
        })
        .unwrap();
        assert_eq!(clean, Outcome::Clean);

        let mismatch = handle_command(Command::Diff {
            baseline: "e2e4: 20".to_owned(),
            candidate: "e2e4: 19".to_owned(),
        })
        .unwrap();
        assert_eq!(mismatch, Outcome::Mismatch);
    }

    #[test]
    fn exit_statuses() {
        let diff_status = |baseline: &str, candidate: &str| {
            exit_status(&handle_command(Command::Diff {
                baseline: baseline.to_owned(),
                candidate: candidate.to_owned(),
            }))
        };
        assert_eq!(diff_status("e2e4: 20", "e2e4: 20"), 0);
        assert_eq!(diff_status("e2e4: 20", "e2e4: 21"), 1);
        assert_eq!(diff_status("e2e4: 20", ""), 1);
        assert_eq!(diff_status("e2e4: 20\ne2e4: 20", ""), 2);
        assert_eq!(diff_status("e2e4", ""), 2);
        assert_eq!(
            exit_status(&handle_command(Command::Square {
                input: "0x3".to_owned()
            })),
            2
        );
        assert_eq!(
            exit_status(&handle_command(Command::Table {
                direction: Direction::LabelToMask
            })),
            0
        );
    }

    #[test]
    fn diff_rejects_duplicates_and_bad_input() {
        assert!(matches!(
            handle_command(Command::Diff {
                baseline: "a2a3: 1\na2a3: 2".to_owned(),
                candidate: String::new(),
            }),
            Err(CliError::Diff(_))
        ));
        assert!(matches!(
            handle_command(Command::Diff {
                baseline: String::new(),
                candidate: "a2a3".to_owned(),
            }),
            Err(CliError::Parse {
                side: Side::Candidate,
                ..
            })
        ));
    }
}
