use clap::{Args, Parser, Subcommand, ValueEnum};
use keywright_types::PasswordStrategy;

#[derive(Parser, Debug)]
#[command(name = "keywright", version, about = "Random password and passphrase generator")]
pub struct Cli {
    #[arg(long, global = true, help = "Print credentials as JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate character passwords
    Password {
        #[arg(short, long, help = "Password length (12-31) [default: from config]")]
        length: Option<usize>,
        #[arg(short = 's', long, help = "Leave special characters out")]
        no_special: bool,
        #[arg(long, value_enum, help = "Candidate strategy [default: from config]")]
        strategy: Option<StrategyArg>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate passphrases from the curated word list
    Passphrase {
        #[arg(short = 'n', long, help = "Words per passphrase, within the configured bounds (2-6 unless changed) [default: from config]")]
        words: Option<usize>,
        #[arg(long, help = "Download and curate the word list first")]
        refresh: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate passphrases from a phonetic password service
    Phonetic {
        #[arg(short = 'n', long, help = "Words per passphrase, within the configured bounds (2-20 unless changed) [default: from config]")]
        words: Option<usize>,
        #[arg(short, long, help = "Length of the spelled-out password [default: from config]")]
        length: Option<usize>,
        #[arg(short = 's', long, help = "Leave special characters out")]
        no_special: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Download, curate and save the passphrase word list
    Curate,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    #[arg(short, long, default_value_t = 1, help = "Number of credentials")]
    pub qty: usize,
    #[arg(short, long, help = "Copy a credential to the clipboard")]
    pub copy: bool,
    #[arg(
        long,
        value_name = "N",
        help = "Which credential to copy; without it the first is copied, never a random one [default: 1]"
    )]
    pub pick: Option<usize>,
    #[arg(short, long, help = "Write credentials to the configured file")]
    pub file: bool,
    #[arg(short, long, help = "Mask credentials on screen")]
    pub obfuscate: bool,
}

impl OutputArgs {
    /// Credential number `--copy` acts on.
    #[must_use]
    pub fn copy_target(&self) -> usize {
        self.pick.unwrap_or(1)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    Sample,
    Seed,
}

impl From<StrategyArg> for PasswordStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Sample => PasswordStrategy::Sample,
            StrategyArg::Seed => PasswordStrategy::Seed,
        }
    }
}
