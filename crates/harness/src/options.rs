use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SpaceKind {
    /// Real process addresses
    #[default]
    Host,
    /// Deterministic simulated memory
    #[value(name = "sim", alias = "simulated")]
    Simulated,
}

/// Chain the foo/bar/boo handlers until each round's address assertion holds
#[derive(Parser, Clone, Debug, Default, PartialEq, Eq)]
#[command(name = "level42", version)]
pub struct Options {
    /// Where handler addresses come from
    #[arg(long, value_enum, default_value_t = SpaceKind::Host)]
    pub space: SpaceKind,

    /// Dump recorded addresses after every round
    #[arg(short, long)]
    pub verbose: bool,
}
