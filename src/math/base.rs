use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum NumberBase {
    Decimal,
    Binary,
    Hexadecimal,
}

impl NumberBase {
    pub fn place_value(&self) -> u32 {
        match self {
            NumberBase::Binary => 2,
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
        }
    }

    pub fn prefix(&self) -> &str {
        match self {
            NumberBase::Binary => "0b",
            NumberBase::Decimal => "",
            NumberBase::Hexadecimal => "0x",
        }
    }
}
