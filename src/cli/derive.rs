//! Derive command implementation.
//!
//! Derives one word's colour and prints the hash, HSL triple, and hex
//! value to stdout.

use clap::Args;

use crate::cli::ParamArgs;
use crate::engine;
use crate::error::Result;

/// Derive and print the colour for a single word
#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Word to derive a colour for
    #[arg(required = true)]
    pub word: String,

    /// Seed mixed into the hash
    #[arg(long, default_value_t = 0)]
    pub seed: i32,

    #[command(flatten)]
    pub params: ParamArgs,
}

pub fn run(args: DeriveArgs) -> Result<()> {
    let params = args.params.to_params();
    params.validate()?;

    match engine::derive(&args.word, args.seed, &params) {
        Some(derived) => {
            println!("hash: {}", derived.hash);
            println!(
                "hsl({:.1}, {:.1}%, {:.1}%)",
                derived.hue, derived.saturation, derived.lightness
            );
            println!("{}", derived.colour());
        }
        None => println!("(empty word, no colour)"),
    }

    Ok(())
}
