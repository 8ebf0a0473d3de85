use self::args::{ToolArgs, ToolSubcommand};
use clap::Parser;

mod args;
mod canonical_string;
mod encode_key;
mod parse_header;
mod util;

fn main() -> miette::Result<()> {
    let args = ToolArgs::parse();
    match args.subcommand {
        ToolSubcommand::ParseHeader(args) => parse_header::do_it(args.header),
        ToolSubcommand::EncodeKey(args) => encode_key::do_it(&args.hex),
        ToolSubcommand::CanonicalString(args) => canonical_string::do_it(&args),
    }
}
