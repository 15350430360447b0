// Copyright 2026 The srcards Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::CommandFactory;
use clap::Parser;
use log::LevelFilter;
use srcards_core::Fallible;

use crate::cmd::review::ReviewConfig;
use crate::cmd::review::review_deck;
use crate::store::StoreKind;

/// Exit status after printing usage or version information.
const INFO_EXIT_CODE: u8 = 2;

/// Review the due cards of a flashcard deck.
#[derive(Parser)]
#[command(name = "srcards", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Print command usage.
    #[arg(short, long)]
    help: bool,
    /// Print the version, license and source.
    #[arg(short, long)]
    version: bool,
    /// Storage backend of the deck. By default, it is inferred from the file extension.
    #[arg(long, value_enum)]
    store: Option<StoreKind>,
    /// Log debug information to stderr.
    #[arg(long)]
    verbose: bool,
    /// Path to the deck: a JSON document or an SQLite database.
    deck: Option<PathBuf>,
}

pub fn entrypoint() -> Fallible<ExitCode> {
    let args: Args = Args::parse();

    if args.version {
        print_version();
        return Ok(ExitCode::from(INFO_EXIT_CODE));
    }

    let deck = match args.deck {
        Some(deck) if !args.help => deck,
        _ => {
            let mut command = Args::command();
            println!("{}", command.render_help());
            return Ok(ExitCode::from(INFO_EXIT_CODE));
        }
    };

    // RUST_LOG is not consulted, the level comes from `--verbose` only.
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let store = args.store.unwrap_or_else(|| StoreKind::infer(&deck));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let config = ReviewConfig { deck, store, seed };
    review_deck(config)?;
    Ok(ExitCode::SUCCESS)
}

fn print_version() {
    println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("{} License", env!("CARGO_PKG_LICENSE"));
    println!("Source: <{}>", env!("CARGO_PKG_REPOSITORY"));
}
