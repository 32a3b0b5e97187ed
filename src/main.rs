//! Fetches one random card from Scryfall and prints it to stdout as a fixed-width text card.

#![deny(rust_2018_idioms, unused, unused_import_braces, unused_qualifications, warnings)]

use {
    std::process,
    log::error,
    card_o_matic::{
        fetch_card,
        RANDOM_CARD_URL
    }
};

fn main() {
    env_logger::init();
    match fetch_card(RANDOM_CARD_URL) {
        Ok(card) => print!("{}", card),
        Err(e) => {
            error!("failed to fetch card: {:?}", e);
            process::exit(1);
        }
    }
}
