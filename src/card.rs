//! Mirror of the JSON object returned by Scryfall's random-card endpoint.
//!
//! These are plain data-transfer structs decoded once per run and never mutated. Every
//! struct takes container-level `#[serde(default)]`, so a field the API omits is simply
//! left at its type's default value rather than failing the decode.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageUris {
    pub small: String,
    pub normal: String,
    pub large: String,
    pub png: String,
    pub art_crop: String,
    pub border_crop: String
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Legalities {
    pub standard: String,
    pub future: String,
    pub frontier: String,
    pub modern: String,
    pub legacy: String,
    pub pauper: String,
    pub vintage: String,
    pub penny: String,
    pub commander: String,
    #[serde(rename = "1v1")]
    pub one_v_one: String,
    pub duel: String,
    pub brawl: String
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RelatedUris {
    pub gatherer: String,
    pub tcgplayer_decks: String,
    pub edhrec: String,
    pub mtgtop8: String
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PurchaseUris {
    pub amazon: String,
    pub ebay: String,
    pub tcgplayer: String,
    pub magiccardmarket: String,
    pub cardhoarder: String,
    pub card_kingdom: String,
    pub mtgo_traders: String,
    pub coolstuffinc: String
}

/// One card, as returned by the card API.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Card {
    pub object: String,
    pub id: String,
    pub oracle_id: String,
    pub multiverse_ids: Vec<u64>,
    pub name: String,
    pub lang: String,
    pub uri: String,
    pub scryfall_uri: String,
    pub layout: String,
    pub highres_image: bool,
    pub image_uris: ImageUris,
    pub mana_cost: String,
    pub cmc: f64,
    pub type_line: String,
    pub oracle_text: String,
    pub power: String,
    pub toughness: String,
    pub colors: Vec<String>,
    pub color_identity: Vec<String>,
    pub legalities: Legalities,
    pub reserved: bool,
    pub foil: bool,
    pub nonfoil: bool,
    pub oversized: bool,
    pub reprint: bool,
    pub set: String,
    pub set_name: String,
    pub set_uri: String,
    pub set_search_uri: String,
    pub scryfall_set_uri: String,
    pub rulings_uri: String,
    pub prints_search_uri: String,
    pub collector_number: String,
    pub digital: bool,
    pub rarity: String,
    pub flavor_text: String,
    pub watermark: String,
    pub illustration_id: String,
    pub artist: String,
    pub frame: String,
    pub full_art: bool,
    pub border_color: String,
    pub timeshifted: bool,
    pub colorshifted: bool,
    pub futureshifted: bool,
    pub edhrec_rank: u32,
    pub tix: String,
    pub related_uris: RelatedUris,
    pub purchase_uris: PurchaseUris
}
