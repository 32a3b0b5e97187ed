//! Formats a [`Card`] as a fixed-width text card.
//!
//! Everything here is a pure function of the record: mana symbols become emoji via a
//! fixed substitution table, oracle and flavor text are greedily word-wrapped, and
//! two-part rows are padded out to [`CARD_WIDTH`] columns. Widths are counted in chars,
//! which is how the glyphs in the symbol table line up in a terminal.

use {
    std::{
        fmt,
        mem
    },
    crate::card::Card
};

/// Column width of the rendered card, dividers included.
pub const CARD_WIDTH: usize = 45;

/// Blank rows reserved for the card art.
const ART_ROWS: usize = 6;

macro_rules! manamoji {
    ($($sym:expr => $emoji:expr;)+) => {
        /// Replaces each bracketed mana or tap symbol with its emoji glyph.
        ///
        /// Symbols not in the table are left verbatim; symbols never overlap, so the
        /// order of the individual replacements does not matter.
        pub fn with_manamoji(s: &str) -> String {
            $(
                let mut split = s.split($sym);
                let mut s = split.next().expect("failed to convert manamoji").to_owned();
                for part in split {
                    s.push_str($emoji);
                    s.push_str(part);
                }
            )+
            s
        }
    };
}

manamoji! {
    "{W}" => "☀️ ";
    "{U}" => "💧";
    "{B}" => "💀";
    "{R}" => "🔥";
    "{G}" => "🌳";
    "{T}" => "↩️ ";
    "{1}" => "1️⃣ ";
    "{2}" => "2️⃣ ";
    "{3}" => "3️⃣ ";
    "{4}" => "4️⃣ ";
    "{5}" => "5️⃣ ";
    "{6}" => "6️⃣ ";
    "{7}" => "7️⃣ ";
    "{8}" => "8️⃣ ";
    "{9}" => "9️⃣ ";
    "{10}" => "🔟";
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// A row of `width` repetitions of `fill`.
pub fn filler(width: usize, fill: &str) -> String {
    fill.repeat(width)
}

/// Greedy word-wrap: words go onto the current line while they fit in `width` columns,
/// breaking before the word that would overflow. Newlines already present in the input
/// start a fresh line. Words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = Vec::default();
    for input_line in text.split('\n') {
        let mut line = String::default();
        for word in input_line.split(' ') {
            if line.is_empty() {
                line.push_str(word);
            } else if display_width(&line) + 1 + display_width(word) <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                out.push(mem::replace(&mut line, word.to_owned()));
            }
        }
        out.push(line);
    }
    out.join("\n")
}

/// A two-part row: `left`, then space fill out to `width` columns, then `right`.
/// If the parts alone exceed `width` the fill is clamped to zero and the row runs long.
pub fn pad_row(left: &str, right: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(left) + display_width(right));
    format!("{}{}{}", left, filler(fill, " "), right)
}

/// `"{power}/{toughness}"`, or the empty string for cards that have neither.
pub fn power_toughness(power: &str, toughness: &str) -> String {
    if power.is_empty() || toughness.is_empty() {
        String::default()
    } else {
        format!("{}/{}", power, toughness)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = filler(CARD_WIDTH, "-");
        writeln!(f, "{}", divider)?;
        writeln!(f, "{}", pad_row(&self.name, &with_manamoji(&self.mana_cost), CARD_WIDTH))?;
        writeln!(f, "{}", divider)?;
        for _ in 0..ART_ROWS {
            writeln!(f)?; //TODO render image_uris.art_crop as ASCII art here
        }
        writeln!(f, "{}", divider)?;
        writeln!(f, "{}", pad_row(&self.type_line, &format!("{} {}", self.rarity, self.set), CARD_WIDTH))?;
        writeln!(f, "{}", divider)?;
        writeln!(f, "{}", wrap(&with_manamoji(&self.oracle_text), CARD_WIDTH))?;
        writeln!(f, "{}", divider)?;
        writeln!(f, "{}", wrap(&self.flavor_text, CARD_WIDTH))?;
        writeln!(f, "{}", divider)?;
        writeln!(f, "{}", pad_row("", &power_toughness(&self.power, &self.toughness), CARD_WIDTH))?;
        writeln!(f, "{}", divider)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manamoji_replaces_every_occurrence() {
        assert_eq!(with_manamoji("{2}{G}"), "2️⃣ 🌳");
        assert_eq!(with_manamoji("{G}{G}{G}"), "🌳🌳🌳");
        assert_eq!(with_manamoji("{T}: Add {G}."), "↩️ : Add 🌳.");
    }

    #[test]
    fn manamoji_leaves_unknown_symbols_verbatim() {
        assert_eq!(with_manamoji("{X}{G/W}"), "{X}{G/W}");
        assert_eq!(with_manamoji("no symbols here"), "no symbols here");
    }

    #[test]
    fn manamoji_is_idempotent_once_replaced() {
        let once = with_manamoji("{W}{U}{B}{R}{G} and {10}");
        assert_eq!(with_manamoji(&once), once);
    }

    #[test]
    fn wrap_never_exceeds_width() {
        let text = "Whenever a creature enters the battlefield under your control, you gain 1 life.";
        for line in wrap(text, 20).split('\n') {
            assert!(line.chars().count() <= 20, "line too long: {:?}", line);
        }
    }

    #[test]
    fn wrap_preserves_words_in_order() {
        let text = "Flying, vigilance, and protection from the color of your choice";
        let wrapped = wrap(text, 16);
        assert_eq!(
            wrapped.split_whitespace().collect::<Vec<_>>(),
            text.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn wrap_starts_fresh_after_existing_newlines() {
        assert_eq!(wrap("Flying\nHaste", 45), "Flying\nHaste");
    }

    #[test]
    fn wrap_gives_oversized_words_their_own_line() {
        assert_eq!(wrap("a Ghazbán-Ogre-sized-word b", 5), "a\nGhazbán-Ogre-sized-word\nb");
    }

    #[test]
    fn pad_row_fills_to_exact_width() {
        let row = pad_row("Bear", "2/2", 45);
        assert_eq!(row.chars().count(), 45);
        assert!(row.starts_with("Bear"));
        assert!(row.ends_with("2/2"));
    }

    #[test]
    fn pad_row_clamps_instead_of_underflowing() {
        let row = pad_row("An Exceedingly Long Card Name Indeed", "mythic very-long-set-code", 10);
        assert_eq!(row, "An Exceedingly Long Card Name Indeedmythic very-long-set-code");
    }

    #[test]
    fn power_toughness_requires_both_sides() {
        assert_eq!(power_toughness("2", "3"), "2/3");
        assert_eq!(power_toughness("*", "*"), "*/*");
        assert_eq!(power_toughness("", "3"), "");
        assert_eq!(power_toughness("2", ""), "");
        assert_eq!(power_toughness("", ""), "");
    }

    #[test]
    fn renders_canned_card() {
        let card = crate::parse_card(r#"{"name":"Bear","mana_cost":"{2}{G}","type_line":"Creature — Bear","power":"2","toughness":"2","set":"LEA","rarity":"common"}"#).unwrap();
        let rendered = card.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        let name_row = lines[1];
        assert!(name_row.starts_with("Bear"));
        assert!(name_row.ends_with("🌳"));
        assert!(name_row.contains("  "), "name and cost should be padded apart");
        let type_row = lines[10];
        assert!(type_row.starts_with("Creature — Bear"));
        assert!(type_row.ends_with("common LEA"));
        let pt_row = lines[lines.len() - 2];
        assert!(pt_row.ends_with("2/2"));
        assert_eq!(pt_row.chars().count(), CARD_WIDTH);
        for divider in &[lines[0], lines[2], lines[lines.len() - 1]] {
            assert_eq!(*divider, "-".repeat(CARD_WIDTH));
        }
    }

    #[test]
    fn renders_card_with_no_power_toughness() {
        let card = crate::parse_card(r#"{"name":"Counterspell","mana_cost":"{U}{U}","type_line":"Instant","oracle_text":"Counter target spell.","set":"LEA","rarity":"uncommon"}"#).unwrap();
        let rendered = card.to_string();
        assert!(!rendered.contains('/'));
        let lines = rendered.lines().collect::<Vec<_>>();
        let pt_row = lines[lines.len() - 2];
        assert_eq!(pt_row.trim(), "");
    }
}
