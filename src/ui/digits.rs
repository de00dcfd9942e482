//! Five-row block font for the large readouts.

pub const GLYPH_HEIGHT: u16 = 5;

const GAP: &str = " ";

fn glyph(c: char) -> [&'static str; 5] {
    match c {
        '0' => ["█████", "█   █", "█   █", "█   █", "█████"],
        '1' => ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "],
        '2' => ["█████", "    █", "█████", "█    ", "█████"],
        '3' => ["█████", "    █", "█████", "    █", "█████"],
        '4' => ["█   █", "█   █", "█████", "    █", "    █"],
        '5' => ["█████", "█    ", "█████", "    █", "█████"],
        '6' => ["█████", "█    ", "█████", "█   █", "█████"],
        '7' => ["█████", "    █", "    █", "    █", "    █"],
        '8' => ["█████", "█   █", "█████", "█   █", "█████"],
        '9' => ["█████", "█   █", "█████", "    █", "█████"],
        ':' => ["   ", " █ ", "   ", " █ ", "   "],
        _ => ["     "; 5],
    }
}

/// Lay `text` out in block glyphs, one string per row.
pub fn big_text(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT as usize)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(GAP)
        })
        .collect()
}

/// Display width in columns of [`big_text`] output.
pub fn big_text_width(text: &str) -> u16 {
    big_text(text)
        .first()
        .map(|row| row.chars().count() as u16)
        .unwrap_or(0)
}
