//! Decorative ingredient glyphs.

/// Shown for ingredients without a dedicated glyph.
pub const DEFAULT_GLYPH: &str = "🍽️";

/// Glyph for an ingredient name, matched case-insensitively.
pub fn glyph_for(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "flour" => "🌾",
        "egg" | "eggs" => "🥚",
        "milk" => "🥛",
        "sugar" | "rice" => "🍚",
        "salt" => "🧂",
        "butter" => "🧈",
        "water" => "💧",
        "oil" => "🫒",
        "cheese" => "🧀",
        "tomato" => "🍅",
        "onion" => "🧅",
        "garlic" => "🧄",
        "pasta" | "spaghetti" => "🍝",
        "chicken" => "🍗",
        "beef" => "🥩",
        "fish" => "🐟",
        "shrimp" => "🦐",
        "bread" => "🍞",
        "chocolate" => "🍫",
        "vanilla" => "🌼",
        "cinnamon" => "🥢",
        "pepper" => "🌶️",
        "lemon" => "🍋",
        "apple" => "🍎",
        "banana" => "🍌",
        "strawberry" => "🍓",
        "carrot" => "🥕",
        "potato" => "🥔",
        "spinach" => "🥬",
        "broccoli" => "🥦",
        "mushroom" => "🍄",
        "honey" => "🍯",
        "yeast" => "🧪",
        _ => DEFAULT_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ingredients() {
        assert_eq!(glyph_for("flour"), "🌾");
        assert_eq!(glyph_for("Eggs"), "🥚");
        assert_eq!(glyph_for("MILK"), "🥛");
    }

    #[test]
    fn test_unknown_ingredient_uses_default() {
        assert_eq!(glyph_for("saffron"), DEFAULT_GLYPH);
        assert_eq!(glyph_for(""), DEFAULT_GLYPH);
        // Whole-name match only.
        assert_eq!(glyph_for("flour tortilla"), DEFAULT_GLYPH);
    }
}
