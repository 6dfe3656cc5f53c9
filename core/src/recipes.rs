//! Sample recipes shipped with the library.
//!
//! Hosts use these as starter content; the CLI runs [`PANCAKES`] when no file
//! is given.

/// A named sample recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub id: &'static str,
    pub title: &'static str,
    pub source: &'static str,
}

/// The default recipe.
pub const PANCAKES: &str = r#"---
title: Classic Pancakes
description: Fluffy golden pancakes with adjustable servings
author: DevGourmet Team
servings: 4
prepTime: 10 minutes
cookTime: 15 minutes
tags: [breakfast, quick, family-friendly]
---

// Classic Pancakes
let servings = 4;

image("Finished Pancakes", "https://images.unsplash.com/photo-1528207776546-365bb710ee93?w=800", "Golden fluffy pancakes stacked");

// Dry ingredients
add("flour", 200 * servings, "grams");
add("sugar", 20 * servings, "grams");
add("salt", 2 * servings, "grams");

// Wet ingredients
add("milk", 300 * servings, "ml");
add("egg", 2 * servings);
add("butter", 30 * servings, "grams");

mix("dry ingredients in a bowl");
mix("wet ingredients separately");
pour("wet into dry mixture");
mix("until just combined");

rest(5, "minutes");

cook(3, "minutes");
flip();
cook(2, "minutes");

serve("warm with maple syrup and butter");
"#;

pub const SPAGHETTI: &str = r#"// Spaghetti Marinara
let servings = 4;
let spiciness = 2; // 1-5 scale

// Pasta
add("spaghetti", 100 * servings, "grams");
add("water", 1000 * servings, "ml");
add("salt", 10 * servings, "grams");

// Sauce
add("tomato", 400 * servings, "grams");
add("garlic", 2 * servings, "cloves");
add("onion", 1 * servings);
add("oil", 30 * servings, "ml");
add("pepper", 2 * spiciness, "grams");

cook(10, "minutes", "pasta until al dente");

stir("garlic and onion in oil");
cook(3, "minutes");
pour("tomatoes into pan");
season("with salt and pepper");
simmer(15, "minutes");

mix("pasta with sauce");
serve("hot with parmesan cheese");
"#;

pub const COOKIES: &str = r#"// Chocolate Chip Cookies
let servings = 24; // cookies
let sweetness = 3; // 1-5 scale

add("flour", 280, "grams");
add("salt", 2, "grams");
add("butter", 170, "grams");
add("sugar", 100 + (20 * sweetness), "grams");
add("egg", 2);
add("vanilla", 5, "ml");
add("chocolate", 200, "grams");

mix("butter and sugar until creamy");
mix("in eggs and vanilla");
mix("flour and salt into wet mixture");
stir("in the chocolate");

rest(30, "minutes");
bake(12, "minutes");
rest(5, "minutes");

serve("warm with cold milk");
"#;

pub const SAMPLES: &[Sample] = &[
    Sample {
        id: "pancakes",
        title: "Classic Pancakes",
        source: PANCAKES,
    },
    Sample {
        id: "spaghetti",
        title: "Spaghetti Marinara",
        source: SPAGHETTI,
    },
    Sample {
        id: "cookies",
        title: "Chocolate Chip Cookies",
        source: COOKIES,
    },
];

/// Look up a sample by id.
pub fn find(id: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.id == id)
}
