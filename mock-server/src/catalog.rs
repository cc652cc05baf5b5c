//! Fixed ingredient catalog served by `GET /api/ingredients`.
//!
//! Identifiers match the live service's catalog so the same order fixtures
//! work against both.

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub proteins: u32,
    pub fat: u32,
    pub carbohydrates: u32,
    pub calories: u32,
    pub price: u32,
    pub image: &'static str,
    #[serde(skip)]
    pub adjective: &'static str,
}

macro_rules! ingredient {
    ($id:literal, $name:literal, $kind:literal, $adj:literal, [$p:literal, $f:literal, $c:literal, $cal:literal], $price:literal) => {
        Ingredient {
            id: $id,
            name: $name,
            kind: $kind,
            proteins: $p,
            fat: $f,
            carbohydrates: $c,
            calories: $cal,
            price: $price,
            image: concat!("https://code.s3.yandex.net/react/code/", $id, ".png"),
            adjective: $adj,
        }
    };
}

pub static CATALOG: &[Ingredient] = &[
    ingredient!("61c0c5a71d1f82001bdaaa6c", "Crater bun N-200i", "bun", "Crater", [80, 24, 53, 420], 1255),
    ingredient!("61c0c5a71d1f82001bdaaa6d", "Fluorescent bun R2-D3", "bun", "Fluorescent", [44, 26, 85, 643], 988),
    ingredient!("61c0c5a71d1f82001bdaaa6e", "Martian magnolia bio-cutlet", "main", "Bio-cutlet", [420, 142, 242, 4242], 424),
    ingredient!("61c0c5a71d1f82001bdaaa6f", "Luminescent tetraodontimorph fillet", "main", "Luminescent", [44, 26, 85, 643], 988),
    ingredient!("61c0c5a71d1f82001bdaaa70", "Beef meteorite (chop)", "main", "Meteorite", [800, 800, 300, 2674], 3000),
    ingredient!("61c0c5a71d1f82001bdaaa71", "Immortal Protostomia mollusc meat", "main", "Protostomia", [433, 244, 33, 420], 1337),
    ingredient!("61c0c5a71d1f82001bdaaa72", "Spicy-X sauce", "sauce", "Spicy", [30, 20, 40, 30], 90),
    ingredient!("61c0c5a71d1f82001bdaaa73", "Signature Space Sauce", "sauce", "Space", [50, 22, 11, 14], 80),
    ingredient!("61c0c5a71d1f82001bdaaa74", "Traditional galactic sauce", "sauce", "Galactic", [42, 24, 42, 99], 15),
    ingredient!("61c0c5a71d1f82001bdaaa75", "Antarian flatwalker spike sauce", "sauce", "Antarian", [101, 99, 100, 100], 88),
    ingredient!("61c0c5a71d1f82001bdaaa76", "Crunchy mineral rings", "main", "Mineral", [808, 689, 609, 986], 300),
    ingredient!("61c0c5a71d1f82001bdaaa77", "Fallenian tree fruit", "main", "Fallenian", [20, 5, 55, 77], 874),
    ingredient!("61c0c5a71d1f82001bdaaa78", "Martian alpha-saccharide crystals", "main", "Alpha-saccharide", [234, 432, 111, 189], 762),
    ingredient!("61c0c5a71d1f82001bdaaa79", "Exo-Plantago mini salad", "main", "Exo-plantago", [1, 2, 3, 6], 4400),
    ingredient!("61c0c5a71d1f82001bdaaa7a", "Asteroid-mould cheese", "main", "Asteroid", [84412, 242201, 3377, 4142], 4142),
];

pub fn find(id: &str) -> Option<&'static Ingredient> {
    CATALOG.iter().find(|ingredient| ingredient.id == id)
}

/// Burger name built from the distinct ingredients, e.g.
/// `"Fluorescent Antarian burger"`.
pub fn burger_name(ingredients: &[&Ingredient]) -> String {
    let mut words: Vec<&str> = Vec::new();
    for ingredient in ingredients {
        if !words.contains(&ingredient.adjective) {
            words.push(ingredient.adjective);
        }
    }
    words.push("burger");
    words.join(" ")
}
