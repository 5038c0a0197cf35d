//! The fixed catalog used when nothing has been persisted yet.

use crate::{CatalogState, Product, ProductId};

/// Counter value that accompanies the seed products.
pub const SEED_NEXT_ID: ProductId = ProductId::new(8);

const SEED: [(u64, &str, &str, f64, bool, &str); 7] = [
    (
        1,
        "Смартфон XYZ",
        "Современный смартфон с отличной камерой",
        29999.0,
        true,
        "/img/smartphone_01.webp",
    ),
    (
        2,
        "Ноутбук ABC",
        "Мощный ноутбук для работы и игр",
        59999.0,
        true,
        "/img/notebook_01.webp",
    ),
    (
        3,
        "Наушники QWE",
        "Беспроводные наушники с шумоподавлением",
        8999.0,
        false,
        "",
    ),
    (
        4,
        "Смартфон Pro X",
        "Флагманский смартфон с продвинутой камерой и быстрым процессором",
        49999.0,
        true,
        "/img/smartphone_02.png",
    ),
    (
        5,
        "Смартфон Lite",
        "Доступный смартфон с хорошим соотношением цена/качество",
        15999.0,
        true,
        "/img/smartphone_03.webp",
    ),
    (
        6,
        "Игровой ноутбук Gamer",
        "Мощный игровой ноутбук с высокопроизводительной видеокартой",
        89999.0,
        true,
        "/img/notebook_02.webp",
    ),
    (
        7,
        "Ультрабук Slim",
        "Тонкий и легкий ноутбук для работы и путешествий",
        54999.0,
        false,
        "/img/notebook_01.png",
    ),
];

/// Build a fresh copy of the seed catalog (7 products, next id 8).
pub fn seed_state() -> CatalogState {
    let products = SEED
        .iter()
        .map(
            |&(id, name, description, price, available, image_url)| Product {
                id: ProductId::new(id),
                name: name.to_string(),
                description: description.to_string(),
                price,
                available,
                image_url: image_url.to_string(),
            },
        )
        .collect();
    CatalogState {
        products,
        next_id: SEED_NEXT_ID,
    }
}
