//! The built-in collection: fifteen described objects plus image slots that
//! have not been written up yet.

use super::Acquisition::{Bought, Gifted, Unknown};
use super::{Acquisition, Item, ItemId};

/// Ids 16..=UNDESCRIBED_LAST are photographed but not yet described.
const UNDESCRIBED_LAST: ItemId = 50;

struct Row {
    id: ItemId,
    image: &'static str,
    name: &'static str,
    color: &'static str,
    acquired: Acquisition,
    country: &'static str,
    used_for: &'static str,
    story: &'static str,
    price: &'static str,
    link: &'static str,
}

const DESCRIBED: &[Row] = &[
    Row {
        id: 1,
        image: "001.png",
        name: "Cotton Knitted Throw Blanket",
        color: "Mustard, Yellow",
        acquired: Bought,
        country: "India",
        used_for: "Home",
        story: "",
        price: "Rs.3699",
        link: "https://pluchi.com/products/kelly-knit-cotton-knitted-all-season-ac-throw-blanket-mustard",
    },
    Row {
        id: 2,
        image: "002.png",
        name: "Golden Gate Bridge tower model",
        color: "Orange",
        acquired: Bought,
        country: "USA",
        used_for: "",
        story: "Rode across the bridge on bicycles with my partner. Best day ever in perfect weather. Bought it after.",
        price: "$16",
        link: "https://www.goldengatebridgestore.org/mobile/Product.aspx?ProductCode=O-OTOWR",
    },
    Row {
        id: 3,
        image: "003.png",
        name: "Illustrated Everywhere Mug",
        color: "Multicolor",
        acquired: Bought,
        country: "USA",
        used_for: "",
        story: "",
        price: "$42",
        link: "https://museumstore.sfmoma.org/products/kristina-micotti-everywhere-mug?variant=42706607472818",
    },
    Row {
        id: 4,
        image: "004.png",
        name: "Japanese Pilot Brush Pen",
        color: "White, Black",
        acquired: Bought,
        country: "Japan",
        used_for: "",
        story: "Overspent and overjoyed in a Japanese stationery store.",
        price: "2000 yen",
        link: "",
    },
    Row {
        id: 5,
        image: "005.png",
        name: "Crinkle Stripe Tote",
        color: "Brown",
        acquired: Bought,
        country: "India",
        used_for: "",
        story: "",
        price: "Rs. 1999",
        link: "https://akiiko.com/collections/most-loved/products/crinkle-stripe-tote-espresso",
    },
    Row {
        id: 6,
        image: "006.png",
        name: "Faces – Hair Claw Clip",
        color: "Orange, Multicolor",
        acquired: Gifted,
        country: "USA",
        used_for: "",
        story: "Walked into a museum design store with my best friend. We both got claw clips.",
        price: "$22",
        link: "https://www.citybirddetroit.com/products/carolyn-suzuki-hair-claw",
    },
    Row {
        id: 7,
        image: "007.png",
        name: "DIY Japan Architecture Models",
        color: "Brown",
        acquired: Bought,
        country: "Japan",
        used_for: "",
        story: "Time in Nara.",
        price: "3000 yen",
        link: "https://shibuya-stationery.com/collections/diy-models/products/pusu-pusu-kyoto-diy-models",
    },
    Row {
        id: 8,
        image: "008.png",
        name: "Matcha cap",
        color: "Green",
        acquired: Bought,
        country: "USA",
        used_for: "",
        story: "",
        price: "$34",
        link: "https://museumstore.sfmoma.org/products/hat-matcha-baseball-cap?variant=45672870707378",
    },
    Row {
        id: 9,
        image: "009.png",
        name: "Concrete tabletop fire burner",
        color: "Grey",
        acquired: Gifted,
        country: "India",
        used_for: "Home",
        story: "",
        price: "Rs.2499",
        link: "https://www.calmbyfire.com/products/kronos-rectangular-fireplace",
    },
    Row {
        id: 10,
        image: "010.png",
        name: "Floral cotton socks",
        color: "Green",
        acquired: Unknown,
        country: "India",
        used_for: "",
        story: "",
        price: "Rs.799",
        link: "https://urbansocks.in/products/cute-flower-edition-women-socks",
    },
    Row {
        id: 11,
        image: "11.png",
        name: "Brass decorative boat",
        color: "Gold",
        acquired: Gifted,
        country: "India",
        used_for: "",
        story: "A farewell gift from a close colleague, with a note. Sits on the TV cabinet now.",
        price: "Rs.1350",
        link: "https://www.nicobar.com/products/boat-origami",
    },
    Row {
        id: 12,
        image: "12.png",
        name: "Lollia Elegance shea butter hand cream",
        color: "Grey, White",
        acquired: Bought,
        country: "USA",
        used_for: "",
        story: "Was buying a few for family, liked the fragrance and kept one.",
        price: "$9",
        link: "https://margotelena.com/products/elegance-shea-butter-handcreme",
    },
    Row {
        id: 13,
        image: "13.png",
        name: "Indigo ceramic bud vase",
        color: "Blue",
        acquired: Bought,
        country: "India",
        used_for: "",
        story: "Plants are hard to keep alive. A single stem seemed doable.",
        price: "Rs.280",
        link: "https://www.fabindia.com/indigo-guldan-ceramic-cut-bud-vase-20105136",
    },
    Row {
        id: 14,
        image: "14.png",
        name: "Adidas Gazelle sneakers",
        color: "Green",
        acquired: Gifted,
        country: "France",
        used_for: "",
        story: "From my brother, after his Paris trip.",
        price: "€72",
        link: "https://www.adidas.fr/chaussure-gazelle-indoor/JS1396.html",
    },
    Row {
        id: 15,
        image: "15.png",
        name: "Kulhar glasses set",
        color: "Green, Beige",
        acquired: Gifted,
        country: "India",
        used_for: "",
        story: "A friend gave it for no occasion at all. She knows I love chai.",
        price: "Rs.2100",
        link: "https://www.nicobar.com/products/galle-kulhar-set-of-4-1",
    },
];

pub(super) fn items() -> Vec<Item> {
    let described = DESCRIBED.iter().map(|row| Item {
        id: row.id,
        image: row.image.to_string(),
        name: row.name.to_string(),
        color: row.color.to_string(),
        country: row.country.to_string(),
        acquired: row.acquired,
        used_for: row.used_for.to_string(),
        story: row.story.to_string(),
        price: row.price.to_string(),
        link: row.link.to_string(),
    });
    let first_blank = DESCRIBED.len() as ItemId + 1;
    let blank = (first_blank..=UNDESCRIBED_LAST).map(|id| Item {
        id,
        image: format!("{}.png", id),
        name: String::new(),
        color: String::new(),
        country: String::new(),
        acquired: Acquisition::Unknown,
        used_for: String::new(),
        story: String::new(),
        price: String::new(),
        link: String::new(),
    });
    described.chain(blank).collect()
}
