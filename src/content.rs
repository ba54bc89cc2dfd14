//! Copy, contact details and menu data shown on the page.

use log::error;
use serde::Deserialize;
use thiserror::Error;

use crate::animation::error::AnimationError;
use crate::animation::spec::AnimationSpec;
use crate::config;

pub const CAFE_NAME: &str = "Ditcafe";
pub const TAGLINE: &str = "Where Every Cup Tells a Story";
pub const NAV_TAGLINE: &str = "Premium Coffee Experience";

pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { name: "Beranda", href: "#home" },
    NavItem { name: "Tentang", href: "#about" },
    NavItem { name: "Menu", href: "#menu" },
];

/// Counter shown in the hero or the about stats strip.
#[derive(Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub end: f64,
    pub decimals: i32,
    pub duration_ms: i64,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Stat {
    pub fn spec(&self) -> Result<AnimationSpec, AnimationError> {
        AnimationSpec::builder(self.end)
            .duration_ms(self.duration_ms)
            .decimals(self.decimals)
            .prefix(self.prefix)
            .suffix(self.suffix)
            .build()
    }

    /// Text rendered when the counter cannot animate.
    pub fn static_text(&self) -> String {
        let decimals = usize::try_from(self.decimals).unwrap_or(0);
        format!("{}{:.*}{}", self.prefix, decimals, self.end, self.suffix)
    }
}

pub static HERO_STATS: [Stat; 3] = [
    Stat { label: "Happy Customers", end: 500.0, decimals: 0, duration_ms: 2500, prefix: "", suffix: "+" },
    Stat { label: "Coffee Variants", end: 50.0, decimals: 0, duration_ms: 2500, prefix: "", suffix: "+" },
    Stat { label: "Rating", end: 4.9, decimals: 1, duration_ms: 3000, prefix: "", suffix: "" },
];

pub static ABOUT_STATS: [Stat; 4] = [
    Stat { label: "Happy Customers", end: 500.0, decimals: 0, duration_ms: 2500, prefix: "", suffix: "+" },
    Stat { label: "Coffee Variants", end: 50.0, decimals: 0, duration_ms: 2000, prefix: "", suffix: "+" },
    Stat { label: "Experience", end: 3.0, decimals: 0, duration_ms: 2200, prefix: "", suffix: " Years" },
    Stat { label: "Service Hours", end: 24.0, decimals: 0, duration_ms: 1800, prefix: "", suffix: "/7" },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "☕",
        title: "Premium Quality",
        description: "Biji kopi pilihan terbaik dari perkebunan lokal dan internasional, dipanggang dengan sempurna untuk menciptakan cita rasa yang tak terlupakan.",
    },
    Feature {
        icon: "🏠",
        title: "Cozy Atmosphere",
        description: "Suasana hangat dan nyaman dengan desain interior yang instagramable, perfect untuk me-time, meeting, atau quality time bersama teman.",
    },
    Feature {
        icon: "👨‍🍳",
        title: "Expert Baristas",
        description: "Tim barista berpengalaman yang passionate dalam menghadirkan setiap cup dengan teknik brewing terbaik dan latte art yang memukau.",
    },
    Feature {
        icon: "🍪",
        title: "Fresh Pastries",
        description: "Pastry dan makanan ringan yang dibuat fresh setiap hari, perfect pairing untuk melengkapi pengalaman ngopi Anda.",
    },
    Feature {
        icon: "📶",
        title: "Free Wi-Fi",
        description: "Koneksi internet super cepat untuk mendukung produktivitas Anda, cocok untuk digital nomad dan remote workers.",
    },
    Feature {
        icon: "🎵",
        title: "Live Music",
        description: "Live acoustic performance di weekend yang menciptakan ambiance yang lebih hidup dan memorable untuk pengunjung.",
    },
];

pub const ADDRESS_LINES: [&str; 3] = [
    "Komplek Pertokoan Central Park,",
    "Jl. Patih Jelantik, Kuta, Kec. Kuta,",
    "Kabupaten Badung, Bali 80361",
];

pub const PHONE: &str = "+62 895-3471-64682";
pub const EMAILS: [&str; 2] = ["info@ditcafe.com", "adityabayuw@gmail.com"];

pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
    pub highlight: bool,
}

pub const OPENING_HOURS: [OpeningHours; 3] = [
    OpeningHours { days: "Senin - Jumat", hours: "07:00 - 22:00", highlight: false },
    OpeningHours { days: "Sabtu - Minggu", hours: "08:00 - 23:00", highlight: false },
    OpeningHours { days: "Happy Hour", hours: "14:00 - 17:00", highlight: true },
];

pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "https://instagram.com/ditcafe"),
    ("Facebook", "https://facebook.com/ditcafe"),
    ("Twitter", "https://twitter.com/ditcafe"),
];

/// Google Maps directions to the café.
pub fn directions_url() -> String {
    let address = ADDRESS_LINES.join(" ");
    format!("{}{}", config::MAPS_DIRECTIONS_BASE, urlencoding::encode(&address))
}

/// `tel:` link for a display-formatted phone number.
pub fn tel_link(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", dialable)
}

const MENU_JSON: &str = include_str!("../content/menu.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Coffee,
    Pastry,
    Food,
    Dessert,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Coffee,
        MenuCategory::Pastry,
        MenuCategory::Food,
        MenuCategory::Dessert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Coffee => "Coffee",
            MenuCategory::Pastry => "Pastry",
            MenuCategory::Food => "Food",
            MenuCategory::Dessert => "Dessert",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuCategory::Coffee => "☕",
            MenuCategory::Pastry => "🍪",
            MenuCategory::Food => "🥪",
            MenuCategory::Dessert => "🍨",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub section: MenuCategory,
    pub title: String,
    pub description: String,
    pub price: String,
    /// Sub-category printed on the card, e.g. "Cold Coffee".
    pub category: String,
    pub rating: String,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub image: Option<String>,
    /// Shown instead of a photo when `image` is missing.
    #[serde(default)]
    pub glyph: Option<String>,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("menu catalog is malformed: {0}")]
    Menu(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let items = serde_json::from_str(json)?;
        Ok(Self { items })
    }

    /// The bundled catalog. A malformed file is logged and yields an empty menu.
    pub fn bundled() -> Self {
        Self::parse(MENU_JSON).unwrap_or_else(|e| {
            error!("{}", e);
            Self::default()
        })
    }

    pub fn items(&self, category: MenuCategory) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| item.section == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_fills_every_tab() {
        let catalog = MenuCatalog::parse(MENU_JSON).unwrap();
        let counts: Vec<usize> = MenuCategory::ALL
            .iter()
            .map(|category| catalog.items(*category).count())
            .collect();
        assert_eq!(counts, vec![6, 4, 4, 4]);
    }

    #[test]
    fn every_item_has_a_picture_or_glyph() {
        let catalog = MenuCatalog::parse(MENU_JSON).unwrap();
        for category in MenuCategory::ALL {
            for item in catalog.items(category) {
                assert!(item.image.is_some() || item.glyph.is_some(), "{} has nothing to show", item.title);
            }
        }
    }

    #[test]
    fn wrap_falls_back_to_glyph() {
        let catalog = MenuCatalog::parse(MENU_JSON).unwrap();
        let wrap = catalog
            .items(MenuCategory::Food)
            .find(|item| item.title == "Chicken Wrap")
            .unwrap();
        assert_eq!(wrap.image, None);
        assert_eq!(wrap.glyph.as_deref(), Some("🌯"));
        assert!(wrap.popular);
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let err = MenuCatalog::parse(r#"[{ "section": "brunch", "title": "Eggs" }]"#).unwrap_err();
        assert!(err.to_string().starts_with("menu catalog is malformed"));
    }

    #[test]
    fn all_stats_are_valid_animations() {
        for stat in HERO_STATS.iter().chain(ABOUT_STATS.iter()) {
            let spec = stat.spec().unwrap();
            assert_eq!(spec.initial_text(), spec.format(0.0));
        }
        assert_eq!(HERO_STATS[2].spec().unwrap().final_text(), "4.9");
        assert_eq!(ABOUT_STATS[2].spec().unwrap().final_text(), "3 Years");
    }

    #[test]
    fn broken_stat_is_rejected_and_shown_statically() {
        let stat = Stat { label: "Broken", end: 4.9, decimals: 1, duration_ms: 0, prefix: "★ ", suffix: "" };
        assert!(matches!(stat.spec(), Err(AnimationError::NonPositiveDuration(0))));
        assert_eq!(stat.static_text(), "★ 4.9");

        let stat = Stat { label: "Broken", end: 12.0, decimals: -2, duration_ms: 1000, prefix: "", suffix: "+" };
        assert!(matches!(stat.spec(), Err(AnimationError::NegativeDecimals(-2))));
        assert_eq!(stat.static_text(), "12+");
    }

    #[test]
    fn links_are_dialable_and_encoded() {
        assert_eq!(tel_link(PHONE), "tel:+62895347164682");
        let url = directions_url();
        assert!(url.starts_with(config::MAPS_DIRECTIONS_BASE));
        assert!(url.contains("Komplek%20Pertokoan%20Central%20Park%2C"));
        assert!(!url.contains(' '));
    }
}
