use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// Brand list – static configuration
// ---------------------------------------------------------------------------

/// Known brand tokens stripped from product names, applied in order.
/// The list is fixed at build time; there is no runtime mutation.
pub const COMMON_BRANDS: &[&str] = &[
    "Compliments",
    "Maple Lodge Farms",
    "Maple Leaf Natural Selections",
    "President's Choice",
    "Kirkland Signature",
    "Great Value",
    "No Name",
    "Nature's Path",
    "Dempster's",
    "Wonder",
    "Irresistibles",
    "Farmer's Market",
    "Schneiders",
    "Lactantia",
    "Silk",
    "Yoplait",
    "Danone",
    "Activia",
    "Philadelphia",
    "Kraft",
    "Heinz",
    "Campbell's",
    "Nestle",
    "Oreo",
    "Quaker",
    "Kellogg's",
    "Post",
    "General Mills",
    "Barilla",
    "Catelli",
    "Delverde",
    "Ragu",
    "Classico",
    "Hunt's",
    "Prego",
    "Tostitos",
    "Doritos",
    "Lay's",
    "Ruffles",
    "Pringles",
    "Cheetos",
    "Old Dutch",
    "Planters",
    "Snyder's",
    "Orville Redenbacher's",
    "Smartfood",
    "Act II",
    "Boomchickapop",
    "Skippy",
    "Jif",
    "Nutella",
    "Smucker's",
    "Welch's",
    "Sunkist",
    "Minute Maid",
    "Tropicana",
    "Simply Orange",
    "Five Alive",
    "Ocean Spray",
    "Coca-Cola",
    "Pepsi",
    "Canada Dry",
    "Schweppes",
    "Mountain Dew",
    "Dr Pepper",
    "7UP",
    "A&W",
    "Fanta",
    "Crush",
    "Sprite",
    "Gatorade",
    "Powerade",
    "Nestle Pure Life",
    "Dasani",
    "Aquafina",
    "Perrier",
    "San Pellegrino",
    "Evian",
    "Voss",
    "Fiji",
    "Pure Leaf",
    "Lipton",
    "Arizona",
    "Gold Peak",
    "Snapple",
    "Nestea",
    "Tetley",
    "Twinings",
    "Celestial Seasonings",
    "Stash",
    "Red Rose",
    "Bigelow",
    "Tazo",
    "Starbucks",
    "Tim Hortons",
    "McCafe",
    "Nescafe",
    "Maxwell House",
    "Folgers",
    "Van Houtte",
    "Lavazza",
    "Illy",
    "Melitta",
    "Club Coffee",
    "Kicking Horse",
    "Second Cup",
    "Bridgehead",
    "Balzac's",
    "Keurig",
    "Nespresso",
    "Green Mountain",
    "Donut Shop",
];

/// One compiled pattern per brand, case-insensitive with word boundaries.
/// `regex::escape` keeps punctuation inside brand names (apostrophes,
/// hyphens, ampersands) literal.
static BRAND_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    COMMON_BRANDS
        .iter()
        .map(|brand| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(brand)))
                .expect("brand pattern compiles")
        })
        .collect()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

// ---------------------------------------------------------------------------
// Brand stripping
// ---------------------------------------------------------------------------

/// Remove every configured brand token from a product name.
///
/// Brands are applied once, left-to-right, over the progressively edited
/// string; repeated whitespace left behind by a removal is collapsed and the
/// result trimmed. A name that is nothing but brand tokens comes back empty.
pub fn simplify_name(name: &str) -> String {
    let mut name = name.to_string();
    for pattern in BRAND_PATTERNS.iter() {
        if pattern.is_match(&name) {
            name = pattern.replace_all(&name, "").into_owned();
        }
    }
    WHITESPACE.replace_all(name.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_brand_and_collapses_whitespace() {
        assert_eq!(
            simplify_name("President's Choice Yogurt 750g"),
            "Yogurt 750g"
        );
    }

    #[test]
    fn stripping_is_case_insensitive() {
        assert_eq!(simplify_name("KRAFT Peanut Butter 1kg"), "Peanut Butter 1kg");
    }

    #[test]
    fn idempotent_on_brand_free_names() {
        let cleaned = simplify_name("Whole Wheat   Bread 675 g");
        assert_eq!(cleaned, "Whole Wheat Bread 675 g");
        assert_eq!(simplify_name(&cleaned), cleaned);
    }

    #[test]
    fn name_made_only_of_brands_comes_back_empty() {
        assert_eq!(simplify_name("Nestle"), "");
    }

    #[test]
    fn word_boundary_respects_internal_punctuation() {
        assert_eq!(simplify_name("Lay's Classic 180g"), "Classic 180g");
        assert_eq!(simplify_name("7UP Lemon 2kg"), "Lemon 2kg");
    }

    #[test]
    fn brand_does_not_match_inside_longer_words() {
        // "Silk" must not eat the start of "Silken".
        assert_eq!(simplify_name("Silken Tofu 300 g"), "Silken Tofu 300 g");
        assert_eq!(simplify_name("Silk Almond Milk 1.89 lb"), "Almond Milk 1.89 lb");
    }

    #[test]
    fn strips_multiple_brands_in_one_name() {
        assert_eq!(simplify_name("Keurig Starbucks Pods 300g"), "Pods 300g");
    }
}
