//! Generate a deterministic sample product catalog for manual runs:
//! `cargo run --bin generate_sample` writes `data/products.csv`.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform index in `0..n`.
    fn index(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.index(items.len())]
    }
}

const BRANDS: &[&str] = &[
    "President's Choice",
    "Compliments",
    "Kirkland Signature",
    "No Name",
    "Kraft",
    "Quaker",
    "Lay's",
    "Tropicana",
];

const PRODUCTS: &[&str] = &[
    "Greek Yogurt",
    "Whole Wheat Bread",
    "Peanut Butter",
    "Orange Juice",
    "Rolled Oats",
    "Potato Chips",
    "Cheddar Cheese",
    "Sparkling Water",
    "Pasta Sauce",
    "Trail Mix",
];

const AISLES: &[&str] = &["Dairy", "Bakery", "Pantry", "Beverages", "Snacks"];

/// Append one of the weight styles the cleaner has to cope with: a proper
/// mass expression, a count expression, or nothing at all.
fn weight_suffix(rng: &mut SimpleRng) -> String {
    match rng.index(5) {
        0 => format!("{} g", 100 + 50 * rng.index(18)),
        1 => format!("{}kg", 1 + rng.index(4)),
        2 => format!("{} {}", 1 + rng.index(3), rng.pick(&["lb", "oz"])),
        3 => format!(
            "{} {}",
            2 + rng.index(23),
            rng.pick(&["pack", "cans", "bottles", "pcs"])
        ),
        _ => String::new(),
    }
}

fn main() -> Result<()> {
    let n_rows = 200;
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all("data").context("creating data directory")?;
    let path = "data/products.csv";
    let mut writer = csv::Writer::from_path(path).context("creating sample CSV")?;
    writer.write_record(["Name", "Price", "Aisle"])?;

    for _ in 0..n_rows {
        let mut name = String::new();
        // Roughly two thirds of the names carry a brand token.
        if rng.index(3) != 0 {
            name.push_str(rng.pick(BRANDS));
            name.push(' ');
        }
        name.push_str(rng.pick(PRODUCTS));
        let suffix = weight_suffix(&mut rng);
        if !suffix.is_empty() {
            name.push(' ');
            name.push_str(&suffix);
        }

        let price = format!("{}.{:02}", 1 + rng.index(19), rng.index(100));
        writer.write_record([name.as_str(), price.as_str(), rng.pick(AISLES)])?;
    }

    writer.flush().context("flushing sample CSV")?;
    println!("Wrote {n_rows} sample rows to {path}");
    Ok(())
}
