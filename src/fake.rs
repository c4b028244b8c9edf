//! Fake data generation helpers.
//!
//! Provides deterministic fake data for names, emails, phones, SKUs and
//! timestamps. Every draw goes through the wrapped RNG, so a seeded RNG gives a
//! reproducible sequence.

use chrono::{NaiveDateTime, TimeDelta};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// First names for fake data
const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry", "Iris", "Jack", "Kate",
    "Leo", "Maya", "Noah", "Olivia", "Peter", "Quinn", "Rose", "Sam", "Tara", "Uma", "Victor",
    "Wendy", "Xavier", "Yara", "Zack", "José", "Zoë", "Łukasz", "Inês",
];

/// Last names for fake data
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
    "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee", "Thompson", "White",
    "Harris", "Clark", "Lewis", "Walker", "Young", "King", "Müller", "Gonçalves", "Nuñez",
    "O'Brien",
];

/// Middle initials, occasionally attached to full names
const MIDDLE_INITIALS: &[&str] = &["A.", "J.", "M.", "R.", "T."];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "test.com"];

/// Product name parts, combined into catch-phrase style names
/// Upper bound on distinct emails [`FakeData::email`] can produce.
pub const EMAIL_SPACE: u64 =
    (FIRST_NAMES.len() * LAST_NAMES.len() * EMAIL_DOMAINS.len()) as u64 * 999;

/// Distinct SKUs [`FakeData::sku`] can produce.
pub const SKU_SPACE: u64 = 26 * 26 * 26 * 100_000;

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Premium", "Pro", "Ultra", "Super", "Mega", "Mini", "Lite", "Plus", "Max", "Elite", "Advanced",
    "Basic", "Standard", "Classic", "Modern", "Smart", "Quick", "Easy", "Fast",
];

const PRODUCT_QUALIFIERS: &[&str] = &[
    "Wireless", "Portable", "Ergonomic", "Organic", "Recycled", "Compact", "Heavy-Duty",
    "Adjustable", "Waterproof", "Rechargeable",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Widget",
    "Gadget",
    "Device",
    "Tool",
    "Kit",
    "Pack",
    "Set",
    "Bundle",
    "System",
    "Module",
    "Component",
    "Unit",
    "Item",
    "Platform",
    "Package",
];

/// Fake data generator with deterministic RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a random first name
    pub fn first_name(&mut self) -> &'static str {
        self.pick(FIRST_NAMES)
    }

    /// Generate a random last name
    pub fn last_name(&mut self) -> &'static str {
        self.pick(LAST_NAMES)
    }

    /// Generate a full name from the given parts, sometimes with a middle initial
    pub fn full_name(&mut self, first: &str, last: &str) -> String {
        if self.bool_with_probability(0.2) {
            let middle = self.pick(MIDDLE_INITIALS);
            format!("{} {} {}", first, middle, last)
        } else {
            format!("{} {}", first, last)
        }
    }

    /// Generate an email address derived from a name, on a random domain.
    ///
    /// Name parts are reduced to lowercase ASCII alphanumerics.
    pub fn email(&mut self, first: &str, last: &str) -> String {
        let num: u32 = self.rng.random_range(1..1000);
        let domain = self.pick(EMAIL_DOMAINS);
        format!(
            "{}.{}{}@{}",
            email_part(first),
            email_part(last),
            num,
            domain
        )
    }

    /// Generate a phone number
    pub fn phone(&mut self) -> String {
        let area: u32 = self.rng.random_range(200..1000);
        let prefix: u32 = self.rng.random_range(200..1000);
        let line: u32 = self.rng.random_range(0..10000);
        format!("+1-{}-{}-{:04}", area, prefix, line)
    }

    /// Generate a product name
    pub fn product_name(&mut self) -> String {
        let adj = self.pick(PRODUCT_ADJECTIVES);
        let qualifier = self.pick(PRODUCT_QUALIFIERS);
        let noun = self.pick(PRODUCT_NOUNS);
        format!("{} {} {}", adj, qualifier, noun)
    }

    /// Generate a SKU: three uppercase letters, a dash and five digits
    pub fn sku(&mut self) -> String {
        let prefix: String = (0..3)
            .map(|_| self.rng.random_range(b'A'..=b'Z') as char)
            .collect();
        let num: u32 = self.rng.random_range(0..=99_999);
        format!("{}-{:05}", prefix, num)
    }

    /// Generate a price in `[min, max]`, rounded to cents
    pub fn price(&mut self, min: f64, max: f64) -> f64 {
        let value = self.rng.random_range(min..=max);
        (value * 100.0).round() / 100.0
    }

    /// Generate a random integer in the inclusive range
    pub fn int_range(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }

    /// Generate a boolean with given probability of true
    pub fn bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }

    /// Generate a timestamp uniformly between `start` and `end`, at second resolution
    pub fn datetime_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
        let span = (end - start).num_seconds();
        if span <= 0 {
            return start;
        }
        let offset = self.rng.random_range(0..=span);
        start + TimeDelta::seconds(offset)
    }

    /// Draw an index from a weighted distribution
    pub fn weighted_index(&mut self, weights: &WeightedIndex<f64>) -> usize {
        weights.sample(&mut self.rng)
    }

    /// Pick a random element from a non-empty slice
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }

    /// Pick a random index into a collection of `len` elements (`len > 0`)
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

fn email_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
