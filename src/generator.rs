//! Data generator that produces users, products and orders.
//!
//! Generates deterministic, FK-consistent records: every order references a
//! previously generated user, and every order item a previously generated product.

use crate::error::{GenError, Result};
use crate::fake::{FakeData, EMAIL_SPACE, SKU_SPACE};
use crate::model::{
    round_cents, Category, Dataset, Order, OrderItem, OrderStatus, Plan, PlanWeights, Product,
    Statistics, User,
};
use crate::unique::UniqueValues;
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use rand::distr::weighted::WeightedIndex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Timestamp format used for every generated `created_at` and for `generated_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 2024-01-01T00:00:00Z, the default "now" for seeded runs.
const SEEDED_REFERENCE_TIMESTAMP: i64 = 1_704_067_200;

const USER_HISTORY_DAYS: i64 = 730;
const ORDER_HISTORY_DAYS: i64 = 365;
const ACTIVE_PROBABILITY: f64 = 0.9;
const MIN_PRICE: f64 = 10.0;
const MAX_PRICE: f64 = 500.0;
const MAX_STOCK: u32 = 1000;
const MAX_ITEMS_PER_ORDER: u32 = 5;
const MAX_QUANTITY: u32 = 3;
/// Upper bound on up-front batch allocation; larger batches grow as they go.
const MAX_PREALLOCATED: usize = 4096;

/// Fixed reference time used when a seed is given without an explicit time.
pub fn seeded_reference_time() -> DateTime<Utc> {
    DateTime::from_timestamp(SEEDED_REFERENCE_TIMESTAMP, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Format a timestamp the way generated records carry it.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Everything that influences the generated values.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub seed: u64,
    /// "Now" for timestamp windows and the export's `generated_at`.
    pub reference_time: DateTime<Utc>,
    pub plan_weights: PlanWeights,
}

impl GeneratorSettings {
    /// Settings for a seeded run: fixed reference time, default plan weights.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            reference_time: seeded_reference_time(),
            plan_weights: PlanWeights::default(),
        }
    }

    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    pub fn with_plan_weights(mut self, plan_weights: PlanWeights) -> Self {
        self.plan_weights = plan_weights;
        self
    }
}

/// Main data generator
pub struct Generator {
    settings: GeneratorSettings,
    fake: FakeData<ChaCha8Rng>,
    emails: UniqueValues,
    skus: UniqueValues,
    users: Vec<User>,
    products: Vec<Product>,
    orders: Vec<Order>,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(GeneratorSettings::seeded(seed))
    }

    pub fn with_settings(settings: GeneratorSettings) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(settings.seed);
        Self {
            settings,
            fake: FakeData::new(rng),
            emails: UniqueValues::new("email", EMAIL_SPACE),
            skus: UniqueValues::new("sku", SKU_SPACE),
            users: Vec::new(),
            products: Vec::new(),
            orders: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.settings.seed
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.settings.reference_time
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            users: self.users.len(),
            products: self.products.len(),
            orders: self.orders.len(),
        }
    }

    /// Snapshot of the current collections.
    pub fn dataset(&self) -> Dataset {
        Dataset {
            users: self.users.clone(),
            products: self.products.clone(),
            orders: self.orders.clone(),
        }
    }

    pub fn into_dataset(self) -> Dataset {
        Dataset {
            users: self.users,
            products: self.products,
            orders: self.orders,
        }
    }

    /// Append `count` users and return everything generated so far.
    ///
    /// Nothing is appended if the batch fails.
    pub fn generate_users(&mut self, count: usize) -> Result<&[User]> {
        let plans = WeightedIndex::new(self.settings.plan_weights.as_array())
            .map_err(|e| GenError::InvalidWeights(e.to_string()))?;
        self.emails.check_capacity(count)?;
        let (start, end) = self.window(USER_HISTORY_DAYS);

        let mut batch = Vec::with_capacity(count.min(MAX_PREALLOCATED));
        for i in 0..count {
            let first = self.fake.first_name();
            let last = self.fake.last_name();
            let fake = &mut self.fake;
            let email = self.emails.next(|| fake.email(first, last))?;
            let name = self.fake.full_name(first, last);
            let phone = self.fake.phone();
            let created_at = format_timestamp(&self.fake.datetime_between(start, end));
            let plan = Plan::ALL[self.fake.weighted_index(&plans)];
            let is_active = self.fake.bool_with_probability(ACTIVE_PROBABILITY);

            batch.push(User {
                id: format!("user_{:05}", self.users.len() + i + 1),
                email,
                name,
                phone,
                created_at,
                plan,
                is_active,
            });
        }

        self.users.extend(batch);
        Ok(&self.users)
    }

    /// Append `count` products and return everything generated so far.
    pub fn generate_products(&mut self, count: usize) -> Result<&[Product]> {
        self.skus.check_capacity(count)?;
        let mut batch = Vec::with_capacity(count.min(MAX_PREALLOCATED));
        for i in 0..count {
            let name = self.fake.product_name();
            let price = self.fake.price(MIN_PRICE, MAX_PRICE);
            let category = self.fake.pick(&Category::ALL);
            let stock = self.fake.int_range(0, MAX_STOCK);
            let fake = &mut self.fake;
            let sku = self.skus.next(|| fake.sku())?;

            batch.push(Product {
                id: format!("prod_{:05}", self.products.len() + i + 1),
                name,
                price,
                category,
                stock,
                sku,
            });
        }

        self.products.extend(batch);
        Ok(&self.products)
    }

    /// Append `count` orders referencing existing users and products.
    ///
    /// Fails with [`GenError::Precondition`] unless both users and products
    /// exist, even for `count == 0`.
    pub fn generate_orders(&mut self, count: usize) -> Result<&[Order]> {
        if self.users.is_empty() || self.products.is_empty() {
            return Err(GenError::Precondition {
                users: self.users.len(),
                products: self.products.len(),
            });
        }
        let (start, end) = self.window(ORDER_HISTORY_DAYS);

        let mut batch = Vec::with_capacity(count.min(MAX_PREALLOCATED));
        for i in 0..count {
            let user_id = self.users[self.fake.index(self.users.len())].id.clone();
            let num_items = self.fake.int_range(1, MAX_ITEMS_PER_ORDER);

            let mut items = Vec::with_capacity(num_items as usize);
            for _ in 0..num_items {
                let product = &self.products[self.fake.index(self.products.len())];
                let quantity = self.fake.int_range(1, MAX_QUANTITY);
                items.push(OrderItem {
                    product_id: product.id.clone(),
                    quantity,
                    price: product.price,
                    subtotal: round_cents(product.price * f64::from(quantity)),
                });
            }

            let total = round_cents(items.iter().map(|item| item.subtotal).sum());
            let status = self.fake.pick(&OrderStatus::ALL);
            let created_at = format_timestamp(&self.fake.datetime_between(start, end));

            batch.push(Order {
                id: format!("order_{:06}", self.orders.len() + i + 1),
                user_id,
                total,
                status,
                items,
                created_at,
            });
        }

        self.orders.extend(batch);
        Ok(&self.orders)
    }

    /// `[reference - days, reference]` as naive UTC timestamps.
    fn window(&self, days: i64) -> (NaiveDateTime, NaiveDateTime) {
        let end = self.settings.reference_time.naive_utc();
        (end - TimeDelta::days(days), end)
    }
}
