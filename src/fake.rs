//! Fake data generation helpers.
//!
//! `FakeData` owns the one random source a run draws from. Realistic values
//! (names, emails, postal addresses, card numbers) come from the `fake`
//! crate, while fixed formats and pool picks are drawn directly.

use crate::config::Span;
use crate::error::ConfigError;
use crate::model::Decimal2;
use chrono::{Days, NaiveDate};
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateAbbr, StateName, StreetName, ZipCode,
};
use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Fake data generator with an injected RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Direct access to the underlying RNG
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    pub fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    pub fn email(&mut self) -> String {
        FreeEmail().fake_with_rng(&mut self.rng)
    }

    pub fn street_name(&mut self) -> String {
        StreetName().fake_with_rng(&mut self.rng)
    }

    pub fn building_number(&mut self) -> String {
        BuildingNumber().fake_with_rng(&mut self.rng)
    }

    pub fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    pub fn zip_code(&mut self) -> String {
        ZipCode().fake_with_rng(&mut self.rng)
    }

    pub fn state(&mut self) -> String {
        StateName().fake_with_rng(&mut self.rng)
    }

    pub fn country(&mut self) -> String {
        CountryName().fake_with_rng(&mut self.rng)
    }

    /// One-line postal address, e.g. `"742 Evergreen Terrace, Springfield, OR 97403"`
    pub fn postal_address(&mut self) -> String {
        let number = self.building_number();
        let street = self.street_name();
        let city = self.city();
        let state: String = StateAbbr().fake_with_rng(&mut self.rng);
        let zip = self.zip_code();
        format!("{} {}, {}, {} {}", number, street, city, state, zip)
    }

    /// Phone number as `+{cc} ({area}) {exchange}-{subscriber}`
    pub fn phone(&mut self) -> String {
        let country: u32 = self.rng.random_range(1..=99);
        let area: u32 = self.rng.random_range(100..=999);
        let exchange: u32 = self.rng.random_range(100..=999);
        let subscriber: u32 = self.rng.random_range(1000..=9999);
        format!("+{} ({}) {}-{}", country, area, exchange, subscriber)
    }

    /// Card number with every separator stripped
    pub fn card_number(&mut self) -> String {
        let raw: String = CreditCardNumber().fake_with_rng(&mut self.rng);
        raw.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Three-digit card security code
    pub fn security_code(&mut self) -> String {
        self.rng.random_range(100..=999u32).to_string()
    }

    /// Pick a value from a named pool
    pub fn pick<'a>(
        &mut self,
        pool: &'a [String],
        name: &'static str,
    ) -> Result<&'a str, ConfigError> {
        pool.choose(&mut self.rng)
            .map(String::as_str)
            .ok_or(ConfigError::EmptyPool(name))
    }

    /// Pick a random element from a slice, `None` when it is empty
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Draw `amount` distinct elements without replacement.
    ///
    /// Returns `None` rather than a shorter sample when `items` is too small.
    pub fn sample_distinct<'a, T>(&mut self, items: &'a [T], amount: usize) -> Option<Vec<&'a T>> {
        if amount > items.len() {
            return None;
        }
        Some(items.choose_multiple(&mut self.rng, amount).collect())
    }

    pub fn count_in(&mut self, span: Span<usize>) -> usize {
        self.rng.random_range(span.min..=span.max)
    }

    pub fn int_in(&mut self, span: Span<i64>) -> i64 {
        self.rng.random_range(span.min..=span.max)
    }

    pub fn float_in(&mut self, span: Span<f64>) -> f64 {
        self.rng.random_range(span.min..=span.max)
    }

    /// Uniform value rounded to two decimals
    pub fn decimal_in(&mut self, span: Span<f64>) -> Decimal2 {
        Decimal2::from_f64(self.float_in(span))
    }

    /// Generate a boolean with given probability of true
    pub fn bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }

    /// Uniform date in `[start, end]`
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = end.signed_duration_since(start).num_days().max(0) as u64;
        let offset = self.rng.random_range(0..=span);
        start.checked_add_days(Days::new(offset)).unwrap_or(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fake(seed: u64) -> FakeData<ChaCha8Rng> {
        FakeData::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_deterministic_generation() {
        let mut fake1 = fake(42);
        let mut fake2 = fake(42);

        assert_eq!(fake1.first_name(), fake2.first_name());
        assert_eq!(fake1.postal_address(), fake2.postal_address());
        assert_eq!(fake1.card_number(), fake2.card_number());
    }

    #[test]
    fn test_phone_format() {
        let mut fake = fake(7);
        for _ in 0..50 {
            let phone = fake.phone();
            let (cc, rest) = phone[1..].split_once(" (").unwrap();
            assert!(phone.starts_with('+'));
            assert!((1..=2).contains(&cc.len()));
            let (area, rest) = rest.split_once(") ").unwrap();
            assert_eq!(area.len(), 3);
            let (exchange, subscriber) = rest.split_once('-').unwrap();
            assert_eq!(exchange.len(), 3);
            assert_eq!(subscriber.len(), 4);
        }
    }

    #[test]
    fn test_card_number_is_digits_only() {
        let mut fake = fake(3);
        for _ in 0..20 {
            let number = fake.card_number();
            assert!(!number.is_empty());
            assert!(number.chars().all(|c| c.is_ascii_digit()), "{}", number);
        }
    }

    #[test]
    fn test_security_code_has_three_digits() {
        let mut fake = fake(9);
        for _ in 0..20 {
            assert_eq!(fake.security_code().len(), 3);
        }
    }

    #[test]
    fn test_pick_from_empty_pool() {
        let mut fake = fake(1);
        assert_eq!(fake.pick(&[], "brands"), Err(ConfigError::EmptyPool("brands")));
    }

    #[test]
    fn test_sample_distinct() {
        let mut fake = fake(11);
        let items = [1, 2, 3, 4, 5];
        let mut sample: Vec<i32> = fake
            .sample_distinct(&items, 5)
            .unwrap()
            .into_iter()
            .copied()
            .collect();
        sample.sort();
        assert_eq!(sample, items);
        assert!(fake.sample_distinct(&items, 6).is_none());
        assert_eq!(fake.sample_distinct(&items, 0).unwrap().len(), 0);
    }

    #[test]
    fn test_decimal_precision() {
        let mut fake = fake(42);
        let value = fake.decimal_in(Span::new(10.0, 100.0));
        assert!((1000..=10000).contains(&value.hundredths()));
    }

    #[test]
    fn test_date_between_bounds() {
        let mut fake = fake(5);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        for _ in 0..100 {
            let date = fake.date_between(start, end);
            assert!(date >= start && date <= end);
        }
        assert_eq!(fake.date_between(start, start), start);
    }
}
