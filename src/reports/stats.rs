//! Statistic cards for report tabs
//!
//! A [`StatsBuilder`] turns a slice of items into an ordered list of
//! [`ReportStat`]: the aggregate total first, then one card per category in
//! the order the categories were added. Categories with no matching items
//! still produce a card with a zero value.

use serde::Serialize;
use std::fmt;

use crate::models::Money;

/// Display colour of a statistic card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Red,
    Yellow,
    Orange,
    Purple,
    Gray,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value shown on a statistic card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum StatValue {
    Count(usize),
    Amount(Money),
    Percent(f64),
    Text(String),
}

impl StatValue {
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Count(n) => *n == 0,
            Self::Amount(m) => m.is_zero(),
            Self::Percent(p) => *p == 0.0,
            Self::Text(_) => false,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => f.pad(&n.to_string()),
            Self::Amount(m) => fmt::Display::fmt(m, f),
            Self::Percent(p) => f.pad(&format!("%{:.1}", p).replace('.', ",")),
            Self::Text(t) => f.pad(t),
        }
    }
}

/// A labelled statistic card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStat {
    pub label: String,
    pub value: StatValue,
    pub color: ColorTag,
}

impl ReportStat {
    pub fn new(label: impl Into<String>, value: StatValue, color: ColorTag) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// How a group of items collapses into one value
pub enum Rollup<'a, T> {
    Count,
    Sum(Box<dyn Fn(&T) -> Money + 'a>),
}

impl<'a, T> Rollup<'a, T> {
    fn apply(&self, items: &[&T]) -> StatValue {
        match self {
            Self::Count => StatValue::Count(items.len()),
            Self::Sum(amount_of) => StatValue::Amount(items.iter().map(|item| amount_of(item)).sum()),
        }
    }
}

/// One category card: a label, a colour and a membership predicate
pub struct StatCategory<'a, T> {
    label: String,
    color: ColorTag,
    predicate: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T> StatCategory<'a, T> {
    pub fn new(
        label: impl Into<String>,
        color: ColorTag,
        predicate: impl Fn(&T) -> bool + 'a,
    ) -> Self {
        Self {
            label: label.into(),
            color,
            predicate: Box::new(predicate),
        }
    }
}

/// Builds the ordered statistic cards of a report tab
pub struct StatsBuilder<'a, T> {
    total_label: String,
    total_color: ColorTag,
    rollup: Rollup<'a, T>,
    categories: Vec<StatCategory<'a, T>>,
}

impl<'a, T> StatsBuilder<'a, T> {
    /// Start a builder whose cards count items
    pub fn new(total_label: impl Into<String>, total_color: ColorTag) -> Self {
        Self {
            total_label: total_label.into(),
            total_color,
            rollup: Rollup::Count,
            categories: Vec::new(),
        }
    }

    /// Sum an amount per item instead of counting items
    pub fn sum_of(mut self, amount_of: impl Fn(&T) -> Money + 'a) -> Self {
        self.rollup = Rollup::Sum(Box::new(amount_of));
        self
    }

    /// Append a category card
    pub fn category(
        mut self,
        label: impl Into<String>,
        color: ColorTag,
        predicate: impl Fn(&T) -> bool + 'a,
    ) -> Self {
        self.categories.push(StatCategory::new(label, color, predicate));
        self
    }

    /// Total card first, then one card per category in insertion order
    pub fn build<'i, I>(&self, items: I) -> Vec<ReportStat>
    where
        T: 'i,
        I: IntoIterator<Item = &'i T>,
    {
        let items: Vec<&T> = items.into_iter().collect();

        let mut stats = Vec::with_capacity(self.categories.len() + 1);
        stats.push(ReportStat::new(
            self.total_label.clone(),
            self.rollup.apply(&items),
            self.total_color,
        ));

        for category in &self.categories {
            let matching: Vec<&T> = items
                .iter()
                .copied()
                .filter(|item| (category.predicate)(item))
                .collect();
            stats.push(ReportStat::new(
                category.label.clone(),
                self.rollup.apply(&matching),
                category.color,
            ));
        }

        stats
    }
}

/// Mean of percentage values; 0 for an empty input
pub fn average_percent<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// `part` as a percentage of `whole`; 0 when `whole` is zero
pub fn share_percent(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.minor() as f64 / whole.minor() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item {
        status: &'static str,
        amount: Money,
    }

    fn items() -> Vec<Item> {
        vec![
            Item { status: "paid", amount: Money::from_major(100) },
            Item { status: "paid", amount: Money::from_major(50) },
            Item { status: "pending", amount: Money::from_major(25) },
        ]
    }

    #[test]
    fn test_total_comes_first_and_order_is_preserved() {
        let builder = StatsBuilder::new("Toplam", ColorTag::Blue)
            .category("Bekleyen", ColorTag::Yellow, |i: &Item| i.status == "pending")
            .category("Ödenen", ColorTag::Green, |i: &Item| i.status == "paid");

        let stats = builder.build(&items());

        let labels: Vec<_> = stats.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Toplam", "Bekleyen", "Ödenen"]);
        assert_eq!(stats[0].value, StatValue::Count(3));
        assert_eq!(stats[1].value, StatValue::Count(1));
        assert_eq!(stats[2].value, StatValue::Count(2));
        assert_eq!(stats[2].color, ColorTag::Green);
    }

    #[test]
    fn test_empty_category_keeps_zero_card() {
        let builder = StatsBuilder::new("Toplam", ColorTag::Blue)
            .category("İptal", ColorTag::Red, |i: &Item| i.status == "cancelled");

        let stats = builder.build(&items());
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[1].value, StatValue::Count(0));
        assert!(stats[1].value.is_zero());
    }

    #[test]
    fn test_sum_rollup() {
        let builder = StatsBuilder::new("Toplam Tutar", ColorTag::Purple)
            .sum_of(|i: &Item| i.amount)
            .category("Ödenen", ColorTag::Green, |i: &Item| i.status == "paid")
            .category("İptal", ColorTag::Red, |i: &Item| i.status == "cancelled");

        let stats = builder.build(&items());
        assert_eq!(stats[0].value, StatValue::Amount(Money::from_major(175)));
        assert_eq!(stats[1].value, StatValue::Amount(Money::from_major(150)));
        assert_eq!(stats[2].value, StatValue::Amount(Money::zero()));
    }

    #[test]
    fn test_empty_input() {
        let builder = StatsBuilder::new("Toplam", ColorTag::Blue)
            .category("Ödenen", ColorTag::Green, |i: &Item| i.status == "paid");
        let stats = builder.build(&Vec::<Item>::new());
        assert_eq!(stats[0].value, StatValue::Count(0));
        assert_eq!(stats[1].value, StatValue::Count(0));
    }

    #[test]
    fn test_average_percent_of_nothing_is_zero() {
        assert_eq!(average_percent(Vec::<f64>::new()), 0.0);
        assert_eq!(average_percent(vec![40.0, 60.0, 80.0]), 60.0);
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(Money::from_major(25), Money::zero()), 0.0);
        assert_eq!(share_percent(Money::from_major(25), Money::from_major(100)), 25.0);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(StatValue::Count(12).to_string(), "12");
        assert_eq!(StatValue::Amount(Money::from_major(5900)).to_string(), "5.900,00");
        assert_eq!(StatValue::Percent(45.5).to_string(), "%45,5");
    }
}
