//! Greedy Planner

use crate::{
    catalogue::Catalogue,
    plans::{LineItem, Plan},
    price::Price,
};

/// Plan A: largest cards first, whole cards only, shortfall paid in cash.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlanner;

impl GreedyPlanner {
    /// Decompose `price` across the catalogue by descending face value.
    ///
    /// The returned plan never exceeds the price, and what it leaves uncovered
    /// is smaller than the cheapest card in the catalogue.
    pub fn plan(price: Price, catalogue: &Catalogue) -> Plan {
        let mut remaining = price.baht();

        let plan = Plan::new(catalogue.iter().filter_map(|denomination| {
            let count = remaining / denomination.face_value();

            if count == 0 {
                return None;
            }

            remaining -= count * denomination.face_value();

            Some(LineItem::new(*denomination, count))
        }));

        tracing::debug!(
            price = price.baht(),
            cards = plan.card_count(),
            face_value = plan.total_face_value(),
            shortfall = remaining,
            "greedy plan"
        );

        plan
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalogue::Preset;

    use super::*;

    fn counts(plan: &Plan) -> Vec<(u64, u64)> {
        plan.iter()
            .map(|line| (line.denomination.face_value(), line.count))
            .collect()
    }

    #[test]
    fn exact_single_card() -> TestResult {
        let catalogue = Preset::Standard.catalogue()?;

        let plan = GreedyPlanner::plan(Price::new(130_000)?, &catalogue);

        assert_eq!(counts(&plan), vec![(130_000, 1)]);

        Ok(())
    }

    #[test]
    fn walks_down_the_catalogue() -> TestResult {
        let catalogue = Preset::Standard.catalogue()?;

        let plan = GreedyPlanner::plan(Price::new(100_000)?, &catalogue);

        assert_eq!(counts(&plan), vec![(65_000, 1), (26_000, 1), (6500, 1)]);
        assert_eq!(plan.total_card_price(), 75_000);

        Ok(())
    }

    #[test]
    fn repeats_large_cards() -> TestResult {
        let catalogue = Preset::Standard.catalogue()?;

        let plan = GreedyPlanner::plan(Price::new(400_000)?, &catalogue);

        assert_eq!(counts(&plan), vec![(130_000, 3), (6500, 1)]);

        Ok(())
    }

    #[test]
    fn price_below_cheapest_card_buys_nothing() -> TestResult {
        let catalogue = Preset::Standard.catalogue()?;

        let plan = GreedyPlanner::plan(Price::new(6499)?, &catalogue);

        assert!(plan.is_empty());

        Ok(())
    }
}
