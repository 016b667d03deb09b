//! Weekly profit calculation

use crate::model::{Expenses, Load, Totals};

/// Reduce the week's loads and expenses to income, fees, costs and profit.
///
/// Unparsable amounts count as zero. Negative amounts are not rejected and
/// flow through the arithmetic as entered.
pub fn calculate_totals(loads: &[Load], expenses: &Expenses) -> Totals {
    let income: f64 = loads.iter().map(|load| load.price.value()).sum();
    let dispatch_total: f64 = loads.iter().map(Load::dispatch_fee).sum();
    let expense_total = expenses.total();

    Totals {
        income,
        dispatch_total,
        expense_total,
        profit: income - dispatch_total - expense_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NumericField;

    fn load(price: &str, pct: &str) -> Load {
        Load {
            price: NumericField::new(price),
            dispatch_percentage: NumericField::new(pct),
            ..Default::default()
        }
    }

    fn expenses(recurring: f64, additional: f64, fuel: f64) -> Expenses {
        Expenses {
            recurring: NumericField::from_value(recurring),
            additional: NumericField::from_value(additional),
            fuel: NumericField::from_value(fuel),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_two_load_week() {
        let loads = vec![load("1000", "10"), load("500", "20")];
        let totals = calculate_totals(&loads, &expenses(100.0, 50.0, 200.0));
        assert_close(totals.income, 1500.0);
        assert_close(totals.dispatch_total, 200.0);
        assert_close(totals.expense_total, 350.0);
        assert_close(totals.profit, 950.0);
    }

    #[test]
    fn test_no_loads() {
        let totals = calculate_totals(&[], &expenses(100.0, 0.0, 25.0));
        assert_eq!(totals.income, 0.0);
        assert_eq!(totals.dispatch_total, 0.0);
        assert_close(totals.profit, -125.0);
    }

    #[test]
    fn test_blank_and_garbage_amounts_count_as_zero() {
        let loads = vec![load("", "10"), load("abc", "15"), load("800", "")];
        let totals = calculate_totals(&loads, &Expenses::default());
        assert_close(totals.income, 800.0);
        assert_close(totals.dispatch_total, 0.0);
        assert_close(totals.profit, 800.0);
    }

    #[test]
    fn test_order_independent() {
        let forward = vec![load("1200", "12.5"), load("300", "5"), load("75.25", "0")];
        let mut reversed = forward.clone();
        reversed.reverse();
        let e = expenses(10.0, 20.0, 30.0);
        let a = calculate_totals(&forward, &e);
        let b = calculate_totals(&reversed, &e);
        assert_close(a.income, b.income);
        assert_close(a.dispatch_total, b.dispatch_total);
        assert_close(a.profit, b.profit);
    }

    #[test]
    fn test_repeatable() {
        let loads = vec![load("640", "8")];
        let e = expenses(1.0, 2.0, 3.0);
        assert_eq!(calculate_totals(&loads, &e), calculate_totals(&loads, &e));
    }

    #[test]
    fn test_negative_values_flow_through() {
        let loads = vec![load("-100", "10"), load("200", "-50")];
        let totals = calculate_totals(&loads, &Expenses::default());
        assert_close(totals.income, 100.0);
        assert_close(totals.dispatch_total, -10.0 - 100.0);
        assert_close(totals.profit, 100.0 + 110.0);
    }

    #[test]
    fn test_profit_formula() {
        let loads = vec![load("950", "7"), load("1810.5", "12"), load("420", "0")];
        let e = expenses(310.0, 45.5, 612.25);
        let totals = calculate_totals(&loads, &e);
        let income = 950.0 + 1810.5 + 420.0;
        let dispatch = 950.0 * 7.0 / 100.0 + 1810.5 * 12.0 / 100.0;
        assert_close(totals.profit, income - dispatch - (310.0 + 45.5 + 612.25));
    }
}
