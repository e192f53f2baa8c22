//! Plain-text rendering of the tip form.

use std::fmt::Write;

use tip_core::{FormField, FormState, ServiceRating, SplitResult, ValidationError};

use crate::utils::{field_display, format_currency};

/// Renders the three inputs, followed by the result or error panel.
pub fn render_form(
    form: &FormState,
    currency_code: &str,
) -> String {
    let mut out = String::from("TIP CALCULATOR\n");
    for field in FormField::ALL {
        let value = field_display(form.input().get(field));
        let suffix = match field {
            FormField::TipPercent if value != "—" && !value.ends_with('%') => "%",
            _ => "",
        };
        let _ = writeln!(out, "  {:<16}{value}{suffix}", format!("{}:", field.label()));
    }

    if let Some(error) = form.error() {
        let _ = writeln!(out, "{}", render_error(error));
    } else if let Some(result) = form.result() {
        out.push_str(&render_result(result, currency_code));
    }
    out
}

/// Renders a result the way the widget's result box shows it.
pub fn render_result(
    result: &SplitResult,
    currency_code: &str,
) -> String {
    format!(
        "TIP AMOUNT\n  {} each\n  Total tip:        {}\n  Total per person: {}\n",
        format_currency(result.tip_per_person, currency_code),
        format_currency(result.total_tip, currency_code),
        format_currency(result.total_per_person, currency_code),
    )
}

/// Inline error line for the field the user has to fix.
pub fn render_error(error: &ValidationError) -> String {
    format!("! {}: {error}", error.field().label())
}

/// Lists the quick-pick tip levels.
pub fn render_ratings() -> String {
    let mut out = String::from("How was your service?\n");
    for rating in ServiceRating::ALL {
        let _ = writeln!(
            out,
            "  {:<12}{:>3}% - {}",
            rating.as_str(),
            rating.percent().to_string(),
            rating.label()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn render_result_formats_every_amount() {
        let result = SplitResult {
            total_tip: dec!(20),
            tip_per_person: dec!(5),
            total_per_person: dec!(30),
        };

        assert_eq!(
            render_result(&result, "USD"),
            "TIP AMOUNT\n  $5.00 each\n  Total tip:        $20.00\n  Total per person: $30.00\n"
        );
    }

    #[test]
    fn render_form_shows_blank_fields_as_dashes() {
        let form = FormState::default();

        assert_eq!(
            render_form(&form, "USD"),
            "TIP CALCULATOR\n  Bill amount:    —\n  Party size:     —\n  Tip percentage: —\n"
        );
    }

    #[test]
    fn render_form_includes_result_after_calculation() {
        let mut form = FormState::default();
        form.on_field_change(FormField::BillAmount, "100");
        form.on_field_change(FormField::PartySize, "3");
        form.on_quick_pick(ServiceRating::Good);
        form.on_calculate().unwrap();

        let text = render_form(&form, "USD");

        assert!(text.contains("  Tip percentage: 20%\n"));
        assert!(text.contains("$6.67 each"));
        assert!(text.contains("Total per person: $40.00"));
    }

    #[test]
    fn render_form_shows_error_instead_of_result() {
        let mut form = FormState::default();
        form.on_field_change(FormField::BillAmount, "75");
        form.on_field_change(FormField::PartySize, "0");
        form.on_field_change(FormField::TipPercent, "10");
        form.on_calculate().unwrap_err();

        let text = render_form(&form, "USD");

        assert!(text.contains("! Party size: Party size must be a whole number"));
        assert!(!text.contains("TIP AMOUNT"));
    }

    #[test]
    fn render_ratings_lists_all_quick_picks() {
        let text = render_ratings();

        assert_eq!(text.lines().count(), 1 + ServiceRating::ALL.len());
        assert!(text.contains("  ok           15% - It was OK\n"));
    }
}
