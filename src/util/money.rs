//! Currency formatting helpers.
//!
//! Balances travel through the system in cents; formatting is the single
//! point where they become dollar amounts.

/// Formats cents as a dollar amount: `4250` → `"$42.50"`, `-350` → `"-$3.50"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(4_250), "$42.50");
        assert_eq!(format_cents(100_000), "$1000.00");
    }

    #[test]
    fn negative_amounts_carry_the_sign_outside() {
        assert_eq!(format_cents(-350), "-$3.50");
    }
}
