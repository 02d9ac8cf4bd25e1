//! US-dollar formatting for account summaries.

/// Format `amount` as USD with thousands separators and two decimals,
/// e.g. `1234567.5` becomes `$1,234,567.50`.
pub(crate) fn format_usd(amount: f64) -> String {
  let sign = if amount < 0.0 { "-" } else { "" };
  let cents = (amount.abs() * 100.0).round() as u64;
  let dollars = (cents / 100).to_string();
  let frac = cents % 100;

  let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
  for (i, digit) in dollars.chars().enumerate() {
    if i > 0 && (dollars.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(digit);
  }

  format!("{sign}${grouped}.{frac:02}")
}
