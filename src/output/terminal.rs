//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::ComparisonResult;

/// Format a result as a human-readable summary table.
///
/// # Example output
///
/// ```text
/// ──────────────────────────────────────────────────────────────
///
///   Rate Comparison (20,000 draws per variation)
///
///     Variation     Rate (CI)               P(best)   Winner's lift (CI)
///   ★ A             [46.9%, 53.1%]            82.0%   —
///     B             [44.9%, 51.1%]            18.0%   [-5.1%, +13.9%]
///
/// ──────────────────────────────────────────────────────────────
/// ```
pub fn format_summary(result: &ComparisonResult) -> String {
    let mut out = String::new();
    let sep = "\u{2500}".repeat(62);
    let winner = result.winner();
    let stats = &result.statistics;

    out.push_str(&sep);
    out.push_str("\n\n");
    out.push_str(&format!(
        "  {} ({} draws per variation)\n\n",
        "Rate Comparison".bold(),
        group_thousands(result.num_samples())
    ));
    out.push_str(&format!(
        "    {:<12}  {:<22}  {:>8}   {}\n",
        "Variation", "Rate (CI)", "P(best)", "Winner's lift (CI)"
    ));

    for name in result.distributions.keys() {
        let is_winner = Some(name.as_str()) == winner;
        let marker = if is_winner {
            "\u{2605}".yellow().to_string()
        } else {
            " ".to_string()
        };

        let rate = stats
            .confidence_interval
            .get(name)
            .map(|ci| format!("[{:.1}%, {:.1}%]", ci.lower * 100.0, ci.upper * 100.0))
            .unwrap_or_default();

        let p_best = stats
            .probability_to_be_better
            .get(name)
            .map(|p| format!("{:.1}%", p * 100.0))
            .unwrap_or_default();

        let lift = if is_winner {
            "\u{2014}".to_string()
        } else {
            stats
                .winners_percent_lift
                .get(name)
                .map(|ci| {
                    let text = format!("[{:+.1}%, {:+.1}%]", ci.lower * 100.0, ci.upper * 100.0);
                    if ci.lower > 0.0 {
                        text.green().to_string()
                    } else {
                        text
                    }
                })
                .unwrap_or_default()
        };

        let label = format!("{:<12}", name);
        let label = if is_winner {
            label.bold().to_string()
        } else {
            label
        };

        out.push_str(&format!(
            "  {} {}  {:<22}  {:>8}   {}\n",
            marker, label, rate, p_best, lift
        ));
    }

    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    out
}

/// `20000` -> `"20,000"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
