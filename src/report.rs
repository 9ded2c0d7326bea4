//! Табличный отчёт по валютам.

use crate::types::{CurrencySummary, Money};
use rust_decimal::RoundingStrategy;
use std::fmt::Write as _;
use std::io::{self, Write};

const RULE_WIDTH: usize = 91;

/// Форматирует таблицу `Name, Min, Date, Max, Date, Avg`.
pub fn render(summaries: &[CurrencySummary]) -> String {
    let mut out = String::new();
    push_row(&mut out, ["Name", "Min", "Date", "Max", "Date", "Avg"]);
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for summary in summaries {
        let min = format_money(summary.min.value);
        let max = format_money(summary.max.value);
        let avg = format_money(summary.avg);
        push_row(
            &mut out,
            [
                &summary.name,
                &min,
                &summary.min.date,
                &max,
                &summary.max.date,
                &avg,
            ],
        );
    }
    out
}

/// Пишет отчёт в `writer`.
pub fn write_report<W: Write>(mut writer: W, summaries: &[CurrencySummary]) -> io::Result<()> {
    writer.write_all(render(summaries).as_bytes())?;
    writer.flush()
}

fn push_row(out: &mut String, [name, min, min_date, max, max_date, avg]: [&str; 6]) {
    // Запись в String не падает.
    let _ = writeln!(
        out,
        "{name:<30}{min:<8}{min_date:<20}{max:<8}{max_date:<20}{avg}"
    );
}

/// Округляет до копеек половиной вверх.
fn format_money(value: Money) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
