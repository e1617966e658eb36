use contracts::shared::analytics::{KpiFormat, KpiStatus, KpiValue};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &KpiFormat) -> String {
    match fmt {
        KpiFormat::Money { currency } => {
            let abs = val.abs();
            let formatted = if abs >= 1_000_000.0 {
                format!("{:.1}M", val / 1_000_000.0).replace('.', ",")
            } else if abs >= 1_000.0 {
                format_thousands(val.round() as i64)
            } else {
                format!("{:.2}", val).replace('.', ",")
            };
            format!("{} {}", formatted, currency)
        }
        KpiFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize).replace('.', ",")
        }
        KpiFormat::Integer => format_thousands(val.round() as i64),
        KpiFormat::Days => format!("{:.1} j", val).replace('.', ","),
    }
}

pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

fn status_class(status: KpiStatus) -> &'static str {
    match status {
        KpiStatus::Good => "stat-card stat-card--success",
        KpiStatus::Bad => "stat-card stat-card--error",
        KpiStatus::Warning => "stat-card stat-card--warning",
        KpiStatus::Neutral => "stat-card",
    }
}

/// KPI tile: label, formatted value and trend arrow.
#[component]
pub fn StatCard(kpi: KpiValue) -> impl IntoView {
    let formatted = format_value(kpi.value, &kpi.format);

    let change_view = kpi.trend_percent.map(|pct| {
        let (arrow, cls) = if pct > 0.5 {
            ("\u{2191}", "stat-card__change stat-card__change--up")
        } else if pct < -0.5 {
            ("\u{2193}", "stat-card__change stat-card__change--down")
        } else {
            ("", "stat-card__change stat-card__change--flat")
        };
        let text = format!("{}{:.1}%", arrow, pct.abs()).replace('.', ",");
        view! { <span class=cls>{text}</span> }
    });

    view! {
        <div class=status_class(kpi.status) data-kpi=kpi.id>
            <div class="stat-card__content">
                <div class="stat-card__label">{kpi.label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234567), "1\u{a0}234\u{a0}567");
        assert_eq!(format_thousands(-4200), "-4\u{a0}200");
    }

    #[test]
    fn test_format_money() {
        let eur = KpiFormat::Money {
            currency: "€".into(),
        };
        assert_eq!(format_value(2_400_000.0, &eur), "2,4M €");
        assert_eq!(format_value(18_400.4, &eur), "18\u{a0}400 €");
        assert_eq!(format_value(12.5, &eur), "12,50 €");
    }

    #[test]
    fn test_format_percent_and_days() {
        assert_eq!(format_value(87.34, &KpiFormat::Percent { decimals: 1 }), "87,3%");
        assert_eq!(format_value(3.0, &KpiFormat::Days), "3,0 j");
        assert_eq!(format_value(41.0, &KpiFormat::Integer), "41");
    }
}
