use analytics::{Classification, ElasticityResult, Observation, SelectionPolicy};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats an elasticity: fixed decimals, `∞`/`-∞` for signed infinity, `N/A` for NaN.
pub fn format_elasticity(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", precision, value)
    } else if value.is_nan() {
        "N/A".to_string()
    } else if value.is_sign_positive() {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

/// Formats an absolute fractional change as a percentage.
pub fn format_percentage(fraction: f64) -> String {
    if fraction.is_finite() {
        format!("{:.2}%", fraction * 100.0)
    } else {
        "∞".to_string()
    }
}

/// Describes which observations fed the calculation.
pub fn selection_note(series_len: usize, policy: SelectionPolicy) -> &'static str {
    match (series_len, policy) {
        (2, _) => "using the two data points provided",
        (_, SelectionPolicy::FirstAndLast) => "using the first and last data points provided",
        (_, SelectionPolicy::FirstTwo) => "using the first two data points provided",
    }
}

/// Row label for the trend view: month names for up to a year of points.
pub fn trend_label(index: usize, series_len: usize) -> String {
    if series_len <= MONTH_NAMES.len() {
        MONTH_NAMES[index].to_string()
    } else {
        format!("Point {}", index + 1)
    }
}

fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Elastic | Classification::PerfectlyElastic => Color::Green,
        Classification::Inelastic | Classification::PerfectlyInelastic => Color::Yellow,
        Classification::UnitElastic => Color::Cyan,
        Classification::InvalidInput => Color::Red,
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        header
            .into_iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

/// Renders a result for the terminal.
pub fn render_table(
    result: &ElasticityResult,
    observations: &[Observation],
    policy: SelectionPolicy,
    precision: usize,
    show_series: bool,
) -> String {
    let classification = result.classification();
    let mut table = new_table(vec!["METRIC", "VALUE"]);

    let heading = if result.is_valid() {
        format!("PED ({})", selection_note(observations.len(), policy))
    } else {
        "PED".to_string()
    };
    table.add_row(vec![
        Cell::new(heading),
        Cell::new(format_elasticity(result.elasticity(), precision)),
    ]);
    table.add_row(vec![
        Cell::new("Classification"),
        Cell::new(classification.label()).fg(classification_color(classification)),
    ]);
    if let Some(change) = result.percentage_change_quantity() {
        table.add_row(vec![Cell::new("% change in quantity"), Cell::new(format_percentage(change))]);
    }
    if let Some(change) = result.percentage_change_price() {
        table.add_row(vec![Cell::new("% change in price"), Cell::new(format_percentage(change))]);
    }
    if let Some(pair) = result.observations_used() {
        table.add_row(vec![
            Cell::new("Start observation"),
            Cell::new(format_observation(&pair.start)),
        ]);
        table.add_row(vec![
            Cell::new("End observation"),
            Cell::new(format_observation(&pair.end)),
        ]);
    }
    if let Some(error) = result.error() {
        table.add_row(vec![Cell::new("Error"), Cell::new(error.to_string()).fg(Color::Red)]);
    }
    table.add_row(vec![Cell::new("Interpretation"), Cell::new(classification.description())]);

    let mut out = table.to_string();
    if show_series && !observations.is_empty() {
        out.push('\n');
        out.push_str(&render_series(result, observations, policy));
    }
    out
}

/// The full series as a trend table, marking the rows used by the calculation.
fn render_series(result: &ElasticityResult, observations: &[Observation], policy: SelectionPolicy) -> String {
    let mut table = new_table(vec!["PERIOD", "PRICE", "QUANTITY", "USED"]);
    let end_index = match policy {
        SelectionPolicy::FirstAndLast => observations.len() - 1,
        SelectionPolicy::FirstTwo => 1,
    };
    let marked = result.observations_used().is_some();

    for (index, observation) in observations.iter().enumerate() {
        let marker = match index {
            0 if marked => "start",
            i if marked && i == end_index => "end",
            _ => "",
        };
        table.add_row(vec![
            Cell::new(trend_label(index, observations.len())),
            Cell::new(format!("{:.2}", observation.price)),
            Cell::new(format!("{}", observation.quantity)),
            Cell::new(marker),
        ]);
    }
    table.to_string()
}

fn format_observation(observation: &Observation) -> String {
    format!("price {:.2}, quantity {}", observation.price, observation.quantity)
}

/// Renders a result as pretty-printed JSON.
pub fn render_json(result: &ElasticityResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
