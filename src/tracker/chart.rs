//! The pie chart of category totals.

use charming::{
    Chart,
    component::Legend,
    element::{Color, Tooltip, Trigger},
    series::Pie,
};
use maud::PreEscaped;

use crate::{html::HeadElement, summary::CategoryTotals};

/// The HTML element ID of the chart container.
pub(super) const CHART_ID: &str = "category-chart";

/// The URL of the ECharts library used to draw the chart.
pub(super) const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

const PALETTE: [&str; 5] = ["#60a5fa", "#f87171", "#34d399", "#fbbf24", "#a78bfa"];

/// Build a pie chart with one slice per category, in first-seen order.
pub(super) fn category_chart(category_totals: &CategoryTotals) -> Chart {
    let data = category_totals
        .iter()
        .map(|(category, total)| (total, category))
        .collect::<Vec<_>>();

    Chart::new()
        .color(PALETTE.iter().map(|&color| Color::from(color)).collect())
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().top("top"))
        .series(Pie::new().name("Category totals").radius("65%").data(data))
}

/// Generates JavaScript that draws `chart` into the chart container once the
/// page has loaded.
pub(super) fn chart_script(chart: &Chart) -> HeadElement {
    // Category names are user input and must not be able to close the script tag.
    let options = chart.to_string().replace("</", "<\\/");

    HeadElement::ScriptSource(PreEscaped(format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{CHART_ID}");
            const chart = echarts.init(chartDom);
            chart.setOption({options});
            window.addEventListener('resize', chart.resize);
        }});"#
    )))
}
