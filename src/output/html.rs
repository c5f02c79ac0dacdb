use std::fmt::Write;

use crate::chart::{Legend, StreamChart};
use crate::error::Result;
use crate::layout::format_coord as px;

use super::ChartFormatter;
use super::html_template::{HOVER_SCRIPT, HTML_FOOTER, HTML_HEAD_REST, HTML_HEAD_START};
use super::svg::{MiniChartSvg, SvgElement, html_escape, render_outcome};

/// Standalone page with the chart, its legend and a working tooltip.
pub struct HtmlFormatter {
    title: String,
}

impl HtmlFormatter {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn write_indented(output: &mut String, markup: &str, indent: &str) {
        for line in markup.lines() {
            let _ = writeln!(output, "{indent}{line}");
        }
    }

    fn write_legend(output: &mut String, legend: &Legend) {
        output.push_str("            <div class=\"legend-wrapper\">\n");
        for entry in &legend.entries {
            let _ = writeln!(
                output,
                r#"                <div class="legend-item"><div class="legend-color-box" style="background-color: {}"></div><span class="legend-text">{}</span></div>"#,
                html_escape(&entry.color),
                html_escape(&entry.key)
            );
        }
        output.push_str("            </div>\n");
    }

    fn write_tooltip(output: &mut String, chart: &StreamChart) {
        let tooltip = chart.hover().tooltip();
        let _ = writeln!(
            output,
            r#"            <div class="tooltip" style="opacity: {}; left: {}px; top: {}px">"#,
            px(tooltip.opacity()),
            px(tooltip.left),
            px(tooltip.top)
        );
        if let Some(content) = &tooltip.content {
            let svg = MiniChartSvg { chart: content }.render();
            Self::write_indented(output, &svg, "                ");
        }
        output.push_str("            </div>\n");
    }

    fn write_templates(output: &mut String, chart: &StreamChart) {
        for (index, mini) in chart.mini_charts().iter().enumerate() {
            let _ = writeln!(
                output,
                r#"            <template data-key-index="{index}">"#
            );
            let svg = MiniChartSvg { chart: mini }.render();
            Self::write_indented(output, &svg, "                ");
            output.push_str("            </template>\n");
        }
    }
}

impl ChartFormatter for HtmlFormatter {
    fn format(&self, chart: &StreamChart) -> Result<String> {
        let mut output = String::new();
        let config = chart.config();

        output.push_str(HTML_HEAD_START);
        output.push_str(&html_escape(&self.title));
        output.push_str(HTML_HEAD_REST);
        let _ = writeln!(output, "    <h1>{}</h1>", html_escape(&self.title));

        let _ = writeln!(
            output,
            r#"    <div class="chart-legend-container" data-hover-opacity="{}" data-tooltip-offset="{}">"#,
            px(config.hover.opacity),
            px(config.hover.tooltip_offset)
        );
        output.push_str("        <div class=\"chart\">\n");
        if let Some(outcome) = chart.outcome() {
            let svg = render_outcome(outcome, Some(chart.hover()), config.chart.axis_font_size);
            Self::write_indented(&mut output, &svg, "            ");
            if let Some(layout) = outcome.layout()
                && layout.skipped_rows > 0
            {
                let _ = writeln!(
                    output,
                    r#"            <p class="skipped-note">{} row(s) skipped: date not in {} format</p>"#,
                    layout.skipped_rows,
                    html_escape(&config.data.date_format)
                );
            }
        }
        output.push_str("        </div>\n");

        Self::write_legend(&mut output, &chart.legend());
        Self::write_tooltip(&mut output, chart);
        Self::write_templates(&mut output, chart);
        output.push_str("    </div>\n");

        output.push_str(HOVER_SCRIPT);
        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
