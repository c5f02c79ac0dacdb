//! Tests for composite charts.

use super::*;
use crate::chart::{PointerPosition, StreamChart};
use crate::config::Config;
use crate::ingest::parse;

const MODELS: &str = "\
Date,GPT-4,Claude
2024-01-01,10,5
2024-02-01,20,0
2024-03-01,15,25
";

fn rendered(csv: &str) -> StreamChart {
    let mut chart = StreamChart::new(Config::default());
    chart.render(&parse(csv));
    chart
}

mod streamgraph_tests {
    use super::*;

    #[test]
    fn one_path_per_series() {
        let chart = rendered(MODELS);
        let svg = render_outcome(chart.outcome().unwrap(), Some(chart.hover()), 10.0);

        assert_eq!(svg.matches("class=\"layer\"").count(), 2);
        assert!(svg.contains(r##"data-key="GPT-4" fill="#e41a1c""##));
        assert!(svg.contains(r##"data-key="Claude" fill="#377eb8""##));
        assert!(svg.contains(r#"transform="translate(20,20)""#));
        assert!(svg.contains(r#"transform="translate(0,340)""#));
        assert!(svg.contains(">Jan</text>"));
    }

    #[test]
    fn outer_size_matches_frame() {
        let chart = rendered(MODELS);
        let svg = render_outcome(chart.outcome().unwrap(), None, 10.0);
        assert!(svg.starts_with(r#"<svg class="streamgraph" width="400" height="400""#));
    }

    #[test]
    fn hovered_area_is_dimmed() {
        let mut chart = rendered(MODELS);
        chart.pointer_enter(1, PointerPosition::new(0.0, 0.0));
        let svg = render_outcome(chart.outcome().unwrap(), Some(chart.hover()), 10.0);
        assert_eq!(svg.matches("opacity: 0.8").count(), 1);
    }
}

mod placeholder_tests {
    use super::*;

    #[test]
    fn empty_dataset_renders_message() {
        let chart = rendered("Date,A\n");
        let svg = render_outcome(chart.outcome().unwrap(), None, 10.0);
        assert!(svg.contains("streamgraph empty"));
        assert!(svg.contains(">No data available</text>"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn invalid_dates_render_message() {
        let chart = rendered("Date,A\nlater,1\n");
        let svg = render_outcome(chart.outcome().unwrap(), None, 10.0);
        assert!(svg.contains("No rows with a valid date (1 skipped)"));
    }
}

mod mini_chart_tests {
    use super::*;

    #[test]
    fn bars_and_axes() {
        let chart = rendered(MODELS);
        let svg = MiniChartSvg {
            chart: &chart.mini_charts()[0],
        }
        .render();

        assert!(svg.starts_with(r#"<svg class="mini-chart" width="190" height="130""#));
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("<title>Feb: 20</title>"));
        assert!(svg.contains("class=\"x-axis\" fill=\"none\" font-size=\"8\""));
        assert!(svg.contains("class=\"y-axis\""));
        assert!(svg.contains(r#"transform="translate(30,10)""#));
    }
}
