//! Tests for SVG text formatting.

use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn leaves_series_names_alone() {
        assert_eq!(html_escape("GPT-4"), "GPT-4");
    }
}

mod format_number_tests {
    use super::*;

    #[test]
    fn small_numbers_unchanged() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(format_number(-4500), "-4,500");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }
}
