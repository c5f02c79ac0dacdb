//! Static parts of the HTML page: styles and the hover script.
//!
//! The header ends inside `<title>`; the formatter writes the escaped title
//! and then continues with [`HTML_HEAD_REST`].

pub const HTML_HEAD_START: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>"#;

pub const HTML_HEAD_REST: &str = r#"</title>
    <style>
        :root {
            --color-bg: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
        }
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            margin: 0;
            padding: 2rem;
        }
        h1 { font-size: 1.25rem; font-weight: 600; margin: 0 0 1rem; }
        .chart-legend-container { display: flex; align-items: flex-start; gap: 1.5rem; }
        .streamgraph .layer { cursor: pointer; }
        .legend-wrapper { display: flex; flex-direction: column; gap: 0.5rem; padding-top: 20px; }
        .legend-item { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; }
        .legend-color-box { width: 14px; height: 14px; border-radius: 2px; }
        .tooltip {
            position: absolute;
            pointer-events: none;
            background: var(--color-bg);
            border: 1px solid var(--color-border);
            border-radius: 4px;
            padding: 4px;
            box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
            transition: opacity 0.1s;
        }
        .skipped-note { font-size: 0.75rem; color: var(--color-text-muted); margin-top: 0.5rem; }
    </style>
</head>
<body>
"#;

/// Wires each chart's areas to its own tooltip and mini charts.
pub const HOVER_SCRIPT: &str = r#"    <script>
        (function() {
            document.querySelectorAll('.chart-legend-container').forEach(container => {
                const tooltip = container.querySelector('.tooltip');
                const opacity = container.dataset.hoverOpacity;
                const offset = parseFloat(container.dataset.tooltipOffset) || 0;
                if (!tooltip) return;

                const place = event => {
                    tooltip.style.left = (event.pageX + offset) + 'px';
                    tooltip.style.top = (event.pageY + offset) + 'px';
                };

                container.querySelectorAll('path.layer').forEach(path => {
                    const template = container.querySelector(
                        'template[data-key-index="' + path.dataset.keyIndex + '"]'
                    );
                    path.addEventListener('mouseover', event => {
                        path.style.opacity = opacity;
                        tooltip.style.opacity = 1;
                        place(event);
                        tooltip.replaceChildren();
                        if (template) {
                            tooltip.appendChild(template.content.cloneNode(true));
                        }
                    });
                    path.addEventListener('mousemove', place);
                    path.addEventListener('mouseout', () => {
                        path.style.opacity = 1;
                        tooltip.style.opacity = 0;
                    });
                });
            });
        })();
    </script>
"#;

pub const HTML_FOOTER: &str = "</body>
</html>
";
