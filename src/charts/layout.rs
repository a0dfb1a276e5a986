/// Chart layout: turns a validated [`Chart`] into a [`Figure`].
use super::chart::{BAR_COLORS, CHART_BLUE, Chart, ChartKind, PIE_COLORS};
use super::figure::{Figure, Mark, TextAlign, TextStyle};
use super::glyphs;
use crate::common::{RGBColor, Result};

const AXIS_COLOR: RGBColor = RGBColor::new(0x33, 0x33, 0x33);
const LABEL_COLOR: RGBColor = RGBColor::BLACK;

const BAR_YLABEL: &str = "Market Share (%)";
const LINE_YLABEL: &str = "Revenue (Billion EUR)";
const LINE_XLABEL: &str = "Year";

/// Fraction of a category slot a bar occupies.
const BAR_WIDTH: f64 = 0.8;
/// Pie label distance and percentage distance, as fractions of the radius.
const PIE_LABEL_DISTANCE: f64 = 1.1;
const PIE_PCT_DISTANCE: f64 = 0.6;
const PIE_START_ANGLE: f64 = 90.0;

/// Text sizes and strokes, derived from the figure height so a chart reads
/// the same at any resolution. Base design height is 600px.
struct Metrics {
    unit: f64,
    title: TextStyle,
    label: TextStyle,
    tick: TextStyle,
}

impl Metrics {
    fn new(height: u32) -> Self {
        let unit = height as f64 / 600.0;
        let scale = |base: f64| ((base * unit).round() as u32).max(1);
        Self {
            unit,
            title: TextStyle {
                scale: scale(3.0),
                color: CHART_BLUE,
                bold: true,
            },
            label: TextStyle {
                scale: scale(2.0),
                color: LABEL_COLOR,
                bold: false,
            },
            tick: TextStyle {
                scale: scale(1.6),
                color: LABEL_COLOR,
                bold: false,
            },
        }
    }

    fn cell(&self, style: &TextStyle) -> f64 {
        glyphs::text_height(style.scale) as f64
    }
}

/// Lay a chart out on a `width` x `height` figure.
pub fn layout(chart: &Chart, width: u32, height: u32, background: RGBColor) -> Result<Figure> {
    chart.validate()?;

    let metrics = Metrics::new(height);
    let mut figure = Figure::new(width, height, background);

    let title_y = 0.06 * height as f64 + metrics.cell(&metrics.title) / 2.0;
    figure.push(text(
        (width as f64 / 2.0, title_y),
        &chart.title,
        metrics.title,
        TextAlign::Center,
    ));

    match chart.kind {
        ChartKind::Bar | ChartKind::Line => layout_cartesian(chart, &metrics, &mut figure),
        ChartKind::Pie => layout_pie(chart, &metrics, &mut figure),
    }

    Ok(figure)
}

fn text(position: (f64, f64), text: &str, style: TextStyle, align: TextAlign) -> Mark {
    Mark::Text {
        position,
        text: text.to_string(),
        style,
        align,
        vertical: false,
    }
}

/// A "nice" tick step (1, 2, 2.5 or 5 times a power of ten) giving about
/// `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let span = if span > 0.0 { span } else { 1.0 };
    let raw = span / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Value axis range and tick step. The range always includes zero.
pub fn axis_range(values: &[f64]) -> (f64, f64, f64) {
    let min = values.iter().copied().fold(0.0, f64::min);
    let max = values.iter().copied().fold(0.0, f64::max);
    let step = nice_step(max - min, 5);
    let lo = (min / step).floor() * step;
    let mut hi = (max / step).ceil() * step;
    if hi <= lo {
        hi = lo + step;
    }
    (lo, hi, step)
}

fn tick_label(value: f64, step: f64) -> String {
    if step.fract() == 0.0 {
        format!("{:.0}", value)
    } else if ((step * 10.0).round() - step * 10.0).abs() < 1e-9 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn layout_cartesian(chart: &Chart, metrics: &Metrics, figure: &mut Figure) {
    let width = figure.width as f64;
    let height = figure.height as f64;
    let unit = metrics.unit;

    let left = 0.14 * width;
    let right = width - 0.04 * width;
    let top = 0.16 * height;
    let bottom = height - 0.17 * height;

    let (lo, hi, step) = axis_range(&chart.values);
    let y_of = |value: f64| bottom - (value - lo) / (hi - lo) * (bottom - top);

    let n = chart.values.len();
    let slot = (right - left) / n as f64;
    let x_of = |index: usize| left + slot * (index as f64 + 0.5);

    // Data
    match chart.kind {
        ChartKind::Bar => {
            let zero = y_of(0.0);
            for (i, value) in chart.values.iter().enumerate() {
                let y = y_of(*value);
                figure.push(Mark::Bar {
                    x: x_of(i) - slot * BAR_WIDTH / 2.0,
                    y: y.min(zero),
                    width: slot * BAR_WIDTH,
                    height: (zero - y).abs(),
                    color: BAR_COLORS[i % BAR_COLORS.len()],
                });
            }
        },
        _ => {
            let points: Vec<(f64, f64)> = chart
                .values
                .iter()
                .enumerate()
                .map(|(i, value)| (x_of(i), y_of(*value)))
                .collect();
            figure.push(Mark::Polyline {
                points: points.clone(),
                color: CHART_BLUE,
                width: 3.0 * unit,
            });
            for center in points {
                figure.push(Mark::Marker {
                    center,
                    radius: 4.0 * unit,
                    color: CHART_BLUE,
                });
            }
        },
    }

    // Axes
    let axis_width = (1.2 * unit).max(1.0);
    figure.push(Mark::Line {
        from: (left, top),
        to: (left, bottom),
        color: AXIS_COLOR,
        width: axis_width,
    });
    figure.push(Mark::Line {
        from: (left, bottom),
        to: (right, bottom),
        color: AXIS_COLOR,
        width: axis_width,
    });

    // Value ticks
    let tick_len = 6.0 * unit;
    let ticks = ((hi - lo) / step).round() as usize;
    for i in 0..=ticks {
        let value = lo + step * i as f64;
        let y = y_of(value);
        figure.push(Mark::Line {
            from: (left - tick_len, y),
            to: (left, y),
            color: AXIS_COLOR,
            width: axis_width,
        });
        figure.push(text(
            (left - tick_len * 1.8, y),
            &tick_label(value, step),
            metrics.tick,
            TextAlign::Right,
        ));
    }

    // Category ticks
    let label_y = bottom + tick_len * 2.0 + metrics.cell(&metrics.tick) / 2.0;
    for (i, label) in chart.labels.iter().enumerate() {
        let x = x_of(i);
        figure.push(Mark::Line {
            from: (x, bottom),
            to: (x, bottom + tick_len),
            color: AXIS_COLOR,
            width: axis_width,
        });
        figure.push(text((x, label_y), label, metrics.tick, TextAlign::Center));
    }

    // Axis titles
    let ylabel = if chart.kind == ChartKind::Bar {
        BAR_YLABEL
    } else {
        LINE_YLABEL
    };
    figure.push(Mark::Text {
        position: (0.04 * width, (top + bottom) / 2.0),
        text: ylabel.to_string(),
        style: metrics.label,
        align: TextAlign::Center,
        vertical: true,
    });
    if chart.kind == ChartKind::Line {
        figure.push(text(
            ((left + right) / 2.0, label_y + metrics.cell(&metrics.label) * 1.8),
            LINE_XLABEL,
            metrics.label,
            TextAlign::Center,
        ));
    }
}

/// Wedge sweeps in degrees, one per value.
pub fn wedge_sweeps(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    values.iter().map(|v| 360.0 * v / total).collect()
}

fn layout_pie(chart: &Chart, metrics: &Metrics, figure: &mut Figure) {
    let width = figure.width as f64;
    let height = figure.height as f64;

    let top = 0.16 * height;
    let center = (width / 2.0, top + (height - top) / 2.0);
    let radius = (height - top) * 0.38;

    let mut start = PIE_START_ANGLE;
    for (i, (sweep, label)) in wedge_sweeps(&chart.values)
        .into_iter()
        .zip(&chart.labels)
        .enumerate()
    {
        figure.push(Mark::Wedge {
            center,
            radius,
            start_deg: start,
            sweep_deg: sweep,
            color: PIE_COLORS[i % PIE_COLORS.len()],
        });

        let mid = (start + sweep / 2.0).to_radians();
        let (dx, dy) = (mid.cos(), -mid.sin());

        let align = if dx >= 0.0 {
            TextAlign::Left
        } else {
            TextAlign::Right
        };
        figure.push(text(
            (
                center.0 + dx * radius * PIE_LABEL_DISTANCE,
                center.1 + dy * radius * PIE_LABEL_DISTANCE,
            ),
            label,
            metrics.label,
            align,
        ));

        let share = sweep / 360.0 * 100.0;
        figure.push(text(
            (
                center.0 + dx * radius * PIE_PCT_DISTANCE,
                center.1 + dy * radius * PIE_PCT_DISTANCE,
            ),
            &format!("{:.1}%", share),
            metrics.label,
            TextAlign::Center,
        ));

        start += sweep;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WHITE: RGBColor = RGBColor::WHITE;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(85.0, 5), 20.0);
        assert_eq!(nice_step(51.1, 5), 20.0);
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert!((nice_step(0.0, 5) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_axis_range_includes_zero() {
        assert_eq!(axis_range(&[19.0, 85.0]), (0.0, 100.0, 20.0));
        let (lo, hi, _) = axis_range(&[-3.0, 7.0]);
        assert!(lo <= -3.0 && hi >= 7.0);
        let (lo, hi, _) = axis_range(&[0.0, 0.0]);
        assert!(hi > lo);
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(tick_label(40.0, 20.0), "40");
        assert_eq!(tick_label(7.5, 2.5), "7.5");
        assert_eq!(tick_label(0.75, 0.25), "0.75");
        assert_eq!(tick_label(0.4, 0.2), "0.4");
    }

    #[test]
    fn test_pie_layout() {
        let chart = Chart::pie(
            "2007 Mobile Phone Market Share",
            &["Nokia", "Samsung", "Apple", "Others"],
            &[40.0, 15.0, 0.0, 45.0],
        );
        let figure = layout(&chart, 1500, 900, WHITE).unwrap();

        assert_eq!(figure.wedge_count(), 4);
        let texts = figure.texts();
        assert_eq!(texts[0], "2007 Mobile Phone Market Share");
        assert!(texts.contains(&"40.0%"));
        assert!(texts.contains(&"0.0%"));
        assert!(texts.contains(&"Apple"));

        // First wedge starts at 12 o'clock and wedges keep the palette order.
        match &figure.marks[1] {
            Mark::Wedge {
                start_deg, color, ..
            } => {
                assert_eq!(*start_deg, 90.0);
                assert_eq!(*color, PIE_COLORS[0]);
            },
            other => panic!("expected wedge, got {other:?}"),
        }
    }

    #[test]
    fn test_bar_layout() {
        let labels = ["Nokia", "Samsung", "Apple", "Others", "Huawei"];
        let chart = Chart::bar("Share", &labels, &[40.0, 15.0, 5.0, 30.0, 10.0]);
        let figure = layout(&chart, 1000, 600, WHITE).unwrap();

        assert_eq!(figure.bar_count(), 5);
        let colors: Vec<RGBColor> = figure
            .marks
            .iter()
            .filter_map(|m| match m {
                Mark::Bar { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors[4], BAR_COLORS[0]);
        assert!(figure.texts().contains(&"Market Share (%)"));
        assert!(!figure.texts().contains(&"Year"));
    }

    #[test]
    fn test_line_layout() {
        let years = [2007, 2008, 2009, 2010, 2011, 2012, 2013, 2014];
        let chart = Chart::line(
            "Nokia Revenue Decline (Billion EUR)",
            &years,
            &[51.1, 50.7, 40.9, 42.4, 38.7, 30.2, 12.7, 7.3],
        );
        let figure = layout(&chart, 1500, 900, WHITE).unwrap();

        assert_eq!(figure.marker_count(), 8);
        assert_eq!(figure.wedge_count(), 0);
        let texts = figure.texts();
        assert!(texts.contains(&"Revenue (Billion EUR)"));
        assert!(texts.contains(&"Year"));
        assert!(texts.contains(&"2014"));
        assert!(texts.contains(&"60"));
    }

    #[test]
    fn test_layout_rejects_invalid() {
        let chart = Chart::pie("zero", &["a"], &[0.0]);
        assert!(layout(&chart, 100, 100, WHITE).is_err());
    }

    proptest! {
        #[test]
        fn prop_pie_has_one_wedge_per_value(
            values in prop::collection::vec(0.0f64..1000.0, 1..12)
                .prop_filter("non-zero total", |v| v.iter().sum::<f64>() > 0.0)
        ) {
            let labels: Vec<String> = (0..values.len()).map(|i| format!("L{i}")).collect();
            let chart = Chart::pie("p", &labels, &values);
            let figure = layout(&chart, 400, 300, WHITE).unwrap();
            prop_assert_eq!(figure.wedge_count(), values.len());

            let total: f64 = wedge_sweeps(&values).iter().sum();
            prop_assert!((total - 360.0).abs() < 1e-6);
        }
    }
}
