// Small inline SVG charts, one value per address.

use maud::{html, Markup};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 280.0;
const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 88.0;
const MAX_LABEL_CHARS: usize = 22;

struct Frame {
    lo: f64,
    hi: f64,
    slot: f64,
}

impl Frame {
    /// Value range always includes zero so bars have a baseline.
    fn new(points: &[(&str, f64)]) -> Self {
        let lo = points.iter().map(|p| p.1).fold(0.0, f64::min);
        let mut hi = points.iter().map(|p| p.1).fold(0.0, f64::max);
        if hi - lo < f64::EPSILON {
            hi = lo + 1.0;
        }
        let slot = (WIDTH - PAD_LEFT - PAD_RIGHT) / points.len().max(1) as f64;
        Self { lo, hi, slot }
    }

    fn y(&self, value: f64) -> f64 {
        let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
        PAD_TOP + (self.hi - value) / (self.hi - self.lo) * plot_h
    }

    fn x_center(&self, i: usize) -> f64 {
        PAD_LEFT + (i as f64 + 0.5) * self.slot
    }
}

/// SVG coordinate, one decimal is plenty.
fn n(v: f64) -> String {
    format!("{v:.1}")
}

fn short_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut s: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    s.push('…');
    s
}

fn axes(frame: &Frame, points: &[(&str, f64)], unit: &str) -> Markup {
    let zero = frame.y(0.0);
    html! {
        line x1=(n(PAD_LEFT)) y1=(n(zero)) x2=(n(WIDTH - PAD_RIGHT)) y2=(n(zero)) stroke="#9ca3af" {}
        text x=(n(PAD_LEFT - 6.0)) y=(n(frame.y(frame.hi) + 4.0)) text-anchor="end" font-size="11" {
            (format!("{:.1}{unit}", frame.hi))
        }
        text x=(n(PAD_LEFT - 6.0)) y=(n(zero + 4.0)) text-anchor="end" font-size="11" { "0" }
        @if frame.lo < 0.0 {
            text x=(n(PAD_LEFT - 6.0)) y=(n(frame.y(frame.lo) + 4.0)) text-anchor="end" font-size="11" {
                (format!("{:.1}{unit}", frame.lo))
            }
        }
        @for (i, (label, _)) in points.iter().enumerate() {
            @let x = frame.x_center(i);
            @let y = HEIGHT - PAD_BOTTOM + 14.0;
            text x=(n(x)) y=(n(y)) font-size="11" text-anchor="start"
                transform=(format!("rotate(35 {x:.1} {y:.1})")) {
                (short_label(label))
            }
        }
    }
}

/// Categorical bars, e.g. annual ROI per address.
pub fn bar_chart(title: &str, points: &[(&str, f64)], unit: &str) -> Markup {
    let frame = Frame::new(points);
    let zero = frame.y(0.0);
    let bar_w = frame.slot * 0.7;

    html! {
        figure class="chart" {
            figcaption { (title) }
            svg xmlns="http://www.w3.org/2000/svg" viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
                width="100%" role="img" aria-label=(title) {
                @for (i, (label, value)) in points.iter().enumerate() {
                    @let top = frame.y(*value).min(zero);
                    @let height = (frame.y(*value) - zero).abs();
                    rect x=(n(frame.x_center(i) - bar_w / 2.0))
                        y=(n(top))
                        width=(n(bar_w))
                        height=(n(height))
                        fill=(if *value < 0.0 { "#dc2626" } else { "#524ed2" }) {
                        title { (label) ": " (format!("{value:.2}{unit}")) }
                    }
                }
                (axes(&frame, points, unit))
            }
        }
    }
}

/// Values joined in address order, e.g. monthly cash flow.
pub fn line_chart(title: &str, points: &[(&str, f64)], unit: &str) -> Markup {
    let frame = Frame::new(points);
    let path = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| format!("{:.1},{:.1}", frame.x_center(i), frame.y(*v)))
        .collect::<Vec<_>>()
        .join(" ");

    html! {
        figure class="chart" {
            figcaption { (title) }
            svg xmlns="http://www.w3.org/2000/svg" viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
                width="100%" role="img" aria-label=(title) {
                (axes(&frame, points, unit))
                polyline points=(path) fill="none" stroke="#10b981" stroke-width="2" {}
                @for (i, (label, value)) in points.iter().enumerate() {
                    circle cx=(n(frame.x_center(i)))
                        cy=(n(frame.y(*value)))
                        r="3" fill="#10b981" {
                        title { (label) ": " (format!("{value:.2}{unit}")) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_chart_draws_one_rect_per_point() {
        let points = [("1 Main St, Leeds", 6.5), ("3 Mill Lane, York", -1.2)];
        let svg = bar_chart("ROI", &points, "%").into_string();
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("#dc2626"));
    }

    #[test]
    fn line_chart_joins_all_points() {
        let points = [("a", 10.0), ("b", 20.0), ("c", 5.0)];
        let svg = line_chart("Cash", &points, "").into_string();
        assert!(svg.contains("<polyline"));
        assert_eq!(svg.matches("<circle").count(), 3);
    }

    #[test]
    fn zero_sits_inside_the_frame() {
        let frame = Frame::new(&[("a", -50.0), ("b", 150.0)]);
        let zero = frame.y(0.0);
        assert!(zero > frame.y(150.0) && zero < frame.y(-50.0));
    }

    #[test]
    fn long_labels_are_shortened() {
        let label = "Flat 12, Some Very Long Building Name, Leeds";
        assert_eq!(short_label(label).chars().count(), MAX_LABEL_CHARS);
    }
}
