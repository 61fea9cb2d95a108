//! Scales: pure mappings from data values to pixels or colors.
//!
//! [`LinearScale`] follows the usual charting conventions: a degenerate domain
//! maps to the middle of the range, and [`LinearScale::ticks`] picks "nice"
//! steps of 1, 2 or 5 times a power of ten.

use egui::Color32;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping `domain -> range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range.
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = normalize(d0, d1, v);
        r0 + (r1 - r0) * t
    }

    /// Map a range value back into the domain.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = normalize(r0, r1, px);
        d0 + (d1 - d0) * t
    }

    /// Scale whose domain is what this scale shows after the range has been
    /// translated by `offset` and multiplied by `k`.
    pub fn rescaled(&self, offset: f64, k: f64) -> Self {
        let (r0, r1) = self.range;
        let d0 = self.invert((r0 - offset) / k);
        let d1 = self.invert((r1 - offset) / k);
        Self::new((d0, d1), self.range)
    }

    /// Roughly `count` evenly spaced, human friendly values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    /// Distance between adjacent values returned by [`ticks`](Self::ticks).
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count as f64)
    }

    /// Format a tick value with as many decimals as the tick step needs.
    pub fn tick_format(&self, count: usize, value: f64) -> String {
        let step = self.tick_step(count).abs();
        let decimals = if step.is_finite() && step > 0.0 {
            (-step.log10().floor()).max(0.0) as usize
        } else {
            0
        };
        format_grouped(value, decimals)
    }
}

fn normalize(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span == 0.0 || !span.is_finite() {
        0.5
    } else {
        (v - a) / span
    }
}

struct TickSpec {
    i1: f64,
    i2: f64,
    /// Negative values mean "divide by `-inc`", which keeps decimal ticks exact.
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    TickSpec { i1, i2, inc }
}

fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let spec = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if !(spec.i2 >= spec.i1) {
        return Vec::new();
    }
    let n = (spec.i2 - spec.i1) as usize + 1;
    (0..n)
        .map(|i| {
            let i = i as f64;
            let idx = if reverse { spec.i2 - i } else { spec.i1 + i };
            if spec.inc < 0.0 {
                idx / -spec.inc
            } else {
                idx * spec.inc
            }
        })
        .collect()
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    if !(count > 0.0) || start == stop {
        return 0.0;
    }
    let reverse = stop < start;
    let spec = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    let step = if spec.inc < 0.0 {
        1.0 / -spec.inc
    } else {
        spec.inc
    };
    if reverse {
        -step
    } else {
        step
    }
}

/// Fixed-point formatting with thousands separators, e.g. `12,500.5`.
fn format_grouped(value: f64, decimals: usize) -> String {
    // avoid printing "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CategoryScale
// ─────────────────────────────────────────────────────────────────────────────

/// Ordinal mapping from category label to fill color.
///
/// Labels outside the configured domain all land in a single "unknown"
/// bucket with its own color instead of silently borrowing a palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScale {
    entries: Vec<(String, Color32)>,
    unknown: Color32,
}

impl CategoryScale {
    pub fn new(entries: Vec<(String, Color32)>, unknown: Color32) -> Self {
        Self { entries, unknown }
    }

    pub fn color(&self, category: &str) -> Color32 {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, color)| *color)
            .unwrap_or(self.unknown)
    }

    pub fn is_known(&self, category: &str) -> bool {
        self.entries.iter().any(|(c, _)| c == category)
    }

    pub fn unknown_color(&self) -> Color32 {
        self.unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_inserts_commas() {
        assert_eq!(format_grouped(1234567.0, 0), "1,234,567");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(-1500.25, 2), "-1,500.25");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_grouped(-0.0, 1), "0.0");
        assert_eq!(format_grouped(-0.01, 1), "0.0");
    }
}
