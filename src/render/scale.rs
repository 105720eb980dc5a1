//! Linear scales and "nice" tick generation.

/// Maps a continuous domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps a domain value to the range. A zero-width domain maps to the range midpoint.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        (r1 - r0).mul_add((value - d0) / span, r0)
    }

    /// Roughly `count` human-friendly tick values within the domain.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if d0 <= d1 {
            ticks(d0, d1, count)
        } else {
            let mut reversed = ticks(d1, d0, count);
            reversed.reverse();
            reversed
        }
    }
}

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Tick index bounds and increment; a negative increment is a divisor.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
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

    let (i1, i2, inc) = if power < 0.0 {
        let divisor = 10f64.powf(-power) / factor;
        let mut i1 = (start * divisor).round() as i64;
        let mut i2 = (stop * divisor).round() as i64;
        if (i1 as f64) / divisor < start {
            i1 += 1;
        }
        if (i2 as f64) / divisor > stop {
            i2 -= 1;
        }
        (i1, i2, -divisor)
    } else {
        let multiplier = 10f64.powf(power) * factor;
        let mut i1 = (start / multiplier).round() as i64;
        let mut i2 = (stop / multiplier).round() as i64;
        if (i1 as f64) * multiplier < start {
            i1 += 1;
        }
        if (i2 as f64) * multiplier > stop {
            i2 -= 1;
        }
        (i1, i2, multiplier)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    inc.is_finite().then_some((i1, i2, inc))
}

#[allow(clippy::cast_precision_loss)]
fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let Some((i1, i2, inc)) = tick_spec(start, stop, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    (i1..=i2)
        .map(|i| {
            if inc < 0.0 {
                i as f64 / -inc
            } else {
                i as f64 * inc
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
