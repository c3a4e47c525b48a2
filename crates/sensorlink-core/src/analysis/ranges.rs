use crate::RangeSummary;

/// Running min/max over the non-null values of one reading field.
#[derive(Debug, Default)]
pub(crate) struct RangeStats {
    min: Option<f64>,
    max: Option<f64>,
    samples: u64,
}

impl RangeStats {
    pub(crate) fn add(&mut self, value: Option<f64>) {
        let Some(value) = value else {
            return;
        };
        self.samples += 1;
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
    }

    pub(crate) fn summary(&self) -> Option<RangeSummary> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(RangeSummary {
                min,
                max,
                samples: self.samples,
            }),
            _ => None,
        }
    }
}
