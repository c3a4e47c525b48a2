use std::collections::BTreeMap;

use crate::HeaderCount;
use crate::codec::uplink::HeaderKind;

#[derive(Debug, Default)]
pub(crate) struct HeaderStats {
    counts: BTreeMap<u8, u64>,
}

impl HeaderStats {
    pub(crate) fn add(&mut self, header: u8) {
        *self.counts.entry(header).or_insert(0) += 1;
    }

    /// Counts in ascending header order.
    pub(crate) fn build_header_counts(self) -> Vec<HeaderCount> {
        self.counts
            .into_iter()
            .map(|(header, count)| HeaderCount {
                header,
                kind: HeaderKind::from(header).as_str().to_string(),
                count,
            })
            .collect()
    }
}
