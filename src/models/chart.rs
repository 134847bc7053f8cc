//! Label/value series consumed by the dashboard charts.

use serde::Serialize;

/// Parallel label and value arrays. Both vectors always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    labels: Vec<String>,
    data: Vec<i64>,
}

/// One label/value pair, used when rendering tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint<'a> {
    pub label: &'a str,
    pub value: i64,
}

impl ChartSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: i64) {
        self.labels.push(label.into());
        self.data.push(value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn data(&self) -> &[i64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> i64 {
        self.data.iter().sum()
    }

    pub fn points(&self) -> Vec<ChartPoint<'_>> {
        self.labels
            .iter()
            .zip(&self.data)
            .map(|(label, value)| ChartPoint {
                label,
                value: *value,
            })
            .collect()
    }

    /// Serialize for embedding inside an inline `<script>` element.
    ///
    /// `</` is escaped so a label can never close the surrounding tag.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}

impl<L: Into<String>> FromIterator<(L, i64)> for ChartSeries {
    fn from_iter<I: IntoIterator<Item = (L, i64)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut series = Self::with_capacity(iter.size_hint().0);
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}
