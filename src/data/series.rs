use std::fmt;

// ---------------------------------------------------------------------------
// SeriesKey – the x value of one chart point
// ---------------------------------------------------------------------------

/// A chart axis key: numeric for year/shared-count axes, textual for
/// category labels. Numbers compare numerically and sort before labels,
/// which compare lexicographically, so a mixed series still sorts
/// deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesKey {
    Number(i64),
    Label(String),
}

impl SeriesKey {
    /// Key for a numeric-as-text field such as `year`. Values that do not
    /// parse stay labels and sort after every number.
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<i64>() {
            Ok(n) => SeriesKey::Number(n),
            Err(_) => SeriesKey::Label(text.to_string()),
        }
    }
}

impl PartialOrd for SeriesKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeriesKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use SeriesKey::*;
        match (self, other) {
            (Number(a), Number(b)) => a.cmp(b),
            (Label(a), Label(b)) => a.cmp(b),
            (Number(_), Label(_)) => std::cmp::Ordering::Less,
            (Label(_), Number(_)) => std::cmp::Ordering::Greater,
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKey::Number(n) => write!(f, "{n}"),
            SeriesKey::Label(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for SeriesKey {
    fn from(n: i64) -> Self {
        SeriesKey::Number(n)
    }
}

impl From<&str> for SeriesKey {
    fn from(s: &str) -> Self {
        SeriesKey::Label(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Series shaping
// ---------------------------------------------------------------------------

/// Shape grouped counts into chart-ready `(x, y)` pairs, ascending by x.
/// The sort is stable, so pairs with equal keys keep encounter order.
/// Pure transform; no dependency on the source collections.
pub fn xy_series(pairs: impl IntoIterator<Item = (SeriesKey, u64)>) -> Vec<(SeriesKey, u64)> {
    let mut points: Vec<(SeriesKey, u64)> = pairs.into_iter().collect();
    points.sort_by(|a, b| a.0.cmp(&b.0));
    points
}
