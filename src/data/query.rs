use super::model::{Attribution, AwardDataset, Laureate, Prize};

// ---------------------------------------------------------------------------
// QueryFilter: the per-call filter snapshot
// ---------------------------------------------------------------------------

/// Filter arguments for one aggregate call. Callers own and mutate their
/// selection state elsewhere and hand the engine an immutable snapshot;
/// the engine keeps no state between calls.
///
/// `None` means unfiltered. The UI sentinels ("World", "All") are decoded
/// into `None` at the boundary, never compared here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    /// Restrict to prizes touching this country code.
    pub country: Option<String>,
    /// Which country code a laureate counts toward.
    pub attribution: Attribution,
    /// Restrict to prizes awarded in this year (ignored by the per-year
    /// aggregates, which always bucket every year).
    pub year: Option<String>,
}

impl QueryFilter {
    /// Year gate, applied before any country work so an excluded prize is
    /// never considered for country matching either.
    fn admits_year(&self, year: &str) -> bool {
        match &self.year {
            Some(wanted) => wanted == year,
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Group result types
// ---------------------------------------------------------------------------

/// Laureates grouped under one attributed country code. Holds the full
/// records: consumers need both the group size (choropleth intensity) and
/// the laureate details behind it.
#[derive(Debug, Clone)]
pub struct CountryGroup<'a> {
    pub code: &'a str,
    pub laureates: Vec<&'a Laureate>,
}

/// A per-category count (prizes or laureates depending on the operation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub value: u64,
}

/// Prizes counted by how many laureates shared them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedCount {
    pub shared: usize,
    pub value: u64,
}

/// A per-year count (prizes or laureates depending on the operation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCount {
    pub year: String,
    pub value: u64,
}

/// Find-or-create accumulation preserving first-encounter order. Groups
/// only ever come into being through a contribution, so a key that never
/// matches anything never appears in the result.
fn accumulate<K: PartialEq>(groups: &mut Vec<(K, u64)>, key: K, amount: u64) {
    match groups.iter_mut().find(|(k, _)| *k == key) {
        Some((_, value)) => *value += amount,
        None => groups.push((key, amount)),
    }
}

// ---------------------------------------------------------------------------
// Country grouping
// ---------------------------------------------------------------------------

/// Group all laureates by attributed country code, in first-seen order.
///
/// Laureates with neither a birth nor a death country code are left out
/// entirely; they still count in the year/category aggregates below.
pub fn laureates_by_country(
    dataset: &AwardDataset,
    attribution: Attribution,
) -> Vec<CountryGroup<'_>> {
    let mut result: Vec<CountryGroup<'_>> = Vec::new();

    for laureate in &dataset.laureates {
        let Some(code) = laureate.attributed_country(attribution) else {
            continue;
        };
        match result.iter_mut().find(|g| g.code == code) {
            Some(group) => group.laureates.push(laureate),
            None => result.push(CountryGroup {
                code,
                laureates: vec![laureate],
            }),
        }
    }
    result
}

// ---------------------------------------------------------------------------
// Prize-count aggregates: a surviving prize contributes exactly 1
// ---------------------------------------------------------------------------

/// Whether at least one of the prize's laureate references resolves to a
/// laureate attributed to `country`. Unresolvable references never match.
fn prize_touches_country(
    dataset: &AwardDataset,
    prize: &Prize,
    country: &str,
    attribution: Attribution,
) -> bool {
    prize.laureates.iter().any(|reference| {
        dataset
            .laureate_by_id(&reference.id)
            .and_then(|l| l.attributed_country(attribution))
            .is_some_and(|code| code == country)
    })
}

/// Prizes per category. Under a country filter a prize counts once if any
/// of its laureates matches and not at all otherwise, never partially.
pub fn prizes_by_category(dataset: &AwardDataset, filter: &QueryFilter) -> Vec<CategoryCount> {
    let mut groups: Vec<(String, u64)> = Vec::new();

    for prize in &dataset.prizes {
        if !filter.admits_year(&prize.year) {
            continue;
        }
        if let Some(country) = &filter.country {
            if !prize_touches_country(dataset, prize, country, filter.attribution) {
                continue;
            }
        }
        accumulate(&mut groups, prize.category.clone(), 1);
    }

    groups
        .into_iter()
        .map(|(category, value)| CategoryCount { category, value })
        .collect()
}

/// Prizes grouped by how many laureates shared them.
pub fn prizes_by_shared_count(dataset: &AwardDataset, filter: &QueryFilter) -> Vec<SharedCount> {
    let mut groups: Vec<(usize, u64)> = Vec::new();

    for prize in &dataset.prizes {
        if !filter.admits_year(&prize.year) {
            continue;
        }
        if let Some(country) = &filter.country {
            if !prize_touches_country(dataset, prize, country, filter.attribution) {
                continue;
            }
        }
        accumulate(&mut groups, prize.laureates.len(), 1);
    }

    groups
        .into_iter()
        .map(|(shared, value)| SharedCount { shared, value })
        .collect()
}

/// Prizes per year. `filter.year` is ignored: this feeds the year axis,
/// where a year filter would collapse the series to a single bucket.
pub fn prizes_by_year(dataset: &AwardDataset, filter: &QueryFilter) -> Vec<YearCount> {
    let mut groups: Vec<(String, u64)> = Vec::new();

    for prize in &dataset.prizes {
        if let Some(country) = &filter.country {
            if !prize_touches_country(dataset, prize, country, filter.attribution) {
                continue;
            }
        }
        accumulate(&mut groups, prize.year.clone(), 1);
    }

    groups
        .into_iter()
        .map(|(year, value)| YearCount { year, value })
        .collect()
}

// ---------------------------------------------------------------------------
// Laureate-count aggregates: partial attribution under a country filter
// ---------------------------------------------------------------------------

/// How many laureates a prize contributes under the filter's country.
///
/// Unfiltered, every reference counts. Under a country filter only the
/// laureates attributed to that country count, so a prize shared across
/// two countries contributes just its matching laureates to each bucket.
fn laureate_contribution(
    dataset: &AwardDataset,
    prize: &Prize,
    filter: &QueryFilter,
) -> u64 {
    match &filter.country {
        None => prize.laureates.len() as u64,
        Some(country) => prize
            .laureates
            .iter()
            .filter(|reference| {
                dataset
                    .laureate_by_id(&reference.id)
                    .and_then(|l| l.attributed_country(filter.attribution))
                    .is_some_and(|code| code == country)
            })
            .count() as u64,
    }
}

/// Laureates per category, honoring both the year and country filters.
pub fn laureates_by_category(dataset: &AwardDataset, filter: &QueryFilter) -> Vec<CategoryCount> {
    let mut groups: Vec<(String, u64)> = Vec::new();

    for prize in &dataset.prizes {
        if !filter.admits_year(&prize.year) {
            continue;
        }
        let contribution = laureate_contribution(dataset, prize, filter);
        if contribution == 0 {
            continue;
        }
        accumulate(&mut groups, prize.category.clone(), contribution);
    }

    groups
        .into_iter()
        .map(|(category, value)| CategoryCount { category, value })
        .collect()
}

/// Laureates per year. `filter.year` is ignored, same as [`prizes_by_year`].
pub fn laureates_by_year(dataset: &AwardDataset, filter: &QueryFilter) -> Vec<YearCount> {
    let mut groups: Vec<(String, u64)> = Vec::new();

    for prize in &dataset.prizes {
        let contribution = laureate_contribution(dataset, prize, filter);
        if contribution == 0 {
            continue;
        }
        accumulate(&mut groups, prize.year.clone(), contribution);
    }

    groups
        .into_iter()
        .map(|(year, value)| YearCount { year, value })
        .collect()
}
