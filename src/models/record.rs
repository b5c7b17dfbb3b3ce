//! Behavior shared by every CAL-ACCESS record type

use crate::schema::TableSpec;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// Borrowed view of one column value of a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Text(&'a str),
    Integer(i64),
    Date(NaiveDate),
    Decimal(Decimal),
    Float(f64),
}

impl FieldValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Kind name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Date(_) => "date",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Float(_) => "float",
        }
    }

    /// Ordering used for default table ordering: nulls sort last, values
    /// of different kinds compare equal.
    pub fn sort_cmp(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
            (FieldValue::Null, _) => Ordering::Greater,
            (_, FieldValue::Null) => Ordering::Less,
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Date(d) => write!(f, "{}", d),
            FieldValue::Decimal(d) => write!(f, "{}", d),
            FieldValue::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<Option<i32>> for FieldValue<'_> {
    fn from(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Null, |v| FieldValue::Integer(i64::from(v)))
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<Option<NaiveDate>> for FieldValue<'_> {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Date)
    }
}

impl From<Option<Decimal>> for FieldValue<'_> {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Decimal)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

/// A row of one CAL-ACCESS table.
///
/// Implementors expose their table descriptor and a by-name view of
/// their columns; validation, ordering and export are written once
/// against this trait. `Display` gives the record's short string form.
pub trait CalAccessRecord: fmt::Display {
    /// Descriptor of the table the record belongs to
    const TABLE: &'static TableSpec;

    /// Value of the named field, `None` if the record has no such field
    fn value(&self, field: &str) -> Option<FieldValue<'_>>;

    fn db_table() -> &'static str {
        Self::TABLE.db_table
    }

    /// Compare two records by the table's declared ordering
    fn cmp_by_ordering(&self, other: &Self) -> Ordering {
        for name in Self::TABLE.ordering {
            let left = self.value(name).unwrap_or(FieldValue::Null);
            let right = other.value(name).unwrap_or(FieldValue::Null);
            match left.sort_cmp(&right) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

/// Sort records in place by their table's declared ordering. The sort is
/// stable, so tables without an ordering keep their load order.
pub fn sort_by_ordering<R: CalAccessRecord>(records: &mut [R]) {
    records.sort_by(|a, b| a.cmp_by_ordering(b));
}

// =============================================================================
// Amendments
// =============================================================================

/// Amendment number outside the declared range
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmendmentError {
    #[error("amendment number {0} is outside 0..=999")]
    OutOfRange(i64),
}

/// Decoded `amend_id` / `filing_sequence`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Amendment {
    Original,
    Number(u16),
}

impl Amendment {
    pub const MAX: u16 = 999;

    pub fn from_id(id: i64) -> Result<Self, AmendmentError> {
        match id {
            0 => Ok(Amendment::Original),
            1..=999 => Ok(Amendment::Number(id as u16)),
            _ => Err(AmendmentError::OutOfRange(id)),
        }
    }

    pub fn id(self) -> u16 {
        match self {
            Amendment::Original => 0,
            Amendment::Number(n) => n,
        }
    }

    pub fn is_original(self) -> bool {
        self == Amendment::Original
    }
}

impl fmt::Display for Amendment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amendment::Original => f.write_str("original filing"),
            Amendment::Number(n) => write!(f, "amendment {}", n),
        }
    }
}

/// One version of a filing: the `(filing_id, amend_id)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilingVersion {
    pub filing_id: i32,
    pub amend_id: i32,
}

impl FilingVersion {
    pub fn new(filing_id: i32, amend_id: i32) -> Self {
        Self {
            filing_id,
            amend_id,
        }
    }

    pub fn amendment(&self) -> Result<Amendment, AmendmentError> {
        Amendment::from_id(i64::from(self.amend_id))
    }
}

impl fmt::Display for FilingVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.filing_id, self.amend_id)
    }
}

/// Records that belong to a specific filing version
pub trait Versioned {
    fn version(&self) -> FilingVersion;

    fn amendment(&self) -> Result<Amendment, AmendmentError> {
        self.version().amendment()
    }
}

/// Group records by filing version, versions in ascending order
pub fn group_by_version<R: Versioned>(
    records: &[R],
) -> std::collections::BTreeMap<FilingVersion, Vec<&R>> {
    let mut groups: std::collections::BTreeMap<FilingVersion, Vec<&R>> =
        std::collections::BTreeMap::new();
    for record in records {
        groups.entry(record.version()).or_default().push(record);
    }
    groups
}

/// Keep only records of the most recent amendment of each filing
pub fn latest_versions<R: Versioned>(records: &[R]) -> Vec<&R> {
    let mut latest: std::collections::HashMap<i32, i32> = std::collections::HashMap::new();
    for record in records {
        let version = record.version();
        let entry = latest.entry(version.filing_id).or_insert(version.amend_id);
        if version.amend_id > *entry {
            *entry = version.amend_id;
        }
    }
    records
        .iter()
        .filter(|r| {
            let version = r.version();
            latest.get(&version.filing_id) == Some(&version.amend_id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amendment_decoding() {
        assert_eq!(Amendment::from_id(0), Ok(Amendment::Original));
        assert!(Amendment::from_id(0).unwrap().is_original());
        assert_eq!(Amendment::from_id(1), Ok(Amendment::Number(1)));
        assert_eq!(Amendment::from_id(999), Ok(Amendment::Number(999)));
        assert_eq!(Amendment::from_id(1000), Err(AmendmentError::OutOfRange(1000)));
        assert_eq!(Amendment::from_id(-1), Err(AmendmentError::OutOfRange(-1)));
    }

    #[test]
    fn test_amendment_display() {
        assert_eq!(Amendment::Original.to_string(), "original filing");
        assert_eq!(Amendment::Number(3).to_string(), "amendment 3");
    }

    #[test]
    fn test_nulls_sort_last() {
        assert_eq!(FieldValue::Null.sort_cmp(&FieldValue::Text("A")), Ordering::Greater);
        assert_eq!(FieldValue::Text("A").sort_cmp(&FieldValue::Null), Ordering::Less);
        assert_eq!(
            FieldValue::Text("ADAMS").sort_cmp(&FieldValue::Text("SMITH")),
            Ordering::Less
        );
    }

    struct Row(i32, i32);

    impl Versioned for Row {
        fn version(&self) -> FilingVersion {
            FilingVersion::new(self.0, self.1)
        }
    }

    #[test]
    fn test_latest_versions_keeps_highest_amendment() {
        let rows = vec![Row(10, 0), Row(10, 1), Row(10, 1), Row(11, 0), Row(10, 0)];
        let latest = latest_versions(&rows);
        let versions: Vec<(i32, i32)> = latest.iter().map(|r| (r.0, r.1)).collect();
        assert_eq!(versions, vec![(10, 1), (10, 1), (11, 0)]);

        let groups = group_by_version(&rows);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&FilingVersion::new(10, 0)].len(), 2);
    }
}
