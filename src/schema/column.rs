//! Field descriptors for CAL-ACCESS columns

use super::choices::ChoiceSet;
use serde::Serialize;

/// Semantic type of a column as declared by the source table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldType {
    /// Character data limited to `max_length` characters
    Text { max_length: usize },
    /// 32-bit integer
    Integer,
    /// Calendar date without a time component
    Date,
    /// Fixed-point decimal with `max_digits` significant digits,
    /// `decimal_places` of them after the point
    Decimal {
        max_digits: u32,
        decimal_places: u32,
    },
    /// Approximate floating-point number
    Float,
}

impl FieldType {
    /// Short name used in documentation output
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Text { .. } => "text",
            FieldType::Integer => "integer",
            FieldType::Date => "date",
            FieldType::Decimal { .. } => "decimal",
            FieldType::Float => "float",
        }
    }

    pub fn max_length(&self) -> Option<usize> {
        match self {
            FieldType::Text { max_length } => Some(*max_length),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Text { max_length } => write!(f, "text({})", max_length),
            FieldType::Decimal {
                max_digits,
                decimal_places,
            } => write!(f, "decimal({}, {})", max_digits, decimal_places),
            other => f.write_str(other.name()),
        }
    }
}

/// Column descriptor
///
/// A field names one column of a source table together with its type and
/// the constraints an enforcing layer applies when materializing a row.
/// Descriptors are built in `const` context so whole tables can live in
/// statics:
///
/// ```rust
/// use calaccess_raw::schema::FieldSpec;
///
/// const NAML: FieldSpec = FieldSpec::text("naml", "NAML", 200)
///     .help("Last name, (though sometimes the full name)");
/// assert!(!NAML.nullable);
/// assert_eq!(NAML.field_type.max_length(), Some(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field name on the record type (snake case)
    pub name: &'static str,
    /// Column identifier in the source database, exact casing
    pub db_column: &'static str,
    pub field_type: FieldType,
    /// Whether the column may be absent (NULL)
    pub nullable: bool,
    /// Whether empty text is an acceptable value
    pub blank: bool,
    /// Whether the source database indexes the column
    pub indexed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<&'static str>,
    /// Serialized as the choice set name
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_choice_set_name"
    )]
    pub choices: Option<&'static ChoiceSet>,
    /// Inclusive bounds for integer columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(i64, i64)>,
}

fn serialize_choice_set_name<S: serde::Serializer>(
    choices: &Option<&'static ChoiceSet>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match choices {
        Some(set) => serializer.serialize_some(set.name),
        None => serializer.serialize_none(),
    }
}

impl FieldSpec {
    const fn new(name: &'static str, db_column: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            db_column,
            field_type,
            nullable: false,
            blank: false,
            indexed: false,
            verbose_name: None,
            help_text: None,
            choices: None,
            range: None,
        }
    }

    pub const fn text(name: &'static str, db_column: &'static str, max_length: usize) -> Self {
        Self::new(name, db_column, FieldType::Text { max_length })
    }

    pub const fn integer(name: &'static str, db_column: &'static str) -> Self {
        Self::new(name, db_column, FieldType::Integer)
    }

    pub const fn date(name: &'static str, db_column: &'static str) -> Self {
        Self::new(name, db_column, FieldType::Date)
    }

    pub const fn decimal(
        name: &'static str,
        db_column: &'static str,
        max_digits: u32,
        decimal_places: u32,
    ) -> Self {
        Self::new(
            name,
            db_column,
            FieldType::Decimal {
                max_digits,
                decimal_places,
            },
        )
    }

    pub const fn float(name: &'static str, db_column: &'static str) -> Self {
        Self::new(name, db_column, FieldType::Float)
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    pub const fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub const fn verbose(mut self, verbose_name: &'static str) -> Self {
        self.verbose_name = Some(verbose_name);
        self
    }

    pub const fn help(mut self, help_text: &'static str) -> Self {
        self.help_text = Some(help_text);
        self
    }

    pub const fn choices(mut self, choices: &'static ChoiceSet) -> Self {
        self.choices = Some(choices);
        self
    }

    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Human-readable label: the verbose name, or the field name with
    /// underscores replaced by spaces
    pub fn label(&self) -> String {
        match self.verbose_name {
            Some(verbose) => verbose.to_string(),
            None => self.name.replace('_', " "),
        }
    }

    /// Whether the column holds an amount of money
    pub fn is_monetary(&self) -> bool {
        matches!(self.field_type, FieldType::Decimal { .. })
            || self.name.contains("amount")
            || self.name.contains("amt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_builders() {
        const FIELD: FieldSpec = FieldSpec::integer("filer_id", "FILER_ID")
            .nullable()
            .indexed()
            .help("The internal filer id saved in Cal-Access");

        assert!(FIELD.nullable);
        assert!(FIELD.indexed);
        assert!(!FIELD.blank);
        assert_eq!(FIELD.field_type, FieldType::Integer);
        assert_eq!(FIELD.help_text, Some("The internal filer id saved in Cal-Access"));
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let field = FieldSpec::date("effect_dt", "EFFECT_DT");
        assert_eq!(field.label(), "effect dt");

        let field = FieldSpec::date("elec_dt", "ELEC_DT").verbose("election date");
        assert_eq!(field.label(), "election date");
    }

    #[test]
    fn test_field_type_display() {
        assert_eq!(FieldType::Text { max_length: 8 }.to_string(), "text(8)");
        assert_eq!(
            FieldType::Decimal {
                max_digits: 14,
                decimal_places: 2
            }
            .to_string(),
            "decimal(14, 2)"
        );
        assert_eq!(FieldType::Float.to_string(), "float");
    }

    #[test]
    fn test_monetary_detection() {
        assert!(FieldSpec::decimal("amount_a", "AMOUNT_A", 14, 2).is_monetary());
        assert!(FieldSpec::float("pmnt_amount", "PMNT_AMOUNT").is_monetary());
        assert!(!FieldSpec::integer("office_cd", "OFFICE_CD").is_monetary());
    }
}
