use flashy_utils::f;
use serde::Serialize;

/// Type inferred for a column of values
///
/// Inference tries each kind in order and keeps the first that every value
/// in the column satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnKind {
    /// Every value is a whole number
    Integer,
    /// Every value is a floating point number
    Float,
    /// Anything else, kept as the raw text
    Text,
}

/// Typed values of a single column
///
/// FLASH writes almost everything as floating point, but integer counters
/// and the odd text flag do appear in user-defined columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    /// Whole numbers
    Integer(Vec<i64>),
    /// Floating point numbers, with missing values as `NaN`
    Float(Vec<f64>),
    /// Raw text, with missing values as empty strings
    Text(Vec<String>),
}

impl Default for Column {
    fn default() -> Self {
        Self::Float(Vec::new())
    }
}

impl Column {
    /// Number of values in the column
    pub fn len(&self) -> usize {
        match self {
            Self::Integer(values) => values.len(),
            Self::Float(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    /// True if there are no values in the column
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The inferred type of the column
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Integer(_) => ColumnKind::Integer,
            Self::Float(_) => ColumnKind::Float,
            Self::Text(_) => ColumnKind::Text,
        }
    }

    /// Borrow the values if the column is [Column::Float]
    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            Self::Float(values) => Some(values),
            _ => None,
        }
    }

    /// Copy of the values as `f64`, if the column is numeric
    ///
    /// This is the usual way to feed a column to the post-processing
    /// routines.
    ///
    /// ```rust
    /// # use flashy_dat::Column;
    /// assert_eq!(Column::Integer(vec![1, 2]).to_f64(), Some(vec![1.0, 2.0]));
    /// assert_eq!(Column::Text(vec!["a".into()]).to_f64(), None);
    /// ```
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            Self::Integer(values) => Some(values.iter().map(|v| *v as f64).collect()),
            Self::Float(values) => Some(values.clone()),
            Self::Text(_) => None,
        }
    }

    /// Values rendered back to text
    fn to_text(&self) -> Vec<String> {
        match self {
            Self::Integer(values) => values.iter().map(|v| f!("{v}")).collect(),
            Self::Float(values) => values.iter().map(|v| f!("{v}")).collect(),
            Self::Text(values) => values.clone(),
        }
    }

    /// Join columns end to end, promoting to a common type
    ///
    /// All integer columns stay integer, any float makes the result float,
    /// and any text makes the result text. Empty columns carry no type
    /// information and are ignored when choosing the result type.
    ///
    /// ```rust
    /// # use flashy_dat::Column;
    /// let a = Column::Integer(vec![1, 2]);
    /// let b = Column::Float(vec![2.5]);
    /// assert_eq!(Column::concat([&a, &b]), Column::Float(vec![1.0, 2.0, 2.5]));
    /// ```
    pub fn concat<'a, I>(columns: I) -> Column
    where
        I: IntoIterator<Item = &'a Column>,
    {
        let columns: Vec<&Column> = columns.into_iter().collect();

        let kind = columns
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| c.kind())
            .max()
            .unwrap_or(ColumnKind::Float);

        match kind {
            ColumnKind::Integer => Column::Integer(
                columns
                    .iter()
                    .filter_map(|c| match c {
                        Column::Integer(values) => Some(values.iter().copied()),
                        _ => None,
                    })
                    .flatten()
                    .collect(),
            ),
            ColumnKind::Float => Column::Float(
                columns
                    .iter()
                    .filter_map(|c| c.to_f64())
                    .flatten()
                    .collect(),
            ),
            ColumnKind::Text => Column::Text(columns.iter().flat_map(|c| c.to_text()).collect()),
        }
    }
}

impl From<Vec<i64>> for Column {
    fn from(values: Vec<i64>) -> Self {
        Self::Integer(values)
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Self::Float(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}
