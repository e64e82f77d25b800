//! Filter parameter names.
//!
//! A filter travels in the query string as `prefix[column<op>]=value`, for
//! example `flt[books.author*~]=Ann`. Real columns are qualified with their
//! schema table, pseudo-columns use their raw label.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{FilterError, Result};
use crate::types::ColumnKind;

/// Comparators understood by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Like,
    NotLike,
    Contains,
    Regex,
}

impl FilterOperator {
    /// Every operator, longest token first so suffix matching is unambiguous.
    pub const ALL: [FilterOperator; 10] = [
        FilterOperator::NotEqual,
        FilterOperator::LessOrEqual,
        FilterOperator::GreaterOrEqual,
        FilterOperator::NotLike,
        FilterOperator::Contains,
        FilterOperator::Regex,
        FilterOperator::Equal,
        FilterOperator::Less,
        FilterOperator::Greater,
        FilterOperator::Like,
    ];

    pub fn token(self) -> &'static str {
        match self {
            FilterOperator::Equal => "=",
            FilterOperator::NotEqual => "!=",
            FilterOperator::Less => "<",
            FilterOperator::LessOrEqual => "<=",
            FilterOperator::Greater => ">",
            FilterOperator::GreaterOrEqual => ">=",
            FilterOperator::Like => "~",
            FilterOperator::NotLike => "!~",
            FilterOperator::Contains => "*~",
            FilterOperator::Regex => "=*",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.token() == token)
    }

    /// Split a trailing operator token off `s`.
    fn strip_suffix(s: &str) -> Option<(&str, Self)> {
        Self::ALL
            .into_iter()
            .find_map(|op| s.strip_suffix(op.token()).map(|rest| (rest, op)))
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A column reference inside a filter parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QualifiedColumn {
    Schema { table: String, column: String },
    Pseudo { column: String },
}

impl QualifiedColumn {
    /// Qualify `column` with `table` unless it is a pseudo-column.
    pub fn new(table: &str, column: &str, kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Real => QualifiedColumn::Schema {
                table: table.to_string(),
                column: column.to_string(),
            },
            ColumnKind::Pseudo => QualifiedColumn::Pseudo {
                column: column.to_string(),
            },
        }
    }

    pub fn column(&self) -> &str {
        match self {
            QualifiedColumn::Schema { column, .. } | QualifiedColumn::Pseudo { column } => column,
        }
    }

    pub fn table(&self) -> Option<&str> {
        match self {
            QualifiedColumn::Schema { table, .. } => Some(table),
            QualifiedColumn::Pseudo { .. } => None,
        }
    }
}

impl fmt::Display for QualifiedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualifiedColumn::Schema { table, column } => write!(f, "{table}.{column}"),
            QualifiedColumn::Pseudo { column } => f.write_str(column),
        }
    }
}

/// A complete filter parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterParam {
    pub prefix: String,
    pub column: QualifiedColumn,
    pub operator: FilterOperator,
}

impl FilterParam {
    pub fn new(prefix: impl Into<String>, column: QualifiedColumn, operator: FilterOperator) -> Self {
        Self {
            prefix: prefix.into(),
            column,
            operator,
        }
    }

    /// The query-string key, e.g. `flt[books.author*~]`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Parse a query-string key back into its parts.
    ///
    /// A column starting with `pseudo_marker` is a pseudo-column; otherwise
    /// the text before the first `.` is the schema table.
    pub fn parse(name: &str, pseudo_marker: &str) -> Result<Self> {
        let caps = param_regex()
            .captures(name)
            .ok_or_else(|| FilterError::invalid_param(name, "expected prefix[column<op>]"))?;
        let prefix = &caps["prefix"];
        let (qualified, operator) = FilterOperator::strip_suffix(&caps["body"])
            .ok_or_else(|| FilterError::invalid_param(name, "missing comparison operator"))?;
        if qualified.is_empty() {
            return Err(FilterError::invalid_param(name, "missing column"));
        }

        let column = if ColumnKind::from_label(qualified, pseudo_marker) == ColumnKind::Pseudo {
            QualifiedColumn::Pseudo {
                column: qualified.to_string(),
            }
        } else {
            match qualified.split_once('.') {
                Some((table, column)) if !table.is_empty() && !column.is_empty() => {
                    QualifiedColumn::Schema {
                        table: table.to_string(),
                        column: column.to_string(),
                    }
                }
                _ => {
                    return Err(FilterError::invalid_param(
                        name,
                        "schema column must be written as table.column",
                    ))
                }
            }
        };

        Ok(Self::new(prefix, column, operator))
    }
}

impl fmt::Display for FilterParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}{}]", self.prefix, self.column, self.operator)
    }
}

fn param_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<prefix>[^\[\]]+)\[(?P<body>[^\[\]]+)\]$")
            .expect("filter parameter pattern must compile")
    })
}
