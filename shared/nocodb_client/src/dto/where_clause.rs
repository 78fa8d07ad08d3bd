use crate::Error;
use std::fmt::{self, Display};

/// Characters that have a meaning in the where grammar
const RESERVED: [char; 4] = ['(', ')', ',', '~'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Neq,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
}

impl Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Comparison::Eq => "eq",
            Comparison::Neq => "neq",
            Comparison::Gt => "gt",
            Comparison::Ge => "ge",
            Comparison::Lt => "lt",
            Comparison::Le => "le",
            Comparison::Like => "like",
        };

        f.write_str(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conjunction {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Condition {
    field: String,
    comparison: Comparison,
    value: String,
}

///
/// Filter expression in the `(field,op,value)~and(field,op,value)` grammar.
/// Conditions are joined left to right, the grammar has no grouping
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Where {
    first: Condition,
    rest: Vec<(Conjunction, Condition)>,
}

impl Where {
    pub fn new(field: impl Into<String>, comparison: Comparison, value: impl Display) -> Self {
        Self {
            first: Condition {
                field: field.into(),
                comparison,
                value: value.to_string(),
            },
            rest: Vec::new(),
        }
    }

    pub fn and(self, field: impl Into<String>, comparison: Comparison, value: impl Display) -> Self {
        self.push(Conjunction::And, field, comparison, value)
    }

    pub fn or(self, field: impl Into<String>, comparison: Comparison, value: impl Display) -> Self {
        self.push(Conjunction::Or, field, comparison, value)
    }

    fn push(
        mut self,
        conjunction: Conjunction,
        field: impl Into<String>,
        comparison: Comparison,
        value: impl Display,
    ) -> Self {
        self.rest.push((
            conjunction,
            Condition {
                field: field.into(),
                comparison,
                value: value.to_string(),
            },
        ));
        self
    }

    ///
    /// Renders expression to the query parameter value.
    ///
    /// ### Errors
    /// - [Error::InvalidWhereValue] when a field or a value contains
    /// one of the grammar characters, they can't be escaped
    ///
    pub fn render(&self) -> Result<String, Error> {
        let mut rendered = Self::render_condition(&self.first)?;

        for (conjunction, condition) in &self.rest {
            let conjunction = match conjunction {
                Conjunction::And => "~and",
                Conjunction::Or => "~or",
            };
            rendered.push_str(conjunction);
            rendered.push_str(&Self::render_condition(condition)?);
        }

        Ok(rendered)
    }

    fn render_condition(condition: &Condition) -> Result<String, Error> {
        for part in [&condition.field, &condition.value] {
            if part.contains(RESERVED) {
                return Err(Error::InvalidWhereValue(part.clone()));
            }
        }

        Ok(format!(
            "({},{},{})",
            condition.field, condition.comparison, condition.value
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render_single_condition() {
        let r#where = Where::new("Email", Comparison::Eq, "a@x.com");

        assert_eq!(r#where.render().unwrap(), "(Email,eq,a@x.com)");
    }

    #[test]
    fn render_joined_conditions() {
        let r#where = Where::new("Id", Comparison::Eq, 42)
            .and("Used", Comparison::Eq, false)
            .or("Student", Comparison::Neq, true);

        assert_eq!(
            r#where.render().unwrap(),
            "(Id,eq,42)~and(Used,eq,false)~or(Student,neq,true)"
        );
    }

    #[test]
    fn render_reserved_value_rejected() {
        let r#where = Where::new("Email", Comparison::Eq, "a@x.com)~or(Used,eq,true");

        let err = r#where.render().unwrap_err();

        assert!(matches!(err, Error::InvalidWhereValue(_)));
    }

    #[test]
    fn render_reserved_field_rejected() {
        let r#where = Where::new("Id", Comparison::Eq, 1).and("Us,ed", Comparison::Eq, false);

        assert!(r#where.render().is_err());
    }
}
