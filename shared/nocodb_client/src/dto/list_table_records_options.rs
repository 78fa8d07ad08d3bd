use super::{Sort, Where};

#[derive(Debug, Clone, Default)]
pub struct ListTableRecordsOptions {
    /// Fields included in the response, all fields when empty
    pub fields: Vec<String>,
    pub sort: Vec<Sort>,
    pub r#where: Option<Where>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub view_id: Option<String>,
}

impl ListTableRecordsOptions {
    ///
    /// Builds query pairs in the format expected by the list endpoint
    ///
    /// ### Errors
    /// - [crate::Error::InvalidWhereValue] when where clause can't be rendered
    ///
    pub fn query_pairs(&self) -> Result<Vec<(&'static str, String)>, crate::Error> {
        let mut pairs = Vec::new();

        if !self.fields.is_empty() {
            pairs.push(("fields", self.fields.join(",")));
        }

        if !self.sort.is_empty() {
            let sort = self
                .sort
                .iter()
                .map(Sort::to_string)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("sort", sort));
        }

        if let Some(r#where) = &self.r#where {
            pairs.push(("where", r#where.render()?));
        }

        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }

        if let Some(view_id) = &self.view_id {
            pairs.push(("viewId", view_id.clone()));
        }

        Ok(pairs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Comparison;

    #[test]
    fn query_pairs_empty() {
        let options = ListTableRecordsOptions::default();

        assert!(options.query_pairs().unwrap().is_empty());
    }

    #[test]
    fn query_pairs_all_set() {
        let options = ListTableRecordsOptions {
            fields: vec!["Id".to_string(), "Email".to_string()],
            sort: vec![Sort::descending("CreatedAt"), Sort::ascending("Id")],
            r#where: Some(Where::new("Used", Comparison::Eq, false)),
            offset: Some(25),
            limit: Some(1),
            view_id: Some("vw_123".to_string()),
        };

        let pairs = options.query_pairs().unwrap();

        assert_eq!(
            pairs,
            vec![
                ("fields", "Id,Email".to_string()),
                ("sort", "-CreatedAt,Id".to_string()),
                ("where", "(Used,eq,false)".to_string()),
                ("offset", "25".to_string()),
                ("limit", "1".to_string()),
                ("viewId", "vw_123".to_string()),
            ]
        );
    }
}
