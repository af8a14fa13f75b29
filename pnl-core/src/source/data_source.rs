use crate::models::FinancialEntry;

/// Synchronous accessor mapping a project name to its stored record.
///
/// Returning `None` is not an error: the form keeps its current values.
pub trait ProjectDataSource {
    fn fetch_project_data(
        &self,
        project_name: &str,
    ) -> Option<FinancialEntry>;
}

/// Plain callbacks work as data sources.
impl<F> ProjectDataSource for F
where
    F: Fn(&str) -> Option<FinancialEntry>,
{
    fn fetch_project_data(
        &self,
        project_name: &str,
    ) -> Option<FinancialEntry> {
        self(project_name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::FieldValue;

    #[test]
    fn closure_is_a_data_source() {
        let source = |name: &str| {
            (name == "Fence A").then(|| {
                let mut entry = FinancialEntry::default();
                entry.income.contract = dec!(100).into();
                entry
            })
        };

        let found = source.fetch_project_data("Fence A").unwrap();
        assert_eq!(found.income.contract, FieldValue::Number(dec!(100)));
        assert!(source.fetch_project_data("Fence B").is_none());
    }
}
