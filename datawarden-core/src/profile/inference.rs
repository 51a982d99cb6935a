//! Column type inference.

use crate::dataset::Value;

use super::models::ColumnType;

/// Infers the type of a column from its non-missing values.
///
/// A column is boolean when every value is a boolean or a boolean token,
/// numeric when every value coerces to a finite number, and categorical
/// otherwise. An empty column (all values missing) is categorical.
pub fn infer_column_type<'a, I>(values: I) -> ColumnType
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut saw_any = false;
    let mut all_boolean = true;
    let mut all_numeric = true;

    for value in values {
        saw_any = true;
        if value.as_boolean().is_none() {
            all_boolean = false;
        }
        if value.as_numeric().is_none() {
            all_numeric = false;
        }
        if !all_boolean && !all_numeric {
            return ColumnType::Categorical;
        }
    }

    if !saw_any {
        return ColumnType::Categorical;
    }
    if all_boolean {
        ColumnType::Boolean
    } else if all_numeric {
        ColumnType::Numeric
    } else {
        ColumnType::Categorical
    }
}
