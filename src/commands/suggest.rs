//! Suggest command - print the candidates for one field

use crate::{PillError, suggest::SuggestionEngine, terms::Field};

type Result<T> = std::result::Result<T, PillError>;

/// Candidate labels for a field
///
/// # Errors
///
/// Returns `PillError::InvalidInput` when value suggestions are asked for
/// without a known column.
pub fn candidates(
    engine: &SuggestionEngine<'_>,
    field: Field,
    input: &str,
    column: Option<&str>,
    all: bool,
) -> Result<Vec<String>> {
    let column = match column {
        Some(label) => Some(engine.catalog().column_by_label(label).ok_or_else(|| {
            PillError::InvalidInput(format!("unknown column '{label}'"))
        })?),
        None if field == Field::Value => {
            return Err(PillError::InvalidInput(
                "value suggestions need --column".to_string(),
            ));
        }
        None => None,
    };

    let found = if all {
        engine.reveal_all(field, column)
    } else {
        engine.suggest(field, input, column)
    };

    Ok(found.iter().map(|c| c.label().to_string()).collect())
}

/// Execute the suggest command
///
/// # Errors
///
/// Returns `PillError::InvalidInput` for an unknown column or a value field
/// without a column.
pub fn execute(
    engine: &SuggestionEngine<'_>,
    field: Field,
    input: &str,
    column: Option<&str>,
    all: bool,
    quiet: bool,
) -> Result<()> {
    let labels = candidates(engine, field, input, column, all)?;

    if labels.is_empty() {
        if !quiet {
            eprintln!("No {field} suggestions.");
        }
        return Ok(());
    }

    for label in labels {
        println!("{label}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::{NoValues, TypedValues};
    use crate::testing::sample_catalog;

    #[test]
    fn test_operator_candidates() {
        let catalog = sample_catalog();
        let engine = SuggestionEngine::new(&catalog, &NoValues);

        assert_eq!(
            candidates(&engine, Field::Operator, "is", None, false).unwrap(),
            vec!["Equals"]
        );
        assert_eq!(
            candidates(&engine, Field::Operator, "", None, true).unwrap().len(),
            4
        );
    }

    #[test]
    fn test_value_candidates_need_column() {
        let catalog = sample_catalog();
        let engine = SuggestionEngine::new(&catalog, &TypedValues);

        assert!(matches!(
            candidates(&engine, Field::Value, "c", None, false),
            Err(PillError::InvalidInput(_))
        ));
        assert!(matches!(
            candidates(&engine, Field::Value, "c", Some("Planet"), false),
            Err(PillError::InvalidInput(_))
        ));
        assert_eq!(
            candidates(&engine, Field::Value, "", Some("State"), true).unwrap(),
            vec!["CA", "NV", "OR"]
        );
    }
}
