//! Top motivational needs.

use crate::domain::catalog::CoreValue;
use crate::domain::stages::ValuesRecord;

/// How many top values are surfaced as needs.
pub const TOP_NEEDS_COUNT: usize = 3;

/// Shown when no core values were recorded.
pub const FALLBACK_NEEDS: [CoreValue; 3] = [CoreValue::Growth, CoreValue::Impact, CoreValue::Balance];

/// The first three top values in selection order, or the fallback triple.
pub fn top_motivational_needs(values: Option<&ValuesRecord>) -> Vec<CoreValue> {
    let needs: Vec<CoreValue> = values
        .map(|v| v.top_values.iter().copied().take(TOP_NEEDS_COUNT).collect())
        .unwrap_or_default();
    if needs.is_empty() {
        FALLBACK_NEEDS.to_vec()
    } else {
        needs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;
    use crate::domain::stages::{JobPreference, PairedChoice};

    fn with_top(top: Vec<CoreValue>) -> ValuesRecord {
        ValuesRecord {
            paired_choice: PairedChoice::Freedom,
            independence_preference: Percentage::HALF,
            job_preference: JobPreference::Flexible,
            top_values: top,
        }
    }

    #[test]
    fn keeps_selection_order() {
        let v = with_top(vec![
            CoreValue::Security,
            CoreValue::Autonomy,
            CoreValue::Recognition,
            CoreValue::Growth,
            CoreValue::Impact,
        ]);
        assert_eq!(
            top_motivational_needs(Some(&v)),
            vec![CoreValue::Security, CoreValue::Autonomy, CoreValue::Recognition]
        );
    }

    #[test]
    fn absent_values_use_fallback() {
        assert_eq!(
            top_motivational_needs(None),
            vec![CoreValue::Growth, CoreValue::Impact, CoreValue::Balance]
        );
    }

    #[test]
    fn empty_selection_uses_fallback() {
        assert_eq!(top_motivational_needs(Some(&with_top(vec![]))), FALLBACK_NEEDS.to_vec());
    }

    #[test]
    fn short_selection_is_not_padded() {
        let v = with_top(vec![CoreValue::Service]);
        assert_eq!(top_motivational_needs(Some(&v)), vec![CoreValue::Service]);
    }
}
