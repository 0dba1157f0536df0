//! Label Computation

use crate::error::LabelError;
use std::collections::BTreeMap;
use tracing::debug;
use turbofan_data::{CycleRecord, LabeledRecord, RulReference};

/// Label a full run-to-failure collection.
///
/// Records are grouped by unit id; within each run the label is
/// `max_cycle - cycle`, so the last recorded cycle of every unit gets 0.
/// Grouping is by key, not position: the result is identical for any input
/// row order. Output is ordered by (unit, cycle).
pub fn label_train(records: Vec<CycleRecord>) -> Result<Vec<LabeledRecord>, LabelError> {
    if records.is_empty() {
        return Err(LabelError::EmptyCollection);
    }

    let runs = group_by_unit(records);
    debug!("labeling {} train runs", runs.len());

    let mut labeled = Vec::new();
    for (_, run) in runs {
        label_run(run, 0, &mut labeled);
    }
    Ok(labeled)
}

/// Label a truncated test collection against its true-RUL reference.
///
/// Within each run the label is `max_cycle + true_rul - cycle`, where
/// `true_rul` is the number of cycles remaining beyond the last recorded
/// one. The join is validated in both directions: a unit in the series
/// without a reference entry fails with
/// [`LabelError::MissingRulReference`], and a reference entry whose unit
/// never appears in the series fails with [`LabelError::EmptyRun`] rather
/// than silently misaligning.
pub fn label_test(
    records: Vec<CycleRecord>,
    reference: &RulReference,
) -> Result<Vec<LabeledRecord>, LabelError> {
    if records.is_empty() {
        return Err(LabelError::EmptyCollection);
    }

    let runs = group_by_unit(records);
    for unit in reference.units() {
        if !runs.contains_key(&unit) {
            return Err(LabelError::EmptyRun(unit));
        }
    }
    debug!("labeling {} test runs", runs.len());

    let mut labeled = Vec::new();
    for (unit, run) in runs {
        let true_rul = reference
            .get(unit)
            .ok_or(LabelError::MissingRulReference(unit))?;
        label_run(run, true_rul, &mut labeled);
    }
    Ok(labeled)
}

fn group_by_unit(records: Vec<CycleRecord>) -> BTreeMap<u32, Vec<CycleRecord>> {
    let mut runs: BTreeMap<u32, Vec<CycleRecord>> = BTreeMap::new();
    for record in records {
        runs.entry(record.unit).or_default().push(record);
    }
    runs
}

fn label_run(mut run: Vec<CycleRecord>, rul_at_truncation: u32, out: &mut Vec<LabeledRecord>) {
    run.sort_by_key(|r| r.cycle);
    // Grouping guarantees at least one record per run
    let max_cycle = run.iter().map(|r| r.cycle).max().unwrap_or(0);
    for record in run {
        let rul = max_cycle + rul_at_truncation - record.cycle;
        out.push(LabeledRecord { record, rul });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(unit: u32, cycles: &[u32]) -> Vec<CycleRecord> {
        cycles
            .iter()
            .map(|&c| CycleRecord::uniform(unit, c, c as f64))
            .collect()
    }

    #[test]
    fn test_train_label_counts_down_to_zero() {
        let labeled = label_train(run(1, &[1, 2, 3])).unwrap();
        let ruls: Vec<u32> = labeled.iter().map(|r| r.rul).collect();
        assert_eq!(ruls, vec![2, 1, 0]);
    }

    #[test]
    fn test_train_label_order_independent() {
        let mut shuffled = run(2, &[3, 1, 2]);
        shuffled.extend(run(1, &[2, 1]));

        let labeled = label_train(shuffled).unwrap();
        let keys: Vec<(u32, u32, u32)> =
            labeled.iter().map(|r| (r.record.unit, r.record.cycle, r.rul)).collect();
        assert_eq!(
            keys,
            vec![(1, 1, 1), (1, 2, 0), (2, 1, 2), (2, 2, 1), (2, 3, 0)]
        );
    }

    #[test]
    fn test_train_empty_collection() {
        assert!(matches!(
            label_train(Vec::new()),
            Err(LabelError::EmptyCollection)
        ));
    }

    #[test]
    fn test_test_label_adds_true_rul() {
        // Truncated at cycle 120 with 30 cycles of true life remaining
        let cycles: Vec<u32> = (1..=120).collect();
        let reference = RulReference::from_positional(&[30]);
        let labeled = label_test(run(1, &cycles), &reference).unwrap();

        let at = |cycle: u32| {
            labeled
                .iter()
                .find(|r| r.record.cycle == cycle)
                .map(|r| r.rul)
                .unwrap()
        };
        assert_eq!(at(120), 30);
        assert_eq!(at(100), 50);
        assert_eq!(at(1), 149);
    }

    #[test]
    fn test_missing_reference_fails_whole_variant() {
        // Unit 2 in the series has no reference entry; the call fails rather
        // than skipping the run
        let mut records = run(1, &[1, 2]);
        records.extend(run(2, &[1, 2, 3]));
        let reference = RulReference::from_positional(&[10]);

        let err = label_test(records, &reference).unwrap_err();
        assert!(matches!(err, LabelError::MissingRulReference(2)));
    }

    #[test]
    fn test_surplus_reference_entry_rejected() {
        // Reference declares unit 2, series only has unit 1
        let reference = RulReference::from_positional(&[10, 20]);
        let err = label_test(run(1, &[1]), &reference).unwrap_err();
        assert!(matches!(err, LabelError::EmptyRun(2)));
    }

    proptest! {
        #[test]
        fn prop_train_rul_non_increasing(run_lens in prop::collection::vec(1u32..60, 1..6)) {
            let mut records = Vec::new();
            for (i, &len) in run_lens.iter().enumerate() {
                records.extend(run(i as u32 + 1, &(1..=len).collect::<Vec<u32>>()));
            }

            let labeled = label_train(records).unwrap();
            for window in labeled.windows(2) {
                if window[0].record.unit == window[1].record.unit {
                    prop_assert!(window[1].rul <= window[0].rul);
                }
            }
            for (i, &len) in run_lens.iter().enumerate() {
                let last = labeled
                    .iter()
                    .find(|r| r.record.unit == i as u32 + 1 && r.record.cycle == len)
                    .unwrap();
                prop_assert_eq!(last.rul, 0);
            }
        }
    }
}
