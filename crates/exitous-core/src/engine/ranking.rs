//! Outcome accumulation, library resolution and ranking.

use std::collections::HashMap;

use log::debug;

use super::{ResolvedTask, ResolvedTip};
use crate::{library::Library, models::GuidanceRule};

/// Outcome ids of the fired rules, deduplicated in first-seen order, each
/// with the ids of the rules that referenced it.
fn accumulate<'r, F>(fired: &[&'r GuidanceRule], outcomes: F) -> Vec<(&'r str, Vec<String>)>
where
    F: Fn(&'r GuidanceRule) -> &'r [String],
{
    let mut order: Vec<(&str, Vec<String>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for &rule in fired {
        for id in outcomes(rule) {
            let slot = *index.entry(id.as_str()).or_insert_with(|| {
                order.push((id.as_str(), Vec::new()));
                order.len() - 1
            });
            let triggered_by = &mut order[slot].1;
            if !triggered_by.contains(&rule.id) {
                triggered_by.push(rule.id.clone());
            }
        }
    }

    order
}

/// Resolves task ids of the fired rules into ranked task records.
///
/// Ids that resolve to nothing or to an archived task are dropped. The result
/// is ordered by priority, then by library position.
pub(crate) fn rank_tasks(fired: &[&GuidanceRule], library: &Library) -> Vec<ResolvedTask> {
    let mut resolved: Vec<(usize, ResolvedTask)> = accumulate(fired, |r| r.task_ids.as_slice())
        .into_iter()
        .filter_map(|(id, triggered_by)| match library.task(id) {
            Some((position, task)) if task.is_active => Some((
                position,
                ResolvedTask {
                    task: task.clone(),
                    triggered_by,
                },
            )),
            Some(_) => {
                debug!("Dropping archived task '{id}'");
                None
            }
            None => {
                debug!("Dropping unknown task '{id}'");
                None
            }
        })
        .collect();

    resolved.sort_by_key(|(position, r)| (r.task.priority, *position));
    resolved.into_iter().map(|(_, r)| r).collect()
}

/// Resolves tip ids of the fired rules into ranked tip records.
pub(crate) fn rank_tips(fired: &[&GuidanceRule], library: &Library) -> Vec<ResolvedTip> {
    let mut resolved: Vec<(usize, ResolvedTip)> = accumulate(fired, |r| r.tip_ids.as_slice())
        .into_iter()
        .filter_map(|(id, triggered_by)| match library.tip(id) {
            Some((position, tip)) if tip.is_active => Some((
                position,
                ResolvedTip {
                    tip: tip.clone(),
                    triggered_by,
                },
            )),
            Some(_) => {
                debug!("Dropping archived tip '{id}'");
                None
            }
            None => {
                debug!("Dropping unknown tip '{id}'");
                None
            }
        })
        .collect();

    resolved.sort_by_key(|(position, r)| (r.tip.priority, *position));
    resolved.into_iter().map(|(_, r)| r).collect()
}
