//! External resources matched to resolved tasks.

use std::collections::HashSet;

use crate::{
    engine::ResolvedTask,
    models::{ExternalResource, SubscriptionTier},
};

/// Active resources linked to any of `tasks` and unlocked for `tier`.
///
/// A resource is linked when a task lists it in `relatedResourceIds` or the
/// resource lists the task in `relatedTaskIds`. Results keep directory order
/// and appear once each.
pub fn match_resources<'a>(
    tasks: &[ResolvedTask],
    resources: &'a [ExternalResource],
    tier: SubscriptionTier,
) -> Vec<&'a ExternalResource> {
    let task_ids: HashSet<&str> = tasks.iter().map(|r| r.task.id.as_str()).collect();
    let linked_ids: HashSet<&str> = tasks
        .iter()
        .flat_map(|r| r.task.related_resource_ids.iter().map(String::as_str))
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    resources
        .iter()
        .filter(|resource| resource.available_to(tier))
        .filter(|resource| {
            linked_ids.contains(resource.id.as_str())
                || resource
                    .related_task_ids
                    .iter()
                    .any(|id| task_ids.contains(id.as_str()))
        })
        .filter(|resource| seen.insert(resource.id.as_str()))
        .collect()
}
