//! Project progress calculation.

use crate::models::Task;

/// Percentage of `completed` out of `total`, rounded half up.
///
/// Returns 0 when `total` is 0 so an empty project never divides by zero.
pub fn compute_progress(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    // floor(100 * c / t + 1/2) in integer arithmetic.
    ((200 * completed + total) / (2 * total)) as u8
}

/// Progress over a project's task list.
pub fn progress_of(tasks: &[Task]) -> u8 {
    let completed = tasks.iter().filter(|t| t.is_completed()).count();
    compute_progress(completed, tasks.len())
}
