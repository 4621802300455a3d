//! Priority-stratified child traversal.
//!
//! # Responsibility
//! - Yield one project's direct children class by class (`Critical`,
//!   `Important`, `Urgent`, `Standard`), keeping insertion order within each
//!   class.
//!
//! # Invariants
//! - The traversal is a snapshot: per-class target counts are fixed at
//!   construction, and the borrow on the child slice rules out mutation
//!   while a traversal is live.
//! - Each class's cursor only moves forward and is never reset.

use crate::model::priority::PriorityClass;
use crate::model::todo::Todo;

/// Lazy 4-way stable partition over a project's direct children.
///
/// Obtained from [`crate::Project::prioritized`] (or `&Project` via
/// `IntoIterator`). Finite and non-restartable; once exhausted, `next`
/// keeps returning `None`. Any number of instances may traverse the same
/// project independently, each with its own counts and cursors.
#[derive(Debug, Clone)]
pub struct PrioritizedIter<'a> {
    children: &'a [Todo],
    /// Children of each class not yet yielded, indexed by class order.
    remaining: [usize; 4],
    /// Next scan position per class, indexed by class order.
    cursors: [usize; 4],
}

impl<'a> PrioritizedIter<'a> {
    /// Scans the children once to fix the per-class target counts.
    pub fn new(children: &'a [Todo]) -> Self {
        let mut remaining = [0usize; 4];
        for child in children {
            remaining[child.priority().classify() as usize] += 1;
        }
        Self {
            children,
            remaining,
            cursors: [0; 4],
        }
    }
}

impl<'a> Iterator for PrioritizedIter<'a> {
    type Item = &'a Todo;

    fn next(&mut self) -> Option<Self::Item> {
        for class in PriorityClass::ALL {
            let slot = class as usize;
            if self.remaining[slot] == 0 {
                continue;
            }
            while let Some(child) = self.children.get(self.cursors[slot]) {
                self.cursors[slot] += 1;
                if child.priority().classify() == class {
                    self.remaining[slot] -= 1;
                    return Some(child);
                }
            }
            // Counts were taken from this same slice, so a drained cursor
            // with a non-zero count cannot happen.
            unreachable!("class count exceeds matching children");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining.iter().sum();
        (left, Some(left))
    }
}

impl ExactSizeIterator for PrioritizedIter<'_> {}

#[cfg(test)]
mod tests {
    use super::PrioritizedIter;
    use crate::model::priority::Priority;
    use crate::model::task::Task;
    use crate::model::todo::Todo;

    fn task_with_flags(description: &str, important: bool, urgent: bool) -> Todo {
        let mut task = Task::new(description).expect("non-empty description");
        task.set_priority(Priority { important, urgent });
        Todo::Task(task)
    }

    #[test]
    fn empty_children_yield_nothing() {
        let mut iter = PrioritizedIter::new(&[]);
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn classes_come_out_in_fixed_order_with_stable_ties() {
        let children = vec![
            task_with_flags("crit", true, true),
            task_with_flags("std-1", false, false),
            task_with_flags("std-2", false, false),
            task_with_flags("urg", false, true),
        ];
        let yielded: Vec<&str> = PrioritizedIter::new(&children)
            .map(|todo| todo.description())
            .collect();
        assert_eq!(yielded, ["crit", "urg", "std-1", "std-2"]);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let children = vec![task_with_flags("only", false, false)];
        let mut iter = PrioritizedIter::new(&children);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn size_hint_tracks_remaining_exactly() {
        let children = vec![
            task_with_flags("a", true, false),
            task_with_flags("b", false, false),
            task_with_flags("c", false, true),
        ];
        let mut iter = PrioritizedIter::new(&children);
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 0);
    }
}
