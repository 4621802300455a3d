use todolane_core::{Priority, Project, Task, Todo};

fn task_with_flags(description: &str, important: bool, urgent: bool) -> Task {
    let mut task = Task::new(description).unwrap();
    task.set_priority(Priority { important, urgent });
    task
}

#[test]
fn classes_yield_in_fixed_order_with_stable_ties() {
    let mut project = Project::new("parent").unwrap();
    project.add(task_with_flags("critical", true, true));
    project.add(task_with_flags("standard-1", false, false));
    project.add(task_with_flags("standard-2", false, false));
    project.add(task_with_flags("urgent", false, true));

    let yielded: Vec<&str> = project
        .prioritized()
        .map(|todo| todo.description())
        .collect();
    assert_eq!(yielded, ["critical", "urgent", "standard-1", "standard-2"]);
}

#[test]
fn important_outranks_urgent() {
    let mut project = Project::new("parent").unwrap();
    project.add(task_with_flags("standard", false, false));
    project.add(task_with_flags("urgent", false, true));
    project.add(task_with_flags("critical", true, true));
    project.add(task_with_flags("important", true, false));

    let yielded: Vec<&str> = project
        .prioritized()
        .map(|todo| todo.description())
        .collect();
    assert_eq!(yielded, ["critical", "important", "urgent", "standard"]);
}

#[test]
fn insertion_order_is_kept_within_one_class() {
    let mut project = Project::new("parent").unwrap();
    project.add(task_with_flags("c1", true, true));
    project.add(task_with_flags("c2", true, true));
    project.add(task_with_flags("s1", false, false));
    project.add(task_with_flags("c3", true, true));

    let yielded: Vec<&str> = project
        .prioritized()
        .map(|todo| todo.description())
        .collect();
    assert_eq!(yielded, ["c1", "c2", "c3", "s1"]);
}

#[test]
fn sub_projects_are_yielded_by_their_own_priority() {
    let mut sub = Project::new("sub").unwrap();
    sub.add(task_with_flags("nested", false, false));

    let mut project = Project::new("parent").unwrap();
    project.add(task_with_flags("critical", true, true));
    project.add(task_with_flags("loose-1", false, false));
    project.add(task_with_flags("loose-2", false, false));
    project.add(sub);

    // The sub-project carries default priority, so it queues with the
    // standard class in insertion order; its own children are not visited.
    let yielded: Vec<&str> = project
        .prioritized()
        .map(|todo| todo.description())
        .collect();
    assert_eq!(yielded, ["critical", "loose-1", "loose-2", "sub"]);
}

#[test]
fn for_loop_traversal_uses_the_prioritized_order() {
    let mut project = Project::new("parent").unwrap();
    project.add(task_with_flags("standard", false, false));
    project.add(task_with_flags("critical", true, true));

    let mut yielded: Vec<String> = Vec::new();
    for todo in &project {
        yielded.push(todo.description().to_string());
    }
    assert_eq!(yielded, ["critical", "standard"]);
}

#[test]
fn independent_iterators_do_not_share_cursors() {
    let mut project = Project::new("parent").unwrap();
    project.add(task_with_flags("a", true, true));
    project.add(task_with_flags("b", false, false));

    let mut first = project.prioritized();
    let mut second = project.prioritized();

    assert_eq!(first.next().map(Todo::description), Some("a"));
    assert_eq!(first.next().map(Todo::description), Some("b"));
    assert_eq!(second.next().map(Todo::description), Some("a"));
    assert_eq!(first.next(), None);
    assert_eq!(second.next().map(Todo::description), Some("b"));
}

#[test]
fn iterator_reports_an_exact_length() {
    let mut project = Project::new("parent").unwrap();
    project.add(task_with_flags("a", true, false));
    project.add(task_with_flags("b", false, true));
    project.add(task_with_flags("c", false, false));

    let mut iter = project.prioritized();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.count(), 2);
}

#[test]
fn fresh_iterator_sees_later_mutations() {
    let mut project = Project::new("parent").unwrap();
    project.add(task_with_flags("old", false, false));
    assert_eq!(project.prioritized().count(), 1);

    project.add(task_with_flags("new", true, true));
    let yielded: Vec<&str> = project
        .prioritized()
        .map(|todo| todo.description())
        .collect();
    assert_eq!(yielded, ["new", "old"]);
}
