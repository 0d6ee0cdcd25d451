//! Integration tests for board state transitions

use focusboard_kanban::{
    task::{AddTask, DeleteTask, MoveTask, ReorderTask, UpdateTask},
    BoardContext, BoardEvent, Execute, Priority, TaskId,
};

/// Every task's column must hold its id exactly once, and every listed id
/// must resolve to a task
fn assert_board_invariants(ctx: &BoardContext) {
    for task in ctx.tasks() {
        let holders: Vec<_> = ctx
            .columns()
            .iter()
            .filter(|c| c.contains(&task.id))
            .collect();
        assert_eq!(
            holders.len(),
            1,
            "task {} appears in {} columns",
            task.id,
            holders.len()
        );
        assert_eq!(
            holders[0].id, task.column,
            "task {} recorded in '{}' but listed in '{}'",
            task.id, task.column, holders[0].id
        );
        let occurrences = holders[0]
            .task_ids
            .iter()
            .filter(|id| **id == task.id)
            .count();
        assert_eq!(occurrences, 1, "task {} listed {} times", task.id, occurrences);
    }

    for column in ctx.columns() {
        for id in &column.task_ids {
            assert!(
                ctx.task(id).is_some(),
                "column '{}' references unknown task {}",
                column.id,
                id
            );
        }
    }
}

#[test]
fn test_invariant_holds_across_an_editing_session() {
    let mut ctx = BoardContext::in_memory();

    let a = AddTask::new("a", "todo").execute(&mut ctx).unwrap().id;
    let b = AddTask::new("b", "todo").execute(&mut ctx).unwrap().id;
    let c = AddTask::new("c", "in-progress").execute(&mut ctx).unwrap().id;
    assert_board_invariants(&ctx);

    MoveTask::to_front(a.clone(), "todo", "review")
        .execute(&mut ctx)
        .unwrap();
    assert_board_invariants(&ctx);

    MoveTask::new(c.clone(), "in-progress", "review", 1)
        .execute(&mut ctx)
        .unwrap();
    assert_board_invariants(&ctx);

    ReorderTask::new("review", 0, 1).execute(&mut ctx).unwrap();
    assert_board_invariants(&ctx);

    UpdateTask::new(b.clone())
        .with_priority(Priority::High)
        .execute(&mut ctx)
        .unwrap();
    assert_board_invariants(&ctx);

    DeleteTask::new(c).execute(&mut ctx).unwrap();
    assert_board_invariants(&ctx);

    // A degenerate same-column move keeps the invariant too
    MoveTask::new(b.clone(), "todo", "todo", 0)
        .execute(&mut ctx)
        .unwrap();
    assert_board_invariants(&ctx);
}

#[test]
fn test_move_there_and_back_restores_membership() {
    let mut ctx = BoardContext::in_memory();
    let x = AddTask::new("x", "todo").execute(&mut ctx).unwrap().id;
    let t = AddTask::new("t", "todo").execute(&mut ctx).unwrap().id;

    MoveTask::to_front(t.clone(), "todo", "done")
        .execute(&mut ctx)
        .unwrap();
    MoveTask::to_front(t.clone(), "done", "todo")
        .execute(&mut ctx)
        .unwrap();

    assert_eq!(ctx.task(&t).unwrap().column.as_str(), "todo");
    assert_eq!(ctx.column(&"todo".into()).unwrap().task_ids, vec![t, x]);
    assert!(ctx.column(&"done".into()).unwrap().task_ids.is_empty());
    assert_board_invariants(&ctx);
}

#[test]
fn test_reorder_literal_case() {
    let mut ctx = BoardContext::in_memory();
    let ids: Vec<TaskId> = ["a", "b", "c", "d"]
        .iter()
        .map(|t| AddTask::new(*t, "todo").execute(&mut ctx).unwrap().id)
        .collect();

    ReorderTask::new("todo", 0, 2).execute(&mut ctx).unwrap();

    assert_eq!(
        ctx.column(&"todo".into()).unwrap().task_ids,
        vec![ids[1].clone(), ids[2].clone(), ids[0].clone(), ids[3].clone()]
    );
}

#[test]
fn test_add_appends_to_the_target_column() {
    let mut ctx = BoardContext::in_memory();
    let x = AddTask::new("x", "todo").execute(&mut ctx).unwrap().id;
    let y = AddTask::new("y", "todo").execute(&mut ctx).unwrap().id;

    let new = AddTask::new("new", "todo").execute(&mut ctx).unwrap().id;

    assert_eq!(
        ctx.column(&"todo".into()).unwrap().task_ids,
        vec![x, y, new]
    );
}

#[test]
fn test_delete_removes_task_and_every_reference() {
    let mut ctx = BoardContext::in_memory();
    let t = AddTask::new("t", "todo").execute(&mut ctx).unwrap().id;
    MoveTask::to_front(t.clone(), "todo", "review")
        .execute(&mut ctx)
        .unwrap();

    DeleteTask::new(t.clone()).execute(&mut ctx).unwrap();

    assert!(ctx.task(&t).is_none());
    for column in ctx.columns() {
        assert!(!column.contains(&t));
    }
}

#[test]
fn test_events_mirror_the_mutation_sequence() {
    let mut ctx = BoardContext::in_memory();
    let rx = ctx.subscribe();

    let t = AddTask::new("t", "todo").execute(&mut ctx).unwrap().id;
    UpdateTask::new(t.clone())
        .with_title("renamed")
        .execute(&mut ctx)
        .unwrap();
    MoveTask::to_front(t.clone(), "todo", "done")
        .execute(&mut ctx)
        .unwrap();
    DeleteTask::new(t.clone()).execute(&mut ctx).unwrap();

    let events: Vec<BoardEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            BoardEvent::TaskAdded { id: t.clone() },
            BoardEvent::TaskUpdated { id: t.clone() },
            BoardEvent::TaskMoved {
                id: t.clone(),
                from: "todo".into(),
                to: "done".into(),
            },
            BoardEvent::TaskDeleted { id: t },
        ]
    );
}
