//! Column management rules.
//!
//! Pure functions over the column list. Each returns the new list, or
//! `None` when the operation is refused or changes nothing, so the
//! settings store only persists real changes. These rules are what keep
//! task statuses and columns consistent; the settings store itself does
//! no validation.

use focusboard_core::SlugCollisionPolicy;

use crate::column::{slugify, Column};

/// Rewrite `order` as 0..N-1 following the current vector order.
pub fn renumber(columns: &mut [Column]) {
    for (index, column) in columns.iter_mut().enumerate() {
        column.order = index as i32;
    }
}

fn slug_taken(columns: &[Column], slug: &str, except_id: Option<&str>) -> bool {
    columns
        .iter()
        .any(|c| c.status == slug && Some(c.id.as_str()) != except_id)
}

/// Append a column named `name` at the end of the board.
///
/// Refused when the trimmed name is empty, or when `policy` rejects a
/// status that another column already uses.
pub fn add_column(
    columns: &[Column],
    name: &str,
    policy: SlugCollisionPolicy,
) -> Option<(Vec<Column>, Column)> {
    if name.trim().is_empty() {
        return None;
    }
    let column = Column::new(name, columns.len() as i32);
    if policy == SlugCollisionPolicy::Reject && slug_taken(columns, &column.status, None) {
        tracing::debug!("Refusing column '{}': status taken", column.name);
        return None;
    }
    let mut updated = columns.to_vec();
    updated.push(column.clone());
    Some((updated, column))
}

/// Remove a column and renumber the rest densely.
///
/// The last remaining column can never be deleted.
pub fn delete_column(columns: &[Column], column_id: &str) -> Option<Vec<Column>> {
    if columns.len() <= 1 || !columns.iter().any(|c| c.id == column_id) {
        return None;
    }
    let mut updated: Vec<Column> = columns
        .iter()
        .filter(|c| c.id != column_id)
        .cloned()
        .collect();
    renumber(&mut updated);
    Some(updated)
}

/// Rename a column and recompute its status slug.
///
/// Tasks carrying the old status are not migrated.
pub fn rename_column(
    columns: &[Column],
    column_id: &str,
    name: &str,
    policy: SlugCollisionPolicy,
) -> Option<Vec<Column>> {
    if name.trim().is_empty() {
        return None;
    }
    let index = columns.iter().position(|c| c.id == column_id)?;
    if policy == SlugCollisionPolicy::Reject && slug_taken(columns, &slugify(name), Some(column_id))
    {
        tracing::debug!("Refusing rename to '{}': status taken", name.trim());
        return None;
    }
    let mut updated = columns.to_vec();
    updated[index].rename(name);
    Some(updated)
}

/// Drop `dragged_id` onto `target_id`: take the dragged column out of its
/// position, insert it at the target's former index, then renumber.
pub fn reorder_columns(
    columns: &[Column],
    dragged_id: &str,
    target_id: &str,
) -> Option<Vec<Column>> {
    if dragged_id == target_id {
        return None;
    }
    let dragged_index = columns.iter().position(|c| c.id == dragged_id)?;
    let target_index = columns.iter().position(|c| c.id == target_id)?;

    let mut updated = columns.to_vec();
    let dragged = updated.remove(dragged_index);
    updated.insert(target_index, dragged);
    renumber(&mut updated);
    Some(updated)
}

/// Flip the completion flag. Existing tasks keep their `completed_at`.
pub fn toggle_completion(columns: &[Column], column_id: &str) -> Option<Vec<Column>> {
    let index = columns.iter().position(|c| c.id == column_id)?;
    let mut updated = columns.to_vec();
    let flag = !updated[index].is_completion();
    updated[index].is_completion_column = Some(flag);
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::default_columns;

    fn ids(columns: &[Column]) -> Vec<&str> {
        columns.iter().map(|c| c.id.as_str()).collect()
    }

    fn orders(columns: &[Column]) -> Vec<i32> {
        columns.iter().map(|c| c.order).collect()
    }

    #[test]
    fn test_add_appends_with_next_order() {
        let (updated, column) =
            add_column(&default_columns(), "  In Review ", SlugCollisionPolicy::Allow).unwrap();
        assert_eq!(updated.len(), 4);
        assert_eq!(column.order, 3);
        assert_eq!(column.status, "in-review");
        assert_eq!(column.name, "In Review");
        assert_eq!(updated.last().unwrap(), &column);
    }

    #[test]
    fn test_add_blank_name_refused() {
        assert!(add_column(&default_columns(), "   ", SlugCollisionPolicy::Allow).is_none());
    }

    #[test]
    fn test_add_collision_by_policy() {
        let columns = default_columns();
        assert!(add_column(&columns, "Done", SlugCollisionPolicy::Allow).is_some());
        assert!(add_column(&columns, "Done", SlugCollisionPolicy::Reject).is_none());
    }

    #[test]
    fn test_delete_renumbers_densely() {
        let updated = delete_column(&default_columns(), "todo").unwrap();
        assert_eq!(ids(&updated), vec!["doing", "done"]);
        assert_eq!(orders(&updated), vec![0, 1]);
    }

    #[test]
    fn test_delete_last_column_refused() {
        let single = vec![Column::builtin("todo", "Todo", 0)];
        assert!(delete_column(&single, "todo").is_none());
    }

    #[test]
    fn test_delete_unknown_refused() {
        assert!(delete_column(&default_columns(), "nope").is_none());
    }

    #[test]
    fn test_rename_slug() {
        let updated =
            rename_column(&default_columns(), "doing", "My Stuff", SlugCollisionPolicy::Allow)
                .unwrap();
        assert_eq!(updated[1].status, "my-stuff");
        assert_eq!(updated[1].name, "My Stuff");
    }

    #[test]
    fn test_rename_collision_by_policy() {
        let columns = default_columns();
        let merged = rename_column(&columns, "doing", "Done", SlugCollisionPolicy::Allow).unwrap();
        assert_eq!(merged.iter().filter(|c| c.status == "done").count(), 2);

        assert!(rename_column(&columns, "doing", "Done", SlugCollisionPolicy::Reject).is_none());
        // Renaming a column to its own slug is not a collision
        assert!(rename_column(&columns, "done", "DONE", SlugCollisionPolicy::Reject).is_some());
    }

    #[test]
    fn test_reorder_moves_forward() {
        let updated = reorder_columns(&default_columns(), "todo", "done").unwrap();
        assert_eq!(ids(&updated), vec!["doing", "done", "todo"]);
        assert_eq!(orders(&updated), vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_moves_backward() {
        let updated = reorder_columns(&default_columns(), "done", "todo").unwrap();
        assert_eq!(ids(&updated), vec!["done", "todo", "doing"]);
        assert_eq!(orders(&updated), vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_onto_self_is_noop() {
        assert!(reorder_columns(&default_columns(), "todo", "todo").is_none());
        assert!(reorder_columns(&default_columns(), "todo", "ghost").is_none());
    }

    #[test]
    fn test_toggle_completion_flips() {
        let once = toggle_completion(&default_columns(), "done").unwrap();
        assert!(once[2].is_completion());
        let twice = toggle_completion(&once, "done").unwrap();
        assert!(!twice[2].is_completion());
    }
}
