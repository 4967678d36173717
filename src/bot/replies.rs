//! User-facing reply text

use crate::task::View;

const SEPARATOR: &str = "------------------------------";

pub fn help() -> Vec<String> {
    [
        "task me <task> - create a new task for you",
        "task @user <task> - create a new task for user",
        "task list - list your pending tasks",
        "task list @user - list pending tasks for user",
        "task list done - list your done tasks",
        "task list done @user - list done tasks for user",
        "task did <n> - mark your pending task #n as done",
        "task did all - mark all your pending tasks as done",
        "task clear - delete your done tasks",
        "task help - show this help",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

/// A known user's list, one line per task plus a total. An empty list gets a
/// friendly one-liner; it is a normal state, not an error.
pub fn render_list(view: View, tasks: &[String]) -> Vec<String> {
    if tasks.is_empty() {
        return vec![match view {
            View::Pending => "Nothing pending. Enjoy it!".to_string(),
            View::Done => "Nothing marked as done yet.".to_string(),
        }];
    }

    let mut lines: Vec<String> = tasks
        .iter()
        .enumerate()
        .map(|(i, text)| format!("Task #{}: {}", i, text))
        .collect();
    lines.push(SEPARATOR.to_string());
    lines.push(match view {
        View::Pending => format!("Total pending: {}", tasks.len()),
        View::Done => format!("Total done: {}", tasks.len()),
    });
    lines
}

pub fn no_task_list(caller: &str, user: &str) -> String {
    if caller == user {
        "No task list for you yet. Start one with: task me <something>".to_string()
    } else {
        format!("No task list for {} yet.", user)
    }
}

pub fn out_of_range(index: usize, pending: usize) -> String {
    if pending == 0 {
        "You have no pending tasks.".to_string()
    } else {
        format!(
            "No such task #{}. Your pending tasks go from #0 to #{}.",
            index,
            pending - 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list_numbers_from_zero() {
        let lines = render_list(
            View::Pending,
            &["buy milk".to_string(), "walk dog".to_string()],
        );

        assert_eq!(lines[0], "Task #0: buy milk");
        assert_eq!(lines[1], "Task #1: walk dog");
        assert_eq!(lines[2], SEPARATOR);
        assert_eq!(lines[3], "Total pending: 2");
    }

    #[test]
    fn test_render_empty_lists() {
        assert_eq!(render_list(View::Pending, &[]).len(), 1);
        assert_eq!(
            render_list(View::Done, &[]),
            ["Nothing marked as done yet.".to_string()]
        );
    }

    #[test]
    fn test_out_of_range_names_the_last_index() {
        assert_eq!(
            out_of_range(5, 3),
            "No such task #5. Your pending tasks go from #0 to #2."
        );
        assert_eq!(out_of_range(0, 0), "You have no pending tasks.");
    }

    #[test]
    fn test_help_covers_all_ten_commands() {
        assert_eq!(help().len(), 10);
    }
}
