use crate::db::log::load_log;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 60;

/// ANSI colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "category_add" => Colour::Green,
        "del" | "category_del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &Store) -> AppResult<()> {
        let entries = load_log(&store.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        // operation and target share one column, capped at 60 chars
        let rendered: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or(e.date);

                let color = color_for_operation(&e.operation);
                let op_target = if e.target.is_empty() {
                    color.paint(truncate(&e.operation, MAX_TARGET_WIDTH)).to_string()
                } else {
                    let rest = truncate(
                        &e.target,
                        MAX_TARGET_WIDTH.saturating_sub(e.operation.len() + 3),
                    );
                    format!("{} ({})", color.paint(e.operation.as_str()), rest)
                };

                (e.id, date, op_target, e.message)
            })
            .collect();

        let id_w = rendered
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, _, op, _)| visible_width(op))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rendered {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&op_target)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
