use crate::cli::{AddArgs, ListArgs};
use crate::context::CliContext;
use crate::output;
use spendlog_domain::{is_known_category, summary, ExpenseId, NewExpense, KNOWN_CATEGORIES};

pub fn handle_add(ctx: &mut CliContext, args: AddArgs) -> anyhow::Result<()> {
    let date = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut input = NewExpense::new(args.amount, args.category, date);
    input.description = args.description;

    if !is_known_category(input.category.trim()) {
        tracing::warn!("'{}' is not one of the built-in categories", input.category);
    }

    match ctx.add_expense(input) {
        Ok(expense) => {
            tracing::info!(
                "{}{} for {} has been logged",
                ctx.config.effective_currency_symbol(),
                expense.amount,
                expense.category
            );
            output::output_success(&expense);
        }
        Err(e) => output::output_error(&e.to_string()),
    }
    Ok(())
}

pub fn handle_delete(ctx: &mut CliContext, id: String) -> anyhow::Result<()> {
    let id = ExpenseId::new(id);
    match ctx.delete_expense(&id) {
        Ok(deleted) => output::output_success(serde_json::json!({
            "deleted": deleted,
            "id": id.to_string(),
        })),
        Err(e) => output::output_error(&e.to_string()),
    }
    Ok(())
}

pub fn handle_list(ctx: &CliContext, args: ListArgs) -> anyhow::Result<()> {
    let expenses = ctx.view(&args.query.to_query(), args.query.sort);
    let total = summary::total(&expenses);
    output::output_list_with_total(expenses, total);
    Ok(())
}

pub fn handle_categories(ctx: &CliContext, known: bool) -> anyhow::Result<()> {
    if known {
        output::output_list(KNOWN_CATEGORIES.to_vec());
    } else {
        output::output_list(ctx.categories());
    }
    Ok(())
}
