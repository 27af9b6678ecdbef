use crate::cli::{ExportArgs, ImportArgs};
use crate::context::CliContext;
use crate::output;
use spendlog_domain::export::CSV_MIME_TYPE;
use spendlog_domain::{export_filename, CsvExporter, CsvImporter};

pub fn handle_export(ctx: &CliContext, args: ExportArgs) -> anyhow::Result<()> {
    let expenses = ctx.view(&args.query.to_query(), args.query.sort);

    if args.stdout {
        match CsvExporter::encode(&expenses) {
            Ok(csv) => println!("{}", csv),
            Err(e) => output::output_error(&e.to_string()),
        }
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| {
        let today = chrono::Local::now().date_naive();
        ctx.config.effective_export_dir().join(export_filename(today))
    });
    let rows = match CsvExporter::export_to_file(&expenses, &path) {
        Ok(rows) => rows,
        Err(e) => output::output_error(&format!("Failed to write {}: {}", path.display(), e)),
    };

    output::output_success(serde_json::json!({
        "path": path.display().to_string(),
        "rows": rows,
        "mime_type": CSV_MIME_TYPE,
    }));
    Ok(())
}

pub fn handle_import(ctx: &mut CliContext, args: ImportArgs) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(&args.input)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", args.input.display(), e))?;
    let rows = match CsvImporter::decode(&data) {
        Ok(rows) => rows,
        Err(e) => output::output_error(&e.to_string()),
    };
    let imported = match ctx.import_rows(rows) {
        Ok(imported) => imported,
        Err(e) => output::output_error(&e.to_string()),
    };
    output::output_list(imported);
    Ok(())
}
