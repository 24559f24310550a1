use budget::create_spend_chart;
use replay::Budget;

mod replay;
mod settings;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "envelope={level},budget={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let mut budget = Budget::seed(&settings.categories)?;
    tracing::info!("Loaded {} categories...", budget.categories().len());

    for operation in &settings.operations {
        if !budget.apply(operation)? {
            tracing::warn!("operation refused, insufficient funds: {operation:?}");
        }
    }

    if budget.categories().is_empty() {
        tracing::info!("no categories configured, nothing to report");
        return Ok(());
    }

    for category in budget.categories() {
        println!("{category}\n");
    }

    match create_spend_chart(budget.categories()) {
        Ok(chart) => println!("{chart}"),
        Err(err) => tracing::warn!("spend chart not rendered: {err}"),
    }

    Ok(())
}
