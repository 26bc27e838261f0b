use clap::Args;
use studyplan_core::{Config, HttpCompletionClient, SuggestionEngine};

#[derive(Args)]
pub struct SuggestArgs {
    /// Topic to build a study plan for
    pub topic: String,
    /// Subject name to scope the suggestion
    #[arg(long, default_value = "General")]
    pub subject: String,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let client = HttpCompletionClient::from_config(&config.completion)?;
    let engine = SuggestionEngine::new(client);

    let runtime = tokio::runtime::Runtime::new()?;
    let interpretation = runtime.block_on(engine.suggest(&args.subject, &args.topic))?;

    if interpretation.is_fallback() {
        eprintln!("note: model response was not structured JSON; showing it as-is");
    }

    let suggestion = interpretation.into_result();
    println!("{}", suggestion.title);
    println!();
    println!("{}", suggestion.study_plan);
    if !suggestion.resources.is_empty() {
        println!();
        println!("Resources:");
        for resource in &suggestion.resources {
            println!("  - {resource}");
        }
    }
    Ok(())
}
