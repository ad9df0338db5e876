//! copydrive: compile copy configuration into prompt context and generate
//! system prompts for the CopyDrive workspaces.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod server;

use std::io::Read;

pub use app::{
    AppContext, CompiledContext, GenerateRequest, GeneratedSystemPrompt, compile_context,
    generate_system_prompt,
};
pub use domain::AppError;

/// Run the HTTP service until shutdown.
pub async fn serve(host: &str, port: u16) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = domain::AppConfig::from_env()?;
    if config.llm_api_key.is_none() {
        tracing::warn!(
            "{} not set; generation requests will fail until it is configured",
            domain::LLM_API_KEY_ENV,
        );
    }

    server::run(config, host, port).await
}

/// Compile a request body offline and print the result to stdout.
pub fn compile(input: &str, hash_only: bool) -> Result<(), AppError> {
    let raw = read_input(input)?;
    let request: GenerateRequest = serde_json::from_str(&raw).map_err(|e| AppError::Parse {
        what: "request body".to_string(),
        details: e.to_string(),
    })?;

    let compiled = compile_context(&request);
    if compiled.is_empty() {
        return Err(AppError::EmptyContext);
    }

    if hash_only {
        println!("{}", compiled.context_hash);
    } else {
        println!("{}", compiled.combined());
        println!();
        println!("context hash: {}", compiled.context_hash);
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String, AppError> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
