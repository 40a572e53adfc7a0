use cartsum::prelude::*;

/// Store API endpoints and default output for this entry point
const CARTS_URL: &str = "https://fakestoreapi.com/carts";
const PRODUCTS_URL: &str = "https://fakestoreapi.com/products";
const DEFAULT_OUTPUT: &str = "user_cart_data.csv";

#[tokio::main]
async fn main() {
    let output = match parse_args(std::env::args().collect()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("cartsum: {e}");
            std::process::exit(2);
        }
    };

    CliApp::new("cartsum").run(run_pipeline(output)).await
}

/// Accept an optional output path; anything more is a usage error
fn parse_args(args: Vec<String>) -> Result<String, AppError> {
    match args.len() {
        1 => Ok(DEFAULT_OUTPUT.to_string()),
        2 => Ok(args[1].clone()),
        _ => Err(AppError::InvalidArguments(
            "usage: cartsum [output.csv]".to_string(),
        )),
    }
}

/// Fetch both collections, aggregate, and write the summary file
async fn run_pipeline(output: String) -> Result<(), AppError> {
    let source = HttpSource::new(CARTS_URL, PRODUCTS_URL)?;
    let pipeline = CartPipeline::new(source);

    let mut sink = CsvSink::new(&output);
    let rows = pipeline.run(&mut sink).await?;

    tracing::info!(rows, output = %output, "run complete");
    Ok(())
}
