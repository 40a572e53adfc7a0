use cartsum::prelude::*;

/// Store API endpoints and default database for this entry point
const CARTS_URL: &str = "https://fakestoreapi.com/carts";
const PRODUCTS_URL: &str = "https://fakestoreapi.com/products";
const DEFAULT_DATABASE: &str = "user_cart_data.db";

#[tokio::main]
async fn main() {
    let database = match parse_args(std::env::args().collect()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("cartsum-db: {e}");
            std::process::exit(2);
        }
    };

    CliApp::new("cartsum-db").run(run_pipeline(database)).await
}

/// Accept an optional database path; anything more is a usage error
fn parse_args(args: Vec<String>) -> Result<String, AppError> {
    match args.len() {
        1 => Ok(DEFAULT_DATABASE.to_string()),
        2 => Ok(args[1].clone()),
        _ => Err(AppError::InvalidArguments(
            "usage: cartsum-db [store.db]".to_string(),
        )),
    }
}

/// Page through the cart feed, fetch products concurrently, replace the
/// summary table in the database
async fn run_pipeline(database: String) -> Result<(), AppError> {
    let source = HttpSource::new(CARTS_URL, PRODUCTS_URL)?.with_pagination();
    let pipeline = CartPipeline::new(source);

    let mut sink = SqliteSink::open(&database)?;
    let rows = pipeline.run(&mut sink).await?;

    tracing::info!(rows, database = %database, "run complete");
    Ok(())
}
