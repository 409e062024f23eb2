use address_book::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    run_app()
}
