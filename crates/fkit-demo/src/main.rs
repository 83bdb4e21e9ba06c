#![forbid(unsafe_code)]

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fkit_demo::run_from_env()?;
    Ok(())
}
