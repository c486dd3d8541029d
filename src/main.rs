use anyhow::Result;

fn main() -> Result<()> {
    mediavault::cli::run()
}
