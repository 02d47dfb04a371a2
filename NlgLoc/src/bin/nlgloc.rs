fn main() -> anyhow::Result<()> {
    nlgloc::cli::run_cli()
}
