fn main() -> anyhow::Result<()> {
    witness_check::runner::run()
}
