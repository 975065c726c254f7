fn main() -> anyhow::Result<()> {
    case_search::cli::run()
}
