use certrack::commands::Cli;

fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    Cli::menu()
}
