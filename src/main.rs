use clap::Parser;
use roshambo::Args;
use roshambo::console::Console;
use roshambo::session::Session;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambo::log(args.level())?;
    let ref mut input = std::io::stdin().lock();
    let ref mut output = std::io::stdout().lock();
    let games = Session::new(args.rounds, args.seed)
        .pin(args.one, args.two)
        .run(&mut Console::new(input, output))?;
    log::info!("played {} games", games);
    Ok(())
}
