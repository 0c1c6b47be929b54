use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use peek_guess::input::parse_key;
use peek_guess::{
    play_out, Ending, GameRng, GuessGame, PeerCodec, Phase, Session, SessionUpdate, Settings,
    SolveReport, StreamLink, Verdict, WordList,
};

#[derive(Parser, Debug)]
#[command(name = "peek-guess", version, about = "Guess a word one letter at a time")]
struct Cli {
    /// Settings file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = "peek-guess.toml")]
    config: PathBuf,

    /// Category to play, overriding the settings file.
    #[arg(long, global = true)]
    category: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively: answer y/n, r to restart, q to quit.
    Play {
        /// Also print the lines a peer device would receive.
        #[arg(long)]
        echo_peer: bool,
    },
    /// Act as the peer bridge: button messages on stdin, marker lines on stdout.
    Peer,
    /// Show the questions asked for a target word.
    Solve {
        target: String,
        #[arg(long)]
        json: bool,
    },
    /// Play out targets and print question statistics.
    Report {
        /// Only play this many random targets.
        #[arg(long)]
        sample: Option<usize>,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        json: bool,
    },
    /// List the available categories.
    Categories,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let cli = Cli::parse();
    let mut settings = Settings::load(&cli.config)?;
    if let Some(category) = cli.category {
        settings = settings.with_category(category);
        settings.validate()?;
    }
    let registry = settings.registry()?;
    let words = registry.require(&settings.category)?.clone();
    let codec = settings.codec();
    info!(category = %settings.category, input = ?settings.input, words = words.len(), "loaded word list");

    match cli.command {
        Command::Play { echo_peer } => play(words, codec, echo_peer),
        Command::Peer => bridge(words, codec),
        Command::Solve { target, json } => solve(&words, &target, json),
        Command::Report { sample, seed, json } => report(&words, sample, seed, json),
        Command::Categories => {
            for category in registry.iter() {
                println!("{}\t{}", category.name, category.words.len());
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn play(words: WordList, codec: PeerCodec, echo_peer: bool) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(GuessGame::new(words), codec);
    if echo_peer {
        session.attach(StreamLink::new(io::empty(), io::stdout()))?;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt(&mut session)?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if matches!(line.trim(), "q" | "quit") {
            return Ok(());
        }
        let Some(event) = parse_key(&line) else {
            println!("answer y, n, r or q");
            continue;
        };

        match session.handle(event)? {
            SessionUpdate::Answered(outcome) => println!("{} left", outcome.remaining),
            SessionUpdate::Restarted(_) => println!("restarted"),
            SessionUpdate::Ignored => println!("game over, r to restart"),
        }
    }
}

fn prompt<L: peek_guess::PeerLink>(session: &mut Session<L>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match session.question() {
        Some(letter) => {
            let history = session.game().history();
            if !history.is_empty() {
                writeln!(out, "  {history}")?;
            }
            write!(out, "[{}] {}? ", session.game().candidates().len(), letter)?;
        }
        None => {
            match session.game().phase() {
                Phase::Converged(Verdict::Solved(word)) => writeln!(out, "=> {word}")?,
                Phase::Converged(Verdict::NoMatch) => writeln!(out, "=> no match")?,
                Phase::Asking => writeln!(out, "=> no question available")?,
            }
            write!(out, "r to restart, q to quit: ")?;
        }
    }
    out.flush()
}

fn bridge(words: WordList, codec: PeerCodec) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(GuessGame::new(words), codec);
    session.attach(StreamLink::new(io::stdin().lock(), io::stdout()))?;

    while let Some(update) = session.poll_peer()? {
        if let SessionUpdate::Answered(outcome) = update {
            info!(asked = %outcome.asked, remaining = outcome.remaining, "peer answer");
        }
    }
    Ok(())
}

fn solve(words: &WordList, target: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let trajectory = play_out(words, target)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&trajectory)?);
        return Ok(());
    }

    for (step, left) in trajectory.steps.iter().zip(&trajectory.remaining) {
        let answer = if step.answer { "yes" } else { "no" };
        println!("[{left:>3}] {} -> {answer}", step.letter);
    }
    match &trajectory.ending {
        Ending::Converged(Verdict::Solved(word)) => {
            println!("=> {word} in {} questions", trajectory.question_count())
        }
        Ending::Converged(Verdict::NoMatch) => println!("=> no match"),
        Ending::Stalled(rest) => println!("=> one of: {}", rest.join(", ")),
    }
    Ok(())
}

fn report(words: &WordList, sample: Option<usize>, seed: u64, json: bool) -> Result<(), Box<dyn Error>> {
    let report = match sample {
        Some(count) => SolveReport::sample(words, count, &mut GameRng::new(seed))?,
        None => SolveReport::for_words(words)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for result in &report.targets {
        let mark = if result.found { "" } else { " (unresolved)" };
        println!("{:<16}{}{mark}", result.target, result.questions);
    }
    println!(
        "mean {:.2}, max {}, unresolved {}",
        report.mean_questions, report.max_questions, report.unresolved
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_args() {
        let cli = Cli::parse_from(["peek-guess", "report", "--sample", "3", "--seed", "7"]);
        assert!(matches!(
            cli.command,
            Command::Report { sample: Some(3), seed: 7, json: false }
        ));
        assert_eq!(cli.config, PathBuf::from("peek-guess.toml"));
    }
}
