use article_summarizer::{
    Session,
    client::Summarize,
    config::Config,
    coordinator::RequestState,
};

const USAGE: &str = "Usage: article-summarizer [--length N] [--lang CODE] (<url> | --replay <index>)";

/// Parsed command line: summarize a fresh URL, or replay a history entry by
/// its index in the most-recent-first listing.
#[derive(Debug, PartialEq, Eq, Default)]
struct CliArgs {
    url: Option<String>,
    replay: Option<usize>,
    length: Option<u32>,
    lang: Option<String>,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--length" => {
                    let raw = args.next().ok_or("--length requires a value")?;
                    let length = raw
                        .parse::<u32>()
                        .map_err(|e| format!("Invalid --length: {}", e))?;
                    parsed.length = Some(length);
                }
                "--lang" => {
                    parsed.lang = Some(args.next().ok_or("--lang requires a value")?);
                }
                "--replay" => {
                    let raw = args.next().ok_or("--replay requires an index")?;
                    let index = raw
                        .parse::<usize>()
                        .map_err(|e| format!("Invalid --replay index: {}", e))?;
                    parsed.replay = Some(index);
                }
                _ => parsed.url = Some(arg),
            }
        }
        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration and rehydrate the session
    let config = Config::load()?;
    let mut session = Session::from_config(&config)?;

    let args = CliArgs::parse(std::env::args().skip(1))?;
    if let Some(length) = args.length {
        session.coordinator.set_length(length);
    }
    if let Some(lang) = args.lang {
        session.coordinator.set_lang(lang);
    }

    match (args.replay, args.url) {
        (Some(index), _) => session.replay(index).await?,
        (None, Some(url)) => session.submit(&url).await?,
        (None, None) => {
            print_history(&session);
            eprintln!("{}", USAGE);
            return Ok(());
        }
    }

    match session.coordinator.state() {
        RequestState::Succeeded(record) => {
            println!("{}", record.summary);
        }
        RequestState::Failed(detail) => {
            eprintln!("Well, that wasn't supposed to happen: {}", detail);
            std::process::exit(1);
        }
        _ => {}
    }

    Ok(())
}

fn print_history<C: Summarize>(session: &Session<C>) {
    if session.history.is_empty() {
        println!("No summarized articles yet.");
        return;
    }
    println!("Summarized articles (most recent first):");
    for (index, record) in session.history.all().iter().enumerate() {
        println!("{:3}. [{} paragraphs] {}", index, record.length, record.url);
    }
}
