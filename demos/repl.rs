use autocorrect::{Corrector, Strategy, SuggestConfig, SuggestedCorrection};
use std::{
    env, fs,
    io::{self, Write},
    path::Path,
    process,
};

const MAX_SUGGESTIONS: usize = 5;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let dict_path = args.next().unwrap_or_else(|| "words_100k.txt".into());
    let strategy = match args.next().as_deref() {
        Some("bk_tree") => Strategy::BkTree,
        Some("automaton") | None => Strategy::Automaton,
        Some(other) => {
            eprintln!("Unknown strategy {other:?}, expected bk_tree or automaton");
            process::exit(1);
        }
    };

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {}", dict_path);
        process::exit(1);
    }

    let content = fs::read_to_string(&dict_path)?;
    let words = content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()));
    let config = SuggestConfig {
        strategy,
        limit: MAX_SUGGESTIONS,
    };
    let corrector = match Corrector::from_words(words, config) {
        Ok(corrector) => corrector,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!(
        "Autocorrect REPL - dictionary: {} ({:?})\n:type text, word* to complete, :q to quit",
        dict_path,
        corrector.strategy()
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }

        for token in input.split_whitespace() {
            if let Some(prefix) = token.strip_suffix('*') {
                println!("  {}*  ->  {}", prefix, corrector.complete(prefix).join(", "));
                continue;
            }

            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            match corrector.suggest_single_word_corrections(&word) {
                SuggestedCorrection::NoSuggestions => {}
                SuggestedCorrection::Suggestions(list) => {
                    let suggestions: Vec<_> = list.into_iter().map(|s| s.word).collect();
                    println!("  {}  ->  {}", word, suggestions.join(", "));
                }
            }
        }
    }
    Ok(())
}
