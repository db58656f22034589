use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use kanaquiz::backend::{Direction, QuizBackend, VocabularyTranslator};
use kanaquiz::deck::DeckLibrary;
use kanaquiz::keycode::KeyMap;
use kanaquiz::layout::LayoutRegistry;
use kanaquiz::numbers::{decimal_to_kana, integer_to_kana, Weekday};
use kanaquiz::question::TranslationDirection;
use kanaquiz::session::{QuizCategory, QuizSession};
use kanaquiz::vocab::VocabularyStore;

#[derive(Parser)]
#[command(name = "quiztool", about = "Kanaquiz study diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the decks stored in a user directory
    Decks {
        /// Path to the user data directory
        user_dir: String,
    },

    /// Translate free text against the vocabulary database
    Translate {
        /// Path to the staged database directory
        database_dir: String,
        /// Text to translate (kana by default)
        text: String,
        /// Treat the input as English and answer in kana
        #[arg(long)]
        from_english: bool,
    },

    /// Print the kana reading of a number or weekday
    Reading {
        /// An integer, a decimal, or an English weekday name
        value: String,
    },

    /// Run a quiz round on stdin
    Ask {
        /// Path to the staged database directory
        database_dir: String,
        /// Quiz category: hiragana, katakana, kana, integers, decimals,
        /// vocabulary
        category: String,
        /// Path to the user data directory (enables deck categories)
        #[arg(long)]
        user_dir: Option<String>,
        /// Quiz a stored deck by id instead of the whole database
        #[arg(long)]
        deck: Option<u32>,
        /// Vocabulary direction: e2k, k2e, mixed
        #[arg(long, default_value = "mixed")]
        direction: String,
        /// Maximum number of questions to ask
        #[arg(short, long, default_value = "10")]
        n: usize,
    },
}

fn open_backend(database_dir: &str, user_dir: Option<&str>) -> Arc<dyn QuizBackend> {
    let store = VocabularyStore::load_database(Path::new(database_dir)).unwrap_or_else(|e| {
        eprintln!("Failed to load vocabulary database at {}: {}", database_dir, e);
        process::exit(1);
    });
    let decks = user_dir.map(DeckLibrary::new);
    Arc::new(VocabularyTranslator::new(Arc::new(store), decks))
}

fn parse_category(name: &str, deck: Option<u32>) -> QuizCategory {
    if let Some(id) = deck {
        return QuizCategory::VocabularyDeck(id);
    }
    match name {
        "hiragana" => QuizCategory::Hiragana,
        "katakana" => QuizCategory::Katakana,
        "kana" => QuizCategory::Kana,
        "integers" => QuizCategory::IntegerNumbers,
        "decimals" => QuizCategory::FloatingPointNumbers,
        "vocabulary" => QuizCategory::VocabularyDefault,
        other => {
            eprintln!("Unknown category: {}", other);
            process::exit(1);
        }
    }
}

fn parse_direction(name: &str) -> TranslationDirection {
    match name {
        "e2k" => TranslationDirection::EnglishToKana,
        "k2e" => TranslationDirection::KanaToEnglish,
        "mixed" => TranslationDirection::Mixed,
        other => {
            eprintln!("Unknown direction: {}", other);
            process::exit(1);
        }
    }
}

fn parse_reading(value: &str) -> Option<String> {
    if let Ok(n) = value.parse::<u64>() {
        return Some(integer_to_kana(n));
    }
    if let Some((int_part, fraction)) = value.split_once('.') {
        if let Ok(n) = int_part.parse::<u64>() {
            if fraction.chars().all(|c| c.is_ascii_digit()) {
                return Some(decimal_to_kana(n, fraction));
            }
        }
        return None;
    }
    Weekday::ALL
        .iter()
        .find(|day| day.english().eq_ignore_ascii_case(value))
        .map(|day| day.kana().to_string())
}

fn run_round(mut session: QuizSession, max_questions: usize) {
    let stdin = io::stdin();
    let mut correct = 0usize;
    let mut asked = 0usize;

    while asked < max_questions {
        let Some(prompt) = session.prompt() else {
            break;
        };
        print!("{} > ", prompt);
        io::stdout().flush().unwrap_or_else(|e| {
            eprintln!("Failed to flush stdout: {}", e);
            process::exit(1);
        });

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read answer: {}", e);
                process::exit(1);
            }
        }

        // Feed the typed answer through the key router, as the on-screen
        // keyboard would.
        for ch in line.trim_end_matches('\n').chars() {
            session.handle_key(ch as u32);
        }

        asked += 1;
        if session.submit() {
            correct += 1;
            println!("  correct");
        } else {
            println!("  wrong");
        }

        if session.advance().is_none() {
            break;
        }
    }

    println!();
    println!("{}/{} correct", correct, asked);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Decks { user_dir } => {
            let library = DeckLibrary::new(&user_dir);
            let names = library.list().unwrap_or_else(|e| {
                eprintln!("Failed to list decks in {}: {}", user_dir, e);
                process::exit(1);
            });
            for (id, name) in names.iter().enumerate() {
                let deck = library.load(name).unwrap_or_else(|e| {
                    eprintln!("Failed to load deck {}: {}", name, e);
                    process::exit(1);
                });
                println!("{:>3}  {} ({} cards)", id, name, deck.len());
            }
        }

        Command::Translate {
            database_dir,
            text,
            from_english,
        } => {
            let backend = open_backend(&database_dir, None);
            let direction = if from_english {
                Direction::EnglishToKana
            } else {
                Direction::KanaToEnglish
            };
            match backend.translate_free_text(&text, direction) {
                Ok(result) => println!("{}", result),
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }

        Command::Reading { value } => match parse_reading(&value) {
            Some(reading) => println!("{}", reading),
            None => {
                eprintln!("Not a number or weekday: {}", value);
                process::exit(1);
            }
        },

        Command::Ask {
            database_dir,
            category,
            user_dir,
            deck,
            direction,
            n,
        } => {
            let backend = open_backend(&database_dir, user_dir.as_deref());
            let session = QuizSession::new(
                parse_category(&category, deck),
                parse_direction(&direction),
                LayoutRegistry::default(),
                KeyMap::default(),
                backend,
            )
            .unwrap_or_else(|e| {
                eprintln!("Failed to start quiz: {}", e);
                process::exit(1);
            });
            run_round(session, n);
        }
    }
}
