use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use finance_tracker::{SQLiteTransactionStore, Transaction, TransactionStore, initialize_db};

/// A utility for creating a test database for the finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Income and expenses for one month, covering several categories.
const SAMPLE_TRANSACTIONS: [(&str, f64, &str); 6] = [
    ("Salary", 4000.0, "Job"),
    ("Rent", -1500.0, "Housing"),
    ("Groceries", -320.5, "Food"),
    ("Takeaways", -64.0, "Food"),
    ("Power bill", -180.25, "Utilities"),
    ("Side project", 250.0, "Freelance"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");

    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)));
    for (title, amount, category) in SAMPLE_TRANSACTIONS {
        store.create(Transaction::build(title, amount, category))?;
    }

    println!("Success!");

    Ok(())
}
