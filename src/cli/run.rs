use crate::prelude::{
    AppError, Contact, ContactStore,
    command::{Cli, Commands},
};
use clap::Parser;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut storage = ContactStore::new();

    // A missing or unreadable file is not fatal: start from an empty book.
    if let Err(e) = storage.load(&cli.file) {
        eprintln!("Failed to load contacts from file: {e}");
    }

    let mutates = cli.command.mutates();

    match cli.command {
        Commands::Add { name, phone, email } => {
            let new_contact = Contact::new(name, phone, email.unwrap_or_default())?;
            storage.add(new_contact);
            println!("Contact added successfully.");
        }

        Commands::Remove { name } => {
            if storage.remove(&name) {
                println!("Contact removed successfully.");
            } else {
                println!("Contact not found.");
            }
        }

        Commands::Search { name } => {
            let results = storage.search(&name);

            if results.is_empty() {
                println!("No contacts found.");
            }
            print_contacts(&results);
        }

        Commands::List => {
            if storage.is_empty() {
                println!("Address book is empty.");
            }
            print_contacts(&storage.list_all().iter().collect::<Vec<&Contact>>());
        }

        Commands::Import { src } => {
            let total = storage.import_csv(&src)?;
            println!("Successfully imported {} contacts from {:?}.", total, src);
        }

        Commands::Export { des } => {
            let (path, total) = storage.export_csv(&des)?;
            println!("Successfully exported {} contacts to {:?}.", total, path);
        }
    }

    if mutates {
        storage.save(&cli.file).inspect_err(|e| {
            eprintln!("Failed to save contacts: {e}");
        })?;
    }

    Ok(())
}

pub fn listing_format(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:15} {:<30}",
        contact.name(),
        contact.phone(),
        contact.email()
    )
}

fn print_contacts(contacts: &[&Contact]) {
    for (i, c) in contacts.iter().enumerate() {
        println!("{}", listing_format(i + 1, c));
    }
}
